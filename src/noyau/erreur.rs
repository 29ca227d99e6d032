// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - ErreurCalcul     : erreurs de DOMAINE (entrée hors du domaine de l’opération)
// - ErreurOperation  : nom d’opération inconnu (dispatch par nom)
// - ErreurEvaluation : dispatch générique (mauvais nombre d’opérandes, ou domaine)
//
// Les messages Display de ErreurCalcul sont le texte contractuel affiché à l’utilisateur.

use thiserror::Error;

use super::operation::Operation;

/// Résultat d’une opération du noyau.
pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;

/// Échec de validité de domaine. Jamais une panique, toujours une valeur de retour.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErreurCalcul {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Square root of negative number is not allowed.")]
    NegativeRadicand,

    #[error("Logarithm of non-positive number is not allowed.")]
    NonPositiveLogArgument,

    #[error("Logarithm base must be positive and not equal to one.")]
    InvalidLogBase,

    #[error("Tangent of this angle is undefined.")]
    UndefinedTangent,
}

impl ErreurCalcul {
    /// Forme “sentinelle” historique : `Error: <message>`.
    pub fn sentinelle(&self) -> String {
        format!("Error: {self}")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurOperation {
    #[error("opération inconnue : {0:?}")]
    Inconnue(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurEvaluation {
    #[error("{op} attend {attendu} opérande(s), reçu {recu}")]
    Arite {
        op: Operation,
        attendu: &'static str,
        recu: usize,
    },

    #[error(transparent)]
    Domaine(#[from] ErreurCalcul),
}

impl ErreurEvaluation {
    /// Erreur de domaine sous-jacente, si c’en est une.
    pub fn domaine(&self) -> Option<ErreurCalcul> {
        match self {
            ErreurEvaluation::Domaine(e) => Some(*e),
            ErreurEvaluation::Arite { .. } => None,
        }
    }
}
