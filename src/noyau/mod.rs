//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - calculatrice.rs : opérations (add … radians_to_degrees) + dispatch `evaluer`
//! - operation.rs    : enum Operation (nom, symbole, arité)
//! - trig.rs         : sin/cos/tan + détection des pôles de tan
//! - erreur.rs       : erreurs de domaine / d’évaluation
//! - reglages.rs     : base de log par défaut, marge des pôles
//! - format.rs       : affichage borné des résultats

pub mod calculatrice;
pub mod erreur;
pub mod format;
pub mod operation;
pub mod reglages;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use calculatrice::Calculatrice;
pub use erreur::{ErreurCalcul, ErreurEvaluation, ErreurOperation, Resultat};
pub use format::{formater_nombre, formater_resultat};
pub use operation::{Arite, Operation};
pub use reglages::Reglages;
