//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (opérandes saisies, résultat, erreur, digits)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici.
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_sci::noyau::format::DIGITS_MAX;
use calculatrice_sci::noyau::Operation;

/// Chiffres après la virgule par défaut.
const DIGITS_DEFAUT: usize = 10;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrées utilisateur ---
    pub operande_a: String,
    pub operande_b: String, // second opérande, ou base du logarithme (vide => 10)

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub derniere: Option<Operation>, // opération qui a produit `resultat`

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    pub focus_a: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            operande_a: String::new(),
            operande_b: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            derniere: None,
            digits: DIGITS_DEFAUT,
            focus_a: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.clear_entrees();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
    }

    /// C : effacer seulement les opérandes.
    pub fn clear_entrees(&mut self) {
        self.operande_a.clear();
        self.operande_b.clear();
        self.focus_a = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher aux opérandes).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.derniere = None;
        self.focus_a = true;
    }

    /// On CONSERVE `resultat` (dernier résultat valide) pour ne pas “effacer l’écran”.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_a = true;
    }

    pub fn set_resultat(&mut self, op: Operation, resultat: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.derniere = Some(op);
        self.focus_a = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    /// Réinjecte le résultat affiché comme opérande A (enchaînement de calculs).
    pub fn reprendre_resultat(&mut self) {
        if !self.resultat.is_empty() {
            self.operande_a = self.resultat.clone();
            self.focus_a = true;
        }
    }
}
