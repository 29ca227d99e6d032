// src/noyau/format.rs
//
// Affichage des résultats (nombre borné en chiffres, ou message d’erreur)

use num_traits::Float;

use super::erreur::ErreurEvaluation;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DIGITS_MAX: usize = 17;

/// `v` avec au plus `digits` décimales, zéros finaux retirés.
///
/// - `-0` s’affiche `0`
/// - ±∞ s’affiche `∞` / `-∞`
pub fn formater_nombre<T: Float>(v: T, digits: usize) -> String {
    let v = v.to_f64().unwrap_or(f64::NAN);

    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let digits = digits.min(DIGITS_MAX);
    let mut s = format!("{v:.digits$}");

    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Résultat d’une évaluation : le nombre formaté, sinon `Error: <message>` pour une
/// erreur de domaine (le message seul pour une erreur d’arité).
pub fn formater_resultat<T: Float>(r: &Result<T, ErreurEvaluation>, digits: usize) -> String {
    match r {
        Ok(v) => formater_nombre(*v, digits),
        Err(e) => match e.domaine() {
            Some(d) => d.sentinelle(),
            None => e.to_string(),
        },
    }
}
