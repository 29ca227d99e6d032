// src/noyau/trig.rs
//
// Trig flottante pour sin/cos/tan
// -------------------------------
// - sin/cos : toujours définis (NaN/∞ suivent la plateforme)
// - tan     : indéfini aux pôles (multiples impairs de π/2) et pour un angle infini
//
// La plateforme ne “faute” jamais : tan(π/2) rend ~1.6e16. La faute est donc détectée
// ici, à la frontière de l’appel trig, via |cos x|.

use num_traits::Float;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome<T> {
    Valeur(T),
    Indefini,
}

/// Évalue `f(x)` (x en radians).
///
/// `marge_pole` : voir `Reglages::marge_pole`.
pub fn trig<T: Float>(x: T, f: TrigFn, marge_pole: T) -> TrigOutcome<T> {
    match f {
        TrigFn::Sin => TrigOutcome::Valeur(x.sin()),
        TrigFn::Cos => TrigOutcome::Valeur(x.cos()),
        TrigFn::Tan => {
            if x.is_nan() {
                return TrigOutcome::Valeur(x);
            }
            if x.is_infinite() || est_pole(x, marge_pole) {
                return TrigOutcome::Indefini;
            }
            TrigOutcome::Valeur(x.tan())
        }
    }
}

/// Un flottant proche d’un pôle en est à au plus ε·|x|/2 ; |cos| y vaut donc au plus
/// cette distance. Seuil plafonné à √ε : aux grandes magnitudes, ε·|x| dépasse 1.
fn est_pole<T: Float>(x: T, marge_pole: T) -> bool {
    let echelle = x.abs().max(T::one());
    let seuil = (marge_pole * T::epsilon() * echelle).min(T::epsilon().sqrt());
    x.cos().abs() <= seuil
}
