//! Réglages du noyau (base de logarithme par défaut, marge de détection des pôles de tan).

use num_traits::Float;

/// Paramètres d’une `Calculatrice`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reglages<T> {
    /// Base utilisée par `logarithm(x, None)`.
    pub base_log_defaut: T,

    /// Multiplicateur de ε pour décider qu’un angle est un pôle de la tangente :
    /// |cos x| <= marge_pole · ε · max(1, |x|).
    pub marge_pole: T,
}

impl<T: Float> Default for Reglages<T> {
    fn default() -> Self {
        Self {
            base_log_defaut: cst(10.0),
            marge_pole: cst(2.0),
        }
    }
}

impl<T: Float> Reglages<T> {
    pub fn with_base_log_defaut(mut self, base: T) -> Self {
        self.base_log_defaut = base;
        self
    }
}

/// Littéral f64 converti vers T (toujours représentable pour f32/f64).
pub(crate) fn cst<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
