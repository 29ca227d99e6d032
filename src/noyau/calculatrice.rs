//! Calculatrice : opérations élémentaires, sans état.
//!
//! Chaque appel est indépendant. Les erreurs de domaine sont rendues dans le `Resultat`,
//! jamais levées.

use std::fmt;

use num_traits::Float;
use tracing::{debug, trace};

use super::erreur::{ErreurCalcul, ErreurEvaluation, Resultat};
use super::operation::Operation;
use super::reglages::{cst, Reglages};
use super::trig::{trig, TrigFn, TrigOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculatrice<T = f64> {
    reglages: Reglages<T>,
}

impl<T: Float> Default for Calculatrice<T> {
    fn default() -> Self {
        Self {
            reglages: Reglages::default(),
        }
    }
}

impl<T: Float + fmt::Debug> Calculatrice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages<T>) -> Self {
        Self { reglages }
    }

    pub fn reglages(&self) -> &Reglages<T> {
        &self.reglages
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn add(&self, a: T, b: T) -> T {
        a + b
    }

    pub fn subtract(&self, a: T, b: T) -> T {
        a - b
    }

    pub fn multiply(&self, a: T, b: T) -> T {
        a * b
    }

    /// `b` nul (0 ou -0) => DivisionByZero, y compris 0/0.
    pub fn divide(&self, a: T, b: T) -> Resultat<T> {
        if b == T::zero() {
            return Err(refus(ErreurCalcul::DivisionByZero, a, b));
        }
        Ok(a / b)
    }

    /// x^0 = 1 pour tout x (0^0 inclus).
    pub fn power(&self, base: T, exponent: T) -> T {
        base.powf(exponent)
    }

    pub fn square_root(&self, x: T) -> Resultat<T> {
        if x < T::zero() {
            return Err(refus(ErreurCalcul::NegativeRadicand, x, T::nan()));
        }
        Ok(x.sqrt())
    }

    /// log_base(x), base par défaut : `Reglages::base_log_defaut` (10).
    ///
    /// L’erreur sur x est prioritaire sur l’erreur de base.
    pub fn logarithm(&self, x: T, base: Option<T>) -> Resultat<T> {
        let base = base.unwrap_or(self.reglages.base_log_defaut);

        if x <= T::zero() {
            return Err(refus(ErreurCalcul::NonPositiveLogArgument, x, base));
        }
        if base <= T::zero() || base == T::one() {
            return Err(refus(ErreurCalcul::InvalidLogBase, x, base));
        }

        // log10/log2 : exacts sur les puissances entières
        let v = if base == cst(10.0) {
            x.log10()
        } else if base == cst(2.0) {
            x.log2()
        } else {
            x.ln() / base.ln()
        };
        Ok(v)
    }

    /* ------------------------ Trigonométrie (radians) ------------------------ */

    pub fn sine(&self, x: T) -> T {
        self.trig_definie(x, TrigFn::Sin)
    }

    pub fn cosine(&self, x: T) -> T {
        self.trig_definie(x, TrigFn::Cos)
    }

    /// Pôles (π/2 + kπ) et angles infinis => UndefinedTangent.
    pub fn tangent(&self, x: T) -> Resultat<T> {
        match trig(x, TrigFn::Tan, self.reglages.marge_pole) {
            TrigOutcome::Valeur(v) => Ok(v),
            TrigOutcome::Indefini => Err(refus(ErreurCalcul::UndefinedTangent, x, T::nan())),
        }
    }

    fn trig_definie(&self, x: T, f: TrigFn) -> T {
        match trig(x, f, self.reglages.marge_pole) {
            TrigOutcome::Valeur(v) => v,
            // sin/cos n’ont pas de pôle
            TrigOutcome::Indefini => T::nan(),
        }
    }

    /* ------------------------ Angles ------------------------ */

    pub fn degrees_to_radians(&self, degrees: T) -> T {
        degrees.to_radians()
    }

    pub fn radians_to_degrees(&self, radians: T) -> T {
        radians.to_degrees()
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Évalue `op` sur `operandes` (logarithm : `[x]` ou `[x, base]`).
    pub fn evaluer(&self, op: Operation, operandes: &[T]) -> Result<T, ErreurEvaluation> {
        trace!(%op, ?operandes, "évaluation");

        let arite = op.arite();
        if !arite.accepte(operandes.len()) {
            return Err(ErreurEvaluation::Arite {
                op,
                attendu: arite.description(),
                recu: operandes.len(),
            });
        }

        let a = operandes[0];
        let b = operandes.get(1).copied();
        // Arite::Binaire garantit la présence de b
        let b2 = || b.unwrap_or_else(T::nan);

        let v = match op {
            Operation::Add => self.add(a, b2()),
            Operation::Subtract => self.subtract(a, b2()),
            Operation::Multiply => self.multiply(a, b2()),
            Operation::Divide => self.divide(a, b2())?,
            Operation::Power => self.power(a, b2()),
            Operation::SquareRoot => self.square_root(a)?,
            Operation::Logarithm => self.logarithm(a, b)?,
            Operation::Sine => self.sine(a),
            Operation::Cosine => self.cosine(a),
            Operation::Tangent => self.tangent(a)?,
            Operation::DegreesToRadians => self.degrees_to_radians(a),
            Operation::RadiansToDegrees => self.radians_to_degrees(a),
        };
        Ok(v)
    }
}

fn refus<T: fmt::Debug>(e: ErreurCalcul, a: T, b: T) -> ErreurCalcul {
    debug!(?a, ?b, erreur = %e, "erreur de domaine");
    e
}
