//! Calculatrice scientifique : opérations élémentaires et trigonométriques,
//! erreurs de domaine typées.
//!
//! ```
//! use calculatrice_sci::noyau::{Calculatrice, ErreurCalcul};
//!
//! let c = Calculatrice::<f64>::new();
//! assert_eq!(c.logarithm(8.0, Some(2.0)), Ok(3.0));
//! assert_eq!(c.divide(5.0, 0.0), Err(ErreurCalcul::DivisionByZero));
//! ```

pub mod noyau;

pub use noyau::{Calculatrice, ErreurCalcul, Operation};
