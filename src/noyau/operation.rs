//! Opérations du noyau : noms, arité, lecture par nom.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurOperation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Logarithm,
    Sine,
    Cosine,
    Tangent,
    DegreesToRadians,
    RadiansToDegrees,
}

/// Nombre d’opérandes accepté par une opération.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
    /// logarithm : x, base optionnelle
    UnOuDeux,
}

impl Arite {
    pub fn accepte(self, n: usize) -> bool {
        match self {
            Arite::Unaire => n == 1,
            Arite::Binaire => n == 2,
            Arite::UnOuDeux => n == 1 || n == 2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Arite::Unaire => "1",
            Arite::Binaire => "2",
            Arite::UnOuDeux => "1 ou 2",
        }
    }
}

const TOUTES: [Operation; 12] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
    Operation::Power,
    Operation::SquareRoot,
    Operation::Logarithm,
    Operation::Sine,
    Operation::Cosine,
    Operation::Tangent,
    Operation::DegreesToRadians,
    Operation::RadiansToDegrees,
];

impl Operation {
    pub fn toutes() -> &'static [Operation] {
        &TOUTES
    }

    pub fn nom(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::Logarithm => "logarithm",
            Operation::Sine => "sine",
            Operation::Cosine => "cosine",
            Operation::Tangent => "tangent",
            Operation::DegreesToRadians => "degrees_to_radians",
            Operation::RadiansToDegrees => "radians_to_degrees",
        }
    }

    /// Libellé court pour un bouton.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "xʸ",
            Operation::SquareRoot => "√",
            Operation::Logarithm => "log",
            Operation::Sine => "sin",
            Operation::Cosine => "cos",
            Operation::Tangent => "tan",
            Operation::DegreesToRadians => "deg→rad",
            Operation::RadiansToDegrees => "rad→deg",
        }
    }

    pub fn arite(self) -> Arite {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Arite::Binaire,
            Operation::Logarithm => Arite::UnOuDeux,
            Operation::SquareRoot
            | Operation::Sine
            | Operation::Cosine
            | Operation::Tangent
            | Operation::DegreesToRadians
            | Operation::RadiansToDegrees => Arite::Unaire,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Operation {
    type Err = ErreurOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TOUTES
            .iter()
            .copied()
            .find(|op| op.nom().eq_ignore_ascii_case(s))
            .ok_or_else(|| ErreurOperation::Inconnue(s.to_string()))
    }
}
