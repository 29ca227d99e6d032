//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler toutes les opérations sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - on accepte seulement les erreurs de domaine dont le prédicat est vrai
//! - invariant clé : jamais de panique, jamais de NaN sur une entrée finie du domaine

use std::f64::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

use super::{Calculatrice, ErreurCalcul, ErreurEvaluation, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    /// Flottant dans [-1, 1].
    fn unit(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’opérandes ------------------------ */

fn gen_operande(rng: &mut Rng) -> f64 {
    match rng.pick(10) {
        // valeurs “frontières” (zéro, un, pôles)
        0 => 0.0,
        1 => 1.0,
        2 => -1.0,
        3 => FRAC_PI_2 * (2 * rng.pick(7) as i64 - 5) as f64,
        // petites, moyennes, grandes magnitudes
        4 => rng.unit() * 1e-3,
        5 => rng.unit() * 1e3,
        6 => rng.unit() * 1e9,
        7 => rng.unit() * 1e16,
        8 => rng.unit() * 1e300,
        _ => rng.unit() * 10.0,
    }
}

/// L’erreur renvoyée doit correspondre à un prédicat de domaine vrai.
fn erreur_justifiee(op: Operation, x: &[f64], e: &ErreurEvaluation) -> bool {
    let Some(e) = e.domaine() else {
        return false;
    };
    match (op, e) {
        (Operation::Divide, ErreurCalcul::DivisionByZero) => x[1] == 0.0,
        (Operation::SquareRoot, ErreurCalcul::NegativeRadicand) => x[0] < 0.0,
        (Operation::Logarithm, ErreurCalcul::NonPositiveLogArgument) => x[0] <= 0.0,
        (Operation::Logarithm, ErreurCalcul::InvalidLogBase) => {
            x[0] > 0.0 && (x[1] <= 0.0 || x[1] == 1.0)
        }
        (Operation::Tangent, ErreurCalcul::UndefinedTangent) => x[0].cos().abs() < 1e-6,
        _ => false,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_toutes_operations() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let c = Calculatrice::new();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..5_000 {
        let op = Operation::toutes()[rng.pick(Operation::toutes().len() as u32) as usize];
        let operandes = [gen_operande(&mut rng), gen_operande(&mut rng)];
        let n = if op.arite().accepte(2) { 2 } else { 1 };
        let x = &operandes[..n];

        match c.evaluer(op, x) {
            Ok(v) => {
                // pow peut déborder / rendre NaN (base négative, exposant non entier)
                if op != Operation::Power {
                    assert!(!v.is_nan(), "{op}({x:?}) = NaN");
                }
            }
            Err(e) => assert!(erreur_justifiee(op, x, &e), "{op}({x:?}) => {e}"),
        }
        budget(t0, max);
    }
}

/// Hors pôles, tangent rend exactement `x.tan()`, à toute magnitude.
#[test]
fn fuzz_tangente_toutes_magnitudes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let c = Calculatrice::new();
    let mut rng = Rng::new(0x7A4);
    let mut refus = 0;

    for _ in 0..10_000 {
        // exposant décimal dans [0, 300]
        let x = rng.unit() * 10f64.powi(rng.pick(301) as i32);
        match c.tangent(x) {
            Ok(v) => assert_eq!(v.to_bits(), x.tan().to_bits(), "x={x}"),
            Err(e) => {
                assert_eq!(e, ErreurCalcul::UndefinedTangent);
                assert!(x.cos().abs() <= f64::EPSILON.sqrt(), "x={x}");
                refus += 1;
            }
        }
        budget(t0, max);
    }
    assert!(refus <= 1, "refus={refus}");
}

#[test]
fn fuzz_determinisme() {
    let c = Calculatrice::new();
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..500 {
        let xa = gen_operande(&mut a);
        let xb = gen_operande(&mut b);
        assert_eq!(xa.to_bits(), xb.to_bits());
        assert_eq!(c.tangent(xa), c.tangent(xb));
        assert_eq!(c.logarithm(xa, None), c.logarithm(xb, None));
    }
}

#[test]
fn fuzz_proprietes_algebriques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let c = Calculatrice::new();
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        let a = rng.unit() * 1e3;
        let b = rng.unit() * 1e3;

        assert_eq!(c.add(a, b), c.add(b, a));
        assert_eq!(c.subtract(a, b), -c.subtract(b, a));

        if b != 0.0 {
            let q = c.divide(c.multiply(a, b), b).unwrap();
            assert!((q - a).abs() <= 1e-12 * (1.0 + a.abs()), "a={a} b={b}");
        }

        let d = c.radians_to_degrees(c.degrees_to_radians(a));
        assert!((d - a).abs() <= 1e-12 * (1.0 + a.abs()), "a={a}");

        budget(t0, max);
    }
}
