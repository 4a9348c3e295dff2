//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur des arbres bornée
//! - budget temps global
//! - référence : arbre évalué récursivement en i128, puis comparé à `compute`

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::{compute, compute_with, Error, NumericPolicy, Operator, Reglages};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbre + référence ------------------------ */

enum Arbre {
    Nombre(u32),
    Binaire(Operator, Box<Arbre>, Box<Arbre>),
}

fn gen_arbre(rng: &mut Rng, depth: usize) -> Arbre {
    if depth == 0 || rng.pick(4) == 0 {
        // petits entiers, 0 inclus (pour provoquer des divisions par zéro)
        let n = match rng.pick(6) {
            0 => 0,
            1 => 1,
            2 => rng.pick(10),
            3 => rng.pick(100),
            _ => rng.pick(1000),
        };
        return Arbre::Nombre(n);
    }

    let op = match rng.pick(4) {
        0 => Operator::Add,
        1 => Operator::Sub,
        2 => Operator::Mul,
        _ => Operator::Div,
    };
    Arbre::Binaire(
        op,
        Box::new(gen_arbre(rng, depth - 1)),
        Box::new(gen_arbre(rng, depth - 1)),
    )
}

fn precedence(a: &Arbre) -> u8 {
    match a {
        Arbre::Nombre(_) => u8::MAX,
        Arbre::Binaire(op, _, _) => op.precedence(),
    }
}

/// Écriture infixe minimale (associativité gauche), avec parenthèses superflues au hasard.
fn ecrit(a: &Arbre, rng: &mut Rng) -> String {
    match a {
        Arbre::Nombre(n) => n.to_string(),
        Arbre::Binaire(op, g, d) => {
            let p = op.precedence();
            let mut sg = ecrit(g, rng);
            let mut sd = ecrit(d, rng);
            if precedence(g) < p || rng.pick(5) == 0 {
                sg = format!("({sg})");
            }
            if precedence(d) <= p || rng.pick(5) == 0 {
                sd = format!("({sd})");
            }
            format!("{sg}{op}{sd}")
        }
    }
}

/// Évaluation mathématique dans [min, max], en i128.
fn reference(a: &Arbre, min: i128, max: i128) -> Result<i128, Error> {
    let (op, g, d) = match a {
        Arbre::Nombre(n) => return Ok(i128::from(*n)),
        Arbre::Binaire(op, g, d) => (op, g, d),
    };
    let g = reference(g, min, max)?;
    let d = reference(d, min, max)?;
    let r = match op {
        Operator::Add => g + d,
        Operator::Mul => g * d,
        Operator::Sub => {
            if min == 0 && d > g {
                return Err(Error::Underflow);
            }
            g - d
        }
        Operator::Div => {
            if d == 0 {
                return Err(Error::DivisionByZero);
            }
            // i128 tronque vers zéro
            g / d
        }
    };
    if r < min || r > max {
        return Err(Error::Overflow);
    }
    Ok(r)
}

fn compare<T>(rng: &mut Rng, iterations: usize, min: i128, max: i128)
where
    T: NumericPolicy + Into<i128>,
{
    let t0 = Instant::now();
    let limite = Duration::from_millis(500);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..iterations {
        budget(t0, limite);

        let arbre = gen_arbre(rng, 5);
        let expr = ecrit(&arbre, rng);

        let attendu = reference(&arbre, min, max);
        let obtenu: Result<i128, Error> = compute::<T>(&expr).map(Into::into);
        assert_eq!(obtenu, attendu, "expr={expr:?}");

        match attendu {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_signe_contre_reference() {
    let mut rng = Rng::new(0xC0FFEE_u64);
    compare::<i64>(&mut rng, 300, i128::from(i64::MIN), i128::from(i64::MAX));
}

#[test]
fn fuzz_safe_non_signe_contre_reference() {
    let mut rng = Rng::new(0xBADC0DE_u64);
    compare::<u32>(&mut rng, 300, 0, i128::from(u32::MAX));
}

#[test]
fn fuzz_safe_petit_type_deborde() {
    let mut rng = Rng::new(0x5EED_u64);
    compare::<i16>(&mut rng, 300, i128::from(i16::MIN), i128::from(i16::MAX));
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let ea = ecrit(&gen_arbre(&mut a, 4), &mut a);
        let eb = ecrit(&gen_arbre(&mut b, 4), &mut b);
        assert_eq!(ea, eb);
        assert_eq!(compute::<i64>(&ea), compute::<i64>(&eb));
    }
}

#[test]
fn fuzz_safe_entrees_bruitees() {
    // caractères hors alphabet injectés : jamais de panique, toujours une erreur typée
    let mut rng = Rng::new(0xF00D_u64);
    let bruit = [' ', 'x', '.', '%', '^', 'π', '\n'];
    for _ in 0..200 {
        let mut expr = ecrit(&gen_arbre(&mut rng, 3), &mut rng);
        let pos = rng.pick(expr.len() as u32 + 1) as usize;
        let c = bruit[rng.pick(bruit.len() as u32) as usize];
        if expr.is_char_boundary(pos) {
            expr.insert(pos, c);
        }
        if rng.coin() {
            expr.push(if rng.coin() { '(' } else { ')' });
        }
        assert!(compute::<i64>(&expr).is_err(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    assert_eq!(compute::<i32>(&expr), Ok(800));
}

#[test]
fn fuzz_safe_imbrication_profonde_acceptee() {
    // pile explicite : toute profondeur passe sans réglage
    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(compute::<i32>(&expr), Ok(1));

    let borne = Reglages::default().with_profondeur_max(256);
    assert_eq!(
        compute_with::<i32>(&expr, &borne),
        Err(Error::TooDeep { depth: 257, max: 256 })
    );
}

#[test]
fn fuzz_safe_longue_somme_acceptee() {
    let n = 32_769;
    let expr = vec!["1"; n].join("+");
    assert_eq!(compute::<i64>(&expr), Ok(n as i64));

    let borne = Reglages::default().with_longueur_max(65_536);
    assert_eq!(
        compute_with::<i64>(&expr, &borne),
        Err(Error::TooLong {
            len: 65_537,
            max: 65_536
        })
    );
}
