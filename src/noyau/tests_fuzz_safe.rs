//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - quickcheck (entrées arbitraires + expressions générées, profondeur bornée)
//! - budget temps global
//! - invariant clé : jamais de panique, toujours Ok(f64) ou une erreur typée

use std::time::{Duration, Instant};

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use super::maths;
use super::normalisation::{normaliser, Correction};
use super::erreur::GenreErreur;
use super::eval::PROFONDEUR_MAX;
use super::{evaluate, evaluer_detaille};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atome(g: &mut Gen) -> String {
    match u8::arbitrary(g) % 6 {
        0 => format!("{}", u8::arbitrary(g) % 20),
        1 => format!("{}.{}", u8::arbitrary(g) % 10, u8::arbitrary(g) % 100),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => format!("-{}", u8::arbitrary(g) % 10),
        _ => format!("{}", u8::arbitrary(g)),
    }
}

fn gen_expr(g: &mut Gen, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(g);
    }

    let fonctions = [
        "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "sqrt", "log", "ln",
        "abs", "fact",
    ];
    let ops = ['+', '-', '*', '/', '^', '%'];

    match u8::arbitrary(g) % 5 {
        0 => gen_atome(g),
        1 | 2 => {
            let op = g.choose(&ops).copied().unwrap_or('+');
            format!(
                "{}{}{}",
                gen_expr(g, profondeur - 1),
                op,
                gen_expr(g, profondeur - 1)
            )
        }
        3 => format!("({})", gen_expr(g, profondeur - 1)),
        _ => {
            let f = g.choose(&fonctions).copied().unwrap_or("abs");
            format!("{f}({})", gen_expr(g, profondeur - 1))
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique() {
    fn prop_pas_de_panique(input: String) -> TestResult {
        // Ok ou Err, jamais de panique
        let _ = evaluate(&input);
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(1000)
        .max_tests(2000)
        .quickcheck(prop_pas_de_panique as fn(String) -> TestResult);
}

#[test]
fn fuzz_safe_point_fixe_normalisation() {
    fn prop_point_fixe(input: String) -> bool {
        let une = normaliser(&input).texte;
        normaliser(&une).texte == une
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop_point_fixe as fn(String) -> bool);
}

#[test]
fn fuzz_safe_point_fixe_expressions_generees() {
    fn prop_point_fixe_genere() -> bool {
        let mut g = Gen::new(10);
        let expr = gen_expr(&mut g, 4);
        let une = normaliser(&expr).texte;
        normaliser(&une).texte == une
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_point_fixe_genere as fn() -> bool);
}

#[test]
fn fuzz_safe_operateur_binaire() {
    fn prop_binaire(a: u16, b: u16, choix: u8) -> TestResult {
        let ops = ['+', '-', '*', '/', '^', '%'];
        let op = ops[choix as usize % ops.len()];
        let (a, b) = (f64::from(a), f64::from(b % 8));

        let expr = format!("{a}{op}{b}");
        match (evaluate(&expr), maths::calculer(a, b, op)) {
            (Ok(x), Ok(y)) => TestResult::from_bool(x == y || (x.is_nan() && y.is_nan())),
            (Err(e), Err(d)) => TestResult::from_bool(e.genre() == d.genre()),
            _ => TestResult::failed(),
        }
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop_binaire as fn(u16, u16, u8) -> TestResult);
}

#[test]
fn fuzz_safe_expressions_generees_avec_budget() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut g = Gen::new(20);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut g, 4);
        match evaluer_detaille(&expr) {
            Ok(ev) => {
                // expressions générées bien parenthésées : aucune fermante ajoutée
                assert!(
                    !ev.corrections
                        .iter()
                        .any(|c| matches!(c, Correction::FermantesAjoutees(_))),
                    "corrections inattendues: expr={expr:?} {:?}",
                    ev.corrections
                );
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_ok + seen_err == 300);
}

#[test]
fn fuzz_safe_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join("+");
    budget(t0, max);

    assert_eq!(evaluate(&expr), Ok(1000.0));
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 200 niveaux d’appels : récursion bornée par l’imbrication
    let mut expr = "16".to_string();
    for k in 0..200 {
        expr = if k % 2 == 0 {
            format!("abs({expr})")
        } else {
            format!("(({expr}))")
        };
        budget(t0, max);
    }

    assert_eq!(evaluate(&expr), Ok(16.0));
}

#[test]
fn fuzz_safe_imbrication_excessive_refusee() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 10 000 appels imbriqués, parenthèses équilibrées : erreur typée, pas d’abandon
    for n in [PROFONDEUR_MAX + 1, 10_000] {
        let expr = format!("{}1{}", "abs(".repeat(n), ")".repeat(n));
        let e = evaluate(&expr).unwrap_err();
        assert_eq!(e.genre(), GenreErreur::ExpressionInvalide, "n = {n}");
        budget(t0, max);
    }
}
