//! Tests scientifiques (campagne) : propriétés attendues du noyau.
//!
//! - précédence, parenthèses, corrections automatiques
//! - domaines (√, division, factorielle)
//! - point fixe de la normalisation
//! - accord opérateur binaire <-> bibliothèque primitive

use super::erreur::GenreErreur;
use super::maths;
use super::normalisation::normaliser;
use super::{evaluate, evaluer_detaille};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_genre(expr: &str, attendu: GenreErreur) {
    match evaluate(expr) {
        Ok(v) => panic!("expr={expr:?} : erreur {attendu:?} attendue, valeur {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
}

/* ------------------------ Domaines ------------------------ */

#[test]
fn sci_racine() {
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_genre("sqrt(-4))", GenreErreur::Domaine);
}

#[test]
fn sci_division_par_zero() {
    assert_genre("10/0", GenreErreur::DivisionParZero);
}

#[test]
fn sci_factorielle() {
    assert_eq!(eval_ok("fact(5)"), 120.0);
    assert_genre("fact(171)", GenreErreur::Plage);
    assert_genre("fact(-1)", GenreErreur::Domaine);
    assert_genre("fact(2.5)", GenreErreur::Domaine);
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn sci_cos_sans_parentheses() {
    let ev = evaluer_detaille("cos5").unwrap();
    assert_eq!(ev.normalisee, "cos(5)");
    assert!((ev.valeur - 0.996_19).abs() < 1e-5, "valeur={}", ev.valeur);
}

#[test]
fn sci_point_fixe_normalisation() {
    for s in [
        "cos5",
        "2*sqrt16+abs(-3)",
        "((1+2",
        "fact5)",
        "sin(30)+cos(60)",
        "tanpi",
        "ABS(-SQRT4",
    ] {
        let une = normaliser(s).texte;
        let deux = normaliser(&une);
        assert_eq!(deux.texte, une, "entrée {s:?}");
        assert!(deux.corrections.is_empty(), "entrée {s:?}");
    }
}

#[test]
fn sci_parentheses() {
    assert_eq!(eval_ok("(2+3"), 5.0);
    assert_genre("2+3)", GenreErreur::ParenthesesDesequilibrees);
    assert_eq!(eval_ok("sqrt(sqrt(16"), 2.0);
}

#[test]
fn sci_abs_negatif() {
    assert_eq!(eval_ok("abs(-5)"), 5.0);
    assert_eq!(eval_ok("abs(-2*3)+1"), 7.0);
}

/* ------------------------ Accord avec la bibliothèque ------------------------ */

#[test]
fn sci_operateur_binaire_direct() {
    let operandes = [0.0, 1.0, 2.0, 3.5, 10.0, 0.25, 100.0];
    for op in ['+', '-', '*', '/', '^', '%'] {
        for &a in &operandes {
            for &b in &operandes {
                let expr = format!("{a}{op}{b}");
                let direct = maths::calculer(a, b, op);
                match (evaluate(&expr), direct) {
                    (Ok(x), Ok(y)) => assert_eq!(x, y, "expr={expr:?}"),
                    (Err(e), Err(d)) => assert_eq!(e.genre(), d.genre(), "expr={expr:?}"),
                    (x, y) => panic!("expr={expr:?} : {x:?} vs {y:?}"),
                }
            }
        }
    }
}

/* ------------------------ Trig en degrés ------------------------ */

#[test]
fn sci_trig_degres() {
    assert_eq!(eval_ok("sin(30)"), 0.5);
    assert_eq!(eval_ok("cos(180)"), -1.0);
    assert_eq!(eval_ok("sin(180)"), 0.0);
    assert_eq!(eval_ok("tan(45)"), 1.0);
    assert!((eval_ok("asin(0.5)") - 30.0).abs() < 1e-9);
    assert!((eval_ok("atan(1)") - 45.0).abs() < 1e-9);
    assert_genre("tan(270)", GenreErreur::Domaine);
    assert_genre("acos(2)", GenreErreur::Domaine);
}

#[test]
fn sci_fonctions_imbriquees() {
    assert!((eval_ok("sqrt(abs(-16))+log(100)*ln(e)") - 6.0).abs() < 1e-12);
    assert_eq!(eval_ok("fact(sqrt(9))"), 6.0);
    assert!((eval_ok("cosh(0)+sinh(0)+tanh(0)") - 1.0).abs() < 1e-12);
}
