// src/noyau/maths.rs
//
// Bibliothèque mathématique primitive
// -----------------------------------
// Fonctions pures, sans aucune connaissance du parsing.
// Chaque opération valide son domaine et renvoie une ErreurCalcul typée.
//
// Trig : les angles sont en degrés par défaut (Unite::Degres).
// Le résolveur s’appuie sur ce défaut, jamais sur un drapeau explicite.

use std::f64::consts::{E, PI};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::erreur::{ErreurCalcul, Resultat};
use super::trig::{angle_remarquable, TrigFn, TrigOutcome};

/// Plus grand n tel que n! tienne dans un f64.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// |cos(x)| sous ce seuil => tan(x) indéfinie.
pub const SEUIL_COSINUS_NUL: f64 = 1e-10;

/// Unité des angles (entrée des fonctions trig, sortie des fonctions réciproques).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unite {
    #[default]
    Degres,
    Radians,
}

/* ------------------------ Arithmétique ------------------------ */

pub fn addition(a: f64, b: f64) -> f64 {
    a + b
}

pub fn soustraction(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

pub fn division(a: f64, b: f64) -> Resultat<f64> {
    if b == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

/// Pourcentage : a / 100.
pub fn pourcentage(a: f64) -> f64 {
    a / 100.0
}

pub fn valeur_absolue(a: f64) -> f64 {
    a.abs()
}

/* ------------------------ Puissances / racines / logs ------------------------ */

pub fn racine_carree(a: f64) -> Resultat<f64> {
    if a < 0.0 {
        return Err(ErreurCalcul::domaine("racine carrée d’un nombre négatif"));
    }
    Ok(a.sqrt())
}

/// Puissance avec validation de domaine.
///
/// - base < 0, exposant entier     : |base|^exp, signe inversé si exp impair
/// - base < 0, exposant non entier : erreur de domaine
/// - base = 0, exposant < 0        : erreur de domaine
pub fn puissance(base: f64, exposant: f64) -> Resultat<f64> {
    if base == 0.0 && exposant < 0.0 {
        return Err(ErreurCalcul::domaine("zéro élevé à une puissance négative"));
    }

    if base < 0.0 {
        if exposant.fract() != 0.0 {
            return Err(ErreurCalcul::domaine(
                "base négative avec exposant non entier",
            ));
        }
        let r = base.abs().powf(exposant);
        return Ok(if est_impair(exposant) { -r } else { r });
    }

    Ok(base.powf(exposant))
}

/// Impair pour un f64 entier (au-delà de 2^53 tout f64 entier est pair).
fn est_impair(n: f64) -> bool {
    n.rem_euclid(2.0) == 1.0
}

pub fn logarithme(a: f64, base: f64) -> Resultat<f64> {
    if a <= 0.0 {
        return Err(ErreurCalcul::domaine("logarithme d’un nombre non positif"));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(ErreurCalcul::domaine("base de logarithme invalide"));
    }
    Ok(a.ln() / base.ln())
}

pub fn logarithme_naturel(a: f64) -> Resultat<f64> {
    if a <= 0.0 {
        return Err(ErreurCalcul::domaine("logarithme d’un nombre non positif"));
    }
    Ok(a.ln())
}

/* ------------------------ Conversions d’angles ------------------------ */

pub fn degres_vers_radians(degres: f64) -> f64 {
    degres * PI / 180.0
}

pub fn radians_vers_degres(radians: f64) -> f64 {
    radians * 180.0 / PI
}

fn en_radians(a: f64, unite: Unite) -> f64 {
    match unite {
        Unite::Degres => degres_vers_radians(a),
        Unite::Radians => a,
    }
}

fn depuis_radians(r: f64, unite: Unite) -> f64 {
    match unite {
        Unite::Degres => radians_vers_degres(r),
        Unite::Radians => r,
    }
}

/* ------------------------ Trigonométrie ------------------------ */

pub fn sinus(a: f64, unite: Unite) -> f64 {
    if unite == Unite::Degres {
        if let Some(TrigOutcome::Valeur(v)) = angle_remarquable(a, TrigFn::Sin) {
            return v;
        }
    }
    en_radians(a, unite).sin()
}

pub fn cosinus(a: f64, unite: Unite) -> f64 {
    if unite == Unite::Degres {
        if let Some(TrigOutcome::Valeur(v)) = angle_remarquable(a, TrigFn::Cos) {
            return v;
        }
    }
    en_radians(a, unite).cos()
}

pub fn tangente(a: f64, unite: Unite) -> Resultat<f64> {
    if unite == Unite::Degres {
        match angle_remarquable(a, TrigFn::Tan) {
            Some(TrigOutcome::Valeur(v)) => return Ok(v),
            Some(TrigOutcome::Indefini) => {
                return Err(ErreurCalcul::domaine("tangente indéfinie (cosinus nul)"))
            }
            None => {}
        }
    }

    let r = en_radians(a, unite);
    if r.cos().abs() < SEUIL_COSINUS_NUL {
        return Err(ErreurCalcul::domaine("tangente indéfinie (cosinus nul)"));
    }
    Ok(r.tan())
}

pub fn arcsinus(a: f64, unite: Unite) -> Resultat<f64> {
    if !(-1.0..=1.0).contains(&a) {
        return Err(ErreurCalcul::domaine("arcsinus hors de [-1, 1]"));
    }
    Ok(depuis_radians(a.asin(), unite))
}

pub fn arccosinus(a: f64, unite: Unite) -> Resultat<f64> {
    if !(-1.0..=1.0).contains(&a) {
        return Err(ErreurCalcul::domaine("arccosinus hors de [-1, 1]"));
    }
    Ok(depuis_radians(a.acos(), unite))
}

pub fn arctangente(a: f64, unite: Unite) -> f64 {
    depuis_radians(a.atan(), unite)
}

pub fn sinus_h(a: f64) -> f64 {
    a.sinh()
}

pub fn cosinus_h(a: f64) -> f64 {
    a.cosh()
}

pub fn tangente_h(a: f64) -> f64 {
    a.tanh()
}

/* ------------------------ Factorielle ------------------------ */

/// Factorielle exacte (produit BigUint) puis conversion f64.
pub fn factorielle(a: f64) -> Resultat<f64> {
    if a < 0.0 {
        return Err(ErreurCalcul::domaine("factorielle d’un nombre négatif"));
    }
    if a.fract() != 0.0 {
        return Err(ErreurCalcul::domaine("factorielle d’un nombre non entier"));
    }
    if a > FACTORIELLE_MAX {
        return Err(ErreurCalcul::Plage(format!(
            "factorielle trop grande (n > {FACTORIELLE_MAX})"
        )));
    }

    let n = a as u32;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }

    acc.to_f64()
        .ok_or_else(|| ErreurCalcul::Plage("factorielle non représentable".into()))
}

/* ------------------------ Constantes ------------------------ */

pub fn pi() -> f64 {
    PI
}

pub fn e() -> f64 {
    E
}

/* ------------------------ Opérations binaires ------------------------ */

/// Opérateurs binaires reconnus par la calculatrice.
pub fn est_operation_valide(op: char) -> bool {
    matches!(op, '+' | '-' | '*' | '/' | '^' | '%')
}

/// Applique un opérateur binaire : `a op b`.
///
/// `%` est un pourcentage de valeur : a % b = a * b / 100.
pub fn calculer(a: f64, b: f64, op: char) -> Resultat<f64> {
    match op {
        '+' => Ok(addition(a, b)),
        '-' => Ok(soustraction(a, b)),
        '*' => Ok(multiplication(a, b)),
        '/' => division(a, b),
        '^' => puissance(a, b),
        '%' => Ok(pourcentage(multiplication(a, b))),
        _ => Err(ErreurCalcul::invalide(format!("opérateur inconnu '{op}'"))),
    }
}
