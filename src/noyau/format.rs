// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour l’appelant.
// - entier “sûr” : sans décimales
// - sinon : `chiffres` décimales, zéros de queue retirés
// - -0 affiché 0, infinis affichés ∞ / -∞

/// Au-delà, un f64 entier n’est plus affiché en notation positionnelle.
const ENTIER_AFFICHABLE_MAX: f64 = 1e15;

pub fn format_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞".into() } else { "-∞".into() };
    }
    if v == 0.0 {
        return "0".to_string();
    }

    if v.fract() == 0.0 && v.abs() < ENTIER_AFFICHABLE_MAX {
        return format!("{v:.0}");
    }
    if v.abs() >= ENTIER_AFFICHABLE_MAX {
        return format!("{v:e}");
    }

    let s = format!("{v:.chiffres$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };

    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
