// src/noyau/trig.rs
//
// Angles remarquables (en degrés) pour sin/cos/tan
// -----------------------------------------------
// - Réduction modulo 360°
// - Table des angles dont la valeur est rationnelle (0, ±1/2, ±1)
// - tan(90° + k·180°) : indéfini
//
// Hors table : None, et l’appelant retombe sur le calcul flottant.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrigOutcome {
    Valeur(f64),
    Indefini,
}

/// Reconnaît un angle remarquable exprimé en degrés.
///
/// Seuls les multiples entiers de 15° sont examinés ; les autres renvoient None.
pub fn angle_remarquable(degres: f64, f: TrigFn) -> Option<TrigOutcome> {
    if !degres.is_finite() || (degres / 15.0).fract() != 0.0 {
        return None;
    }

    // 0 <= a < 360, entier (multiple de 15)
    let a = degres.rem_euclid(360.0) as i64;

    let out = match f {
        TrigFn::Sin => match a {
            0 | 180 => TrigOutcome::Valeur(0.0),
            30 | 150 => TrigOutcome::Valeur(0.5),
            210 | 330 => TrigOutcome::Valeur(-0.5),
            90 => TrigOutcome::Valeur(1.0),
            270 => TrigOutcome::Valeur(-1.0),
            _ => return None,
        },

        TrigFn::Cos => match a {
            0 => TrigOutcome::Valeur(1.0),
            180 => TrigOutcome::Valeur(-1.0),
            60 | 300 => TrigOutcome::Valeur(0.5),
            120 | 240 => TrigOutcome::Valeur(-0.5),
            90 | 270 => TrigOutcome::Valeur(0.0),
            _ => return None,
        },

        TrigFn::Tan => match a {
            0 | 180 => TrigOutcome::Valeur(0.0),
            45 | 225 => TrigOutcome::Valeur(1.0),
            135 | 315 => TrigOutcome::Valeur(-1.0),
            90 | 270 => TrigOutcome::Indefini,
            _ => return None,
        },
    };

    Some(out)
}
