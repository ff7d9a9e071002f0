//! Calculatrice scientifique — noyau d’évaluation d’expressions.
//!
//! L’appelant (interface, saisie bouton par bouton) fournit une expression
//! complète ; le noyau la normalise, l’évalue et renvoie un f64 ou une
//! erreur typée.

pub mod noyau;

pub use noyau::{
    apply_function, constant_value, evaluate, evaluer_detaille, format_resultat,
    is_known_constant, is_known_function, Correction, ErreurCalcul, Evaluation, GenreErreur,
};
