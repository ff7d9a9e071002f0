//! Noyau d’évaluation arithmétique
//!
//! Organisation interne :
//! - erreur.rs        : taxonomie des erreurs + contexte (opérateur, fonction)
//! - maths.rs         : bibliothèque primitive (domaines validés, trig en degrés)
//! - trig.rs          : angles remarquables (valeurs exactes en degrés)
//! - resolution.rs    : fonctions / constantes nommées
//! - normalisation.rs : réparations du texte brut (cos5, abs(-x), parenthèses)
//! - jetons.rs        : tokenisation
//! - eval.rs          : machine à deux piles + appels de fonction récursifs
//! - format.rs        : affichage d’un résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod maths;
pub mod normalisation;
pub mod resolution;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, GenreErreur};
pub use eval::{evaluate, evaluer_detaille, Evaluation};
pub use format::format_resultat;
pub use normalisation::{normaliser, Correction};
pub use resolution::{apply_function, constant_value, is_known_constant, is_known_function};
