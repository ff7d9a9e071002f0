// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau
// ------------------------------
// - Une variante par genre d’échec (domaine, division par zéro, parenthèses, ...)
// - Deux variantes “contexte” qui enveloppent une erreur de la bibliothèque :
//    - Operation : opérateur binaire + ses deux opérandes
//    - Fonction  : nom de fonction + argument
// - genre() traverse les enveloppes et renvoie le genre racine.

use thiserror::Error;

/// Genre racine d’une erreur (indépendant du contexte accumulé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Domaine,
    DivisionParZero,
    Plage,
    ParenthesesDesequilibrees,
    ExpressionInvalide,
    IdentifiantInconnu,
    NombreInvalide,
    ExpressionVide,
    TropDOperandes,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalcul {
    /// Argument hors du domaine mathématique (√ négative, log ≤ 0, ...).
    #[error("{0}")]
    Domaine(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat hors de la plage représentable (factorielle > 170).
    #[error("{0}")]
    Plage(String),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    #[error("identifiant inconnu : '{0}'")]
    IdentifiantInconnu(String),

    #[error("nombre invalide : '{0}'")]
    NombreInvalide(String),

    #[error("expression vide")]
    ExpressionVide,

    /// Opérandes adjacents sans opérateur (ex: "2 3").
    #[error("trop d’opérandes (opérateur manquant ?)")]
    TropDOperandes,

    #[error("{gauche} {symbole} {droite} : {source}")]
    Operation {
        symbole: char,
        gauche: f64,
        droite: f64,
        source: Box<ErreurCalcul>,
    },

    #[error("{nom}({argument}) : {source}")]
    Fonction {
        nom: String,
        argument: f64,
        source: Box<ErreurCalcul>,
    },
}

impl ErreurCalcul {
    /// Genre racine : les enveloppes Operation/Fonction sont traversées.
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::Domaine(_) => GenreErreur::Domaine,
            ErreurCalcul::DivisionParZero => GenreErreur::DivisionParZero,
            ErreurCalcul::Plage(_) => GenreErreur::Plage,
            ErreurCalcul::ParenthesesDesequilibrees => GenreErreur::ParenthesesDesequilibrees,
            ErreurCalcul::ExpressionInvalide(_) => GenreErreur::ExpressionInvalide,
            ErreurCalcul::IdentifiantInconnu(_) => GenreErreur::IdentifiantInconnu,
            ErreurCalcul::NombreInvalide(_) => GenreErreur::NombreInvalide,
            ErreurCalcul::ExpressionVide => GenreErreur::ExpressionVide,
            ErreurCalcul::TropDOperandes => GenreErreur::TropDOperandes,
            ErreurCalcul::Operation { source, .. } | ErreurCalcul::Fonction { source, .. } => {
                source.genre()
            }
        }
    }

    pub(crate) fn domaine(msg: impl Into<String>) -> Self {
        ErreurCalcul::Domaine(msg.into())
    }

    pub(crate) fn invalide(msg: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(msg.into())
    }
}

/// Résultat du noyau.
pub type Resultat<T> = Result<T, ErreurCalcul>;
