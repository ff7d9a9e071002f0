// src/noyau/resolution.rs
//
// Résolution des identifiants
// ---------------------------
// - Fonction  : table statique nom -> variante (toutes unaires)
// - Constante : pi, e
// - apply_function : dispatch vers maths.rs, l’erreur est ré-enveloppée
//   avec le nom de la fonction et la valeur de l’argument.
//
// Aucun état : importable sans l’évaluateur (la couche “saisie” s’en sert
// pour décider comment prolonger une expression).

use super::erreur::{ErreurCalcul, Resultat};
use super::maths::{self, Unite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Log,
    Ln,
    Abs,
    Fact,
}

/// Table nom -> fonction (une seule recherche par identifiant).
static FONCTIONS: [(&str, Fonction); 14] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("sinh", Fonction::Sinh),
    ("cosh", Fonction::Cosh),
    ("tanh", Fonction::Tanh),
    ("sqrt", Fonction::Sqrt),
    ("log", Fonction::Log),
    ("ln", Fonction::Ln),
    ("abs", Fonction::Abs),
    ("fact", Fonction::Fact),
];

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        FONCTIONS.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        FONCTIONS
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    /// Tous les noms connus (utilisé par la normalisation).
    pub fn noms() -> impl Iterator<Item = &'static str> {
        FONCTIONS.iter().map(|(n, _)| *n)
    }

    /// Valeur prise quand l’argument est vide : "sin()" tapé puis "=".
    pub fn argument_par_defaut(self) -> f64 {
        match self {
            Fonction::Log | Fonction::Ln | Fonction::Fact => 1.0,
            _ => 0.0,
        }
    }

    /// Applique la fonction (trig en degrés, log en base 10).
    pub fn appliquer(self, x: f64) -> Resultat<f64> {
        let unite = Unite::default();
        match self {
            Fonction::Sin => Ok(maths::sinus(x, unite)),
            Fonction::Cos => Ok(maths::cosinus(x, unite)),
            Fonction::Tan => maths::tangente(x, unite),
            Fonction::Asin => maths::arcsinus(x, unite),
            Fonction::Acos => maths::arccosinus(x, unite),
            Fonction::Atan => Ok(maths::arctangente(x, unite)),
            Fonction::Sinh => Ok(maths::sinus_h(x)),
            Fonction::Cosh => Ok(maths::cosinus_h(x)),
            Fonction::Tanh => Ok(maths::tangente_h(x)),
            Fonction::Sqrt => maths::racine_carree(x),
            Fonction::Log => maths::logarithme(x, 10.0),
            Fonction::Ln => maths::logarithme_naturel(x),
            Fonction::Abs => Ok(maths::valeur_absolue(x)),
            Fonction::Fact => maths::factorielle(x),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Constante> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => maths::pi(),
            Constante::E => maths::e(),
        }
    }
}

/* ------------------------ API publique ------------------------ */

pub fn is_known_function(nom: &str) -> bool {
    Fonction::depuis_nom(nom).is_some()
}

pub fn is_known_constant(nom: &str) -> bool {
    Constante::depuis_nom(nom).is_some()
}

pub fn constant_value(nom: &str) -> Resultat<f64> {
    Constante::depuis_nom(nom)
        .map(Constante::valeur)
        .ok_or_else(|| ErreurCalcul::IdentifiantInconnu(nom.to_string()))
}

/// Applique une fonction nommée ; l’erreur de la bibliothèque porte le contexte.
pub fn apply_function(nom: &str, argument: f64) -> Resultat<f64> {
    let f = Fonction::depuis_nom(nom)
        .ok_or_else(|| ErreurCalcul::IdentifiantInconnu(nom.to_string()))?;
    appliquer_avec_contexte(f, argument)
}

pub(crate) fn appliquer_avec_contexte(f: Fonction, argument: f64) -> Resultat<f64> {
    f.appliquer(argument).map_err(|e| ErreurCalcul::Fonction {
        nom: f.nom().to_string(),
        argument,
        source: Box::new(e),
    })
}
