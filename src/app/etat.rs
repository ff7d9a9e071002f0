//! src/app/etat.rs
//!
//! État de session (sans noyau, sans affichage).
//!
//! Rôle : contenir l’état de la calculatrice en ligne de commande (entrée,
//! résultat, erreur, corrections, historique, précision d’affichage) et offrir
//! des opérations simples sans logique d’évaluation.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Sur erreur, l’entrée est CONSERVÉE pour être corrigée plutôt que retapée.
//! - Défense en profondeur : bornes sur la précision d’affichage.

/// Précision d’affichage par défaut (décimales).
pub const DIGITS_DEFAUT: usize = 10;

/// Garde-fou : au-delà, les décimales d’un f64 ne veulent plus rien dire.
pub const DIGITS_MAX: usize = 15;

/// Une ligne d’historique : expression (normalisée) et résultat affiché.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub corrections: Vec<String>,

    // --- mémoire de session ---
    pub historique: Vec<LigneHistorique>,

    // --- paramètres ---
    pub digits: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            corrections: Vec::new(),
            historique: Vec::new(),
            digits: DIGITS_DEFAUT,
        }
    }
}

impl AppCalc {
    /// AC : remise à zéro totale (entrée + résultats + historique + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.digits = DIGITS_DEFAUT;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// CLR : effacer résultat + erreur + corrections (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.corrections.clear();
    }

    /// Place une erreur ; l’entrée fautive reste disponible.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.corrections.clear();
    }

    /// Dépose un résultat et l’ajoute à l’historique ; l’entrée est consommée.
    pub fn set_resultat(
        &mut self,
        expression: impl Into<String>,
        resultat: impl Into<String>,
        corrections: Vec<String>,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.corrections = corrections;
        self.historique.push(LigneHistorique {
            expression: expression.into(),
            resultat: self.resultat.clone(),
        });
        self.entree.clear();
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}
