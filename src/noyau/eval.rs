//! Noyau — évaluation (pipeline réel)
//!
//! normalisation -> jetons -> machine à deux piles (valeurs, opérateurs) -> f64
//!
//! - Précédence : + - (1) < * / % (2) < ^ (3), tout est associatif à gauche
//!   (donc 2^3^2 = (2^3)^2 = 64).
//! - Moins unaire : "-x" devient "0 - x" (on empile 0 puis l’opérateur).
//! - Appel de fonction : l’argument est évalué récursivement sur sa tranche de jetons.
//! - Aucune multiplication implicite : "2 3" ou "2pi" échouent (TropDOperandes).
//! - Garde-fou : au-delà de PROFONDEUR_MAX appels imbriqués, erreur typée
//!   (la pile d’exécution n’est jamais épuisée).

use tracing::{debug, trace};

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{format_jetons, tokenize, Operateur, Tok};
use super::maths;
use super::normalisation::{normaliser, Correction, Normalisation};
use super::resolution::{appliquer_avec_contexte, Constante, Fonction};

/// Nombre maximal d’appels de fonction imbriqués.
pub const PROFONDEUR_MAX: usize = 128;

/// Résultat détaillé : valeur + texte normalisé + corrections appliquées.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub normalisee: String,
    pub corrections: Vec<Correction>,
}

/// API publique : évalue une expression complète.
pub fn evaluate(expr: &str) -> Resultat<f64> {
    evaluer_detaille(expr).map(|e| e.valeur)
}

/// Comme `evaluate`, mais rapporte aussi les corrections de la normalisation.
pub fn evaluer_detaille(expr: &str) -> Resultat<Evaluation> {
    if expr.trim().is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let Normalisation { texte, corrections } = normaliser(expr);

    let jetons = tokenize(&texte)?;
    debug!(normalisee = %texte, jetons = %format_jetons(&jetons), "évaluation");

    let valeur = evaluer_jetons(&jetons, 0)?;
    debug!(valeur, "résultat");

    Ok(Evaluation {
        valeur,
        normalisee: texte,
        corrections,
    })
}

/// Évalue une suite de jetons (expression complète ou argument de fonction).
/// `profondeur` : nombre d’appels de fonction englobants.
pub(crate) fn evaluer_jetons(jetons: &[Tok], profondeur: usize) -> Resultat<f64> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ErreurCalcul::invalide("imbrication trop profonde"));
    }
    if jetons.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut machine = Machine::new(profondeur);
    let mut i = 0;
    while i < jetons.len() {
        i = machine.etape(jetons, i)?;
    }
    machine.terminer()
}

fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Divise | Operateur::Pourcent => 2,
        Operateur::Puissance => 3,
    }
}

/* ------------------------ Appel de fonction ------------------------ */

/// Cadre d’un appel : bornes de l’argument et position de reprise dans les jetons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AppelFonction {
    fonction: Fonction,
    debut: usize,
    fin: usize,
    reprise: usize,
}

impl AppelFonction {
    /// `i_nom` pointe sur l’identifiant, `i_nom + 1` sur '('.
    fn ouvrir(fonction: Fonction, jetons: &[Tok], i_nom: usize) -> Resultat<Self> {
        let debut = i_nom + 2;
        let mut profondeur = 1usize;

        for (j, t) in jetons.iter().enumerate().skip(debut) {
            match t {
                Tok::LPar => profondeur += 1,
                Tok::RPar => {
                    profondeur -= 1;
                    if profondeur == 0 {
                        return Ok(Self {
                            fonction,
                            debut,
                            fin: j,
                            reprise: j + 1,
                        });
                    }
                }
                _ => {}
            }
        }

        Err(ErreurCalcul::ParenthesesDesequilibrees)
    }

    /// Argument vide : valeur par défaut de la fonction (tolérance "sin()" puis "=").
    fn evaluer(&self, jetons: &[Tok], profondeur: usize) -> Resultat<f64> {
        let argument = &jetons[self.debut..self.fin];
        let x = if argument.is_empty() {
            self.fonction.argument_par_defaut()
        } else {
            evaluer_jetons(argument, profondeur + 1)?
        };
        appliquer_avec_contexte(self.fonction, x)
    }
}

/* ------------------------ Machine à deux piles ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnAttente {
    Op(Operateur),
    // Marqueur de parenthèse ouvrante.
    Ouvrante,
}

#[derive(Debug)]
struct Machine {
    valeurs: Vec<f64>,
    operateurs: Vec<EnAttente>,
    attend_operande: bool,
    profondeur: usize,
}

impl Machine {
    fn new(profondeur: usize) -> Self {
        Self {
            valeurs: Vec::new(),
            operateurs: Vec::new(),
            attend_operande: true,
            profondeur,
        }
    }

    fn pousse_valeur(&mut self, v: f64) {
        self.valeurs.push(v);
        self.attend_operande = false;
    }

    /// Traite le jeton `i` et renvoie l’indice du prochain jeton à lire.
    fn etape(&mut self, jetons: &[Tok], i: usize) -> Resultat<usize> {
        match &jetons[i] {
            Tok::Num(v) => {
                self.pousse_valeur(*v);
                Ok(i + 1)
            }

            Tok::Ident(nom) => {
                if let Some(c) = Constante::depuis_nom(nom) {
                    self.pousse_valeur(c.valeur());
                    return Ok(i + 1);
                }

                match Fonction::depuis_nom(nom) {
                    Some(f) if jetons.get(i + 1) == Some(&Tok::LPar) => {
                        let appel = AppelFonction::ouvrir(f, jetons, i)?;
                        let v = appel.evaluer(jetons, self.profondeur)?;
                        self.pousse_valeur(v);
                        Ok(appel.reprise)
                    }
                    _ => Err(ErreurCalcul::IdentifiantInconnu(nom.clone())),
                }
            }

            // moins unaire : 0 - x
            Tok::Op(Operateur::Moins) if self.attend_operande => {
                self.valeurs.push(0.0);
                self.operateurs.push(EnAttente::Op(Operateur::Moins));
                Ok(i + 1)
            }

            // plus unaire : sans effet
            Tok::Op(Operateur::Plus) if self.attend_operande => Ok(i + 1),

            Tok::Op(op) => {
                if self.attend_operande {
                    return Err(ErreurCalcul::invalide(format!(
                        "opérateur '{}' sans opérande",
                        op.symbole()
                    )));
                }

                while let Some(&EnAttente::Op(haut)) = self.operateurs.last() {
                    if precedence(haut) < precedence(*op) {
                        break;
                    }
                    self.operateurs.pop();
                    self.applique(haut)?;
                }

                self.operateurs.push(EnAttente::Op(*op));
                self.attend_operande = true;
                Ok(i + 1)
            }

            Tok::LPar => {
                self.operateurs.push(EnAttente::Ouvrante);
                self.attend_operande = true;
                Ok(i + 1)
            }

            Tok::RPar => {
                if self.attend_operande {
                    return Err(ErreurCalcul::invalide(
                        "parenthèses vides ou opérateur avant ')'",
                    ));
                }

                loop {
                    match self.operateurs.pop() {
                        Some(EnAttente::Op(op)) => self.applique(op)?,
                        Some(EnAttente::Ouvrante) => break,
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }

                self.attend_operande = false;
                Ok(i + 1)
            }
        }
    }

    /// Dépile deux valeurs (val2 puis val1) et empile `val1 op val2`.
    fn applique(&mut self, op: Operateur) -> Resultat<()> {
        let (Some(droite), Some(gauche)) = (self.valeurs.pop(), self.valeurs.pop()) else {
            return Err(ErreurCalcul::invalide(format!(
                "opérande manquant pour '{}'",
                op.symbole()
            )));
        };

        let symbole = op.symbole();
        let v = maths::calculer(gauche, droite, symbole).map_err(|e| ErreurCalcul::Operation {
            symbole,
            gauche,
            droite,
            source: Box::new(e),
        })?;
        trace!(gauche, droite, %symbole, v, "opération");

        self.valeurs.push(v);
        Ok(())
    }

    /// Fin de chaîne : applique tous les opérateurs restants.
    fn vider(&mut self) -> Resultat<()> {
        if self.attend_operande {
            return Err(ErreurCalcul::invalide("expression terminée par un opérateur"));
        }

        while let Some(en_attente) = self.operateurs.pop() {
            match en_attente {
                EnAttente::Op(op) => self.applique(op)?,
                EnAttente::Ouvrante => return Err(ErreurCalcul::ParenthesesDesequilibrees),
            }
        }
        Ok(())
    }

    fn terminer(mut self) -> Resultat<f64> {
        self.vider()?;
        match self.valeurs.as_slice() {
            [] => Err(ErreurCalcul::ExpressionVide),
            [v] => Ok(*v),
            _ => Err(ErreurCalcul::TropDOperandes),
        }
    }
}
