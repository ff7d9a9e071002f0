// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer le sous-module etat.rs
// - Brancher l’état de session sur le noyau (evaluer_entree)
// - Boucle REPL : une expression par ligne, commandes ":..."
//
// Important:
// - Le noyau reçoit une expression COMPLÈTE ; aucune multiplication implicite ici.
// - Sur erreur, l’entrée reste dans l’état (elle est réaffichée).

pub mod etat;

pub use etat::AppCalc;

use std::io::{self, BufRead, Write};

use calculatrice_sci::noyau::{evaluer_detaille, format_resultat, Correction};
use tracing::debug;

/// Texte lisible d’une correction de la normalisation.
fn decrire_correction(c: &Correction) -> String {
    match c {
        Correction::ParenthesesFonction { nom } => format!("parenthèses ajoutées après {nom}"),
        Correction::ZeroAbs => "0 inséré dans abs(-…)".to_string(),
        Correction::FermantesAjoutees(1) => "1 parenthèse fermante ajoutée".to_string(),
        Correction::FermantesAjoutees(n) => format!("{n} parenthèses fermantes ajoutées"),
    }
}

impl AppCalc {
    /// Évalue l’entrée courante et dépose résultat ou erreur dans l’état.
    /// Renvoie true si l’évaluation a réussi.
    pub fn evaluer_entree(&mut self) -> bool {
        match evaluer_detaille(&self.entree) {
            Ok(ev) => {
                let affiche = format_resultat(ev.valeur, self.digits);
                let corrections = ev.corrections.iter().map(decrire_correction).collect();
                self.set_resultat(ev.normalisee, affiche, corrections);
                true
            }
            Err(e) => {
                debug!(entree = %self.entree, erreur = ?e, "évaluation refusée");
                self.set_erreur(e.to_string());
                false
            }
        }
    }

    /// Affiche la sortie de la dernière évaluation.
    fn ecrire_sortie<W: Write>(&self, out: &mut W, ok: bool) -> io::Result<()> {
        if ok {
            for c in &self.corrections {
                writeln!(out, "  ({c})")?;
            }
            writeln!(out, "= {}", self.resultat)
        } else {
            writeln!(out, "Erreur : {}", self.erreur)?;
            writeln!(out, "  entrée conservée : {}", self.entree)
        }
    }

    fn ecrire_historique<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.historique.is_empty() {
            return writeln!(out, "(historique vide)");
        }
        for (k, ligne) in self.historique.iter().enumerate() {
            writeln!(out, "{:>3}. {} = {}", k + 1, ligne.expression, ligne.resultat)?;
        }
        Ok(())
    }

    /// Évalue une seule expression (mode non interactif).
    pub fn une_fois<W: Write>(&mut self, expression: &str, out: &mut W) -> io::Result<bool> {
        self.entree = expression.to_string();
        let ok = self.evaluer_entree();
        self.ecrire_sortie(out, ok)?;
        Ok(ok)
    }

    /// Boucle interactive : une expression par ligne.
    ///
    /// Commandes : `:q` quitter, `:h` historique, `:c` effacer l’entrée,
    /// `:clr` effacer les résultats, `:ac` tout remettre à zéro,
    /// `:chiffres N` précision d’affichage.
    pub fn repl<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for ligne in input.lines() {
            let ligne = ligne?;
            let ligne = ligne.trim();

            match ligne {
                "" => continue,
                ":q" => break,
                ":h" => self.ecrire_historique(out)?,
                ":c" => self.clear_entree(),
                ":clr" => self.clear_resultats(),
                ":ac" => self.reset_total(),
                _ if ligne.starts_with(":chiffres") => {
                    match ligne[":chiffres".len()..].trim().parse::<usize>() {
                        Ok(n) => {
                            self.set_digits(n);
                            writeln!(out, "précision : {} décimales", self.digits)?;
                        }
                        Err(_) => writeln!(out, "usage : :chiffres N")?,
                    }
                }
                _ => {
                    self.entree = ligne.to_string();
                    let ok = self.evaluer_entree();
                    self.ecrire_sortie(out, ok)?;
                }
            }
        }
        Ok(())
    }
}
