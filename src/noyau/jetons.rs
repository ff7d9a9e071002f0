// src/noyau/jetons.rs
//
// Tokenisation
// ------------
// Lecture caractère par caractère avec un curseur explicite (passé par valeur),
// pour que la lecture d’un nombre ou d’un identifiant ne puisse pas corrompre
// la position de l’appelant.
//
// Supporte:
// - nombres décimaux (12, 1.5, .5, 5.)  -> lus exactement puis convertis en f64
// - opérateurs + - * / ^ %
// - parenthèses ( )
// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules), π -> "pi"
// - espaces ignorés

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Pourcent,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            '%' => Some(Operateur::Pourcent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
            Operateur::Pourcent => '%',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
    // Fonction ou constante : la résolution se fait à l’évaluation.
    Ident(String),
}

/* ------------------------ Curseur ------------------------ */

#[derive(Clone, Copy, Debug)]
struct Curseur<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Curseur<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    fn courant(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn avance(self) -> Self {
        Self {
            pos: self.pos + 1,
            ..self
        }
    }

    /// Consomme le plus long préfixe vérifiant `pred` : (lu, curseur après).
    fn prendre_tant_que(self, pred: impl Fn(char) -> bool) -> (&'a [char], Self) {
        let debut = self.pos;
        let mut fin = debut;
        while fin < self.chars.len() && pred(self.chars[fin]) {
            fin += 1;
        }
        (&self.chars[debut..fin], Self { pos: fin, ..self })
    }
}

/* ------------------------ Tokenize ------------------------ */

/// Tokenize une chaîne en jetons.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut cur = Curseur::new(&chars);

    while let Some(c) = cur.courant() {
        if c.is_whitespace() {
            cur = cur.avance();
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            cur = cur.avance();
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            cur = cur.avance();
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Tok::Op(op));
            cur = cur.avance();
            continue;
        }

        if c == 'π' {
            out.push(Tok::Ident("pi".to_string()));
            cur = cur.avance();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (lu, suite) = cur.prendre_tant_que(|c| c.is_ascii_digit() || c == '.');
            out.push(Tok::Num(lire_nombre(lu)?));
            cur = suite;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let (lu, suite) = cur.prendre_tant_que(|c| c.is_ascii_alphanumeric() || c == '_');
            let mot: String = lu.iter().collect();
            out.push(Tok::Ident(mot.to_lowercase()));
            cur = suite;
            continue;
        }

        return Err(ErreurCalcul::invalide(format!("caractère inattendu '{c}'")));
    }

    Ok(out)
}

/// Littéral décimal -> f64, via un rationnel exact (arrondi correct une seule fois).
fn lire_nombre(lu: &[char]) -> Resultat<f64> {
    let texte: String = lu.iter().collect();
    let invalide = || ErreurCalcul::NombreInvalide(texte.clone());

    let mut parties = texte.split('.');
    let entier = parties.next().unwrap_or("");
    let fraction = parties.next().unwrap_or("");
    if parties.next().is_some() || (entier.is_empty() && fraction.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{entier}{fraction}");
    let numer = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let denom = BigInt::from(10u32).pow(fraction.len() as u32);

    BigRational::new(numer, denom).to_f64().ok_or_else(invalide)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Ident(name) => name.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
