// src/noyau/normalisation.rs
//
// Normalisation (pré-passe sur le texte brut)
// -------------------------------------------
// Répare trois formes mal écrites mais fréquentes, avant la tokenisation :
//   1) fonction sans parenthèses : "cos5"     -> "cos(5)"
//   2) abs d’un moins littéral   : "abs(-5)"  -> "abs(0-5)"
//   3) parenthèses non fermées   : "(2+3"     -> "(2+3)"
//
// Point fixe : normaliser(normaliser(s).texte).texte == normaliser(s).texte.
// Les corrections sont rapportées à l’appelant (non fatales).

use tracing::info;

use super::resolution::Fonction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Correction {
    /// Parenthèses ajoutées autour de l’argument d’une fonction.
    ParenthesesFonction { nom: String },
    /// "0" inséré dans abs(-...).
    ZeroAbs,
    /// n parenthèses fermantes ajoutées en fin d’expression.
    FermantesAjoutees(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalisation {
    pub texte: String,
    pub corrections: Vec<Correction>,
}

/// Normalise une expression complète (appel de premier niveau).
pub fn normaliser(expr: &str) -> Normalisation {
    let mut chars: Vec<char> = expr.to_ascii_lowercase().chars().collect();
    let mut corrections = Vec::new();

    repare_fonctions_sans_parentheses(&mut chars, &mut corrections);
    repare_abs_negatif(&mut chars, &mut corrections);
    equilibre_parentheses(&mut chars, &mut corrections);

    let texte: String = chars.into_iter().collect();
    for c in &corrections {
        info!(?c, texte = %texte, "expression corrigée");
    }

    Normalisation { texte, corrections }
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '%')
}

/// Début de mot : début de chaîne, après un opérateur ou après '('.
fn debut_de_mot(chars: &[char], i: usize) -> bool {
    i == 0 || est_operateur(chars[i - 1]) || chars[i - 1] == '('
}

/// Premier caractère d’un argument “nu” : chiffre, '.', ou début de constante.
fn debut_d_argument(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'p' | 'e' | 'π')
}

/// Plus long nom de fonction présent à la position i.
fn nom_de_fonction_en(chars: &[char], i: usize) -> Option<&'static str> {
    Fonction::noms()
        .filter(|nom| {
            let n = nom.len();
            i + n <= chars.len() && nom.chars().zip(&chars[i..i + n]).all(|(a, b)| a == *b)
        })
        .max_by_key(|nom| nom.len())
}

/// Position où fermer l’argument qui commence en `debut`.
///
/// - ')' au niveau zéro (elle appartient à l’extérieur)
/// - opérateur au niveau zéro, après au moins un caractère
/// - sinon fin de chaîne
fn fin_d_argument(chars: &[char], debut: usize) -> usize {
    let mut profondeur = 0usize;

    for (j, &c) in chars.iter().enumerate().skip(debut) {
        match c {
            '(' => profondeur += 1,
            ')' => {
                if profondeur == 0 {
                    return j;
                }
                profondeur -= 1;
            }
            c if est_operateur(c) && profondeur == 0 && j > debut => return j,
            _ => {}
        }
    }

    chars.len()
}

/// Règle 1 : "cos5+1" -> "cos(5)+1", "2*sqrtpi" -> "2*sqrt(pi)".
fn repare_fonctions_sans_parentheses(chars: &mut Vec<char>, corrections: &mut Vec<Correction>) {
    let mut i = 0;

    while i < chars.len() {
        if !debut_de_mot(chars, i) {
            i += 1;
            continue;
        }
        let Some(nom) = nom_de_fonction_en(chars, i) else {
            i += 1;
            continue;
        };

        let apres = i + nom.len();
        if chars.get(apres).is_some_and(|&c| debut_d_argument(c)) {
            chars.insert(apres, '(');
            let fin = fin_d_argument(chars, apres + 1);
            chars.insert(fin, ')');
            corrections.push(Correction::ParenthesesFonction {
                nom: nom.to_string(),
            });
        }

        i = apres;
    }
}

/// Règle 2 : "abs(-x)" -> "abs(0-x)" (le moins unaire devient une soustraction).
fn repare_abs_negatif(chars: &mut Vec<char>, corrections: &mut Vec<Correction>) {
    const MOTIF: [char; 5] = ['a', 'b', 's', '(', '-'];

    let mut i = 0;
    while i + MOTIF.len() <= chars.len() {
        if chars[i..i + MOTIF.len()] == MOTIF {
            chars.insert(i + 4, '0');
            corrections.push(Correction::ZeroAbs);
            i += MOTIF.len() + 1;
        } else {
            i += 1;
        }
    }
}

/// Règle 3 : ajoute les ')' manquantes en fin d’expression.
fn equilibre_parentheses(chars: &mut Vec<char>, corrections: &mut Vec<Correction>) {
    let ouvrantes = chars.iter().filter(|&&c| c == '(').count();
    let fermantes = chars.iter().filter(|&&c| c == ')').count();

    if ouvrantes > fermantes {
        let manque = ouvrantes - fermantes;
        chars.extend(std::iter::repeat(')').take(manque));
        corrections.push(Correction::FermantesAjoutees(manque));
    }
}
