// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
//
// Règles:
// - Number : sortie directe
// - Operator : dépile tant que le sommet n’est pas '(' et que sa précédence >= la sienne
//   (tous les opérateurs sont associatifs à gauche), puis empile
// - '(' : empile
// - ')' : dépile jusqu’à '(' ; pile vide avant => UnmatchedParenthesis
// - fin : vide la pile ; une '(' restante => UnmatchedParenthesis

use tracing::{debug, trace};

use super::erreur::{Error, Result};
use super::jetons::{Lexeme, Lexemes, Operator, Rpn, Token};
use super::politique::NumericPolicy;
use super::reglages::Reglages;

/// Élément de la pile d’opérateurs. Garde la position des '(' pour les erreurs.
enum Pile {
    Op(Operator),
    Ouvrante(usize),
}

/// Convertit une expression infixe en RPN avec les réglages par défaut.
///
/// Exemple:
///   "6*((8+8)/2-1)"  =>  6 8 8 + 2 / 1 - *
pub fn parse<T: NumericPolicy>(expression: &str) -> Result<Rpn<T>> {
    parse_with(expression, &Reglages::default())
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
pub fn parse_with<T: NumericPolicy>(expression: &str, reglages: &Reglages) -> Result<Rpn<T>> {
    if expression.is_empty() {
        return Err(Error::EmptyExpression);
    }
    reglages.verifie_longueur(expression)?;

    let mut out: Vec<Token<T>> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();
    let mut profondeur: usize = 0;

    for lexeme in Lexemes::<T>::new(expression) {
        let (pos, lexeme) = lexeme?;

        match lexeme {
            Lexeme::Jeton(Token::Number(v)) => {
                trace!(position = pos, valeur = %v, "nombre");
                out.push(Token::Number(v));
            }

            Lexeme::Jeton(Token::Operator(op)) => {
                while let Some(Pile::Op(sommet)) = ops.last() {
                    if sommet.precedence() < op.precedence() {
                        break;
                    }
                    let sommet = *sommet;
                    ops.pop();
                    emet(&mut out, sommet);
                }
                ops.push(Pile::Op(op));
            }

            Lexeme::Jeton(Token::LeftParen) => {
                profondeur += 1;
                reglages.verifie_profondeur(profondeur)?;
                ops.push(Pile::Ouvrante(pos));
            }

            Lexeme::RightParen => {
                // dépile jusqu’à '(' (pile vide => ')' orpheline)
                loop {
                    match ops.pop() {
                        Some(Pile::Op(op)) => emet(&mut out, op),
                        Some(Pile::Ouvrante(_)) => break,
                        None => return Err(Error::UnmatchedParenthesis(pos)),
                    }
                }
                profondeur -= 1;
            }
        }
    }

    // vide la pile ops
    while let Some(element) = ops.pop() {
        match element {
            Pile::Op(op) => emet(&mut out, op),
            Pile::Ouvrante(pos) => return Err(Error::UnmatchedParenthesis(pos)),
        }
    }

    let rpn = Rpn::from_parser(out);
    debug!(expression, rpn = %rpn, "RPN construite");
    Ok(rpn)
}

fn emet<T>(out: &mut Vec<Token<T>>, op: Operator) {
    trace!(%op, "opérateur");
    out.push(Token::Operator(op));
}

/// Réduit une RPN à une seule valeur.
///
/// Pour chaque opérateur, le premier dépilé est l’opérande **droite**.
pub fn evaluate<T: NumericPolicy>(rpn: Rpn<T>) -> Result<T> {
    let mut st: Vec<T> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Token::Number(v) => st.push(v),

            Token::Operator(op) => {
                let droite = st.pop().ok_or(Error::MalformedExpression)?;
                let gauche = st.pop().ok_or(Error::MalformedExpression)?;
                trace!(%gauche, %op, %droite, "application");
                st.push(op.apply(gauche, droite)?);
            }

            Token::LeftParen => unreachable!("'(' dans une RPN validée"),
        }
    }

    let valeur = st.pop().ok_or(Error::MalformedExpression)?;
    if !st.is_empty() {
        return Err(Error::MalformedExpression);
    }
    debug!(%valeur, "RPN évaluée");
    Ok(valeur)
}
