// src/noyau/jetons.rs

use std::fmt;
use std::ops::Deref;
use std::str::Chars;

use super::erreur::{Error, Result};
use super::politique::NumericPolicy;

/// Les quatre opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 3,
        }
    }

    pub fn associativity(self) -> Associativity {
        Associativity::Left
    }

    pub fn arity(self) -> usize {
        2
    }

    /// Applique l’opérateur à `(gauche, droite)` selon la politique de `T`.
    pub fn apply<T: NumericPolicy>(self, gauche: T, droite: T) -> Result<T> {
        match self {
            Operator::Add => gauche.add(droite),
            Operator::Sub => gauche.sub(droite),
            Operator::Mul => gauche.mul(droite),
            Operator::Div => gauche.div(droite),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<T> {
    Number(T),
    Operator(Operator),
    // marqueur de la pile d’opérateurs ; jamais dans une RPN
    LeftParen,
}

impl<T> Token<T> {
    /// `None` pour `LeftParen` (pas d’arité).
    pub fn arity(&self) -> Option<usize> {
        match self {
            Token::Number(_) => Some(0),
            Token::Operator(op) => Some(op.arity()),
            Token::LeftParen => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => f.write_str("("),
        }
    }
}

/* ------------------------ Suite postfixée validée ------------------------ */

/// Suite de jetons en notation polonaise inversée, sans `LeftParen`.
///
/// Produite par `parse`, ou construite à la main via `TryFrom<Vec<Token<T>>>`.
/// L’équilibre de la pile de valeurs n’est vérifié qu’à l’évaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rpn<T>(Vec<Token<T>>);

impl<T> Rpn<T> {
    /// Réservé au parseur, qui garantit l’absence de `LeftParen`.
    pub(crate) fn from_parser(jetons: Vec<Token<T>>) -> Self {
        debug_assert!(!jetons.iter().any(|t| matches!(t, Token::LeftParen)));
        Rpn(jetons)
    }

    pub fn into_vec(self) -> Vec<Token<T>> {
        self.0
    }
}

impl<T> TryFrom<Vec<Token<T>>> for Rpn<T> {
    type Error = Error;

    fn try_from(jetons: Vec<Token<T>>) -> Result<Self> {
        if jetons.iter().any(|t| matches!(t, Token::LeftParen)) {
            return Err(Error::MalformedExpression);
        }
        Ok(Rpn(jetons))
    }
}

impl<T> Deref for Rpn<T> {
    type Target = [Token<T>];

    fn deref(&self) -> &[Token<T>] {
        &self.0
    }
}

impl<T> IntoIterator for Rpn<T> {
    type Item = Token<T>;
    type IntoIter = std::vec::IntoIter<Token<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Format “démarche” : `6 8 8 + 2 / 1 - *`.
impl<T: fmt::Display> fmt::Display for Rpn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/* ------------------------ Lecture caractère par caractère ------------------------ */

/// Unité lexicale : un jeton, ou une `)` (qui déclenche la fermeture
/// dans le parseur au lieu d’être émise).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexeme<T> {
    Jeton(Token<T>),
    RightParen,
}

/// Lecteur en une passe, sans anticipation au-delà des suites de chiffres.
///
/// Produit `(position, lexème)` ; la position est l’indice de caractère
/// du début du lexème.
pub struct Lexemes<'a, T> {
    chars: Chars<'a>,
    position: usize,
    // premier caractère déjà lu après une suite de chiffres
    en_attente: Option<char>,
    _type: std::marker::PhantomData<T>,
}

impl<'a, T: NumericPolicy> Lexemes<'a, T> {
    pub fn new(s: &'a str) -> Self {
        Lexemes {
            chars: s.chars(),
            position: 0,
            en_attente: None,
            _type: std::marker::PhantomData,
        }
    }

    fn suivant(&mut self) -> Option<char> {
        let c = self.en_attente.take().or_else(|| self.chars.next())?;
        self.position += 1;
        Some(c)
    }

    /// Suite maximale de chiffres, accumulée dans `T`.
    fn nombre(&mut self, premier: char) -> Result<T> {
        let mut valeur = T::from_digit(chiffre(premier));
        while let Some(c) = self.chars.next() {
            if c.is_ascii_digit() {
                valeur = valeur.push_digit(chiffre(c))?;
                self.position += 1;
            } else {
                self.en_attente = Some(c);
                break;
            }
        }
        Ok(valeur)
    }
}

fn chiffre(c: char) -> u8 {
    (c as u8) - b'0'
}

impl<T: NumericPolicy> Iterator for Lexemes<'_, T> {
    type Item = Result<(usize, Lexeme<T>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.suivant()?;
        let pos = self.position - 1;

        let lexeme = match c {
            '0'..='9' => match self.nombre(c) {
                Ok(v) => Lexeme::Jeton(Token::Number(v)),
                Err(Error::Overflow) => return Some(Err(Error::LiteralOverflow(pos))),
                Err(e) => return Some(Err(e)),
            },
            '(' => Lexeme::Jeton(Token::LeftParen),
            ')' => Lexeme::RightParen,
            _ => match Operator::from_symbol(c) {
                Some(op) => Lexeme::Jeton(Token::Operator(op)),
                None => return Some(Err(Error::UnrecognizedSymbol(c, pos))),
            },
        };

        Some(Ok((pos, lexeme)))
    }
}
