// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau (lecture, RPN, arithmétique).
///
/// Les positions sont des indices de caractère (à partir de 0) dans l’entrée.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("entrée vide")]
    EmptyExpression,

    #[error("caractère inattendu: '{0}' (position {1})")]
    UnrecognizedSymbol(char, usize),

    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèse non appariée (position {0})")]
    UnmatchedParenthesis(usize),

    /// Pile de valeurs trop courte ou trop longue pendant l’évaluation.
    #[error("expression invalide")]
    MalformedExpression,

    #[error("division par zéro")]
    DivisionByZero,

    /// Soustraction non signée qui passerait sous zéro.
    #[error("soustraction négative sur un type non signé")]
    Underflow,

    /// Dépassement de capacité du type numérique (arithmétique vérifiée).
    #[error("dépassement de capacité")]
    Overflow,

    /// Littéral trop grand pour le type numérique (position de son premier chiffre).
    #[error("nombre trop grand pour le type (position {0})")]
    LiteralOverflow(usize),

    #[error("entrée trop longue: {len} caractères (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("parenthèses trop imbriquées: profondeur {depth} (max {max})")]
    TooDeep { depth: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
