//! Calcul RPN : expressions arithmétiques entières
//!
//! `"6*((8+8)/2-1)"` -> RPN `6 8 8 + 2 / 1 - *` -> `42`
//!
//! Le type numérique est choisi par l’appelant (`i32`, `u64`, `Wrapping<i32>`,
//! `BigInt`…) via [`NumericPolicy`].

pub mod noyau;

pub use noyau::{
    compute, compute_with, evaluate, explain, parse, parse_with, Associativity, Demarche, Error,
    NumericPolicy, Operator, Reglages, Result, Rpn, Token,
};
