//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie d’erreurs (thiserror)
//! - jetons.rs    : jetons, opérateurs, RPN validée, lecture caractère par caractère
//! - politique.rs : arithmétique par type (vérifiée, enroulée, big int)
//! - rpn.rs       : shunting-yard + évaluation de la RPN
//! - reglages.rs  : garde-fous (longueur, imbrication)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod politique;
pub mod reglages;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Error, Result};
pub use eval::{compute, compute_with, explain, Demarche};
pub use jetons::{Associativity, Operator, Rpn, Token};
pub use politique::NumericPolicy;
pub use reglages::Reglages;
pub use rpn::{evaluate, parse, parse_with};
