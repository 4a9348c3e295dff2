//! Noyau : évaluation (pipeline complet)
//!
//! chaîne -> lexèmes -> shunting-yard -> RPN -> pile de valeurs -> T
//!
//! Fonctions pures : deux appels avec la même entrée et le même `T`
//! donnent le même résultat.

use super::erreur::Result;
use super::politique::NumericPolicy;
use super::reglages::Reglages;
use super::rpn::{evaluate, parse_with};

/// Démarche : la RPN (texte) et la valeur obtenue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demarche<T> {
    pub rpn: String,
    pub valeur: T,
}

/// `parse` puis `evaluate`.
pub fn compute<T: NumericPolicy>(expression: &str) -> Result<T> {
    compute_with(expression, &Reglages::default())
}

pub fn compute_with<T: NumericPolicy>(expression: &str, reglages: &Reglages) -> Result<T> {
    evaluate(parse_with(expression, reglages)?)
}

/// Comme `compute`, en gardant la RPN pour l’affichage.
pub fn explain<T: NumericPolicy>(expression: &str, reglages: &Reglages) -> Result<Demarche<T>> {
    let rpn = parse_with(expression, reglages)?;
    let rpn_txt = rpn.to_string();
    let valeur = evaluate(rpn)?;
    Ok(Demarche {
        rpn: rpn_txt,
        valeur,
    })
}
