//! src/noyau/reglages.rs
//!
//! Réglages du noyau : garde-fous sur l’entrée (anti-abus / anti-gel).
//!
//! Les calculs restent purs : aucun état global, les réglages sont passés
//! explicitement à `parse_with` / `compute_with`.
//!
//! Par défaut aucune borne : `parse` / `compute` acceptent toute expression
//! valide. Les bornes sont à activer (`with_*`, options du binaire).

use super::erreur::{Error, Result};

/// Sans borne (en caractères).
const LONGUEUR_MAX_DEFAUT: usize = usize::MAX;

/// Sans borne (imbrication des parenthèses).
const PROFONDEUR_MAX_DEFAUT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub longueur_max: usize,
    pub profondeur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn with_longueur_max(mut self, max: usize) -> Self {
        self.longueur_max = max;
        self
    }

    pub fn with_profondeur_max(mut self, max: usize) -> Self {
        self.profondeur_max = max;
        self
    }

    pub(crate) fn verifie_longueur(&self, expression: &str) -> Result<()> {
        // borne rapide en octets avant de compter les caractères
        if expression.len() <= self.longueur_max {
            return Ok(());
        }
        let len = expression.chars().count();
        if len > self.longueur_max {
            return Err(Error::TooLong {
                len,
                max: self.longueur_max,
            });
        }
        Ok(())
    }

    pub(crate) fn verifie_profondeur(&self, profondeur: usize) -> Result<()> {
        if profondeur > self.profondeur_max {
            return Err(Error::TooDeep {
                depth: profondeur,
                max: self.profondeur_max,
            });
        }
        Ok(())
    }
}
