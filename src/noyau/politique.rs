// src/noyau/politique.rs
//
// Politique numérique : l’arithmétique dont l’évaluateur a besoin, par type.
//
// Règles communes (écrites une seule fois, dans les méthodes fournies) :
// - division : diviseur nul => DivisionByZero, sinon troncature vers zéro
// - soustraction non signée : droite > gauche => Underflow (jamais d’enroulement)
// - accumulation des chiffres : valeur*10 + chiffre, avec le débordement du type
//
// Débordement (add/mul/sub signée, MIN / -1) selon le type :
// - entiers primitifs      : vérifié => Error::Overflow
// - Wrapping<entier>       : enroulement (modulo 2^n)
// - BigInt / BigUint       : jamais (précision arbitraire)

use std::fmt;
use std::num::Wrapping;

use num_bigint::{BigInt, BigUint};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use super::erreur::{Error, Result};

/// Capacités arithmétiques {add, sub, mul, div} liées à un type entier.
///
/// Les implémenteurs fournissent les opérations « brutes » ; les gardes
/// (zéro, signe) sont dans les méthodes fournies `sub`, `div`, `push_digit`.
pub trait NumericPolicy: Clone + PartialOrd + fmt::Debug + fmt::Display {
    /// Contrôle la garde de `sub`.
    const SIGNED: bool;

    /// Valeur d’un chiffre décimal (0..=9).
    fn from_digit(digit: u8) -> Self;

    fn is_zero(&self) -> bool;

    fn add(self, rhs: Self) -> Result<Self>;

    fn mul(self, rhs: Self) -> Result<Self>;

    /// Soustraction sans garde de signe.
    fn sub_raw(self, rhs: Self) -> Result<Self>;

    /// Division avec diviseur non nul.
    fn div_raw(self, rhs: Self) -> Result<Self>;

    fn sub(self, rhs: Self) -> Result<Self> {
        if !Self::SIGNED && rhs > self {
            return Err(Error::Underflow);
        }
        self.sub_raw(rhs)
    }

    fn div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.div_raw(rhs)
    }

    /// `self*10 + digit` : un pas de lecture d’un littéral.
    fn push_digit(self, digit: u8) -> Result<Self> {
        let dix = Self::from_digit(9).add(Self::from_digit(1))?;
        self.mul(dix)?.add(Self::from_digit(digit))
    }
}

/* ------------------------ Entiers primitifs (vérifiés) ------------------------ */

macro_rules! politique_verifiee {
    ($signe:expr => $($t:ty),+ $(,)?) => {$(
        impl NumericPolicy for $t {
            const SIGNED: bool = $signe;

            fn from_digit(digit: u8) -> Self {
                digit as $t
            }

            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn add(self, rhs: Self) -> Result<Self> {
                CheckedAdd::checked_add(&self, &rhs).ok_or(Error::Overflow)
            }

            fn mul(self, rhs: Self) -> Result<Self> {
                CheckedMul::checked_mul(&self, &rhs).ok_or(Error::Overflow)
            }

            fn sub_raw(self, rhs: Self) -> Result<Self> {
                CheckedSub::checked_sub(&self, &rhs).ok_or(Error::Overflow)
            }

            // diviseur non nul ici : None ne vient que de MIN / -1
            fn div_raw(self, rhs: Self) -> Result<Self> {
                CheckedDiv::checked_div(&self, &rhs).ok_or(Error::Overflow)
            }
        }
    )+};
}

politique_verifiee!(true => i8, i16, i32, i64, i128, isize);
politique_verifiee!(false => u8, u16, u32, u64, u128, usize);

/* ------------------------ Wrapping<entier> (enroulement) ------------------------ */

macro_rules! politique_enroulee {
    ($signe:expr => $($t:ty),+ $(,)?) => {$(
        impl NumericPolicy for Wrapping<$t> {
            const SIGNED: bool = $signe;

            fn from_digit(digit: u8) -> Self {
                Wrapping(digit as $t)
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }

            fn add(self, rhs: Self) -> Result<Self> {
                Ok(self + rhs)
            }

            fn mul(self, rhs: Self) -> Result<Self> {
                Ok(self * rhs)
            }

            fn sub_raw(self, rhs: Self) -> Result<Self> {
                Ok(self - rhs)
            }

            fn div_raw(self, rhs: Self) -> Result<Self> {
                Ok(Wrapping(self.0.wrapping_div(rhs.0)))
            }
        }
    )+};
}

politique_enroulee!(true => i8, i16, i32, i64, i128, isize);
politique_enroulee!(false => u8, u16, u32, u64, u128, usize);

/* ------------------------ Big int (précision arbitraire) ------------------------ */

impl NumericPolicy for BigInt {
    const SIGNED: bool = true;

    fn from_digit(digit: u8) -> Self {
        BigInt::from(digit)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn mul(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn sub_raw(self, rhs: Self) -> Result<Self> {
        Ok(self - rhs)
    }

    // `/` sur BigInt tronque vers zéro, comme les primitifs
    fn div_raw(self, rhs: Self) -> Result<Self> {
        Ok(self / rhs)
    }
}

impl NumericPolicy for BigUint {
    const SIGNED: bool = false;

    fn from_digit(digit: u8) -> Self {
        BigUint::from(digit)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn mul(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs)
    }

    // garde de signe déjà passée : rhs <= self
    fn sub_raw(self, rhs: Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn div_raw(self, rhs: Self) -> Result<Self> {
        Ok(self / rhs)
    }
}
