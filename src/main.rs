// src/main.rs
//
// Calcul RPN : point d’entrée ligne de commande
// ---------------------------------------------
// But:
// - lire une expression (argument), choisir le type numérique
// - afficher la valeur, ou la démarche (RPN puis valeur)
// - journalisation sur stderr, niveau via RUST_LOG (défaut: warn)
//
// Tout le calcul vit dans le noyau (lib) ; ici : harnais seulement.

use std::num::Wrapping;
use std::process::ExitCode;

use calcul_rpn::{explain, Error, NumericPolicy, Reglages};
use clap::{Parser, ValueEnum};
use num_bigint::{BigInt, BigUint};

/// Évalue une expression arithmétique entière (+ - * / et parenthèses).
#[derive(Parser, Debug)]
#[command(name = "calcul-rpn")]
#[command(about = "Évalue une expression via shunting-yard + RPN", long_about = None)]
struct Args {
    /// Type numérique utilisé pour le calcul
    #[arg(long = "type", value_enum, default_value_t = TypeNum::I64)]
    type_num: TypeNum,

    /// Affiche aussi la RPN
    #[arg(long)]
    demarche: bool,

    /// Longueur maximale de l’entrée (caractères)
    #[arg(long)]
    longueur_max: Option<usize>,

    /// Imbrication maximale des parenthèses
    #[arg(long)]
    profondeur_max: Option<usize>,

    /// Expression, sans espaces (ex: 6*((8+8)/2-1))
    expression: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TypeNum {
    I32,
    I64,
    I128,
    U32,
    U64,
    /// BigInt (précision arbitraire)
    Big,
    /// BigUint (précision arbitraire, non signé)
    Bigu,
    /// i32 avec enroulement
    WrapI32,
    /// u32 avec enroulement
    WrapU32,
}

fn reglages(args: &Args) -> Reglages {
    let mut r = Reglages::default();
    if let Some(max) = args.longueur_max {
        r = r.with_longueur_max(max);
    }
    if let Some(max) = args.profondeur_max {
        r = r.with_profondeur_max(max);
    }
    r
}

/// Lignes à afficher pour un type donné.
fn calcule<T: NumericPolicy>(args: &Args, reglages: &Reglages) -> Result<Vec<String>, Error> {
    let d = explain::<T>(&args.expression, reglages)?;
    let mut lignes = Vec::with_capacity(2);
    if args.demarche {
        lignes.push(format!("RPN : {}", d.rpn));
    }
    lignes.push(d.valeur.to_string());
    Ok(lignes)
}

fn execute(args: &Args) -> Result<Vec<String>, Error> {
    let r = reglages(args);
    match args.type_num {
        TypeNum::I32 => calcule::<i32>(args, &r),
        TypeNum::I64 => calcule::<i64>(args, &r),
        TypeNum::I128 => calcule::<i128>(args, &r),
        TypeNum::U32 => calcule::<u32>(args, &r),
        TypeNum::U64 => calcule::<u64>(args, &r),
        TypeNum::Big => calcule::<BigInt>(args, &r),
        TypeNum::Bigu => calcule::<BigUint>(args, &r),
        TypeNum::WrapI32 => calcule::<Wrapping<i32>>(args, &r),
        TypeNum::WrapU32 => calcule::<Wrapping<u32>>(args, &r),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    use tracing_subscriber::{fmt, EnvFilter};

    // RUST_LOG contrôle le niveau ; WARN si absent ou invalide
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(&args) {
        Ok(lignes) => {
            for l in lignes {
                println!("{l}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(expression = %args.expression, erreur = ?e, "échec");
            eprintln!("erreur: {e}");
            ExitCode::FAILURE
        }
    }
}
