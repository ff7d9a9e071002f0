// src/main.rs
//
// Calculatrice scientifique — point d’entrée (ligne de commande)
// --------------------------------------------------------------
// - Avec une expression : évalue une fois, code de sortie 1 si erreur
// - Sans expression     : boucle interactive sur l’entrée standard
// - Journal             : tracing-subscriber sur stderr (RUST_LOG ou --verbose)

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

mod app;

use app::etat::{DIGITS_DEFAUT, DIGITS_MAX};
use app::AppCalc;

#[derive(Parser, Debug)]
#[command(name = "calculatrice_sci", version, about = "Calculatrice scientifique (trig en degrés)")]
struct Args {
    /// Expression à évaluer (sinon : mode interactif)
    expression: Option<String>,

    /// Décimales affichées (0..=15)
    #[arg(long, default_value_t = DIGITS_DEFAUT)]
    chiffres: usize,

    /// Journal détaillé (normalisation, jetons, opérations)
    #[arg(short, long)]
    verbose: bool,
}

fn installer_journal(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let defaut = if verbose {
        "calculatrice_sci=debug"
    } else {
        "warn"
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    installer_journal(args.verbose);

    let mut app = AppCalc::default();
    app.set_digits(args.chiffres);
    if args.chiffres > DIGITS_MAX {
        tracing::warn!(demande = args.chiffres, max = DIGITS_MAX, "précision bornée");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let res = match args.expression {
        Some(expr) => app.une_fois(&expr, &mut out).map(|ok| {
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
        None => writeln!(out, "Calculatrice (:q pour quitter, :h pour l’historique)")
            .and_then(|_| app.repl(io::stdin().lock(), &mut out))
            .map(|_| ExitCode::SUCCESS),
    };

    match res {
        Ok(code) => code,
        Err(e) => {
            eprintln!("erreur d’entrée/sortie : {e}");
            ExitCode::FAILURE
        }
    }
}
