use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailadmit_lib::{AdmissionEngine, EnvironmentConfig, RuleFlags, Verdict};

use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "mailadmit-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    stdin: bool,

    /// fichier de configuration JSON (map environnement -> règles)
    #[arg(long)]
    config: Option<String>,

    /// environnement à résoudre dans la configuration
    #[arg(long, default_value = "production")]
    env: String,

    /// format: human|json
    #[arg(long, default_value = "human")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    Check {
        email: String,
    },
}

struct Row {
    email: String,
    verdict: Verdict,
}

fn build_engine(cli: &Cli) -> Result<AdmissionEngine> {
    match cli.config.as_deref() {
        Some(path) => engine_from_file(path, &cli.env),
        None => Ok(AdmissionEngine::from_environment(&default_environment())),
    }
}

/// Sans --config: règles par défaut (jetables bloqués, plus-addressing toléré).
fn default_environment() -> EnvironmentConfig {
    EnvironmentConfig::new(RuleFlags {
        allow_disposable_emails: false,
        allow_plus_addressing: true,
    })
}

#[cfg(feature = "with-serde")]
fn engine_from_file(path: &str, env: &str) -> Result<AdmissionEngine> {
    use mailadmit_lib::ConfigMap;

    let raw = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let map: ConfigMap =
        serde_json::from_str(&raw).with_context(|| format!("parse {path} as config map"))?;
    let engine = AdmissionEngine::from_config(env, &map)?;
    Ok(engine)
}

#[cfg(not(feature = "with-serde"))]
fn engine_from_file(_path: &str, _env: &str) -> Result<AdmissionEngine> {
    bail!("--config nécessite la feature 'with-serde'")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = build_engine(&cli)?;
    let mut rows: Vec<Row> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            let verdict = engine.validate_email(&email);
            rows.push(Row { email, verdict });
        }
    } else if let Some(Commands::Check { email }) = cli.cmd {
        let verdict = engine.validate_email(&email);
        rows.push(Row { email, verdict });
    } else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                match r.verdict.error_message() {
                    None => println!("[OK]       {}", r.email),
                    Some(reason) => println!("[REJECTED] {} :: {}", r.email, reason),
                }
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                for r in &rows {
                    println!("{}", serde_json::to_string(&r.verdict)?);
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                bail!("format=json nécessite la feature 'with-serde'");
            }
        }
        other => bail!("unknown --format '{other}', use: human|json"),
    }

    // codes de sortie : 0 OK, 2 rejets, 1 fatal
    if rows.iter().any(|r| !r.verdict.is_pass()) {
        std::process::exit(2);
    }
    Ok(())
}
