//! ensname CLI
//!
//! Command-line interface for ENS name normalization and namehash computation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ensname_core::types::Hash256;
use ensname_ens::{
    address_to_reverse_domain, is_valid_name, label_hash, namehash, normalize, reverse_node,
};

/// ensname - ENS name normalization and namehash
#[derive(Parser)]
#[command(name = "ensname")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, env = "ENSNAME_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a name (UTS-46, STD3 rules)
    Normalize {
        /// Name to normalize
        name: String,
    },

    /// Check whether a name normalizes
    Valid {
        /// Name to check
        name: String,
    },

    /// Hash a single label
    Labelhash {
        /// Label to hash (must not contain '.')
        label: String,
    },

    /// Compute the namehash (node) of a name
    Namehash {
        /// Name to hash
        name: String,
        /// Hash the name as given, without normalizing it first
        #[arg(long)]
        raw: bool,
    },

    /// Compute the reverse record name and node of an address
    Reverse {
        /// Ethereum address (hex, with or without 0x)
        address: String,
    },
}

#[derive(Debug, Serialize)]
struct NameReport {
    input: String,
    normalized: String,
}

#[derive(Debug, Serialize)]
struct ValidityReport {
    input: String,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct HashReport {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
    hash: Hash256,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "ensname=debug,ensname_ens=debug,info"
    } else {
        "ensname=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Normalize { name } => {
            let report = normalize_report(&name)?;
            emit(cli.json, &report, || {
                println!("{} {}", "Normalized:".green().bold(), report.normalized);
            })
        }
        Commands::Valid { name } => {
            let report = validity_report(&name);
            emit(cli.json, &report, || {
                if report.valid {
                    println!("{} {}", "✅ Valid:".green().bold(), report.input);
                } else {
                    println!("{} {}", "❌ Invalid:".red().bold(), report.input);
                }
            })
        }
        Commands::Labelhash { label } => {
            let report = labelhash_report(&label)?;
            emit(cli.json, &report, || print_hash("Label hash:", &report))
        }
        Commands::Namehash { name, raw } => {
            let report = namehash_report(&name, raw)?;
            emit(cli.json, &report, || print_hash("Namehash:", &report))
        }
        Commands::Reverse { address } => {
            let report = reverse_report(&address)?;
            emit(cli.json, &report, || print_hash("Reverse node:", &report))
        }
    }
}

fn normalize_report(name: &str) -> Result<NameReport> {
    let normalized = normalize(name).context("Name failed normalization")?;
    Ok(NameReport {
        input: name.to_string(),
        normalized,
    })
}

fn validity_report(name: &str) -> ValidityReport {
    ValidityReport {
        input: name.to_string(),
        valid: is_valid_name(name),
    }
}

fn labelhash_report(label: &str) -> Result<HashReport> {
    let hash = label_hash(label).context("Cannot hash label")?;
    Ok(HashReport {
        input: label.to_string(),
        normalized: None,
        hash,
    })
}

fn namehash_report(name: &str, raw: bool) -> Result<HashReport> {
    if raw {
        debug!(name, "Hashing without normalization");
        return Ok(HashReport {
            input: name.to_string(),
            normalized: None,
            hash: namehash(name),
        });
    }

    let normalized = normalize(name).context("Name failed normalization")?;
    let hash = namehash(&normalized);
    Ok(HashReport {
        input: name.to_string(),
        normalized: Some(normalized),
        hash,
    })
}

fn reverse_report(address: &str) -> Result<HashReport> {
    let domain = address_to_reverse_domain(address).context("Invalid address")?;
    let hash = reverse_node(address).context("Invalid address")?;
    Ok(HashReport {
        input: address.to_string(),
        normalized: Some(domain),
        hash,
    })
}

fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        text();
    }
    Ok(())
}

fn print_hash(title: &str, report: &HashReport) {
    println!("{} {}", "Input:".dimmed(), report.input);
    if let Some(normalized) = &report.normalized {
        println!("{} {}", "Name:".dimmed(), normalized);
    }
    println!("{} {}", title.green().bold(), report.hash);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_namehash_raw() {
        let cli = Cli::try_parse_from(["ensname", "--json", "namehash", "Foo.eth", "--raw"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Namehash { raw: true, .. }));
    }

    #[test]
    fn test_namehash_report_normalizes() {
        let report = namehash_report("Foo.ETH", false).unwrap();
        assert_eq!(report.normalized.as_deref(), Some("foo.eth"));
        assert_eq!(
            report.hash.to_string(),
            "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
        );
    }

    #[test]
    fn test_namehash_report_raw_skips_normalization() {
        let report = namehash_report("Foo.ETH", true).unwrap();
        assert!(report.normalized.is_none());
        assert_ne!(report.hash, namehash("foo.eth"));
    }

    #[test]
    fn test_invalid_name_is_an_error() {
        assert!(namehash_report("a b.eth", false).is_err());
        assert!(normalize_report("a b.eth").is_err());
        assert!(!validity_report("a b.eth").valid);
    }

    #[test]
    fn test_labelhash_report_rejects_dots() {
        assert!(labelhash_report("foo.eth").is_err());
        assert!(labelhash_report("foo").is_ok());
    }

    #[test]
    fn test_reverse_report() {
        let report = reverse_report("0x314159265dD8dbb310642f98f50C066173C1259b").unwrap();
        assert_eq!(
            report.normalized.as_deref(),
            Some("314159265dd8dbb310642f98f50c066173c1259b.addr.reverse")
        );
    }

    #[test]
    fn test_hash_report_json_shape() {
        let report = labelhash_report("eth").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["hash"],
            "0x4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"
        );
        assert!(json.get("normalized").is_none());
    }
}
