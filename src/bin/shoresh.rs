//! Command-line interface for shoresh
//! This binary inspects verse texts and highlight catalogs from the shell.
//!
//! Usage:
//!   shoresh tokens `<verses>` [--format `<format>`]   - Dump the token stream
//!   shoresh groups `<catalog>`                       - Summarize catalog groups
//!   shoresh check `<verses>` `<catalog>`               - Validate the shared index space

use clap::{Arg, Command};
use std::path::Path;

use shoresh::{HighlightCatalog, StudyLoader};

fn main() {
    let matches = Command::new("shoresh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Hebrew verse texts and root-highlight catalogs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a verse text and dump the token stream")
                .arg(
                    Arg::new("verses")
                        .help("Path to the verse text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: token-json, token-yaml, token-simple")
                        .default_value("token-json"),
                ),
        )
        .subcommand(
            Command::new("groups")
                .about("Summarize the groups of a highlight catalog")
                .arg(
                    Arg::new("catalog")
                        .help("Path to the highlight catalog (JSON)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a catalog against the tokenized verse text")
                .arg(
                    Arg::new("verses")
                        .help("Path to the verse text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("catalog")
                        .help("Path to the highlight catalog (JSON)")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let verses = sub.get_one::<String>("verses").expect("verses is required");
            let format = sub.get_one::<String>("format").expect("format has a default");
            handle_tokens_command(verses, format);
        }
        Some(("groups", sub)) => {
            let catalog = sub
                .get_one::<String>("catalog")
                .expect("catalog is required");
            handle_groups_command(catalog);
        }
        Some(("check", sub)) => {
            let verses = sub.get_one::<String>("verses").expect("verses is required");
            let catalog = sub
                .get_one::<String>("catalog")
                .expect("catalog is required");
            handle_check_command(verses, catalog);
        }
        _ => unreachable!("subcommand is required"),
    }
}

/// Handle the tokens command
fn handle_tokens_command(verses: &str, format: &str) {
    let loader = StudyLoader::new();
    let study = loader
        .load_text_only(Path::new(verses))
        .unwrap_or_else(|e| fail(&e.to_string()));

    match format {
        "token-json" => {
            let json = serde_json::to_string_pretty(study.groups())
                .unwrap_or_else(|e| fail(&format!("error formatting tokens: {}", e)));
            println!("{}", json);
        }
        "token-yaml" => {
            let yaml = serde_yaml::to_string(study.groups())
                .unwrap_or_else(|e| fail(&format!("error formatting tokens: {}", e)));
            print!("{}", yaml);
        }
        "token-simple" => {
            for token in study.tokens() {
                match token.word_index() {
                    Some(index) => println!("{}\t{}", index, token.text()),
                    None => println!("-\t{}", token.text()),
                }
            }
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: token-json, token-yaml, token-simple");
            std::process::exit(1);
        }
    }
}

/// Handle the groups command
fn handle_groups_command(catalog_path: &str) {
    let source = std::fs::read_to_string(catalog_path)
        .unwrap_or_else(|e| fail(&format!("failed to read {}: {}", catalog_path, e)));
    let catalog = HighlightCatalog::from_json_str(&source).unwrap_or_else(|e| fail(&e.to_string()));

    println!("{} group(s)", catalog.len());
    for (position, group) in catalog.groups().iter().enumerate() {
        println!(
            "  [{}] {} ({} occurrence(s))",
            position,
            group.label(position),
            group.words.len()
        );
    }
}

/// Handle the check command
fn handle_check_command(verses: &str, catalog: &str) {
    let loader = StudyLoader::new();
    let study = loader
        .load(Path::new(verses), Path::new(catalog))
        .unwrap_or_else(|e| fail(&e.to_string()));

    if study.issues().is_empty() {
        println!(
            "ok: {} group(s) consistent with {} word(s)",
            study.catalog().len(),
            study.word_count()
        );
        return;
    }

    eprintln!("{} issue(s) found:", study.issues().len());
    for issue in study.issues() {
        eprintln!("  {}", issue);
    }
    std::process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
