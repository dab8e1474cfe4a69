use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use typespec::checker::CheckSession;
use typespec::error::DiagnosticError;
use typespec::lexer::{format_tokens, tokenize};
use typespec::{format_types, parse_type, TypeSpecError};

#[derive(Parser)]
#[command(name = "typespec")]
#[command(author, version, about = "Parse and check type specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a specification and print its AST as JSON
    Parse {
        /// The specification, e.g. "Maybe [Number]"
        spec: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the token stream of a specification
    Tokens {
        /// The specification to tokenize
        spec: String,
    },

    /// Print the canonical form of a specification
    Fmt {
        /// The specification to format
        spec: String,
    },

    /// Check a file containing one specification per line
    Check {
        /// The file to check
        input: PathBuf,
    },

    /// Start an interactive REPL
    Repl,
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Parse { spec, pretty } => parse(&spec, pretty),
        Commands::Tokens { spec } => tokens(&spec),
        Commands::Fmt { spec } => fmt(&spec),
        Commands::Check { input } => check(input),
        Commands::Repl => repl(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Render a parse failure against the specification text
fn report_spec_error(spec: &str, error: &TypeSpecError) -> Result<()> {
    let mut files = SimpleFiles::new();
    let file_id = files.add("<spec>".to_string(), spec.to_string());
    let diagnostic = DiagnosticError::new(error.clone().into(), file_id).to_diagnostic();

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = codespan_reporting::term::Config::default();
    codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
    Ok(())
}

fn parse(spec: &str, pretty: bool) -> Result<()> {
    let types = match parse_type(spec) {
        Ok(types) => types,
        Err(e) => {
            report_spec_error(spec, &e)?;
            anyhow::bail!("Parsing failed");
        }
    };

    let json = if pretty {
        serde_json::to_string_pretty(&types)?
    } else {
        serde_json::to_string(&types)?
    };
    println!("{}", json);
    Ok(())
}

fn tokens(spec: &str) -> Result<()> {
    let tokens = tokenize(spec);
    println!("{}", "=== Tokens ===".blue().bold());
    if !tokens.is_empty() {
        println!("{}", format_tokens(&tokens));
    }
    Ok(())
}

fn fmt(spec: &str) -> Result<()> {
    match parse_type(spec) {
        Ok(types) => {
            println!("{}", format_types(&types));
            Ok(())
        }
        Err(e) => {
            report_spec_error(spec, &e)?;
            anyhow::bail!("Parsing failed");
        }
    }
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    let mut session = CheckSession::open(&input)
        .with_context(|| format!("Failed to load specifications from {:?}", input))?;
    let checked = session.run();
    session.report_diagnostics()?;

    if session.has_errors() {
        anyhow::bail!(
            "{} of {} specification(s) failed to parse",
            session.error_count(),
            checked.len() + session.error_count()
        );
    }

    if session.has_warnings() {
        println!(
            "{}: {} specification(s) parsed, {} warning(s)",
            "success".yellow().bold(),
            checked.len(),
            session.warning_count()
        );
    } else {
        println!(
            "{}: {} specification(s) parsed",
            "success".green().bold(),
            checked.len()
        );
    }
    Ok(())
}

fn repl() -> Result<()> {
    println!("{}", "Type Specification REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_number = 1;
    let mut json = false;

    loop {
        print!("typespec:{:03}> ", line_number);
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim();

        match input {
            ":quit" | ":q" => {
                println!("Goodbye!");
                break;
            }
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("  :json, :j    Toggle JSON output");
                println!("\nEnter a type specification to parse it.");
                continue;
            }
            ":json" | ":j" => {
                json = !json;
                println!("JSON output {}", if json { "on" } else { "off" });
                continue;
            }
            "" => continue,
            _ => {}
        }

        match parse_type(input) {
            Ok(types) if json => println!("{}: {}", "result".green(), serde_json::to_string(&types)?),
            Ok(types) => println!("{}: {}", "result".green(), format_types(&types)),
            Err(e) => eprintln!("{}: {}", "error".red(), e),
        }

        line_number += 1;
    }

    Ok(())
}
