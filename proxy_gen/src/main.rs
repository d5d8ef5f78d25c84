use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use proxy_gen::cmds;
use proxy_gen::cmds::codegen::{ItemStatus, RunOutcome};
use proxy_gen::config::GenConfig;

#[derive(Parser)]
#[command(name = "proxy-gen")]
#[command(about = "Lua-binding proxy class generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate proxy classes and interfaces from the symbol model */
    Codegen {
        /* Generation config listing symbol files and items */
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: PathBuf,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Inspect one type: selection, classification, and mangled names */
    Analyze {
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: PathBuf,

        /* Fully-qualified name of the type to inspect */
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,

        /* Also dump the rendered proxy source to stdout */
        #[arg(long = "print-source")]
        print_source: bool,

        /* Emit the report as JSON */
        #[arg(long = "json")]
        json: bool,

        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen { config, verbose } => {
            let config = GenConfig::load(&config)?;
            let outcome = cmds::codegen::run(&config, verbose)?;
            print_summary(&outcome);
        }

        Commands::Analyze {
            config,
            type_name,
            print_source,
            json,
            verbose,
        } => {
            let config = GenConfig::load(&config)?;
            cmds::analyze::run(&config, &type_name, print_source, json, verbose)?;
        }
    }

    Ok(())
}

fn print_summary(outcome: &RunOutcome) {
    for report in &outcome.reports {
        match &report.status {
            ItemStatus::Generated { path, .. } => {
                println!("[✓] {} -> {}", report.target_name, path.display());
            }
            ItemStatus::Skipped { reason } => {
                println!(
                    "{}",
                    format!("[!] {} skipped: {}", report.target_name, reason).yellow()
                );
            }
        }
    }

    println!("[✓] Code generation complete!");

    if outcome.needs_delegate_regen {
        println!(
            "{}",
            "[!] Delegate-backed members were generated; regenerate the script-binding metadata"
                .bold()
                .red()
        );
    }
}
