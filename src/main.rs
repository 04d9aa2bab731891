//! create-spark CLI

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use create_spark::{CreateCommand, CreateOptions, FeatureFlags};

#[derive(Parser)]
#[command(name = "create-spark")]
#[command(version)]
#[command(about = "Minimal front-end project generator", long_about = None)]
struct Cli {
    /// Project name
    #[arg(default_value = "my-project")]
    name: String,

    /// Add TypeScript support
    #[arg(long, visible_alias = "ts")]
    typescript: bool,

    /// Add Tailwind CSS v4
    #[arg(long, visible_alias = "tw")]
    tailwind: bool,

    /// Add Vitest
    #[arg(long)]
    test: bool,

    /// Add OxLint
    #[arg(long)]
    lint: bool,

    /// Add Prettier
    #[arg(long)]
    format: bool,

    /// Use Rolldown-Vite (Rust-based, beta)
    #[arg(long)]
    rolldown: bool,

    /// Target directory
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{} {error}", style("Error:").red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    println!(
        "{} {} {}",
        style("Creating").blue().bold(),
        style("project:").bold(),
        style(&cli.name).cyan().bold()
    );
    println!();

    let options = CreateOptions {
        directory: cli.directory,
        flags: FeatureFlags {
            typescript: cli.typescript,
            tailwind: cli.tailwind,
            test: cli.test,
            lint: cli.lint,
            format: cli.format,
            rolldown: cli.rolldown,
        },
    };

    let command = CreateCommand::new();
    command.execute(&cli.name, &options).await?;

    print_success(&cli.name);

    Ok(())
}

/// Print success message with next steps
fn print_success(name: &str) {
    println!();
    println!(
        "{}",
        style("✓ Project created successfully!").green().bold()
    );
    println!();
    println!("{}", style("Next steps:").bold());
    println!();
    println!(
        "  {} {}",
        style("$").dim(),
        style(format!("cd {name}")).cyan()
    );
    println!("  {} {}", style("$").dim(), style("pnpm dev").cyan());
    println!();
}
