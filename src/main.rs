//! update-nbconf: point a NetBeans installation at a JDK and cache directories
//!
//! ```text
//! update-nbconf install=netbeans jdk=/opt/jdk-17 cache=../nbcache
//! update-nbconf install netbeans jdk /opt/jdk-17 cache ../nbcache
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

use update_nbconf::commands::apply::{self, ApplyOptions};
use update_nbconf::parse_properties;

#[derive(Parser)]
#[command(name = "update-nbconf")]
#[command(
    about = "Point netbeans.conf at a JDK and at user/cache directories",
    long_about = "Rewrites netbeans_jdkhome, netbeans_default_userdir and \
                  netbeans_default_cachedir in <install>/etc/netbeans.conf.\n\n\
                  Properties are given as `key=value` or `key value`:\n  \
                  install  NetBeans installation directory\n  \
                  jdk      JDK home directory\n  \
                  cache    directory receiving userDir/ and cacheDir/ (created if missing)\n\n\
                  Relative paths are resolved against the current directory."
)]
#[command(version)]
struct Cli {
    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Launch properties (install, jdk, cache)
    #[arg(
        value_name = "PROPERTY",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    properties: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let base_dir = std::env::current_dir().context("Could not determine current directory")?;
    let properties = parse_properties(&cli.properties);

    if cli.dry_run {
        println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
    }

    let options = ApplyOptions {
        dry_run: cli.dry_run,
    };

    match apply::execute(&base_dir, &properties, options) {
        Some(report) if report.dry_run => {
            println!(
                "{}",
                format!("=> Dry run, {} not modified", report.conf_file.display()).green()
            );
            Ok(ExitCode::SUCCESS)
        }
        Some(report) => {
            println!(
                "{}",
                format!("=> File {} updated", report.conf_file.display()).green()
            );
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{}", "=> Nothing done".red());
            Ok(ExitCode::FAILURE)
        }
    }
}
