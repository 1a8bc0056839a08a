mod generator;
mod logging;
mod model;
mod preset;
mod steps;
mod tui;
mod ui;
mod wizard;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use generator::Secrets;
use model::DbConfig;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;
use ui::Theme;
use wizard::Wizard;

/// Interactive builder for Oracle `dbca -silent` command lines.
#[derive(Debug, Parser)]
#[command(name = "dbca-wizard", version, about)]
struct Args {
    /// YAML file whose values replace the built-in defaults
    #[arg(long, value_name = "FILE")]
    preset: Option<PathBuf>,

    /// Print real passwords instead of <PASSWORD> without asking
    #[arg(long)]
    show_passwords: bool,

    /// Render without colors
    #[arg(long)]
    no_color: bool,

    /// Directory for the session log
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Print the default answers as a YAML preset and exit
    #[arg(long)]
    print_defaults: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_defaults {
        let yaml =
            serde_yaml::to_string(&DbConfig::default()).context("Failed to render defaults")?;
        print!("{yaml}");
        return Ok(());
    }

    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let log_guard = logging::init_logging(&log_dir)
        .with_context(|| format!("Failed to set up logging in {}", log_dir.display()))?;
    info!(log = %log_guard.path().display(), "dbca-wizard starting");

    let config = match &args.preset {
        Some(path) => preset::load_preset(path).context("Preset failed validation")?,
        None => DbConfig::default(),
    };

    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::default()
    };

    let mut wizard = Wizard::new(steps::dbca_steps(), config);
    tui::run_tui(&mut wizard, &theme)?;

    report(&wizard, args.show_passwords)
}

/// Print what the finished (or print-and-quit) wizard produced.
fn report(wizard: &Wizard, show_passwords: bool) -> Result<()> {
    let config = wizard.config();
    let completed = wizard.is_completed();

    if !completed && !wizard.should_print() {
        info!("no command generated");
        println!("DBCA wizard cancelled.");
        return Ok(());
    }

    if completed {
        println!("{}", generator::summary(config));
    }

    let secrets = choose_secrets(show_passwords)?;
    info!(?secrets, "printing command");
    println!("Generated DBCA command:\n");
    println!("{}", generator::command(config, secrets));
    Ok(())
}

fn choose_secrets(show_passwords: bool) -> Result<Secrets> {
    if show_passwords {
        return Ok(Secrets::Revealed);
    }
    if !std::io::stdin().is_terminal() {
        return Ok(Secrets::Masked);
    }

    let reveal = Confirm::new()
        .with_prompt("Show passwords in the generated command?")
        .default(false)
        .interact()
        .context("Failed to read answer")?;
    Ok(if reveal {
        Secrets::Revealed
    } else {
        Secrets::Masked
    })
}
