//! Configuration command handlers.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::config::Config;

pub fn handle_config(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("hide", sub_matches)) => hide(sub_matches),
        Some(("unhide", sub_matches)) => unhide(sub_matches),
        Some(("wifi", sub_matches)) => set_wifi(sub_matches),
        Some(("show", _)) => show(),
        _ => {
            println!("Use 'wifimon config --help' for more information.");
            Ok(())
        }
    }
}

fn hide(matches: &clap::ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("interface")
        .context("Interface name is required")?;

    let mut config = Config::load()?;
    config.hide_interface(name.clone());
    config.save()?;

    println!("{} {} hidden from scanning", "OK".green().bold(), name);
    Ok(())
}

fn unhide(matches: &clap::ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("interface")
        .context("Interface name is required")?;

    let mut config = Config::load()?;
    if config.unhide_interface(name) {
        config.save()?;
        println!("{} {} visible again", "OK".green().bold(), name);
    } else {
        println!("{} {} was not hidden", "--".yellow(), name);
    }
    Ok(())
}

fn set_wifi(matches: &clap::ArgMatches) -> Result<()> {
    let state = matches
        .get_one::<String>("state")
        .context("State argument is required")?;

    let mut config = Config::load()?;
    config.disable_wifi = state == "off";
    config.save()?;

    println!("{} wifi panel {}", "OK".green().bold(), state);
    Ok(())
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration".bold());
    println!(
        "  wifi panel:   {}",
        if config.disable_wifi {
            "off".red().to_string()
        } else {
            "on".green().to_string()
        }
    );
    println!("  refresh:      {}ms", config.refresh_ms);

    if config.hidden_interfaces.is_empty() {
        println!("  hidden:       (none)");
    } else {
        println!("  hidden:       {}", config.hidden_interfaces.join(", "));
    }

    Ok(())
}
