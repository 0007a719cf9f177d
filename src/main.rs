use anyhow::Result;
use clap::{Arg, Command};

// Use modules from the library
use wifimon::commands;

fn build_cli() -> Command {
    Command::new("wifimon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal wifi hotspot monitor")
        .subcommand(
            Command::new("scan")
                .about("Scan once and print the hotspot panel")
                .arg(
                    Arg::new("width")
                        .short('W')
                        .long("width")
                        .value_name("COLS")
                        .value_parser(clap::value_parser!(u16))
                        .help("Maximum panel width in columns"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(clap::ArgAction::SetTrue)
                        .help("Print the snapshot as JSON"),
                )
                .arg(
                    Arg::new("disable-wifi")
                        .long("disable-wifi")
                        .action(clap::ArgAction::SetTrue)
                        .help("Disable the wifi panel for this run"),
                ),
        )
        .subcommand(
            Command::new("monitor")
                .about("Live wifi hotspot dashboard")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .value_parser(clap::value_parser!(u64))
                        .help("Refresh interval in milliseconds"),
                )
                .arg(
                    Arg::new("disable-wifi")
                        .long("disable-wifi")
                        .action(clap::ArgAction::SetTrue)
                        .help("Start with the wifi panel disabled"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage wifimon configuration")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("hide")
                        .about("Hide an interface from scanning (exact name or 'prefix*')")
                        .arg(Arg::new("interface").required(true).index(1)),
                )
                .subcommand(
                    Command::new("unhide")
                        .about("Remove an interface from the hidden list")
                        .arg(Arg::new("interface").required(true).index(1)),
                )
                .subcommand(
                    Command::new("wifi")
                        .about("Enable or disable the wifi panel")
                        .arg(
                            Arg::new("state")
                                .required(true)
                                .value_parser(["on", "off"])
                                .index(1),
                        ),
                )
                .subcommand(Command::new("show").about("Show the current configuration")),
        )
}

fn main() -> Result<()> {
    wifimon::init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("scan", sub_matches)) => commands::scan(sub_matches),
        Some(("monitor", sub_matches)) => commands::monitor(sub_matches),
        Some(("config", sub_matches)) => commands::handle_config(sub_matches),
        _ => {
            build_cli().print_help()?;
            println!();
            Ok(())
        }
    }
}
