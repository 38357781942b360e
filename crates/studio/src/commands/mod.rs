use clap::ArgMatches;
use tracing::{error, warn};

use studio_core::{StudioConfig, events};

mod mfa_factors;
mod upgrade_status;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(matches.subcommand_name().unwrap_or("none"));

    let result = match matches.subcommand() {
        Some(("upgrade-status", sub_matches)) => {
            upgrade_status::handle_upgrade_status_command(sub_matches)
        }
        Some(("mfa-factors", sub_matches)) => mfa_factors::handle_mfa_factors_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    match &result {
        Ok(()) => events::log_app_shutdown(None),
        Err(e) => events::log_app_shutdown(Some(e as &dyn std::fmt::Display)),
    }
    result
}

fn load_config_with_warning() -> StudioConfig {
    match StudioConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.studio/config.toml and ./.studio/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            StudioConfig::default()
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
