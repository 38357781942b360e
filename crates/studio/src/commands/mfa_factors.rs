use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, info};

use studio_core::profile::Factor;
use studio_core::{CacheOptions, MfaFactorsQuery, QueryCache};

use super::{load_config_with_warning, runtime};
use crate::sources::FileMfaBackend;

pub(crate) fn handle_mfa_factors_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let factors_file = matches
        .get_one::<String>("factors-file")
        .map(PathBuf::from)
        .ok_or("Factors file argument is required")?;
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();

    info!(event = "cli.mfa_factors_started");

    let query = MfaFactorsQuery::new(
        Arc::new(FileMfaBackend::new(factors_file)),
        QueryCache::new(CacheOptions::from(&config.query)),
    );
    let options = MfaFactorsQuery::options_from_config(&config.mfa);

    let result = runtime()?.block_on(query.fetch(options));

    if result.is_idle() {
        println!("MFA factors query is disabled (mfa.enabled = false).");
        return Ok(());
    }

    let list = match result.into_result() {
        Ok(Some(list)) => list,
        Ok(None) => return Err("No MFA factors returned".into()),
        Err(e) => {
            error!(
                event = "cli.mfa_factors_failed",
                error = %e,
                code = ?e.code
            );
            return Err(Box::new(e));
        }
    };

    info!(event = "cli.mfa_factors_completed", count = list.all.len());

    if json_output {
        println!("{}", serde_json::to_string_pretty(list.as_ref())?);
        return Ok(());
    }

    if list.all.is_empty() {
        println!("No MFA factors registered.");
        return Ok(());
    }

    for factor in &list.all {
        println!("{}", format_factor(factor));
    }

    Ok(())
}

fn format_factor(factor: &Factor) -> String {
    format!(
        "{:<38} {:<6} {:<10} {}",
        factor.id,
        format!("{:?}", factor.factor_type).to_lowercase(),
        format!("{:?}", factor.status).to_lowercase(),
        factor.friendly_name.as_deref().unwrap_or("-"),
    )
}
