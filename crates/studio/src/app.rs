use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("studio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch database upgrades and inspect MFA factors from the terminal")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("upgrade-status")
                .about("Show the database upgrade screen for a project until the upgrade finishes")
                .arg(
                    Arg::new("project")
                        .long("project")
                        .short('p')
                        .help("Project reference")
                        .required(true),
                )
                .arg(
                    Arg::new("just-initiated")
                        .long("just-initiated")
                        .help("The upgrade was just submitted; wait before polling")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("status-file")
                        .long("status-file")
                        .help("JSON file holding the upgrade status response; re-read on every poll")
                        .required(true),
                )
                .arg(
                    Arg::new("project-file")
                        .long("project-file")
                        .help("JSON file holding the project detail"),
                )
                .arg(
                    Arg::new("once")
                        .long("once")
                        .help("Render a single frame and exit")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("mfa-factors")
                .about("List the MFA factors registered for the current user")
                .arg(
                    Arg::new("factors-file")
                        .long("factors-file")
                        .help("JSON file holding the auth backend's list-factors response")
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}
