use crate::commands::{
    run_decode, run_encode, run_normalize, run_roster_import, run_rules, DecodeArgs,
    NormalizeArgs, PayloadArgs, RosterImportArgs,
};
use audience_builder::config::AppConfig;
use audience_builder::error::AppError;
use audience_builder::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "audience-builder",
    about = "Normalize assignment-rule configurations and audience participant payloads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List assignment rule types with their default configuration
    Rules,
    /// Normalize a raw rule configuration for the given rule type
    Normalize(NormalizeArgs),
    /// Convert between source configurations and participant lists
    Participants {
        #[command(subcommand)]
        command: ParticipantsCommand,
    },
    /// Build audiences from directory exports
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ParticipantsCommand {
    /// Extract the canonical participant list from a source configuration
    Decode(DecodeArgs),
    /// Build a source configuration from a participant list
    Encode(PayloadArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Import a CSV roster and print the resulting source configuration
    Import(RosterImportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "audience builder starting");

    let settings = &config.audience;
    match cli.command {
        Command::Rules => run_rules(settings),
        Command::Normalize(args) => run_normalize(args, settings),
        Command::Participants {
            command: ParticipantsCommand::Decode(args),
        } => run_decode(args, settings),
        Command::Participants {
            command: ParticipantsCommand::Encode(args),
        } => run_encode(args, settings),
        Command::Roster {
            command: RosterCommand::Import(args),
        } => run_roster_import(args, settings),
    }
}
