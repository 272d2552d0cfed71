use crate::config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "email-guesser")]
#[command(about = "Guess and verify professional email addresses from a company website")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "email-guesser.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Split a website URL into company name and domain suffix
    Breakdown {
        url: String,
        /// Title-case the name and include the full domain
        #[arg(long)]
        title: bool,
    },
    /// Show the business profile for a domain suffix (e.g. "edu")
    Profile { suffix: String },
    /// Guess email addresses for a person at the company behind a URL
    Guess {
        url: String,
        /// First and last name, e.g. "John Smith"
        full_name: String,
        /// Check every candidate with the verification service
        #[arg(long)]
        verify: bool,
        /// Report provider and MX details for deliverable addresses
        #[arg(long, requires = "verify")]
        detailed: bool,
    },
    /// Check one address with the verification service
    Verify {
        email: String,
        #[arg(long)]
        detailed: bool,
    },
}

impl CliConfig {
    /// Loads and validates the config file, but only for commands that call
    /// the verification service. Offline commands never read it.
    pub fn verification_config(&self) -> Result<Option<TomlConfig>> {
        if !self.command.needs_verification() {
            return Ok(None);
        }
        let config = TomlConfig::load(&self.config)?;
        config.validate()?;
        Ok(Some(config))
    }
}

impl Command {
    /// Whether the command talks to the verification service.
    pub fn needs_verification(&self) -> bool {
        match self {
            Command::Guess { verify, .. } => *verify,
            Command::Verify { .. } => true,
            Command::Breakdown { .. } | Command::Profile { .. } => false,
        }
    }
}
