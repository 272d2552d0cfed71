pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::adapters::http::EmailListVerifyClient;
pub use crate::config::TomlConfig;
pub use crate::core::candidates::generate;
pub use crate::core::classifier::classify;
pub use crate::core::finder::{company_profile, guess, EmailFinder};
pub use crate::core::url_parser::{domain_breakdown, parse_company_url};
pub use crate::core::verification::verify;
pub use crate::utils::error::{EmailGuessError, Result};
