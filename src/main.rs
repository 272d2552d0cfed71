use clap::Parser;
use email_guesser::config::cli::Command;
use email_guesser::config::OutputFormat;
use email_guesser::core::finder::{CompanyProfile, GuessReport, VerifiedGuessReport};
use email_guesser::core::{DomainBreakdown, VerificationResult};
use email_guesser::utils::logger;
use email_guesser::{
    classify, domain_breakdown, guess, CliConfig, EmailFinder, EmailGuessError,
    EmailListVerifyClient, TomlConfig,
};
use serde::Serialize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: CliConfig) -> email_guesser::Result<()> {
    let config = cli.verification_config()?;
    let json = cli.json
        || config
            .as_ref()
            .is_some_and(|c| c.output_format() == OutputFormat::Json);

    match cli.command {
        Command::Breakdown { url, title } => {
            let breakdown = domain_breakdown(&url, title)?;
            emit(json, &breakdown, || print_breakdown(&breakdown))
        }
        Command::Profile { suffix } => {
            let profile = classify(&suffix);
            emit(json, &profile, || match profile {
                Some(p) => println!("{}: {}", suffix, p),
                None => println!("{}: unknown business profile", suffix),
            })
        }
        Command::Guess {
            url,
            full_name,
            verify: false,
            ..
        } => {
            let report = guess(&url, &full_name)?;
            emit(json, &report, || print_guess(&report))
        }
        Command::Guess {
            url,
            full_name,
            verify: true,
            detailed,
        } => {
            let finder = EmailFinder::new(EmailListVerifyClient::new(require(config)?));
            let report = finder.guess_and_verify(&url, &full_name, detailed).await?;
            emit(json, &report, || print_verified(&report))
        }
        Command::Verify { email, detailed } => {
            let finder = EmailFinder::new(EmailListVerifyClient::new(require(config)?));
            let result = finder.verify(&email, detailed).await?;
            emit(json, &result, || println!("{}: {}", email, describe(&result)))
        }
    }
}

fn require(config: Option<TomlConfig>) -> email_guesser::Result<TomlConfig> {
    config.ok_or_else(|| EmailGuessError::ConfigError {
        message: "verification settings were not loaded".to_string(),
    })
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> email_guesser::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn print_breakdown(breakdown: &DomainBreakdown) {
    println!("Company: {}", breakdown.name());
    println!("Suffix:  {}", breakdown.suffix());
    if let DomainBreakdown::Titled {
        canonical_domain, ..
    } = breakdown
    {
        println!("Domain:  {}", canonical_domain);
    }
}

fn print_company(company: &CompanyProfile) {
    println!("Company: {}", company.display_name);
    println!("Domain:  {}", company.company.canonical_domain);
    match company.profile {
        Some(profile) => println!("Profile: {}", profile),
        None => println!("Profile: unknown"),
    }
}

fn print_guess(report: &GuessReport) {
    print_company(&report.company);
    println!("\nCandidates:");
    for (i, candidate) in report.candidates.iter().enumerate() {
        println!("  {}. {}", i + 1, candidate);
    }
}

fn print_verified(report: &VerifiedGuessReport) {
    print_company(&report.company);
    println!("\nCandidates:");
    for (i, v) in report.verifications.iter().enumerate() {
        println!("  {}. {:<40} {}", i + 1, v.candidate.as_str(), describe(&v.result));
    }
    match report.first_deliverable() {
        Some(hit) => println!("\n✅ Best guess: {}", hit.candidate),
        None => println!("\n⚠️  No candidate was reported deliverable"),
    }
}

fn describe(result: &VerificationResult) -> String {
    match result {
        VerificationResult::Status(status) => status.to_string(),
        VerificationResult::Detailed(report) => format!(
            "{} (provider: {}, MX: {} [{}])",
            report.status, report.provider, report.mx_server, report.mx_server_ip
        ),
    }
}
