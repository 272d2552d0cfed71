use crate::core::ConfigProvider;
use crate::utils::error::{EmailGuessError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_resolved, validate_url, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://apps.emaillistverify.com/api/verifyEmailDetailed";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";
pub const SECRET_ENV_VAR: &str = "EMAILLISTVERIFY_API";

static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub verification: VerificationConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub secret: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            secret: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl TomlConfig {
    /// Loads a config file, substituting `${VAR}` placeholders first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EmailGuessError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EmailGuessError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Reads `path` when it exists, otherwise starts from defaults. A secret
    /// missing from the file is taken from `EMAILLISTVERIFY_API`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No configuration file at {}, using defaults", path.display());
            return Ok(Self::from_env());
        }

        tracing::info!("📁 Loading configuration from: {}", path.display());
        let mut config = Self::from_file(path)?;
        if config.verification.secret.is_none() {
            config.verification.secret = std::env::var(SECRET_ENV_VAR).ok();
        }
        Ok(config)
    }

    /// Defaults with the secret taken from `EMAILLISTVERIFY_API`, if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.verification.secret = std::env::var(SECRET_ENV_VAR).ok();
        config
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().map(|o| o.format).unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.verification.endpoint
    }

    fn secret(&self) -> &str {
        self.verification.secret.as_deref().unwrap_or("")
    }

    fn user_agent(&self) -> &str {
        &self.verification.user_agent
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("verification.endpoint", &self.verification.endpoint)?;

        let secret = validate_required_field("verification.secret", &self.verification.secret)?;
        validate_resolved("verification.secret", secret)?;
        validate_non_empty_string("verification.secret", secret)?;

        validate_non_empty_string("verification.user_agent", &self.verification.user_agent)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[verification]
endpoint = "https://verify.example.com/api"
secret = "abc123"
user_agent = "email-guesser-test"

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://verify.example.com/api");
        assert_eq!(config.secret(), "abc123");
        assert_eq!(config.user_agent(), "email-guesser-test");
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = TomlConfig::from_toml_str("[verification]\nsecret = \"abc\"\n").unwrap();

        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMAIL_GUESSER_TEST_SECRET", "from-env");

        let toml_content = r#"
[verification]
secret = "${EMAIL_GUESSER_TEST_SECRET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.secret(), "from-env");

        std::env::remove_var("EMAIL_GUESSER_TEST_SECRET");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[verification]
secret = "${EMAIL_GUESSER_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(EmailGuessError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.validate(),
            Err(EmailGuessError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let toml_content = r#"
[verification]
endpoint = "invalid-url"
secret = "abc"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[verification\nsecret = ");
        assert!(matches!(result, Err(EmailGuessError::ConfigError { .. })));
    }

    #[test]
    fn test_load_falls_back_to_env_secret() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[verification]\nendpoint = \"https://verify.example.com/api\"\n")
            .unwrap();

        std::env::set_var(SECRET_ENV_VAR, "env-secret");
        let config = TomlConfig::load(temp_file.path()).unwrap();
        std::env::remove_var(SECRET_ENV_VAR);

        assert_eq!(config.endpoint(), "https://verify.example.com/api");
        assert_eq!(config.secret(), "env-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TomlConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[verification]\nsecret = \"file-secret\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.secret(), "file-secret");
    }
}
