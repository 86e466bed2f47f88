use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::jotform::DEFAULT_JOTFORM_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub jotform: JotformConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the team names live and how to reach them
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct JotformConfig {
    pub base_url: String,
    pub read_only_api_key: String,
    pub read_write_api_key: Option<String>,
    /// Registration form holding the team name question
    pub registration_form_id: String,
    /// Question whose options are the team names
    pub team_name_question_id: String,
    /// Form receiving forwarded "add team" submissions
    pub add_team_form_id: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for JotformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JotformConfig")
            .field("base_url", &self.base_url)
            .field("read_only_api_key", &"[REDACTED]")
            .field(
                "read_write_api_key",
                &self.read_write_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("registration_form_id", &self.registration_form_id)
            .field("team_name_question_id", &self.team_name_question_id)
            .field("add_team_form_id", &self.add_team_form_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for JotformConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JOTFORM_BASE_URL.to_string(),
            read_only_api_key: String::new(),
            read_write_api_key: None,
            registration_form_id: String::new(),
            team_name_question_id: String::new(),
            add_team_form_id: None,
            timeout_secs: 10,
        }
    }
}

impl JotformConfig {
    /// Check that the settings needed to reach the name list are present
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("jotform.read_only_api_key", &self.read_only_api_key),
            ("jotform.registration_form_id", &self.registration_form_id),
            ("jotform.team_name_question_id", &self.team_name_question_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::configuration(format!("{} is not set", name)));
            }
        }

        if self.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "jotform.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
