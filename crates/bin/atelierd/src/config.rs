//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `atelier.toml` in the working directory. Every field except
//! the admin password has a sensible default, so the file is optional.
//! Environment variables take precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Uploaded media storage settings.
    pub media: MediaConfig,
    /// Contact-form SMTP relay settings.
    pub mail: MailConfig,
    /// Admin session settings.
    pub admin: AdminConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Uploaded media configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory uploaded images are stored under.
    pub root: String,
    /// URL prefix images are served from. A path-only value works because
    /// the server serves the files itself under `/media`.
    pub base_url: String,
}

/// SMTP relay configuration for the contact form.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Mailbox the relayed email is sent from.
    pub from: String,
    /// Agency inbox the contact form delivers to.
    pub to: String,
}

/// Admin session configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Password exchanged for a session token. No default: the server
    /// refuses to start without one.
    pub password: String,
    /// Session lifetime in hours.
    pub session_hours: i64,
}

impl Config {
    /// Load configuration from `atelier.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("atelier.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ATELIER_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("ATELIER_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ATELIER_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("ATELIER_MEDIA_ROOT") {
            self.media.root = val;
        }
        if let Ok(val) = std::env::var("ATELIER_MEDIA_BASE_URL") {
            self.media.base_url = val;
        }
        if let Ok(val) = std::env::var("ATELIER_SMTP_HOST") {
            self.mail.host = val;
        }
        if let Ok(val) = std::env::var("ATELIER_SMTP_USERNAME") {
            self.mail.username = val;
        }
        if let Ok(val) = std::env::var("ATELIER_SMTP_PASSWORD") {
            self.mail.password = val;
        }
        if let Ok(val) = std::env::var("ATELIER_MAIL_FROM") {
            self.mail.from = val;
        }
        if let Ok(val) = std::env::var("ATELIER_MAIL_TO") {
            self.mail.to = val;
        }
        if let Ok(val) = std::env::var("ATELIER_ADMIN_PASSWORD") {
            self.admin.password = val;
        }
        if let Ok(val) = std::env::var("ATELIER_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.admin.password.is_empty() {
            return Err(ConfigError::Validation(
                "admin password must be set ([admin] password or ATELIER_ADMIN_PASSWORD)"
                    .to_string(),
            ));
        }
        if self.admin.session_hours <= 0 {
            return Err(ConfigError::Validation(
                "session lifetime must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:atelier.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "atelierd=info,atelier=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: "media".to_string(),
            base_url: "/media".to_string(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            username: String::new(),
            password: String::new(),
            from: "noreply@localhost".to_string(),
            to: "contact@localhost".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: String::new(),
            session_hours: 8,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:atelier.db?mode=rwc");
        assert_eq!(config.media.root, "media");
        assert_eq!(config.media.base_url, "/media");
        assert_eq!(config.admin.session_hours, 8);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [media]
            root = '/var/lib/atelier/media'
            base_url = 'https://cdn.example.com/media'

            [mail]
            host = 'smtp.example.com'
            username = 'relay'
            password = 'secret'
            from = 'site@example.com'
            to = 'hello@example.com'

            [admin]
            password = 'hunter2'
            session_hours = 12
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.media.base_url, "https://cdn.example.com/media");
        assert_eq!(config.mail.host, "smtp.example.com");
        assert_eq!(config.admin.password, "hunter2");
        assert_eq!(config.admin.session_hours, 12);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:atelier.db?mode=rwc");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        config.admin.password = "hunter2".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_missing_admin_password() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_positive_session_lifetime() {
        let mut config = Config::default();
        config.admin.password = "hunter2".to_string();
        config.admin.session_hours = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_config_with_admin_password() {
        let mut config = Config::default();
        config.admin.password = "hunter2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
