use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub trust_x_forwarded_for: bool,

    #[serde(default = "default_contact_cooldown")]
    pub contact_cooldown_secs: u64,

    #[serde(default = "default_rate_limit_max_entries")]
    pub rate_limit_max_entries: usize,

    #[serde(default = "default_rate_limit_sweep")]
    pub rate_limit_sweep_secs: u64,

    #[serde(default = "default_send_timeout")]
    pub mail_send_timeout_secs: u64,

    #[serde(default)]
    pub mail: MailSettings,
}

/// SMTP transport and envelope settings for the contact form.
#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct MailSettings {
    #[serde(default = "default_email_server")]
    pub server: String,

    #[serde(default = "default_email_port")]
    pub port: u16,

    #[serde(default)]
    pub secure: bool,

    #[serde(default = "default_email_user")]
    pub user: String,

    #[serde(default = "default_email_password")]
    pub password: String,

    #[serde(default = "default_email_from")]
    pub from: String,

    #[serde(default = "default_email_to")]
    pub to: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        MailSettings {
            server: default_email_server(),
            port: default_email_port(),
            secure: false,
            user: default_email_user(),
            password: default_email_password(),
            from: default_email_from(),
            to: default_email_to(),
        }
    }
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "CoGaineum-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_contact_cooldown() -> u64 {
    60
}
fn default_rate_limit_max_entries() -> usize {
    10_000
}
fn default_rate_limit_sweep() -> u64 {
    30
}
fn default_send_timeout() -> u64 {
    10
}
fn default_email_server() -> String {
    "smtp.example.com".to_string()
}
fn default_email_port() -> u16 {
    587
}
fn default_email_user() -> String {
    "user@example.com".to_string()
}
fn default_email_password() -> String {
    "password".to_string()
}
fn default_email_from() -> String {
    "contact@cogaineum.art".to_string()
}
fn default_email_to() -> String {
    "artist@cogaineum.art".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;
        config.mail.apply_legacy_env()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.contact_cooldown_secs == 0 {
            errors.push("CONTACT_COOLDOWN_SECS must be greater than zero");
        }
        if self.mail_send_timeout_secs == 0 {
            errors.push("MAIL_SEND_TIMEOUT_SECS must be greater than zero");
        }
        if self.rate_limit_max_entries == 0 {
            errors.push("RATE_LIMIT_MAX_ENTRIES must be greater than zero");
        }
        if self.mail.server.trim().is_empty() {
            errors.push("MAIL server cannot be empty");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn contact_cooldown(&self) -> Duration {
        Duration::from_secs(self.contact_cooldown_secs)
    }

    pub fn rate_limit_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.rate_limit_sweep_secs.max(1))
    }

    pub fn mail_send_timeout(&self) -> Duration {
        Duration::from_secs(self.mail_send_timeout_secs)
    }
}

impl MailSettings {
    /// Falls back to the plain `EMAIL_*` variables used by earlier
    /// deployments when the `APP_MAIL__*` form is not set.
    fn apply_legacy_env(&mut self) -> Result<(), ConfigError> {
        self.apply_legacy_vars(|key| env::var(key).ok())
    }

    fn apply_legacy_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let legacy = |field: &str| {
            let current = lookup(format!("APP_MAIL__{}", field.to_uppercase()).as_str());
            if current.is_some_and(|v| !v.is_empty()) {
                return None;
            }
            lookup(format!("EMAIL_{}", field.to_uppercase()).as_str())
        };

        if let Some(server) = legacy("server") {
            self.server = server;
        }
        if let Some(port) = legacy("port") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::Message(format!("Invalid EMAIL_PORT value: {}", port)))?;
        }
        if let Some(secure) = legacy("secure") {
            self.secure = secure == "true";
        }
        if let Some(user) = legacy("user") {
            self.user = user;
        }
        if let Some(password) = legacy("password") {
            self.password = password;
        }
        if let Some(from) = legacy("from") {
            self.from = from;
        }
        if let Some(to) = legacy("to") {
            self.to = to;
        }
        Ok(())
    }

    pub fn password(&self) -> Zeroizing<String> {
        Zeroizing::new(self.password.clone())
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("password", &self.password.redact())
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("trust_x_forwarded_for", &self.trust_x_forwarded_for)
            .field("contact_cooldown_secs", &self.contact_cooldown_secs)
            .field("rate_limit_max_entries", &self.rate_limit_max_entries)
            .field("rate_limit_sweep_secs", &self.rate_limit_sweep_secs)
            .field("mail_send_timeout_secs", &self.mail_send_timeout_secs)
            .field("mail", &self.mail)
            .finish()
    }
}
