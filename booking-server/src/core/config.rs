use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./work | Working directory (database, logs, data) |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log level |
/// | LOG_JSON | false | Emit JSON log lines on stdout |
/// | RAZORPAY_KEY_ID | - | Payment gateway key id |
/// | RAZORPAY_KEY_SECRET | - | Payment gateway key secret |
/// | RAZORPAY_API_BASE | https://api.razorpay.com/v1 | Gateway API base URL |
/// | PAYMENT_CURRENCY | INR | Order currency |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound request timeout |
///
/// JWT settings are read by [`JwtConfig::default`].
///
/// ```ignore
/// WORK_DIR=/data/booking HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds `database/`, `logs/` and `data/`
    pub work_dir: String,
    pub http_port: u16,
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub payment: PaymentConfig,
    /// Timeout for outbound HTTP calls (milliseconds)
    pub request_timeout_ms: u64,
}

/// Payment gateway settings
///
/// Credentials are optional at startup. Missing ones surface as a
/// configuration error on the first payment call, not as a boot failure.
#[derive(Clone, Default)]
pub struct PaymentConfig {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
    pub api_base: String,
    pub currency: String,
}

impl PaymentConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.razorpay.com/v1";

    pub fn from_env() -> Self {
        Self {
            key_id: non_empty_var("RAZORPAY_KEY_ID"),
            key_secret: non_empty_var("RAZORPAY_KEY_SECRET"),
            api_base: std::env::var("RAZORPAY_API_BASE")
                .unwrap_or_else(|_| Self::DEFAULT_API_BASE.into()),
            currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "INR".into()),
        }
    }

    /// Both credentials, when configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.key_id, &self.key_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }

    /// Name of the first missing credential variable
    pub fn missing_setting(&self) -> Option<&'static str> {
        if self.key_id.is_none() {
            Some("RAZORPAY_KEY_ID")
        } else if self.key_secret.is_none() {
            Some("RAZORPAY_KEY_SECRET")
        } else {
            None
        }
    }
}

// Keeps the secret out of debug output
impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &self.key_secret.as_ref().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            payment: PaymentConfig::from_env(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the working directory and port (tests, embedded runs)
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir)
            .join("database")
            .join("booking.db")
    }

    pub fn log_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("logs")
    }

    /// Directory used by bulk export / import
    pub fn data_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("data")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
