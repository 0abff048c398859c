use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9966";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// When false every endpoint is reachable without credentials.
    pub security_enabled: bool,
    pub bcrypt_cost: u32,

    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A flag or number failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let security_enabled = match lookup("SECURITY_ENABLE") {
            Some(value) => parse_flag("SECURITY_ENABLE", &value)?,
            None => true,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => parse_cost("BCRYPT_COST", &value)?,
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            security_enabled,
            bcrypt_cost,
            admin_username: lookup("ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: lookup("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_cost(name: &str, value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let cost = value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid("expected an integer"))?;

    // bcrypt accepts costs 4 through 31
    if !(4..=31).contains(&cost) {
        return Err(invalid("bcrypt cost must be between 4 and 31"));
    }

    Ok(cost)
}
