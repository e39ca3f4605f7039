use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.nebulainfinity.com";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Directories
    pub data_dir: String,
    pub public_dir: String,
    pub output_dir: String,

    // Site
    pub base_url: String,

    // Server
    pub port: u16,

    // Contact delivery
    pub contact_webhook_url: Option<String>,
    pub contact_webhook_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            public_dir: "public".to_string(),
            output_dir: "out".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            contact_webhook_url: None,
            contact_webhook_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Directories
            data_dir: std::env::var("SITE_DATA_DIR").unwrap_or(defaults.data_dir),
            public_dir: std::env::var("SITE_PUBLIC_DIR").unwrap_or(defaults.public_dir),
            output_dir: std::env::var("SITE_OUTPUT_DIR").unwrap_or(defaults.output_dir),

            // Site
            base_url: std::env::var("SITE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),

            // Server
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
                Err(_) => defaults.port,
            },

            // Contact delivery
            contact_webhook_url: non_empty_var("CONTACT_WEBHOOK_URL"),
            contact_webhook_token: non_empty_var("CONTACT_WEBHOOK_TOKEN"),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "SITE_DATA_DIR",
        "SITE_PUBLIC_DIR",
        "SITE_OUTPUT_DIR",
        "SITE_BASE_URL",
        "PORT",
        "CONTACT_WEBHOOK_URL",
        "CONTACT_WEBHOOK_TOKEN",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_url, "https://www.nebulainfinity.com");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_OUTPUT_DIR", "dist");
        std::env::set_var("SITE_BASE_URL", "https://staging.example.com/");
        std::env::set_var("PORT", "8080");
        std::env::set_var("CONTACT_WEBHOOK_URL", "https://hooks.example.com/contact");

        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.base_url, "https://staging.example.com");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.contact_webhook_url.as_deref(),
            Some("https://hooks.example.com/contact")
        );
        assert_eq!(config.contact_webhook_token, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_webhook_url_is_none() {
        clear_env();
        std::env::set_var("CONTACT_WEBHOOK_URL", "   ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.contact_webhook_url, None);
        clear_env();
    }
}
