// --- File: crates/brandforge_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Layering, lowest precedence first: built-in defaults, an optional
/// `config/default.*` file, `BRANDFORGE_`-prefixed environment variables
/// (`__` separator, e.g. `BRANDFORGE_SERVER__PORT`), and finally the direct
/// secret env vars (`OPENAI_API_KEY`, `STRIPE_SECRET_KEY`, `FRONTEND_URL`).
///
/// Secrets are only ever read from the environment, never from config files.
/// The result is constructed once at process start and shared via `Arc`;
/// nothing re-reads the environment at request time.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let builder = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("BRANDFORGE").separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(apply_secret_env_overrides(raw_config))
}

/// Applies the well-known secret env vars on top of a loaded config.
///
/// `OPENAI_API_KEY` / `STRIPE_SECRET_KEY` enable their integration when set;
/// a config without them keeps those integrations disabled (`None`).
pub fn apply_secret_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(frontend_url) = env::var("FRONTEND_URL") {
        config.frontend_url = frontend_url;
    }

    if let Ok(api_key) = env::var("OPENAI_API_KEY") {
        config.openai = Some(match config.openai.take() {
            Some(openai) => OpenAiConfig { api_key, ..openai },
            None => OpenAiConfig {
                api_key,
                website_model: default_website_model(),
                brand_kit_model: default_brand_kit_model(),
            },
        });
    }

    if let Ok(secret_key) = env::var("STRIPE_SECRET_KEY") {
        config.stripe = Some(StripeConfig { secret_key });
    }

    config
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the `.env` file is loaded into the environment exactly once.
///
/// A `DOTENV_OVERRIDE` env var can point at an alternative file, which is
/// useful for running against staging credentials.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            frontend_url: default_frontend_url(),
            openai: None,
            stripe: None,
        }
    }

    #[test]
    fn frontend_url_defaults_to_localhost() {
        let config = base_config();
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }

    #[test]
    fn model_defaults_are_pinned_per_endpoint() {
        let openai: OpenAiConfig =
            serde_json::from_str(r#"{"api_key": "sk-test"}"#).expect("minimal openai config");
        assert_eq!(openai.website_model, "gpt-4.1");
        assert_eq!(openai.brand_kit_model, "gpt-4.1-mini");
    }

    #[test]
    fn integrations_default_to_disabled() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"host": "0.0.0.0", "port": 9000}}"#)
                .expect("config without integrations");
        assert!(config.openai.is_none());
        assert!(config.stripe.is_none());
    }
}
