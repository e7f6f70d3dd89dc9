use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Tiempo máximo de espera de una petición antes de darla por perdida
    pub request_timeout_ms: u32,
    /// Tiempo que una alerta transitoria queda visible
    pub alert_dismiss_ms: u32,
    pub signup_redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: DEFAULT_API_URL.to_string(),
            api_url_production: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            request_timeout_ms: 15_000,
            alert_dismiss_ms: 5_000,
            signup_redirect_delay_ms: 1_500,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_development),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            request_timeout_ms: parse_or(option_env!("REQUEST_TIMEOUT_MS"), defaults.request_timeout_ms),
            alert_dismiss_ms: parse_or(option_env!("ALERT_DISMISS_MS"), defaults.alert_dismiss_ms),
            signup_redirect_delay_ms: parse_or(
                option_env!("SIGNUP_REDIRECT_DELAY_MS"),
                defaults.signup_redirect_delay_ms,
            ),
        }
    }

    /// URL base del API según el entorno actual
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(fallback)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
