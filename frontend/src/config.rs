//! Build-time settings for the single-page app.

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Read `CONTOSO_API_URL` as baked in when the bundle was compiled
    pub fn load() -> Self {
        Self::from_value(option_env!("CONTOSO_API_URL"))
    }

    fn from_value(api_url: Option<&str>) -> Self {
        let api_url = match api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_API_URL.to_string(),
        };
        Self { api_url }
    }
}
