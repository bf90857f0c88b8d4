//! Application configuration loaded from environment variables.

/// Notify service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8083").
    pub bind_addr: String,

    /// Federation directory API origin for entity lookups.
    pub api_origin: String,

    /// Origin of the sizing image proxy used for notification icons and
    /// badges.
    pub image_proxy_origin: String,

    /// Push gateway URL that receives formatted notification payloads.
    pub gateway_url: String,

    /// Display name used when the acting user's profile cannot be resolved.
    pub anonymous_label: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional and default for local development:
    /// - `NOTIFY_BIND_ADDR` (default: "0.0.0.0:8083")
    /// - `MIRADOR_API_ORIGIN` (default: "https://directory.mirador.social")
    /// - `MIRADOR_IMAGE_PROXY_ORIGIN` (default: "https://img.mirador.social")
    /// - `NOTIFY_GATEWAY_URL` (default: "http://localhost:9000/notify")
    /// - `NOTIFY_ANONYMOUS_LABEL` (default: "Private user")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("NOTIFY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8083".to_string());

        let api_origin = std::env::var("MIRADOR_API_ORIGIN")
            .unwrap_or_else(|_| "https://directory.mirador.social".to_string())
            .trim_end_matches('/')
            .to_string();

        let image_proxy_origin = std::env::var("MIRADOR_IMAGE_PROXY_ORIGIN")
            .unwrap_or_else(|_| "https://img.mirador.social".to_string())
            .trim_end_matches('/')
            .to_string();

        let gateway_url = std::env::var("NOTIFY_GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:9000/notify".to_string());

        let anonymous_label =
            std::env::var("NOTIFY_ANONYMOUS_LABEL").unwrap_or_else(|_| "Private user".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            api_origin = %api_origin,
            image_proxy_origin = %image_proxy_origin,
            gateway_url = %gateway_url,
            "notify configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_origin,
            image_proxy_origin,
            gateway_url,
            anonymous_label,
        })
    }
}
