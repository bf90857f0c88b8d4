//! Application configuration loaded from environment variables.

/// Preview service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8082").
    pub bind_addr: String,

    /// Public origin of this preview service, used as the cache-key prefix.
    /// e.g., "https://go.mirador.social"
    pub public_origin: String,

    /// Canonical platform origin. Redirect target for both the client-side
    /// script (`{app_origin}/{entity}/{message}`) and the degraded 301.
    pub app_origin: String,

    /// Site name used in OG tags and the title suffix.
    pub site_name: String,

    /// Federation directory API origin for entity lookups.
    pub api_origin: String,

    /// Response cache TTL in seconds. Fixed, not adaptive; also emitted as
    /// the `s-maxage` value.
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional and default for local development:
    /// - `PREVIEW_BIND_ADDR` (default: "0.0.0.0:8082")
    /// - `PREVIEW_PUBLIC_ORIGIN` (default: "http://localhost:8082")
    /// - `MIRADOR_APP_ORIGIN` (default: "https://app.mirador.social")
    /// - `PREVIEW_SITE_NAME` (default: "Mirador")
    /// - `MIRADOR_API_ORIGIN` (default: "https://directory.mirador.social")
    /// - `PREVIEW_CACHE_TTL_SECS` (default: 600)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PREVIEW_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());

        let public_origin = std::env::var("PREVIEW_PUBLIC_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:8082".to_string())
            .trim_end_matches('/')
            .to_string();

        let app_origin = std::env::var("MIRADOR_APP_ORIGIN")
            .unwrap_or_else(|_| "https://app.mirador.social".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("PREVIEW_SITE_NAME").unwrap_or_else(|_| "Mirador".to_string());

        let api_origin = std::env::var("MIRADOR_API_ORIGIN")
            .unwrap_or_else(|_| "https://directory.mirador.social".to_string())
            .trim_end_matches('/')
            .to_string();

        let cache_ttl_secs = std::env::var("PREVIEW_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        tracing::info!(
            bind_addr = %bind_addr,
            public_origin = %public_origin,
            app_origin = %app_origin,
            api_origin = %api_origin,
            cache_ttl_secs,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            public_origin,
            app_origin,
            site_name,
            api_origin,
            cache_ttl_secs,
        })
    }
}
