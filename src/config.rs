use crate::constants::*;
use std::env;
use time::macros::format_description;
use time::Date;

/// A client id / secret pair. Both halves must be present to count as configured.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    fn from_env(id_var: &str, secret_var: &str) -> Option<Self> {
        Some(ClientCredentials {
            client_id: optional_secret(id_var)?,
            client_secret: optional_secret(secret_var)?,
        })
    }
}

/// Base URL overrides for each upstream, mainly for pointing at a local stub.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamEndpoints {
    pub weather: String,
    pub directions: String,
    pub static_map: String,
    pub place_search: String,
    pub image_search: String,
    pub video_search: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            weather: OPENWEATHER_BASE_URL.to_string(),
            directions: NAVER_DIRECTIONS_BASE_URL.to_string(),
            static_map: NAVER_STATIC_MAP_BASE_URL.to_string(),
            place_search: KAKAO_KEYWORD_SEARCH_BASE_URL.to_string(),
            image_search: NAVER_IMAGE_SEARCH_BASE_URL.to_string(),
            video_search: YOUTUBE_SEARCH_BASE_URL.to_string(),
        }
    }
}

impl UpstreamEndpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let pick = |var: &str, default: String| {
            env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            weather: pick("OPENWEATHER_BASE_URL", defaults.weather),
            directions: pick("NAVER_DIRECTIONS_BASE_URL", defaults.directions),
            static_map: pick("NAVER_STATIC_MAP_BASE_URL", defaults.static_map),
            place_search: pick("KAKAO_SEARCH_BASE_URL", defaults.place_search),
            image_search: pick("NAVER_IMAGE_SEARCH_BASE_URL", defaults.image_search),
            video_search: pick("YOUTUBE_SEARCH_BASE_URL", defaults.video_search),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openweather_key: Option<String>,
    pub naver_maps: Option<ClientCredentials>,
    pub kakao_rest_key: Option<String>,
    pub naver_search: Option<ClientCredentials>,
    pub youtube_key: Option<String>,
    pub upstream_cache_ttl: u64,
    pub upstream_timeout_secs: u64,
    pub festival_date: Date,
    pub endpoints: UpstreamEndpoints,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: 3000,
            openweather_key: None,
            naver_maps: None,
            kakao_rest_key: None,
            naver_search: None,
            youtube_key: None,
            upstream_cache_ttl: DEFAULT_UPSTREAM_CACHE_TTL_SECONDS,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
            festival_date: DEFAULT_FESTIVAL_DATE,
            endpoints: UpstreamEndpoints::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let festival_date = match env::var("FESTIVAL_DATE") {
            Ok(raw) => parse_date(&raw).map_err(|e| format!("Invalid FESTIVAL_DATE: {}", e))?,
            Err(_) => DEFAULT_FESTIVAL_DATE,
        };

        let upstream_timeout_secs: u64 = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid UPSTREAM_TIMEOUT_SECS")?;

        if upstream_timeout_secs == 0 || upstream_timeout_secs > 120 {
            return Err("UPSTREAM_TIMEOUT_SECS must be between 1 and 120 seconds".to_string());
        }

        let upstream_cache_ttl: u64 = env::var("UPSTREAM_CACHE_TTL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_CACHE_TTL_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid UPSTREAM_CACHE_TTL")?;

        if upstream_cache_ttl > MAX_UPSTREAM_CACHE_TTL_SECONDS {
            return Err(format!(
                "UPSTREAM_CACHE_TTL must be at most {} seconds",
                MAX_UPSTREAM_CACHE_TTL_SECONDS
            ));
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            openweather_key: optional_secret("OPENWEATHER_KEY"),
            naver_maps: ClientCredentials::from_env(
                "NAVER_MAPS_CLIENT_ID",
                "NAVER_MAPS_CLIENT_SECRET",
            ),
            kakao_rest_key: optional_secret("KAKAO_REST_API_KEY")
                .filter(|key| !key.contains(KAKAO_KEY_PLACEHOLDER)),
            naver_search: ClientCredentials::from_env(
                "NAVER_SEARCH_CLIENT_ID",
                "NAVER_SEARCH_CLIENT_SECRET",
            ),
            youtube_key: optional_secret("YOUTUBE_API_KEY"),
            upstream_cache_ttl,
            upstream_timeout_secs,
            festival_date,
            endpoints: UpstreamEndpoints::from_env(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Unset and empty values both mean "not configured".
fn optional_secret(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<Date, String> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use time::Month;

    const CREDENTIAL_VARS: [&str; 10] = [
        "OPENWEATHER_KEY",
        "NAVER_MAPS_CLIENT_ID",
        "NAVER_MAPS_CLIENT_SECRET",
        "KAKAO_REST_API_KEY",
        "NAVER_SEARCH_CLIENT_ID",
        "NAVER_SEARCH_CLIENT_SECRET",
        "YOUTUBE_API_KEY",
        "FESTIVAL_DATE",
        "UPSTREAM_CACHE_TTL",
        "UPSTREAM_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in CREDENTIAL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2027-01-09").unwrap();
        assert_eq!(date.year(), 2027);
        assert_eq!(date.month(), Month::January);
        assert_eq!(date.day(), 9);

        assert!(parse_date("2027-13-01").is_err());
        assert!(parse_date("2027-02-30").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    #[serial]
    fn test_missing_credentials_are_none() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert!(config.openweather_key.is_none());
        assert!(config.naver_maps.is_none());
        assert!(config.kakao_rest_key.is_none());
        assert!(config.youtube_key.is_none());
        assert_eq!(config.festival_date, DEFAULT_FESTIVAL_DATE);
    }

    #[test]
    #[serial]
    fn test_half_configured_pair_counts_as_missing() {
        clear_env();
        env::set_var("NAVER_MAPS_CLIENT_ID", "id-only");
        let config = Config::from_env().unwrap();
        assert!(config.naver_maps.is_none());

        env::set_var("NAVER_MAPS_CLIENT_SECRET", "secret");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.naver_maps,
            Some(ClientCredentials {
                client_id: "id-only".to_string(),
                client_secret: "secret".to_string(),
            })
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_kakao_placeholder_is_ignored() {
        clear_env();
        env::set_var("KAKAO_REST_API_KEY", "YOUR_KAKAO_REST_API_KEY");
        assert!(Config::from_env().unwrap().kakao_rest_key.is_none());

        env::set_var("KAKAO_REST_API_KEY", "   ");
        assert!(Config::from_env().unwrap().kakao_rest_key.is_none());

        env::set_var("KAKAO_REST_API_KEY", "real-key");
        assert_eq!(
            Config::from_env().unwrap().kakao_rest_key.as_deref(),
            Some("real-key")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_festival_date_is_rejected() {
        clear_env();
        env::set_var("FESTIVAL_DATE", "soon");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cache_ttl_is_bounded() {
        clear_env();
        env::set_var("UPSTREAM_CACHE_TTL", "0");
        assert_eq!(Config::from_env().unwrap().upstream_cache_ttl, 0);

        env::set_var("UPSTREAM_CACHE_TTL", MAX_UPSTREAM_CACHE_TTL_SECONDS.to_string());
        assert!(Config::from_env().is_ok());

        env::set_var("UPSTREAM_CACHE_TTL", "9223372036854775807");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
