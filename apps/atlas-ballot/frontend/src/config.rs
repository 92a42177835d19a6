//! Build-time configuration, read from the environment when the frontend is
//! compiled.

use log::LevelFilter;

use crate::util::url::{get_root_url, parse_root_url};

/// Absolute base URL of the ballot service. Defaults to the page's origin.
pub const API_ROOT_ENV: &str = "ATLAS_BALLOT_API_ROOT";

/// One of `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_ENV: &str = "ATLAS_BALLOT_LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no browser window is available")]
    NoWindow,

    #[error("unable to read the page origin: {0}")]
    Origin(String),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL {0:?} cannot be used as a base URL")]
    NotABase(String),

    #[error("invalid {var}: {source}")]
    InvalidEnv {
        var: &'static str,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Where to send API requests.
pub fn api_root() -> Result<reqwest::Url, ConfigError> {
    match option_env!("ATLAS_BALLOT_API_ROOT") {
        Some(root) => parse_configured_api_root(root),
        None => get_root_url(),
    }
}

/// Parses the value of [`API_ROOT_ENV`].
pub fn parse_configured_api_root(root: &str) -> Result<reqwest::Url, ConfigError> {
    parse_root_url(root).map_err(|err| ConfigError::InvalidEnv {
        var: API_ROOT_ENV,
        source: Box::new(err),
    })
}

pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("ATLAS_BALLOT_LOG_LEVEL"))
}

/// The configured log level, if one was set but could not be parsed. The
/// logger isn't running while the level is being read, so this is reported
/// afterwards.
pub fn invalid_log_level() -> Option<&'static str> {
    option_env!("ATLAS_BALLOT_LOG_LEVEL").filter(|value| value.trim().parse::<LevelFilter>().is_err())
}

/// Parses a log level, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(parse_log_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_parse_configured_api_root() {
        assert_eq!(
            parse_configured_api_root("http://localhost:5000").unwrap().as_str(),
            "http://localhost:5000/"
        );

        let err = parse_configured_api_root("localhost:5000/api").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: API_ROOT_ENV, .. }), "{err:?}");
        assert!(err.to_string().starts_with("invalid ATLAS_BALLOT_API_ROOT: "), "{err}");
    }
}
