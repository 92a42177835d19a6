use crate::config::ConfigError;

/// The origin the page was served from.
pub fn get_root_url() -> Result<reqwest::Url, ConfigError> {
    let origin = web_sys::window()
        .ok_or(ConfigError::NoWindow)?
        .location()
        .origin()
        .map_err(|err| ConfigError::Origin(format!("{err:?}")))?;
    parse_root_url(&origin)
}

/// Parses an absolute base URL, making sure relative joins keep its path.
pub fn parse_root_url(root: &str) -> Result<reqwest::Url, ConfigError> {
    let mut url = reqwest::Url::parse(root).map_err(|source| ConfigError::InvalidUrl {
        url: root.to_owned(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase(root.to_owned()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
