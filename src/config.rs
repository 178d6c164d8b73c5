use crate::client::error::ConfigError;

/// Location of the analysis service. There is no built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let base = match raw.split_once("://") {
            Some((scheme, rest))
                if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
            {
                format!("{}://{}", scheme.to_ascii_lowercase(), rest)
            }
            Some(_) => return Err(ConfigError::UnsupportedScheme(raw.to_string())),
            None => format!("http://{}", raw),
        };
        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
