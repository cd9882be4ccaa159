use crate::error::{Error, Result};
use tracing::debug;
use url::Url;

/// What the user gave us to search with. Constructed once per run from
/// configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchInput {
    /// Free-text keyword search.
    Keyword(String),
    /// A search-page URL copied from the browser; query parameters are
    /// extracted from it when the request is built.
    UrlQuery(String),
}

impl SearchInput {
    /// Maps the configured mode selector onto a search input. An
    /// unrecognized mode is a fatal configuration error, not a fallback.
    pub fn resolve(mode: &str, raw: &str) -> Result<Self> {
        match mode {
            "1" => Ok(SearchInput::Keyword(raw.to_string())),
            "2" => Ok(SearchInput::UrlQuery(raw.to_string())),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Query-string fields pulled out of a pasted search URL. Any key absent
/// from the URL is `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UrlFields {
    pub q: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Extracts the search fields from a URL's query string, taking the first
/// value when a key is repeated. A URL with no query string yields all-None
/// fields; only an unparsable URL is an error.
pub fn parse_url(raw: &str) -> Result<UrlFields> {
    let url = Url::parse(raw)?;

    let mut fields = UrlFields::default();
    for (key, value) in url.query_pairs() {
        let slot = match key.as_ref() {
            "q" => &mut fields.q,
            "location" => &mut fields.location,
            "latitude" => &mut fields.latitude,
            "longitude" => &mut fields.longitude,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    debug!(?fields, "Parsed search URL");
    Ok(fields)
}
