use reqwest::Url;

use crate::error::CoreError;

/// Fully resolved provider URLs, derived once from the configured base.
#[derive(Debug, Clone)]
pub(super) struct Endpoints {
    pub(super) address: Url,
    pub(super) search_history: Url,
    pub(super) new_address: Url,
    /// The address-lookup endpoint with `/payment` appended, matching the
    /// provider contract observed in production. See DESIGN.md, open
    /// question 3.
    pub(super) payment: Url,
}

impl Endpoints {
    pub(super) fn from_base(base_url: &str) -> Result<Self, CoreError> {
        let base = parse_base_url(base_url)?;
        let root = base.as_str().trim_end_matches('/');

        Ok(Self {
            address: join(root, "/api/address")?,
            search_history: join(root, "/api/searchhistory")?,
            new_address: join(root, "/api/new_address")?,
            payment: join(root, "/api/address/payment")?,
        })
    }
}

fn join(root: &str, path: &str) -> Result<Url, CoreError> {
    let raw = format!("{root}{path}");
    Url::parse(&raw).map_err(|e| CoreError::Config(format!("invalid endpoint `{raw}`: {e}")))
}

pub(super) fn parse_base_url(base_url: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        CoreError::Config(format!(
            "invalid provider url `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CoreError::Config(format!(
                "unsupported provider url scheme `{other}`; expected http or https"
            )))
        }
    }
    if parsed.query().is_some() {
        return Err(CoreError::Config(format!(
            "provider url `{base_url}` must not carry a query string"
        )));
    }
    Ok(parsed)
}
