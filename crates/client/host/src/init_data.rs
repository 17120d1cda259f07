//! Decoding of the host's init-data token.
//!
//! The token is a URL-encoded query string signed by the host, e.g.
//!
//! ```text
//! query_id=AAH...&user=%7B%22id%22%3A42%2C...%7D&auth_date=1700000000&hash=ab12...
//! ```
//!
//! The app never verifies the signature; it forwards the raw string to the
//! backend. Decoding here only recovers the unsigned view the host also exposes
//! as `initDataUnsafe`.
use thiserror::Error;
use url::form_urlencoded;

use crate::session::HostUser;

#[derive(Debug, Error)]
pub enum InitDataError {
    #[error("init data has no `user` parameter")]
    MissingUser,

    #[error("invalid `user` payload in init data")]
    User(#[from] serde_json::Error),

    #[error("init data has no `hash` signature")]
    Unsigned,
}

/// Unsigned view of an init-data token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitData {
    pub query_id: Option<String>,
    pub user: Option<HostUser>,
    pub auth_date: Option<u64>,
    pub start_param: Option<String>,
    pub hash: Option<String>,
}

impl InitData {
    /// Decode a raw token. Malformed parameters are skipped, never rejected.
    pub fn parse(raw: &str) -> Self {
        let mut data = Self::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "query_id" => data.query_id = Some(value.into_owned()),
                "auth_date" => data.auth_date = value.parse().ok(),
                "start_param" => data.start_param = Some(value.into_owned()),
                "hash" => data.hash = Some(value.into_owned()),
                "user" => match serde_json::from_str::<HostUser>(&value) {
                    Ok(user) => data.user = Some(user),
                    Err(e) => tracing::warn!("Ignoring unparsable init data user: {}", e),
                },
                _ => {}
            }
        }

        data
    }

    /// Decode only the identity, reporting why it is unavailable.
    pub fn user_from(raw: &str) -> Result<HostUser, InitDataError> {
        let payload = form_urlencoded::parse(raw.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned())
            .ok_or(InitDataError::MissingUser)?;

        Ok(serde_json::from_str(&payload)?)
    }

    /// Decode a token the backend can authenticate: signed and carrying a user.
    pub fn validate(raw: &str) -> Result<Self, InitDataError> {
        let user = Self::user_from(raw)?;
        let data = Self::parse(raw);
        if data.hash.as_deref().is_none_or(str::is_empty) {
            return Err(InitDataError::Unsigned);
        }

        Ok(Self {
            user: Some(user),
            ..data
        })
    }
}
