//! Typed records exchanged with the backend.
//!
//! Unknown fields in responses are ignored. Fields the backend may omit are
//! either `Option<T>` or carry the backend's own default, so a missing field
//! never fails deserialization unless the record cannot exist without it
//! (ids, titles, names, timestamps).
pub mod group;
pub mod user;
pub mod wish;

pub use group::{
    Group, GroupCreate, GroupMember, GroupRole, GroupUpdate, GroupWithMembers, JoinGroupRequest,
};
pub use user::{User, UserProfile, UserUpdate};
pub use wish::{
    Wish, WishCreate, WishListResponse, WishPriority, WishQuery, WishStatus, WishUpdate,
};

/// Decimal amounts arrive either as JSON numbers or as decimal strings.
pub(crate) mod decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| D::Error::custom("price out of range")),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid decimal `{}`", text))),
            Some(other) => Err(D::Error::custom(format!(
                "expected decimal, found {}",
                other
            ))),
        }
    }
}
