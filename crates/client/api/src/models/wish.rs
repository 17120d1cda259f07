//! Wish records and list queries.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::decimal;

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WishStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Priority, sent and received as its integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WishPriority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl TryFrom<u8> for WishPriority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            other => Err(format!("unknown wish priority {}", other)),
        }
    }
}

impl From<WishPriority> for u8 {
    fn from(priority: WishPriority) -> Self {
        priority as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "decimal::deserialize_option")]
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub priority: WishPriority,
    #[serde(default)]
    pub status: WishStatus,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Wish {
    pub fn is_completed(&self) -> bool {
        self.status == WishStatus::Completed
    }
}

/// Body of `POST /api/wishes/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub currency: String,
    pub priority: WishPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WishCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_url: None,
            link: None,
            price: None,
            currency: default_currency(),
            priority: WishPriority::default(),
            category_id: None,
            is_public: true,
            notes: None,
        }
    }
}

/// Body of `PUT /api/wishes/{id}/`; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<WishPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

/// Page of wishes returned by `GET /api/wishes/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishListResponse {
    #[serde(default)]
    pub items: Vec<Wish>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// Query parameters of `GET /api/wishes/`; unset parameters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WishQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WishStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl WishQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: WishStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Title search; blank input clears the filter.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wish_from_backend_payload() {
        let json = r#"{
            "id": 10,
            "user_id": 1,
            "title": "iPhone 15 Pro",
            "price": "129990.00",
            "priority": 3,
            "status": "completed",
            "order_index": 0,
            "created_at": "2024-05-01T10:00:00"
        }"#;

        let wish: Wish = serde_json::from_str(json).unwrap();
        assert_eq!(wish.price, Some(129990.0));
        assert_eq!(wish.priority, WishPriority::High);
        assert!(wish.is_completed());
        assert_eq!(wish.currency, "RUB");
        assert!(wish.is_public);
    }

    #[test]
    fn test_price_variants() {
        let base = |price: &str| {
            format!(
                r#"{{"id":1,"user_id":1,"title":"t","created_at":"now","price":{}}}"#,
                price
            )
        };

        let numeric: Wish = serde_json::from_str(&base("15.5")).unwrap();
        assert_eq!(numeric.price, Some(15.5));

        let null: Wish = serde_json::from_str(&base("null")).unwrap();
        assert_eq!(null.price, None);

        assert!(serde_json::from_str::<Wish>(&base(r#""cheap""#)).is_err());
        assert!(serde_json::from_str::<Wish>(&base("true")).is_err());
    }

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_string(&WishPriority::Urgent).unwrap(), "4");
        assert!(serde_json::from_str::<WishPriority>("9").is_err());
        assert_eq!(WishPriority::Low.to_string(), "Low");
    }

    #[test]
    fn test_create_defaults() {
        let body = serde_json::to_value(WishCreate::new("Book")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Book",
                "currency": "RUB",
                "priority": 2,
                "is_public": true
            })
        );
    }

    #[test]
    fn test_query_skips_blank_search() {
        let query = WishQuery::new().status(WishStatus::Active).search("  ");
        assert_eq!(query.search, None);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "status": "active" })
        );
    }
}
