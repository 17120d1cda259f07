//! Input forms validated before submission.
use thiserror::Error;
use url::Url;

use client_api::models::{GroupCreate, WishCreate, WishPriority};

/// Rejected form input, naming the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("link must be an absolute http(s) URL, got `{0}`")]
    InvalidLink(String),

    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field) => field,
            Self::InvalidLink(_) => "link",
            Self::InvalidPrice(_) => "price",
        }
    }
}

/// "Add wish" form as the user fills it in.
#[derive(Debug, Clone, PartialEq)]
pub struct WishForm {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub price: Option<f64>,
    pub currency: String,
    pub priority: WishPriority,
}

impl Default for WishForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            link: None,
            price: None,
            currency: "RUB".to_string(),
            priority: WishPriority::Medium,
        }
    }
}

impl WishForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn priority(mut self, priority: WishPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Check the input and build the request body.
    ///
    /// Text fields are trimmed and blank optional fields are dropped; a blank
    /// currency falls back to `RUB`.
    pub fn validate(&self) -> Result<WishCreate, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Required("title"));
        }

        let link = non_blank(self.link.as_deref());
        if let Some(link) = &link {
            let valid = Url::parse(link)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
                .unwrap_or(false);
            if !valid {
                return Err(ValidationError::InvalidLink(link.clone()));
            }
        }

        if let Some(price) = self.price
            && (!price.is_finite() || price < 0.0)
        {
            return Err(ValidationError::InvalidPrice(price));
        }

        let mut wish = WishCreate::new(title);
        wish.description = non_blank(self.description.as_deref());
        wish.link = link;
        wish.price = self.price;
        wish.priority = self.priority;
        if let Some(currency) = non_blank(Some(&self.currency)) {
            wish.currency = currency;
        }

        Ok(wish)
    }
}

/// "Create group" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub name: String,
    pub description: Option<String>,
}

impl GroupForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<GroupCreate, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("name"));
        }

        Ok(GroupCreate {
            name: name.to_string(),
            description: non_blank(self.description.as_deref()),
            avatar_url: None,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_create_form() {
        let wish = WishForm::new("  Headphones ").validate().unwrap();
        assert_eq!(wish.title, "Headphones");
        assert_eq!(wish.currency, "RUB");
        assert_eq!(wish.priority, WishPriority::Medium);
        assert_eq!(wish.link, None);
        assert_eq!(wish.price, None);
    }

    #[test]
    fn test_title_required() {
        let err = WishForm::new("   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::Required("title"));
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_link_rules() {
        let ok = WishForm::new("Bike")
            .link("https://shop.example.com/bike?id=4")
            .validate()
            .unwrap();
        assert_eq!(ok.link.as_deref(), Some("https://shop.example.com/bike?id=4"));

        let blank = WishForm::new("Bike").link("  ").validate().unwrap();
        assert_eq!(blank.link, None);

        for bad in ["shop.example.com/bike", "ftp://example.com/file", "javascript:alert(1)"] {
            let err = WishForm::new("Bike").link(bad).validate().unwrap_err();
            assert_eq!(err.field(), "link", "{bad} should be rejected");
        }
    }

    #[test]
    fn test_price_rules() {
        let free = WishForm::new("Hug").price(0.0).validate().unwrap();
        assert_eq!(free.price, Some(0.0));

        assert_eq!(
            WishForm::new("Car").price(-1.0).validate().unwrap_err(),
            ValidationError::InvalidPrice(-1.0)
        );
        assert!(WishForm::new("Car").price(f64::NAN).validate().is_err());
        assert!(WishForm::new("Car").price(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_explicit_fields_are_kept() {
        let wish = WishForm::new("Trip")
            .description(" Lisbon in May ")
            .currency("EUR")
            .priority(WishPriority::Urgent)
            .price(450.5)
            .validate()
            .unwrap();
        assert_eq!(wish.description.as_deref(), Some("Lisbon in May"));
        assert_eq!(wish.currency, "EUR");
        assert_eq!(wish.priority, WishPriority::Urgent);

        let fallback = WishForm::new("Trip").currency(" ").validate().unwrap();
        assert_eq!(fallback.currency, "RUB");
    }

    #[test]
    fn test_group_name_required() {
        assert_eq!(
            GroupForm::new(" ").validate().unwrap_err(),
            ValidationError::Required("name")
        );

        let group = GroupForm::new("Family").description("").validate().unwrap();
        assert_eq!(group.name, "Family");
        assert_eq!(group.description, None);
    }
}
