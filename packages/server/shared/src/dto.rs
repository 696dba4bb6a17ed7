use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub seller_email: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl CreateListingRequest {
    /// Form-level required-field check, mirroring what the storefront form
    /// enforces before submitting. A zero price counts as a missing field;
    /// the repository applies the stricter invariants afterwards.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.seller_email.trim().is_empty()
            || self.price == 0.0
        {
            return Err("please fill in all required fields");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendMessageRequest {
    /// Raw id text as the client sent it; a malformed id surfaces as
    /// "listing not found", not a deserialization failure.
    pub listing_id: String,
    pub buyer_email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateListingRequest {
        CreateListingRequest {
            title: "Red Bike".to_string(),
            description: "Barely used".to_string(),
            price: 120.0,
            category: "Sporting Goods".to_string(),
            seller_email: "seller@example.com".to_string(),
            image_url: None,
            location: None,
        }
    }

    #[test]
    fn complete_forms_pass() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn missing_fields_are_rejected_before_any_store_call() {
        let mut r = request();
        r.title = String::new();
        assert!(r.validate().is_err());

        let mut r = request();
        r.seller_email = "   ".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn zero_price_counts_as_missing() {
        let mut r = request();
        r.price = 0.0;
        assert!(r.validate().is_err());
    }
}
