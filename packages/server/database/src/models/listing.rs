use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::is_email_like;

/// The fixed catalog a listing can be filed under. Category filtering
/// compares against these exact strings, case-sensitively.
pub const CATEGORIES: &[&str] = &[
    "Vehicles",
    "Property Rentals",
    "Apparel",
    "Classifieds",
    "Electronics",
    "Entertainment",
    "Family",
    "Free Stuff",
    "Garden & Outdoor",
    "Hobbies",
    "Home Goods",
    "Home Improvement",
    "Home Sales",
    "Musical Instruments",
    "Office Supplies",
    "Pet Supplies",
    "Sporting Goods",
    "Toys & Games",
    "Other",
];

/// A for-sale item as stored. Id and timestamps are assigned by the store
/// on insert; rows are never partially updated once read.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub seller_email: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a listing; the store fills in the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub seller_email: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl NewListing {
    /// Server-side guard on required fields. Callers run their own form
    /// validation, but the repository does not trust them.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.description.trim().is_empty() {
            return Err("description is required");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number");
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err("unknown category");
        }
        if !is_email_like(&self.seller_email) {
            return Err("seller email is not a valid address");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewListing {
        NewListing {
            title: "Red Bike".to_string(),
            description: "Barely used road bike".to_string(),
            price: 120.0,
            category: "Sporting Goods".to_string(),
            seller_email: "seller@example.com".to_string(),
            image_url: None,
            location: Some("Palo Alto, CA".to_string()),
        }
    }

    #[test]
    fn accepts_a_well_formed_listing() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_price_is_allowed_at_the_store_boundary() {
        // Free Stuff is a category; the form-level "required field" check
        // on price lives with the caller, not here.
        let mut listing = valid();
        listing.price = 0.0;
        listing.category = "Free Stuff".to_string();
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn rejects_blank_title_and_description() {
        let mut listing = valid();
        listing.title = "   ".to_string();
        assert_eq!(listing.validate(), Err("title is required"));

        let mut listing = valid();
        listing.description = String::new();
        assert_eq!(listing.validate(), Err("description is required"));
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        let mut listing = valid();
        listing.price = -1.0;
        assert_eq!(listing.validate(), Err("price must be a non-negative number"));

        listing.price = f64::NAN;
        assert_eq!(listing.validate(), Err("price must be a non-negative number"));

        listing.price = f64::INFINITY;
        assert_eq!(listing.validate(), Err("price must be a non-negative number"));
    }

    #[test]
    fn rejects_categories_outside_the_catalog() {
        let mut listing = valid();
        listing.category = "Spaceships".to_string();
        assert_eq!(listing.validate(), Err("unknown category"));

        // Exact match only; case variants are not the same category.
        listing.category = "sporting goods".to_string();
        assert_eq!(listing.validate(), Err("unknown category"));
    }

    #[test]
    fn rejects_malformed_seller_addresses() {
        let mut listing = valid();
        listing.seller_email = "not-an-email".to_string();
        assert_eq!(listing.validate(), Err("seller email is not a valid address"));
    }
}
