use crate::models::{Listing, NewListing};
use crate::repositories::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All listings newest-first, optionally restricted to one category
    /// (exact, case-sensitive match).
    pub async fn list(&self, category: Option<&str>) -> sqlx::Result<Vec<Listing>> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Listing>(
                    "SELECT * FROM listings WHERE category = $1 ORDER BY created_at DESC",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Listing>("SELECT * FROM listings ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    /// Single listing by id. Empty or malformed ids short-circuit to
    /// `Ok(None)` without touching the store.
    pub async fn find_by_id(&self, id: &str) -> sqlx::Result<Option<Listing>> {
        let Some(id) = parse_listing_id(id) else {
            return Ok(None);
        };
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert one listing; the store assigns id and timestamps and the
    /// stored row is returned.
    pub async fn create(&self, new: &NewListing) -> Result<Listing, RepositoryError> {
        new.validate().map_err(RepositoryError::Invalid)?;

        let listing = sqlx::query_as::<_, Listing>(
            r#"
            INSERT INTO listings (title, description, price, category, seller_email, image_url, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new.title.trim())
        .bind(new.description.trim())
        .bind(new.price)
        .bind(&new.category)
        .bind(new.seller_email.trim())
        .bind(&new.image_url)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(listing)
    }
}

/// Ids arrive as untrusted path text. Anything that is not a UUID is
/// treated as "no such listing" before the store is consulted.
fn parse_listing_id(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::parse_listing_id;

    #[test]
    fn empty_and_whitespace_ids_never_reach_the_store() {
        assert_eq!(parse_listing_id(""), None);
        assert_eq!(parse_listing_id("   "), None);
    }

    #[test]
    fn malformed_ids_are_treated_as_not_found() {
        assert_eq!(parse_listing_id("not-a-uuid"), None);
        assert_eq!(parse_listing_id("1234"), None);
    }

    #[test]
    fn well_formed_ids_parse() {
        let id = "6f2b2c6e-8a3d-4f1e-9a2b-0c1d2e3f4a5b";
        assert_eq!(parse_listing_id(id).unwrap().to_string(), id);
        // Surrounding whitespace is caller noise, not part of the id.
        assert!(parse_listing_id(&format!(" {id} ")).is_some());
    }
}
