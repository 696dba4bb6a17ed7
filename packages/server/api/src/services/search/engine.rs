//! Two-pass listing search.
//!
//! A relevance engine is overkill for a classifieds board. The engine runs
//! two mutually exclusive queries instead: title matches, then listings
//! whose description or category matches but whose title does not. The
//! buckets are concatenated, so a title hit always outranks a body hit and
//! no row can appear twice. Within a bucket, ordering is newest-first.

use database::models::Listing;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

const TITLE_PASS: &str = "SELECT * FROM listings WHERE title ILIKE $1 ORDER BY created_at DESC";

const SECONDARY_PASS: &str = "SELECT * FROM listings \
     WHERE title NOT ILIKE $1 AND (description ILIKE $1 OR category ILIKE $1) \
     ORDER BY created_at DESC";

pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    pub async fn search(&self, pool: &PgPool, raw_term: &str) -> Vec<Listing> {
        let Some(term) = normalize_term(raw_term) else {
            return Vec::new();
        };
        let pattern = format!("%{}%", escape_like(&term));

        let title_matches = self.run_pass(pool, TITLE_PASS, &pattern, "title").await;
        let secondary_matches = self
            .run_pass(pool, SECONDARY_PASS, &pattern, "secondary")
            .await;

        merge_passes(title_matches, secondary_matches)
    }

    /// One query stage. A store failure degrades to an empty contribution
    /// instead of failing the whole search.
    async fn run_pass(&self, pool: &PgPool, query: &str, pattern: &str, pass: &str) -> Vec<Listing> {
        match sqlx::query_as::<_, Listing>(query)
            .bind(pattern)
            .fetch_all(pool)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Search {} pass failed: {}", pass, e);
                Vec::new()
            }
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim and lowercase a raw term. Whitespace-only input means "no search",
/// not "browse everything". The store's ILIKE collation does the actual
/// case-insensitive match; lowercasing here keeps the contract honest.
fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Escape LIKE metacharacters so user input never acts as a pattern.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Concatenate the title bucket ahead of the secondary bucket, dropping any
/// row already emitted. The secondary query already excludes title matches
/// on the store side; this keeps the exactly-once guarantee local too.
fn merge_passes(title: Vec<Listing>, secondary: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(title.len() + secondary.len());
    let mut merged = Vec::with_capacity(title.len() + secondary.len());
    for listing in title.into_iter().chain(secondary) {
        if seen.insert(listing.id) {
            merged.push(listing);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn listing(title: &str, created_secs: i64) -> Listing {
        let at = DateTime::from_timestamp(created_secs, 0).unwrap();
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            price: 10.0,
            category: "Other".to_string(),
            seller_email: "seller@example.com".to_string(),
            image_url: None,
            location: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn whitespace_only_terms_do_not_search() {
        assert_eq!(normalize_term(""), None);
        assert_eq!(normalize_term("   \t"), None);
    }

    #[test]
    fn terms_are_trimmed_and_lowercased() {
        assert_eq!(normalize_term("  Bike "), Some("bike".to_string()));
    }

    #[test]
    fn like_metacharacters_are_inert() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn title_bucket_ranks_above_secondary_regardless_of_recency() {
        // A(t=3 "Red Bike") and C(t=1 "Bike Helmet") match on title;
        // B(t=2 "Blue Car") matches on description only.
        let a = listing("Red Bike", 3);
        let c = listing("Bike Helmet", 1);
        let b = listing("Blue Car", 2);

        let merged = merge_passes(vec![a.clone(), c.clone()], vec![b.clone()]);
        let titles: Vec<&str> = merged.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Red Bike", "Bike Helmet", "Blue Car"]);
        assert_eq!(merged[0].id, a.id);
        assert_eq!(merged[2].id, b.id);
    }

    #[test]
    fn a_row_in_both_buckets_appears_once_in_the_title_bucket() {
        let both = listing("Bike for sale, bike description too", 5);
        let other = listing("Unrelated", 4);

        let merged = merge_passes(vec![both.clone()], vec![both.clone(), other]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, both.id);
    }

    #[test]
    fn empty_buckets_merge_to_empty() {
        assert!(merge_passes(Vec::new(), Vec::new()).is_empty());
    }
}
