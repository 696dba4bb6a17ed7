use crate::models::{Message, NewMessage};
use crate::repositories::RepositoryError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one buyer inquiry; the store assigns id and timestamp.
    pub async fn create(&self, new: &NewMessage) -> Result<Message, RepositoryError> {
        new.validate().map_err(RepositoryError::Invalid)?;

        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (listing_id, buyer_email, seller_email, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.listing_id)
        .bind(new.buyer_email.trim())
        .bind(&new.seller_email)
        .bind(new.body.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }
}
