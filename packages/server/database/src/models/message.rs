use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::is_email_like;

/// A buyer-to-seller inquiry tied to one listing. Messages have no
/// lifecycle beyond creation; there is no read or reply state.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub buyer_email: String,
    pub seller_email: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a message. `seller_email` is copied from the stored
/// listing at send time, never taken from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub listing_id: Uuid,
    pub buyer_email: String,
    pub seller_email: String,
    pub body: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.body.trim().is_empty() {
            return Err("message body is required");
        }
        if !is_email_like(&self.buyer_email) {
            return Err("buyer email is not a valid address");
        }
        Ok(())
    }
}
