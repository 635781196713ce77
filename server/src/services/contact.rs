//! Contact message service: validation and storage.
//!
//! DESIGN
//! ======
//! Storage is behind the [`ContactStore`] trait so the HTTP layer does not
//! care whether messages live in process memory (default) or in Postgres
//! (`DATABASE_URL` set). Both stores hand out ids in insertion order and list
//! messages in that same order.
//!
//! ERROR HANDLING
//! ==============
//! [`submit`] separates caller mistakes ([`SubmitError::Invalid`]) from
//! storage failures ([`SubmitError::Store`]) so routes can report the former
//! verbatim and keep the latter opaque.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use async_trait::async_trait;
use contact::{ContactMessage, NewContactMessage, ValidationErrors};
use sqlx::PgPool;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("timestamp format error: {0}")]
    Timestamp(#[from] time::error::Format),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persistence boundary for contact messages.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Store a validated message and return it with its assigned id.
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError>;

    /// All stored messages in insertion order.
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;
}

// =============================================================================
// SERVICE
// =============================================================================

/// Validate an untyped request body and store it.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] for shape/type failures and
/// [`SubmitError::Store`] if the store rejects the write.
pub async fn submit(store: &dyn ContactStore, body: &serde_json::Value) -> Result<ContactMessage, SubmitError> {
    let new_message = contact::validate(body)?;
    let stored = store.create(new_message).await?;
    info!(id = stored.id, "contact message stored");
    Ok(stored)
}

fn format_timestamp(ts: OffsetDateTime) -> Result<String, StoreError> {
    Ok(ts.format(&Rfc3339)?)
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Process-local store. Messages are lost on restart.
#[derive(Default)]
pub struct MemoryContactStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let created_at = format_timestamp(OffsetDateTime::now_utc())?;
        let mut messages = self.messages.write().await;
        let id = messages.last().map_or(1, |m| m.id + 1);
        let stored = ContactMessage {
            id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at,
        };
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Ok(self.messages.read().await.clone())
    }
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

/// `contact_messages` table store.
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, OffsetDateTime)>(
            "INSERT INTO contact_messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING id, created_at",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(ContactMessage {
            id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: format_timestamp(created_at)?,
        })
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, String, String, String, OffsetDateTime)>(
            "SELECT id, name, email, message, created_at
             FROM contact_messages
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, name, email, message, created_at)| {
                Ok(ContactMessage { id, name, email, message, created_at: format_timestamp(created_at)? })
            })
            .collect()
    }
}
