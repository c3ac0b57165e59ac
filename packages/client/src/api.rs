use async_trait::async_trait;
use common::{Attachment, Payload, Record, RecordId};

use crate::error::ClientError;

/// CRUD operations for one resource.
#[async_trait]
pub trait ResourceApi<R: Record>: Send + Sync {
    /// Fetch every record.
    async fn list(&self) -> Result<Vec<R>, ClientError>;

    /// Create a record. With a file the body is multipart, otherwise JSON.
    ///
    /// `None` means the server accepted the write without echoing the record.
    async fn create(
        &self,
        payload: &Payload,
        file: Option<&Attachment>,
    ) -> Result<Option<R>, ClientError>;

    /// Update a record in place.
    async fn update(
        &self,
        id: &RecordId,
        payload: &Payload,
        file: Option<&Attachment>,
    ) -> Result<Option<R>, ClientError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ClientError>;

    /// Flip the record's visibility flag.
    async fn toggle(&self, record: &R) -> Result<(), ClientError>;
}
