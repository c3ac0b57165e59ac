use client::ResourceApi;
use common::{Record, RecordId};
use tracing::{debug, warn};

use crate::error::AdminError;

/// Last successfully fetched records of one resource.
#[derive(Debug, Clone)]
pub struct ListState<R> {
    records: Vec<R>,
    loaded: bool,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
        }
    }
}

impl<R: Record> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence.
    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
        self.loaded = true;
    }

    /// Fetch and replace. On failure the current records are kept.
    pub async fn refresh<A>(&mut self, api: &A) -> Result<usize, AdminError>
    where
        A: ResourceApi<R> + ?Sized,
    {
        let kind = R::descriptor().kind;
        match api.list().await {
            Ok(records) => {
                debug!(resource = %kind, count = records.len(), "List refreshed");
                self.replace(records);
                Ok(self.len())
            }
            Err(e) => {
                warn!(resource = %kind, error = %e, "Failed to refresh list");
                Err(e.into())
            }
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Whether a first load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}
