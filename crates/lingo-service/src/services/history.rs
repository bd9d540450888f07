//! Translation history service
//!
//! Listing and deletion of a user's translation records, always scoped to
//! the authenticated owner.

use tracing::{info, instrument};

use crate::dto::HistoryEntryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Translation history service
pub struct HistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HistoryService<'a> {
    /// Create a new HistoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the user's records, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> ServiceResult<Vec<HistoryEntryResponse>> {
        let records = self
            .ctx
            .translation_repo()
            .list_by_user(user_id, offset, limit)
            .await?;

        Ok(records.iter().map(HistoryEntryResponse::from).collect())
    }

    /// Delete one record if the user owns it.
    ///
    /// A record that does not exist and a record owned by someone else are
    /// the same not-found outcome.
    #[instrument(skip(self))]
    pub async fn delete_one(&self, user_id: i64, record_id: i64) -> ServiceResult<()> {
        self.ctx
            .translation_repo()
            .delete_one(user_id, record_id)
            .await?;

        info!("Translation record deleted");
        Ok(())
    }

    /// Delete every record of the user, returning how many were removed
    #[instrument(skip(self))]
    pub async fn delete_all(&self, user_id: i64) -> ServiceResult<u64> {
        let deleted = self.ctx.translation_repo().delete_all(user_id).await?;

        info!(deleted, "Translation history cleared");
        Ok(deleted)
    }
}
