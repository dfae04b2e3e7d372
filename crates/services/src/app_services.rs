use std::sync::Arc;

use quest_core::model::{Catalog, LevelForms};
use storage::repository::Storage;
use tracing::info;

use crate::error::AppServicesError;
use crate::progress_tracker::ProgressTracker;

/// Assembles app-facing services around one hydrated tracker.
#[derive(Clone)]
pub struct AppServices {
    tracker: Arc<ProgressTracker>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, parsing the catalog from
    /// its JSON authoring form.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog is invalid or storage
    /// initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        catalog_json: &str,
        forms: LevelForms,
    ) -> Result<Self, AppServicesError> {
        let catalog = Catalog::from_json(catalog_json)?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, catalog, forms).await)
    }

    /// Build services over an already-open storage.
    pub async fn from_storage(storage: &Storage, catalog: Catalog, forms: LevelForms) -> Self {
        info!(
            sections = catalog.sections().len(),
            points = catalog.total_points(),
            "catalog loaded"
        );
        let tracker = ProgressTracker::hydrate(
            Arc::new(catalog),
            Arc::new(forms),
            Arc::clone(&storage.kv),
        )
        .await;
        Self {
            tracker: Arc::new(tracker),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}
