use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quest_core::model::{Catalog, LevelForm, LevelForms, PointId, ProgressMap};
use quest_core::progress::{
    self, LevelChange, LevelTracker, ProgressSnapshot, SectionProgress,
};
use storage::repository::{KeyValueRepository, PROGRESS_KEY};
use tokio::sync::Mutex as WriteLock;
use tracing::{debug, warn};

use crate::error::ProgressServiceError;

/// Everything the UI needs to react to a single toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub point_id: PointId,
    /// State of the point after the toggle.
    pub checked: bool,
    pub snapshot: ProgressSnapshot,
    pub level_change: LevelChange,
    /// Progress of the owning section, `None` for ids outside the catalog.
    pub section: Option<SectionProgress>,
    /// True only when this toggle moved the owning section to done.
    pub section_completed: bool,
    /// False when the write to storage failed; in-memory state is kept anyway.
    pub persisted: bool,
}

struct TrackerState {
    progress: ProgressMap,
    levels: LevelTracker,
}

/// Owns the progress map for the session and keeps storage in sync with it.
///
/// Built once at startup by [`ProgressTracker::hydrate`] and shared as an
/// `Arc` with the UI.
pub struct ProgressTracker {
    catalog: Arc<Catalog>,
    forms: Arc<LevelForms>,
    kv: Arc<dyn KeyValueRepository>,
    state: Mutex<TrackerState>,
    /// Held from mutation until the write lands, so stored maps follow
    /// mutation order.
    write: WriteLock<()>,
}

impl ProgressTracker {
    /// Load persisted progress and prime the level tracker.
    ///
    /// Missing, unreadable or corrupt stored progress yields an empty map.
    pub async fn hydrate(
        catalog: Arc<Catalog>,
        forms: Arc<LevelForms>,
        kv: Arc<dyn KeyValueRepository>,
    ) -> Self {
        let progress = load_progress(kv.as_ref()).await;
        let mut levels = LevelTracker::new();
        let snapshot = progress::snapshot(&progress, &catalog);
        // The startup level is never announced.
        levels.observe(snapshot.level);
        debug!(
            checked = snapshot.checked,
            total = snapshot.total,
            percent = snapshot.percent,
            level = snapshot.level.value(),
            "progress hydrated"
        );

        Self {
            catalog,
            forms,
            kv,
            state: Mutex::new(TrackerState { progress, levels }),
            write: WriteLock::new(()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn forms(&self) -> Arc<LevelForms> {
        Arc::clone(&self.forms)
    }

    #[must_use]
    pub fn is_checked(&self, id: &PointId) -> bool {
        self.lock().progress.is_checked(id)
    }

    /// Copy of the current progress map.
    #[must_use]
    pub fn progress(&self) -> ProgressMap {
        self.lock().progress.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        progress::snapshot(&self.lock().progress, &self.catalog)
    }

    #[must_use]
    pub fn section_progress(&self) -> Vec<SectionProgress> {
        progress::all_section_progress(&self.lock().progress, &self.catalog)
    }

    /// Form for the current level.
    #[must_use]
    pub fn current_form(&self) -> LevelForm {
        self.forms.form(self.snapshot().level).clone()
    }

    /// Flip `id`, persist the full map, and recompute derived progress.
    ///
    /// Ids outside the catalog are stored like any other but never counted.
    /// Storage failures are logged and reported through
    /// [`ToggleOutcome::persisted`].
    pub async fn toggle(&self, id: &PointId) -> ToggleOutcome {
        let _write = self.write.lock().await;
        let (mut outcome, encoded) = {
            let mut state = self.lock();
            let section_was_done = progress::owning_section_progress(
                &state.progress,
                &self.catalog,
                id,
            )
            .is_some_and(|section| section.is_done());

            let checked = state.progress.toggle(id);
            let snapshot = progress::snapshot(&state.progress, &self.catalog);
            let level_change = state.levels.observe(snapshot.level);
            let section = progress::owning_section_progress(&state.progress, &self.catalog, id);
            let section_completed =
                !section_was_done && section.as_ref().is_some_and(SectionProgress::is_done);
            let encoded = state.progress.to_json();

            (
                ToggleOutcome {
                    point_id: id.clone(),
                    checked,
                    snapshot,
                    level_change,
                    section,
                    section_completed,
                    persisted: false,
                },
                encoded,
            )
        };

        debug!(
            point = %id,
            checked = outcome.checked,
            percent = outcome.snapshot.percent,
            level = outcome.snapshot.level.value(),
            "point toggled"
        );

        outcome.persisted = match encoded {
            Ok(raw) => match self.kv.put_value(PROGRESS_KEY, &raw).await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "failed to persist progress; keeping in-memory state");
                    false
                }
            },
            Err(err) => {
                warn!(error = %err, "failed to encode progress");
                false
            }
        };

        outcome
    }

    /// Clear all progress and drop the stored map.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the stored map cannot be removed. The
    /// in-memory map is cleared regardless.
    pub async fn reset(&self) -> Result<ProgressSnapshot, ProgressServiceError> {
        let _write = self.write.lock().await;
        let snapshot = {
            let mut state = self.lock();
            state.progress.clear();
            let snapshot = progress::snapshot(&state.progress, &self.catalog);
            state.levels.observe(snapshot.level);
            snapshot
        };
        self.kv.delete_value(PROGRESS_KEY).await?;
        debug!("progress reset");
        Ok(snapshot)
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn load_progress(kv: &dyn KeyValueRepository) -> ProgressMap {
    match kv.get_value(PROGRESS_KEY).await {
        Ok(Some(raw)) => ProgressMap::from_json(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "stored progress is unreadable; starting empty");
            ProgressMap::new()
        }),
        Ok(None) => ProgressMap::new(),
        Err(err) => {
            warn!(error = %err, "failed to load progress; starting empty");
            ProgressMap::new()
        }
    }
}
