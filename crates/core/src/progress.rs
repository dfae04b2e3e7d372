//! Pure derivations over a [`ProgressMap`] and a [`Catalog`].
//!
//! Nothing here touches storage; the services layer calls these after every
//! mutation and hands the results to the UI.

use crate::model::{Catalog, Level, PointId, ProgressMap, Section, SectionId};

/// Whole-catalog completion at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub checked: usize,
    pub total: usize,
    pub percent: u8,
    pub level: Level,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// `floor(checked / total * 100)`, or 0 when `total` is 0.
///
/// `checked` above `total` is clamped so the result never exceeds 100.
#[must_use]
pub fn percent(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let checked = checked.min(total) as u128;
    let value = checked * 100 / total as u128;
    u8::try_from(value).unwrap_or(100)
}

/// Count of checked points that belong to the catalog.
///
/// Ids left over from an older catalog layout are ignored.
#[must_use]
pub fn checked_count(progress: &ProgressMap, catalog: &Catalog) -> usize {
    progress
        .checked_ids()
        .filter(|id| catalog.contains(id))
        .count()
}

#[must_use]
pub fn snapshot(progress: &ProgressMap, catalog: &Catalog) -> ProgressSnapshot {
    let checked = checked_count(progress, catalog);
    let total = catalog.total_points();
    let percent = percent(checked, total);
    ProgressSnapshot {
        checked,
        total,
        percent,
        level: Level::from_percent(percent),
    }
}

/// Completion of a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section_id: SectionId,
    pub checked: usize,
    pub total: usize,
}

impl SectionProgress {
    /// Done iff the section has at least one point and all are checked.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }

    #[must_use]
    pub fn status_label(&self) -> String {
        if self.is_done() {
            "Seal broken".to_owned()
        } else {
            format!("Training {}/{}", self.checked, self.total)
        }
    }
}

#[must_use]
pub fn section_progress(progress: &ProgressMap, section: &Section) -> SectionProgress {
    let mut checked = 0;
    let mut total = 0;
    for point in section.points() {
        total += 1;
        if progress.is_checked(point.id()) {
            checked += 1;
        }
    }
    SectionProgress {
        section_id: section.id().clone(),
        checked,
        total,
    }
}

#[must_use]
pub fn all_section_progress(progress: &ProgressMap, catalog: &Catalog) -> Vec<SectionProgress> {
    catalog
        .sections()
        .iter()
        .map(|section| section_progress(progress, section))
        .collect()
}

/// Progress of the section owning `point_id`, if the point is in the catalog.
#[must_use]
pub fn owning_section_progress(
    progress: &ProgressMap,
    catalog: &Catalog,
    point_id: &PointId,
) -> Option<SectionProgress> {
    catalog
        .section_of(point_id)
        .map(|section| section_progress(progress, section))
}

//
// ─── LEVEL TRACKING ────────────────────────────────────────────────────────────
//

/// Result of feeding a freshly derived level to a [`LevelTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// First observation; never announced.
    Initial(Level),
    Unchanged(Level),
    Up { from: Level, to: Level },
    Down { from: Level, to: Level },
}

impl LevelChange {
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Initial(level) | Self::Unchanged(level) => level,
            Self::Up { to, .. } | Self::Down { to, .. } => to,
        }
    }

    #[must_use]
    pub fn is_level_up(self) -> bool {
        matches!(self, Self::Up { .. })
    }
}

/// Remembers the last displayed level so only strict increases after startup
/// are reported as level-ups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelTracker {
    current: Option<Level>,
}

impl LevelTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Level> {
        self.current
    }

    pub fn observe(&mut self, level: Level) -> LevelChange {
        let previous = self.current.replace(level);
        match previous {
            None => LevelChange::Initial(level),
            Some(from) if level > from => LevelChange::Up { from, to: level },
            Some(from) if level < from => LevelChange::Down { from, to: level },
            Some(_) => LevelChange::Unchanged(level),
        }
    }
}
