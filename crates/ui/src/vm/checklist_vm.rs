use quest_core::model::{Catalog, PointId, ProgressMap, Section};
use quest_core::progress::section_progress;

/// UI-ready representation of one checkable point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointVm {
    pub id: PointId,
    pub text: String,
    pub detail: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicVm {
    pub name: String,
    pub points: Vec<PointVm>,
}

/// One collapsible section with its header status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub done: bool,
    pub status_label: String,
    pub topics: Vec<TopicVm>,
}

impl SectionVm {
    fn from_section(section: &Section, progress: &ProgressMap) -> Self {
        let status = section_progress(progress, section);
        let topics = section
            .topics()
            .iter()
            .map(|topic| TopicVm {
                name: topic.name().to_owned(),
                points: topic
                    .points()
                    .iter()
                    .map(|point| PointVm {
                        id: point.id().clone(),
                        text: point.text().to_owned(),
                        detail: point.detail().to_owned(),
                        checked: progress.is_checked(point.id()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: section.id().to_string(),
            icon: section.icon().to_owned(),
            title: section.title().to_owned(),
            done: status.is_done(),
            status_label: status.status_label(),
            topics,
        }
    }

    /// Header line, icon first when present.
    #[must_use]
    pub fn heading(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

/// Join the catalog with current progress for rendering.
#[must_use]
pub fn build_checklist(catalog: &Catalog, progress: &ProgressMap) -> Vec<SectionVm> {
    catalog
        .sections()
        .iter()
        .map(|section| SectionVm::from_section(section, progress))
        .collect()
}
