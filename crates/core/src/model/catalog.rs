use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{PointId, SectionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(String),

    #[error("section id cannot be empty")]
    EmptySectionId,

    #[error("section {0} has an empty title")]
    EmptySectionTitle(String),

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("duplicate point id: {0}")]
    DuplicatePoint(String),

    #[error("point {0} has empty text")]
    EmptyPointText(String),
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Authoring shape of the catalog, as written in JSON.
///
/// The top level is a plain array of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDraft {
    pub sections: Vec<SectionDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub id: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<TopicDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub name: String,
    #[serde(default)]
    pub points: Vec<PointDraft>,
}

/// A single point as authored. `id` is optional; when absent the point gets a
/// positional id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "t")]
    pub text: String,
    #[serde(default, alias = "d")]
    pub detail: String,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    id: PointId,
    text: String,
    detail: String,
}

impl Point {
    #[must_use]
    pub fn id(&self) -> &PointId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    points: Vec<Point>,
}

impl Topic {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    icon: String,
    title: String,
    topics: Vec<Topic>,
}

impl Section {
    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// All points of this section across its topics, in declaration order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.topics.iter().flat_map(|topic| topic.points.iter())
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.points.len()).sum()
    }
}

/// Immutable, ordered sequence of sections.
///
/// Built once from a [`CatalogDraft`]; point ids are assigned at build time and
/// never change for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    sections: Vec<Section>,
    total_points: usize,
    // point id -> index into `sections`
    owners: HashMap<PointId, usize>,
}

impl Catalog {
    /// Parses and validates a catalog from its JSON authoring form.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation
    /// error from [`Catalog::from_draft`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let draft: CatalogDraft =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::from_draft(draft)
    }

    /// Validates a draft and assigns point ids.
    ///
    /// The global index advances for every point in declaration order, whether
    /// or not the point carries an explicit id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for empty or duplicate section ids, empty titles,
    /// empty point text, or duplicate point ids.
    pub fn from_draft(draft: CatalogDraft) -> Result<Self, CatalogError> {
        let mut sections = Vec::with_capacity(draft.sections.len());
        let mut section_ids = HashSet::new();
        let mut owners = HashMap::new();
        let mut global_index = 0_usize;

        for (section_index, section) in draft.sections.into_iter().enumerate() {
            let raw_id = section.id.trim();
            if raw_id.is_empty() {
                return Err(CatalogError::EmptySectionId);
            }
            if !section_ids.insert(raw_id.to_owned()) {
                return Err(CatalogError::DuplicateSection(raw_id.to_owned()));
            }
            let title = section.title.trim();
            if title.is_empty() {
                return Err(CatalogError::EmptySectionTitle(raw_id.to_owned()));
            }
            let section_id = SectionId::new(raw_id);

            let mut topics = Vec::with_capacity(section.topics.len());
            for topic in section.topics {
                let mut points = Vec::with_capacity(topic.points.len());
                for point in topic.points {
                    let id = match point.id.as_deref().map(str::trim) {
                        Some(explicit) if !explicit.is_empty() => PointId::new(explicit),
                        _ => PointId::positional(&section_id, global_index),
                    };
                    global_index += 1;

                    if point.text.trim().is_empty() {
                        return Err(CatalogError::EmptyPointText(id.to_string()));
                    }
                    if owners.insert(id.clone(), section_index).is_some() {
                        return Err(CatalogError::DuplicatePoint(id.to_string()));
                    }
                    points.push(Point {
                        id,
                        text: point.text.trim().to_owned(),
                        detail: point.detail.trim().to_owned(),
                    });
                }
                topics.push(Topic {
                    name: topic.name.trim().to_owned(),
                    points,
                });
            }

            sections.push(Section {
                id: section_id,
                icon: section.icon,
                title: title.to_owned(),
                topics,
            });
        }

        Ok(Self {
            sections,
            total_points: global_index,
            owners,
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    #[must_use]
    pub fn contains(&self, id: &PointId) -> bool {
        self.owners.contains_key(id)
    }

    /// The section that owns the given point, if any.
    #[must_use]
    pub fn section_of(&self, id: &PointId) -> Option<&Section> {
        self.owners.get(id).and_then(|idx| self.sections.get(*idx))
    }

    /// All points in flattened declaration order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.sections.iter().flat_map(Section::points)
    }
}
