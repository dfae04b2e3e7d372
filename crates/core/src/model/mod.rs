mod catalog;
mod ids;
mod level;
mod progress_map;

pub use catalog::{
    Catalog, CatalogDraft, CatalogError, Point, PointDraft, Section, SectionDraft, Topic,
    TopicDraft,
};
pub use ids::{PointId, SectionId};
pub use level::{Level, LevelError, LevelForm, LevelForms, LevelFormsError};
pub use progress_map::{ProgressMap, ProgressParseError};
