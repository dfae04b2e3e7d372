pub mod app_services;
pub mod error;
pub mod feedback;
mod progress_tracker;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError};
pub use feedback::{
    ENCOURAGE_MESSAGES, SECTION_COMPLETE_MESSAGE, ToggleFeedback, feedback_for, talk_message,
};
pub use progress_tracker::{ProgressTracker, ToggleOutcome};
