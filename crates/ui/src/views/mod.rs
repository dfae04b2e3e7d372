mod board;
mod checklist;
mod forms;
mod hero;
mod notices;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use board::{Board, FLOATER_DURATION, Notice, TOAST_DURATION, use_board, use_board_provider};
pub use checklist::ChecklistView;
pub use forms::FormsView;
pub use hero::HeroPanel;
pub use notices::NoticeLayer;
