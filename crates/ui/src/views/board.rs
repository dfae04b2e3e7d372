use std::time::Duration;

use dioxus::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const FLOATER_DURATION: Duration = Duration::from_millis(1500);

/// A transient message. `id` lets a hide timer check it is still current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Shared reactive state for the checklist page.
///
/// `revision` is bumped after every tracker mutation so views re-read the
/// tracker.
#[derive(Clone, Copy)]
pub struct Board {
    pub revision: Signal<u64>,
    pub toast: Signal<Option<Notice>>,
    pub floater: Signal<Option<Notice>>,
    next_notice: Signal<u64>,
}

impl Board {
    fn new() -> Self {
        Self {
            revision: Signal::new(0),
            toast: Signal::new(None),
            floater: Signal::new(None),
            next_notice: Signal::new(0),
        }
    }

    /// Subscribe the calling component to tracker changes.
    pub fn watch(&self) -> u64 {
        *self.revision.read()
    }

    pub fn bump(&mut self) {
        *self.revision.write() += 1;
    }

    pub fn show_toast(&mut self, message: String) {
        let notice = self.next(message);
        schedule_hide(self.toast, notice, TOAST_DURATION);
    }

    pub fn show_floater(&mut self, message: String) {
        let notice = self.next(message);
        schedule_hide(self.floater, notice, FLOATER_DURATION);
    }

    fn next(&mut self, message: String) -> Notice {
        let mut seq = self.next_notice.write();
        *seq += 1;
        Notice { id: *seq, message }
    }
}

fn schedule_hide(mut slot: Signal<Option<Notice>>, notice: Notice, after: Duration) {
    let id = notice.id;
    slot.set(Some(notice));
    spawn(async move {
        tokio::time::sleep(after).await;
        // A newer notice owns the slot now.
        let still_current = slot.peek().as_ref().is_some_and(|current| current.id == id);
        if still_current {
            slot.set(None);
        }
    });
}

/// Provide a fresh `Board` to the subtree.
pub fn use_board_provider() -> Board {
    use_context_provider(Board::new)
}

#[must_use]
pub fn use_board() -> Board {
    use_context::<Board>()
}
