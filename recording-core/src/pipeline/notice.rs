use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// How long a save notice stays on screen.
pub const SAVE_NOTICE_MS: u64 = 3000;
/// How long a submission notice stays on screen.
pub const SUBMISSION_NOTICE_MS: u64 = 5000;

/// Transient feedback shown after a save/submit intent resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SaveSucceeded,
    SaveFailed,
    SubmissionSaved,
    SubmissionFailed,
}

impl Notice {
    fn display_ms(&self) -> u64 {
        match self {
            Notice::SaveSucceeded | Notice::SaveFailed => SAVE_NOTICE_MS,
            Notice::SubmissionSaved | Notice::SubmissionFailed => SUBMISSION_NOTICE_MS,
        }
    }
}

struct Slot {
    current: Option<Notice>,
    /// Guards the dismissal timer: showing a new notice invalidates
    /// the pending dismissal of the previous one.
    epoch: u64,
}

/// Single-slot notice display with automatic dismissal.
///
/// The presentation layer reads `current()` reactively; dismissal runs
/// on a spawned timer task, so `show` must be called from within a
/// runtime.
#[derive(Clone)]
pub struct NoticeBoard {
    slot: Arc<Mutex<Slot>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                current: None,
                epoch: 0,
            })),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.lock().current
    }

    /// Display `notice`, replacing whatever is showing, and schedule
    /// its dismissal.
    pub fn show(&self, notice: Notice) {
        let epoch = {
            let mut slot = self.slot.lock();
            slot.epoch += 1;
            slot.current = Some(notice);
            slot.epoch
        };

        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(notice.display_ms())).await;
            let mut slot = slot.lock();
            if slot.epoch == epoch {
                slot.current = None;
            }
        });
    }

    /// Dismiss immediately (e.g., user tap).
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock();
        slot.epoch += 1;
        slot.current = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}
