//! Auto-advance selection of the next item to work.
//!
//! Invoked after an item completes, or on an explicit "start next" command.
//! The priority order is deliberately asymmetric: the forward scan prefers
//! opened-but-unstarted work, while the wraparound scan prefers resuming
//! interrupted (paused) work before starting anything fresh. Within each
//! rule the lowest index wins.

use crate::libs::queue::{ItemStatus, WorkQueue};

/// What to activate next. When `needs_open` is set the item is still
/// `Queued` and must be marked opened and handed to the external opener
/// before starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub index: usize,
    pub id: u64,
    pub needs_open: bool,
}

/// Picks the next item to activate after the item at `after` (or from the
/// top of the queue when `after` is `None`).
///
/// Priority:
/// 1. first `Opened` item after `after`
/// 2. first `Paused` item after `after`
/// 3. first `Paused` item anywhere
/// 4. first `Opened` item anywhere, else the first remaining item (which
///    still needs opening)
///
/// Returns `None` when nothing is startable and the queue should go idle.
pub fn select_next(queue: &WorkQueue, after: Option<usize>) -> Option<Plan> {
    let items = queue.items();
    let forward_from = after.map(|index| index + 1).unwrap_or(0);

    let plan = |index: usize, needs_open: bool| Plan {
        index,
        id: items[index].id,
        needs_open,
    };

    // Rule 1: next opened item further down the queue.
    for (index, item) in items.iter().enumerate().skip(forward_from) {
        if item.status == ItemStatus::Opened {
            return Some(plan(index, false));
        }
    }

    // Rule 2: next interrupted item further down the queue.
    for (index, item) in items.iter().enumerate().skip(forward_from) {
        if item.status == ItemStatus::Paused {
            return Some(plan(index, false));
        }
    }

    // Rule 3: wrap around, favoring interrupted work over fresh work.
    for (index, item) in items.iter().enumerate() {
        if item.status == ItemStatus::Paused {
            return Some(plan(index, false));
        }
    }

    // Rule 4: wrap around to opened work, else open whatever remains.
    for (index, item) in items.iter().enumerate() {
        if item.status == ItemStatus::Opened {
            return Some(plan(index, false));
        }
    }
    for (index, item) in items.iter().enumerate() {
        if item.status == ItemStatus::Queued {
            return Some(plan(index, true));
        }
    }

    None
}
