use crate::domain::EntryId;

/// Outcome of mapping a requested position onto the active ID list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub position: usize,
    pub entry_id: Option<EntryId>,
}

impl Selection {
    pub const EMPTY: Selection = Selection {
        position: 0,
        entry_id: None,
    };
}

/// Maps client-supplied ordinals onto entry IDs.
///
/// Positions come straight from client parameters, so nothing here fails:
/// negative values clamp to the first entry and overflowing values to the last.
pub struct PositionNavigator;

impl PositionNavigator {
    pub fn select(ids: &[EntryId], position: i64) -> Selection {
        let Some(last) = ids.len().checked_sub(1) else {
            return Selection::EMPTY;
        };

        let clamped = usize::try_from(position.max(0))
            .unwrap_or(usize::MAX)
            .min(last);

        Selection {
            position: clamped,
            entry_id: Some(ids[clamped]),
        }
    }

    /// Advance without marking. The upper bound is left to [`select`](Self::select).
    pub fn skip(position: i64) -> i64 {
        position.saturating_add(1)
    }

    pub fn prev(position: i64) -> i64 {
        position.saturating_sub(1).max(0)
    }

    /// Marking the current entry read removes it from the unread set, so the
    /// same ordinal already addresses the following entry.
    pub fn after_mark_read(position: i64) -> i64 {
        position
    }
}
