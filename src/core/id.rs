//! Id generation for custom widgets

use crate::domain::WidgetId;

/// Source of ids for user-created widgets
pub trait IdSource: std::fmt::Debug {
    fn next_id(&mut self) -> WidgetId;
}

/// Milliseconds since the Unix epoch.
///
/// Two widgets confirmed within the same millisecond share an id.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> WidgetId {
        let millis = chrono::Utc::now().timestamp_millis();
        WidgetId(u64::try_from(millis).unwrap_or(0))
    }
}

/// Counter starting at a fixed value, for deterministic runs
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ids_are_recent() {
        let id = TimestampIds.next_id();
        // 2020-01-01T00:00:00Z in millis
        assert!(id.0 > 1_577_836_800_000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), WidgetId(10));
        assert_eq!(ids.next_id(), WidgetId(11));
    }
}
