//! Line-item id generation.
//!
//! Ids are injected at store construction rather than derived from the wall
//! clock, so tests can assert exact ids and two adds in the same instant can
//! never collide.

use lumora_core::LineItemId;

/// Source of fresh line-item ids.
pub trait IdGenerator {
    /// Produce the next id. Each call must return a value distinct from all
    /// previous calls on the same generator.
    fn next_id(&mut self) -> LineItemId;
}

/// Random UUID v4 ids; the default for real sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> LineItemId {
        LineItemId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `line-1`, `line-2`, ... ids for tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Generator starting at `line-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> LineItemId {
        self.next += 1;
        LineItemId::new(format!("line-{}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), LineItemId::new("line-1"));
        assert_eq!(ids.next_id(), LineItemId::new("line-2"));
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
