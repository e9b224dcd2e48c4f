use chrono::Utc;
use uuid::Uuid;

use super::expense::ExpenseId;

/// Source of ids for new records.
pub trait IdGenerator {
    fn next_id(&mut self) -> ExpenseId;
}

/// `1`, `2`, `3`, ...
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ExpenseId {
        let id = self.next;
        self.next += 1;
        ExpenseId::from(id.to_string())
    }
}

#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ExpenseId {
        ExpenseId::from(Uuid::new_v4().to_string())
    }
}

/// Milliseconds since the epoch.
///
/// Two calls inside the same millisecond would collide, so the value is
/// bumped past the last one handed out. Uniqueness only holds per instance.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: i64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> ExpenseId {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        ExpenseId::from(self.last.to_string())
    }
}
