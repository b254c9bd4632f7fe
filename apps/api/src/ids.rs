use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues timestamp-derived ids: Unix milliseconds rendered as decimal digits.
///
/// Ids from one clock are strictly increasing. When the wall clock has not
/// moved past the last issued id (two calls in the same millisecond, or a
/// clock step backwards), the next id is `last + 1`.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicI64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        self.next_from(Utc::now().timestamp_millis()).to_string()
    }

    fn next_from(&self, now_ms: i64) -> i64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now_ms > last { now_ms } else { last + 1 };
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
