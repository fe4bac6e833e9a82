//! Timestamp-derived string identifiers.

use chrono::Utc;

/// Generates entity ids from the wall clock in milliseconds. Consecutive
/// calls within the same millisecond bump past the last value, so ids are
/// unique within a run.
#[derive(Debug, Default)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    /// Creates a generator starting from the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique id.
    pub fn next(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last.to_string()
    }

    /// Next unique family id, carrying the `family_` prefix the seed data
    /// uses.
    pub fn next_family(&mut self) -> String {
        format!("family_{}", self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic_under_rapid_calls() {
        let mut ids = IdGen::new();
        let generated: Vec<String> = (0..1000).map(|_| ids.next()).collect();

        let mut sorted = generated.clone();
        sorted.sort_by_key(|id| id.parse::<i64>().unwrap_or(0));
        sorted.dedup();
        assert_eq!(sorted.len(), 1000);
        assert_eq!(sorted, generated, "ids must increase monotonically");
    }

    #[test]
    fn family_ids_carry_prefix() {
        let mut ids = IdGen::new();
        assert!(ids.next_family().starts_with("family_"));
    }
}
