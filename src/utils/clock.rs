use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Used for replays and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// "Today" as the institution sees it: a clock read through a fixed UTC offset,
/// never through the host's local zone.
#[derive(Clone)]
pub struct InstitutionClock {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl InstitutionClock {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self { clock, offset }
    }

    pub fn system(offset: FixedOffset) -> Self {
        Self::new(Arc::new(SystemClock), offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(self.clock.now())
    }

    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

impl std::fmt::Debug for InstitutionClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstitutionClock")
            .field("offset", &self.offset)
            .field("today", &self.today())
            .finish()
    }
}

/// No inhabited zone is further than 14 hours from UTC.
const MAX_OFFSET_SECS: i32 = 14 * 3600;

/// Parses `+HH:MM` / `-HH:MM` (also `Z` and `UTC`). Zone names are rejected.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }
    raw.parse::<FixedOffset>()
        .ok()
        .filter(|offset| offset.local_minus_utc().abs() <= MAX_OFFSET_SECS)
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
