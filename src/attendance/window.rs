use chrono::NaiveDate;

/// Why a day's attendance cannot be edited. Exactly one applies at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum LockReason {
    None,
    Future,
    AlreadyMarked,
    PastUnmarked,
}

impl LockReason {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LockReason::None => None,
            LockReason::Future => Some("Attendance cannot be marked for future dates."),
            LockReason::AlreadyMarked => Some("Attendance has already been marked for this date."),
            LockReason::PastUnmarked => Some("Attendance can only be marked for the current date."),
        }
    }
}

/// Editability of one day, derived from the target date, "today" and what
/// is known about an existing record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EditWindow {
    pub target_date: NaiveDate,
    pub today: NaiveDate,
    pub record_exists: bool,
    /// Roster or record still outstanding.
    pub loading: bool,
}

impl EditWindow {
    /// `selected = None` means today.
    pub fn evaluate(
        selected: Option<NaiveDate>,
        today: NaiveDate,
        record_exists: bool,
        loading: bool,
    ) -> Self {
        Self {
            target_date: selected.unwrap_or(today),
            today,
            record_exists,
            loading,
        }
    }

    pub fn is_today(&self) -> bool {
        self.target_date == self.today
    }

    pub fn is_future(&self) -> bool {
        self.target_date > self.today
    }

    pub fn can_edit(&self) -> bool {
        !self.loading && self.is_today() && !self.record_exists
    }

    /// Future wins over everything and needs no record; otherwise nothing is
    /// claimed until loading finishes.
    pub fn lock_reason(&self) -> LockReason {
        if self.is_future() {
            LockReason::Future
        } else if self.loading {
            LockReason::None
        } else if self.record_exists {
            LockReason::AlreadyMarked
        } else if self.target_date < self.today {
            LockReason::PastUnmarked
        } else {
            LockReason::None
        }
    }
}

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;
