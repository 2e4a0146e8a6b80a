use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use super::backend::AttendanceBackend;
use super::window::{EditWindow, LockReason};
use crate::error::{ApiError, AttendanceError};
use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, NewAttendanceEntry, NewAttendanceRecord, Status,
    UNKNOWN_ATTENDANT,
};
use crate::model::student::Student;
use crate::utils::clock::InstitutionClock;

/// What a failed record lookup means.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RecordFetchPolicy {
    /// Treat it like "not marked yet". A transient error can reopen a marked day
    /// for editing; the backend still rejects the duplicate.
    #[default]
    Lenient,
    /// Fail the load instead.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was created with these entries.
    Submitted(Vec<AttendanceEntry>),
    /// Nothing sent; the window is closed for this reason.
    NotPermitted(LockReason),
}

/// Identifies one open request. Loads carrying an older generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub target_date: NaiveDate,
    /// Future days are locked no matter what, so their record is not looked up.
    pub fetch_record: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordFetch {
    Skipped,
    Found(AttendanceRecord),
    NotFound,
    Failed(ApiError),
}

/// Everything fetched for one ticket.
#[derive(Debug, Clone)]
pub struct DayLoad {
    pub ticket: LoadTicket,
    pub roster: Result<Vec<Student>, ApiError>,
    pub record: RecordFetch,
}

/// Fetches a day without holding on to the sheet, so a newer open can start
/// while an older one is still in flight.
pub struct DayLoader<B> {
    backend: Arc<B>,
}

impl<B: AttendanceBackend> DayLoader<B> {
    pub async fn fetch(self, ticket: LoadTicket) -> DayLoad {
        let backend = &*self.backend;
        let date = ticket.target_date;
        let fetch_record = ticket.fetch_record;

        let record = async move {
            if !fetch_record {
                return RecordFetch::Skipped;
            }
            match backend.get_attendance_record(date).await {
                Ok(Some(record)) => RecordFetch::Found(record),
                Ok(None) => RecordFetch::NotFound,
                Err(e) => RecordFetch::Failed(e),
            }
        };

        let (roster, record) = futures::join!(backend.list_roster(), record);
        DayLoad {
            ticket,
            roster,
            record,
        }
    }
}

/// Attendance for one day: loads the roster and any existing record, keeps the
/// user's marks, and creates the record on submit while the edit window is open.
pub struct MarkingSheet<B> {
    clock: InstitutionClock,
    backend: Arc<B>,
    policy: RecordFetchPolicy,

    generation: u64,
    selected: Option<NaiveDate>,
    phase: Phase,
    roster: Vec<Student>,
    marks: HashMap<String, Status>,
    marked_by: Option<String>,
    last_error: Option<AttendanceError>,
    closed: bool,
}

impl<B: AttendanceBackend> MarkingSheet<B> {
    /// The backend's session is the author of anything submitted.
    pub fn new(clock: InstitutionClock, backend: Arc<B>) -> Self {
        Self {
            clock,
            backend,
            policy: RecordFetchPolicy::default(),
            generation: 0,
            selected: None,
            phase: Phase::Idle,
            roster: Vec::new(),
            marks: HashMap::new(),
            marked_by: None,
            last_error: None,
            closed: false,
        }
    }

    pub fn with_policy(mut self, policy: RecordFetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the day and waits for it. `None` opens today.
    #[instrument(name = "attendance_open", skip(self))]
    pub async fn open_for_date(&mut self, date: Option<NaiveDate>) -> Result<(), AttendanceError> {
        let ticket = self.begin_open(date);
        let load = self.loader().fetch(ticket).await;
        self.apply_load(load);

        match (&self.phase, &self.last_error) {
            (Phase::Failed, Some(err)) => Err(err.clone()),
            _ => Ok(()),
        }
    }

    /// Starts opening a day: clears the current view and returns the ticket the
    /// matching load must carry.
    pub fn begin_open(&mut self, date: Option<NaiveDate>) -> LoadTicket {
        let today = self.clock.today();
        let target_date = date.unwrap_or(today);

        self.generation += 1;
        self.selected = Some(target_date);
        self.phase = Phase::Loading;
        self.roster.clear();
        self.marks.clear();
        self.marked_by = None;
        self.last_error = None;
        self.closed = false;

        debug!(%target_date, %today, generation = self.generation, "opening attendance sheet");

        LoadTicket {
            generation: self.generation,
            target_date,
            fetch_record: target_date <= today,
        }
    }

    pub fn loader(&self) -> DayLoader<B> {
        DayLoader {
            backend: Arc::clone(&self.backend),
        }
    }

    /// Applies a finished load. Returns `false` (and changes nothing) when the
    /// load belongs to an open that has since been superseded.
    pub fn apply_load(&mut self, load: DayLoad) -> bool {
        if load.ticket.generation != self.generation {
            debug!(
                stale_date = %load.ticket.target_date,
                current = ?self.selected,
                "discarding stale attendance load"
            );
            return false;
        }

        let roster = match load.roster {
            Ok(roster) => roster,
            Err(e) => {
                warn!(error = %e, "roster fetch failed");
                self.fail(AttendanceError::LoadFailure(e));
                return true;
            }
        };

        match load.record {
            RecordFetch::Found(record) => {
                self.marks = record
                    .entries
                    .into_iter()
                    .map(|e| (e.student_id, e.status))
                    .collect();
                self.marked_by = Some(
                    record
                        .marked_by
                        .unwrap_or_else(|| UNKNOWN_ATTENDANT.to_string()),
                );
            }
            RecordFetch::NotFound | RecordFetch::Skipped => self.seed_present(&roster),
            RecordFetch::Failed(e) => match self.policy {
                RecordFetchPolicy::Lenient => {
                    warn!(error = %e, date = %load.ticket.target_date, "record fetch failed, assuming unmarked");
                    self.seed_present(&roster);
                }
                RecordFetchPolicy::Strict => {
                    self.fail(AttendanceError::LoadFailure(e));
                    return true;
                }
            },
        }

        self.roster = roster;
        self.phase = Phase::Ready;
        debug!(students = self.roster.len(), marked_by = ?self.marked_by, "attendance sheet ready");
        true
    }

    fn fail(&mut self, err: AttendanceError) {
        self.phase = Phase::Failed;
        self.roster.clear();
        self.marks.clear();
        self.last_error = Some(err);
    }

    fn seed_present(&mut self, roster: &[Student]) {
        self.marks = roster
            .iter()
            .map(|s| (s.id.clone(), Status::Present))
            .collect();
        self.marked_by = None;
    }

    pub fn window(&self) -> EditWindow {
        EditWindow::evaluate(
            self.selected,
            self.clock.today(),
            self.marked_by.is_some(),
            self.phase != Phase::Ready,
        )
    }

    pub fn can_edit(&self) -> bool {
        self.window().can_edit()
    }

    pub fn lock_reason(&self) -> LockReason {
        self.window().lock_reason()
    }

    /// Sets one student's mark. Ignored (returns `false`) outside the edit
    /// window or for students not on the roster.
    pub fn set_status(&mut self, student_id: &str, status: Status) -> bool {
        if !self.can_edit() {
            debug!(student_id, %status, reason = %self.lock_reason(), "status change ignored");
            return false;
        }
        if !self.roster.iter().any(|s| s.id == student_id) {
            debug!(student_id, "status change for unknown student ignored");
            return false;
        }
        self.marks.insert(student_id.to_string(), status);
        true
    }

    pub fn mark_all_present(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        for student in &self.roster {
            self.marks.insert(student.id.clone(), Status::Present);
        }
        true
    }

    /// Creates the day's record from the current marks.
    ///
    /// Outside the edit window nothing is sent. On failure the marks are kept
    /// so the call can simply be repeated.
    #[instrument(name = "attendance_submit", skip(self), fields(date = ?self.selected))]
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AttendanceError> {
        let window = self.window();
        if !window.can_edit() {
            debug!(reason = %window.lock_reason(), "submit ignored");
            return Ok(SubmitOutcome::NotPermitted(window.lock_reason()));
        }

        let author = match self.backend.attendant() {
            Ok(session) => session.user.clone(),
            Err(e) => {
                warn!(error = %e, "no session to submit attendance under");
                let err = AttendanceError::SubmitFailure(e);
                self.last_error = Some(err.clone());
                return Err(err);
            }
        };

        let payload = self.build_payload(window.target_date, &author.id);
        match self.backend.create_attendance_record(&payload).await {
            Ok(()) => {
                info!(
                    date = %payload.date,
                    students = payload.records.len(),
                    "attendance submitted"
                );
                self.marked_by = Some(author.name);
                self.last_error = None;
                self.closed = true;
                Ok(SubmitOutcome::Submitted(payload.entries()))
            }
            Err(e) => {
                warn!(error = %e, "attendance submit failed");
                let err = AttendanceError::SubmitFailure(e);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn build_payload(&self, date: NaiveDate, attendant_id: &str) -> NewAttendanceRecord {
        let records = self
            .roster
            .iter()
            .map(|s| NewAttendanceEntry {
                student_id: s.id.clone(),
                name: s.name.clone(),
                roll_no: s.roll_id.to_string(),
                status: self.marks.get(&s.id).copied().unwrap_or(Status::Absent),
            })
            .collect();

        NewAttendanceRecord {
            date,
            attendant_id: attendant_id.to_string(),
            records,
        }
    }

    /// Roster members with their current mark, in roster order.
    pub fn rows(&self) -> impl Iterator<Item = (&Student, Option<Status>)> + '_ {
        self.roster
            .iter()
            .map(|s| (s, self.marks.get(&s.id).copied()))
    }

    /// Marks currently shown, in roster order. Students with no mark in an
    /// existing record are left out.
    pub fn entries(&self) -> Vec<AttendanceEntry> {
        self.rows()
            .filter_map(|(s, status)| {
                status.map(|status| AttendanceEntry {
                    student_id: s.id.clone(),
                    status,
                })
            })
            .collect()
    }

    pub fn status_of(&self, student_id: &str) -> Option<Status> {
        self.marks.get(student_id).copied()
    }

    pub fn target_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn marked_by(&self) -> Option<&str> {
        self.marked_by.as_deref()
    }

    pub fn last_error(&self) -> Option<&AttendanceError> {
        self.last_error.as_ref()
    }

    /// Set after a successful submit; the shell should dismiss the view.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
#[path = "marking_test.rs"]
mod marking_test;
