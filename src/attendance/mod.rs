//! Daily attendance: the edit window and the marking sheet built on it.

pub mod backend;
pub mod marking;
pub mod window;

pub use backend::AttendanceBackend;
pub use marking::{MarkingSheet, Phase, RecordFetchPolicy, SubmitOutcome};
pub use window::{EditWindow, LockReason};
