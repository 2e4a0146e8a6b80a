//! Client for an institution's attendance service: sign-in, the daily
//! attendance sheet and its edit window, the year calendar, roster and staff
//! management, and dashboard statistics.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod utils;
