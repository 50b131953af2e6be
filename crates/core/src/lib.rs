//! Domain rules for the Late Show API.
//!
//! Shared types, the domain error taxonomy, and the two pieces of business
//! logic the data model owns: the appearance rating bound and the air-date
//! display format. No I/O lives here.

pub mod air_date;
pub mod error;
pub mod rating;
pub mod types;

pub use error::CoreError;
