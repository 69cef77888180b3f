//! Grade equivalence and merit aggregation for Pakistani university admissions.
//!
//! `grading` and `merit` are pure: plain data in, plain data out, no I/O.
//! `config`, `store` and `records` handle the files around them, and
//! `output` renders results for the `merit-calc` binary.

pub mod config;
pub mod error;
pub mod grading;
pub mod merit;
pub mod output;
pub mod records;
pub mod store;
pub mod telemetry;
