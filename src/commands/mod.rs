//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — the check run: resolve settings, query the model, write the report.
//! - `inspect.rs` — questions/scan/report/history.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod inspect;

pub use check::handle_check;
pub use inspect::{handle_history, handle_questions, handle_report, handle_scan};
