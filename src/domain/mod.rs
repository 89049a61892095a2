//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/config structs in one place.
//! - Make JSON report schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — answers, statuses, report, run log and config file structs.
//! - `constants.rs` — the ODD question list and built-in defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `compliance_report.json` and `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
