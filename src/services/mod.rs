//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `images.rs` — image discovery, digests and data-URL encoding.
//! - `prompt.rs` — completion and vision prompt text.
//! - `backends.rs` — hosted completion and local vision model clients.
//! - `answers.rs` — yes/no normalization of model text.
//! - `compliance.rs` — per-image classification and summary counts.
//! - `checker.rs` — the sequential check run producing a report.
//! - `config.rs` — config file loading and flag/env/file precedence.
//! - `storage.rs` — report files and the run log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod answers;
pub mod backends;
pub mod checker;
pub mod compliance;
pub mod config;
pub mod images;
pub mod output;
pub mod prompt;
pub mod storage;
