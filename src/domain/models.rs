use crate::cli::{BackendKind, ExpectedAnswer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One normalized model answer. `Error` is the placeholder recorded when the
/// model could not be asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    Error,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
            Answer::Error => write!(f, "Error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::NonCompliant => write!(f, "non-compliant"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageFile {
    pub name: String,
    pub path: PathBuf,
    pub mime: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub errored: usize,
}

/// Persisted outcome of one `check` run.
///
/// `results` and `matrix` are keyed by image file name; `BTreeMap` keeps the
/// written file stable across runs over the same directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub version: u32,
    pub generated_at: String,
    pub backend: BackendKind,
    pub model: String,
    pub compliant_when: ExpectedAnswer,
    pub questions: Vec<String>,
    pub summary: ReportSummary,
    pub results: BTreeMap<String, ComplianceStatus>,
    pub matrix: BTreeMap<String, Vec<Answer>>,
    #[serde(default)]
    pub digests: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub ts: String,
    pub backend: BackendKind,
    pub model: String,
    pub images: usize,
    pub compliant: usize,
    pub report: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub images_dir: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub backend: Option<BackendKind>,
    #[serde(default)]
    pub compliant_when: Option<ExpectedAnswer>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub completion: CompletionSection,
    #[serde(default)]
    pub vision: VisionSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct CompletionSection {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct VisionSection {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Fully resolved settings for one model backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    pub kind: BackendKind,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}
