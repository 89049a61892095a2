//! Model backends answering the ODD questions for one image.
//!
//! - `CompletionBackend` sends all questions in one text prompt to a hosted
//!   `/completions` endpoint and splits the reply per line.
//! - `VisionBackend` sends the image plus one question per request to an
//!   OpenAI-compatible `/v1/chat/completions` server running a multimodal model.
//!
//! Both use a blocking `reqwest` client; the check run is strictly sequential.

use crate::cli::BackendKind;
use crate::domain::models::{Answer, BackendSettings, ImageFile};
use crate::services::answers::{normalize, parse_completion};
use crate::services::images::{data_url, ImageError};
use crate::services::prompt::{completion_prompt, vision_prompt};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("model returned no choices")]
    EmptyResponse,
    #[error(transparent)]
    Image(#[from] ImageError),
}

pub trait OddBackend {
    fn kind(&self) -> BackendKind;
    fn model(&self) -> &str;
    /// Returns one answer per question, in question order.
    fn assess(&self, image: &ImageFile, questions: &[String])
        -> Result<Vec<Answer>, BackendError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn http_client(timeout_secs: u64) -> Result<Client, BackendError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

fn authorized(request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => request.bearer_auth(key),
        None => request,
    }
}

fn send_json<Req: Serialize, Resp: for<'de> Deserialize<'de>>(
    request: RequestBuilder,
    body: &Req,
) -> Result<Resp, BackendError> {
    let response = request.json(body).send()?;
    if response.status().is_success() {
        Ok(response.json()?)
    } else {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        Err(BackendError::UnexpectedStatus { status, body })
    }
}

pub struct CompletionBackend {
    http: Client,
    settings: BackendSettings,
}

impl CompletionBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            http: http_client(settings.timeout_secs)?,
            settings: BackendSettings {
                base_url: settings.base_url.trim_end_matches('/').to_string(),
                ..settings
            },
        })
    }

    fn complete(&self, prompt: String) -> Result<String, BackendError> {
        let url = format!("{}/completions", self.settings.base_url);
        let request = CompletionRequest {
            model: &self.settings.model,
            prompt,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };
        let response: CompletionResponse = send_json(
            authorized(self.http.post(url), self.settings.api_key.as_deref()),
            &request,
        )?;
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.text.trim().to_string())
            .ok_or(BackendError::EmptyResponse)
    }
}

impl OddBackend for CompletionBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Completion
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    fn assess(
        &self,
        image: &ImageFile,
        questions: &[String],
    ) -> Result<Vec<Answer>, BackendError> {
        let text = self.complete(completion_prompt(&image.name, questions))?;
        debug!(image = %image.name, response = %text, "completion received");
        Ok(parse_completion(&text, questions.len()))
    }
}

pub struct VisionBackend {
    http: Client,
    settings: BackendSettings,
}

/// Server root for the vision endpoint; a trailing `/v1` is accepted and dropped.
fn vision_root(endpoint: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    trimmed
        .strip_suffix("/v1")
        .unwrap_or(trimmed)
        .to_string()
}

impl VisionBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            http: http_client(settings.timeout_secs)?,
            settings: BackendSettings {
                base_url: vision_root(&settings.base_url),
                ..settings
            },
        })
    }

    fn ask(&self, image_url: &str, question: &str) -> Result<String, BackendError> {
        let url = format!("{}/v1/chat/completions", self.settings.base_url);
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: serde_json::json!([
                    {"type": "text", "text": vision_prompt(question)},
                    {"type": "image_url", "image_url": {"url": image_url}}
                ]),
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };
        let response: ChatResponse = send_json(
            authorized(self.http.post(url), self.settings.api_key.as_deref()),
            &request,
        )?;
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or(BackendError::EmptyResponse)
    }
}

impl OddBackend for VisionBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Vision
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    fn assess(
        &self,
        image: &ImageFile,
        questions: &[String],
    ) -> Result<Vec<Answer>, BackendError> {
        let image_url = data_url(image)?;
        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            match self.ask(&image_url, question) {
                Ok(text) => {
                    debug!(image = %image.name, question = %question, response = %text, "vision answer");
                    answers.push(normalize(&text));
                }
                Err(err) => {
                    warn!(image = %image.name, question = %question, error = %err, "vision question failed");
                    answers.push(Answer::Error);
                }
            }
        }
        Ok(answers)
    }
}

pub fn build_backend(settings: BackendSettings) -> Result<Box<dyn OddBackend>, BackendError> {
    Ok(match settings.kind {
        BackendKind::Completion => Box::new(CompletionBackend::new(settings)?),
        BackendKind::Vision => Box::new(VisionBackend::new(settings)?),
    })
}
