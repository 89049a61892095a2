#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
    pub images: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let images = make_fixture_images(&root);

        Self {
            _tmp: tmp,
            root,
            home,
            images,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("oddcheck");
        cmd.env("HOME", &self.home)
            .env_remove("OPENAI_API_KEY")
            .current_dir(&self.root);
        cmd
    }

    pub fn images_arg(&self) -> &str {
        self.images.to_str().expect("images path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read_report(&self, name: &str) -> Value {
        let raw = fs::read_to_string(self.root.join(name)).expect("report written");
        serde_json::from_str(&raw).expect("report is json")
    }
}

fn make_fixture_images(base: &Path) -> PathBuf {
    let dir = base.join("photos");
    fs::create_dir_all(&dir).expect("create photos dir");
    fs::write(dir.join("clear_highway.jpg"), b"\xff\xd8\xff\xe0clear").expect("write jpg");
    fs::write(dir.join("foggy_ramp.PNG"), b"\x89PNG\r\n\x1a\nfog").expect("write png");
    fs::write(dir.join("notes.txt"), "not an image").expect("write txt");
    dir
}

/// Status and JSON body the stub sends back for one request.
pub type StubReply = (StatusCode, Value);

type Responder = dyn Fn(usize, &str, &Value) -> StubReply + Send + Sync;

/// Minimal OpenAI-compatible server on an ephemeral port. Requests are numbered
/// from zero in arrival order and recorded as `(path, body)`.
pub struct StubServer {
    pub url: String,
    pub requests: Arc<Mutex<Vec<(String, Value)>>>,
}

struct StubState {
    reply: Box<Responder>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    seen: AtomicUsize,
}

async fn handle(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let index = state.seen.fetch_add(1, Ordering::SeqCst);
    let path = uri.path().to_string();
    let (status, reply) = (state.reply)(index, &path, &body);
    state.requests.lock().expect("stub lock").push((path, body));
    (status, Json(reply))
}

/// Stub that always answers `200 OK` with `reply(path, body)`.
pub fn spawn_stub(reply: fn(&str, &Value) -> Value) -> StubServer {
    spawn_stub_with_status(move |_, path, body| (StatusCode::OK, reply(path, body)))
}

pub fn spawn_stub_with_status(
    reply: impl Fn(usize, &str, &Value) -> StubReply + Send + Sync + 'static,
) -> StubServer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let url = format!("http://{}", listener.local_addr().expect("local addr"));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(StubState {
        reply: Box::new(reply),
        requests: Arc::clone(&requests),
        seen: AtomicUsize::new(0),
    });
    let app = Router::new().fallback(handle).with_state(state);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("stub runtime");
        rt.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    StubServer { url, requests }
}
