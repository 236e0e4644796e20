//! In-process stand-in for the remote vault service.
//!
//! Backs the integration tests with an axum router over an in-memory store,
//! plus a request log so tests can assert that local validation failures
//! never reach the wire.

// Each test binary compiles this module separately and uses a different
// slice of it.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

type Folders = BTreeMap<String, BTreeMap<String, Vec<u8>>>;

#[derive(Default)]
struct Inner {
    /// user -> folder -> file name -> bytes
    users: BTreeMap<String, Folders>,
    /// request paths, in arrival order
    hits: Vec<String>,
    /// canned bodies for the auth endpoints
    register_response: Option<Value>,
    login_response: Option<Value>,
}

#[derive(Clone, Default)]
pub struct MockVault {
    inner: Arc<Mutex<Inner>>,
}

impl MockVault {
    pub fn hits(&self) -> Vec<String> {
        self.inner.lock().hits.clone()
    }

    pub fn set_register_response(&self, body: Value) {
        self.inner.lock().register_response = Some(body);
    }

    pub fn set_login_response(&self, body: Value) {
        self.inner.lock().login_response = Some(body);
    }

    fn hit(&self, path: impl Into<String>) {
        self.inner.lock().hits.push(path.into());
    }
}

#[derive(Deserialize)]
struct FolderBody {
    name: String,
    folder_name: String,
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn register(State(state): State<MockVault>, Json(_body): Json<Value>) -> Response {
    state.hit("/register");
    let canned = state.inner.lock().register_response.clone();
    Json(canned.unwrap_or_else(|| json!({ "success": true }))).into_response()
}

async fn login(State(state): State<MockVault>, Json(_body): Json<Value>) -> Response {
    state.hit("/login");
    let canned = state.inner.lock().login_response.clone();
    Json(canned.unwrap_or_else(|| json!({ "success": false, "detail": "Face not recognized." })))
        .into_response()
}

async fn list_folders(State(state): State<MockVault>, Path(user): Path<String>) -> Response {
    state.hit(format!("/folders/{user}"));
    let inner = state.inner.lock();
    let folders: Vec<&String> = inner
        .users
        .get(&user)
        .map(|folders| folders.keys().collect())
        .unwrap_or_default();
    Json(json!({ "success": true, "folders": folders })).into_response()
}

async fn create_folder(
    State(state): State<MockVault>,
    Json(body): Json<FolderBody>,
) -> Response {
    state.hit("/folder/create");
    let mut inner = state.inner.lock();
    let folders = inner.users.entry(body.name).or_default();
    if folders.contains_key(&body.folder_name) {
        return detail(StatusCode::BAD_REQUEST, "Folder already exists");
    }
    folders.insert(body.folder_name, BTreeMap::new());
    Json(json!({ "success": true })).into_response()
}

async fn delete_folder(
    State(state): State<MockVault>,
    Json(body): Json<FolderBody>,
) -> Response {
    state.hit("/folder/delete");
    let mut inner = state.inner.lock();
    let removed = inner
        .users
        .get_mut(&body.name)
        .and_then(|folders| folders.remove(&body.folder_name));
    match removed {
        Some(_) => Json(json!({ "success": true })).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Folder not found"),
    }
}

async fn list_files(
    State(state): State<MockVault>,
    Path((user, folder)): Path<(String, String)>,
) -> Response {
    state.hit(format!("/files/{user}/{folder}"));
    let inner = state.inner.lock();
    match inner.users.get(&user).and_then(|folders| folders.get(&folder)) {
        Some(files) => {
            let names: Vec<&String> = files.keys().collect();
            Json(json!({ "success": true, "files": names })).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Folder not found"),
    }
}

async fn upload_file(
    State(state): State<MockVault>,
    Path((user, folder)): Path<(String, String)>,
    mut multipart: Multipart,
) -> Response {
    state.hit(format!("/upload/{user}/{folder}"));
    let mut uploaded = None;
    while let Some(field) = multipart.next_field().await.expect("well-formed multipart") {
        let name = field.file_name().expect("file part has a name").to_string();
        let data = field.bytes().await.expect("field body").to_vec();
        uploaded = Some((name, data));
    }
    let Some((name, data)) = uploaded else {
        return detail(StatusCode::BAD_REQUEST, "No file in request");
    };

    let mut inner = state.inner.lock();
    match inner.users.get_mut(&user).and_then(|f| f.get_mut(&folder)) {
        Some(files) => {
            files.insert(name, data);
            Json(json!({ "success": true })).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Folder not found"),
    }
}

async fn read_file(
    State(state): State<MockVault>,
    Path((user, folder, file)): Path<(String, String, String)>,
) -> Response {
    state.hit(format!("/files/{user}/{folder}/{file}"));
    let inner = state.inner.lock();
    let bytes = inner
        .users
        .get(&user)
        .and_then(|folders| folders.get(&folder))
        .and_then(|files| files.get(&file))
        .cloned();
    match bytes {
        Some(bytes) => bytes.into_response(),
        None => detail(StatusCode::NOT_FOUND, "File not found"),
    }
}

async fn delete_file(
    State(state): State<MockVault>,
    Path((user, folder, file)): Path<(String, String, String)>,
) -> Response {
    state.hit(format!("/files/{user}/{folder}/{file}"));
    let mut inner = state.inner.lock();
    let removed = inner
        .users
        .get_mut(&user)
        .and_then(|folders| folders.get_mut(&folder))
        .and_then(|files| files.remove(&file));
    match removed {
        Some(_) => Json(json!({ "success": true })).into_response(),
        None => detail(StatusCode::NOT_FOUND, "File not found"),
    }
}

async fn health(State(state): State<MockVault>) -> Response {
    state.hit("/health");
    Json(json!({ "status": "healthy" })).into_response()
}

/// Bind the mock service on an ephemeral port and return its base URL plus
/// the shared state handle.
pub async fn spawn() -> (Url, MockVault) {
    let state = MockVault::default();
    let app = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/folders/:user", get(list_folders))
        .route("/folder/create", post(create_folder))
        .route("/folder/delete", delete(delete_folder))
        .route("/files/:user/:folder", get(list_files))
        .route("/upload/:user/:folder", post(upload_file))
        .route("/files/:user/:folder/:file", get(read_file).delete(delete_file))
        .route("/health", get(health))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock service");
    });

    let url = Url::parse(&format!("http://{addr}")).expect("valid url");
    (url, state)
}
