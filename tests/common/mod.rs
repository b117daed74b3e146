// Shared test helpers: fixture payloads, a scripted camera source, an HTTP fixture server
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use camstats::camera_repo::{CameraSource, FetchOutcome};
use camstats::error::FetchError;
use camstats::models::*;
use futures_util::stream::{self, StreamExt};

pub fn camera_1() -> RawCameraPayload {
    RawCameraPayload::from_sizes(1, &[5635, 8022, 7632])
}

pub fn camera_2() -> RawCameraPayload {
    RawCameraPayload::from_sizes(2, &[1565, 2802, 18, 12])
}

pub fn camera_3() -> RawCameraPayload {
    RawCameraPayload::from_sizes(3, &[235, 118, 11231])
}

pub fn poll_result(payloads: impl IntoIterator<Item = RawCameraPayload>) -> PollResult {
    payloads.into_iter().map(|p| (p.camera_id, p)).collect()
}

pub fn scenario_a() -> PollResult {
    poll_result([camera_1(), camera_2(), camera_3()])
}

pub fn stats(camera_id: i64, total_bytes: u64, image_count: u64, largest_image: u64) -> CameraStats {
    CameraStats {
        camera_id,
        total_bytes,
        image_count,
        largest_image,
    }
}

pub enum Scripted {
    Payload(RawCameraPayload),
    Skip,
    Abort,
}

/// In-memory camera source answering from a fixed script; unknown ids are skipped.
/// Records every requested id.
pub struct ScriptedSource {
    script: HashMap<i64, Scripted>,
    pub calls: Mutex<Vec<i64>>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = (i64, Scripted)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn scenario_a() -> Self {
        Self::new([
            (1, Scripted::Payload(camera_1())),
            (2, Scripted::Payload(camera_2())),
            (3, Scripted::Payload(camera_3())),
        ])
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

impl CameraSource for ScriptedSource {
    async fn fetch(&self, camera_id: i64) -> FetchOutcome {
        self.calls.lock().unwrap().push(camera_id);
        match self.script.get(&camera_id) {
            Some(Scripted::Payload(p)) => FetchOutcome::Success(p.clone()),
            Some(Scripted::Skip) | None => FetchOutcome::Skip(camera_id),
            Some(Scripted::Abort) => FetchOutcome::Abort(FetchError::Status {
                camera_id,
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        }
    }
}

/// Camera id whose handler sleeps longer than any test timeout.
pub const SLOW_CAMERA: i64 = 992;
/// Camera id answered with a body that is not a camera payload.
pub const GARBAGE_CAMERA: i64 = 993;
/// Camera id answered with a payload lacking the `images` field.
pub const NO_IMAGES_CAMERA: i64 = 994;
/// Camera id whose headers arrive at once but whose body never completes.
pub const STALLED_BODY_CAMERA: i64 = 995;

async fn camera_handler(Path(camera_id): Path<i64>) -> Response {
    match camera_id {
        1 => axum::Json(camera_1()).into_response(),
        2 => axum::Json(camera_2()).into_response(),
        3 => axum::Json(camera_3()).into_response(),
        SLOW_CAMERA => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            axum::Json(camera_1()).into_response()
        }
        GARBAGE_CAMERA => (StatusCode::OK, "not json").into_response(),
        NO_IMAGES_CAMERA => {
            axum::Json(serde_json::json!({ "camera_id": NO_IMAGES_CAMERA })).into_response()
        }
        STALLED_BODY_CAMERA => {
            let first = stream::once(async { Ok::<_, std::io::Error>("{\"camera_id\": 995, ") });
            let body = Body::from_stream(first.chain(stream::pending()));
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serves `/camera/{id}` on an ephemeral local port; returns the base URL.
pub async fn spawn_camera_server() -> String {
    let app = Router::new().route("/camera/{id}", get(camera_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/camera", addr)
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
