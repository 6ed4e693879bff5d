//! In-process files API used by the integration tests

#![allow(dead_code)]

use actix_multipart::Multipart;
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures_util::{stream, StreamExt, TryStreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One part of a received multipart body
#[derive(Debug, Clone)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl RecordedPart {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Canned reply for a route
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }
}

struct MockState {
    requests: AtomicUsize,
    uploads: Mutex<Vec<Vec<RecordedPart>>>,
    upload_reply: Reply,
    download_reply: Reply,
}

pub struct MockServer {
    pub base_url: String,
    state: web::Data<MockState>,
    handle: ServerHandle,
}

impl MockServer {
    /// Serve `POST /api/files` with `upload_reply` and `GET /img` with `download_reply`
    ///
    /// `GET /stall` sends `STALL_PREFIX` and then never finishes the body.
    pub async fn start(upload_reply: Reply, download_reply: Reply) -> Self {
        let state = web::Data::new(MockState {
            requests: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
            upload_reply,
            download_reply,
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/api/files", web::post().to(upload_files))
                .route("/img", web::get().to(serve_image))
                .route("/stall", web::get().to(stall_image))
                .default_service(web::to(not_found))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock server");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests received on any route
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Multipart bodies received on `/api/files`, in arrival order
    pub fn uploads(&self) -> Vec<Vec<RecordedPart>> {
        self.state.uploads.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }

    /// Stop without waiting for open connections, e.g. a `/stall` response
    pub async fn abort(self) {
        self.handle.stop(false).await;
    }
}

async fn upload_files(
    mut payload: Multipart,
    state: web::Data<MockState>,
) -> actix_web::Result<HttpResponse> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let mut parts = Vec::new();
    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        parts.push(RecordedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }
    state.uploads.lock().unwrap().push(parts);

    let reply = &state.upload_reply;
    Ok(HttpResponse::build(reply.status).body(reply.body.clone()))
}

async fn serve_image(state: web::Data<MockState>) -> HttpResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let reply = &state.download_reply;
    HttpResponse::build(reply.status)
        .content_type("image/png")
        .body(reply.body.clone())
}

/// First and only chunk of the `/stall` body
pub const STALL_PREFIX: &[u8] = b"\x89PNG partial";

async fn stall_image(state: web::Data<MockState>) -> HttpResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let first = Ok::<_, std::io::Error>(Bytes::from_static(STALL_PREFIX));
    let body = stream::iter(vec![first]).chain(stream::pending());
    HttpResponse::Ok().content_type("image/png").streaming(body)
}

async fn not_found(state: web::Data<MockState>) -> HttpResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    HttpResponse::NotFound().body("no such route")
}

/// A base URL nothing is listening on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// Bytes of a PNG signature followed by a little payload
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend((0..=255u8).cycle().take(4096));
    bytes
}
