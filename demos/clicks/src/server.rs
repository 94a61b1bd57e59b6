//! Development server: renders pages and serves the wasm-bindgen output.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use sprig_router::Routes;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::document::render_document;

/// Prefix under which the static directory is exposed.
pub const STATIC_PREFIX: &str = "/pkg/";

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "clicks-server", about = "Serve the clicks demo")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "CLICKS_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory holding the wasm-bindgen output for the client binary
    #[arg(long, env = "CLICKS_STATIC_DIR", default_value = "./pkg")]
    pub static_dir: PathBuf,
}

fn response(status: StatusCode, content_type: HeaderValue, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, content_type);
    response
}

fn plain(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    response(status, HeaderValue::from_static("text/plain; charset=utf-8"), body)
}

/// Answer one request. Pages render synchronously; only static reads await.
pub async fn respond(
    method: &Method,
    path: &str,
    routes: &Routes,
    static_dir: &Path,
) -> Response<Full<Bytes>> {
    if method != Method::GET && method != Method::HEAD {
        return plain(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    }

    if let Some(file) = path.strip_prefix(STATIC_PREFIX) {
        return serve_static(static_dir, file).await;
    }

    let rendered = render_document(routes, path);
    let status = if rendered.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    response(
        status,
        HeaderValue::from_static("text/html; charset=utf-8"),
        rendered.html,
    )
}

async fn serve_static(static_dir: &Path, file: &str) -> Response<Full<Bytes>> {
    if file.is_empty() || file.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return plain(StatusCode::NOT_FOUND, "File not found");
    }

    let file_path = static_dir.join(file);

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
            let content_type = HeaderValue::from_str(mime.as_ref())
                .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

            response(StatusCode::OK, content_type, content)
        }
        Err(err) => {
            log::debug!("static file {} unavailable: {err}", file_path.display());
            plain(StatusCode::NOT_FOUND, "File not found")
        }
    }
}

/// Accept connections until the listener fails.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let routes = Arc::new(crate::routes()?);
    let static_dir: Arc<Path> = Arc::from(config.static_dir);

    let listener = TcpListener::bind(config.addr).await?;
    log::info!("serving on http://{}", listener.local_addr()?);
    log::info!("static assets from {}", static_dir.display());

    loop {
        let (stream, remote) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let routes = Arc::clone(&routes);
        let static_dir = Arc::clone(&static_dir);

        tokio::task::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let routes = Arc::clone(&routes);
                let static_dir = Arc::clone(&static_dir);

                async move {
                    let response = respond(req.method(), req.uri().path(), &routes, &static_dir).await;
                    log::info!("{} {} {}", req.method(), req.uri().path(), response.status());
                    Ok::<_, Infallible>(response)
                }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                log::warn!("error serving {remote}: {err:?}");
            }
        });
    }
}
