// src/server.rs

//! Local preview server - serves the project root over plain HTTP.
//!
//! Serving is dumb on purpose: resolve the request path under the root,
//! read the file, send it with an explicit content type and no-cache
//! headers so edits show up on reload. Traversal components are rejected
//! before any filesystem access. The server binds to loopback only.

use crate::error::{Error, Result};
use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::io;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// The server only ever binds loopback
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default preview port
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for one preview server run
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory served as the site root
    pub root: PathBuf,
    pub port: u16,
}

#[derive(Clone)]
struct SiteState {
    root: Arc<PathBuf>,
}

/// A bound preview server, ready to serve
#[derive(Debug)]
pub struct DevServer {
    listener: tokio::net::TcpListener,
    router: Router,
}

impl DevServer {
    /// Bind the configured port on loopback
    ///
    /// A port conflict is classified separately so the caller can suggest
    /// `--port` instead of dumping a raw I/O error.
    pub async fn bind(config: &DevServerConfig) -> Result<Self> {
        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|err| {
            if err.kind() == io::ErrorKind::AddrInUse {
                Error::PortInUse { port: config.port }
            } else {
                Error::Io(err)
            }
        })?;

        Ok(Self {
            listener,
            router: router(config.root.clone()),
        })
    }

    /// The address actually bound (resolves port 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until the connection loop fails or the task is cancelled
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

/// Create the file-serving router for a site root
pub fn router(root: PathBuf) -> Router {
    let state = SiteState {
        root: Arc::new(root),
    };

    Router::new()
        .route("/", get(serve_index))
        .route("/*path", get(serve_path))
        .with_state(state)
}

async fn serve_index(State(state): State<SiteState>) -> Response {
    serve_file(&state, "").await
}

async fn serve_path(State(state): State<SiteState>, UrlPath(path): UrlPath<String>) -> Response {
    serve_file(&state, &path).await
}

async fn serve_file(state: &SiteState, request_path: &str) -> Response {
    let Some(relative) = sanitize(request_path) else {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    let mut path = state.root.join(relative);
    if path.is_dir() {
        path = path.join("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(contents) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type_for(&path))
            .header(header::CONTENT_LENGTH, contents.len())
            .header(
                header::CACHE_CONTROL,
                "no-cache, no-store, must-revalidate",
            )
            .body(Body::from(contents))
            .unwrap(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
        Err(err) => {
            tracing::error!("Failed to read {}: {}", path.display(), err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}

/// Normalize a request path to a safe relative path
///
/// Returns `None` for anything containing parent or rooted components.
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');

    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(clean)
}

/// Content type by file extension, case-insensitive
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

/// Best-effort launch of the default browser; true if an opener was spawned
pub fn open_in_browser(url: &str) -> bool {
    for opener in ["xdg-open", "open"] {
        if let Ok(path) = which::which(opener) {
            match std::process::Command::new(path)
                .arg(url)
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
            {
                Ok(_) => return true,
                Err(err) => {
                    tracing::debug!("Failed to launch {}: {}", opener, err);
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>home</html>").unwrap();
        std::fs::create_dir_all(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/main.js"), "export {};").unwrap();
        dir
    }

    async fn get_path(root: &Path, uri: &str) -> Response {
        router(root.to_path_buf())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = site();
        let response = get_path(dir.path(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html"
        );
    }

    #[tokio::test]
    async fn test_module_is_served_as_javascript() {
        let dir = site();
        let response = get_path(dir.path(), "/js/main.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = site();
        let response = get_path(dir.path(), "/nope.html").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let dir = site();
        let response = get_path(dir.path(), "/../outside.txt").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = get_path(dir.path(), "/js/../../outside.txt").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_directory_serves_its_index() {
        let dir = site();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        std::fs::write(dir.path().join("blog/index.html"), "<html>blog</html>").unwrap();

        let response = get_path(dir.path(), "/blog").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html"
        );
    }

    #[tokio::test]
    async fn test_bind_twice_reports_port_conflict() {
        let dir = site();
        let first = DevServer::bind(&DevServerConfig {
            root: dir.path().to_path_buf(),
            port: 0,
        })
        .await
        .unwrap();
        let port = first.local_addr().unwrap().port();

        let err = DevServer::bind(&DevServerConfig {
            root: dir.path().to_path_buf(),
            port,
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::PortInUse { port: p } if p == port));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(""), Some(PathBuf::new()));
        assert_eq!(sanitize("js/main.js"), Some(PathBuf::from("js/main.js")));
        assert_eq!(sanitize("/index.html"), Some(PathBuf::from("index.html")));
        assert_eq!(sanitize("a/./b"), Some(PathBuf::from("a/b")));
        assert_eq!(sanitize("../secret"), None);
        assert_eq!(sanitize("js/../../secret"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("a.html")), "text/html");
        assert_eq!(content_type_for(Path::new("a.css")), "text/css");
        assert_eq!(
            content_type_for(Path::new("a.mjs")),
            "application/javascript"
        );
        assert_eq!(content_type_for(Path::new("a.JSON")), "application/json");
        assert_eq!(
            content_type_for(Path::new("a.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("noext")),
            "application/octet-stream"
        );
    }
}
