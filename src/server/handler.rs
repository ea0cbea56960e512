//! Request handling for the file server.

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

/// Query parameter naming the file to serve. The leading slash is part of the
/// name, so requests look like `/?/file=/path/to/file`.
pub const FILE_PARAM: &str = "/file";

/// Content type sent with served files.
const PLAYLIST_CONTENT_TYPE: &str = "audio/x-scpls";

/// Dispatch a request by method.
pub async fn handle_request(method: Method, uri: Uri) -> Response {
    debug!("{} {}", method, uri);

    match method {
        Method::HEAD => head(),
        Method::GET => match get(&uri).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} {}: {}", method, uri, e.message());
                e.into_response()
            }
        },
        _ => (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::CONNECTION, "close")],
            format!("Method {} not allowed", method),
        )
            .into_response(),
    }
}

/// Generic header-only response.
fn head() -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html"),
            (header::CONNECTION, "close"),
        ],
    )
        .into_response()
}

async fn get(uri: &Uri) -> Result<Response, ServeError> {
    let path = file_from_target(uri).ok_or_else(|| ServeError::MissingFileParam(uri.to_string()))?;

    if !tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
    {
        return Err(ServeError::NotFound(path));
    }

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| ServeError::Unreadable(path.clone(), e))?;

    debug!("Streaming {}", path.display());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PLAYLIST_CONTENT_TYPE),
            (header::CONNECTION, "close"),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}

/// Pull the requested file path out of a request target.
///
/// The query string is parsed as form data with percent-decoding. A target
/// without a query (`/file=/path`) is parsed whole.
pub fn file_from_target(uri: &Uri) -> Option<PathBuf> {
    let query = uri.query().unwrap_or_else(|| uri.path());

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == FILE_PARAM)
        .map(|(_, value)| PathBuf::from(value.into_owned()))
}

/// Failures while answering a GET. All of them become a 404.
#[derive(Debug)]
enum ServeError {
    MissingFileParam(String),
    NotFound(PathBuf),
    Unreadable(PathBuf, std::io::Error),
}

impl ServeError {
    fn message(&self) -> String {
        match self {
            ServeError::MissingFileParam(target) => {
                format!("Expecting '{}=/path/to/filename': {}", FILE_PARAM, target)
            }
            ServeError::NotFound(path) => format!("{} not found", path.display()),
            ServeError::Unreadable(path, e) => format!("Unable to read {}: {}", path.display(), e),
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            [(header::CONNECTION, "close")],
            self.message(),
        )
            .into_response()
    }
}
