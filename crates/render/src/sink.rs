use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use tracing::warn;

/// Destination of a rendered response.
///
/// Headers must be set before the status is written, and the status is
/// written once, before any body bytes.
pub trait ResponseSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
    fn write_status(&mut self, status: StatusCode);
    fn write_body(&mut self, bytes: &[u8]);
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status)
    }

    fn write_body(&mut self, bytes: &[u8]) {
        (**self).write_body(bytes)
    }
}

/// In-memory response that handlers can return to axum directly.
///
/// Late headers and repeated status writes are dropped, and writing the body
/// before the status commits a 200.
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, 200 when nothing was written yet.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, lossy for non UTF-8 bytes.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        let status = self.status();
        (status, self.headers, self.body)
    }
}

impl ResponseSink for ResponseBuffer {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if let Some(status) = self.status {
            warn!(%name, %status, "Ignoring header set after status was written");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            warn!(%current, ignored = %status, "Superfluous status write");
            return;
        }
        self.status = Some(status);
    }

    fn write_body(&mut self, bytes: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
    }
}

impl IntoResponse for ResponseBuffer {
    fn into_response(self) -> Response {
        let (status, headers, body) = self.into_parts();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}
