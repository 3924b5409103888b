//! Content-negotiated response writers.
//!
//! Handlers hand a status code and a value to one of the helpers in
//! [`respond`]; the value is encoded as JSON or XML depending on the request's
//! `Accept` header and written to a [`ResponseSink`]. Error outcomes are
//! wrapped in an [`envelope::Envelope`] first.
//!
//! ```rust
//! use http::{HeaderMap, StatusCode};
//! use render::{respond, ResponseBuffer};
//!
//! let mut buffer = ResponseBuffer::new();
//! respond::not_found(&mut buffer, &HeaderMap::new(), None);
//!
//! assert_eq!(buffer.status(), StatusCode::NOT_FOUND);
//! assert_eq!(buffer.content_type(), Some("application/json; charset=utf-8"));
//! assert_eq!(buffer.body_text(), r#"{"code":404,"status":"Not Found"}"#);
//! ```
//!
//! [`ResponseBuffer`] implements `axum::response::IntoResponse`, so a handler
//! can fill one and return it.

pub mod config;
pub mod error;
pub mod negotiate;
pub mod respond;
pub mod sink;
pub mod writer;

use http::StatusCode;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

pub use config::{ConfigError, RenderConfig};
pub use envelope::{Envelope, FieldError, Message, ValidationErrors};
pub use error::{RenderError, RenderResult};
pub use negotiate::{Format, Negotiate};
pub use sink::{ResponseBuffer, ResponseSink};
pub use writer::{error_text, no_content, write_html, write_raw, Renderer};

/// Configured from the `RENDER_*` environment variables on first use; an
/// invalid environment falls back to the defaults.
pub(crate) static DEFAULT_RENDERER: Lazy<Renderer> = Lazy::new(|| match RenderConfig::from_env() {
    Ok(config) => Renderer::new(config),
    Err(e) => {
        warn!("Ignoring render config from environment: {}", e);
        Renderer::default()
    }
});

/// [`Renderer::render`] on the default renderer.
pub fn render<S, R, T>(sink: &mut S, request: &R, code: StatusCode, value: &T)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.render(sink, request, code, value);
}

/// [`Renderer::write_json`] on the default renderer.
pub fn write_json<S, T>(sink: &mut S, code: StatusCode, value: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.write_json(sink, code, value);
}

/// [`Renderer::write_xml`] on the default renderer.
pub fn write_xml<S, T>(sink: &mut S, code: StatusCode, value: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.write_xml(sink, code, value);
}
