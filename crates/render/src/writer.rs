use crate::config::{is_xml_name, RenderConfig};
use crate::error::{RenderError, RenderResult};
use crate::negotiate::{Format, Negotiate};
use crate::sink::ResponseSink;
use http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
const TEXT_HTML_UTF8: &str = "text/html; charset=utf-8";

/// Serializes values into a [`ResponseSink`] in the format the request asks
/// for.
///
/// Structured bodies are always encoded in full before anything reaches the
/// sink, so an encoding failure turns into a plain-text 500 instead of a
/// partial body.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render<S, R, T>(&self, sink: &mut S, request: &R, code: StatusCode, value: &T)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
        T: Serialize + ?Sized,
    {
        let format = Format::negotiate(request);
        debug!(format = format.as_str(), %code, "Negotiated response format");
        match format {
            Format::Xml => self.write_xml(sink, code, value),
            Format::Json => self.write_json(sink, code, value),
        }
    }

    pub fn write_json<S, T>(&self, sink: &mut S, code: StatusCode, value: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let encoded = self.encode_json(value);
        self.write_encoded(sink, code, Format::Json, encoded);
    }

    pub fn write_xml<S, T>(&self, sink: &mut S, code: StatusCode, value: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let encoded = self.encode_xml(value);
        self.write_encoded(sink, code, Format::Xml, encoded);
    }

    pub fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> RenderResult<Vec<u8>> {
        let bytes = if self.config.pretty_json {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }

    /// Object keys must be plain XML names: quick-xml would otherwise write
    /// `<>` for an empty key, or turn `@`/`$` prefixed keys into attributes
    /// and text.
    pub fn encode_xml<T: Serialize + ?Sized>(&self, value: &T) -> RenderResult<Vec<u8>> {
        check_element_names(&serde_json::to_value(value)?)?;
        let body = quick_xml::se::to_string_with_root(&self.config.xml_root, value)?;
        let mut bytes = Vec::with_capacity(body.len() + XML_DECLARATION.len());
        if self.config.xml_declaration {
            bytes.extend_from_slice(XML_DECLARATION.as_bytes());
        }
        bytes.extend_from_slice(body.as_bytes());
        Ok(bytes)
    }

    fn write_encoded<S>(
        &self,
        sink: &mut S,
        code: StatusCode,
        format: Format,
        encoded: RenderResult<Vec<u8>>,
    ) where
        S: ResponseSink + ?Sized,
    {
        match encoded {
            Ok(bytes) => {
                debug!(format = format.as_str(), %code, bytes = bytes.len(), "Rendered response");
                write_with_content_type(sink, code, format.content_type(), &bytes);
            }
            Err(e) => {
                error!(format = format.as_str(), %code, "Failed to serialize response: {}", e);
                error_text(sink, &e.to_string(), StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

fn check_element_names(value: &Value) -> RenderResult<()> {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                if !is_xml_name(key) {
                    return Err(RenderError::InvalidXmlName { name: key.clone() });
                }
                check_element_names(nested)?;
            }
            Ok(())
        }
        Value::Array(items) => items.iter().try_for_each(check_element_names),
        _ => Ok(()),
    }
}

/// Writes `bytes` verbatim as `text/plain`.
pub fn write_raw<S: ResponseSink + ?Sized>(sink: &mut S, code: StatusCode, bytes: &[u8]) {
    write_with_content_type(sink, code, TEXT_PLAIN_UTF8, bytes);
}

/// Writes `bytes` verbatim as `text/html`.
pub fn write_html<S: ResponseSink + ?Sized>(sink: &mut S, code: StatusCode, bytes: &[u8]) {
    write_with_content_type(sink, code, TEXT_HTML_UTF8, bytes);
}

/// Writes a bare 204: no headers, no body.
pub fn no_content<S: ResponseSink + ?Sized>(sink: &mut S) {
    sink.write_status(StatusCode::NO_CONTENT);
}

/// Plain-text error reply: the message followed by a newline, marked
/// `nosniff`.
pub fn error_text<S: ResponseSink + ?Sized>(sink: &mut S, message: &str, code: StatusCode) {
    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8));
    sink.set_header(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    sink.write_status(code);
    sink.write_body(message.as_bytes());
    sink.write_body(b"\n");
}

fn write_with_content_type<S: ResponseSink + ?Sized>(
    sink: &mut S,
    code: StatusCode,
    content_type: &'static str,
    bytes: &[u8],
) {
    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(content_type));
    sink.write_status(code);
    sink.write_body(bytes);
}
