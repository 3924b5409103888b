//! Picking the body format from the `Accept` request header.

use http::header::ACCEPT;
use http::request::Parts;
use http::{HeaderMap, HeaderValue, Request};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_XML: &str = "application/xml";
pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";
pub const CONTENT_TYPE_TEXT_HTML: &str = "text/html";
pub const CHARSET_SUFFIX: &str = "; charset=utf-8";

/// Anything the negotiation header can be read from.
pub trait Negotiate {
    fn accept(&self) -> Option<&HeaderValue>;
}

impl Negotiate for HeaderMap {
    fn accept(&self) -> Option<&HeaderValue> {
        self.get(ACCEPT)
    }
}

impl Negotiate for Parts {
    fn accept(&self) -> Option<&HeaderValue> {
        self.headers.get(ACCEPT)
    }
}

impl<B> Negotiate for Request<B> {
    fn accept(&self) -> Option<&HeaderValue> {
        self.headers().get(ACCEPT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// XML only when `Accept` is exactly `application/xml`; JSON otherwise,
    /// including when the header is missing.
    pub fn negotiate<R: Negotiate + ?Sized>(request: &R) -> Self {
        match request.accept() {
            Some(value) if value.as_bytes() == CONTENT_TYPE_XML.as_bytes() => Self::Xml,
            _ => Self::Json,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            Self::Xml => "application/xml; charset=utf-8",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_accept_defaults_to_json() {
        assert_eq!(Format::negotiate(&HeaderMap::new()), Format::Json);
    }

    #[test]
    fn test_exact_xml_accept_selects_xml() {
        assert_eq!(
            Format::negotiate(&headers_with_accept("application/xml")),
            Format::Xml
        );
    }

    #[test]
    fn test_xml_match_is_exact() {
        for value in [
            "Application/XML",
            "application/xml; charset=utf-8",
            "text/xml",
            "application/json, application/xml",
            "*/*",
        ] {
            assert_eq!(
                Format::negotiate(&headers_with_accept(value)),
                Format::Json,
                "{value}"
            );
        }
    }

    #[test]
    fn test_request_and_parts_negotiate_like_headers() {
        let request = Request::builder()
            .header(ACCEPT, "application/xml")
            .body(())
            .unwrap();
        assert_eq!(Format::negotiate(&request), Format::Xml);

        let (parts, _) = request.into_parts();
        assert_eq!(Format::negotiate(&parts), Format::Xml);
    }

    #[test]
    fn test_content_types_carry_charset() {
        assert_eq!(
            Format::Json.content_type(),
            format!("{CONTENT_TYPE_JSON}{CHARSET_SUFFIX}")
        );
        assert_eq!(
            Format::Xml.content_type(),
            format!("{CONTENT_TYPE_XML}{CHARSET_SUFFIX}")
        );
    }
}
