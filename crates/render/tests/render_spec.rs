use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use render::{
    render, write_html, write_json, write_raw, write_xml, Format, RenderConfig, Renderer,
    ResponseBuffer,
};
use serde::{Serialize, Serializer};
use serde_json::json;
use std::collections::BTreeMap;

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("cycle detected"))
    }
}

#[derive(Serialize)]
struct Widget {
    id: u32,
    name: String,
}

fn accept(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(value));
    headers
}

#[test]
fn given_no_accept_header_when_rendering_then_json_is_written() {
    let mut buffer = ResponseBuffer::new();
    render(&mut buffer, &HeaderMap::new(), StatusCode::OK, &json!({ "id": 1 }));

    assert_eq!(buffer.status(), StatusCode::OK);
    assert_eq!(
        buffer.content_type(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(buffer.body_text(), r#"{"id":1}"#);
}

#[test]
fn given_json_accept_when_rendering_then_json_is_written() {
    let mut buffer = ResponseBuffer::new();
    render(&mut buffer, &accept("application/json"), StatusCode::OK, &());

    assert_eq!(
        buffer.content_type(),
        Some("application/json; charset=utf-8")
    );
}

#[test]
fn given_xml_accept_when_rendering_then_xml_is_written() {
    let widget = Widget {
        id: 7,
        name: "sprocket".to_string(),
    };

    let mut buffer = ResponseBuffer::new();
    render(&mut buffer, &accept("application/xml"), StatusCode::OK, &widget);

    assert_eq!(buffer.status(), StatusCode::OK);
    assert_eq!(buffer.content_type(), Some("application/xml; charset=utf-8"));
    assert_eq!(
        buffer.body_text(),
        "<response><id>7</id><name>sprocket</name></response>"
    );
}

#[test]
fn given_other_accept_values_when_rendering_then_json_is_the_default() {
    for value in ["text/html", "application/XML", "*/*"] {
        let mut buffer = ResponseBuffer::new();
        render(&mut buffer, &accept(value), StatusCode::OK, "x");

        assert_eq!(
            buffer.content_type(),
            Some(Format::Json.content_type()),
            "{value}"
        );
    }
}

#[test]
fn given_bytes_when_writing_raw_then_body_is_verbatim_text() {
    let mut buffer = ResponseBuffer::new();
    write_raw(&mut buffer, StatusCode::OK, b"hello");

    assert_eq!(buffer.status(), StatusCode::OK);
    assert_eq!(buffer.content_type(), Some("text/plain; charset=utf-8"));
    assert_eq!(buffer.body(), b"hello");
}

#[test]
fn given_markup_when_writing_html_then_body_is_verbatim_html() {
    let page = b"<html><body>test this</body></html>";

    let mut buffer = ResponseBuffer::new();
    write_html(&mut buffer, StatusCode::OK, page);

    assert_eq!(buffer.status(), StatusCode::OK);
    assert_eq!(buffer.content_type(), Some("text/html; charset=utf-8"));
    assert_eq!(buffer.body(), page);
}

#[test]
fn given_unencodable_value_when_writing_json_then_plain_text_500() {
    let mut buffer = ResponseBuffer::new();
    write_json(&mut buffer, StatusCode::CREATED, &Unencodable);

    assert_eq!(buffer.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(buffer.content_type(), Some("text/plain; charset=utf-8"));
    assert_eq!(buffer.body_text(), "cycle detected\n");
}

#[test]
fn given_unencodable_value_when_writing_xml_then_plain_text_500() {
    let mut buffer = ResponseBuffer::new();
    write_xml(&mut buffer, StatusCode::OK, &Unencodable);

    assert_eq!(buffer.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(buffer.content_type(), Some("text/plain; charset=utf-8"));
    assert!(!buffer.body_text().starts_with('<'));
    assert!(buffer.body_text().contains("cycle detected"));
}

#[test]
fn given_field_map_when_writing_xml_then_fields_become_elements() {
    let mut fields = BTreeMap::new();
    fields.insert("email", "This is not a valid email.");

    let mut buffer = ResponseBuffer::new();
    write_xml(&mut buffer, StatusCode::BAD_REQUEST, &fields);

    assert_eq!(buffer.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        buffer.body_text(),
        "<response><email>This is not a valid email.</email></response>"
    );
}

#[test]
fn given_custom_config_when_rendering_then_config_applies() {
    let renderer = Renderer::new(RenderConfig {
        pretty_json: true,
        xml_root: "widget".to_string(),
        xml_declaration: false,
    });
    let widget = Widget {
        id: 1,
        name: "gear".to_string(),
    };

    let mut json_buffer = ResponseBuffer::new();
    renderer.render(&mut json_buffer, &HeaderMap::new(), StatusCode::OK, &widget);
    assert!(json_buffer.body_text().contains("\n  \"id\": 1"));

    let mut xml_buffer = ResponseBuffer::new();
    renderer.render(
        &mut xml_buffer,
        &accept("application/xml"),
        StatusCode::OK,
        &widget,
    );
    assert!(xml_buffer.body_text().starts_with("<widget>"));
    assert!(xml_buffer.headers().contains_key(CONTENT_TYPE));
}
