//! One helper per common outcome.
//!
//! Error outcomes wrap their message in an [`Envelope`](envelope::Envelope);
//! success outcomes render the value as is. Each helper exists as a
//! [`Renderer`] method and as a free function using the default renderer,
//! which is configured from the `RENDER_*` environment variables.

use crate::negotiate::Negotiate;
use crate::sink::ResponseSink;
use crate::writer::{self, Renderer};
use crate::DEFAULT_RENDERER;
use envelope::{build_envelope, Message};
use http::StatusCode;
use serde::Serialize;

impl Renderer {
    /// Envelope for `code` built from `message`, rendered in the negotiated
    /// format.
    pub fn respond_error<S, R, T>(
        &self,
        sink: &mut S,
        request: &R,
        code: StatusCode,
        message: Option<Message<T>>,
    ) where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
        T: Serialize,
    {
        let envelope = build_envelope(code, message);
        self.render(sink, request, code, &envelope);
    }

    pub fn bad_request<S, R>(&self, sink: &mut S, request: &R, message: Option<Message>)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
    {
        self.respond_error(sink, request, StatusCode::BAD_REQUEST, message);
    }

    pub fn unauthorized<S, R>(&self, sink: &mut S, request: &R, message: Option<Message>)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
    {
        self.respond_error(sink, request, StatusCode::UNAUTHORIZED, message);
    }

    pub fn forbidden<S, R>(&self, sink: &mut S, request: &R, message: Option<Message>)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
    {
        self.respond_error(sink, request, StatusCode::FORBIDDEN, message);
    }

    pub fn not_found<S, R>(&self, sink: &mut S, request: &R, message: Option<Message>)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
    {
        self.respond_error(sink, request, StatusCode::NOT_FOUND, message);
    }

    pub fn internal_server_error<S, R>(&self, sink: &mut S, request: &R, message: Option<Message>)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
    {
        self.respond_error(sink, request, StatusCode::INTERNAL_SERVER_ERROR, message);
    }

    /// Renders `value` with 200. `None` values render as `null` in JSON.
    pub fn ok<S, R, T>(&self, sink: &mut S, request: &R, value: &T)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, request, StatusCode::OK, value);
    }

    pub fn created<S, R, T>(&self, sink: &mut S, request: &R, value: &T)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, request, StatusCode::CREATED, value);
    }

    pub fn partial_content<S, R, T>(&self, sink: &mut S, request: &R, value: &T)
    where
        S: ResponseSink + ?Sized,
        R: Negotiate + ?Sized,
        T: Serialize + ?Sized,
    {
        self.render(sink, request, StatusCode::PARTIAL_CONTENT, value);
    }
}

/// [`Renderer::respond_error`] on the default renderer. The message may carry
/// any serializable pass-through value.
pub fn respond_error<S, R, T>(
    sink: &mut S,
    request: &R,
    code: StatusCode,
    message: Option<Message<T>>,
) where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
    T: Serialize,
{
    DEFAULT_RENDERER.respond_error(sink, request, code, message);
}

pub fn bad_request<S, R>(sink: &mut S, request: &R, message: Option<Message>)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
{
    DEFAULT_RENDERER.bad_request(sink, request, message);
}

pub fn unauthorized<S, R>(sink: &mut S, request: &R, message: Option<Message>)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
{
    DEFAULT_RENDERER.unauthorized(sink, request, message);
}

pub fn forbidden<S, R>(sink: &mut S, request: &R, message: Option<Message>)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
{
    DEFAULT_RENDERER.forbidden(sink, request, message);
}

pub fn not_found<S, R>(sink: &mut S, request: &R, message: Option<Message>)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
{
    DEFAULT_RENDERER.not_found(sink, request, message);
}

pub fn internal_server_error<S, R>(sink: &mut S, request: &R, message: Option<Message>)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
{
    DEFAULT_RENDERER.internal_server_error(sink, request, message);
}

pub fn ok<S, R, T>(sink: &mut S, request: &R, value: &T)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.ok(sink, request, value);
}

pub fn created<S, R, T>(sink: &mut S, request: &R, value: &T)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.created(sink, request, value);
}

pub fn partial_content<S, R, T>(sink: &mut S, request: &R, value: &T)
where
    S: ResponseSink + ?Sized,
    R: Negotiate + ?Sized,
    T: Serialize + ?Sized,
{
    DEFAULT_RENDERER.partial_content(sink, request, value);
}

pub fn no_content<S: ResponseSink + ?Sized>(sink: &mut S) {
    writer::no_content(sink);
}
