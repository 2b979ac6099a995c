//! Endpoint descriptors, the transport seam and the generic executor every service goes through.

use std::time::Duration;

use common_utils::{errors::CustomResult, wire::WireMap};
use error_stack::{report, ResultExt};
use masking::Secret;
use router_env::{logger, Flow, Tag};
use serde_json::Value;

use crate::{
    consts,
    errors::{ApiError, TransportError},
};

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Static description of one API operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Endpoint {
    /// Flow the operation is logged under.
    pub flow: Flow,
    pub method: Method,
    /// Path relative to the base URL, possibly containing `{id}`.
    pub path: &'static str,
    /// Resource name used in id errors, e.g. `Customer`.
    pub resource: &'static str,
}

impl Endpoint {
    pub const fn new(
        flow: Flow,
        method: Method,
        path: &'static str,
        resource: &'static str,
    ) -> Self {
        Self {
            flow,
            method,
            path,
            resource,
        }
    }

    /// Whether the path template needs a resource id.
    pub fn requires_id(&self) -> bool {
        self.path.contains(consts::ID_PLACEHOLDER)
    }

    /// Renders the path, substituting the trimmed `id`. A blank id is rejected.
    pub fn render_path(&self, id: Option<&str>) -> CustomResult<String, ApiError> {
        if !self.requires_id() {
            return Ok(self.path.to_owned());
        }

        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| report!(ApiError::empty_id(self.resource)))
            .attach_printable_lazy(|| format!("endpoint: {}", self.path))?;

        Ok(self.path.replace(consts::ID_PLACEHOLDER, id))
    }
}

/// What a request carries besides its path.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Empty,
    /// JSON body of a `POST` or `PUT`.
    Body(WireMap),
    /// Query string of a `GET` listing.
    Query(WireMap),
}

/// A fully described outgoing request, handed to a [`ConnectorTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Relative path until the client resolves it against the base URL.
    pub url: String,
    pub headers: Vec<(String, Secret<String>)>,
    pub body: Option<WireMap>,
    pub query: Option<WireMap>,
    pub timeout: Option<Duration>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            query: None,
            timeout: None,
        }
    }

    /// Adds a header, replacing any previous value of the same name.
    pub fn add_header(&mut self, header: &str, value: Secret<String>) {
        self.headers.retain(|(name, _)| !name.eq_ignore_ascii_case(header));
        self.headers.push((header.to_owned(), value));
    }

    pub fn header(&self, header: &str) -> Option<&Secret<String>> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header))
            .map(|(_, value)| value)
    }

    pub fn set_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Empty => {}
            Payload::Body(body) => {
                self.body.replace(body);
            }
            Payload::Query(query) => {
                self.query = Some(query).filter(|query| !query.is_empty());
            }
        }
    }
}

/// Sends requests to the API. Implementations own the HTTP client and turn the response body into
/// JSON; a non-success status is reported as [`TransportError::UnexpectedStatus`].
#[async_trait::async_trait]
pub trait ConnectorTransport: std::fmt::Debug + Send + Sync {
    async fn send(&self, request: Request) -> CustomResult<Value, TransportError>;
}

/// Builds the request of `endpoint`, sends it through `transport` and returns the response body.
///
/// A blank id fails with [`ApiError::Validation`] before the transport is contacted. Transport
/// failures are reported as [`ApiError::Transport`].
pub async fn execute(
    transport: &dyn ConnectorTransport,
    endpoint: &Endpoint,
    id: Option<&str>,
    payload: Payload,
) -> CustomResult<Value, ApiError> {
    let path = endpoint.render_path(id)?;
    let mut request = Request::new(endpoint.method, path);
    request.set_payload(payload);

    logger::info!(
        tag = ?Tag::ApiOutgoingRequest,
        flow = %endpoint.flow,
        method = %request.method,
        path = %request.url,
        "sending request"
    );

    let response = transport
        .send(request)
        .await
        .change_context(ApiError::Transport)
        .attach_printable_lazy(|| format!("flow: {}", endpoint.flow));

    match &response {
        Ok(_) => logger::info!(
            tag = ?Tag::ApiIncomingResponse,
            flow = %endpoint.flow,
            "request succeeded"
        ),
        Err(error) => logger::error!(
            tag = ?Tag::ApiIncomingResponse,
            flow = %endpoint.flow,
            error = ?error.downcast_ref::<TransportError>(),
            "request failed"
        ),
    }

    response
}
