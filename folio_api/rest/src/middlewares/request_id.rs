//! Tag every request and its response with an `X-Request-Id` header

use axum::{
    http::{HeaderValue, Request},
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::URL_SAFE_NO_PAD};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// The id assigned to `request`, once the request id layer has run.
pub fn request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
}

/// Time ordered ids, base64 encoded to keep the header short.
#[derive(Debug, Clone, Copy)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Base64Display::new(Uuid::now_v7().as_bytes(), &URL_SAFE_NO_PAD).to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_header_values() {
        let request = Request::new(());
        let a = MakeRequestUuidV7.make_request_id(&request).unwrap();
        let b = MakeRequestUuidV7.make_request_id(&request).unwrap();

        assert_ne!(a.header_value(), b.header_value());
        assert_eq!(a.header_value().len(), 22);
    }
}
