use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::errors::json_error;
use crate::config::normalize_host;

/// Hosts this service answers for. Empty means unrestricted.
#[derive(Debug, Clone, Default)]
pub struct HostAllowlist {
    hosts: Arc<Vec<String>>,
}

impl HostAllowlist {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts.into_iter().filter_map(|h| normalize_host(h.as_ref())).collect();
        Self { hosts: Arc::new(hosts) }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn allows(&self, host: Option<&str>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        host.and_then(normalize_host)
            .is_some_and(|h| self.hosts.iter().any(|allowed| *allowed == h))
    }
}

pub async fn host_allowlist_middleware(
    State(allowlist): State<HostAllowlist>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let host = request_host(&req);
    if allowlist.allows(host.as_deref()) {
        return next.run(req).await;
    }

    tracing::warn!(host = host.as_deref().unwrap_or("<none>"), "rejected request for unlisted host");
    json_error(StatusCode::FORBIDDEN, "host_not_allowed", "host not allowed")
}

fn request_host(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| req.uri().host().map(str::to_string))
}

const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "content-type";

/// Permissive CORS: any origin may call the API from a browser.
pub async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();

    if *req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        apply_cors(res.headers_mut(), origin);
        return res;
    }

    let mut res = next.run(req).await;
    apply_cors(res.headers_mut(), origin);
    res
}

fn apply_cors(headers: &mut HeaderMap, origin: Option<HeaderValue>) {
    match origin {
        Some(origin) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.append(header::VARY, HeaderValue::from_static("origin"));
        }
        None => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allowlist_accepts_anything() {
        let allow = HostAllowlist::default();
        assert!(allow.allows(None));
        assert!(allow.allows(Some("anything:1234")));
    }

    #[test]
    fn listed_hosts_match_regardless_of_port_and_case() {
        let allow = HostAllowlist::new(["https://foresight-ai.onrender.com"]);
        assert!(allow.allows(Some("foresight-ai.onrender.com")));
        assert!(allow.allows(Some("Foresight-AI.onrender.com:443")));
        assert!(!allow.allows(Some("evil.example.com")));
        assert!(!allow.allows(None));
    }
}
