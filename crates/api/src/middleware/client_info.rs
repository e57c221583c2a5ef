//! Best-effort extraction of the caller's network identity.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::connect_info::ConnectInfo;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Client IP address and user agent, captured for abuse tracing on public
/// submissions. Extraction never fails; anything unavailable is `None`.
///
/// The IP is taken from the first entry of `X-Forwarded-For` when present
/// (the server is expected to sit behind a reverse proxy), falling back to
/// the peer address of the connection.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty());

        let ip_address = forwarded.or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(|ua| ua.to_string());

        Ok(ClientInfo {
            ip_address,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> ClientInfo {
        let (mut parts, _) = request.into_parts();
        ClientInfo::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_forwarded_for_takes_first_entry() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .header("user-agent", "integration-test")
            .body(())
            .unwrap();

        let info = extract(request).await;
        assert_matches!(info.ip_address.as_deref(), Some("203.0.113.9"));
        assert_matches!(info.user_agent.as_deref(), Some("integration-test"));
    }

    #[tokio::test]
    async fn test_falls_back_to_peer_address() {
        let mut request = Request::builder().body(()).unwrap();
        let addr: SocketAddr = "192.0.2.4:55000".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        let info = extract(request).await;
        assert_matches!(info.ip_address.as_deref(), Some("192.0.2.4"));
        assert_matches!(info.user_agent, None);
    }

    #[tokio::test]
    async fn test_nothing_available_yields_none() {
        let info = extract(Request::builder().body(()).unwrap()).await;
        assert_matches!(info.ip_address, None);
        assert_matches!(info.user_agent, None);
    }
}
