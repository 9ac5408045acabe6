use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

mod auth;
mod handlers;
mod router;
mod types;

use router::build_router;

#[derive(Clone)]
pub struct HttpServer {
    config: Arc<ServerConfig>,
    addr: SocketAddr,
}

impl HttpServer {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let addr = config.socket_addr();
        Self { config, addr }
    }

    pub async fn start(&self) -> anyhow::Result<tokio::task::JoinHandle<()>> {
        let addr = self.addr;
        let app = build_router(self.config.clone());

        let listener = tokio::net::TcpListener::bind(addr).await?;
        log::info!("HTTP server listening on {addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                log::error!("HTTP server stopped: {e}");
            }
        });

        Ok(handle)
    }
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for ticket-view URLs embedded in confirmation codes.
    pub base_url: String,
    /// Shared secret for the round-control endpoints. `None` means the
    /// administrative surface rejects every request.
    pub admin_token: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("LOTO_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let port = std::env::var("LOTO_HTTP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let base_url =
            std::env::var("LOTO_BASE_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));
        let admin_token = std::env::var("LOTO_ADMIN_TOKEN").ok().filter(|t| !t.is_empty());
        Self {
            host,
            port,
            base_url,
            admin_token,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.host.parse().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        SocketAddr::new(ip, self.port)
    }

    pub fn ticket_url(&self, ticket_id: i32) -> String {
        format!("{}/ticket/{ticket_id}", self.base_url.trim_end_matches('/'))
    }

    /// The access-control gate: does this bearer token authorize the
    /// round-control operations? The comparison is constant-time.
    pub fn authorizes(&self, bearer_token: Option<&str>) -> bool {
        match (&self.admin_token, bearer_token) {
            (Some(expected), Some(presented)) => {
                constant_time_eq::constant_time_eq(expected.as_bytes(), presented.as_bytes())
            }
            _ => false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            base_url: "http://127.0.0.1:8080".to_owned(),
            admin_token: None,
        }
    }
}
