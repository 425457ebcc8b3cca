use std::net::{SocketAddr, TcpListener};
use std::time::Duration;
use tracing::warn;

/// Check if a specific port is available
pub fn is_port_available(port: u16) -> bool {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpListener::bind(addr).is_ok()
}

/// Find an available port in the given range
pub fn find_available_port(start_port: u16, end_port: u16) -> Option<u16> {
    (start_port..=end_port).find(|&port| is_port_available(port))
}

/// Get the preferred port, or the next available one in the 8000-8999 range
pub fn get_available_port_or_default(preferred_port: u16) -> u16 {
    if is_port_available(preferred_port) {
        return preferred_port;
    }

    warn!("Port {} is not available, searching for alternative...", preferred_port);

    if let Some(port) = find_available_port(8000, 8999) {
        warn!("Using alternative port: {}", port);
        return port;
    }

    // Will fail at bind time, with a proper error
    warn!("No available ports found, returning preferred port {}", preferred_port);
    preferred_port
}

/// Probe the target URL with a HEAD request. 2xx/3xx counts as reachable.
///
/// Informational only: the QR code encodes the URL, not the site's state, so
/// callers proceed with generation either way.
pub async fn check_reachability(url: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("artqr/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            warn!("Failed to build HTTP client for reachability probe: {}", err);
            return false;
        }
    };

    match client.head(url).send().await {
        Ok(response) => {
            let status = response.status();
            status.is_success() || status.is_redirection()
        }
        Err(err) => {
            warn!("Reachability probe failed for {}: {}", url, err);
            false
        }
    }
}
