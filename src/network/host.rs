//! Host network provider.
//!
//! On host systems, the OS handles networking. This provider checks the
//! compiled configuration and resolves the remote service host.

use super::{NetworkError, NetworkProvider};
use crate::config::{self, NetworkConfig};
use log::{info, warn};
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

/// Port used when resolving the remote service (HTTPS).
pub const REMOTE_PORT: u16 = 443;

/// Host network provider.
///
/// On host systems, networking is always available via the OS.
pub struct HostNetwork {
    config: &'static NetworkConfig,
    ip_addr: Option<IpAddr>,
}

impl HostNetwork {
    /// Create a provider for the compiled configuration table.
    pub fn new() -> Self {
        Self::with_config(config::get())
    }

    /// Create a provider for an explicit table.
    pub fn with_config(config: &'static NetworkConfig) -> Self {
        Self {
            config,
            ip_addr: None,
        }
    }

    /// Resolve the remote service host to socket addresses.
    ///
    /// A lookup that fails or yields no address is an `Io` error.
    pub fn resolve_remote(&self) -> Result<Vec<SocketAddr>, NetworkError> {
        let addrs: Vec<SocketAddr> = (self.config.remote_host, REMOTE_PORT)
            .to_socket_addrs()?
            .collect();
        if addrs.is_empty() {
            return Err(NetworkError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no addresses for {}", self.config.remote_host),
            )));
        }
        info!(
            "Resolved {} to {} address(es)",
            self.config.remote_host,
            addrs.len()
        );
        Ok(addrs)
    }

    /// Get the primary local IP address.
    ///
    /// This uses a trick: create a UDP socket and "connect" to a public IP
    /// (doesn't actually send anything), then check which local address was chosen.
    fn detect_local_ip() -> Option<IpAddr> {
        use std::net::UdpSocket;

        let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
        socket.connect("8.8.8.8:80").ok()?;
        let local_addr = socket.local_addr().ok()?;
        Some(local_addr.ip())
    }
}

impl Default for HostNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkProvider for HostNetwork {
    fn connect(&mut self) -> Result<(), NetworkError> {
        self.config.validate()?;
        self.resolve_remote()?;

        let placeholders = self.config.placeholder_fields();
        if !placeholders.is_empty() {
            warn!(
                "Configuration still uses sample values: {}",
                placeholders.join(", ")
            );
        }

        // No radio on host, just detect our local IP
        self.ip_addr = Self::detect_local_ip();

        if let Some(ip) = self.ip_addr {
            info!("Host network ready, local IP: {}", ip);
        } else {
            info!("Host network ready, no default route detected");
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        // The actual connection will fail at socket level if not
        true
    }

    fn ip_addr(&self) -> Option<IpAddr> {
        self.ip_addr
    }
}
