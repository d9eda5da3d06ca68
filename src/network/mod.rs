//! Network abstraction layer.
//!
//! This module provides a platform-independent network interface that works on:
//! - **ESP32** (`network-wifi` feature): WiFi bring-up from the compiled
//!   configuration table
//! - **Host** (`network-host` feature): Native OS networking
//!
//! # Example
//!
//! ```ignore
//! use spotiframe_esp32::network::NetworkProvider;
//!
//! // Platform-specific initialization
//! #[cfg(feature = "network-wifi")]
//! let mut network = network::WifiNetwork::new(modem, sysloop)?;
//!
//! #[cfg(feature = "network-host")]
//! let mut network = network::HostNetwork::new();
//!
//! // Same code for both platforms
//! network.connect()?;
//! println!("Connected, IP: {:?}", network.ip_addr());
//! ```

use crate::config::ConfigError;
use std::net::IpAddr;

#[cfg(feature = "network-wifi")]
mod wifi;

#[cfg(feature = "network-host")]
mod host;

// Re-exports
#[cfg(feature = "network-wifi")]
pub use wifi::WifiNetwork;

#[cfg(feature = "network-host")]
pub use host::HostNetwork;

/// Network provider abstraction.
///
/// This trait abstracts over platform-specific network initialization,
/// allowing the same application code to run on ESP32 (WiFi) and host (native).
pub trait NetworkProvider: Send {
    /// Connect to the network.
    ///
    /// Both providers reject a configuration table that fails
    /// [`NetworkConfig::validate`](crate::config::NetworkConfig::validate).
    /// - On ESP32: joins the active WiFi network
    /// - On Host: no radio work, the OS is already connected
    fn connect(&mut self) -> Result<(), NetworkError>;

    /// Check if the network is connected.
    fn is_connected(&self) -> bool;

    /// Get the local IP address.
    ///
    /// Returns `None` if not connected.
    fn ip_addr(&self) -> Option<IpAddr>;
}

/// Network errors.
#[derive(Debug)]
pub enum NetworkError {
    /// The compiled configuration table is unusable.
    NotConfigured(ConfigError),
    /// WiFi connection failed (ESP32).
    #[cfg(feature = "network-wifi")]
    WifiError(crate::wifi::WifiError),
    /// Generic I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured(e) => write!(f, "network not configured: {}", e),
            #[cfg(feature = "network-wifi")]
            Self::WifiError(e) => write!(f, "WiFi error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotConfigured(e) => Some(e),
            #[cfg(feature = "network-wifi")]
            Self::WifiError(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for NetworkError {
    fn from(e: ConfigError) -> Self {
        Self::NotConfigured(e)
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "network-wifi")]
impl From<crate::wifi::WifiError> for NetworkError {
    fn from(e: crate::wifi::WifiError) -> Self {
        Self::WifiError(e)
    }
}

#[cfg(feature = "network-wifi")]
impl From<esp_idf_sys::EspError> for NetworkError {
    fn from(e: esp_idf_sys::EspError) -> Self {
        Self::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("ESP error: {:?}", e),
        ))
    }
}
