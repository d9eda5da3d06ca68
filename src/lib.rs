//! Spotiframe ESP32 firmware library.
//!
//! This library contains the compiled-in network configuration and the
//! components that consume it. Everything outside the `esp32` feature can be
//! tested on the host machine without ESP32 hardware.

pub mod config;
pub mod network;
pub mod remote;
pub mod wifi;

// Re-export commonly used items
pub use config::{ActiveNetwork, ConfigError, NetworkConfig};
pub use network::{NetworkError, NetworkProvider};
pub use remote::{Endpoint, NowPlaying, RemoteError, RemoteService, Scheme};
pub use wifi::WifiCredentials;

#[cfg(feature = "network-host")]
pub use network::HostNetwork;
#[cfg(feature = "network-wifi")]
pub use network::WifiNetwork;
