//! WiFi credentials and driver.
//!
//! # Components
//!
//! - [`credentials`] - owned, zeroize-on-drop copy of the active credential
//!   set (host-testable)
//! - [`connection`] - ESP-IDF WiFi driver wrapper with WPA2-Personal and
//!   WPA2-Enterprise support (ESP32 only)
//!
//! The credential values themselves come from [`crate::config`].

mod credentials;
#[cfg(feature = "esp32")]
mod connection;

pub use credentials::{EnterpriseCredentials, PersonalCredentials, WifiCredentials};

#[cfg(feature = "esp32")]
pub use connection::{WifiError, WifiManager};
