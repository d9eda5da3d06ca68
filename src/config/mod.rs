//! Build-time network configuration.
//!
//! The firmware carries a single immutable [`NetworkConfig`] table: the Wi-Fi
//! credentials (WPA2-Enterprise or WPA2-Personal) and the hostname of the
//! remote "now playing" service. The table is baked in at compile time and
//! lives for the whole process; [`get`] only reads it.
//!
//! # Components
//!
//! - [`network`] - the table type, credential selection and opt-in validation
//! - [`build_env`] - `const` helpers for `SPOTIFRAME_*` build variables
//!
//! # Example
//!
//! ```
//! let config = spotiframe_esp32::config::get();
//! assert!(!config.remote_host.contains("://"));
//! ```

mod build_env;
mod network;

pub use build_env::{
    SAMPLE_EAP_IDENTITY, SAMPLE_EAP_PASSWORD, SAMPLE_EAP_USERNAME, SAMPLE_ENTERPRISE_SSID,
    SAMPLE_PERSONAL_PASSWORD, SAMPLE_PERSONAL_SSID, SAMPLE_REMOTE_HOST,
};
pub use network::{
    validate_host, ActiveNetwork, ConfigError, NetworkConfig, MAX_LABEL_LEN,
    MAX_PASSPHRASE_LEN, MAX_PASSWORD_LEN, MAX_SSID_LEN, MIN_PASSWORD_LEN,
};

/// The compiled-in configuration table.
static NETWORK_CONFIG: NetworkConfig = NetworkConfig::from_build_env();

/// Return the configuration table.
///
/// Never fails and performs no validation; callers that want to reject a bad
/// build run [`NetworkConfig::validate`] themselves.
pub fn get() -> &'static NetworkConfig {
    &NETWORK_CONFIG
}
