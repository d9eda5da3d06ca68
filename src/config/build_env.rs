//! Compile-time lookup of configuration overrides.
//!
//! Values are captured with `option_env!` when the firmware is built, so the
//! running device never reads an environment. These helpers run in `const`
//! context to keep the configuration table a plain `static`.

/// Sample enterprise SSID shipped with the source tree.
pub const SAMPLE_ENTERPRISE_SSID: &str = "ENTNetworkSSID";

/// Sample EAP outer identity.
pub const SAMPLE_EAP_IDENTITY: &str = "user@random.com";

/// Sample EAP username.
pub const SAMPLE_EAP_USERNAME: &str = "username";

/// Sample EAP password.
pub const SAMPLE_EAP_PASSWORD: &str = "password";

/// Sample WPA2-Personal SSID.
pub const SAMPLE_PERSONAL_SSID: &str = "PKNetworkSSID";

/// Sample WPA2-Personal passphrase.
pub const SAMPLE_PERSONAL_PASSWORD: &str = "password";

/// Sample remote service host.
pub const SAMPLE_REMOTE_HOST: &str = "your-service.onrender.com";

/// Use `value` when the variable was set at build time, otherwise `default`.
pub const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Parse a boolean build variable.
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no`. Unrecognized text keeps
/// `default`.
pub const fn env_flag(value: Option<&'static str>, default: bool) -> bool {
    match value {
        Some(v) => match v.as_bytes() {
            b"true" | b"1" | b"yes" => true,
            b"false" | b"0" | b"no" => false,
            _ => default,
        },
        None => default,
    }
}
