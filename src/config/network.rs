//! Network configuration table.
//!
//! This module contains platform-independent types describing the Wi-Fi
//! credentials and remote service host compiled into the firmware.
//!
//! # Example
//!
//! ```
//! use spotiframe_esp32::config::{ActiveNetwork, NetworkConfig};
//!
//! let config = NetworkConfig {
//!     use_enterprise: false,
//!     ..NetworkConfig::SAMPLE
//! };
//! assert!(matches!(config.active_network(), ActiveNetwork::Personal { .. }));
//! assert!(config.validate().is_ok());
//! ```

use super::build_env::{
    env_flag, env_or, SAMPLE_EAP_IDENTITY, SAMPLE_EAP_PASSWORD, SAMPLE_EAP_USERNAME,
    SAMPLE_ENTERPRISE_SSID, SAMPLE_PERSONAL_PASSWORD, SAMPLE_PERSONAL_SSID, SAMPLE_REMOTE_HOST,
};
use std::fmt;

/// Maximum SSID length per IEEE 802.11 standard.
pub const MAX_SSID_LEN: usize = 32;

/// Maximum PSK length for WPA2-Personal (64 hex digits).
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum length of an ASCII passphrase; longer keys must be hex.
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Maximum length of one hostname label.
pub const MAX_LABEL_LEN: usize = 63;

/// Minimum passphrase length for WPA2-Personal.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Static network configuration.
///
/// Exactly one credential set is authoritative, selected by
/// [`use_enterprise`](Self::use_enterprise). Fields of the other set may hold
/// values but are ignored by every consumer in this crate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Select WPA2-Enterprise (`true`) or WPA2-Personal (`false`).
    pub use_enterprise: bool,
    /// SSID of the 802.1X network.
    pub enterprise_ssid: &'static str,
    /// EAP outer identity.
    pub eap_identity: &'static str,
    /// EAP username.
    pub eap_username: &'static str,
    /// EAP password.
    pub eap_password: &'static str,
    /// SSID of the pre-shared-key network.
    pub personal_ssid: &'static str,
    /// Pre-shared-key passphrase.
    pub personal_password: &'static str,
    /// Bare hostname of the remote service (no scheme, no path).
    pub remote_host: &'static str,
}

/// The credential set selected by [`NetworkConfig::use_enterprise`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActiveNetwork {
    /// WPA2-Enterprise with EAP credentials.
    Enterprise {
        ssid: &'static str,
        identity: &'static str,
        username: &'static str,
        password: &'static str,
    },
    /// WPA2-Personal with a pre-shared key.
    Personal {
        ssid: &'static str,
        password: &'static str,
    },
}

impl ActiveNetwork {
    /// SSID of the selected network.
    pub fn ssid(&self) -> &'static str {
        match self {
            Self::Enterprise { ssid, .. } | Self::Personal { ssid, .. } => *ssid,
        }
    }

    /// Human-readable authentication mode.
    pub fn auth_label(&self) -> &'static str {
        match self {
            Self::Enterprise { .. } => "WPA2-Enterprise",
            Self::Personal { .. } => "WPA2-Personal",
        }
    }
}

impl fmt::Debug for ActiveNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enterprise {
                ssid,
                identity,
                username,
                ..
            } => f
                .debug_struct("Enterprise")
                .field("ssid", ssid)
                .field("identity", identity)
                .field("username", username)
                .field("password", &"****")
                .finish(),
            Self::Personal { ssid, .. } => f
                .debug_struct("Personal")
                .field("ssid", ssid)
                .field("password", &"****")
                .finish(),
        }
    }
}

impl NetworkConfig {
    /// The sample values shipped with the source tree.
    pub const SAMPLE: NetworkConfig = NetworkConfig {
        use_enterprise: true,
        enterprise_ssid: SAMPLE_ENTERPRISE_SSID,
        eap_identity: SAMPLE_EAP_IDENTITY,
        eap_username: SAMPLE_EAP_USERNAME,
        eap_password: SAMPLE_EAP_PASSWORD,
        personal_ssid: SAMPLE_PERSONAL_SSID,
        personal_password: SAMPLE_PERSONAL_PASSWORD,
        remote_host: SAMPLE_REMOTE_HOST,
    };

    /// Build the table from `SPOTIFRAME_*` variables captured at compile time.
    ///
    /// Unset variables fall back to [`NetworkConfig::SAMPLE`].
    pub const fn from_build_env() -> Self {
        Self {
            use_enterprise: env_flag(option_env!("SPOTIFRAME_USE_ENTERPRISE"), true),
            enterprise_ssid: env_or(option_env!("SPOTIFRAME_ENT_SSID"), SAMPLE_ENTERPRISE_SSID),
            eap_identity: env_or(option_env!("SPOTIFRAME_EAP_IDENTITY"), SAMPLE_EAP_IDENTITY),
            eap_username: env_or(option_env!("SPOTIFRAME_EAP_USERNAME"), SAMPLE_EAP_USERNAME),
            eap_password: env_or(option_env!("SPOTIFRAME_EAP_PASSWORD"), SAMPLE_EAP_PASSWORD),
            personal_ssid: env_or(option_env!("SPOTIFRAME_PSK_SSID"), SAMPLE_PERSONAL_SSID),
            personal_password: env_or(
                option_env!("SPOTIFRAME_PSK_PASSWORD"),
                SAMPLE_PERSONAL_PASSWORD,
            ),
            remote_host: env_or(option_env!("SPOTIFRAME_HOST"), SAMPLE_REMOTE_HOST),
        }
    }

    /// The authoritative credential set.
    pub fn active_network(&self) -> ActiveNetwork {
        if self.use_enterprise {
            ActiveNetwork::Enterprise {
                ssid: self.enterprise_ssid,
                identity: self.eap_identity,
                username: self.eap_username,
                password: self.eap_password,
            }
        } else {
            ActiveNetwork::Personal {
                ssid: self.personal_ssid,
                password: self.personal_password,
            }
        }
    }

    /// SSID of the authoritative network.
    pub fn active_ssid(&self) -> &'static str {
        self.active_network().ssid()
    }

    /// Check the active credential set and the remote host.
    ///
    /// Reading the table never calls this; bring-up code runs it before
    /// touching the radio so a bad build fails with a readable message.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.active_network() {
            ActiveNetwork::Enterprise {
                ssid,
                identity,
                username,
                password,
            } => {
                validate_ssid(ssid)?;
                // EAP fields are all required together
                for (name, value) in [
                    ("eap_identity", identity),
                    ("eap_username", username),
                    ("eap_password", password),
                ] {
                    if value.is_empty() {
                        return Err(ConfigError::EapFieldEmpty(name));
                    }
                }
            }
            ActiveNetwork::Personal { ssid, password } => {
                validate_ssid(ssid)?;
                validate_passphrase(password)?;
            }
        }

        validate_host(self.remote_host)
    }

    /// Names of active fields still holding the shipped sample values.
    pub fn placeholder_fields(&self) -> Vec<&'static str> {
        let sample = Self::SAMPLE;
        let mut fields = Vec::new();

        if self.use_enterprise {
            if self.enterprise_ssid == sample.enterprise_ssid {
                fields.push("enterprise_ssid");
            }
            if self.eap_identity == sample.eap_identity {
                fields.push("eap_identity");
            }
            if self.eap_username == sample.eap_username {
                fields.push("eap_username");
            }
            if self.eap_password == sample.eap_password {
                fields.push("eap_password");
            }
        } else {
            if self.personal_ssid == sample.personal_ssid {
                fields.push("personal_ssid");
            }
            if self.personal_password == sample.personal_password {
                fields.push("personal_password");
            }
        }

        if self.remote_host == sample.remote_host {
            fields.push("remote_host");
        }

        fields
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("use_enterprise", &self.use_enterprise)
            .field("enterprise_ssid", &self.enterprise_ssid)
            .field("eap_identity", &self.eap_identity)
            .field("eap_username", &self.eap_username)
            .field("eap_password", &"****")
            .field("personal_ssid", &self.personal_ssid)
            .field("personal_password", &"****")
            .field("remote_host", &self.remote_host)
            .finish()
    }
}

/// Redacted summary. Passwords and EAP identities are never printed.
impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active_network();
        write!(
            f,
            "{} ssid=\"{}\" host={}",
            active.auth_label(),
            active.ssid(),
            self.remote_host
        )
    }
}

fn validate_ssid(ssid: &str) -> Result<(), ConfigError> {
    if ssid.is_empty() {
        return Err(ConfigError::SsidEmpty);
    }
    if ssid.len() > MAX_SSID_LEN {
        return Err(ConfigError::SsidTooLong {
            len: ssid.len(),
            max: MAX_SSID_LEN,
        });
    }
    Ok(())
}

/// WPA2-Personal key: 8-63 printable ASCII characters, or exactly 64 hex
/// digits for a raw PSK.
fn validate_passphrase(password: &str) -> Result<(), ConfigError> {
    if !password.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        return Err(ConfigError::PasswordNotAscii);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ConfigError::PasswordTooShort {
            len: password.len(),
            min: MIN_PASSWORD_LEN,
        });
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(ConfigError::PasswordTooLong {
            len: password.len(),
            max: MAX_PASSWORD_LEN,
        });
    }
    if password.len() > MAX_PASSPHRASE_LEN && !password.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::PasswordNotHex { len: password.len() });
    }
    Ok(())
}

/// Check that `host` is a bare hostname: no scheme, no path, no port.
pub fn validate_host(host: &str) -> Result<(), ConfigError> {
    if host.is_empty() {
        return Err(ConfigError::HostEmpty);
    }
    if host.contains("://") {
        return Err(ConfigError::HostHasScheme(host.to_string()));
    }
    if host.contains('/') {
        return Err(ConfigError::HostHasPath(host.to_string()));
    }
    if let Some(ch) = host
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
    {
        return Err(ConfigError::HostInvalidChar {
            host: host.to_string(),
            ch,
        });
    }
    // Labels between dots: non-empty, no leading/trailing hyphen
    if host.split('.').any(|label| {
        label.is_empty()
            || label.len() > MAX_LABEL_LEN
            || label.starts_with('-')
            || label.ends_with('-')
    }) {
        return Err(ConfigError::HostInvalidLabel(host.to_string()));
    }
    Ok(())
}

/// Errors reported by [`NetworkConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// SSID is empty.
    SsidEmpty,
    /// SSID exceeds maximum length.
    SsidTooLong { len: usize, max: usize },
    /// Passphrase is too short for WPA2.
    PasswordTooShort { len: usize, min: usize },
    /// Passphrase exceeds maximum length.
    PasswordTooLong { len: usize, max: usize },
    /// Passphrase contains characters outside printable ASCII.
    PasswordNotAscii,
    /// A 64-character key that is not hexadecimal.
    PasswordNotHex { len: usize },
    /// A required EAP field is empty.
    EapFieldEmpty(&'static str),
    /// Remote host is empty.
    HostEmpty,
    /// Remote host carries a URI scheme.
    HostHasScheme(String),
    /// Remote host carries a path.
    HostHasPath(String),
    /// Remote host contains a character not allowed in a hostname.
    HostInvalidChar { host: String, ch: char },
    /// Remote host has an empty, oversized or hyphen-bounded label.
    HostInvalidLabel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SsidEmpty => write!(f, "SSID cannot be empty"),
            Self::SsidTooLong { len, max } => {
                write!(f, "SSID too long: {} bytes (max {})", len, max)
            }
            Self::PasswordTooShort { len, min } => {
                write!(f, "password too short: {} bytes (min {})", len, min)
            }
            Self::PasswordTooLong { len, max } => {
                write!(f, "password too long: {} bytes (max {})", len, max)
            }
            Self::PasswordNotAscii => write!(f, "password must be printable ASCII"),
            Self::PasswordNotHex { len } => {
                write!(f, "{}-character PSK must be hexadecimal", len)
            }
            Self::EapFieldEmpty(field) => write!(f, "EAP field {} cannot be empty", field),
            Self::HostEmpty => write!(f, "remote host cannot be empty"),
            Self::HostHasScheme(host) => {
                write!(f, "remote host must not include a scheme: {}", host)
            }
            Self::HostHasPath(host) => write!(f, "remote host must not include a path: {}", host),
            Self::HostInvalidChar { host, ch } => {
                write!(f, "remote host {} contains invalid character {:?}", host, ch)
            }
            Self::HostInvalidLabel(host) => {
                write!(f, "remote host {} has an invalid label", host)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal() -> NetworkConfig {
        NetworkConfig {
            use_enterprise: false,
            ..NetworkConfig::SAMPLE
        }
    }

    // ==================== Credential Selection Tests ====================

    #[test]
    fn test_enterprise_selected() {
        let config = NetworkConfig::SAMPLE;
        assert_eq!(
            config.active_network(),
            ActiveNetwork::Enterprise {
                ssid: "ENTNetworkSSID",
                identity: "user@random.com",
                username: "username",
                password: "password",
            }
        );
        assert_eq!(config.active_ssid(), "ENTNetworkSSID");
    }

    #[test]
    fn test_personal_selected() {
        let config = personal();
        assert_eq!(
            config.active_network(),
            ActiveNetwork::Personal {
                ssid: "PKNetworkSSID",
                password: "password",
            }
        );
        assert_eq!(config.active_ssid(), "PKNetworkSSID");
    }

    #[test]
    fn test_auth_labels() {
        assert_eq!(
            NetworkConfig::SAMPLE.active_network().auth_label(),
            "WPA2-Enterprise"
        );
        assert_eq!(personal().active_network().auth_label(), "WPA2-Personal");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_sample_config_valid() {
        assert!(NetworkConfig::SAMPLE.validate().is_ok());
        assert!(personal().validate().is_ok());
    }

    #[test]
    fn test_inactive_set_ignored() {
        // Broken personal fields don't matter while enterprise is active
        let config = NetworkConfig {
            personal_ssid: "",
            personal_password: "x",
            ..NetworkConfig::SAMPLE
        };
        assert!(config.validate().is_ok());

        let config = NetworkConfig {
            eap_password: "",
            ..personal()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_ssid() {
        let config = NetworkConfig {
            enterprise_ssid: "",
            ..NetworkConfig::SAMPLE
        };
        assert_eq!(config.validate(), Err(ConfigError::SsidEmpty));
    }

    #[test]
    fn test_ssid_too_long() {
        let config = NetworkConfig {
            personal_ssid: "abcdefghijklmnopqrstuvwxyz0123456",
            ..personal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SsidTooLong { len: 33, max: 32 })
        );
    }

    #[test]
    fn test_empty_eap_field() {
        let config = NetworkConfig {
            eap_username: "",
            ..NetworkConfig::SAMPLE
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EapFieldEmpty("eap_username"))
        );
    }

    #[test]
    fn test_short_eap_password_allowed() {
        // PSK length rules don't apply to EAP passwords
        let config = NetworkConfig {
            eap_password: "pw",
            ..NetworkConfig::SAMPLE
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_passphrase_too_short() {
        let config = NetworkConfig {
            personal_password: "short",
            ..personal()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PasswordTooShort { len: 5, min: 8 })
        ));
    }

    #[test]
    fn test_passphrase_too_long() {
        let long: &'static str = Box::leak("a".repeat(65).into_boxed_str());
        let config = NetworkConfig {
            personal_password: long,
            ..personal()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PasswordTooLong { .. })
        ));
    }

    fn leak(value: String) -> &'static str {
        Box::leak(value.into_boxed_str())
    }

    #[test]
    fn test_passphrase_64_chars_must_be_hex() {
        let config = NetworkConfig {
            personal_password: leak("z".repeat(64)),
            ..personal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PasswordNotHex { len: 64 })
        );

        let config = NetworkConfig {
            personal_password: leak("0123456789abcdefABCDEF".repeat(3)[..64].to_string()),
            ..personal()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_passphrase_max_ascii_length() {
        let config = NetworkConfig {
            personal_password: leak("z".repeat(63)),
            ..personal()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_passphrase_not_ascii() {
        let config = NetworkConfig {
            personal_password: "pässwört123",
            ..personal()
        };
        assert_eq!(config.validate(), Err(ConfigError::PasswordNotAscii));

        let config = NetworkConfig {
            personal_password: "tab\tinside",
            ..personal()
        };
        assert_eq!(config.validate(), Err(ConfigError::PasswordNotAscii));
    }

    #[test]
    fn test_passphrase_with_spaces() {
        let config = NetworkConfig {
            personal_password: "correct horse battery",
            ..personal()
        };
        assert!(config.validate().is_ok());
    }

    // ==================== Host Tests ====================

    #[test]
    fn test_host_with_scheme() {
        assert_eq!(
            validate_host("https://your-service.onrender.com"),
            Err(ConfigError::HostHasScheme(
                "https://your-service.onrender.com".to_string()
            ))
        );
        assert!(matches!(
            validate_host("http://example.com"),
            Err(ConfigError::HostHasScheme(_))
        ));
    }

    #[test]
    fn test_host_with_path() {
        assert!(matches!(
            validate_host("example.com/current"),
            Err(ConfigError::HostHasPath(_))
        ));
        assert!(matches!(
            validate_host("example.com/"),
            Err(ConfigError::HostHasPath(_))
        ));
    }

    #[test]
    fn test_host_invalid_char() {
        assert_eq!(
            validate_host("example.com:5050"),
            Err(ConfigError::HostInvalidChar {
                host: "example.com:5050".to_string(),
                ch: ':'
            })
        );
        assert!(validate_host("my host").is_err());
    }

    #[test]
    fn test_host_empty() {
        assert_eq!(validate_host(""), Err(ConfigError::HostEmpty));
    }

    #[test]
    fn test_bare_hosts_accepted() {
        assert!(validate_host("your-service.onrender.com").is_ok());
        assert!(validate_host("192.168.1.23").is_ok());
        assert!(validate_host("localhost").is_ok());
    }

    #[test]
    fn test_host_invalid_labels() {
        for host in [".", "-", "a..b", "-bad-.com", "bad-.com", "example.com.", ".example.com"] {
            assert_eq!(
                validate_host(host),
                Err(ConfigError::HostInvalidLabel(host.to_string())),
                "{} should be rejected",
                host
            );
        }
        assert!(matches!(
            validate_host(&format!("{}.com", "a".repeat(64))),
            Err(ConfigError::HostInvalidLabel(_))
        ));
        assert!(validate_host(&format!("{}.com", "a".repeat(63))).is_ok());
        assert!(validate_host("my-service.on-render.com").is_ok());
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_placeholders_on_sample() {
        assert_eq!(
            NetworkConfig::SAMPLE.placeholder_fields(),
            vec![
                "enterprise_ssid",
                "eap_identity",
                "eap_username",
                "eap_password",
                "remote_host"
            ]
        );
        assert_eq!(
            personal().placeholder_fields(),
            vec!["personal_ssid", "personal_password", "remote_host"]
        );
    }

    #[test]
    fn test_no_placeholders_when_customized() {
        let config = NetworkConfig {
            use_enterprise: false,
            personal_ssid: "HomeNet",
            personal_password: "correct horse battery",
            remote_host: "frame.example.org",
            ..NetworkConfig::SAMPLE
        };
        assert!(config.placeholder_fields().is_empty());
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_display_redacts_secrets() {
        let summary = NetworkConfig::SAMPLE.to_string();
        assert_eq!(
            summary,
            "WPA2-Enterprise ssid=\"ENTNetworkSSID\" host=your-service.onrender.com"
        );
        assert!(!summary.contains("password"));
        assert!(!summary.contains("user@random.com"));
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let config = NetworkConfig {
            eap_password: "TopSecret!",
            personal_password: "AlsoSecret99",
            ..NetworkConfig::SAMPLE
        };

        let table = format!("{:?}", config);
        assert!(table.contains("ENTNetworkSSID"));
        assert!(!table.contains("TopSecret!"));
        assert!(!table.contains("AlsoSecret99"));

        let enterprise = format!("{:?}", config.active_network());
        assert!(enterprise.contains("user@random.com"));
        assert!(!enterprise.contains("TopSecret!"));

        let personal = NetworkConfig {
            use_enterprise: false,
            ..config
        };
        let active = format!("{:?}", personal.active_network());
        assert!(active.contains("PKNetworkSSID"));
        assert!(!active.contains("AlsoSecret99"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::EapFieldEmpty("eap_identity").to_string(),
            "EAP field eap_identity cannot be empty"
        );
        assert_eq!(
            ConfigError::PasswordTooShort { len: 3, min: 8 }.to_string(),
            "password too short: 3 bytes (min 8)"
        );
        assert_eq!(
            ConfigError::PasswordNotHex { len: 64 }.to_string(),
            "64-character PSK must be hexadecimal"
        );
    }
}
