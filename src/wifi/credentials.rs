//! Owned Wi-Fi credentials handed to the driver.
//!
//! Only the active credential set is copied out of the configuration table.
//! Copies are zeroed when dropped.

use crate::config::{ActiveNetwork, NetworkConfig};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// WPA2-Enterprise (EAP) credentials.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EnterpriseCredentials {
    ssid: String,
    identity: String,
    username: String,
    password: String,
}

impl EnterpriseCredentials {
    pub fn new(
        ssid: impl Into<String>,
        identity: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            ssid: ssid.into(),
            identity: identity.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// EAP outer identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for EnterpriseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnterpriseCredentials")
            .field("ssid", &self.ssid)
            .field("identity", &self.identity)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// WPA2-Personal (PSK) credentials.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PersonalCredentials {
    ssid: String,
    password: String,
}

impl PersonalCredentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for PersonalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"****")
            .finish()
    }
}

/// Credentials for the network the device should join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifiCredentials {
    Enterprise(EnterpriseCredentials),
    Personal(PersonalCredentials),
}

impl WifiCredentials {
    /// Copy the active credential set out of `config`.
    ///
    /// The inactive set is never read.
    pub fn from_config(config: &NetworkConfig) -> Self {
        match config.active_network() {
            ActiveNetwork::Enterprise {
                ssid,
                identity,
                username,
                password,
            } => Self::Enterprise(EnterpriseCredentials::new(ssid, identity, username, password)),
            ActiveNetwork::Personal { ssid, password } => {
                Self::Personal(PersonalCredentials::new(ssid, password))
            }
        }
    }

    pub fn ssid(&self) -> &str {
        match self {
            Self::Enterprise(creds) => creds.ssid(),
            Self::Personal(creds) => creds.ssid(),
        }
    }

    pub fn is_enterprise(&self) -> bool {
        matches!(self, Self::Enterprise(_))
    }

    /// Human-readable authentication mode.
    pub fn auth_label(&self) -> &'static str {
        match self {
            Self::Enterprise(_) => "WPA2-Enterprise",
            Self::Personal(_) => "WPA2-Personal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_from_config() {
        let config = NetworkConfig {
            use_enterprise: true,
            enterprise_ssid: "ENTNetworkSSID",
            eap_identity: "user@random.com",
            ..NetworkConfig::SAMPLE
        };

        let creds = WifiCredentials::from_config(&config);
        assert!(creds.is_enterprise());
        assert_eq!(creds.ssid(), "ENTNetworkSSID");
        assert_eq!(creds.auth_label(), "WPA2-Enterprise");

        match creds {
            WifiCredentials::Enterprise(ref ent) => {
                assert_eq!(ent.identity(), "user@random.com");
                assert_eq!(ent.username(), "username");
                assert_eq!(ent.password(), "password");
            }
            WifiCredentials::Personal(_) => panic!("expected enterprise credentials"),
        }
    }

    #[test]
    fn test_personal_from_config() {
        let config = NetworkConfig {
            use_enterprise: false,
            personal_ssid: "PKNetworkSSID",
            personal_password: "password",
            ..NetworkConfig::SAMPLE
        };

        let creds = WifiCredentials::from_config(&config);
        assert!(!creds.is_enterprise());
        assert_eq!(
            creds,
            WifiCredentials::Personal(PersonalCredentials::new("PKNetworkSSID", "password"))
        );
    }

    #[test]
    fn test_personal_ignores_eap_fields() {
        let a = NetworkConfig {
            use_enterprise: false,
            ..NetworkConfig::SAMPLE
        };
        let b = NetworkConfig {
            eap_identity: "",
            eap_username: "someone-else",
            eap_password: "",
            enterprise_ssid: "Other",
            ..a
        };
        assert_eq!(
            WifiCredentials::from_config(&a),
            WifiCredentials::from_config(&b)
        );
    }

    #[test]
    fn test_enterprise_ignores_psk_fields() {
        let a = NetworkConfig::SAMPLE;
        let b = NetworkConfig {
            personal_ssid: "Elsewhere",
            personal_password: "",
            ..a
        };
        assert_eq!(
            WifiCredentials::from_config(&a),
            WifiCredentials::from_config(&b)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = WifiCredentials::Personal(PersonalCredentials::new("Net", "hunter2hunter2"));
        let debug = format!("{:?}", creds);
        assert!(debug.contains("Net"));
        assert!(!debug.contains("hunter2"));

        let ent = EnterpriseCredentials::new("Ent", "id@x", "user", "s3cret-pass");
        assert!(!format!("{:?}", ent).contains("s3cret"));
    }

    #[test]
    fn test_zeroize_clears_secrets() {
        let mut creds = PersonalCredentials::new("Net", "hunter2hunter2");
        creds.zeroize();
        assert!(creds.ssid().is_empty());
        assert!(creds.password().is_empty());
    }
}
