//! WiFi connection management.
//!
//! This module wraps the ESP-IDF WiFi driver for joining either a
//! WPA2-Personal or a WPA2-Enterprise (EAP) access point.

use super::credentials::{EnterpriseCredentials, WifiCredentials};
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use esp_idf_sys::{esp, EspError};
use log::info;

/// WiFi connection manager.
pub struct WifiManager<'a> {
    /// ESP-IDF WiFi driver.
    wifi: BlockingWifi<EspWifi<'a>>,
}

impl<'a> WifiManager<'a> {
    /// Create a new WiFi manager.
    pub fn new(modem: Modem, sysloop: EspSystemEventLoop) -> Result<Self, EspError> {
        let esp_wifi = EspWifi::new(modem, sysloop.clone(), None)?;
        let wifi = BlockingWifi::wrap(esp_wifi, sysloop)?;

        Ok(Self { wifi })
    }

    /// Connect to the network described by `credentials`.
    ///
    /// Returns the IP address on success.
    pub fn connect(&mut self, credentials: &WifiCredentials) -> Result<String, WifiError> {
        info!(
            "Connecting to WiFi: {} ({})",
            credentials.ssid(),
            credentials.auth_label()
        );

        let ssid = credentials
            .ssid()
            .try_into()
            .map_err(|_| WifiError::InvalidSsid)?;

        let wifi_config = match credentials {
            WifiCredentials::Personal(psk) => Configuration::Client(ClientConfiguration {
                ssid,
                password: psk
                    .password()
                    .try_into()
                    .map_err(|_| WifiError::InvalidPassword)?,
                auth_method: AuthMethod::WPA2Personal,
                ..Default::default()
            }),
            // The EAP client carries the password, the station config only the SSID
            WifiCredentials::Enterprise(_) => Configuration::Client(ClientConfiguration {
                ssid,
                auth_method: AuthMethod::WPA2Enterprise,
                ..Default::default()
            }),
        };

        self.wifi.set_configuration(&wifi_config)?;

        if let WifiCredentials::Enterprise(eap) = credentials {
            configure_eap(eap).map_err(WifiError::Eap)?;
        }

        // Start WiFi
        self.wifi.start()?;

        // Connect (relies on ESP-IDF's internal timeout mechanisms)
        self.wifi.connect().map_err(WifiError::ConnectionFailed)?;

        // Wait for DHCP
        self.wifi.wait_netif_up().map_err(WifiError::DhcpFailed)?;

        let ip_info = self.wifi.wifi().sta_netif().get_ip_info()?;
        let ip = format!("{}", ip_info.ip);

        info!("Connected to WiFi, IP: {}", ip);
        Ok(ip)
    }

    /// Disconnect from the current network.
    pub fn disconnect(&mut self) -> Result<(), EspError> {
        info!("Disconnecting from WiFi");
        self.wifi.disconnect()?;
        self.wifi.stop()?;
        Ok(())
    }

    /// Check if currently connected.
    pub fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }

    /// Get current IP address if connected.
    pub fn get_ip(&self) -> Option<String> {
        if !self.is_connected() {
            return None;
        }
        self.wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| format!("{}", info.ip))
    }
}

/// Hand EAP identity, username and password to the supplicant and switch the
/// station to enterprise mode. Must run after `set_configuration` and before
/// `start`.
fn configure_eap(eap: &EnterpriseCredentials) -> Result<(), EspError> {
    let identity = eap.identity().as_bytes();
    let username = eap.username().as_bytes();
    let password = eap.password().as_bytes();

    // SAFETY: the supplicant copies each buffer before returning.
    unsafe {
        esp!(esp_idf_sys::esp_eap_client_set_identity(
            identity.as_ptr(),
            identity.len() as i32
        ))?;
        esp!(esp_idf_sys::esp_eap_client_set_username(
            username.as_ptr(),
            username.len() as i32
        ))?;
        esp!(esp_idf_sys::esp_eap_client_set_password(
            password.as_ptr(),
            password.len() as i32
        ))?;
        esp!(esp_idf_sys::esp_wifi_sta_enterprise_enable())?;
    }

    info!("EAP client configured for identity {}", eap.identity());
    Ok(())
}

/// Errors that can occur during WiFi operations.
#[derive(Debug)]
pub enum WifiError {
    /// SSID is invalid (too long or contains invalid characters).
    InvalidSsid,
    /// Password is invalid.
    InvalidPassword,
    /// EAP client setup failed.
    Eap(EspError),
    /// Failed to connect to the network.
    ConnectionFailed(EspError),
    /// Failed to obtain IP address via DHCP.
    DhcpFailed(EspError),
    /// ESP-IDF error.
    EspError(EspError),
}

impl From<EspError> for WifiError {
    fn from(e: EspError) -> Self {
        Self::EspError(e)
    }
}

impl std::fmt::Display for WifiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "invalid SSID"),
            Self::InvalidPassword => write!(f, "invalid password"),
            Self::Eap(e) => write!(f, "EAP setup failed: {:?}", e),
            Self::ConnectionFailed(e) => write!(f, "connection failed: {:?}", e),
            Self::DhcpFailed(e) => write!(f, "DHCP failed: {:?}", e),
            Self::EspError(e) => write!(f, "ESP error: {:?}", e),
        }
    }
}

impl std::error::Error for WifiError {}
