//! ESP32 WiFi network provider.
//!
//! Joins the network selected by the compiled configuration table.

use super::{NetworkError, NetworkProvider};
use crate::config::{self, NetworkConfig};
use crate::wifi::{WifiCredentials, WifiManager};
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use log::{info, warn};
use std::net::IpAddr;

/// WiFi-based network provider for ESP32.
pub struct WifiNetwork<'a> {
    wifi: WifiManager<'a>,
    config: &'static NetworkConfig,
    ip_addr: Option<IpAddr>,
}

impl<'a> WifiNetwork<'a> {
    /// Create a new WiFi network provider.
    ///
    /// # Arguments
    ///
    /// * `modem` - The WiFi/BT modem peripheral
    /// * `sysloop` - The ESP-IDF system event loop
    ///
    /// # Errors
    ///
    /// Returns an error if WiFi initialization fails.
    pub fn new(modem: Modem, sysloop: EspSystemEventLoop) -> Result<Self, NetworkError> {
        let wifi = WifiManager::new(modem, sysloop)?;

        Ok(Self {
            wifi,
            config: config::get(),
            ip_addr: None,
        })
    }

    /// Disconnect and forget the current address.
    pub fn disconnect(&mut self) -> Result<(), NetworkError> {
        self.wifi.disconnect()?;
        self.ip_addr = None;
        Ok(())
    }
}

impl<'a> NetworkProvider for WifiNetwork<'a> {
    fn connect(&mut self) -> Result<(), NetworkError> {
        self.config.validate()?;

        let placeholders = self.config.placeholder_fields();
        if !placeholders.is_empty() {
            warn!(
                "Configuration still uses sample values: {}",
                placeholders.join(", ")
            );
        }

        // Copy only the active credential set; zeroed when this scope ends
        let credentials = WifiCredentials::from_config(self.config);
        let ip_string = self.wifi.connect(&credentials)?;

        match ip_string.parse() {
            Ok(ip) => {
                self.ip_addr = Some(ip);
                info!("WiFi connected, IP: {}", ip_string);
            }
            Err(e) => {
                // Log warning but don't fail - the connection is still valid
                warn!(
                    "WiFi connected but failed to parse IP '{}': {}",
                    ip_string, e
                );
                self.ip_addr = None;
            }
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.wifi.is_connected()
    }

    fn ip_addr(&self) -> Option<IpAddr> {
        if self.is_connected() {
            self.ip_addr
        } else {
            None
        }
    }
}
