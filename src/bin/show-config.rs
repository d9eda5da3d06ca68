//! Print the compiled-in network configuration.
//!
//! Shows which credential set the firmware will use, whether the table passes
//! validation and which URLs the device will request. Secrets are redacted.
//!
//! # Usage
//!
//! ```bash
//! SPOTIFRAME_USE_ENTERPRISE=false SPOTIFRAME_PSK_SSID="HomeNet" \
//!     cargo run --bin show-config
//! ```

use log::{error, info, warn};
use spotiframe_esp32::{
    config, ActiveNetwork, Endpoint, HostNetwork, NetworkProvider, RemoteService, WifiCredentials,
};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::get();
    info!("Configuration: {}", config);

    match config.active_network() {
        ActiveNetwork::Enterprise {
            ssid,
            identity,
            username,
            ..
        } => {
            println!("Mode:      WPA2-Enterprise");
            println!("SSID:      {}", ssid);
            println!("Identity:  {}", identity);
            println!("Username:  {}", username);
            println!("Password:  ****");
        }
        ActiveNetwork::Personal { ssid, password } => {
            println!("Mode:      WPA2-Personal");
            println!("SSID:      {}", ssid);
            println!("Password:  **** ({} chars)", password.len());
        }
    }
    println!("Host:      {}", config.remote_host);

    let placeholders = config.placeholder_fields();
    if !placeholders.is_empty() {
        warn!(
            "Sample values still in use: {} (set SPOTIFRAME_* at build time)",
            placeholders.join(", ")
        );
    }

    if let Err(e) = config.validate() {
        error!("Configuration is invalid: {}", e);
        std::process::exit(1);
    }

    let credentials = WifiCredentials::from_config(config);
    info!(
        "Driver will join {} using {}",
        credentials.ssid(),
        credentials.auth_label()
    );

    match RemoteService::from_config(config) {
        Ok(service) => {
            println!("Current:   {}", service.url(Endpoint::Current));
            println!("Album:     {}", service.url(Endpoint::Album));
        }
        Err(e) => {
            error!("Remote host unusable: {}", e);
            std::process::exit(1);
        }
    }

    // Same bring-up checks the firmware runs, minus the radio
    let mut network = HostNetwork::new();
    if let Err(e) = network.connect() {
        error!("Remote host {} unreachable: {}", config.remote_host, e);
        std::process::exit(1);
    }
    match network.ip_addr() {
        Some(ip) => println!("Local IP:  {}", ip),
        None => println!("Local IP:  (no default route)"),
    }
}
