//! Spotiframe ESP32 firmware binary.

#[cfg(feature = "network-wifi")]
fn main() {
    // Link ESP-IDF patches (must be first!)
    esp_idf_sys::link_patches();

    // Initialize ESP-IDF logger for log crate integration
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("=== Spotiframe starting ===");

    if let Err(e) = run() {
        log::error!("Startup failed: {}", e);
        // Brief pause so the serial monitor shows the error before the reset
        std::thread::sleep(std::time::Duration::from_secs(5));
        unsafe { esp_idf_sys::esp_restart() };
    }
}

#[cfg(feature = "network-wifi")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use log::{info, warn};
    use spotiframe_esp32::remote::client::RemoteClient;
    use spotiframe_esp32::{config, NetworkProvider, NowPlaying, RemoteService, WifiNetwork};
    use std::time::Duration;

    /// Delay between `/current` polls.
    const POLL_INTERVAL: Duration = Duration::from_secs(10);

    let config = config::get();
    info!("Configuration: {}", config);

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;

    let mut network = WifiNetwork::new(peripherals.modem, sysloop)?;
    network.connect()?;

    let client = RemoteClient::new(RemoteService::from_config(config)?);
    info!(
        "Polling {}",
        client.service().url(spotiframe_esp32::Endpoint::Current)
    );

    let mut last: Option<NowPlaying> = None;
    loop {
        if !network.is_connected() {
            warn!("WiFi lost, reconnecting...");
            if let Err(e) = network.connect() {
                warn!("Reconnect failed: {}", e);
                std::thread::sleep(POLL_INTERVAL);
                continue;
            }
        }

        match client.now_playing() {
            Ok(now) => {
                if last.as_ref() != Some(&now) {
                    info!("Now playing: {}", now);
                    if now.is_playing() {
                        match client.album_art() {
                            // Rendering to the panel lives outside this crate
                            Ok(png) => info!("Album art: {} bytes", png.len()),
                            Err(e) => warn!("Album art unavailable: {}", e),
                        }
                    }
                    last = Some(now);
                }
            }
            Err(e) => warn!("Failed to fetch current track: {}", e),
        }

        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(not(feature = "network-wifi"))]
fn main() {
    println!("This binary requires the 'network-wifi' feature.");
    println!("Use 'cargo run --bin show-config' to inspect the configuration on the host.");
}
