/// Build-time configuration variables read with `option_env!` in `src/config`.
const CONFIG_ENV_VARS: &[&str] = &[
    "SPOTIFRAME_USE_ENTERPRISE",
    "SPOTIFRAME_ENT_SSID",
    "SPOTIFRAME_EAP_IDENTITY",
    "SPOTIFRAME_EAP_USERNAME",
    "SPOTIFRAME_EAP_PASSWORD",
    "SPOTIFRAME_PSK_SSID",
    "SPOTIFRAME_PSK_PASSWORD",
    "SPOTIFRAME_HOST",
];

fn main() {
    for var in CONFIG_ENV_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Only run ESP-IDF build system when targeting ESP32 (Xtensa architecture)
    // Build scripts run on the host, so we check the TARGET env var
    if let Ok(target) = std::env::var("TARGET") {
        if target.contains("xtensa") {
            embuild::espidf::sysenv::output();
        }
    }
}
