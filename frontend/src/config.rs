use shared::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Reads the optional `<script id="app-config" type="application/json">`
/// block from the host page. Anything missing or invalid falls back to the
/// defaults.
pub fn load() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        log::info!("No #{} block found, using default config", CONFIG_ELEMENT_ID);
        return AppConfig::default();
    };

    match AppConfig::from_json(&raw) {
        Ok(config) => {
            log::info!(
                "Loaded config: {}-{} images, {} ms simulated latency",
                config.min_images,
                config.max_images,
                config.simulated_latency_ms
            );
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            AppConfig::default()
        }
    }
}
