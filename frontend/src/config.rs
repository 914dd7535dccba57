use log::Level;

/// Fraction of a section that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay added per card index when a list animates in.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// How long the confirmation notice stays up.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Scroll offset after which the header switches to its compact look.
pub const HEADER_SCROLLED_OFFSET: f64 = 40.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets" // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "https://cdn.poehali.dev/projects/c20e52ac-3434-4436-bba3-440f01beee2d/files"
}

/// Full location of a static image by its file name.
pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base(), file.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_join_base_and_file_name() {
        assert_eq!(asset_url("hero.jpg"), format!("{}/hero.jpg", get_asset_base()));
        assert_eq!(asset_url("/hero.jpg"), asset_url("hero.jpg"));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_serve_local_assets() {
        assert_eq!(asset_url("placeholder.svg"), "/assets/placeholder.svg");
    }
}
