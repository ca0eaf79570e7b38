// config.rs - Mount-time settings
//
// Defaults match the site markup. Only the seed is exposed to JS; the rest
// is fixed at build time.

use crate::sim::{CLOUDS, FISH, RAIN_DROPS};
use crate::theme::THEME_KEY;

#[derive(Clone, Debug)]
pub struct Config {
    pub rain_drops: usize,
    pub clouds: usize,
    pub fish: usize,

    pub rain_canvas_id: &'static str,
    pub sky_canvas_id: &'static str,
    pub toggle_selector: &'static str,
    pub icon_wrap_selector: &'static str,
    pub floating_icon_selector: &'static str,

    pub storage_key: &'static str,
    pub fish_right_src: &'static str,
    pub fish_left_src: &'static str,

    /// Fixed seed for reproducible scenes; random per load when None
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rain_drops: RAIN_DROPS,
            clouds: CLOUDS,
            fish: FISH,
            rain_canvas_id: "rainCanvas",
            sky_canvas_id: "skyCanvas",
            toggle_selector: ".theme-toggle",
            icon_wrap_selector: ".icon-wrap",
            floating_icon_selector: "ul li a i",
            storage_key: THEME_KEY,
            fish_right_src: "./assets/images/fish-look-right.png",
            fish_left_src: "./assets/images/fish-look-left.png",
            seed: None,
        }
    }
}

impl Config {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let config = Config::default();
        assert_eq!((config.rain_drops, config.clouds, config.fish), (200, 10, 6));
        assert_eq!(config.storage_key, "theme");
        assert!(config.seed.is_none());
        assert_eq!(config.with_seed(Some(4)).seed, Some(4));
    }
}
