//! Page behavior configuration.
//!
//! Every knob has a default matching the shipped page. A page may override
//! any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "header_offset": 64, "typed_strings": ["Rust Developer"] }
//! </script>
//! ```
//!
//! Malformed JSON falls back to defaults rather than disabling the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Tunables for the page controllers.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Height of the fixed header, subtracted from scroll targets.
    pub header_offset: f64,
    /// A section counts as current once scrolled to within this distance.
    pub active_section_threshold: f64,
    /// Scroll depth past which the back-to-top control is shown.
    pub back_to_top_threshold: f64,
    pub typed_strings: Vec<String>,
    pub typing_delay_ms: u32,
    pub deleting_delay_ms: u32,
    pub typed_pause_ms: u32,
    pub next_string_pause_ms: u32,
    pub typing_start_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub skill_threshold: f64,
    pub skill_delay_ms: u32,
    /// Delay before the body receives the `loaded` class.
    pub loaded_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-theme".to_owned(),
            header_offset: 80.0,
            active_section_threshold: 150.0,
            back_to_top_threshold: 300.0,
            typed_strings: vec![
                "Full-Stack MERN Developer".to_owned(),
                "Blockchain Developer".to_owned(),
                "React Specialist".to_owned(),
                "Web Developer".to_owned(),
            ],
            typing_delay_ms: 100,
            deleting_delay_ms: 50,
            typed_pause_ms: 1500,
            next_string_pause_ms: 500,
            typing_start_delay_ms: 1000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            skill_threshold: 0.5,
            skill_delay_ms: 300,
            loaded_delay_ms: 500,
        }
    }
}

impl PageConfig {
    /// Parse an inline JSON override. Missing fields keep their defaults;
    /// invalid JSON yields the full default config.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("ignoring malformed page config: {e}");
                Self::default()
            }
        }
    }

    /// Drop empty typed strings and clamp observer thresholds into `0..=1`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.typed_strings.retain(|s| !s.is_empty());
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self.skill_threshold = self.skill_threshold.clamp(0.0, 1.0);
        self
    }

    /// Read the inline config block from the current document, if any.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) => Self::from_json(&raw),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
