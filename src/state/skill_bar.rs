//! Skill progress bar targets and the fire-once latch.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

/// Attribute carrying a bar's target percentage, e.g. `data-width="85"`.
pub const WIDTH_ATTRIBUTE: &str = "data-width";

/// Parse a declared target percentage, clamped to `0..=100`.
///
/// Missing or non-numeric values yield `None` and the bar is left alone.
pub fn parse_target_width(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().trim_end_matches('%').parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

/// CSS `width` value for a target percentage.
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

/// Records which bars have already animated.
#[derive(Clone, Debug, Default)]
pub struct SkillBarLatch {
    fired: Vec<bool>,
}

impl SkillBarLatch {
    pub fn new(bar_count: usize) -> Self {
        Self { fired: vec![false; bar_count] }
    }

    /// Returns `true` only the first time bar `index` enters the viewport.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub(crate) fn fired_count(&self) -> usize {
        self.fired.iter().filter(|f| **f).count()
    }
}
