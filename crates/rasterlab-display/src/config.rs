//! Display configuration.

use rasterlab_surface::Color;

/// Configuration shared by both display simulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Color the surface and framebuffer clear to
    pub background: Color,
    /// Color segments are stroked and framebuffer cells are lit with
    pub foreground: Color,
    /// Color of the segment under the simulated beam
    pub highlight: Color,
    /// Fat-pixel block size passed to the surface
    pub cell_size: u32,
    /// Base speed in milliseconds; the pacing formulas turn this into
    /// per-tick delays
    pub base_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x10_1018),
            foreground: Color::from_hex(0x33_ff66),
            highlight: Color::from_hex(0xff_b000),
            cell_size: 1,
            base_interval_ms: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = DisplayConfig::default();
        assert_ne!(config.background, config.foreground);
        assert_ne!(config.foreground, config.highlight);
        assert!(config.cell_size >= 1);
        assert!(config.base_interval_ms > 0);
    }
}
