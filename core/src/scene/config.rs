//! Scene configuration.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable parameters of the [scene][super::Scene].
///
/// Every field has a sensible default; use the chainable setters to
/// change only what is needed:
/// ```
/// use nightrain_core::scene::{Config, Layers, Quality};
///
/// let cfg = Config::default()
///     .quality(Quality::Low)
///     .layers(Layers::TAIL | Layers::SKY);
/// assert_eq!(cfg.quality, Quality::Low);
/// assert!(cfg.rain);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Level of detail. Affects instance counts and optional shading terms.
    pub quality: Quality,
    /// Whether raindrops on the windshield distort the view.
    pub rain: bool,
    /// Shows the raindrop grid instead of the animated rain.
    pub drop_debug: bool,
    /// Strength of the camera shake caused by road bumps.
    pub cam_shake: f32,
    /// Threshold in [0, 1] of a car being in the near lane; higher values
    /// mean fewer cars switching lanes.
    pub lane_bias: f32,
    /// Offset added to scene time, and thirtyfold to rain time.
    pub scrub: f32,
    /// Which light layers to render.
    pub layers: Layers,
}

/// Level of detail of the scene.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quality {
    /// Fewest roadside lights, no optional terms.
    Low,
    /// More roadside lights, no optional terms.
    Medium,
    /// Most roadside lights, plus extra lamps, brake lights, bokeh rims,
    /// deformed raindrops, and a third rain layer.
    #[default]
    High,
}

bitflags! {
    /// Light layers of the scene.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Layers: u8 {
        /// Street lights on both sides of the road.
        const STREET = 1;
        /// Headlights of oncoming cars.
        const HEAD = 1 << 1;
        /// Taillights of the cars ahead.
        const TAIL = 1 << 2;
        /// Miscellaneous lights far from the road.
        const ENV = 1 << 3;
        /// The glow of the sky above the horizon.
        const SKY = 1 << 4;
    }
}

impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default values are:
    /// * Quality:      High
    /// * Rain:         Enabled
    /// * Drop debug:   Disabled
    /// * Camera shake: 1.0
    /// * Lane bias:    0.5
    /// * Scrub:        0.0
    /// * Layers:       All
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            rain: true,
            drop_debug: false,
            cam_shake: 1.0,
            lane_bias: 0.5,
            scrub: 0.0,
            layers: Layers::all(),
        }
    }
}

impl Config {
    /// Sets the level of detail.
    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }
    /// Enables or disables rain.
    pub fn rain(mut self, rain: bool) -> Self {
        self.rain = rain;
        self
    }
    /// Enables or disables the raindrop grid display.
    pub fn drop_debug(mut self, drop_debug: bool) -> Self {
        self.drop_debug = drop_debug;
        self
    }
    /// Sets the strength of the camera shake.
    pub fn cam_shake(mut self, cam_shake: f32) -> Self {
        self.cam_shake = cam_shake;
        self
    }
    /// Sets the lane change threshold.
    pub fn lane_bias(mut self, lane_bias: f32) -> Self {
        self.lane_bias = lane_bias;
        self
    }
    /// Sets the time offset.
    pub fn scrub(mut self, scrub: f32) -> Self {
        self.scrub = scrub;
        self
    }
    /// Sets the rendered light layers.
    pub fn layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }
}

impl Quality {
    /// Returns whether the optional high-quality terms are enabled.
    #[inline]
    pub fn is_high(self) -> bool {
        self == Self::High
    }

    /// Returns the number of roadside environment lights per frame.
    pub fn env_lights(self) -> u32 {
        match self {
            Self::Low => 8,
            Self::Medium => 16,
            Self::High => 32,
        }
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.quality, Quality::High);
        assert!(cfg.rain);
        assert!(!cfg.drop_debug);
        assert_eq!(cfg.cam_shake, 1.0);
        assert_eq!(cfg.lane_bias, 0.5);
        assert_eq!(cfg.layers, Layers::all());
    }

    #[test]
    fn setters_chain() {
        let cfg = Config::default()
            .rain(false)
            .quality(Quality::Medium)
            .scrub(0.25)
            .layers(Layers::SKY);
        assert!(!cfg.rain);
        assert_eq!(cfg.quality, Quality::Medium);
        assert_eq!(cfg.scrub, 0.25);
        assert!(cfg.layers.contains(Layers::SKY));
        assert!(!cfg.layers.intersects(Layers::HEAD | Layers::TAIL));
    }

    #[test]
    fn env_light_counts() {
        assert_eq!(Quality::Low.env_lights(), 8);
        assert_eq!(Quality::Medium.env_lights(), 16);
        assert_eq!(Quality::High.env_lights(), 32);
        assert!(Quality::High.is_high());
        assert!(!Quality::Medium.is_high());
    }
}
