use std::time::Duration;

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;

/// How the per-tick scale factor is combined with the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// The transform is rebuilt every tick from the accumulated angle and
    /// the scale of the current fill mode, so the quad keeps a stable size.
    #[default]
    Absolute,
    /// The scale is multiplied into the accumulated transform every tick.
    /// Outline ticks shrink the quad geometrically until it disappears.
    Compounding,
}

/// Options for the demo.
///
/// `Default` reproduces the stock animation: 0.01 rad per frame, direction
/// flips every 10 seconds, fill mode toggles every 20 seconds.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Id of the element the canvas is appended to.
    pub container_id: String,
    /// Override the canvas size. Defaults to the container's client size.
    pub canvas_size: Option<(u32, u32)>,
    /// Rotation per tick, in radians.
    pub rotation_step: f32,
    /// Period of the rotation direction timer.
    pub direction_period: Duration,
    /// Period of the fill mode timer.
    pub fill_period: Duration,
    /// Scale applied while the quad is filled.
    pub filled_scale: f32,
    /// Scale applied while the quad is drawn as an outline.
    pub outline_scale: f32,
    pub scale_mode: ScaleMode,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    pub logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas-container".to_string(),
            canvas_size: None,
            rotation_step: 0.01,
            direction_period: Duration::from_secs(10),
            fill_period: Duration::from_secs(20),
            filled_scale: 1.0,
            outline_scale: 0.5,
            scale_mode: ScaleMode::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            logging: LoggingConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Constructs a new [`DemoConfig`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the id of the canvas' parent element.
    pub fn container_id(mut self, id: &str) -> Self {
        self.container_id = id.to_string();
        self
    }

    /// Sets the size of the canvas, in pixels.
    pub fn canvas_size(mut self, size: (u32, u32)) -> Self {
        self.canvas_size = Some(size);
        self
    }

    pub fn rotation_step(mut self, radians: f32) -> Self {
        self.rotation_step = radians;
        self
    }

    pub fn direction_period(mut self, period: Duration) -> Self {
        self.direction_period = period;
        self
    }

    pub fn fill_period(mut self, period: Duration) -> Self {
        self.fill_period = period;
        self
    }

    pub fn scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    pub fn clear_color(mut self, rgba: [f32; 4]) -> Self {
        self.clear_color = rgba;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Scale factor for the given fill mode.
    pub fn scale_for(&self, filled: bool) -> f32 {
        if filled {
            self.filled_scale
        } else {
            self.outline_scale
        }
    }

    /// Rejects values the render loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.container_id.is_empty() {
            return Err(Error::InvalidConfig("container id is empty".into()));
        }
        if self.direction_period.is_zero() {
            return Err(Error::InvalidConfig("direction period must be non-zero".into()));
        }
        if self.fill_period.is_zero() {
            return Err(Error::InvalidConfig("fill period must be non-zero".into()));
        }
        if !self.rotation_step.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "rotation step {} is not finite",
                self.rotation_step
            )));
        }
        for (name, scale) in [("filled", self.filled_scale), ("outline", self.outline_scale)] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} scale must be finite and positive, got {scale}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_animation() {
        let config = DemoConfig::default();
        assert_eq!(config.container_id, "canvas-container");
        assert_eq!(config.direction_period, Duration::from_secs(10));
        assert_eq!(config.fill_period, Duration::from_secs(20));
        assert_eq!(config.scale_for(true), 1.0);
        assert_eq!(config.scale_for(false), 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_period_is_rejected() {
        let config = DemoConfig::new().fill_period(Duration::ZERO);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn negative_scale_is_rejected() {
        let mut config = DemoConfig::new();
        config.outline_scale = -1.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
