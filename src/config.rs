use crate::error::GeoError;
use crate::utils::{Float, POINT_ON_SEGMENT_BUFFER};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::debug;

/// Tunables for the tolerance-sensitive tests. Deserialized configs are
/// validated like [`CollisionConfig::with_point_on_segment_buffer`].
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct CollisionConfig {
    /// absolute slack of the point-on-segment test
    pub point_on_segment_buffer: Float,
    /// also report a polygon-circle hit when the circle center lies inside
    /// the polygon, so circles fully enclosed by a polygon count
    pub circle_center_in_polygon: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        CollisionConfig {
            point_on_segment_buffer: POINT_ON_SEGMENT_BUFFER,
            circle_center_in_polygon: false,
        }
    }
}

/// wire form of [`CollisionConfig`], missing fields take the defaults
#[derive(Deserialize)]
#[serde(default)]
struct ConfigFields {
    point_on_segment_buffer: Float,
    circle_center_in_polygon: bool,
}

impl Default for ConfigFields {
    fn default() -> Self {
        let config = CollisionConfig::default();
        ConfigFields {
            point_on_segment_buffer: config.point_on_segment_buffer,
            circle_center_in_polygon: config.circle_center_in_polygon,
        }
    }
}

impl TryFrom<ConfigFields> for CollisionConfig {
    type Error = GeoError;

    fn try_from(fields: ConfigFields) -> Result<Self, GeoError> {
        CollisionConfig::default()
            .with_circle_center_in_polygon(fields.circle_center_in_polygon)
            .with_point_on_segment_buffer(fields.point_on_segment_buffer)
    }
}

impl CollisionConfig {
    pub fn validate(&self) -> Result<(), GeoError> {
        let buffer = self.point_on_segment_buffer;
        if !buffer.is_finite() || buffer < 0.0 {
            debug!(buffer, "rejecting point-on-segment buffer");
            return Err(GeoError::InvalidBuffer(buffer));
        }
        Ok(())
    }

    pub fn with_point_on_segment_buffer(mut self, buffer: Float) -> Result<Self, GeoError> {
        self.point_on_segment_buffer = buffer;
        self.validate()?;
        Ok(self)
    }

    pub fn with_circle_center_in_polygon(mut self, enabled: bool) -> Self {
        self.circle_center_in_polygon = enabled;
        self
    }
}
