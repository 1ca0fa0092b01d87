//! Light sources.

use scene::Color;
use Position;

/// Light originating from infinitely far away in a particular
/// direction, like sunlight. The direction is taken from `position`
/// toward the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Color of the light.
    pub color: Color,
    /// Brightness multiplier.
    pub intensity: f32,
    /// Position the light shines from.
    pub position: Position,
}

/// Light radiating uniformly from a single point, fading out at
/// `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Color of the light.
    pub color: Color,
    /// Brightness multiplier.
    pub intensity: f32,
    /// Distance at which the light no longer contributes.
    pub range: f32,
    /// Position of the light.
    pub position: Position,
}
