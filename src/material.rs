//! Material definitions for mesh surfaces.

use scene::Color;

/// Material applied to the surface of a [`Mesh`](struct.Mesh.html).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Solid color, unaffected by scene lighting.
    Basic {
        /// Solid color over the entire surface.
        color: Color,
    },
    /// Diffusely reflecting surface, so lighting effects are visible.
    Lambert {
        /// Color of the base surface.
        color: Color,
    },
}

impl Material {
    /// The base color of the material.
    pub fn color(&self) -> Color {
        match *self {
            Material::Basic { color } |
            Material::Lambert { color } => color,
        }
    }
}
