//! Meshes: geometry plus material, placed and oriented in a scene.

use froggy;

use geometry::Geometry;
use material::Material;
use {Orientation, Position};

/// Handle to a mesh stored in a [`Scene`](struct.Scene.html).
///
/// The handle stays valid for as long as the owning scene is alive;
/// orientation and position are read and written through the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub(crate) node: froggy::Pointer<MeshNode>,
}

/// The per-mesh data a scene stores: shape, surface and placement.
#[derive(Clone, Debug)]
pub struct MeshNode {
    /// Shape of the mesh.
    pub geometry: Geometry,
    /// Surface description.
    pub material: Material,
    /// World-space position.
    pub position: Position,
    /// Rotation angles about the X, Y and Z axes, in radians.
    pub orientation: Orientation,
}

impl MeshNode {
    /// Create a new node at the origin with no rotation.
    pub fn new(geometry: Geometry, material: Material) -> Self {
        MeshNode {
            geometry,
            material,
            position: [0.0, 0.0, 0.0].into(),
            orientation: [0.0, 0.0, 0.0].into(),
        }
    }

    /// Set the world-space position.
    pub fn position<P: Into<Position>>(mut self, position: P) -> Self {
        self.position = position.into();
        self
    }

    /// Set the initial rotation angles, in radians.
    pub fn orientation<O: Into<Orientation>>(mut self, orientation: O) -> Self {
        self.orientation = orientation.into();
        self
    }
}
