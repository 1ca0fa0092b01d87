//! The retained scene: meshes, lights and a background.

use froggy;

use light::{DirectionalLight, PointLight};
use mesh::{Mesh, MeshNode};
use Orientation;

/// Color represented by 4-bytes hex number.
pub type Color = u32;

/// Background type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// Basic solid color background.
    Color(Color),
}

/// Everything a [`Renderer`](trait.Renderer.html) needs for one frame.
///
/// Meshes live in a [`froggy`] storage; [`Scene::add`] hands back a
/// [`Mesh`](struct.Mesh.html) pointer through which the caller reads
/// and updates the node, the same way the animation loop does.
///
/// [`froggy`]: https://docs.rs/froggy
/// [`Scene::add`]: struct.Scene.html#method.add
pub struct Scene {
    /// See [`Background`](enum.Background.html).
    pub background: Background,
    pub(crate) meshes: froggy::Storage<MeshNode>,
    pub(crate) directional_lights: Vec<DirectionalLight>,
    pub(crate) point_lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene with a black background.
    pub fn new() -> Self {
        Scene {
            background: Background::Color(0x000000),
            meshes: froggy::Storage::new(),
            directional_lights: Vec::new(),
            point_lights: Vec::new(),
        }
    }

    /// Add a mesh node and return a handle to it.
    pub fn add(&mut self, node: MeshNode) -> Mesh {
        Mesh { node: self.meshes.create(node) }
    }

    /// Add a directional light.
    pub fn add_directional_light(&mut self, light: DirectionalLight) {
        self.directional_lights.push(light);
    }

    /// Add a point light.
    pub fn add_point_light(&mut self, light: PointLight) {
        self.point_lights.push(light);
    }

    /// Current rotation angles of `mesh`, in radians.
    pub fn orientation(&self, mesh: &Mesh) -> Orientation {
        self.meshes[&mesh.node].orientation
    }

    /// Overwrite the rotation angles of `mesh`.
    pub fn set_orientation<O: Into<Orientation>>(&mut self, mesh: &Mesh, orientation: O) {
        self.meshes[&mesh.node].orientation = orientation.into();
    }

    /// Read access to the stored node of `mesh`.
    pub fn node(&self, mesh: &Mesh) -> &MeshNode {
        &self.meshes[&mesh.node]
    }

    /// The directional lights added so far.
    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional_lights
    }

    /// The point lights added so far.
    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use geometry::Geometry;
    use material::Material;
    use mesh::MeshNode;
    use Orientation;

    #[test]
    fn orientation_roundtrip() {
        let mut scene = Scene::new();
        let node = MeshNode::new(Geometry::empty(), Material::Basic { color: 0xFF0000 });
        let mesh = scene.add(node);
        assert_eq!(scene.orientation(&mesh), Orientation::from([0.0, 0.0, 0.0]));

        scene.set_orientation(&mesh, [0.1, 0.2, 0.3]);
        let orientation = scene.orientation(&mesh);
        assert_eq!(orientation.x, 0.1);
        assert_eq!(orientation.y, 0.2);
        assert_eq!(orientation.z, 0.3);
    }

    #[test]
    fn meshes_are_independent() {
        let mut scene = Scene::new();
        let red = scene.add(MeshNode::new(Geometry::empty(), Material::Basic { color: 0xFF0000 }));
        let blue = scene.add(MeshNode::new(Geometry::empty(), Material::Basic { color: 0x0000FF }));

        scene.set_orientation(&red, [1.0, 0.0, 0.0]);
        assert_eq!(scene.orientation(&blue), Orientation::from([0.0, 0.0, 0.0]));
        assert_eq!(scene.node(&blue).material.color(), 0x0000FF);
    }
}
