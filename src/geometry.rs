//! Geometric primitives that meshes are built from.

use mint;
use genmesh::{EmitTriangles, Triangulate, Vertex as GenVertex};
use genmesh::generators::{self, IndexedPolygon, SharedVertex};

/// A collection of vertices, their normals, and faces that defines the
/// shape of a polyhedral object.
#[derive(Clone, Debug)]
pub struct Geometry {
    /// Vertices.
    pub vertices: Vec<mint::Point3<f32>>,
    /// Normals.
    pub normals: Vec<mint::Vector3<f32>>,
    /// Faces.
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Create new `Geometry` without any data in it.
    pub fn empty() -> Self {
        Geometry {
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create `Geometry` from vector of vertices.
    pub fn with_vertices(vertices: Vec<mint::Point3<f32>>) -> Self {
        Geometry {
            vertices,
            .. Geometry::empty()
        }
    }

    fn generate<P, G, Fpos>(gen: G, fpos: Fpos) -> Self where
        P: EmitTriangles<Vertex=usize>,
        G: IndexedPolygon<P> + SharedVertex<GenVertex>,
        Fpos: Fn(GenVertex) -> mint::Point3<f32>,
    {
        Geometry {
            vertices: gen.shared_vertex_iter().map(&fpos).collect(),
            normals: gen.shared_vertex_iter().map(|v| v.normal.into()).collect(),
            faces: gen.indexed_polygon_iter()
                .triangulate()
                .map(|t| [t.x as u32, t.y as u32, t.z as u32])
                .collect(),
        }
    }

    /// Create new Box with desired size.
    pub fn cuboid(sx: f32, sy: f32, sz: f32) -> Self {
        Self::generate(generators::Cube::new(),
                       |GenVertex{ pos, ..}| {
                           [pos[0] * 0.5 * sx, pos[1] * 0.5 * sy, pos[2] * 0.5 * sz].into()
                       },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;

    #[test]
    fn empty_has_no_data() {
        let geometry = Geometry::empty();
        assert!(geometry.vertices.is_empty());
        assert!(geometry.normals.is_empty());
        assert!(geometry.faces.is_empty());
    }

    #[test]
    fn cuboid_spans_the_requested_extents() {
        let geometry = Geometry::cuboid(2.0, 2.0, 2.0);
        assert!(!geometry.vertices.is_empty());
        assert_eq!(geometry.vertices.len(), geometry.normals.len());
        for v in &geometry.vertices {
            for &c in &[v.x, v.y, v.z] {
                assert!(c.abs() <= 1.0 + 1.0e-6);
            }
        }
        let count = geometry.vertices.len() as u32;
        for face in &geometry.faces {
            for &index in face {
                assert!(index < count);
            }
        }
    }
}
