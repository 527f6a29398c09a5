use crate::math::vec3::Vec3;

pub const CUBE_VERTEX_COUNT: usize = 8;
pub const CUBE_EDGE_COUNT: usize = 12;

/// Unit cube centered on the origin, half an extent per axis.
pub const CUBE_VERTICES: [Vec3; CUBE_VERTEX_COUNT] = [
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
];

/// Wireframe edges as vertex index pairs.
pub const CUBE_EDGES: [(usize, usize); CUBE_EDGE_COUNT] = [
    // Front face
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    // Back face
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    // Connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vertex_belongs_to_three_edges() {
        for v in 0..CUBE_VERTEX_COUNT {
            let degree = CUBE_EDGES
                .iter()
                .filter(|&&(a, b)| a == v || b == v)
                .count();
            assert_eq!(degree, 3);
        }
    }

    #[test]
    fn edge_endpoints_are_unit_distance_apart() {
        for &(a, b) in &CUBE_EDGES {
            let length = (CUBE_VERTICES[a] - CUBE_VERTICES[b]).magnitude();
            assert!((length - 1.0).abs() < 1e-6);
        }
    }
}
