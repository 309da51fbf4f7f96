/// Components per vertex (x, y).
pub const COMPONENTS: usize = 2;

/// Unit quad in triangle-strip order.
pub const QUAD_VERTICES: [f32; 8] = [
    -0.5, -0.5, //
    0.5, -0.5, //
    -0.5, 0.5, //
    0.5, 0.5,
];

pub const VERTEX_COUNT: usize = QUAD_VERTICES.len() / COMPONENTS;

/// Iterates the quad as `(x, y)` pairs.
pub fn quad_points() -> impl Iterator<Item = (f32, f32)> {
    QUAD_VERTICES.chunks_exact(COMPONENTS).map(|p| (p[0], p[1]))
}
