//! Rectangle primitive and the `Drawable` capability shared by everything on the canvas.

use bevy::prelude::*;

/// Floats per vertex before auxiliary data: position (2) + color (3).
pub const BASE_STRIDE: usize = 5;
pub const VERTICES_PER_RECT: usize = 6;

/// Anything that contributes triangles to the frame's vertex buffer.
pub trait Drawable {
    /// Appends this drawable's vertices to `out`.
    fn append_vertices(&self, out: &mut Vec<f32>);

    /// Number of rectangles appended by `append_vertices`.
    fn shapes(&self) -> usize;

    fn vertices(&self) -> Vec<f32> {
        let mut out = Vec::new();
        self.append_vertices(&mut out);
        out
    }
}

/// Axis-aligned rectangle in canvas space (origin top-left, `y` down).
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub origin: Vec2,
    pub size: Vec2,
    /// 0-255 sRGB.
    pub color: [f32; 3],
    /// Extra per-vertex data appended after the color.
    pub aux: Vec<f32>,
}

impl Quad {
    pub fn new(origin: Vec2, size: Vec2, color: [u8; 3]) -> Self {
        Quad {
            origin,
            size,
            color: color.map(f32::from),
            aux: Vec::new(),
        }
    }

    pub fn with_aux(mut self, aux: Vec<f32>) -> Self {
        self.aux = aux;
        self
    }

    pub fn stride(&self) -> usize {
        BASE_STRIDE + self.aux.len()
    }
}

impl Drawable for Quad {
    fn append_vertices(&self, out: &mut Vec<f32>) {
        let Vec2 { x, y } = self.origin;
        let top_left = [x, y];
        let top_right = [x + self.size.x, y];
        let bottom_left = [x, y + self.size.y];
        let bottom_right = [x + self.size.x, y + self.size.y];

        // Counter-clockwise once the renderer flips y into world space.
        out.reserve(VERTICES_PER_RECT * self.stride());
        for corner in [top_left, bottom_left, top_right, top_right, bottom_left, bottom_right] {
            out.extend_from_slice(&corner);
            out.extend_from_slice(&self.color);
            out.extend_from_slice(&self.aux);
        }
    }

    fn shapes(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_emits_two_triangles() {
        let quad = Quad::new(Vec2::new(3.0, 4.0), Vec2::new(2.0, 2.0), [10, 20, 30]);
        let vertices = quad.vertices();

        assert_eq!(vertices.len() / BASE_STRIDE, VERTICES_PER_RECT);
        assert_eq!(&vertices[..5], &[3.0, 4.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn triangles_cover_every_corner() {
        let quad = Quad::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 3.0), [0, 0, 0]);
        let corners: Vec<(f32, f32)> = quad
            .vertices()
            .chunks(BASE_STRIDE)
            .map(|v| (v[0], v[1]))
            .collect();

        for corner in [(1.0, 1.0), (5.0, 1.0), (1.0, 4.0), (5.0, 4.0)] {
            assert!(corners.contains(&corner), "missing corner {corner:?}");
        }
        // The diagonal is shared by both triangles.
        assert_eq!(corners.iter().filter(|c| **c == (5.0, 1.0)).count(), 2);
        assert_eq!(corners.iter().filter(|c| **c == (1.0, 4.0)).count(), 2);
    }

    #[test]
    fn aux_data_follows_each_color() {
        let quad = Quad::new(Vec2::ZERO, Vec2::ONE, [1, 2, 3]).with_aux(vec![0.25, 0.75]);
        let vertices = quad.vertices();

        assert_eq!(quad.stride(), 7);
        assert_eq!(vertices.len(), 6 * 7);
        for vertex in vertices.chunks(7) {
            assert_eq!(&vertex[2..], &[1.0, 2.0, 3.0, 0.25, 0.75]);
        }
    }
}
