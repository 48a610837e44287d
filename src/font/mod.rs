//! Bitmap font - letters built from one quad per lit glyph cell, laid out left to right.

mod glyphs;

pub use glyphs::{Glyph, glyph};

use bevy::prelude::*;

use crate::game::{FONT_CELL_SPACING, FONT_PADDING, FONT_SIZE, TEXT_COLOR};
use crate::rendering::{Drawable, Quad};

/// A single character. Positions are in glyph units, scaled by `size` into pixels.
#[derive(Clone, Debug)]
pub struct Letter {
    width: usize,
    cells: Vec<Quad>,
}

impl Letter {
    pub fn new(bitmap: Glyph, origin: Vec2, size: f32, color: [u8; 3]) -> Self {
        let pitch = 1.0 + size * FONT_CELL_SPACING;
        let cells = bitmap
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, lit)| *lit == '#')
                    .map(move |(column, _)| Vec2::new(column as f32, row as f32))
            })
            .map(|cell| Quad::new((cell + origin) * pitch, Vec2::splat(size), color))
            .collect();

        Letter {
            width: bitmap.iter().map(|line| line.len()).max().unwrap_or(0),
            cells,
        }
    }

    /// Width in glyph units: the longest bitmap row.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Drawable for Letter {
    fn append_vertices(&self, out: &mut Vec<f32>) {
        for cell in &self.cells {
            cell.append_vertices(out);
        }
    }

    fn shapes(&self) -> usize {
        self.cells.len()
    }
}

/// Layout options for a [`TextLabel`].
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Top-left corner in glyph units.
    pub origin: Vec2,
    pub size: f32,
    pub padding: f32,
    pub color: [u8; 3],
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            origin: Vec2::ZERO,
            size: FONT_SIZE,
            padding: FONT_PADDING,
            color: TEXT_COLOR,
        }
    }
}

/// Immutable run of letters; build a new one to change the text.
#[derive(Clone, Debug)]
pub struct TextLabel {
    text: String,
    letters: Vec<Letter>,
}

impl TextLabel {
    pub fn new(text: &str, style: TextStyle) -> Self {
        let mut offset = 0.0;
        let letters = text
            .chars()
            .map(|c| {
                let letter = Letter::new(
                    glyph(c),
                    style.origin + Vec2::new(offset, 0.0),
                    style.size,
                    style.color,
                );
                offset += letter.width() as f32 + style.padding;
                letter
            })
            .collect();

        TextLabel {
            text: text.to_string(),
            letters,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn letters(&self) -> &[Letter] {
        &self.letters
    }
}

impl Drawable for TextLabel {
    fn append_vertices(&self, out: &mut Vec<f32>) {
        for letter in &self.letters {
            letter.append_vertices(out);
        }
    }

    fn shapes(&self) -> usize {
        self.letters.iter().map(Drawable::shapes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{BASE_STRIDE, VERTICES_PER_RECT};

    fn lit_cells(bitmap: Glyph) -> usize {
        bitmap.iter().map(|line| line.matches('#').count()).sum()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn unsupported_characters_fall_back() {
        assert_eq!(glyph('%'), glyph('?'));
        assert_eq!(glyph('é'), glyph('?'));
        assert_ne!(glyph('0'), glyph('?'));
    }

    #[test]
    fn every_supported_glyph_has_five_rows() {
        for c in ('0'..='9').chain('A'..='Z').chain([' ', '?']) {
            let bitmap = glyph(c);
            assert_eq!(bitmap.len(), 5, "glyph {c:?}");
            assert!(bitmap.iter().all(|line| !line.is_empty()), "glyph {c:?}");
        }
    }

    #[test]
    fn letter_has_one_quad_per_lit_cell() {
        let letter = Letter::new(glyph('8'), Vec2::ZERO, 1.0, TEXT_COLOR);
        assert_eq!(letter.shapes(), lit_cells(glyph('8')));
        assert_eq!(letter.shapes(), 13);
        assert_eq!(
            letter.vertices().len(),
            letter.shapes() * VERTICES_PER_RECT * BASE_STRIDE
        );
        assert_eq!(letter.width(), 3);
        assert_eq!(Letter::new(glyph('I'), Vec2::ZERO, 1.0, TEXT_COLOR).width(), 1);
        assert_eq!(Letter::new(glyph('W'), Vec2::ZERO, 1.0, TEXT_COLOR).width(), 5);
    }

    #[test]
    fn cells_sit_on_scaled_lattice() {
        // "1" lights (0,0) and (1,0) on its first row.
        let letter = Letter::new(glyph('1'), Vec2::new(2.0, 1.0), 5.0, TEXT_COLOR);
        let pitch = 1.0 + 5.0 * FONT_CELL_SPACING;
        let vertices = letter.vertices();
        let stride = VERTICES_PER_RECT * BASE_STRIDE;

        assert_eq!(&vertices[..2], &[2.0 * pitch, 1.0 * pitch]);
        assert_eq!(&vertices[stride..stride + 2], &[3.0 * pitch, 1.0 * pitch]);
    }

    #[test]
    fn space_draws_nothing_but_keeps_width() {
        let label = TextLabel::new(" ", TextStyle::default());
        assert_eq!(label.shapes(), 0);
        assert_eq!(label.letters()[0].width(), 3);
    }

    #[test]
    fn text_advances_by_width_plus_padding() {
        let style = TextStyle {
            size: 1.0,
            padding: 0.5,
            ..default()
        };
        let label = TextLabel::new("i1", style);
        let pitch = 1.0 + FONT_CELL_SPACING;
        let second = &label.letters()[1];

        // "I" is one cell wide, so "1" starts at 1 + 0.5 glyph units.
        assert_eq!(second.vertices()[0], 1.5 * pitch);
        assert_eq!(
            label.shapes(),
            lit_cells(glyph('I')) + lit_cells(glyph('1'))
        );
        assert_eq!(label.text(), "i1");
    }

    #[test]
    fn label_concatenates_letters_in_order() {
        let label = TextLabel::new("AB", TextStyle::default());
        let mut expected = label.letters()[0].vertices();
        expected.extend(label.letters()[1].vertices());
        assert_eq!(label.vertices(), expected);
    }
}
