//! Picks display colors for letters. Packing never depends on colors; they
//! only matter when drawing.

use std::collections::HashMap;

use crate::image::Pixel;

/// Something that can tell which color to draw a letter in.
pub(crate) trait ColorSource {
    fn color_for(&mut self, letter: char) -> Pixel;
}

/// Assigns every letter a hue derived from hashing it together with a seed.
///
/// Colors are computed the first time a letter is asked for and reused after
/// that, so all cells of a letter share one color.
pub(crate) struct HashedPalette {
    seed: u64,
    assigned: HashMap<char, Pixel>,
}

impl HashedPalette {
    const SATURATION: f32 = 0.7;
    const LIGHTNESS: f32 = 0.5;

    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            assigned: HashMap::new(),
        }
    }

    fn hue_for(&self, letter: char) -> f32 {
        let mut input = self.seed.to_le_bytes().to_vec();
        let mut buffer = [0; 4];
        input.extend_from_slice(letter.encode_utf8(&mut buffer).as_bytes());

        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();

        (u16::from_le_bytes([bytes[0], bytes[1]]) % 360) as f32
    }
}

impl ColorSource for HashedPalette {
    fn color_for(&mut self, letter: char) -> Pixel {
        if let Some(pixel) = self.assigned.get(&letter) {
            return *pixel;
        }

        let hue = self.hue_for(letter);
        let pixel = hsl_to_pixel(hue, Self::SATURATION, Self::LIGHTNESS);
        log::trace!("Assigned hue {} to {}", hue, letter);

        self.assigned.insert(letter, pixel);
        pixel
    }
}

/// Converts a hue in degrees plus saturation and lightness in `0.0..=1.0` to
/// an opaque pixel.
fn hsl_to_pixel(hue: f32, saturation: f32, lightness: f32) -> Pixel {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue % 360.0) / 60.0;
    let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    let offset = lightness - chroma / 2.0;
    let channel = |value: f32| ((value + offset) * 255.0).round() as u8;

    Pixel::new(channel(r), channel(g), channel(b), 255)
}
