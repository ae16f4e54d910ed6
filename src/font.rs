use crate::{LayoutError, Pt, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// How wide the gaps between words are when text is measured or rendered
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum WordSpacing {
    /// Whatever the font's own space glyph is
    #[default]
    Natural,
    /// Every space is exactly this wide
    Exact(Px),
}

/// The rendered size of a piece of text
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

/// A text measurement oracle: reports how large a string would be when rendered at a
/// given size and word spacing. The font face, style and stroke belong to the
/// implementor, so a single value measures text for a single label style.
///
/// Implementations must be deterministic; the layout passes call them many times
/// with the same arguments and expect the same answer.
pub trait Measure {
    fn measure(&self, text: &str, size: Pt, spacing: WordSpacing) -> Extent;

    /// The width of a single space at natural spacing, found by measuring the
    /// difference between `"A A"` with the font's own space and with a 1px space
    fn natural_word_spacing(&self, size: Pt) -> Px {
        let natural = self.measure("A A", size, WordSpacing::Natural).width;
        let single = self.measure("A A", size, WordSpacing::Exact(Px(1.0))).width;
        natural - single + Px(1.0)
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self, text: &str, size: Pt, spacing: WordSpacing) -> Extent {
        (**self).measure(text, size, spacing)
    }
}

/// A parsed font used to measure label text. Fonts can be TTF or OTF fonts.
///
/// Stroked text (an outline drawn around each glyph) grows by the stroke width on
/// every side, which is accounted for in every measurement.
pub struct FontMetrics {
    pub face: OwnedFace,
    pub stroke_width: Px,
}

impl FontMetrics {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<FontMetrics, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(FontMetrics {
            face,
            stroke_width: Px(0.0),
        })
    }

    pub fn with_stroke(mut self, stroke_width: Px) -> FontMetrics {
        self.stroke_width = stroke_width;
        self
    }

    fn scaling(&self, size: Pt) -> f64 {
        *size / self.face.as_face_ref().units_per_em() as f64
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f64)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().descender() as f64)
    }

    /// Look up the glyph for a character, falling back to the replacement glyph and
    /// then to a question mark
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text given the font size and word spacing
    pub fn width_of_text(&self, text: &str, size: Pt, spacing: WordSpacing) -> Px {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| match (ch, spacing) {
                (' ', WordSpacing::Exact(width)) => width,
                _ => Px(scaling
                    * self
                        .glyph_id(ch)
                        .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(gid))
                        .unwrap_or_default() as f64),
            })
            .sum()
    }
}

impl Measure for FontMetrics {
    fn measure(&self, text: &str, size: Pt, spacing: WordSpacing) -> Extent {
        let stroke = self.stroke_width * 2.0;
        Extent {
            width: self.width_of_text(text, size, spacing) + stroke,
            height: self.ascent(size) - self.descent(size) + stroke,
        }
    }
}
