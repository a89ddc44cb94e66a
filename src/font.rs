use crate::{IconError, Px};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use tracing::debug;

/// A parsed font object. Fonts can be TTF or OTF fonts, and are held entirely
/// in memory: the same bytes drive both text measurement (via the parsed face
/// tables) and glyph rasterization when an icon is drawn.
///
/// Typically a font is either discovered from the system database with
/// [Font::discover] or loaded from bytes the caller bundles with
/// [Font::load].
pub struct Font {
    pub face: OwnedFace,
    // face index within the underlying data, 0 for anything but collections
    pub(crate) index: u32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, IconError> {
        Font::load_indexed(bytes, 0)
    }

    /// Load one face of a font collection by index. Plain TTF/OTF files are
    /// index 0; see [Font::load]
    pub fn load_indexed(bytes: Vec<u8>, index: u32) -> Result<Font, IconError> {
        let face = OwnedFace::from_vec(bytes, index)?;

        Ok(Font { face, index })
    }

    /// Look up a font by family name in the system font database. The query
    /// is strict: when the family is not installed this is
    /// [IconError::FontUnavailable], never a substitute face. Callers that
    /// bundle a typeface construct it with [Font::load] instead.
    pub fn discover(family: &str) -> Result<Font, IconError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = db.query(&query).ok_or_else(|| IconError::FontUnavailable {
            family: family.to_string(),
        })?;
        if let Some(info) = db.face(id) {
            debug!(
                requested = family,
                resolved = %info.post_script_name,
                "resolved font face"
            );
        }

        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| IconError::FontUnavailable {
                family: family.to_string(),
            })?;

        Font::load_indexed(bytes, index)
    }

    /// Obtain the full name of the font. Panics if the font does not have a name
    pub fn name(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a name")
    }

    /// Obtain the family name of the font. Panics if the font does not have a font family
    pub fn family(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a family")
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Px = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Px = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Px = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    /// Calculate the horizontal space the given text occupies when set at the
    /// given size, by summing glyph advances. Characters with no glyph in the
    /// face contribute no width; they contribute no ink when drawn either.
    pub fn width_of(&self, text: &str, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }
}

/// The measurement capability the layout algorithms run against: the width of
/// a piece of text, in pixels, at whatever size the measurer was built for.
/// Widths are assumed to be non-decreasing as characters are appended.
///
/// Production code uses [ScaledFont]; layout tests substitute fixed-advance
/// implementations so they run without any font file at all.
pub trait TextMeasure {
    fn width_of(&self, text: &str) -> Px;
}

/// A [Font] paired with the pixel size it will be rendered at, which is all
/// the layout algorithms need to know about it
#[derive(Clone, Copy)]
pub struct ScaledFont<'f> {
    pub font: &'f Font,
    pub size: Px,
}

impl TextMeasure for ScaledFont<'_> {
    fn width_of(&self, text: &str) -> Px {
        self.font.width_of(text, self.size)
    }
}
