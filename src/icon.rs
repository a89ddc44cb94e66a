use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};
use tracing::debug;

use crate::canvas::Canvas;
use crate::colour::colours;
use crate::error::IconError;
use crate::font::{Font, ScaledFont};
use crate::layout::squarify;
use crate::units::{In, Pt};

/// Rendering resolution, recorded in the pHYs chunk of every generated PNG
pub const DPI: u32 = 300;

/// Side length of the generated square icon; 1.4in at [DPI] comes to 420px
pub const ICON_SIZE: In = In(1.4);

/// Label text size; 13pt at [DPI] comes to 54px
pub const FONT_SIZE: Pt = Pt(13.0);

/// The typeface the renderer looks up in the system font database
const FONT_FAMILY: &str = "Arial";

const BORDER_RADIUS: f32 = 30.0;
const BORDER_STROKE: f32 = 5.0;

/// A generated icon sitting in the system temporary directory. The file is
/// removed when this handle is dropped, so it lives exactly as long as the
/// code that asked for it holds on to it; call [IconFile::keep] to take over
/// the cleanup responsibility instead.
#[derive(Debug)]
pub struct IconFile {
    path: TempPath,
}

impl IconFile {
    /// The path the icon was written to. Valid until this handle is dropped
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the file instead of deleting it on drop, returning the path
    /// it lives at. From here on the file is the caller's to remove.
    pub fn keep(self) -> Result<PathBuf, IconError> {
        self.path.keep().map_err(|e| IconError::Io(e.into()))
    }
}

impl AsRef<Path> for IconFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Renders square label icons: text is hyphenated and wrapped to fit the
/// canvas, drawn centered, optionally framed with a rounded border, and
/// written out as a transparent PNG. The renderer owns the font it draws
/// with, so one renderer can produce any number of icons without touching
/// the font database again.
pub struct IconRenderer {
    font: Font,
}

impl IconRenderer {
    /// Create a renderer drawing with the "Arial" family from the system
    /// font database. Fails with [IconError::FontUnavailable] when Arial is
    /// not installed; no substitute face is ever picked. Embedders without
    /// Arial bundle a typeface and use [IconRenderer::with_font].
    pub fn new() -> Result<IconRenderer, IconError> {
        let font = Font::discover(FONT_FAMILY)?;
        Ok(IconRenderer { font })
    }

    /// Create a renderer drawing with a caller-supplied font instead of
    /// consulting the system font database
    pub fn with_font(font: Font) -> IconRenderer {
        IconRenderer { font }
    }

    /// The font this renderer draws with
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Render the label into a square icon PNG in the system temporary
    /// directory, returning the handle that owns the file.
    ///
    /// The label is wrapped (and hyphenated where needed) to fit the canvas,
    /// drawn in black centered on the canvas midpoint, and when `border` is
    /// set, framed with a rounded-rectangle stroke hugging the canvas edge.
    /// An empty or whitespace-only label is [IconError::InvalidLabel]. If
    /// anything fails after the temporary file is created, the unfinished
    /// file is removed before the error is returned.
    pub fn render(&self, label: &str, border: bool) -> Result<IconFile, IconError> {
        let side = ICON_SIZE.to_px(DPI as f32).round();
        let size = FONT_SIZE.to_px(DPI as f32).round();

        let measure = ScaledFont {
            font: &self.font,
            size,
        };
        let text = squarify(label, &measure, side)?;

        let mut canvas = Canvas::new(side.0 as u32);
        canvas.draw_multiline_centered(&text, &self.font, size, colours::BLACK)?;
        if border {
            canvas.stroke_rounded_border(BORDER_RADIUS, BORDER_STROKE, colours::BLACK);
        }

        let mut file = Builder::new().prefix("icon-").suffix(".png").tempfile()?;
        canvas.encode_png(&mut file, DPI)?;

        let path = file.into_temp_path();
        debug!(path = %path.display(), label, "wrote icon");

        Ok(IconFile { path })
    }
}

/// Generate an icon for the label with the fixed drawing parameters,
/// discovering the font from the system database. This is the one-shot
/// convenience over [IconRenderer]; construct a renderer yourself when
/// generating many icons.
///
/// ```no_run
/// let icon = icon_gen::generate_icon("Cache", true)?;
/// println!("icon written to {}", icon.path().display());
/// # Ok::<(), icon_gen::IconError>(())
/// ```
pub fn generate_icon(label: &str, border: bool) -> Result<IconFile, IconError> {
    IconRenderer::new()?.render(label, border)
}
