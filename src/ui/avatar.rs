//! Profile avatars drawn with terminal graphics protocols.
//!
//! Avatars are decoded and encoded on the lookup worker, so drawing one is a
//! plain buffer copy on the UI thread.

use std::env;
use std::fmt;

use image::DynamicImage;
use profile_api::AVATAR_SIZE;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::Protocol;
use ratatui_image::{Image, Resize};
use thiserror::Error;
use tracing::{debug, warn};

/// Overrides protocol detection: `halfblocks`, `sixel`, `kitty`, `iterm2` or `none`.
pub const PROTOCOL_ENV: &str = "PROFILE_EXPLORER_AVATAR_PROTOCOL";

/// Cells the avatar is fitted into before encoding.
const ENCODE_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 16,
    height: 8,
};

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("avatar is not a readable image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("could not encode avatar for the terminal: {0}")]
    Encode(String),
}

/// An avatar encoded for the terminal's graphics protocol.
#[derive(Clone)]
pub struct AvatarImage {
    protocol: Protocol,
    /// Source image size in pixels.
    pub dimensions: (u32, u32),
}

impl fmt::Debug for AvatarImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarImage")
            .field("dimensions", &self.dimensions)
            .field("area", &self.protocol.area())
            .finish_non_exhaustive()
    }
}

impl AvatarImage {
    /// Decode raw image bytes and encode them with `picker`.
    pub fn decode(bytes: &[u8], picker: &Picker) -> Result<Self, AvatarError> {
        let image = image::load_from_memory(bytes)?;
        Self::from_image(image, picker)
    }

    pub fn from_image(image: DynamicImage, picker: &Picker) -> Result<Self, AvatarError> {
        let dimensions = (image.width(), image.height());
        let image = image.thumbnail(AVATAR_SIZE, AVATAR_SIZE);
        let protocol = picker
            .new_protocol(image, ENCODE_AREA, Resize::Fit(None))
            .map_err(|err| AvatarError::Encode(format!("{err:?}")))?;
        Ok(Self {
            protocol,
            dimensions,
        })
    }

    /// Cells the encoded image occupies.
    pub fn area(&self) -> Rect {
        self.protocol.area()
    }

    /// Draw the avatar centered horizontally at the top of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let size = self.area();
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        if width == 0 || height == 0 {
            return;
        }
        let target = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height,
        };
        frame.render_widget(Image::new(&self.protocol), target);
    }
}

/// Work out how avatars can be drawn in the current terminal.
///
/// Must run after the terminal has entered raw mode and before anything else
/// reads from stdin. `None` turns avatars off.
pub fn detect_picker() -> Option<Picker> {
    if let Ok(requested) = env::var(PROTOCOL_ENV) {
        return picker_for(&requested);
    }
    match Picker::from_query_stdio() {
        Ok(picker) => {
            debug!(protocol = ?picker.protocol_type(), "terminal graphics detected");
            Some(picker)
        }
        Err(err) => {
            warn!(error = ?err, "graphics detection failed, using half blocks");
            Some(halfblocks())
        }
    }
}

fn picker_for(requested: &str) -> Option<Picker> {
    let protocol = match requested.trim().to_ascii_lowercase().as_str() {
        "halfblocks" | "halfblock" => ProtocolType::Halfblocks,
        "sixel" => ProtocolType::Sixel,
        "kitty" => ProtocolType::Kitty,
        "iterm2" | "iterm" => ProtocolType::Iterm2,
        other => {
            debug!(requested = other, "avatars disabled");
            return None;
        }
    };
    let mut picker = Picker::from_fontsize((8, 16));
    picker.set_protocol_type(protocol);
    Some(picker)
}

pub(crate) fn halfblocks() -> Picker {
    let mut picker = Picker::from_fontsize((8, 16));
    picker.set_protocol_type(ProtocolType::Halfblocks);
    picker
}

#[cfg(test)]
pub(crate) fn sample_image() -> DynamicImage {
    let pixels = image::RgbaImage::from_fn(192, 192, |x, y| {
        let shade = u8::try_from((x + y) % 256).unwrap_or(0);
        image::Rgba([shade, 64, 255 - shade, 255])
    });
    DynamicImage::ImageRgba8(pixels)
}
