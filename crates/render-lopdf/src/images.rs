//! Image loading, metadata probing, and caching.
//!
//! Bytes are read once per source and shared between the metadata resolver
//! (which the layout engine calls) and the renderer (which embeds them).
//! Embedding is passthrough-only: baseline JPEG data goes into the PDF as
//! DCTDecode, and non-interlaced 8-bit grayscale/RGB PNG data as
//! FlateDecode with PNG predictors. Anything else is a fatal error.

use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, RwLock};
use vellum_layout::{ImageSizer, LayoutError};
use vellum_render_core::RenderError;
use vellum_types::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Gray,
    Rgb,
}

#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub color: ColorModel,
}

impl ImageData {
    /// The stream payload to embed: raw file bytes for JPEG, concatenated
    /// IDAT data for PNG.
    pub fn payload(&self) -> Result<Vec<u8>, RenderError> {
        match self.format {
            ImageFormat::Jpeg => Ok(self.bytes.clone()),
            ImageFormat::Png => png_idat(&self.bytes),
        }
    }
}

/// Reads and probes image files on first use, then serves them from
/// memory. Shared read-only between the layout pass and the renderer.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: RwLock<HashMap<String, Arc<ImageData>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self { entries: RwLock::new(HashMap::new()) }
    }

    pub fn load(&self, source: &str) -> Result<Arc<ImageData>, RenderError> {
        if let Ok(entries) = self.entries.read()
            && let Some(hit) = entries.get(source)
        {
            return Ok(hit.clone());
        }

        if source.starts_with("http://") || source.starts_with("https://") {
            return Err(RenderError::Image {
                path: source.to_string(),
                message: "remote images are not supported".to_string(),
            });
        }

        let bytes = fs::read(source).map_err(|err| RenderError::Image {
            path: source.to_string(),
            message: err.to_string(),
        })?;
        let data = Arc::new(probe(source, bytes)?);

        let mut entries = self.entries.write().map_err(|_| RenderError::Image {
            path: source.to_string(),
            message: "image cache lock poisoned".to_string(),
        })?;
        entries.insert(source.to_string(), data.clone());
        Ok(data)
    }
}

impl ImageSizer for ImageCache {
    fn intrinsic_size(&self, source: &str) -> Result<Size, LayoutError> {
        self.load(source)
            .map(|data| Size::new(data.width as f32, data.height as f32))
            .map_err(|err| LayoutError::ImageResolve {
                path: source.to_string(),
                message: err.to_string(),
            })
    }
}

fn unsupported(source: &str, message: &str) -> RenderError {
    RenderError::Image { path: source.to_string(), message: message.to_string() }
}

/// Classify the byte stream and extract intrinsic dimensions.
fn probe(source: &str, bytes: Vec<u8>) -> Result<ImageData, RenderError> {
    if bytes.starts_with(&[0xFF, 0xD8]) {
        probe_jpeg(source, bytes)
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        probe_png(source, bytes)
    } else {
        Err(unsupported(source, "unrecognized image format (expected JPEG or PNG)"))
    }
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u32> {
    Some(u32::from(*bytes.get(at)?) << 8 | u32::from(*bytes.get(at + 1)?))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    Some(read_u16(bytes, at)? << 16 | read_u16(bytes, at + 2)?)
}

/// Walk JPEG markers to the first start-of-frame and read the frame header.
fn probe_jpeg(source: &str, bytes: Vec<u8>) -> Result<ImageData, RenderError> {
    let mut pos = 2;
    loop {
        let marker = match (bytes.get(pos), bytes.get(pos + 1)) {
            (Some(0xFF), Some(&m)) => m,
            _ => return Err(unsupported(source, "truncated JPEG stream")),
        };
        pos += 2;

        match marker {
            // Fill bytes and standalone markers carry no segment length.
            0xFF => {
                pos -= 1;
                continue;
            }
            0x01 | 0xD0..=0xD7 => continue,
            0xD9 => return Err(unsupported(source, "JPEG stream has no frame header")),
            // Start-of-frame family, minus DHT/JPG/DAC which share the range.
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                let height = read_u16(&bytes, pos + 3);
                let width = read_u16(&bytes, pos + 5);
                let components = bytes.get(pos + 7).copied();
                let (Some(height), Some(width), Some(components)) = (height, width, components)
                else {
                    return Err(unsupported(source, "truncated JPEG frame header"));
                };
                let color = match components {
                    1 => ColorModel::Gray,
                    3 => ColorModel::Rgb,
                    _ => {
                        return Err(unsupported(source, "unsupported JPEG color space"));
                    }
                };
                return Ok(ImageData { bytes, width, height, format: ImageFormat::Jpeg, color });
            }
            _ => {
                let len = read_u16(&bytes, pos)
                    .ok_or_else(|| unsupported(source, "truncated JPEG segment"))?;
                pos += len as usize;
            }
        }
    }
}

/// Read the IHDR chunk that immediately follows the PNG signature.
fn probe_png(source: &str, bytes: Vec<u8>) -> Result<ImageData, RenderError> {
    if bytes.len() < 29 || &bytes[12..16] != b"IHDR" {
        return Err(unsupported(source, "malformed PNG header"));
    }
    let width = read_u32(&bytes, 16).unwrap_or(0);
    let height = read_u32(&bytes, 20).unwrap_or(0);
    let bit_depth = bytes[24];
    let color_type = bytes[25];
    let interlace = bytes[28];

    if interlace != 0 {
        return Err(unsupported(source, "interlaced PNG is not supported"));
    }
    if bit_depth != 8 {
        return Err(unsupported(source, "only 8-bit PNG is supported"));
    }
    let color = match color_type {
        0 => ColorModel::Gray,
        2 => ColorModel::Rgb,
        _ => {
            return Err(unsupported(
                source,
                "only grayscale and truecolor PNG without alpha are supported",
            ));
        }
    };

    Ok(ImageData { bytes, width, height, format: ImageFormat::Png, color })
}

/// Concatenate the IDAT chunks: together they form one zlib stream, which
/// is exactly what FlateDecode with PNG predictors expects.
fn png_idat(bytes: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut payload = Vec::new();
    let mut pos = 8;
    while pos + 8 <= bytes.len() {
        let len = read_u32(bytes, pos).unwrap_or(0) as usize;
        let kind = &bytes[pos + 4..pos + 8];
        let data_start = pos + 8;
        if data_start + len > bytes.len() {
            break;
        }
        if kind == b"IDAT" {
            payload.extend_from_slice(&bytes[data_start..data_start + len]);
        }
        if kind == b"IEND" {
            break;
        }
        // Chunk data plus the trailing CRC.
        pos = data_start + len + 4;
    }
    if payload.is_empty() {
        return Err(RenderError::Other("PNG stream has no image data".to_string()));
    }
    Ok(payload)
}
