//! PNG image format support
//!
//! 8- and 16-bit grayscale, grayscale+alpha, RGB and RGBA are supported.
//! Grayscale loads as a single-channel image; grayscale+alpha expands to
//! RGBA. Float images cannot be stored as PNG.

use crate::{IoError, IoResult};
use chanoffset_core::{Components, DynImage, Image, Rect, Sample};
use png::{ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<DynImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let (components, samples_in) = match color_type {
        ColorType::Grayscale => (Components::Alpha, 1),
        ColorType::GrayscaleAlpha => (Components::Rgba, 2),
        ColorType::Rgb => (Components::Rgb, 3),
        ColorType::Rgba => (Components::Rgba, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG images are not supported".to_string(),
            ));
        }
    };
    if !matches!(bit_depth, png::BitDepth::Eight | png::BitDepth::Sixteen) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let layout = RowLayout {
        line_size: output_info.line_size,
        width: width as usize,
        height: height as usize,
        samples_in,
        color_type,
    };
    let data = &buf[..output_info.buffer_size()];
    if data.len() < layout.line_size * layout.height {
        return Err(IoError::InvalidData(format!(
            "PNG frame holds {} bytes, expected {}",
            data.len(),
            layout.line_size * layout.height
        )));
    }
    let bounds = Rect::from_size(width, height);

    let image = if bit_depth == png::BitDepth::Sixteen {
        let samples = layout.unpack(data, |row, i| {
            u16::from_be_bytes([row[2 * i], row[2 * i + 1]])
        });
        DynImage::from(Image::from_data(bounds, components, samples)?)
    } else {
        let samples = layout.unpack(data, |row, i| row[i]);
        DynImage::from(Image::from_data(bounds, components, samples)?)
    };
    Ok(image)
}

/// Decoded frame geometry
struct RowLayout {
    line_size: usize,
    width: usize,
    height: usize,
    samples_in: usize,
    color_type: ColorType,
}

impl RowLayout {
    fn unpack<T: Sample>(&self, data: &[u8], get: impl Fn(&[u8], usize) -> T) -> Vec<T> {
        let out_per_pixel = match self.color_type {
            ColorType::Grayscale => 1,
            ColorType::Rgb => 3,
            _ => 4,
        };
        let mut out = Vec::with_capacity(self.width * self.height * out_per_pixel);
        for row in data.chunks(self.line_size).take(self.height) {
            for x in 0..self.width {
                let i = x * self.samples_in;
                match self.color_type {
                    ColorType::GrayscaleAlpha => {
                        let g = get(row, i);
                        out.extend_from_slice(&[g, g, g, get(row, i + 1)]);
                    }
                    _ => {
                        for k in 0..self.samples_in {
                            out.push(get(row, i + k));
                        }
                    }
                }
            }
        }
        out
    }
}

/// Write a PNG image
///
/// The image origin is not stored; the file always starts at `(0, 0)`.
pub fn write_png<W: Write>(image: &DynImage, writer: W) -> IoResult<()> {
    match image {
        DynImage::U8(img) => encode(img, png::BitDepth::Eight, writer, |v, out| out.push(v)),
        DynImage::U16(img) => encode(img, png::BitDepth::Sixteen, writer, |v, out| {
            out.extend_from_slice(&v.to_be_bytes())
        }),
        DynImage::F32(_) => Err(IoError::UnsupportedFormat(
            "PNG cannot store float samples".to_string(),
        )),
    }
}

fn encode<T: Sample, W: Write>(
    image: &Image<T>,
    bit_depth: png::BitDepth,
    writer: W,
    put: impl Fn(T, &mut Vec<u8>),
) -> IoResult<()> {
    let color_type = match image.components() {
        Components::Alpha => ColorType::Grayscale,
        Components::Rgb => ColorType::Rgb,
        Components::Rgba => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(image.data().len() * T::DEPTH.bytes_per_sample());
    for &v in image.data() {
        put(v, &mut data);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgba8() {
        let mut img = Image::<u8>::from_size(4, 3, Components::Rgba).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                img.set_pixel(x, y, &[(x * 60) as u8, (y * 80) as u8, 7, 200]).unwrap();
            }
        }
        let img = DynImage::from(img);

        let mut buffer = Vec::new();
        write_png(&img, &mut buffer).unwrap();
        let back = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_png_roundtrip_gray16() {
        let data: Vec<u16> = (0..6).map(|i| i * 10_000 + 3).collect();
        let img = DynImage::from(
            Image::from_data(Rect::from_size(3, 2), Components::Alpha, data).unwrap(),
        );

        let mut buffer = Vec::new();
        write_png(&img, &mut buffer).unwrap();
        let back = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(back.components(), Components::Alpha);
        assert_eq!(back, img);
    }

    #[test]
    fn test_png_gray_alpha_expands_to_rgba() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::GrayscaleAlpha);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 255, 90, 128]).unwrap();
        }

        let back = read_png(Cursor::new(buffer)).unwrap();
        match back {
            DynImage::U8(img) => {
                assert_eq!(img.components(), Components::Rgba);
                assert_eq!(img.data(), &[10, 10, 10, 255, 90, 90, 90, 128]);
            }
            other => panic!("unexpected encoding {:?}", other.depth()),
        }
    }

    #[test]
    fn test_png_rejects_float() {
        let img = DynImage::from(Image::<f32>::from_size(1, 1, Components::Rgb).unwrap());
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&img, &mut buffer),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_png_rejects_garbage() {
        let data = vec![0u8; 32];
        assert!(read_png(Cursor::new(data)).is_err());
    }
}
