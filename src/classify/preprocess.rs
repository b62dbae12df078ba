use crate::models::{FRAME_SIZE, NormalizedFrame};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Reduce an arbitrary-size RGB bitmap to the fixed model frame.
///
/// The image is stretched straight to `FRAME_SIZE`x`FRAME_SIZE` without
/// preserving aspect ratio, then each pixel becomes a single grayscale
/// intensity `(r/255 + g/255 + b/255) / 3`. Both choices match what the
/// model was trained on; do not swap in an aspect-preserving crop or a
/// luminance-weighted conversion.
pub fn normalize(image: &RgbImage) -> NormalizedFrame {
    let side = FRAME_SIZE as u32;
    let resized = if image.dimensions() == (side, side) {
        image.clone()
    } else {
        imageops::resize(image, side, side, FilterType::Triangle)
    };

    let mut values = Vec::with_capacity(FRAME_SIZE * FRAME_SIZE);
    for pixel in resized.pixels() {
        let r = pixel[0] as f32 / 255.0;
        let g = pixel[1] as f32 / 255.0;
        let b = pixel[2] as f32 / 255.0;
        values.push((r + g + b) / 3.0);
    }

    NormalizedFrame::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(rgb))
    }

    #[test]
    fn output_always_has_the_fixed_frame_size() {
        for (w, h) in [(1, 1), (100, 100), (640, 480), (3, 997)] {
            let frame = normalize(&solid(w, h, [10, 20, 30]));
            assert_eq!(frame.values().len(), FRAME_SIZE * FRAME_SIZE);
            assert!(frame.values().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn black_maps_to_zero_and_white_to_one() {
        let black = normalize(&solid(400, 400, [0, 0, 0]));
        assert!(black.values().iter().all(|&v| v == 0.0));

        let white = normalize(&solid(400, 400, [255, 255, 255]));
        assert!(white.values().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn equal_channels_average_to_the_channel_value() {
        let v = 127u8;
        let frame = normalize(&solid(100, 100, [v, v, v]));
        let expected = v as f32 / 255.0;
        for &got in frame.values() {
            assert!((got - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn mixed_channels_use_the_plain_average() {
        let frame = normalize(&solid(100, 100, [255, 0, 0]));
        let expected = (255.0 / 255.0) / 3.0;
        for &got in frame.values() {
            assert!((got - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn normalization_is_deterministic() {
        let img = ImageBuffer::from_fn(321, 87, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        assert_eq!(normalize(&img), normalize(&img));
    }

    #[test]
    fn row_major_order_follows_image_rows() {
        // Top half white, bottom half black: the first rows of the frame
        // must be bright and the last rows dark.
        let img = ImageBuffer::from_fn(200, 200, |_, y| {
            if y < 100 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
        });
        let frame = normalize(&img);
        assert!(frame.get(0, 0) > 0.9);
        assert!(frame.get(0, FRAME_SIZE - 1) > 0.9);
        assert!(frame.get(FRAME_SIZE - 1, 0) < 0.1);
        assert!(frame.get(FRAME_SIZE - 1, FRAME_SIZE - 1) < 0.1);
    }
}
