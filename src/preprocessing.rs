// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image preprocessing for the frame-feature extractor.
//!
//! This module converts a decoded image into the NCHW tensor the extractor
//! expects: exact resize to the extractor's fixed input size, RGB channel
//! order, and normalization to `[0, 1]`.

#![allow(clippy::cast_possible_truncation)]

use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::Array4;

/// Reciprocal of 255 for normalization.
const INV_255: f32 = 1.0 / 255.0;

/// Preprocess an image for feature extraction.
///
/// Performs an exact resize to `target_size` (the extractor input is a fixed
/// square, so no letterbox padding is needed), converts to RGB, normalizes
/// to `[0, 1]`, and lays the pixels out as an NCHW tensor with batch size 1.
///
/// # Arguments
///
/// * `image` - Input image.
/// * `target_size` - Extractor input size as (height, width).
///
/// # Returns
///
/// Tensor with shape `(1, 3, height, width)`.
#[must_use]
pub fn preprocess_image(image: &DynamicImage, target_size: (usize, usize)) -> Array4<f32> {
    let (height, width) = target_size;

    let resized = image.resize_exact(width as u32, height as u32, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, 3, height, width));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = f32::from(pixel[0]) * INV_255;
        tensor[[0, 1, y, x]] = f32::from(pixel[1]) * INV_255;
        tensor[[0, 2, y, x]] = f32::from(pixel[2]) * INV_255;
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_preprocess_shape() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(64, 48));
        let tensor = preprocess_image(&img, (32, 32));
        assert_eq!(tensor.shape(), &[1, 3, 32, 32]);
    }

    #[test]
    fn test_preprocess_normalization() {
        // Solid white image maps to 1.0 in every channel.
        let mut img = RgbImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([255, 255, 255]);
        }
        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img), (8, 8));
        assert!(tensor.iter().all(|&v| (v - 1.0).abs() < f32::EPSILON));
    }

    #[test]
    fn test_preprocess_channel_order() {
        // Solid red image: channel 0 full, channels 1 and 2 empty.
        let mut img = RgbImage::new(4, 4);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([255, 0, 0]);
        }
        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img), (4, 4));
        assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < f32::EPSILON);
        assert!(tensor[[0, 1, 0, 0]].abs() < f32::EPSILON);
        assert!(tensor[[0, 2, 0, 0]].abs() < f32::EPSILON);
    }

    #[test]
    fn test_preprocess_values_in_range() {
        let mut img = RgbImage::new(16, 16);
        for (i, pixel) in img.pixels_mut().enumerate() {
            *pixel = Rgb([(i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8]);
        }
        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img), (8, 8));
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
