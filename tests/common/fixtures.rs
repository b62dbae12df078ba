use anyhow::Result;
use catdog::{InputTensor, ScalarModel, preprocess};
use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::NamedTempFile;

/// Creates a solid-color image with the given dimensions.
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(rgb))
}

/// Fully white input: every normalized intensity must come out as 1.0.
pub fn white_image() -> RgbImage {
    solid_image(100, 100, [255, 255, 255])
}

/// Fully black input: every normalized intensity must come out as 0.0.
pub fn black_image() -> RgbImage {
    solid_image(100, 100, [0, 0, 0])
}

/// Builds the model input tensor for an image, via the real pipeline stages.
pub fn tensor_for(image: &RgbImage) -> InputTensor {
    InputTensor::from_frame(preprocess::normalize(image))
}

/// Writes a solid-color PNG to a temp file and returns it.
/// The file is cleaned up when dropped.
pub fn create_test_image(rgb: [u8; 3]) -> NamedTempFile {
    let img = solid_image(64, 48, rgb);
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Model double that always yields the same score.
pub struct FixedModel(pub f32);

impl ScalarModel for FixedModel {
    fn predict(&self, _input: &InputTensor) -> Result<f32> {
        Ok(self.0)
    }
}

/// Model double whose score is the mean of the input tensor, so tests can
/// check that the exact normalized values reach the model.
pub struct MeanModel;

impl ScalarModel for MeanModel {
    fn predict(&self, input: &InputTensor) -> Result<f32> {
        let data = input.data();
        Ok(data.iter().sum::<f32>() / data.len() as f32)
    }
}

/// Model double that fails every forward pass.
pub struct BrokenModel;

impl ScalarModel for BrokenModel {
    fn predict(&self, _input: &InputTensor) -> Result<f32> {
        anyhow::bail!("forward pass exploded")
    }
}
