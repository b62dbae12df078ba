use crate::models::{FRAME_SIZE, NormalizedFrame};
use rten_tensor::prelude::*;
use rten_tensor::{NdTensor, NdTensorView};

/// Model input: a normalized frame wrapped to the NHWC shape
/// `(1, FRAME_SIZE, FRAME_SIZE, 1)` the network expects. This is a pure
/// reshape; values and row-major order are untouched.
pub struct InputTensor(NdTensor<f32, 4>);

impl InputTensor {
    pub fn from_frame(frame: NormalizedFrame) -> Self {
        let values = frame.into_values();
        Self(NdTensor::from_data([1, FRAME_SIZE, FRAME_SIZE, 1], values))
    }

    pub fn shape(&self) -> [usize; 4] {
        self.0.shape()
    }

    pub(crate) fn view(&self) -> NdTensorView<'_, f32, 4> {
        self.0.view()
    }

    /// Flat row-major view of the tensor data.
    pub fn data(&self) -> &[f32] {
        self.0.data().unwrap_or(&[])
    }
}
