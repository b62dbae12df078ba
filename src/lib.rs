pub mod acquire;
pub mod classify;
pub mod models;

pub use acquire::{CameraRequest, CameraSession, Facing, ImageSource, MediaProvider, VideoFeed};
pub use classify::engine::{EngineStatus, InferenceEngine, ScalarModel};
pub use classify::tensor::InputTensor;
pub use classify::{Classifier, preprocess};
pub use models::{FRAME_SIZE, Label, NormalizedFrame, Prediction};
