pub mod engine;
pub mod preprocess;
pub mod tensor;

use anyhow::Result;
use image::RgbImage;

use crate::models::Prediction;
use engine::{EngineStatus, InferenceEngine, ScalarModel};
use tensor::InputTensor;

/// Full classification pipeline: normalize -> tensor -> inference -> label.
///
/// Stateless per call apart from the read-only model singleton inside the
/// engine, so one classifier can serve any number of independent requests.
pub struct Classifier {
    engine: InferenceEngine,
}

impl Classifier {
    /// Classifier with an unloaded engine; call [`Classifier::load_model`]
    /// before expecting predictions.
    pub fn new() -> Self {
        Self {
            engine: InferenceEngine::new(),
        }
    }

    /// Classifier around an already-loaded model.
    pub fn with_model(model: Box<dyn ScalarModel>) -> Self {
        Self {
            engine: InferenceEngine::with_model(model),
        }
    }

    /// Begin the one-time model load. Independent of any single
    /// classification request; requests made before it resolves are
    /// dropped, not queued.
    pub async fn load_model(&self, path: &std::path::Path) {
        self.engine.load(path).await;
    }

    pub fn status(&self) -> EngineStatus {
        self.engine.status()
    }

    /// Run one image through the pipeline. `Ok(None)` means the engine was
    /// not ready and the request was dropped; `Err` means inference itself
    /// failed.
    pub fn classify(&self, image: &RgbImage) -> Result<Option<Prediction>> {
        let frame = preprocess::normalize(image);
        let tensor = InputTensor::from_frame(frame);
        self.engine.predict(&tensor)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
