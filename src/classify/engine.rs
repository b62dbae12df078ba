use crate::classify::tensor::InputTensor;
use crate::models::Prediction;
use anyhow::{Context, Result, anyhow};
use rten::Model;
use rten_tensor::Tensor;
use rten_tensor::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// A loaded model that maps one input tensor to one scalar score in [0,1].
///
/// This is the seam between the pipeline and the serialized artifact: the
/// production implementation wraps an `.rten` model, tests substitute
/// their own.
pub trait ScalarModel: Send + Sync {
    fn predict(&self, input: &InputTensor) -> Result<f32>;
}

struct RtenModel {
    model: Model,
}

impl ScalarModel for RtenModel {
    fn predict(&self, input: &InputTensor) -> Result<f32> {
        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| anyhow!("forward pass failed: {}", e))?;
        let scores: Tensor<f32> = output
            .try_into()
            .map_err(|e| anyhow!("unexpected model output type: {:?}", e))?;
        let score = scores
            .iter()
            .copied()
            .next()
            .ok_or_else(|| anyhow!("model produced an empty output"))?;
        // `scores` (and the consumed input view) drop here; nothing from
        // this call outlives the returned scalar.
        Ok(score)
    }
}

/// Externally observable engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

enum EngineState {
    Uninitialized,
    Loading,
    Ready(Box<dyn ScalarModel>),
    Failed,
}

impl EngineState {
    fn status(&self) -> EngineStatus {
        match self {
            EngineState::Uninitialized => EngineStatus::Uninitialized,
            EngineState::Loading => EngineStatus::Loading,
            EngineState::Ready(_) => EngineStatus::Ready,
            EngineState::Failed => EngineStatus::Failed,
        }
    }
}

/// Owns the model singleton and gates every prediction on its lifecycle:
/// Uninitialized -> Loading -> Ready, or Loading -> Failed.
///
/// Failed is terminal for the process lifetime; there is no reload.
/// Predictions issued in any state other than Ready are dropped, never
/// queued.
pub struct InferenceEngine {
    state: RwLock<EngineState>,
}

impl InferenceEngine {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState::Uninitialized),
        }
    }

    /// Build an engine that is immediately Ready with the given model.
    /// Entry point for non-rten backends and test doubles.
    pub fn with_model(model: Box<dyn ScalarModel>) -> Self {
        Self {
            state: RwLock::new(EngineState::Ready(model)),
        }
    }

    pub fn status(&self) -> EngineStatus {
        self.state.read().unwrap().status()
    }

    /// Load the model artifact at `path`. Resolves the state machine to
    /// Ready or Failed; called once at startup.
    pub async fn load(&self, path: &Path) {
        let path: PathBuf = path.to_path_buf();
        self.load_with(move || {
            let model = Model::load_file(&path)
                .with_context(|| format!("failed to load model from {}", path.display()))?;
            Ok(Box::new(RtenModel { model }) as Box<dyn ScalarModel>)
        })
        .await;
    }

    /// Drive the state machine through a custom loader. The loader runs on
    /// a blocking thread; the engine reads Loading until it resolves.
    pub async fn load_with<F>(&self, loader: F)
    where
        F: FnOnce() -> Result<Box<dyn ScalarModel>> + Send + 'static,
    {
        {
            let mut state = self.state.write().unwrap();
            if !matches!(*state, EngineState::Uninitialized) {
                log::warn!("model load requested more than once; ignoring");
                return;
            }
            *state = EngineState::Loading;
        }

        let loaded = tokio::task::spawn_blocking(loader).await;

        let mut state = self.state.write().unwrap();
        *state = match loaded {
            Ok(Ok(model)) => {
                log::info!("model loaded");
                EngineState::Ready(model)
            }
            Ok(Err(err)) => {
                log::error!("model load failed: {:#}", err);
                EngineState::Failed
            }
            Err(err) => {
                log::error!("model load task panicked: {}", err);
                EngineState::Failed
            }
        };
    }

    /// Run one forward pass. Returns `Ok(None)` without touching the model
    /// unless the engine is Ready: early or post-failure requests are
    /// silently dropped rather than queued or retried.
    pub fn predict(&self, input: &InputTensor) -> Result<Option<Prediction>> {
        let state = self.state.read().unwrap();
        let model = match &*state {
            EngineState::Ready(model) => model,
            other => {
                log::debug!("prediction dropped: engine is {:?}", other.status());
                return Ok(None);
            }
        };

        let score = model.predict(input)?;
        Ok(Some(Prediction::from_score(score)))
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}
