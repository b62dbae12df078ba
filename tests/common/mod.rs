mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from catdog for tests
pub use catdog::{
    Classifier, EngineStatus, FRAME_SIZE, ImageSource, InferenceEngine, InputTensor, Label,
    ScalarModel, preprocess,
};
