use std::fmt;

/// Side length of the square frame the model consumes.
pub const FRAME_SIZE: usize = 100;

/// Binary classification outcome.
///
/// The decision threshold sits at 0.5 and is inclusive on the cat side:
/// a score of exactly 0.5 is still a cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Cat,
    Dog,
}

impl Label {
    /// Map a model score in [0,1] to a label. `score <= 0.5` is `Cat`,
    /// anything above is `Dog`.
    pub fn from_score(score: f32) -> Self {
        if score <= 0.5 { Label::Cat } else { Label::Dog }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Cat => write!(f, "Gato"),
            Label::Dog => write!(f, "Perro"),
        }
    }
}

/// One classification result: the raw model score plus the thresholded label.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub score: f32,
    pub label: Label,
}

impl Prediction {
    pub fn from_score(score: f32) -> Self {
        Self {
            score,
            label: Label::from_score(score),
        }
    }
}

/// A frame reduced to the fixed model resolution: exactly
/// `FRAME_SIZE * FRAME_SIZE` grayscale intensities in [0,1], row-major
/// (pixel (0,0) first, left-to-right, top-to-bottom).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrame {
    values: Vec<f32>,
}

impl NormalizedFrame {
    /// Wrap a row-major intensity buffer. The buffer must hold exactly
    /// `FRAME_SIZE * FRAME_SIZE` values; the normalizer guarantees this,
    /// so a mismatch is a programming error.
    pub(crate) fn from_values(values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), FRAME_SIZE * FRAME_SIZE);
        Self { values }
    }

    /// Intensity at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * FRAME_SIZE + col]
    }

    /// Row-major view of all intensities.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Consume the frame, yielding the row-major buffer.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}
