use anyhow::{Context, Result};
use image::RgbImage;
use std::path::PathBuf;

/// Camera parameters requested from the platform media layer.
#[derive(Debug, Clone, Copy)]
pub struct CameraRequest {
    pub facing: Facing,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

impl Default for CameraRequest {
    fn default() -> Self {
        Self {
            facing: Facing::Front,
            width: 400,
            height: 400,
        }
    }
}

/// An active video stream handed to us by the platform layer.
pub trait VideoFeed: Send {
    /// The most recent frame the stream has produced, if any.
    fn current_frame(&mut self) -> Option<RgbImage>;
}

/// Access to camera devices. Opening a feed may prompt the user for
/// permission; denial and absent hardware surface as errors here and are
/// downgraded to a missing session by [`CameraSession::open`].
pub trait MediaProvider {
    fn open(&self, request: &CameraRequest) -> Result<Box<dyn VideoFeed>>;
}

/// Owns one camera stream for the acquisition layer. A session without an
/// active feed is valid: every capture on it is a silent no-op, matching
/// how a capture button behaves before the camera was started.
pub struct CameraSession {
    feed: Option<Box<dyn VideoFeed>>,
}

impl CameraSession {
    /// Session with no stream attached.
    pub fn inactive() -> Self {
        Self { feed: None }
    }

    /// Try to start a stream. Permission denial or a missing device is
    /// logged and yields an inactive session; nothing downstream runs.
    pub fn open(provider: &dyn MediaProvider, request: &CameraRequest) -> Self {
        match provider.open(request) {
            Ok(feed) => Self { feed: Some(feed) },
            Err(err) => {
                log::warn!("camera unavailable: {:#}", err);
                Self { feed: None }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.feed.is_some()
    }

    /// Grab the current frame of the active stream. Returns `None` without
    /// error when no stream is active or the stream has no frame yet.
    pub fn capture(&mut self) -> Option<RgbImage> {
        let feed = self.feed.as_mut()?;
        let frame = feed.current_frame();
        if frame.is_none() {
            log::warn!("capture requested but the stream has produced no frame");
        }
        frame
    }

    /// Drop the stream handle, releasing the device.
    pub fn close(&mut self) {
        self.feed = None;
    }
}

/// A file-based image input: either a path picked by the user or the raw
/// bytes of a dropped file.
pub enum ImageSource {
    File(PathBuf),
    Dropped { name: String, bytes: Vec<u8> },
}

impl ImageSource {
    /// Read and decode the source into an RGB bitmap. The image is fully
    /// decoded before this resolves, so normalization never sees a
    /// partial read. Any format the image codec understands is accepted.
    pub async fn decode(self) -> Result<RgbImage> {
        match self {
            ImageSource::File(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                decode_bytes(bytes)
                    .await
                    .with_context(|| format!("failed to decode {}", path.display()))
            }
            ImageSource::Dropped { name, bytes } => decode_bytes(bytes)
                .await
                .with_context(|| format!("failed to decode dropped file {:?}", name)),
        }
    }
}

async fn decode_bytes(bytes: Vec<u8>) -> Result<RgbImage> {
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(decoded.to_rgb8())
}
