//! Image carrier types.
//!
//! Plain data records with public fields; no numerical operations live here.
//! Steps interpret pixel semantics, the engine only moves values by slot.

use serde::{Deserialize, Serialize};

/// Single image exchanged between steps. Pixels are stored row-major and
/// channel-interleaved; values are whatever scale the producing step uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub pixels: Vec<f32>,
}

impl ImageFrame {
    pub fn new(width: usize, height: usize, channels: usize, pixels: Vec<f32>) -> Self {
        Self { width,
               height,
               channels,
               pixels }
    }

    /// Frame of the given shape with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Self {
        Self { width,
               height,
               channels,
               pixels: vec![value; width * height * channels] }
    }

    /// Shape equality (width, height and channels).
    pub fn same_shape(&self, other: &ImageFrame) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }
}

/// Binary segmentation image separating particles from water.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryMask {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<bool>,
}

impl BinaryMask {
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Self {
        Self { width, height, pixels }
    }
}

/// Ordered stack of frames (background stacks, reconstruction stacks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageStack {
    pub frames: Vec<ImageFrame>,
}

impl ImageStack {
    pub fn new(frames: Vec<ImageFrame>) -> Self {
        Self { frames }
    }

    pub fn push(&mut self, frame: ImageFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
