//! Rotation configuration

use pixspin_core::Image;
use pixspin_transform::{
    EdgeMode, SAMPLE_SCALE, TransformResult, scale_by_replication, scale2x_with_edges,
};

/// How the 2x sample source of a sprite is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Upscaler {
    /// Scale2x (EPX) smoothing
    #[default]
    Epx,
    /// Plain pixel replication
    Replicate,
}

impl Upscaler {
    /// Build the sample source for `image`.
    pub fn upscale(self, image: &Image, edges: EdgeMode) -> TransformResult<Image> {
        match self {
            Upscaler::Epx => scale2x_with_edges(image, edges),
            Upscaler::Replicate => scale_by_replication(image, SAMPLE_SCALE),
        }
    }
}

/// Options for a [`RotationRegistry`](crate::RotationRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RotationConfig {
    /// Sample source builder
    pub upscaler: Upscaler,
    /// Border policy for [`Upscaler::Epx`]
    pub edges: EdgeMode,
}

impl RotationConfig {
    /// Set the upscaler.
    pub fn with_upscaler(mut self, upscaler: Upscaler) -> Self {
        self.upscaler = upscaler;
        self
    }

    /// Set the EPX border policy.
    pub fn with_edges(mut self, edges: EdgeMode) -> Self {
        self.edges = edges;
        self
    }
}
