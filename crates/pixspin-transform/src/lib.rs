//! pixspin-transform - Upscaling and rotation for indexed sprites
//!
//! This crate provides:
//!
//! - EPX-family upscalers ([`scale2x`], [`scale3x`]) and plain pixel
//!   replication
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Arbitrary angle rotation by inverse polar sampling of a 2x upscaled
//!   copy of the sprite

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{
    RotatePath, SAMPLE_SCALE, normalize_degrees, rotate, rotate_90, rotate_180, rotate_image,
    rotate_orth, rotate_sampled, select_rotate_path,
};
pub use scale::{
    EdgeMode, scale_by_replication, scale2x, scale2x_with_edges, scale3x, scale3x_with_edges,
};
