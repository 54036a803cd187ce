//! Image-to-blit conversion: precondition checks and the block processor.
//!
//! The processor walks the image in block order and is the only code that
//! writes to the output buffers or the source image. All preconditions
//! are checked before the first block is touched; the per-block math has
//! no failure paths.

mod error;
mod processor;

pub use error::EncodeError;
pub(crate) use processor::{process_blocks, validate_image};
