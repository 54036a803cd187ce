//! Public entry point: [`BlitEncoder`] and the unified [`BlitError`].

mod encoder;
mod error;

pub use encoder::BlitEncoder;
pub use error::BlitError;
