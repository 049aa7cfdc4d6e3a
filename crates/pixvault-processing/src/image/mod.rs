mod codec;
mod engine;

pub use codec::{decode, encode};
pub use engine::{DerivedThumbnail, ThumbnailEngine};
