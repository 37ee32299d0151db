//! Integration module for connecting detection/tracking backends with
//! reconstruction and danger reporting.

mod builder;
mod pipeline;
mod source;

pub use builder::CarBuilder;
pub use pipeline::{DangerPipeline, DangerReport};
pub use source::{CarSource, IntoCars};
