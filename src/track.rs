mod fill;
mod index;
mod restore;

pub use fill::Fill;
pub use index::TrackIndex;
pub use restore::{RestoreStats, restore_missing, restore_missing_with_stats};
