//! Trait for upstream detection and tracking backends.

use crate::vehicle::Car;

/// Trait for detection + tracking backends that produce vehicles.
///
/// Implement this to feed any detector/tracker combination into a
/// [`DangerPipeline`](super::DangerPipeline). Identifiers must stay stable for
/// the same physical vehicle across frames; missed detections are fine.
///
/// # Example
///
/// ```ignore
/// use dangerzone_rs::{Car, CarSource};
///
/// struct MyTracker {
///     // Your detector and tracker here
/// }
///
/// impl CarSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn track(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Car>, Self::Error> {
///         // Run inference, associate tracks and return vehicles
///         Ok(vec![])
///     }
/// }
/// ```
pub trait CarSource {
    /// Error type for detection or tracking failures.
    type Error;

    /// Detect and track vehicles in one raw frame.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn track(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Car>, Self::Error>;
}

/// Helper trait for converting tracker-specific outputs to `Car`s.
pub trait IntoCars {
    fn into_cars(self) -> Vec<Car>;
}

impl IntoCars for Vec<Car> {
    fn into_cars(self) -> Vec<Car> {
        self
    }
}

impl IntoCars for Car {
    fn into_cars(self) -> Vec<Car> {
        vec![self]
    }
}
