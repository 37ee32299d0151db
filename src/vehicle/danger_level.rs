/// Danger classification of a vehicle against a zone, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DangerLevel {
    /// Neither the wheels nor the bounding box touch the zone
    #[default]
    Safe = 0,
    /// Only the bounding box touches the zone
    BoundingBox = 1,
    /// The wheels touch the zone
    Wheels = 2,
}

impl DangerLevel {
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`DangerLevel::value`]; `None` for anything above 2.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Safe),
            1 => Some(Self::BoundingBox),
            2 => Some(Self::Wheels),
            _ => None,
        }
    }
}

impl From<DangerLevel> for u8 {
    fn from(level: DangerLevel) -> u8 {
        level.value()
    }
}
