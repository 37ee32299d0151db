/// Where the shapes of a vehicle in one output frame come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The vehicle was detected in this frame
    Genuine,
    /// Held over from an earlier genuine appearance
    HeldForward { from: usize },
    /// Taken from a later genuine appearance
    HeldBackward { from: usize },
    /// No genuine appearance exists; both shapes are empty
    Placeholder,
}

impl Fill {
    /// Choose the source for a missing frame at `pos` given the nearest
    /// genuine appearances on each side.
    ///
    /// A gap bounded on both sides is split at `prev + (next - prev) / 2`
    /// (floor): frames up to and including the split take the earlier
    /// snapshot, the rest take the later one.
    pub fn for_gap(pos: usize, prev: Option<usize>, next: Option<usize>) -> Self {
        match (prev, next) {
            (Some(prev), Some(next)) => {
                let mid = prev + (next - prev) / 2;
                if pos <= mid {
                    Fill::HeldForward { from: prev }
                } else {
                    Fill::HeldBackward { from: next }
                }
            }
            (Some(prev), None) => Fill::HeldForward { from: prev },
            (None, Some(next)) => Fill::HeldBackward { from: next },
            (None, None) => Fill::Placeholder,
        }
    }

    /// Position of the genuine snapshot this fill copies, if any.
    pub fn source(&self, pos: usize) -> Option<usize> {
        match *self {
            Fill::Genuine => Some(pos),
            Fill::HeldForward { from } | Fill::HeldBackward { from } => Some(from),
            Fill::Placeholder => None,
        }
    }
}
