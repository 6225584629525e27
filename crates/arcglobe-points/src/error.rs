//! Point derivation error types.

/// Reasons an arc is excluded from the derived point set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    /// The arc's color is not a `#rrggbb` / `#rgb` hex string.
    #[error("arc #{index} (order {order}) has invalid color {color:?}")]
    InvalidColorFormat {
        /// Position of the arc in the input list.
        index: usize,
        /// The arc's `order` field.
        order: u32,
        /// The offending color string.
        color: String,
    },

    /// One of the arc's endpoint coordinates is NaN or infinite.
    #[error("arc #{index} (order {order}) has a non-finite coordinate")]
    InvalidCoordinate {
        /// Position of the arc in the input list.
        index: usize,
        /// The arc's `order` field.
        order: u32,
    },
}

impl PointError {
    /// Position of the rejected arc in the input list.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidColorFormat { index, .. } | Self::InvalidCoordinate { index, .. } => {
                *index
            }
        }
    }
}
