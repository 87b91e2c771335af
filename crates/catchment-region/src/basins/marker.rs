//! Marker cell encoding
//!
//! A marker image is a 32 bpp image whose cells pack a 24-bit basin label
//! (bits 0..24) and a pending flag (bit 24). Bits 25..32 are ignored on
//! input and cleared once a labeled pixel has been processed.

/// Mask selecting the label field of a marker cell
pub const LABEL_MASK: u32 = 0x00ff_ffff;

/// Flag set on cells that have not been processed yet
pub const PENDING_FLAG: u32 = 0x0100_0000;

/// Raw value of a cell no basin has reached
pub const UNTOUCHED: u32 = PENDING_FLAG;

/// Largest label a marker cell can carry
pub const MAX_LABEL: u32 = LABEL_MASK;

/// Label field of a raw marker cell.
#[inline]
pub fn label_of(raw: u32) -> u32 {
    raw & LABEL_MASK
}

/// Decoded state of one marker cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCell {
    /// No label and no pending flag (a non-seed before flooding)
    Unlabeled,
    /// Waiting to be reached by a basin
    Untouched,
    /// Carries a basin label; `pending` is set while the pixel has been
    /// tagged but not yet dequeued
    Labeled { label: u32, pending: bool },
}

impl MarkerCell {
    /// Decode a raw 32-bit marker value.
    pub fn from_raw(raw: u32) -> Self {
        let label = label_of(raw);
        let pending = raw & PENDING_FLAG != 0;
        match (label, pending) {
            (0, false) => MarkerCell::Unlabeled,
            (0, true) => MarkerCell::Untouched,
            (label, pending) => MarkerCell::Labeled { label, pending },
        }
    }

    /// Encode back into the packed 32-bit layout.
    pub fn to_raw(self) -> u32 {
        match self {
            MarkerCell::Unlabeled => 0,
            MarkerCell::Untouched => UNTOUCHED,
            MarkerCell::Labeled { label, pending } => {
                let flag = if pending { PENDING_FLAG } else { 0 };
                label_of(label) | flag
            }
        }
    }

    /// Basin label, if any.
    pub fn label(self) -> Option<u32> {
        match self {
            MarkerCell::Labeled { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Whether no basin has reached this cell.
    pub fn is_untouched(self) -> bool {
        self == MarkerCell::Untouched
    }
}

impl From<u32> for MarkerCell {
    fn from(raw: u32) -> Self {
        MarkerCell::from_raw(raw)
    }
}
