//! Detected objects and block types.

use crate::checksum::word_sum;
use crate::consts::{START_WORD, START_WORD_CC};

/// Shape of the block records in a frame.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum BlockType {
    /// A signature block: `signature, x, y, width, height`.
    #[default]
    Normal,
    /// A color-code block: the normal fields followed by `angle`.
    ColorCode,
}

impl BlockType {
    /// Maps a start marker to the block type it announces.
    ///
    /// Returns `None` for any word that is not [`START_WORD`] or [`START_WORD_CC`].
    pub const fn from_start_word(word: u16) -> Option<Self> {
        match word {
            START_WORD => Some(Self::Normal),
            START_WORD_CC => Some(Self::ColorCode),
            _ => None,
        }
    }

    /// Number of data words following the checksum in a block of this type.
    pub const fn data_words(self) -> usize {
        match self {
            Self::Normal => 5,
            Self::ColorCode => 6,
        }
    }
}

/// One object reported by the sensor.
///
/// All coordinates are in sensor pixels. `angle` is only carried by color-code
/// blocks and is `0` for normal blocks.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct DetectedObject {
    signature: u16,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    angle: u16,
}

impl DetectedObject {
    /// Creates an object from its decoded fields.
    pub const fn new(signature: u16, x: u16, y: u16, width: u16, height: u16, angle: u16) -> Self {
        Self {
            signature,
            x,
            y,
            width,
            height,
            angle,
        }
    }

    /// Signature (trained color) number, or the color-code value.
    pub const fn signature(&self) -> u16 {
        self.signature
    }

    /// X coordinate of the object's center.
    pub const fn x(&self) -> u16 {
        self.x
    }

    /// Y coordinate of the object's center.
    pub const fn y(&self) -> u16 {
        self.y
    }

    /// Width of the bounding box.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the bounding box.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Rotation of a color-code block; `0` for normal blocks.
    pub const fn angle(&self) -> u16 {
        self.angle
    }

    /// The checksum the sensor sends for this object: the sum of all fields, mod 2^16.
    pub fn checksum(&self) -> u16 {
        word_sum(&[
            self.signature,
            self.x,
            self.y,
            self.width,
            self.height,
            self.angle,
        ])
    }
}
