use std::fmt;

/// Which way a payload travels relative to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Device to network.
    Uplink,
    /// Network to device.
    Downlink,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Uplink => f.write_str("uplink"),
            Direction::Downlink => f.write_str("downlink"),
        }
    }
}

/// Errors that can occur during payload encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The uplink payload is longer than the radio frame allows.
    #[error("Invalid uplink payload: length exceeds {max} bytes")]
    PayloadTooLong { size: usize, max: usize },

    /// The tag byte is not recognized for this direction.
    #[error("Invalid {direction} payload: unknown id '{tag}'")]
    UnknownTag { direction: Direction, tag: u8 },

    /// The value for a tag would be read past the end of the buffer.
    #[error("Invalid {direction} payload: index out of bounds when reading {field}")]
    IndexOutOfBounds {
        direction: Direction,
        field: &'static str,
    },

    /// The pulse counter threshold does not fit in one byte.
    #[error("Invalid downlink: pulseCounterThreshold cannot exceed 255")]
    ThresholdOutOfRange { value: u32 },
}

pub type Result<T> = std::result::Result<T, CodecError>;
