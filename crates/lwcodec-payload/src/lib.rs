//! Tag-prefixed payload codec for a LoRaWAN pulse and climate sensor.
//!
//! Uplinks carry measurements as a sequence of fields, each a tag byte
//! followed by a value whose width the tag implies:
//! - `0x00` temperature and `0x01` humidity, signed hundredths in 2 bytes
//! - `0x02` pulse counter in 1 byte
//! - `0x03` two volume readings (metering firmware only)
//!
//! Downlinks carry commands as tag/value byte pairs on fPort 16.
//!
//! Every operation is a pure function of its input. Nothing is kept between
//! calls.

mod cursor;

pub mod codec;
pub mod config;
pub mod downlink;
pub mod error;
pub mod points;
pub mod record;
pub mod tags;
pub mod uplink;

pub use codec::Codec;
pub use config::{CodecConfig, Profile, DEFAULT_MAX_UPLINK_SIZE};
pub use downlink::{decode_downlink, encode_downlink};
pub use error::{CodecError, Direction, Result};
pub use points::extract_points;
pub use record::{
    Command, DownlinkInput, DownlinkMessage, Measurement, Point, PointSet, PointValue,
    PointsInput, UplinkInput, VolumeReading,
};
pub use tags::FPORT;
pub use uplink::decode_uplink;
