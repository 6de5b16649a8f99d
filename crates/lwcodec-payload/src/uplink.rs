//! Uplink decoding: device measurements.
//!
//! Wire format, one or more fields in any order:
//! ```text
//! ┌─────────┬──────────────────────────┐
//! │ Tag (1B)│ Value (width by tag)     │ ...
//! └─────────┴──────────────────────────┘
//!  0x00 temperature     2B BE signed, /100
//!  0x01 humidity        2B BE signed, /100
//!  0x02 pulse counter   1B
//!  0x03 volumes         1B + 1B (metering profile)
//! ```

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::config::{legacy_volume_reference, CodecConfig};
use crate::cursor::Cursor;
use crate::error::{CodecError, Direction, Result};
use crate::record::{Measurement, UplinkInput, VolumeReading};
use crate::tags::{HUMIDITY, PULSE_COUNTER, TEMPERATURE, VOLUMES};

/// Two's-complement sign extension of the low 16 bits of `raw`.
pub fn signed16(raw: u32) -> i16 {
    (raw & 0xffff) as u16 as i16
}

fn hundredths([high, low]: [u8; 2]) -> f64 {
    let raw = (u32::from(high) << 8) | u32::from(low);
    f64::from(signed16(raw)) / 100.0
}

/// Decode one uplink into a [`Measurement`].
///
/// Repeated scalar tags overwrite earlier values; every volume tag appends two
/// readings.
pub fn decode_uplink(input: &UplinkInput, config: &CodecConfig) -> Result<Measurement> {
    let bytes = input.bytes.as_slice();
    if bytes.len() > config.max_uplink_size {
        debug!(
            size = bytes.len(),
            max = config.max_uplink_size,
            "rejecting oversized uplink"
        );
        return Err(CodecError::PayloadTooLong {
            size: bytes.len(),
            max: config.max_uplink_size,
        });
    }

    let mut measurement = Measurement::default();
    let mut cursor = Cursor::new(bytes, Direction::Uplink);

    while let Some(tag) = cursor.next_tag() {
        match tag {
            TEMPERATURE => {
                let value = cursor.take::<2>(tag)?;
                measurement.temperature = Some(hundredths(value));
            }
            HUMIDITY => {
                let value = cursor.take::<2>(tag)?;
                measurement.humidity = Some(hundredths(value));
            }
            PULSE_COUNTER => {
                let [count] = cursor.take::<1>(tag)?;
                measurement.pulse_counter = Some(count);
            }
            VOLUMES if config.profile.supports_volumes() => {
                let pair = cursor.take::<2>(tag)?;
                let reference = input.recv_time.unwrap_or_else(legacy_volume_reference);
                measurement
                    .volumes
                    .get_or_insert_with(Vec::new)
                    .extend(volume_readings(pair, reference, config));
            }
            other => {
                debug!(tag = other, offset = cursor.position() - 1, "unknown uplink tag");
                return Err(cursor.unknown_tag(other));
            }
        }
        trace!(
            tag,
            field = cursor.field_name(tag),
            offset = cursor.position(),
            "decoded uplink field"
        );
    }

    Ok(measurement)
}

/// The older reading sits one interval before `reference`, the newer one at it.
fn volume_readings(
    [first, second]: [u8; 2],
    reference: DateTime<Utc>,
    config: &CodecConfig,
) -> [VolumeReading; 2] {
    let earlier = reference
        .checked_sub_signed(config.volume_interval)
        .unwrap_or(reference);
    [
        VolumeReading {
            time: earlier,
            volume: signed16(u32::from(first)),
        },
        VolumeReading {
            time: reference,
            volume: signed16(u32::from(second)),
        },
    ]
}
