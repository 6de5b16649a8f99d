//! Downlink encoding and decoding: device commands.
//!
//! Every downlink field is a tag byte followed by exactly one value byte:
//! ```text
//! ┌─────────┬───────────┐
//! │ Tag (1B)│ Value (1B)│ ...
//! └─────────┴───────────┘
//!  0x00 pulse counter threshold (0..=255)
//!  0x01 alarm (1 = on, anything else = off)
//! ```

use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{CodecError, Direction, Result};
use crate::record::{Command, DownlinkInput, DownlinkMessage};
use crate::tags::{ALARM, PULSE_COUNTER_THRESHOLD};

/// Encode a command into downlink bytes routed on [`FPORT`](crate::tags::FPORT).
///
/// Fields are written in a fixed order regardless of how the command was built.
pub fn encode_downlink(command: &Command) -> Result<DownlinkMessage> {
    let mut dst = BytesMut::with_capacity(4);

    if let Some(threshold) = command.pulse_counter_threshold {
        let value = u8::try_from(threshold).map_err(|_| {
            debug!(threshold, "pulse counter threshold out of range");
            CodecError::ThresholdOutOfRange { value: threshold }
        })?;
        dst.put_u8(PULSE_COUNTER_THRESHOLD);
        dst.put_u8(value);
    }

    if let Some(alarm) = command.alarm {
        dst.put_u8(ALARM);
        dst.put_u8(u8::from(alarm));
    }

    trace!(len = dst.len(), "encoded downlink");
    Ok(DownlinkMessage::new(dst.freeze()))
}

/// Decode downlink bytes back into the command they carry.
pub fn decode_downlink(input: &DownlinkInput) -> Result<Command> {
    let mut command = Command::default();
    let mut cursor = Cursor::new(&input.bytes, Direction::Downlink);

    while let Some(tag) = cursor.next_tag() {
        match tag {
            PULSE_COUNTER_THRESHOLD => {
                let [value] = cursor.take::<1>(tag)?;
                command.pulse_counter_threshold = Some(u32::from(value));
            }
            ALARM => {
                let [value] = cursor.take::<1>(tag)?;
                command.alarm = Some(value == 1);
            }
            other => {
                debug!(tag = other, offset = cursor.position() - 1, "unknown downlink tag");
                return Err(cursor.unknown_tag(other));
            }
        }
        trace!(
            tag,
            field = cursor.field_name(tag),
            offset = cursor.position(),
            "decoded downlink field"
        );
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::FPORT;

    fn decode(bytes: &[u8]) -> Result<Command> {
        decode_downlink(&DownlinkInput::new(bytes))
    }

    #[test]
    fn encode_threshold_only() {
        let msg = encode_downlink(&Command {
            pulse_counter_threshold: Some(10),
            alarm: None,
        })
        .unwrap();
        assert_eq!(msg.bytes.as_ref(), &[0x00, 0x0a]);
        assert_eq!(msg.f_port, 16);
    }

    #[test]
    fn encode_alarm_only() {
        let msg = encode_downlink(&Command {
            pulse_counter_threshold: None,
            alarm: Some(true),
        })
        .unwrap();
        assert_eq!(msg.bytes.as_ref(), &[0x01, 0x01]);
    }

    #[test]
    fn encode_alarm_off() {
        let msg = encode_downlink(&Command {
            pulse_counter_threshold: None,
            alarm: Some(false),
        })
        .unwrap();
        assert_eq!(msg.bytes.as_ref(), &[0x01, 0x00]);
    }

    #[test]
    fn encode_both_fields_in_fixed_order() {
        let msg = encode_downlink(&Command {
            pulse_counter_threshold: Some(10),
            alarm: Some(true),
        })
        .unwrap();
        assert_eq!(msg.bytes.as_ref(), &[0x00, 0x0a, 0x01, 0x01]);
        assert_eq!(msg.f_port, FPORT);
    }

    #[test]
    fn encode_empty_command() {
        let msg = encode_downlink(&Command::default()).unwrap();
        assert!(msg.bytes.is_empty());
        assert_eq!(msg.f_port, FPORT);
    }

    #[test]
    fn encode_rejects_threshold_over_255() {
        let err = encode_downlink(&Command {
            pulse_counter_threshold: Some(256),
            alarm: Some(true),
        })
        .unwrap_err();
        assert_eq!(err, CodecError::ThresholdOutOfRange { value: 256 });
        assert_eq!(
            err.to_string(),
            "Invalid downlink: pulseCounterThreshold cannot exceed 255"
        );
    }

    #[test]
    fn decode_threshold_only() {
        assert_eq!(
            decode(&[0x00, 0x0a]).unwrap(),
            Command {
                pulse_counter_threshold: Some(10),
                alarm: None,
            }
        );
    }

    #[test]
    fn decode_alarm_only() {
        assert_eq!(
            decode(&[0x01, 0x01]).unwrap(),
            Command {
                pulse_counter_threshold: None,
                alarm: Some(true),
            }
        );
    }

    #[test]
    fn decode_alarm_treats_non_one_as_off() {
        assert_eq!(decode(&[0x01, 0x02]).unwrap().alarm, Some(false));
    }

    #[test]
    fn decode_both_fields() {
        assert_eq!(
            decode(&[0x00, 0x0a, 0x01, 0x01]).unwrap(),
            Command {
                pulse_counter_threshold: Some(10),
                alarm: Some(true),
            }
        );
    }

    #[test]
    fn decode_truncated_threshold() {
        let err = decode(&[0x00, 0x0a, 0x00]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid downlink payload: index out of bounds when reading pulseCounterThreshold"
        );
    }

    #[test]
    fn decode_truncated_alarm() {
        let err = decode(&[0x00, 0x0a, 0x01]).unwrap_err();
        assert_eq!(
            err,
            CodecError::IndexOutOfBounds {
                direction: Direction::Downlink,
                field: "alarm",
            }
        );
    }

    #[test]
    fn decode_unknown_tag() {
        let err = decode(&[0x00, 0x0a, 0x02]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid downlink payload: unknown id '2'");
    }

    #[test]
    fn round_trip_every_threshold_and_alarm() {
        for threshold in [None, Some(0), Some(1), Some(127), Some(255)] {
            for alarm in [None, Some(false), Some(true)] {
                let command = Command {
                    pulse_counter_threshold: threshold,
                    alarm,
                };
                let msg = encode_downlink(&command).unwrap();
                let decoded = decode(msg.bytes.as_ref()).unwrap();
                assert_eq!(decoded, command);
            }
        }
    }
}
