//! Tag bytes for both payload directions.
//!
//! Every field in a payload is introduced by a single tag byte. The value
//! width is implied by the tag; there is no length byte on the wire.

/// LoRaWAN application port used for every downlink.
pub const FPORT: u8 = 16;

/// Uplink: temperature, 2 bytes big-endian, signed, hundredths of °C.
pub const TEMPERATURE: u8 = 0x00;

/// Uplink: relative humidity, 2 bytes big-endian, signed, hundredths of %.
pub const HUMIDITY: u8 = 0x01;

/// Uplink: pulse counter, 1 byte.
pub const PULSE_COUNTER: u8 = 0x02;

/// Uplink: two consecutive volume readings, 1 byte each (metering devices only).
pub const VOLUMES: u8 = 0x03;

/// Downlink: pulse counter alarm threshold, 1 byte.
pub const PULSE_COUNTER_THRESHOLD: u8 = 0x00;

/// Downlink: alarm switch, 1 byte (`1` = on).
pub const ALARM: u8 = 0x01;

/// Returns the measurement field name for an uplink tag.
pub fn uplink_tag_name(tag: u8) -> Option<&'static str> {
    match tag {
        TEMPERATURE => Some("temperature"),
        HUMIDITY => Some("humidity"),
        PULSE_COUNTER => Some("pulseCounter"),
        VOLUMES => Some("volumes"),
        _ => None,
    }
}

/// Returns the command field name for a downlink tag.
pub fn downlink_tag_name(tag: u8) -> Option<&'static str> {
    match tag {
        PULSE_COUNTER_THRESHOLD => Some("pulseCounterThreshold"),
        ALARM => Some("alarm"),
        _ => None,
    }
}
