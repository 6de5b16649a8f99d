//! Structured records exchanged with callers.
//!
//! Every optional field is present only when the matching tag occurred in the
//! payload (or the caller set it). Absent is not the same as zero, so absent
//! fields are omitted from the JSON form instead of being written as `null`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags::FPORT;

/// Raw uplink as handed over by the network server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UplinkInput {
    pub bytes: Vec<u8>,
    /// Frame reception time, used to stamp volume readings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_time: Option<DateTime<Utc>>,
}

impl UplinkInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            recv_time: None,
        }
    }

    pub fn with_recv_time(mut self, recv_time: DateTime<Utc>) -> Self {
        self.recv_time = Some(recv_time);
        self
    }
}

/// Raw downlink bytes to be decoded back into a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownlinkInput {
    pub bytes: Vec<u8>,
    /// Port the bytes were sent on. Accepted so encoder output can be fed back
    /// in; decoding does not look at it.
    #[serde(default, rename = "fPort", skip_serializing_if = "Option::is_none")]
    pub f_port: Option<u8>,
}

impl DownlinkInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            f_port: None,
        }
    }
}

/// One dated volume reading from a metering device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeReading {
    pub time: DateTime<Utc>,
    pub volume: i16,
}

/// Measurements decoded from one uplink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Measurement {
    /// Degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_counter: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<VolumeReading>>,
}

impl Measurement {
    /// True when no tag was decoded.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.humidity.is_none()
            && self.pulse_counter.is_none()
            && self.volumes.is_none()
    }
}

/// Configuration command for the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Command {
    /// Pulse count above which the device raises its alarm. Valid range 0..=255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_counter_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm: Option<bool>,
}

/// Encoded downlink ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownlinkMessage {
    pub bytes: Bytes,
    #[serde(rename = "fPort")]
    pub f_port: u8,
}

impl DownlinkMessage {
    pub(crate) fn new(bytes: Bytes) -> Self {
        Self {
            bytes,
            f_port: FPORT,
        }
    }
}

/// A decoded uplink paired with the time it should be recorded at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointsInput {
    pub message: Measurement,
    pub time: DateTime<Utc>,
}

/// Numeric value of a telemetry point.
///
/// Integer measurements stay integers so sinks do not see `10.0` for a counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    Integer(i64),
    Decimal(f64),
}

impl From<f64> for PointValue {
    fn from(value: f64) -> Self {
        PointValue::Decimal(value)
    }
}

impl From<u8> for PointValue {
    fn from(value: u8) -> Self {
        PointValue::Integer(i64::from(value))
    }
}

impl From<i16> for PointValue {
    fn from(value: i16) -> Self {
        PointValue::Integer(i64::from(value))
    }
}

/// A single timestamped value for the time-series sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub event_time: DateTime<Utc>,
    pub value: PointValue,
}

impl Point {
    pub fn new(event_time: DateTime<Utc>, value: impl Into<PointValue>) -> Self {
        Self {
            event_time,
            value: value.into(),
        }
    }
}

/// Points extracted from one measurement, keyed by measurement name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_counter: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Vec<Point>>,
}

impl PointSet {
    /// Total number of points, counting each volume point.
    pub fn len(&self) -> usize {
        [&self.temperature, &self.humidity, &self.pulse_counter]
            .into_iter()
            .filter(|p| p.is_some())
            .count()
            + self.volume.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
