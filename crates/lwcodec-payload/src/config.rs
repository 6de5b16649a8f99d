use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Maximum uplink payload size accepted by default, in bytes.
pub const DEFAULT_MAX_UPLINK_SIZE: usize = 8;

/// Deployment variant of the device firmware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Climate and pulse counter only. Volume tags are rejected.
    #[default]
    Standard,
    /// Standard fields plus hourly volume readings.
    Metering,
}

impl Profile {
    /// Whether uplinks from this profile may carry volume readings.
    pub fn supports_volumes(self) -> bool {
        matches!(self, Profile::Metering)
    }
}

/// Configuration for the payload codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum uplink size in bytes. Default: 8.
    pub max_uplink_size: usize,
    /// Firmware variant deciding which uplink tags are recognized.
    pub profile: Profile,
    /// Spacing between the two readings carried by one volume tag. Default: 1 hour.
    pub volume_interval: Duration,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_uplink_size: DEFAULT_MAX_UPLINK_SIZE,
            profile: Profile::default(),
            volume_interval: Duration::hours(1),
        }
    }
}

/// Reference instant used to stamp volume readings when the uplink carries no
/// reception time. Matches the timestamps legacy metering firmware reported.
pub fn legacy_volume_reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 8, 2, 16, 0, 0)
        .single()
        .unwrap_or_default()
}
