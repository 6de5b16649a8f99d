use crate::config::CodecConfig;
use crate::downlink::{decode_downlink, encode_downlink};
use crate::error::Result;
use crate::points::extract_points;
use crate::record::{
    Command, DownlinkInput, DownlinkMessage, Measurement, PointSet, PointsInput, UplinkInput,
};
use crate::uplink::decode_uplink;

/// The four payload operations bound to one configuration.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Current codec configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode_uplink(&self, input: &UplinkInput) -> Result<Measurement> {
        decode_uplink(input, &self.config)
    }

    pub fn decode_downlink(&self, input: &DownlinkInput) -> Result<Command> {
        decode_downlink(input)
    }

    pub fn encode_downlink(&self, command: &Command) -> Result<DownlinkMessage> {
        encode_downlink(command)
    }

    pub fn extract_points(&self, input: &PointsInput) -> PointSet {
        extract_points(input)
    }
}
