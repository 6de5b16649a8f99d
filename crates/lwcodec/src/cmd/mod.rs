use clap::{Args, Subcommand};
use lwcodec_payload::CodecConfig;
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode_downlink;
pub mod decode_uplink;
pub mod encode_downlink;
pub mod extract_points;
pub mod input;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a device uplink into measurements.
    DecodeUplink(DecodeUplinkArgs),
    /// Decode downlink bytes back into a command.
    DecodeDownlink(DecodeDownlinkArgs),
    /// Encode a command into downlink bytes.
    EncodeDownlink(EncodeDownlinkArgs),
    /// Turn a decoded uplink into timestamped points.
    ExtractPoints(ExtractPointsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::DecodeUplink(args) => decode_uplink::run(args, config, format),
        Command::DecodeDownlink(args) => decode_downlink::run(args, format),
        Command::EncodeDownlink(args) => encode_downlink::run(args, format),
        Command::ExtractPoints(args) => extract_points::run(args, config, format),
        Command::Version(args) => version::run(args, config),
    }
}

#[derive(Args, Debug)]
pub struct DecodeUplinkArgs {
    /// Payload as hex (e.g. 000c44).
    #[arg(required_unless_present_any = ["json", "file"], conflicts_with_all = ["json", "file"])]
    pub hex: Option<String>,
    /// Uplink input as JSON: {"bytes":[...],"recvTime":"..."}.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON uplink input from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Frame reception time (RFC 3339), used to stamp volume readings.
    #[arg(long, value_name = "TIME")]
    pub recv_time: Option<String>,
}

#[derive(Args, Debug)]
pub struct DecodeDownlinkArgs {
    /// Payload as hex (e.g. 000a0101).
    #[arg(required_unless_present_any = ["json", "file"], conflicts_with_all = ["json", "file"])]
    pub hex: Option<String>,
    /// Downlink input as JSON: {"bytes":[...]}.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON downlink input from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EncodeDownlinkArgs {
    /// Pulse counter alarm threshold (0-255).
    #[arg(long, conflicts_with = "json")]
    pub threshold: Option<u32>,
    /// Switch the alarm on or off.
    #[arg(long, value_name = "BOOL", conflicts_with = "json")]
    pub alarm: Option<bool>,
    /// Command as JSON: {"pulseCounterThreshold":10,"alarm":true}.
    #[arg(long)]
    pub json: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExtractPointsArgs {
    /// Points input as JSON: {"message":{...},"time":"..."}.
    #[arg(long, conflicts_with_all = ["file", "hex"])]
    pub json: Option<String>,
    /// Read the JSON points input from a file.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
    /// Decode this uplink hex payload first, then extract its points.
    #[arg(long, required_unless_present_any = ["json", "file"])]
    pub hex: Option<String>,
    /// Event time for scalar points with --hex (RFC 3339). Default: now.
    #[arg(
        long,
        value_name = "TIME",
        requires = "hex",
        conflicts_with_all = ["json", "file"]
    )]
    pub time: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
