mod cmd;
mod exit;
mod logging;
mod output;

use clap::{Parser, ValueEnum};
use lwcodec_payload::{CodecConfig, Profile, DEFAULT_MAX_UPLINK_SIZE};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

/// Device firmware variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Temperature, humidity and pulse counter.
    Standard,
    /// Standard fields plus volume readings.
    Metering,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Standard => Profile::Standard,
            ProfileArg::Metering => Profile::Metering,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lwcodec", version, about = "LoRaWAN sensor payload codec")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "LWCODEC_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Device firmware variant deciding which uplink tags are accepted.
    #[arg(
        long,
        value_name = "PROFILE",
        default_value = "standard",
        env = "LWCODEC_PROFILE",
        global = true
    )]
    profile: ProfileArg,

    /// Largest uplink accepted, in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_UPLINK_SIZE,
        env = "LWCODEC_MAX_UPLINK_SIZE",
        global = true
    )]
    max_uplink_size: usize,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn codec_config(&self) -> CodecConfig {
        CodecConfig {
            max_uplink_size: self.max_uplink_size,
            profile: self.profile.into(),
            ..CodecConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let config = cli.codec_config();
    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, &config, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
