use chrono::Utc;
use lwcodec_payload::{decode_uplink, extract_points, CodecConfig, PointsInput, UplinkInput};

use crate::cmd::input::{parse_hex, parse_time, read_json};
use crate::cmd::ExtractPointsArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_points, OutputFormat};

pub fn run(args: ExtractPointsArgs, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args, config)?;
    let points = extract_points(&input);
    tracing::debug!(count = points.len(), "extracted points");
    print_points(&points, format)?;
    Ok(SUCCESS)
}

/// With `--hex` the uplink is decoded here and its reception time doubles as
/// the scalar event time.
fn resolve_input(args: &ExtractPointsArgs, config: &CodecConfig) -> CliResult<PointsInput> {
    let Some(hex) = &args.hex else {
        return read_json(args.json.as_deref(), args.file.as_deref());
    };

    let time = match &args.time {
        Some(time) => parse_time(time)?,
        None => Utc::now(),
    };
    let uplink = UplinkInput::new(parse_hex(hex)?).with_recv_time(time);
    let message =
        decode_uplink(&uplink, config).map_err(|err| codec_error("uplink decode failed", err))?;
    Ok(PointsInput { message, time })
}
