use lwcodec_payload::{decode_uplink, CodecConfig, UplinkInput};

use crate::cmd::input::{parse_hex, parse_time, read_json};
use crate::cmd::DecodeUplinkArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_measurement, OutputFormat};

pub fn run(args: DecodeUplinkArgs, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args)?;
    tracing::debug!(
        len = input.bytes.len(),
        profile = ?config.profile,
        "decoding uplink"
    );

    let measurement =
        decode_uplink(&input, config).map_err(|err| codec_error("uplink decode failed", err))?;
    print_measurement(&measurement, format)?;
    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeUplinkArgs) -> CliResult<UplinkInput> {
    let mut input = match &args.hex {
        Some(hex) => UplinkInput::new(parse_hex(hex)?),
        None => read_json(args.json.as_deref(), args.file.as_deref())?,
    };
    if let Some(recv_time) = &args.recv_time {
        input.recv_time = Some(parse_time(recv_time)?);
    }
    Ok(input)
}
