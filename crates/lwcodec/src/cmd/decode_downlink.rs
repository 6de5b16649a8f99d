use lwcodec_payload::{decode_downlink, DownlinkInput};

use crate::cmd::input::{parse_hex, read_json};
use crate::cmd::DecodeDownlinkArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_command, OutputFormat};

pub fn run(args: DecodeDownlinkArgs, format: OutputFormat) -> CliResult<i32> {
    let input = match &args.hex {
        Some(hex) => DownlinkInput::new(parse_hex(hex)?),
        None => read_json(args.json.as_deref(), args.file.as_deref())?,
    };
    tracing::debug!(len = input.bytes.len(), "decoding downlink");

    let command =
        decode_downlink(&input).map_err(|err| codec_error("downlink decode failed", err))?;
    print_command(&command, format)?;
    Ok(SUCCESS)
}
