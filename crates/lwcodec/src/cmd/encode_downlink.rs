use lwcodec_payload::{encode_downlink, Command};

use crate::cmd::input::read_json;
use crate::cmd::EncodeDownlinkArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_downlink, OutputFormat};

pub fn run(args: EncodeDownlinkArgs, format: OutputFormat) -> CliResult<i32> {
    let command = resolve_command(&args)?;
    tracing::debug!(?command, "encoding downlink");

    let message =
        encode_downlink(&command).map_err(|err| codec_error("downlink encode failed", err))?;
    tracing::info!(
        len = message.bytes.len(),
        f_port = message.f_port,
        "downlink encoded"
    );
    print_downlink(&message, format)?;
    Ok(SUCCESS)
}

fn resolve_command(args: &EncodeDownlinkArgs) -> CliResult<Command> {
    if args.json.is_some() {
        return read_json(args.json.as_deref(), None);
    }
    Ok(Command {
        pulse_counter_threshold: args.threshold,
        alarm: args.alarm,
    })
}
