use lwcodec_payload::{CodecConfig, FPORT};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs, config: &CodecConfig) -> CliResult<i32> {
    if !args.extended {
        println!("lwcodec {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: lwcodec");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("LWCODEC_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "build_profile: {}",
        option_env!("LWCODEC_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("device_profile: {:?}", config.profile);
    println!("max_uplink_size: {}", config.max_uplink_size);
    println!("downlink_fport: {FPORT}");

    Ok(SUCCESS)
}
