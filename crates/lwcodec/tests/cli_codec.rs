#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn lwcodec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lwcodec"))
        .env_remove("LWCODEC_PROFILE")
        .env_remove("LWCODEC_MAX_UPLINK_SIZE")
        .env_remove("LWCODEC_LOG_LEVEL")
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("lwcodec should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "lwcodec-{tag}-{}-{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn decode_uplink_prints_measurement() {
    let output = lwcodec(&["--format", "json", "decode-uplink", "000c44010c44020c"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"temperature": 31.4, "humidity": 31.4, "pulseCounter": 12})
    );
}

#[test]
fn oversized_uplink_exits_60() {
    let output = lwcodec(&["--format", "json", "decode-uplink", "000c44010c44020caa"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid uplink payload: length exceeds 8 bytes"));
}

#[test]
fn volume_tag_depends_on_profile() {
    let standard = lwcodec(&["--format", "json", "decode-uplink", "030102"]);
    assert_eq!(standard.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&standard.stderr).contains("unknown id '3'"));

    let metering = lwcodec(&[
        "--format",
        "json",
        "--profile",
        "metering",
        "decode-uplink",
        "030102",
        "--recv-time",
        "2024-01-01T10:00:00Z",
    ]);
    assert!(metering.status.success());
    assert_eq!(
        stdout_json(&metering),
        serde_json::json!({"volumes": [
            {"time": "2024-01-01T09:00:00Z", "volume": 1},
            {"time": "2024-01-01T10:00:00Z", "volume": 2}
        ]})
    );
}

#[test]
fn encode_downlink_json_and_raw() {
    let output = lwcodec(&[
        "--format",
        "json",
        "encode-downlink",
        "--threshold",
        "10",
        "--alarm",
        "true",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"bytes": [0, 10, 1, 1], "fPort": 16})
    );

    let raw = lwcodec(&["--format", "raw", "encode-downlink", "--alarm", "false"]);
    assert!(raw.status.success());
    assert_eq!(raw.stdout, vec![0x01, 0x00]);
}

#[test]
fn encode_downlink_threshold_out_of_range() {
    let output = lwcodec(&[
        "--format",
        "json",
        "encode-downlink",
        "--json",
        r#"{"pulseCounterThreshold":256}"#,
    ]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("pulseCounterThreshold cannot exceed 255"));
}

#[test]
fn decode_downlink_from_file() {
    let path = unique_temp_file("downlink");
    std::fs::write(&path, r#"{"bytes":[0,10,1,1]}"#).expect("input file should be writable");

    let output = lwcodec(&[
        "--format",
        "json",
        "decode-downlink",
        "--file",
        path.to_str().expect("temp path should be utf-8"),
    ]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"pulseCounterThreshold": 10, "alarm": true})
    );
}

#[test]
fn decode_downlink_unknown_tag() {
    let output = lwcodec(&["--format", "json", "decode-downlink", "000a02"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Invalid downlink payload: unknown id '2'"));
}

#[test]
fn extract_points_from_json() {
    let output = lwcodec(&[
        "--format",
        "json",
        "extract-points",
        "--json",
        r#"{"message":{"pulseCounter":10},"time":"2024-05-10T08:30:00Z"}"#,
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"pulseCounter": {"eventTime": "2024-05-10T08:30:00Z", "value": 10}})
    );
}

#[test]
fn extract_points_rejects_legacy_temp_key() {
    let output = lwcodec(&[
        "--format",
        "json",
        "extract-points",
        "--json",
        r#"{"message":{"temp":31.4},"time":"2024-01-01T00:00:00Z"}"#,
    ]);
    assert_eq!(output.status.code(), Some(60));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown field `temp`"));
}

#[test]
fn extract_points_time_needs_hex() {
    let output = lwcodec(&[
        "--format",
        "json",
        "extract-points",
        "--json",
        r#"{"message":{"pulseCounter":10},"time":"2024-05-10T08:30:00Z"}"#,
        "--time",
        "2030-01-01T00:00:00Z",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn encoded_downlink_decodes_back() {
    let encoded = lwcodec(&["--format", "json", "encode-downlink", "--threshold", "7"]);
    assert!(encoded.status.success());
    let json = String::from_utf8_lossy(&encoded.stdout).trim().to_string();

    let decoded = lwcodec(&["--format", "json", "decode-downlink", "--json", &json]);
    assert!(decoded.status.success());
    assert_eq!(
        stdout_json(&decoded),
        serde_json::json!({"pulseCounterThreshold": 7})
    );
}

#[test]
fn extract_points_from_hex() {
    let output = lwcodec(&[
        "--format",
        "pretty",
        "extract-points",
        "--hex",
        "000c44",
        "--time",
        "2024-05-10T08:30:00Z",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "temperature=31.4@2024-05-10T08:30:00+00:00"
    );
}

#[test]
fn invalid_hex_exits_60() {
    let output = lwcodec(&["--format", "json", "decode-uplink", "00c"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid hex payload"));
}

#[test]
fn version_prints_package_version() {
    let output = lwcodec(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("lwcodec {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn extended_version_reports_codec_settings() {
    let output = lwcodec(&["--profile", "metering", "version", "--extended"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("device_profile: Metering"));
    assert!(stdout.contains("max_uplink_size: 8"));
    assert!(stdout.contains("downlink_fport: 16"));
}
