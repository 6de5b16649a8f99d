use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use lwcodec_payload::{Command, DownlinkMessage, Measurement, Point, PointSet, PointValue};
use serde::Serialize;

use crate::exit::{json_error, CliResult};

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    /// Encoded bytes for `encode-downlink`; JSON for every other command.
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// A labelled row: field name, value, and optional timestamp.
struct Row {
    field: String,
    value: String,
    time: Option<String>,
}

impl Row {
    fn new(field: &str, value: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            time: None,
        }
    }

    fn at(mut self, time: impl ToString) -> Self {
        self.time = Some(time.to_string());
        self
    }
}

pub fn print_measurement(measurement: &Measurement, format: OutputFormat) -> CliResult<()> {
    let mut rows = Vec::new();
    if let Some(t) = measurement.temperature {
        rows.push(Row::new("temperature", t));
    }
    if let Some(h) = measurement.humidity {
        rows.push(Row::new("humidity", h));
    }
    if let Some(c) = measurement.pulse_counter {
        rows.push(Row::new("pulseCounter", c));
    }
    for reading in measurement.volumes.iter().flatten() {
        rows.push(Row::new("volume", reading.volume).at(reading.time.to_rfc3339()));
    }
    print_record(measurement, &rows, format)
}

pub fn print_command(command: &Command, format: OutputFormat) -> CliResult<()> {
    let mut rows = Vec::new();
    if let Some(threshold) = command.pulse_counter_threshold {
        rows.push(Row::new("pulseCounterThreshold", threshold));
    }
    if let Some(alarm) = command.alarm {
        rows.push(Row::new("alarm", alarm));
    }
    print_record(command, &rows, format)
}

pub fn print_downlink(message: &DownlinkMessage, format: OutputFormat) -> CliResult<()> {
    if format == OutputFormat::Raw {
        print_raw(message.bytes.as_ref());
        return Ok(());
    }
    let rows = vec![
        Row::new("bytes", hex::encode(message.bytes.as_ref())),
        Row::new("fPort", message.f_port),
    ];
    print_record(message, &rows, format)
}

pub fn print_points(points: &PointSet, format: OutputFormat) -> CliResult<()> {
    let mut rows = Vec::new();
    let mut scalar = |name: &str, point: &Option<Point>| {
        if let Some(point) = point {
            rows.push(point_row(name, point));
        }
    };
    scalar("temperature", &points.temperature);
    scalar("humidity", &points.humidity);
    scalar("pulseCounter", &points.pulse_counter);
    for point in points.volume.iter().flatten() {
        rows.push(point_row("volume", point));
    }
    print_record(points, &rows, format)
}

fn point_row(name: &str, point: &Point) -> Row {
    let value = match point.value {
        PointValue::Integer(v) => v.to_string(),
        PointValue::Decimal(v) => v.to_string(),
    };
    Row::new(name, value).at(point.event_time.to_rfc3339())
}

fn print_record<T: Serialize>(record: &T, rows: &[Row], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => {
            let json = serde_json::to_string(record)
                .map_err(|err| json_error("failed to serialize output", err))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            let with_time = rows.iter().any(|r| r.time.is_some());
            let mut header = vec!["FIELD", "VALUE"];
            if with_time {
                header.push("TIME");
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(header);
            for row in rows {
                let mut cells = vec![row.field.clone(), row.value.clone()];
                if with_time {
                    cells.push(row.time.clone().unwrap_or_else(|| "-".to_string()));
                }
                table.add_row(cells);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{}", pretty_line(rows));
        }
    }
    Ok(())
}

fn pretty_line(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "(empty)".to_string();
    }
    rows.iter()
        .map(|row| match &row.time {
            Some(time) => format!("{}={}@{}", row.field, row.value, time),
            None => format!("{}={}", row.field, row.value),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
