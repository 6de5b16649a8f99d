use crate::record::{Point, PointSet, PointsInput};

/// Project a decoded measurement into points for a time-series sink.
///
/// Scalar points are stamped with `input.time`. Volume points keep the time
/// embedded in each reading.
pub fn extract_points(input: &PointsInput) -> PointSet {
    let message = &input.message;
    let at = |value: f64| Point::new(input.time, value);

    PointSet {
        temperature: message.temperature.map(at),
        humidity: message.humidity.map(at),
        pulse_counter: message
            .pulse_counter
            .map(|count| Point::new(input.time, count)),
        volume: message.volumes.as_ref().map(|readings| {
            readings
                .iter()
                .map(|reading| Point::new(reading.time, reading.volume))
                .collect()
        }),
    }
}
