/// Formats a duration in milliseconds as `M:SS.mmm`.
///
/// Minutes are unpadded, seconds are padded to two digits and milliseconds to three.
/// Negative or non-finite input is logged as a warning and still formatted from the
/// raw value.
///
/// # Arguments
/// - `milliseconds` - Elapsed time in milliseconds
///
/// # Returns
/// - `String` - The formatted clock string, e.g. `1:05.432`
pub fn format_elapsed(milliseconds: f64) -> String {
    if !milliseconds.is_finite() || milliseconds < 0.0 {
        tracing::warn!(
            "Number given is not a positive finite number: {}",
            milliseconds
        );
    }

    let minutes = (milliseconds / 60_000.0).floor();
    let seconds = ((milliseconds % 60_000.0) / 1_000.0).floor().to_string();
    let millis = ((milliseconds % 60_000.0) % 1_000.0).floor().to_string();

    format!("{}:{:0>2}.{:0>3}", minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests formatting a duration longer than a minute.
    ///
    /// Expected: `1:05.432`
    #[test]
    fn formats_minutes_seconds_and_millis() {
        assert_eq!(format_elapsed(65_432.0), "1:05.432");
    }

    /// Tests formatting a duration shorter than a second.
    ///
    /// Expected: `0:00.999`
    #[test]
    fn formats_sub_second_duration() {
        assert_eq!(format_elapsed(999.0), "0:00.999");
    }

    /// Tests that minutes are not padded.
    ///
    /// Expected: `12:00.007`
    #[test]
    fn leaves_minutes_unpadded() {
        assert_eq!(format_elapsed(720_007.0), "12:00.007");
    }

    /// Tests that fractional milliseconds are floored.
    ///
    /// Expected: `0:01.000`
    #[test]
    fn floors_fractional_milliseconds() {
        assert_eq!(format_elapsed(1_000.9), "0:01.000");
    }

    /// Tests that negative input still produces output instead of failing.
    ///
    /// Expected: a non-empty best-effort string
    #[test]
    fn negative_input_is_best_effort() {
        let formatted = format_elapsed(-1_500.0);
        assert!(formatted.starts_with("-1:"));
    }
}
