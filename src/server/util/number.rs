use std::fmt::Display;

/// Inserts `,` thousands separators into the integer part of a number.
///
/// Works on the displayed form of the value so that integers and floats share one
/// implementation. Only the leading run of digits is grouped; a sign and any
/// fractional part are left untouched.
///
/// # Arguments
/// - `value` - Any displayable number
///
/// # Returns
/// - `String` - The number with separators, e.g. `1,234,567`
pub fn add_commas(value: impl Display) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (digits, rest) = unsigned.split_at(digits_end);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, rest)
}
