use serde::{Deserialize, Serialize};

/// Shown in place of a value that is not a number.
pub const PLACEHOLDER: &str = "-";

/// Suffix of the temperature label.
pub const TEMPERATURE_UNIT: &str = "°C";

/// Suffix of the rainfall label.
pub const RAINFALL_UNIT: &str = " mm";

/// `dd/MM/yyyy HH:mm:ss`, used for both reading and retrieval timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One update cycle as delivered by a data source. All fields are kept as the source sent them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Reading {
    pub temperature: String,
    pub rainfall: String,
    pub timestamp: String,
}

/// Whether `value` reads as a number, ignoring surrounding whitespace and control characters.
///
/// Accepted forms: an optionally signed decimal with optional exponent (`12`, `.5`, `3.`, `1e400`),
/// a hexadecimal float with binary exponent (`0x1.8p1`), either one followed by a single
/// `f`, `F`, `d` or `D`, and the literals `NaN` and `Infinity`, also signed. Values too large for
/// an `f64` still count.
pub fn is_numeric(value: &str) -> bool {
    let value = value.trim_matches(|c: char| c <= ' ');
    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);

    if unsigned == "NaN" || unsigned == "Infinity" {
        return true;
    }

    let number = unsigned
        .strip_suffix(&['f', 'F', 'd', 'D'][..])
        .unwrap_or(unsigned);
    match number.strip_prefix("0x").or_else(|| number.strip_prefix("0X")) {
        Some(hex) => is_hex_float(hex),
        None => is_decimal_float(number),
    }
}

fn all_digits(digits: &str, radix: u32) -> bool {
    digits.chars().all(|c| c.is_ascii() && c.is_digit(radix))
}

/// `[+-]digits`, at least one digit.
fn is_exponent(exponent: &str) -> bool {
    let digits = exponent.strip_prefix(&['+', '-'][..]).unwrap_or(exponent);
    !digits.is_empty() && all_digits(digits, 10)
}

/// `whole[.fraction]` with at least one digit overall.
fn is_mantissa(mantissa: &str, radix: u32) -> bool {
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    !(whole.is_empty() && fraction.is_empty())
        && all_digits(whole, radix)
        && all_digits(fraction, radix)
}

fn is_decimal_float(number: &str) -> bool {
    match number.split_once(&['e', 'E'][..]) {
        Some((mantissa, exponent)) => is_mantissa(mantissa, 10) && is_exponent(exponent),
        None => is_mantissa(number, 10),
    }
}

/// The binary exponent is mandatory.
fn is_hex_float(number: &str) -> bool {
    match number.split_once(&['p', 'P'][..]) {
        Some((mantissa, exponent)) => is_mantissa(mantissa, 16) && is_exponent(exponent),
        None => false,
    }
}

/// Builds a label: `value` followed by `unit`, or the placeholder followed by `unit` when `value`
/// is not numeric.
pub fn display_value(value: &str, unit: &str) -> String {
    if is_numeric(value) {
        format!("{value}{unit}")
    } else {
        log::debug!("Replacing non-numeric value {value:?} with {PLACEHOLDER:?}");
        format!("{PLACEHOLDER}{unit}")
    }
}

/// Formats a point in time the way the labels expect it.
pub fn format_timestamp(when: &chrono::NaiveDateTime) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}

#[test]
fn test_numeric_values() {
    for value in ["0", "21", "-3", "+4", "18.5", ".5", "3.", "1e3", "2E-4", " 12.0 ", "7\t"] {
        assert!(is_numeric(value), "{value:?} should be numeric");
    }
}

#[test]
fn test_special_numeric_forms() {
    let values = [
        "NaN", "-NaN", "Infinity", "+Infinity", "-Infinity", "12.5d", "3f", "4.0F", "1e5D",
        "1e400", "-1e400", "0x1.8p1", "0X1P-3d",
    ];
    for value in values {
        assert!(is_numeric(value), "{value:?} should be numeric");
    }
}

#[test]
fn test_non_numeric_values() {
    let values = [
        "", " ", "-", "+", ".", "abc", "12,5", "12.5mm", "1.2.3", "1e", "e5", "1e+", "12.5dd",
        "d", "nan", "inf", "-infinity", "Infinityd", "NaN1", "0x1.8", "0x1p", "0xp1", "٣",
    ];
    for value in values {
        assert!(!is_numeric(value), "{value:?} should not be numeric");
    }
}

#[test]
fn test_display_value_keeps_input() {
    assert_eq!(display_value("18.50", TEMPERATURE_UNIT), "18.50°C");
    assert_eq!(display_value("7", RAINFALL_UNIT), "7 mm");
    assert_eq!(display_value("NaN", TEMPERATURE_UNIT), "NaN°C");
    assert_eq!(display_value("-Infinity", TEMPERATURE_UNIT), "-Infinity°C");
    assert_eq!(display_value("12.5d", RAINFALL_UNIT), "12.5d mm");
    assert_eq!(display_value("1e400", RAINFALL_UNIT), "1e400 mm");
}

#[test]
fn test_display_value_placeholder() {
    assert_eq!(display_value("n/a", TEMPERATURE_UNIT), "-°C");
    assert_eq!(display_value("", RAINFALL_UNIT), "- mm");
}

#[test]
fn test_format_timestamp() {
    let when = chrono::NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|date| date.and_hms_opt(9, 5, 1))
        .unwrap();
    assert_eq!(format_timestamp(&when), "07/03/2024 09:05:01");
}
