//! Hex color parsing for the `#rrggbb` strings the config file uses.

use glam::Vec3;
use thiserror::Error;

/// Errors returned by [`parse_hex_color`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The string does not start with `#`.
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    /// The string is not exactly `#` followed by six hex digits.
    #[error("color {0:?} must have the form #rrggbb")]
    WrongLength(String),
    /// A channel contains a non-hex character.
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Parse a `#rrggbb` string into an RGB color with channels in `[0.0, 1.0]`.
///
/// Accepts upper- and lowercase digits. Shorthand forms like `#abc` are not
/// supported.
pub fn parse_hex_color(text: &str) -> Result<Vec3, ColorError> {
    let Some(digits) = text.strip_prefix('#') else {
        return Err(ColorError::MissingHash(text.to_owned()));
    };

    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(ColorError::WrongLength(text.to_owned()));
    }

    let mut channels = [0.0f32; 3];
    for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
        let value = hex_pair(pair[0], pair[1])
            .ok_or_else(|| ColorError::InvalidDigit(text.to_owned()))?;
        *channel = value as f32 / 255.0;
    }

    Ok(Vec3::from_array(channels))
}

fn hex_pair(hi: u8, lo: u8) -> Option<u32> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some(hi * 16 + lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_scene_default_colors() {
        let day = parse_hex_color("#00aaff").unwrap();
        assert!((day.x - 0.0).abs() < 1e-6);
        assert!((day.y - 170.0 / 255.0).abs() < 1e-6);
        assert!((day.z - 1.0).abs() < 1e-6);

        let night = parse_hex_color("#ff6600").unwrap();
        assert!((night.x - 1.0).abs() < 1e-6);
        assert!((night.y - 0.4).abs() < 1e-6, "0x66 = 102 = 0.4 of 255");
        assert!((night.z - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_black_and_white_extremes() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Vec3::ZERO);
        assert_eq!(parse_hex_color("#ffffff").unwrap(), Vec3::ONE);
    }

    #[test]
    fn test_uppercase_digits_accepted() {
        let lower = parse_hex_color("#ff6600").unwrap();
        let upper = parse_hex_color("#FF6600").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_missing_hash_rejected() {
        assert!(matches!(
            parse_hex_color("00aaff"),
            Err(ColorError::MissingHash(_))
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            parse_hex_color("#abc"),
            Err(ColorError::WrongLength(_))
        ));
        assert!(matches!(
            parse_hex_color("#00aaff00"),
            Err(ColorError::WrongLength(_))
        ));
        assert!(matches!(parse_hex_color("#"), Err(ColorError::WrongLength(_))));
    }

    #[test]
    fn test_non_hex_digit_rejected() {
        assert!(matches!(
            parse_hex_color("#00gaff"),
            Err(ColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_non_ascii_input_is_an_error_not_a_panic() {
        // Multi-byte characters must fall out as parse errors.
        let result = parse_hex_color("#аааааа");
        assert!(result.is_err());
    }
}
