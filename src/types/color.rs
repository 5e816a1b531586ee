use crate::constants::RGBA_COLOR_REGEX;

/// Converts an `rgb(..)`/`rgba(..)` color to `#rrggbb`, dropping the alpha channel.
///
/// Hex input is returned as is, and so is anything the pattern does not match.
pub fn rgba_to_hex(color: &str) -> String {
    if color.starts_with('#') {
        return color.to_owned();
    }
    let captures = match RGBA_COLOR_REGEX.captures(color) {
        Some(captures) => captures,
        None => return color.to_owned(),
    };
    let channels = (1..=3)
        .map(|index| {
            captures
                .get(index)
                .and_then(|channel| channel.as_str().parse::<u64>().ok())
        })
        .collect::<Option<Vec<_>>>();
    match channels {
        Some(channels) => channels
            .iter()
            .fold("#".to_owned(), |hex, channel| format!("{hex}{channel:02x}")),
        None => color.to_owned(),
    }
}
