//! Theme color helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
///
/// Used to read host theme colors so the survey card can derive its
/// translucent border, accent and score-row variants through [`change_opacity`].
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Render `color` as `rgba(...)` with the given opacity.
///
/// Non-hex inputs (named colors, `rgb(...)`) are returned unchanged.
pub fn change_opacity(color: &str, opacity: f64) -> String {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => format!("rgba({r},{g},{b},{})", opacity.clamp(0.0, 1.0)),
        None => color.trim().to_owned(),
    }
}
