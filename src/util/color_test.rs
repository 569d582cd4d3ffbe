use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_values() {
    assert_eq!(parse_hex_rgb("abc"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#zzzzzz"), None);
}

#[test]
fn change_opacity_emits_rgba() {
    assert_eq!(change_opacity("#2389d7", 0.5), "rgba(35,137,215,0.5)");
    assert_eq!(change_opacity("#fff", 0.05), "rgba(255,255,255,0.05)");
}

#[test]
fn change_opacity_clamps_alpha() {
    assert_eq!(change_opacity("#000000", 2.0), "rgba(0,0,0,1)");
}

#[test]
fn change_opacity_passes_through_non_hex() {
    assert_eq!(change_opacity("rebeccapurple", 0.3), "rebeccapurple");
}

#[test]
fn host_theme_color_yields_translucent_variant() {
    let theme: crate::net::types::Theme =
        serde_json::from_value(serde_json::json!({"centerChannelColor": "#3f4350"})).unwrap();
    let color = theme.center_channel_color.as_deref().unwrap();
    assert_eq!(parse_hex_rgb(color), Some((0x3f, 0x43, 0x50)));
    assert_eq!(change_opacity(color, 0.16), "rgba(63,67,80,0.16)");
}
