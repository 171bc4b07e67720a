use qrstamp::config::{ErrorCorrection, QrConfig};
use qrstamp::encode;

const URL: &str = "https://example.com";

#[test]
fn fixed_version_module_count() {
    let qr = QrConfig {
        version: Some(4),
        ..Default::default()
    };
    let code = encode::encode(URL, &qr).unwrap();

    // Version 4 is a 33x33 module grid.
    assert_eq!(code.width(), 33);
    assert_eq!(encode::version_number(&code), 4);
}

#[test]
fn rendered_dimensions() {
    let qr = QrConfig {
        version: Some(4),
        ..Default::default()
    };
    let code = encode::encode(URL, &qr).unwrap();
    let img = encode::render(&code, &qr);

    // (33 modules + 2 * 4 border) * 10 px
    assert_eq!(img.dimensions(), (410, 410));
}

#[test]
fn rendered_dimensions_custom_box_and_border() {
    let qr = QrConfig {
        version: Some(4),
        box_size: 3,
        border: 2,
        ..Default::default()
    };
    let code = encode::encode(URL, &qr).unwrap();
    let img = encode::render(&code, &qr);

    assert_eq!(img.dimensions(), (111, 111));
}

#[test]
fn quiet_zone_and_finder_pattern_colors() {
    let qr = QrConfig {
        version: Some(4),
        fill_color: "#102030".parse().unwrap(),
        back_color: "#fafafa".parse().unwrap(),
        ..Default::default()
    };
    let code = encode::encode(URL, &qr).unwrap();
    let img = encode::render(&code, &qr);

    // Top-left corner lies in the quiet zone.
    assert_eq!(*img.get_pixel(0, 0), qr.back_color.0);

    // Module (0, 0) is the corner of a finder pattern, always dark.
    let first_module = qr.border * qr.box_size;
    assert_eq!(*img.get_pixel(first_module, first_module), qr.fill_color.0);
}

#[test]
fn payload_too_long_for_fixed_version() {
    let qr = QrConfig {
        version: Some(1),
        ..Default::default()
    };
    let err = encode::encode(&"a".repeat(100), &qr).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("too long"), "{msg}");
    assert!(msg.contains("version 1"), "{msg}");
}

#[test]
fn auto_size_grows_version() {
    let qr = QrConfig::default();
    let code = encode::encode(&"a".repeat(100), &qr).unwrap();

    assert!(encode::version_number(&code) > 1);
}

#[test]
fn auto_size_respects_error_correction() {
    let low = QrConfig {
        error_correction: ErrorCorrection::L,
        ..Default::default()
    };
    let high = QrConfig::default();

    let payload = "a".repeat(100);
    let low_code = encode::encode(&payload, &low).unwrap();
    let high_code = encode::encode(&payload, &high).unwrap();

    // Level H stores more correction data, so it needs at least as many modules.
    assert!(encode::version_number(&high_code) >= encode::version_number(&low_code));
}

#[test]
fn render_is_deterministic() {
    let qr = QrConfig {
        version: Some(4),
        ..Default::default()
    };
    let code = encode::encode(URL, &qr).unwrap();

    assert_eq!(encode::render(&code, &qr), encode::render(&code, &qr));
}

#[test]
fn terminal_string_shape() {
    let qr = QrConfig {
        version: Some(1),
        border: 2,
        ..Default::default()
    };
    let code = encode::encode("hi", &qr).unwrap();
    let rendered = encode::to_terminal_string(&code, qr.border);

    let lines: Vec<&str> = rendered.lines().collect();
    let edge = 21 + 2 * 2; // version 1 modules + border on both sides
    assert_eq!(lines.len(), edge);
    for line in lines {
        assert_eq!(line.chars().count(), edge * 2);
    }
}
