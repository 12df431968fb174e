// Host-side tests for hex color resolution.

use lines_core::color::{resolve_color, Rgb};

fn close(a: Rgb, b: Rgb, eps: f32) -> bool {
    (a.r - b.r).abs() <= eps && (a.g - b.g).abs() <= eps && (a.b - b.b).abs() <= eps
}

#[test]
fn six_digit_form_with_and_without_marker() {
    let red = resolve_color("#ff0000");
    assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(resolve_color("ff0000"), red);
    assert_eq!(resolve_color("  #FF0000 "), red);

    let c = resolve_color("#2f4ba2");
    assert!(close(c, Rgb::new(47.0 / 255.0, 75.0 / 255.0, 162.0 / 255.0), 1e-6));
}

#[test]
fn three_digit_form_expands_each_digit() {
    assert_eq!(resolve_color("#0f0"), Rgb::new(0.0, 1.0, 0.0));
    assert_eq!(resolve_color("abc"), resolve_color("#aabbcc"));
}

#[test]
fn malformed_specs_fall_back_to_white() {
    for spec in ["", "#", "12", "#1234", "zzzzzz", "#ggg", "#12345g", "#+fffff", "##fff", "ééé"] {
        assert_eq!(resolve_color(spec), Rgb::WHITE, "spec {spec:?}");
    }
}

#[test]
fn channels_stay_normalized() {
    for spec in ["#000", "#fff", "#7f7f7f", "#123456", "#abcdef", "#f0a"] {
        let c = resolve_color(spec);
        for ch in [c.r, c.g, c.b] {
            assert!((0.0..=1.0).contains(&ch), "{spec} -> {ch}");
        }
    }
}

#[test]
fn hex_round_trip_is_within_one_step() {
    let step = 1.0 / 255.0;
    let samples = [0.0, 0.1, 0.333, 0.5, 0.74, 0.999, 1.0];
    for &r in &samples {
        for &g in &samples {
            let c = Rgb::new(r, g, 1.0 - r);
            let back = resolve_color(&c.to_hex());
            assert!(close(c, back, step), "{c:?} -> {} -> {back:?}", c.to_hex());
        }
    }
    // exact 8-bit values survive unchanged
    let exact = Rgb::from_bytes(233, 71, 245);
    assert_eq!(exact.to_hex(), "#e947f5");
    assert_eq!(resolve_color(&exact.to_hex()), exact);
}
