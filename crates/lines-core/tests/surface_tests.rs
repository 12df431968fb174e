// Host-side tests for drawable sizing.

use lines_core::surface::{clamp_pixel_ratio, SurfaceState};

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    assert_eq!(clamp_pixel_ratio(0.0), 1.0);
    assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn measure_floors_device_pixels() {
    let s = SurfaceState::measure(801.0, 451.0, 1.5);
    assert_eq!((s.width, s.height), (1201, 676));
    assert_eq!(s.pixel_ratio, 1.5);
    assert_eq!(s.resolution(), [1201.0, 676.0]);

    let hi = SurfaceState::measure(640.0, 480.0, 3.0);
    assert_eq!((hi.width, hi.height), (1280, 960));
}

#[test]
fn empty_host_box_becomes_one_css_pixel() {
    let s = SurfaceState::measure(0.0, 0.0, 2.0);
    assert_eq!((s.width, s.height), (2, 2));
    let s = SurfaceState::measure(f64::NAN, -5.0, 1.0);
    assert_eq!((s.width, s.height), (1, 1));
}

#[test]
fn clamped_respects_device_limit() {
    let s = SurfaceState::measure(6000.0, 300.0, 2.0).clamped(8192);
    assert_eq!((s.width, s.height), (8192, 600));
    assert_eq!(s.pixel_ratio, 2.0);
}

#[test]
fn physical_surface_keeps_window_pixels_at_high_scale() {
    // a 3x display: the swapchain matches the window, not a 2x-capped size
    let s = SurfaceState::physical(2400, 1800, 3.0);
    assert_eq!((s.width, s.height), (2400, 1800));
    assert_eq!(s.pixel_ratio, 3.0);
    assert_eq!(s.resolution(), [2400.0, 1800.0]);

    let minimized = SurfaceState::physical(0, 0, f64::NAN);
    assert_eq!((minimized.width, minimized.height), (1, 1));
    assert_eq!(minimized.pixel_ratio, 1.0);
}
