// Host-side tests for the frame driver state machine, using a recording host.

use glam::Vec2;
use lines_core::config::{normalize, FloatingLinesOptions};
use lines_core::driver::{AnimationDriver, DriverState, FrameHost};
use lines_core::surface::SurfaceState;
use lines_core::uniforms::LineUniforms;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Request(u32),
    Cancel(u32),
    Configure(u32, u32),
    Push,
    Render,
    Release,
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<Call>,
    next_handle: u32,
    pending: Vec<u32>,
    pushed: Vec<LineUniforms>,
    fail_render: bool,
    released: bool,
    max_dimension: Option<u32>,
}

impl RecordingHost {
    fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl FrameHost for RecordingHost {
    type Handle = u32;
    type Error = &'static str;

    fn request_frame(&mut self) -> Option<u32> {
        assert!(!self.released, "frame requested after release");
        self.next_handle += 1;
        self.pending.push(self.next_handle);
        self.calls.push(Call::Request(self.next_handle));
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        assert!(!self.released, "cancel must precede release");
        self.pending.retain(|h| *h != handle);
        self.calls.push(Call::Cancel(handle));
    }

    fn configure_surface(&mut self, surface: &SurfaceState) -> SurfaceState {
        self.calls.push(Call::Configure(surface.width, surface.height));
        match self.max_dimension {
            Some(max) => surface.clamped(max),
            None => *surface,
        }
    }

    fn push_uniforms(&mut self, uniforms: &LineUniforms) {
        assert!(!self.released, "uniforms pushed after release");
        self.pushed.push(*uniforms);
        self.calls.push(Call::Push);
    }

    fn render(&mut self) -> Result<(), Self::Error> {
        assert!(!self.released, "render after release");
        self.calls.push(Call::Render);
        if self.fail_render {
            Err("surface lost")
        } else {
            Ok(())
        }
    }

    fn release(&mut self) {
        self.released = true;
        self.calls.push(Call::Release);
    }
}

fn driver(json: &str) -> AnimationDriver<RecordingHost> {
    let opts = FloatingLinesOptions::from_json(json).expect("valid json");
    AnimationDriver::new(normalize(&opts), RecordingHost::default())
}

/// Fire the host's outstanding frame callback, as a browser would.
fn fire(d: &mut AnimationDriver<RecordingHost>, elapsed: f32) {
    let handle = d.host_mut().pending.pop();
    assert!(handle.is_some(), "no frame scheduled");
    d.tick(elapsed);
}

#[test]
fn starts_stopped_and_runs_after_start() {
    let mut d = driver("{}");
    assert_eq!(d.state(), DriverState::Stopped);
    d.tick(0.1);
    assert!(d.host().calls.is_empty(), "ticks before start do nothing");

    d.start(SurfaceState::measure(300.0, 150.0, 2.0));
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.host().calls, vec![Call::Configure(600, 300), Call::Request(1)]);
    assert_eq!(d.uniforms().resolution, [600.0, 300.0]);
}

#[test]
fn tick_orders_smoothing_upload_render_reschedule() {
    let mut d = driver("{}");
    d.start(SurfaceState::measure(100.0, 100.0, 1.0));
    d.pointer_move(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
    fire(&mut d, 0.016);

    let tail = &d.host().calls[2..];
    assert_eq!(tail, &[Call::Push, Call::Render, Call::Request(2)]);
    // smoothing ran before the upload
    let pushed = d.host().pushed[0];
    assert!((pushed.bend_influence - 0.05).abs() < 1e-6);
    assert_eq!(pushed.time, 0.016);
    assert_eq!(d.frames_rendered(), 1);
}

#[test]
fn render_errors_skip_the_frame_but_keep_running() {
    let mut d = driver("{}");
    d.host_mut().fail_render = true;
    d.start(SurfaceState::default());
    fire(&mut d, 0.1);
    fire(&mut d, 0.2);
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.frames_rendered(), 0);
    assert!(d.has_pending_frame());
}

#[test]
fn cleanup_cancels_before_release_and_is_idempotent() {
    let mut d = driver("{}");
    d.start(SurfaceState::default());
    fire(&mut d, 0.1);
    d.cleanup();
    d.cleanup();

    let host = d.host();
    assert_eq!(d.state(), DriverState::Stopped);
    assert!(!d.has_pending_frame());
    assert!(host.pending.is_empty(), "a frame callback is still scheduled");
    assert_eq!(host.count(&Call::Release), 1);
    let n = host.calls.len();
    assert_eq!(&host.calls[n - 2..], &[Call::Cancel(2), Call::Release]);
}

#[test]
fn late_tick_after_cleanup_is_ignored() {
    let mut d = driver("{}");
    d.start(SurfaceState::default());
    d.cleanup();
    let before = d.host().calls.len();
    d.tick(1.0);
    d.pointer_move(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
    d.resize(SurfaceState::measure(50.0, 50.0, 1.0));
    d.start(SurfaceState::default());
    assert_eq!(d.host().calls.len(), before);
    assert_eq!(d.state(), DriverState::Stopped);
}

#[test]
fn cleanup_without_start_still_releases_once() {
    let mut d = driver("{}");
    d.cleanup();
    d.cleanup();
    assert_eq!(d.host().calls, vec![Call::Release]);
}

#[test]
fn resize_is_visible_on_the_next_frame() {
    let mut d = driver("{}");
    d.start(SurfaceState::measure(200.0, 100.0, 1.0));
    fire(&mut d, 0.1);
    d.resize(SurfaceState::measure(640.0, 360.0, 1.5));
    assert!(d.host().calls.contains(&Call::Configure(960, 540)));
    fire(&mut d, 0.2);
    let last = d.host().pushed.last().copied().expect("pushed");
    assert_eq!(last.resolution, [960.0, 540.0]);

    // unchanged size is not reconfigured
    let configures = d.host().calls.iter().filter(|c| matches!(c, Call::Configure(..))).count();
    d.resize(SurfaceState::measure(640.0, 360.0, 1.5));
    let again = d.host().calls.iter().filter(|c| matches!(c, Call::Configure(..))).count();
    assert_eq!(configures, again);
}

#[test]
fn pointer_uses_surface_pixel_ratio() {
    let mut d = driver("{}");
    d.start(SurfaceState::measure(100.0, 100.0, 2.0));
    d.pointer_move(Vec2::new(10.0, 20.0), Vec2::new(100.0, 100.0));
    assert_eq!(d.tracker().state().target_pointer, Vec2::new(20.0, 160.0));
}

#[test]
fn non_interactive_session_never_bends() {
    let mut d = driver(r#"{ "interactive": false }"#);
    d.start(SurfaceState::measure(100.0, 100.0, 1.0));
    for frame in 0..60 {
        d.pointer_move(Vec2::new(frame as f32, 40.0), Vec2::new(100.0, 100.0));
        fire(&mut d, frame as f32 / 60.0);
    }
    d.pointer_leave();
    fire(&mut d, 1.0);
    assert_eq!(d.host().pushed.len(), 61);
    for u in &d.host().pushed {
        assert_eq!(u.bend_influence, 0.0);
        assert!(!u.interactive());
    }
}

#[test]
fn influence_fades_after_pointer_leaves() {
    let mut d = driver("{}");
    d.start(SurfaceState::measure(100.0, 100.0, 1.0));
    d.pointer_move(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
    for i in 0..30 {
        fire(&mut d, i as f32 * 0.016);
    }
    let peak = d.uniforms().bend_influence;
    d.pointer_leave();
    fire(&mut d, 0.5);
    let after = d.uniforms().bend_influence;
    assert!(after > 0.0 && after < peak);
}

#[test]
fn device_limited_surface_drives_resolution_and_pointer() {
    let mut d = driver("{}");
    d.host_mut().max_dimension = Some(8192);
    d.start(SurfaceState::measure(4200.0, 1000.0, 2.0));
    assert_eq!(d.host().calls[0], Call::Configure(8400, 2000));
    assert_eq!((d.surface().width, d.surface().height), (8192, 2000));
    assert_eq!(d.uniforms().resolution, [8192.0, 2000.0]);

    // the right edge of the box maps to the right edge of the drawn extent
    d.pointer_move(Vec2::new(4200.0, 0.0), Vec2::new(4200.0, 1000.0));
    let target = d.tracker().state().target_pointer;
    assert!((target.x - 8192.0).abs() < 1e-2);
    assert!((target.y - 2000.0).abs() < 1e-2);

    fire(&mut d, 0.1);
    assert_eq!(d.host().pushed[0].resolution, [8192.0, 2000.0]);

    // asking for the same oversized box again is not a resize
    let configures = d.host().calls.len();
    d.resize(SurfaceState::measure(4200.0, 1000.0, 2.0));
    assert_eq!(d.host().calls.len(), configures);
}
