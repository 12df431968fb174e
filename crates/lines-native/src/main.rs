use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use lines_core::config::{normalize, FloatingLinesOptions};
use lines_core::driver::{AnimationDriver, FrameHost};
use lines_core::surface::SurfaceState;
use lines_core::uniforms::LineUniforms;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::{event::*, event_loop::EventLoop, window::Window, window::WindowBuilder};

mod gpu;

use gpu::GpuState;

/// Desktop preview of the floating-lines background.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON options document (same keys as the browser `options` object).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,
    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

/// Redraw requests stand in for animation-frame callbacks.
struct NativeHost {
    window: Arc<Window>,
    gpu: Option<GpuState>,
    next_frame: u64,
}

impl FrameHost for NativeHost {
    type Handle = u64;
    type Error = wgpu::SurfaceError;

    fn request_frame(&mut self) -> Option<u64> {
        self.gpu.as_ref()?;
        self.window.request_redraw();
        self.next_frame += 1;
        Some(self.next_frame)
    }

    // A requested redraw cannot be withdrawn; ticks after cleanup are ignored
    // by the driver instead.
    fn cancel_frame(&mut self, _handle: u64) {}

    fn configure_surface(&mut self, surface: &SurfaceState) -> SurfaceState {
        match &mut self.gpu {
            Some(gpu) => gpu.resize(surface),
            None => *surface,
        }
    }

    fn push_uniforms(&mut self, uniforms: &LineUniforms) {
        if let Some(gpu) = &self.gpu {
            gpu.write_uniforms(uniforms);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        match &mut self.gpu {
            Some(gpu) => gpu.render(),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.destroy();
        }
    }
}

/// The window's own physical size; the swapchain must match it exactly.
fn measure(window: &Window) -> SurfaceState {
    let physical = window.inner_size();
    SurfaceState::physical(physical.width, physical.height, window.scale_factor())
}

fn load_options(path: Option<&PathBuf>) -> anyhow::Result<FloatingLinesOptions> {
    match path {
        Some(p) => FloatingLinesOptions::from_path(p)
            .with_context(|| format!("loading options from {}", p.display())),
        None => Ok(FloatingLinesOptions::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let params = normalize(&load_options(args.config.as_ref())?);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Floating Lines (native)")
            .with_inner_size(LogicalSize::new(args.width.max(1), args.height.max(1)))
            .build(&event_loop)?,
    );

    let size = measure(&window);
    let gpu = pollster::block_on(GpuState::new(window.clone(), size))?;
    let host = NativeHost {
        window: window.clone(),
        gpu: Some(gpu),
        next_frame: 0,
    };
    let mut driver = AnimationDriver::new(params, host);
    let started = Instant::now();
    driver.start(size);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                driver.resize(measure(&window));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = window.scale_factor();
                let local = position.to_logical::<f32>(scale);
                let box_size = window.inner_size().to_logical::<f32>(scale);
                driver.pointer_move(
                    Vec2::new(local.x, local.y),
                    Vec2::new(box_size.width, box_size.height),
                );
            }
            WindowEvent::CursorLeft { .. } => driver.pointer_leave(),
            WindowEvent::RedrawRequested => {
                driver.tick(started.elapsed().as_secs_f32());
            }
            WindowEvent::CloseRequested => {
                driver.cleanup();
                elwt.exit();
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}
