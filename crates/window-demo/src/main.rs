// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that renders the composed chart via RGBA blit (CPU) using winit + softbuffer.
// Keys: 1/2/3 toggle MA5/MA25/MA75, V toggles volume, T switches theme.

use anyhow::{Context, Result};
use std::num::NonZeroU32;
use std::path::PathBuf;
use swingchart_core::{normalize_quotes, read_series, ChartComposer, DisplayOptions, Indicator, PointerSurface};
use swingchart_render_skia::{RenderOptions, SkiaRenderer, Theme};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Last cursor sample against the blitted panel. The panel is drawn 1:1 at the
/// window's top-left, so window x is the panel offset.
struct WindowPointer {
    x: f64,
    panel_width: f64,
}

impl PointerSurface for WindowPointer {
    fn pointer_offset(&self) -> f64 { self.x }
    fn panel_width(&self) -> f64 { self.panel_width }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/demo/data/sample_quotes.json"));
    let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let series = normalize_quotes(read_series(std::io::BufReader::new(file))?);
    info!(rows = series.len(), "loaded {}", path.display());

    let mut composer = ChartComposer::new(series, DisplayOptions::all());
    let config = *composer.config();
    let renderer = SkiaRenderer::new();
    let mut opts = RenderOptions::default();

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("swingchart - window demo")
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width as u32, config.height as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    let before = composer.hover();
                    let pointer = WindowPointer { x: position.x, panel_width: config.width };
                    if composer.on_pointer_move_from(&pointer) != before {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    composer.on_pointer_leave();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    let mut options = composer.options();
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::Key1) => options.set(Indicator::Ma5, !options.ma5),
                        Some(VirtualKeyCode::Key2) => options.set(Indicator::Ma25, !options.ma25),
                        Some(VirtualKeyCode::Key3) => options.set(Indicator::Ma75, !options.ma75),
                        Some(VirtualKeyCode::V) => options.show_volume = !options.show_volume,
                        Some(VirtualKeyCode::T) => {
                            opts.theme = if opts.theme.name == "dark" { Theme::light() } else { Theme::dark() };
                        }
                        _ => return,
                    }
                    composer.set_options(options);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e}");
                    return;
                }
                let (rgba, pw, ph, stride) = match renderer.render_to_rgba8(&composer.compose(), &config, &opts) {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("render error: {e:#}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("frame error: {e}");
                        return;
                    }
                };
                let (ww, wh) = (size.width as usize, size.height as usize);
                let bg = opts.theme.background;
                let bg_px = ((bg.r() as u32) << 16) | ((bg.g() as u32) << 8) | bg.b() as u32;
                for y in 0..wh {
                    for x in 0..ww {
                        frame[y * ww + x] = if x < pw as usize && y < ph as usize {
                            let px = &rgba[y * stride + x * 4..y * stride + x * 4 + 4];
                            ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
                        } else {
                            bg_px
                        };
                    }
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    });
}
