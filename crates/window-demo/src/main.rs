// File: crates/window-demo/src/main.rs
// Summary: Windowed gallery that renders chart-core to a window via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::gallery::shortcut_for;
use chart_core::chart::Rgba8;
use chart_core::{Chart, Gallery, Key, RenderOptions, Shortcut};
use clap::Parser;
use gallery_demo::{logging, Config};
use winit::event::{ElementState, Event, KeyboardInput, ModifiersState, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowBuilder};

/// Browse the chart gallery in a window
#[derive(Debug, Parser)]
#[command(name = "gallery-window", version, about, long_about = None)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log.level);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Chart Gallery")
        .with_inner_size(winit::dpi::LogicalSize::new(config.render.width as f64, config.render.height as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut gallery = Gallery::new(config.display_options(), config.theme());
    let out_dir = config.output_dir();
    let mut modifiers = ModifiersState::empty();
    set_title(&window, &gallery);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                WindowEvent::ModifiersChanged(m) => modifiers = m,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(code), .. },
                    ..
                } => {
                    if code == VirtualKeyCode::Escape && window.fullscreen().is_some() {
                        window.set_fullscreen(None);
                        return;
                    }
                    let shortcut = map_key(code).and_then(|k| shortcut_for(k, modifiers.ctrl()));
                    let Some(shortcut) = shortcut else { return };
                    match shortcut {
                        Shortcut::Fullscreen => {
                            let next = match window.fullscreen() {
                                Some(_) => None,
                                None => Some(Fullscreen::Borderless(None)),
                            };
                            window.set_fullscreen(next);
                        }
                        Shortcut::Download => {
                            let path = out_dir.join(gallery.download_file_name(chrono::Utc::now()));
                            match download(&gallery, &path) {
                                Ok(()) => tracing::info!(path = %path.display(), "downloaded chart"),
                                Err(e) => tracing::error!("download failed: {e:#}"),
                            }
                        }
                        other => {
                            if gallery.apply(other) {
                                set_title(&window, &gallery);
                                window.request_redraw();
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&window, &mut surface, &gallery) {
                    tracing::error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn set_title(window: &Window, gallery: &Gallery) {
    let (title, description) = gallery.info();
    window.set_title(&format!("Chart Gallery - {title}"));
    tracing::debug!(kind = %gallery.current(), description, "showing chart");
}

fn map_key(code: VirtualKeyCode) -> Option<Key> {
    use VirtualKeyCode as V;
    let key = match code {
        V::Left => Key::Left,
        V::Right => Key::Right,
        V::F11 => Key::F11,
        V::S => Key::Char('s'),
        V::T => Key::Char('t'),
        V::Key1 => Key::Char('1'),
        V::Key2 => Key::Char('2'),
        V::Key3 => Key::Char('3'),
        V::Key4 => Key::Char('4'),
        V::Key5 => Key::Char('5'),
        V::Key6 => Key::Char('6'),
        V::Key7 => Key::Char('7'),
        V::Key8 => Key::Char('8'),
        V::Key9 => Key::Char('9'),
        V::Key0 => Key::Char('0'),
        _ => return None,
    };
    Some(key)
}

fn download(gallery: &Gallery, path: &std::path::Path) -> Result<()> {
    let chart = Chart::new(gallery.option()?, *gallery.theme());
    chart.render_to_png(&RenderOptions::download(), path)?;
    Ok(())
}

fn draw(window: &Window, surface: &mut softbuffer::Surface, gallery: &Gallery) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(()); // minimised
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;

    let opts = view_options(w.get(), h.get(), window.scale_factor());
    let chart = Chart::new(gallery.option()?, *gallery.theme());
    let rgba = chart.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    blit(&rgba, &mut frame, w.get() as usize, h.get() as usize);
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// Lay out in logical pixels and let the pixel ratio fill the physical surface.
fn view_options(physical_w: u32, physical_h: u32, scale_factor: f64) -> RenderOptions {
    let scale = scale_factor.max(0.1);
    RenderOptions {
        width: (physical_w as f64 / scale).round() as i32,
        height: (physical_h as f64 / scale).round() as i32,
        pixel_ratio: scale as f32,
        ..RenderOptions::default()
    }
}

/// Copy RGBA8 rows into a 0RGB frame. Rounding can leave the render a pixel off the frame size.
fn blit((rgba, rw, rh, stride): &Rgba8, frame: &mut [u32], frame_w: usize, frame_h: usize) {
    frame.fill(0x00ff_ffff);
    let cols = (*rw as usize).min(frame_w);
    let rows = (*rh as usize).min(frame_h);
    for y in 0..rows {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * frame_w..y * frame_w + cols];
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidpi_window_renders_logical_size_at_scale() {
        let opts = view_options(2048, 1280, 2.0);
        assert_eq!((opts.width, opts.height), (1024, 640));
        assert_eq!(opts.pixel_ratio, 2.0);
        assert_eq!(opts.surface_size(), (2048, 1280));

        let opts = view_options(1000, 600, 1.0);
        assert_eq!((opts.width, opts.height, opts.pixel_ratio), (1000, 600, 1.0));
    }

    #[test]
    fn blit_keeps_rows_aligned_when_sizes_differ() {
        // 3x2 render into a 2x3 frame
        let mut rgba = Vec::new();
        for i in 0..6u8 {
            rgba.extend_from_slice(&[i, 0, 0, 255]);
        }
        let src: Rgba8 = (rgba, 3, 2, 12);
        let mut frame = vec![0u32; 6];
        blit(&src, &mut frame, 2, 3);
        assert_eq!(frame, vec![0, 0x01_0000, 0x03_0000, 0x04_0000, 0x00ff_ffff, 0x00ff_ffff]);
    }

    #[test]
    fn fractional_scale_covers_the_frame() {
        let opts = view_options(1367, 769, 1.5);
        let (sw, sh) = opts.surface_size();
        assert!((sw - 1367).abs() <= 1 && (sh - 769).abs() <= 1, "{sw}x{sh}");
    }
}
