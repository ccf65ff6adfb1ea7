// File: crates/atlas-window/src/main.rs
// Summary: Opens a window on a rendered scene and redraws the tooltip under the mouse (CPU blit via winit + softbuffer).

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use atlas_core::{Scene, Tooltip};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atlas_core=info,atlas_window=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Copy an RGBA8 frame into a softbuffer frame (0RGB per pixel).
fn blit(rgba: &[u8], stride: usize, width: usize, height: usize, frame: &mut [u32]) {
    for y in 0..height {
        let row = &rgba[y * stride..y * stride + width * 4];
        for (x, px) in row.chunks_exact(4).enumerate() {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            if let Some(slot) = frame.get_mut(y * width + x) {
                *slot = (r << 16) | (g << 8) | b;
            }
        }
    }
}

fn main() -> Result<()> {
    init_logger();
    let scene_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "demos/heat_map.toml".to_string()),
    );
    let scene = Scene::from_path(&scene_path)
        .with_context(|| format!("failed to read scene '{}'", scene_path.display()))?;
    let base = scene_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    let (mut vp, hover) = scene.render(&base).context("failed to render scene")?;
    let (base_frame, w, h, stride) = vp.render_to_rgba8()?;
    info!(width = w, height = h, targets = hover.len(), "scene ready");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(format!("atlas - {}", scene_path.display()))
        .with_inner_size(winit::dpi::PhysicalSize::new(w, h))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to open window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let (nw, nh) = (
        NonZeroU32::new(w).ok_or_else(|| anyhow!("zero width"))?,
        NonZeroU32::new(h).ok_or_else(|| anyhow!("zero height"))?,
    );

    let mut tooltip: Option<Tooltip> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    let next = hover.hover(position.x, position.y);
                    if next != tooltip {
                        debug!(x = position.x, y = position.y, hit = next.is_some(), "tooltip changed");
                        tooltip = next;
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if tooltip.take().is_some() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = surface.resize(nw, nh) {
                    error!("resize failed: {e}");
                    return;
                }
                let composed = match &tooltip {
                    Some(t) => vp.render_with_tooltip_rgba8(t).map(|(px, _, _, stride)| (px, stride)),
                    None => Ok((base_frame.clone(), stride)),
                };
                let (pixels, row_bytes) = match composed {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("render failed: {e}");
                        return;
                    }
                };
                match surface.buffer_mut() {
                    Ok(mut frame) => {
                        blit(&pixels, row_bytes, w as usize, h as usize, &mut frame);
                        if let Err(e) = frame.present() {
                            error!("present failed: {e}");
                        }
                    }
                    Err(e) => error!("no frame buffer: {e}"),
                }
            }
            _ => {}
        }
    })
}
