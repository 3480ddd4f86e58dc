//! PNG preview of a generated kernel: domain disk, background grid and point markers.
use std::path::Path;

use image::{Rgb, RgbImage};
use pcf_poisson::kernel::PoissonKernel;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .try_init();
}

/// Filter from `RUST_LOG`-style directives; missing or unparsable input falls back to `info`.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Colors and sizes used by the previewer.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Image edge length in pixels; the unit square maps onto the full image.
    pub image_size: u32,
    pub background: [u8; 3],
    pub disk_color: [u8; 3],
    pub grid_color: [u8; 3],
    pub point_color: [u8; 3],
    /// Marker radius in pixels.
    pub point_radius: u32,
}

impl PreviewConfig {
    pub fn new(image_size: u32) -> Self {
        Self {
            image_size,
            background: [245, 245, 245],
            disk_color: [200, 200, 200],
            grid_color: [0, 0, 0],
            point_color: [0, 82, 172],
            point_radius: 3,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_disk_color(mut self, disk_color: [u8; 3]) -> Self {
        self.disk_color = disk_color;
        self
    }

    pub fn with_grid_color(mut self, grid_color: [u8; 3]) -> Self {
        self.grid_color = grid_color;
        self
    }

    pub fn with_point_style(mut self, color: [u8; 3], radius: u32) -> Self {
        self.point_color = color;
        self.point_radius = radius;
        self
    }
}

/// Draw `kernel` into a new image.
pub fn render_kernel_image(kernel: &PoissonKernel, config: &PreviewConfig) -> RgbImage {
    let size = config.image_size.max(1);
    let mut img = RgbImage::from_pixel(size, size, Rgb(config.background));

    let half = size as f32 / 2.0;
    let radius_sq = half * half;
    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - half;
        let dy = y as f32 + 0.5 - half;
        if dx * dx + dy * dy <= radius_sq {
            *px = Rgb(config.disk_color);
        }
    }

    let grid_size = kernel.grid_size() as u32;
    for k in 1..grid_size {
        let pos = (k as f32 * (size as f32 / grid_size as f32)).floor() as u32;
        if pos >= size {
            continue;
        }
        for t in 0..size {
            img.put_pixel(pos, t, Rgb(config.grid_color));
            img.put_pixel(t, pos, Rgb(config.grid_color));
        }
    }

    let r = config.point_radius as i64;
    for p in kernel.points() {
        let cx = (p.x * size as f32).floor() as i64;
        let cy = (p.y * size as f32).floor() as i64;
        for oy in -r..=r {
            for ox in -r..=r {
                if ox * ox + oy * oy > r * r {
                    continue;
                }
                let (x, y) = (cx + ox, cy + oy);
                if x >= 0 && y >= 0 && x < size as i64 && y < size as i64 {
                    img.put_pixel(x as u32, y as u32, Rgb(config.point_color));
                }
            }
        }
    }

    img
}

/// Render `kernel` and save it as a PNG at `path`.
pub fn render_kernel_to_png(
    kernel: &PoissonKernel,
    config: &PreviewConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    render_kernel_image(kernel, config).save(path)?;
    info!("Wrote preview of {} points to {}.", kernel.len(), path.display());
    Ok(())
}
