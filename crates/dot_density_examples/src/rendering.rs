//! Minimal PNG previews for example binaries.
use std::path::Path;

use anyhow::Context;
use dot_density::prelude::*;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Bounds covering every polygon, or `None` when `polygons` is empty.
pub fn union_bounds<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> Option<Bounds> {
    polygons
        .into_iter()
        .map(Polygon::bounds)
        .reduce(|a, b| Bounds::new(a.min.min(b.min), a.max.max(b.max)))
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels.
    pub image_size: (u32, u32),
    /// Plane area mapped onto the image.
    pub bounds: Bounds,
    /// Margin in pixels around `bounds`.
    pub padding: u32,
    pub background: [u8; 3],
    pub outline: [u8; 3],
    pub dot_color: [u8; 3],
    pub dot_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), bounds: Bounds) -> Self {
        Self {
            image_size,
            bounds,
            padding: 16,
            background: [255, 255, 255],
            outline: [0, 0, 0],
            dot_color: [8, 81, 156],
            dot_radius: 3,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot_style(mut self, color: [u8; 3], radius: i32) -> Self {
        self.dot_color = color;
        self.dot_radius = radius;
        self
    }

    // Plane coordinates are screen-like (y grows downwards), so no flip.
    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let pad = self.padding as f32;
        let avail = Vec2::new(
            self.image_size.0 as f32 - 2.0 * pad,
            self.image_size.1 as f32 - 2.0 * pad,
        );
        let extent = self.bounds.extent().max(Vec2::splat(f32::EPSILON));
        let scale = (avail / extent).min_element();
        (p - self.bounds.min) * scale + Vec2::splat(pad)
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_line(img: &mut RgbImage, a: Vec2, b: Vec2, color: [u8; 3]) {
    let steps = (b - a).abs().max_element().ceil().max(1.0) as i64;
    for i in 0..=steps {
        let p = a.lerp(b, i as f32 / steps as f32);
        put(img, p.x.round() as i64, p.y.round() as i64, color);
    }
}

fn draw_disk(img: &mut RgbImage, center: Vec2, radius: i32, color: [u8; 3]) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_outline(img: &mut RgbImage, polygon: &Polygon, config: &RenderConfig) {
    for (a, b) in polygon.edges(true) {
        draw_line(img, config.to_pixel(a), config.to_pixel(b), config.outline);
    }
}

/// Draws polygon outlines and dots and writes the image to `path`.
pub fn render_dots_to_png<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon>,
    dots: impl IntoIterator<Item = Vec2>,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for polygon in polygons {
        draw_outline(&mut img, polygon, config);
    }
    for dot in dots {
        draw_disk(
            &mut img,
            config.to_pixel(dot),
            config.dot_radius,
            config.dot_color,
        );
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote {}.", path.display());
    Ok(())
}

/// Renders every region outline and the dots of a [`DensityResult`].
pub fn render_density_to_png(
    regions: &[Region],
    result: &DensityResult,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    render_dots_to_png(
        regions.iter().map(|r| &r.polygon),
        result.dots.iter().map(|d| d.position),
        config,
        path,
    )
}
