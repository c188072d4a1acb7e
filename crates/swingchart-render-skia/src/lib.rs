// File: crates/swingchart-render-skia/src/lib.rs
// Summary: Skia renderer for composed scenes; CPU raster surfaces to PNG or RGBA.

pub mod text;
pub mod theme;

use anyhow::{Context, Result};
use skia_safe as skia;
use swingchart_core::{ChartConfig, ComposeOutcome, PathCommand, Scene};
use tracing::debug;

pub use text::TextShaper;
pub use theme::Theme;

pub const DEFAULT_MESSAGE: &str = "Not enough data to draw a chart";

pub struct RenderOptions {
    pub theme: Theme,
    /// Off in snapshot tests to avoid font variance across platforms.
    pub draw_labels: bool,
    /// Device pixel ratio; the output is `scale` times the panel size.
    pub scale: f32,
    pub font_size: f32,
    /// Shown instead of a chart when there is insufficient data.
    pub message: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            draw_labels: true,
            scale: 1.0,
            font_size: 12.0,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Render an outcome onto a fresh raster surface sized from `config`.
    fn render_surface(&self, outcome: &ComposeOutcome, config: &ChartConfig, opts: &RenderOptions) -> Result<skia::Surface> {
        let scale = opts.scale.max(0.1);
        let (w, h) = surface_size(config, scale);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.scale((scale, scale));
        match outcome {
            ComposeOutcome::Drawable(scene) => self.draw_scene(canvas, scene, opts),
            ComposeOutcome::InsufficientData => {
                debug!("rendering insufficient-data message");
                self.draw_message(canvas, config, opts);
            }
        }
        canvas.restore();
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, outcome: &ComposeOutcome, config: &ChartConfig, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(outcome, config, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        outcome: &ComposeOutcome,
        config: &ChartConfig,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(outcome, config, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, outcome: &ComposeOutcome, config: &ChartConfig, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(outcome, config, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((px, w, h, stride))
    }

    /// Paint every scene layer in order, in panel coordinates.
    pub fn draw_scene(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let theme = &opts.theme;
        draw_grid(canvas, scene, theme);
        draw_volume(canvas, scene, theme);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.area_fill);
        canvas.draw_path(&to_skia_path(&scene.area.commands), &fill);

        let mut stroke = stroke_paint(theme.price_line, 2.0);
        canvas.draw_path(&to_skia_path(&scene.line.commands), &stroke);

        for ind in &scene.indicators {
            stroke = stroke_paint(theme.indicator(ind.indicator), 1.5);
            stroke.set_path_effect(skia::PathEffect::dash(&[ind.dash.on as f32, ind.dash.off as f32], 0.0));
            canvas.draw_path(&to_skia_path(&ind.path.commands), &stroke);
        }

        if let Some(ch) = &scene.crosshair {
            let mut paint = stroke_paint(theme.crosshair, 1.0);
            paint.set_path_effect(skia::PathEffect::dash(&[3.0, 3.0], 0.0));
            canvas.draw_line((ch.x as f32, ch.top as f32), (ch.x as f32, ch.bottom as f32), &paint);

            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(theme.price_line);
            canvas.draw_circle((ch.marker.x as f32, ch.marker.y as f32), 3.5, &dot);
        }

        if let (Some(tip), Some(ch)) = (&scene.tooltip, &scene.crosshair) {
            self.draw_tooltip(canvas, &tip.lines(), ch.x as f32, scene, opts);
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, lines: &[String], anchor_x: f32, scene: &Scene, opts: &RenderOptions) {
        let pad = 6.0f32;
        let line_h = opts.font_size * 1.4;
        let text_w = if opts.draw_labels {
            lines.iter().map(|l| self.text.measure_width(l, opts.font_size)).fold(0.0f32, f32::max)
        } else {
            // Fixed box size keeps label-free renders deterministic.
            120.0
        };
        let box_w = text_w + pad * 2.0;
        let box_h = line_h * lines.len() as f32 + pad * 2.0;

        // Prefer the right of the crosshair, flip left near the edge.
        let panel_w = scene.width() as f32;
        let mut left = anchor_x + 12.0;
        if left + box_w > panel_w {
            left = (anchor_x - 12.0 - box_w).max(0.0);
        }
        let top = 8.0f32;
        let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(opts.theme.tooltip_background);
        canvas.draw_rect(rect, &bg);
        canvas.draw_rect(rect, &stroke_paint(opts.theme.tooltip_border, 1.0));

        if opts.draw_labels {
            for (i, line) in lines.iter().enumerate() {
                let y = top + pad + line_h * i as f32;
                self.text.draw_top_left(canvas, line, left + pad, y, opts.font_size, opts.theme.text);
            }
        }
    }

    fn draw_message(&self, canvas: &skia::Canvas, config: &ChartConfig, opts: &RenderOptions) {
        if !opts.draw_labels {
            return;
        }
        let size = opts.font_size * 1.3;
        let w = self.text.measure_width(&opts.message, size);
        let x = ((config.width as f32 - w) / 2.0).max(0.0);
        let y = (config.height as f32 - size) / 2.0;
        self.text.draw_top_left(canvas, &opts.message, x, y, size, opts.theme.text);
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn surface_size(config: &ChartConfig, scale: f32) -> (i32, i32) {
    let w = (config.width as f32 * scale).round().max(1.0) as i32;
    let h = (config.height as f32 * scale).round().max(1.0) as i32;
    (w, h)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to((p.x as f32, p.y as f32)); }
            PathCommand::LineTo(p) => { path.line_to((p.x as f32, p.y as f32)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn draw_grid(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for g in &scene.gridlines {
        canvas.draw_line((g.from.x as f32, g.from.y as f32), (g.to.x as f32, g.to.y as f32), &paint);
    }
}

fn draw_volume(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    for bar in &scene.volume_bars {
        body.set_color(match bar.rising {
            Some(true) => theme.volume_up,
            Some(false) => theme.volume_down,
            None => theme.volume_neutral,
        });
        let r = bar.rect;
        canvas.draw_rect(skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32), &body);
    }
}
