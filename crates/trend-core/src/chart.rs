// File: crates/trend-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::{TrendError, TrendResult};
use crate::grid::{integer_ticks, linspace};
use crate::matrix::TrendMatrix;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, tick labels, axis labels, legend. Disabled in snapshot tests
    /// to avoid font nondeterminism across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Debug)]
pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            series: Vec::new(),
        }
    }

    /// Build one line series per genre column of the matrix, with autoscaled
    /// axes. A matrix with no genre columns (or no year rows) cannot be
    /// plotted and fails with a render error rather than producing an empty
    /// figure.
    pub fn from_matrix(matrix: &TrendMatrix) -> TrendResult<Self> {
        if matrix.is_empty() {
            return Err(TrendError::render("no genre columns to plot"));
        }

        let mut chart = Self::new();
        chart.title = "Genre Popularity Over Time".to_string();
        for (gi, genre) in matrix.genres().iter().enumerate() {
            chart.series.push(Series::new(genre.clone(), matrix.genre_points(gi)));
        }

        let (first, last) = matrix
            .year_span()
            .ok_or_else(|| TrendError::render("no year rows to plot"))?;
        chart.x_axis = Axis::new("Year", first as f64, last as f64);
        chart.y_axis = Axis::new("Number of Movies", 0.0, matrix.max_count() as f64);
        chart.autoscale_axes(0.05);
        Ok(chart)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit axis ranges to the series data plus a relative margin, guarding
    /// degenerate single-point spans.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            if let Some((lo, hi)) = s.x_range() {
                x_min = x_min.min(lo);
                x_max = x_max.max(hi);
            }
            if let Some((lo, hi)) = s.y_range() {
                y_min = y_min.min(lo);
                y_max = y_max.max(hi);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = (y_min - ym).min(0.0);
        self.y_axis.max = y_max + ym;
    }

    /// Render to a raw RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> TrendResult<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_to_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(TrendError::render("failed to read back RGBA pixels"));
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> TrendResult<Vec<u8>> {
        let mut surface = self.draw_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| TrendError::render("PNG encode failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster
    /// surface. The write is atomic (temp file + rename): a failure never
    /// leaves a half-written artifact, an existing file is overwritten.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> TrendResult<()> {
        let out = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| TrendError::render(format!("create {}: {e}", parent.display())))?;
            }
        }

        let mut tmp = out.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);
        std::fs::write(&tmp, &bytes)
            .map_err(|e| TrendError::render(format!("write {}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, out).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            TrendError::render(format!("rename to {}: {e}", out.display()))
        })?;
        Ok(())
    }

    fn draw_to_surface(&self, opts: &RenderOptions) -> TrendResult<skia::Surface> {
        if self.series.is_empty() {
            return Err(TrendError::render("no series to plot"));
        }

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| TrendError::render("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let shaper = TextShaper::new();

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, &self.x_axis, &self.y_axis, &opts.theme);
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.theme);

        if opts.draw_labels {
            draw_tick_labels(
                canvas, &shaper,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis, &opts.theme,
            );
            draw_axis_labels(
                canvas, &shaper,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis, &opts.theme,
            );
            shaper.draw_centered(
                canvas,
                &self.title,
                (plot_left + plot_right) as f32 * 0.5,
                plot_top as f32 - 24.0,
                20.0,
                opts.theme.title,
            );
        }

        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis,
                s, opts.theme.series_color(i),
            );
        }

        if opts.draw_labels {
            draw_legend(canvas, &shaper, plot_right, plot_top, &self.series, &opts.theme);
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn sx(x: f64, axis: &Axis, l: i32, r: i32) -> f32 {
    l as f32 + ((x - axis.min) / axis.span()) as f32 * (r - l) as f32
}

fn sy(y: f64, axis: &Axis, t: i32, b: i32) -> f32 {
    b as f32 - ((y - axis.min) / axis.span()) as f32 * (b - t) as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.5);
    // Light dashed grid
    paint.set_path_effect(skia::PathEffect::dash(&[5.0, 5.0], 0.0));

    // verticals at year ticks
    for tick in integer_ticks(x_axis.min, x_axis.max, 12) {
        let x = sx(tick as f64, x_axis, l, r);
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
    }
    // horizontals at value ticks
    for v in linspace(y_axis.min, y_axis.max, 6) {
        let y = sy(v, y_axis, t, b);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
) {
    for tick in integer_ticks(x_axis.min, x_axis.max, 12) {
        let x = sx(tick as f64, x_axis, l, r);
        shaper.draw_centered(canvas, &tick.to_string(), x, b as f32 + 20.0, 12.0, theme.tick);
    }
    for v in linspace(y_axis.min, y_axis.max, 6) {
        let y = sy(v, y_axis, t, b);
        shaper.draw_right(canvas, &(v.round() as i64).to_string(), l as f32 - 8.0, y + 4.0, 12.0, theme.tick);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
) {
    shaper.draw_centered(
        canvas,
        &x_axis.label,
        (l + r) as f32 * 0.5,
        b as f32 + 44.0,
        14.0,
        theme.axis_label,
    );
    // Y label drawn horizontally above the axis; rotated text is not worth
    // the paragraph dance here.
    shaper.draw_left(canvas, &y_axis.label, l as f32 - 64.0, t as f32 - 12.0, 14.0, theme.axis_label);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let data = &series.points;
    if data.is_empty() {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    if data.len() == 1 {
        // Single year: nothing to connect, mark the point instead.
        let (x, y) = data[0];
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(color);
        canvas.draw_circle((sx(x, x_axis, l, r), sy(y, y_axis, t, b)), 3.0, &dot);
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(x0, x_axis, l, r), sy(y0, y_axis, t, b)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x, x_axis, l, r), sy(y, y_axis, t, b)));
    }
    canvas.draw_path(&path, &stroke);
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot_right: i32,
    plot_top: i32,
    series: &[Series],
    theme: &Theme,
) {
    let x0 = plot_right as f32 + 18.0;
    let mut y = plot_top as f32 + 10.0;
    let row_h = 20.0;

    for (i, s) in series.iter().enumerate() {
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(2.5);
        swatch.set_color(theme.series_color(i));
        canvas.draw_line((x0, y), (x0 + 24.0, y), &swatch);

        shaper.draw_left(canvas, &s.name, x0 + 32.0, y + 5.0, 12.0, theme.legend_text);
        y += row_h;
    }
}
