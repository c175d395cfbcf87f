// File: crates/trend-core/src/theme.rs
// Summary: Light/Dark theming plus the series color palette cycled across genres.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_text: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 210, 210, 218),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_text: skia::Color::from_argb(255, 40, 40, 50),
            palette: tab_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 50, 50, 56),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
            palette: tab_palette(),
        }
    }

    /// Series color for the i-th genre column; wraps past the palette end.
    pub fn series_color(&self, idx: usize) -> skia::Color {
        self.palette[idx % self.palette.len()]
    }
}

/// Ten distinguishable categorical colors.
fn tab_palette() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 31, 119, 180),
        skia::Color::from_argb(255, 255, 127, 14),
        skia::Color::from_argb(255, 44, 160, 44),
        skia::Color::from_argb(255, 214, 39, 40),
        skia::Color::from_argb(255, 148, 103, 189),
        skia::Color::from_argb(255, 140, 86, 75),
        skia::Color::from_argb(255, 227, 119, 194),
        skia::Color::from_argb(255, 127, 127, 127),
        skia::Color::from_argb(255, 188, 189, 34),
        skia::Color::from_argb(255, 23, 190, 207),
    ]
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
