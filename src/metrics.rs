//! Text layout estimates for a fixed-advance text surface.

/// Per-size line and chrome measurements, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    pub line_height: f32,
    pub char_width: f32,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    pub border_width: f32,
}

impl TextMetrics {
    fn vertical_chrome(&self) -> f32 {
        (self.vertical_padding + self.border_width) * 2.0
    }

    fn horizontal_chrome(&self) -> f32 {
        (self.horizontal_padding + self.border_width) * 2.0
    }

    /// Characters that fit on one visual line, or `None` when the width is unknown.
    pub fn columns(&self, container_width: Option<f32>) -> Option<usize> {
        let width = container_width?;
        if !width.is_finite() {
            return None;
        }
        let usable = (width - self.horizontal_chrome()).max(0.0);
        let columns = (usable / self.char_width.max(1.0)).floor() as usize;
        Some(columns.max(1))
    }

    /// Visual lines after soft wrapping. Empty text still occupies one line.
    pub fn visual_lines(&self, text: &str, container_width: Option<f32>) -> usize {
        let columns = self.columns(container_width);
        text.split('\n')
            .map(|line| {
                let len = line.chars().count();
                match columns {
                    Some(columns) if len > 0 => len.div_ceil(columns),
                    _ => 1,
                }
            })
            .sum()
    }

    pub fn height_for_lines(&self, lines: usize) -> f32 {
        lines.max(1) as f32 * self.line_height + self.vertical_chrome()
    }

    /// Height the surface needs to show all of `text` without scrolling.
    pub fn content_height(&self, text: &str, container_width: Option<f32>) -> f32 {
        self.height_for_lines(self.visual_lines(text, container_width))
    }

    /// Default height of an empty surface showing `rows` lines.
    pub fn rows_height(&self, rows: usize) -> f32 {
        self.height_for_lines(rows)
    }
}
