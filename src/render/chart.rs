//! Pie chart rendering.
//!
//! This module lays out and rasterizes the hours distribution chart: pie
//! wedges on the left, a single-column legend on the right and a centered
//! title on top. The composed [`Pixmap`] can be encoded with [`encode_png`].

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};
use tracing::debug;

use crate::config::ChartConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeChartSlice, Rgb};

use super::glyphs::{TextStyle, draw_text};

/// Distance of the chart region from the top and left canvas edges.
pub const CHART_MARGIN: f32 = 50.0;
/// Horizontal space right of the chart region kept for the legend.
pub const LEGEND_RESERVED_WIDTH: f32 = 250.0;
/// Distance of the legend region from the right canvas edge.
pub const LEGEND_RIGHT_OFFSET: f32 = 230.0;
/// Width of the legend region.
pub const LEGEND_WIDTH: f32 = 200.0;
/// Height of one legend row.
pub const LEGEND_ROW_HEIGHT: f32 = 20.0;
/// Side of a legend color swatch.
pub const LEGEND_SWATCH_SIZE: f32 = 15.0;
/// Gap between a swatch and its label.
pub const LEGEND_SWATCH_PADDING: f32 = 5.0;
/// Legend labels longer than this many characters are shortened.
pub const MAX_LEGEND_LABEL_CHARS: usize = 25;
/// Characters kept from a shortened label before the ellipsis.
pub const TRUNCATED_LABEL_CHARS: usize = 22;
/// Vertical position of the chart title.
pub const TITLE_TOP: f32 = 10.0;

const MIN_CANVAS_WIDTH: u32 = 301;
const MIN_CANVAS_HEIGHT: u32 = 101;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);

// 14 px tall from TITLE_TOP, so it ends above the legend heading.
const TITLE_STYLE: TextStyle = TextStyle {
    cell_width: 2.0,
    cell_height: 2.0,
    color: DARK_BLUE,
};
const LEGEND_TITLE_STYLE: TextStyle = TextStyle {
    cell_width: 1.4,
    cell_height: 1.6,
    color: BLACK,
};
const LEGEND_TEXT_STYLE: TextStyle = TextStyle {
    cell_width: 1.2,
    cell_height: 1.6,
    color: BLACK,
};

/// An axis-aligned region of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Region {
    /// Returns the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Chart and legend placement for a canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Bounding box of the pie.
    pub chart_area: Region,
    /// Bounding box of the legend rows.
    pub legend_area: Region,
}

impl ChartLayout {
    /// Computes the layout for a canvas.
    ///
    /// Returns `RenderFailure` when the canvas leaves no room for the pie.
    pub fn new(width: u32, height: u32) -> ReportResult<Self> {
        if width < MIN_CANVAS_WIDTH || height < MIN_CANVAS_HEIGHT {
            return Err(ReportError::RenderFailure {
                message: format!(
                    "canvas {}x{} is smaller than the minimum {}x{}",
                    width, height, MIN_CANVAS_WIDTH, MIN_CANVAS_HEIGHT
                ),
            });
        }

        let (w, h) = (width as f32, height as f32);
        Ok(Self {
            width,
            height,
            chart_area: Region {
                x: CHART_MARGIN,
                y: CHART_MARGIN,
                width: w - CHART_MARGIN - LEGEND_RESERVED_WIDTH,
                height: h - 2.0 * CHART_MARGIN,
            },
            legend_area: Region {
                x: w - LEGEND_RIGHT_OFFSET,
                y: CHART_MARGIN,
                width: LEGEND_WIDTH,
                height: h - 2.0 * CHART_MARGIN,
            },
        })
    }
}

/// One pie wedge in degrees, clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Where the wedge starts.
    pub start_degrees: f64,
    /// How far the wedge extends.
    pub sweep_degrees: f64,
    /// Fill color.
    pub color: Rgb,
}

/// Lays out wedges back to back in rank order, starting at 0 degrees.
pub fn wedge_angles(slices: &[EmployeeChartSlice]) -> Vec<Wedge> {
    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let wedge = Wedge {
                start_degrees: start,
                sweep_degrees: slice.sweep_degrees(),
                color: slice.color,
            };
            start += wedge.sweep_degrees;
            wedge
        })
        .collect()
}

/// One placed legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    /// Top edge of the row.
    pub y: f32,
    /// Label text, already shortened.
    pub label: String,
    /// Swatch color.
    pub color: Rgb,
}

/// Formats the legend label for a slice.
///
/// # Examples
///
/// ```
/// use timesheet_report::models::{EmployeeChartSlice, Rgb};
/// use timesheet_report::render::legend_label;
///
/// let slice = EmployeeChartSlice {
///     name: "Alice".to_string(),
///     total_hours: 8.5,
///     percentage: 42.26,
///     color_index: 0,
///     color: Rgb::new(255, 99, 132),
/// };
/// assert_eq!(legend_label(&slice), "Alice (42.3%)");
/// ```
pub fn legend_label(slice: &EmployeeChartSlice) -> String {
    truncate_label(&format!(
        "{} ({}%)",
        slice.name,
        format_percentage(slice.percentage)
    ))
}

/// Formats a percentage to one decimal place, midpoint away from zero.
fn format_percentage(percentage: f64) -> String {
    match Decimal::from_f64(percentage) {
        Some(value) => format!(
            "{:.1}",
            value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.1}", percentage),
    }
}

/// Shortens labels over the legend limit to 22 characters plus `...`.
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LEGEND_LABEL_CHARS {
        return label.to_string();
    }
    let mut shortened: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
    shortened.push_str("...");
    shortened
}

/// Places legend rows top-down in a single column.
///
/// Once the next row would cross the bottom of `area`, the remaining
/// slices are left out of the legend.
pub fn legend_rows(slices: &[EmployeeChartSlice], area: &Region) -> Vec<LegendRow> {
    let mut rows = Vec::new();
    let mut y = area.y;

    for (index, slice) in slices.iter().enumerate() {
        rows.push(LegendRow {
            y,
            label: legend_label(slice),
            color: slice.color,
        });
        y += LEGEND_ROW_HEIGHT;

        if y + LEGEND_ROW_HEIGHT > area.bottom() && index + 1 < slices.len() {
            debug!(
                placed = rows.len(),
                omitted = slices.len() - rows.len(),
                "Legend column full"
            );
            break;
        }
    }

    rows
}

/// Renders the pie chart for ranked, colored slices.
///
/// An empty slice list produces the background, title and legend heading
/// only.
pub fn render_pie_chart(
    slices: &[EmployeeChartSlice],
    config: &ChartConfig,
) -> ReportResult<Pixmap> {
    let layout = ChartLayout::new(config.width, config.height)?;
    let mut pixmap =
        Pixmap::new(layout.width, layout.height).ok_or_else(|| ReportError::RenderFailure {
            message: format!(
                "could not allocate a {}x{} canvas",
                layout.width, layout.height
            ),
        })?;
    pixmap.fill(Color::WHITE);

    draw_wedges(&mut pixmap, &wedge_angles(slices), &layout.chart_area);
    draw_legend(&mut pixmap, slices, &layout.legend_area, &config.legend_title);
    draw_title(&mut pixmap, &config.title, layout.width);

    Ok(pixmap)
}

/// Renders the pie chart and encodes it as PNG.
pub fn render_pie_chart_png(
    slices: &[EmployeeChartSlice],
    config: &ChartConfig,
) -> ReportResult<Vec<u8>> {
    encode_png(&render_pie_chart(slices, config)?)
}

/// Encodes a pixmap as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> ReportResult<Vec<u8>> {
    pixmap.encode_png().map_err(|e| ReportError::RenderFailure {
        message: format!("PNG encoding failed: {}", e),
    })
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn thin_stroke() -> Stroke {
    Stroke {
        width: 1.0,
        ..Stroke::default()
    }
}

fn draw_wedges(pixmap: &mut Pixmap, wedges: &[Wedge], area: &Region) {
    let outline = solid_paint(BLACK);
    let stroke = thin_stroke();

    for wedge in wedges {
        let Some(path) = wedge_path(area, wedge.start_degrees, wedge.sweep_degrees) else {
            continue;
        };
        pixmap.fill_path(
            &path,
            &solid_paint(wedge.color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }
}

/// Builds a wedge of the ellipse inscribed in `area`.
///
/// The arc is flattened to segments of at most one degree.
fn wedge_path(area: &Region, start_degrees: f64, sweep_degrees: f64) -> Option<Path> {
    let rx = f64::from(area.width) / 2.0;
    let ry = f64::from(area.height) / 2.0;
    let cx = f64::from(area.x) + rx;
    let cy = f64::from(area.y) + ry;
    let steps = (sweep_degrees.abs().ceil() as usize).max(1);

    let mut builder = PathBuilder::new();
    builder.move_to(cx as f32, cy as f32);
    for step in 0..=steps {
        let theta = (start_degrees + sweep_degrees * step as f64 / steps as f64).to_radians();
        builder.line_to(
            (cx + rx * theta.cos()) as f32,
            (cy + ry * theta.sin()) as f32,
        );
    }
    builder.close();
    builder.finish()
}

fn draw_legend(pixmap: &mut Pixmap, slices: &[EmployeeChartSlice], area: &Region, title: &str) {
    draw_text(
        pixmap,
        area.x,
        area.y - 25.0,
        title,
        &LEGEND_TITLE_STYLE,
    );

    let outline = solid_paint(BLACK);
    let stroke = thin_stroke();
    let text_offset = (LEGEND_SWATCH_SIZE - LEGEND_TEXT_STYLE.line_height()) / 2.0;

    for row in legend_rows(slices, area) {
        if let Some(swatch) =
            Rect::from_xywh(area.x, row.y, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE)
        {
            pixmap.fill_rect(swatch, &solid_paint(row.color), Transform::identity(), None);
            let border = PathBuilder::from_rect(swatch);
            pixmap.stroke_path(&border, &outline, &stroke, Transform::identity(), None);
        }

        draw_text(
            pixmap,
            area.x + LEGEND_SWATCH_SIZE + LEGEND_SWATCH_PADDING,
            row.y + text_offset,
            &row.label,
            &LEGEND_TEXT_STYLE,
        );
    }
}

fn draw_title(pixmap: &mut Pixmap, title: &str, canvas_width: u32) {
    let x = ((canvas_width as f32 - TITLE_STYLE.text_width(title)) / 2.0).max(0.0);
    draw_text(pixmap, x, TITLE_TOP, title, &TITLE_STYLE);
}
