//! Report renderers.
//!
//! Two independent consumers of the aggregated hours: a raster pie chart
//! with legend, and a standalone HTML table.

mod chart;
mod glyphs;
mod table;

pub use chart::{
    ChartLayout, LEGEND_ROW_HEIGHT, LegendRow, MAX_LEGEND_LABEL_CHARS, Region,
    TRUNCATED_LABEL_CHARS, Wedge, encode_png, legend_label, legend_rows, render_pie_chart,
    render_pie_chart_png, truncate_label, wedge_angles,
};
pub use glyphs::{Glyph, TextStyle, draw_text, glyph};
pub use table::{
    LOW_HOURS_CLASS, LOW_HOURS_THRESHOLD, escape_html, is_low_hours, render_html_table,
};
