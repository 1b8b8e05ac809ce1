//! HTML table rendering.
//!
//! Produces a self-contained HTML document with embedded CSS listing each
//! employee's total hours.

use rust_decimal::Decimal;

use crate::config::TableConfig;
use crate::models::EmployeeSummary;

/// Employees under this many hours get the `low-hours` row class.
pub const LOW_HOURS_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// CSS class marking rows under [`LOW_HOURS_THRESHOLD`].
pub const LOW_HOURS_CLASS: &str = "low-hours";

/// Renders summaries as a standalone HTML document.
///
/// Rows keep the order of `summaries`. An empty slice renders an empty
/// table body.
pub fn render_html_table(summaries: &[EmployeeSummary], config: &TableConfig) -> String {
    let title = escape_html(&config.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    <table>
        <thead>
            <tr>
                <th>Name</th>
                <th>Total Time Worked (Hours)</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</body>
</html>
"#,
        title = title,
        css = inline_css(),
        rows = render_rows(summaries),
    )
}

/// Returns true when a summary falls under the hours threshold.
pub fn is_low_hours(summary: &EmployeeSummary) -> bool {
    summary.rounded_hours < LOW_HOURS_THRESHOLD
}

fn render_rows(summaries: &[EmployeeSummary]) -> String {
    summaries
        .iter()
        .map(|summary| {
            let class = if is_low_hours(summary) {
                format!(r#" class="{}""#, LOW_HOURS_CLASS)
            } else {
                String::new()
            };
            format!(
                "            <tr{class}>\n                <td>{name}</td>\n                <td>{hours:.2}</td>\n            </tr>\n",
                class = class,
                name = escape_html(&summary.name),
                hours = summary.rounded_hours,
            )
        })
        .collect()
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: Arial, Helvetica, sans-serif;
    margin: 2rem;
    color: #1f2933;
}

h1 {
    font-size: 1.75rem;
    margin-bottom: 1rem;
}

table {
    border-collapse: collapse;
    min-width: 24rem;
}

th, td {
    border: 1px solid #d1d5db;
    padding: 0.5rem 0.75rem;
    text-align: left;
}

th {
    background-color: #f3f4f6;
}

td:last-child {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

tr.low-hours {
    background-color: #fde2e2;
}
"#
}
