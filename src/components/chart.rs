//! Chart Components
//!
//! Allocation pie and performance bar charts using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::format_share_compact;
use crate::model::PerformancePoint;

/// Slice colors for the allocation pie
const SLICE_COLORS: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8",
    "#82ca9d", "#ffc658", "#ff7300", "#00ff00", "#ff00ff",
];

/// Fill color for performance bars
const BAR_COLOR: &str = "#8884d8";

/// Label for one pie slice: symbol plus its share of the visible total.
fn slice_label(symbol: &str, ratio: f64, visible_total: f64) -> String {
    let share = if visible_total > 0.0 {
        ratio / visible_total
    } else {
        0.0
    };
    format!("{}: {}", symbol, format_share_compact(share))
}

/// Allocation pie chart with a legend. `entries` are the already-filtered
/// visible allocations in display order.
#[component]
pub fn AllocationPie(entries: Vec<(String, f64)>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let entries_for_draw = entries.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &entries_for_draw);
        }
    });

    let visible_total: f64 = entries.iter().map(|(_, ratio)| ratio).sum();

    view! {
        <div class="flex flex-col items-center">
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="w-64 h-64"
            />

            // Legend with slice labels
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {entries.iter().enumerate().map(|(idx, (symbol, ratio))| {
                    let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                    let label = slice_label(symbol, *ratio, visible_total);
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Bar chart of percent change per period.
#[component]
pub fn PerformanceBars(points: Vec<PerformancePoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Draw the allocation pie on canvas
fn draw_pie(canvas: &HtmlCanvasElement, entries: &[(String, f64)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    let total: f64 = entries.iter().map(|(_, ratio)| ratio).sum();
    if total <= 0.0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No allocation data", cx - 60.0, cy);
        return;
    }

    let mut start_angle = -std::f64::consts::FRAC_PI_2;
    for (idx, (_, ratio)) in entries.iter().enumerate() {
        let sweep = ratio / total * std::f64::consts::PI * 2.0;
        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, start_angle + sweep);
        ctx.close_path();
        ctx.fill();

        start_angle += sweep;
    }
}

/// Draw the performance bars on canvas
fn draw_bars(canvas: &HtmlCanvasElement, points: &[PerformancePoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No performance data", width / 2.0 - 80.0, height / 2.0);
        return;
    }

    // Symmetric y range around zero so the baseline sits mid-chart
    let max_abs = points
        .iter()
        .map(|p| p.change_percent.abs())
        .fold(1.0f64, f64::max);
    let y_max = max_abs * 1.1;
    let y_min = -y_max;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}%", value), 5.0, y + 4.0);
    }

    let zero_y = margin_top + (y_max / (y_max - y_min)) * chart_height;
    let slot_width = chart_width / points.len() as f64;
    let bar_width = slot_width * 0.6;

    ctx.set_fill_style(&BAR_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let bar_height = (point.change_percent / (y_max - y_min)) * chart_height;

        if bar_height >= 0.0 {
            ctx.fill_rect(x, zero_y - bar_height, bar_width, bar_height);
        } else {
            ctx.fill_rect(x, zero_y, bar_width, -bar_height);
        }
    }

    // Period labels under the bars
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = margin_left + i as f64 * slot_width + slot_width / 2.0 - 10.0;
        let _ = ctx.fill_text(&point.period, x, height - 10.0);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_label_shows_share_of_visible_total() {
        assert_eq!(slice_label("BTC", 1.0, 1.0), "BTC: 100.0%");
        assert_eq!(slice_label("ETH", 0.25, 0.5), "ETH: 50.0%");
    }

    #[test]
    fn slice_label_handles_empty_total() {
        assert_eq!(slice_label("BTC", 0.0, 0.0), "BTC: 0.0%");
    }
}
