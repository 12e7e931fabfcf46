//! Chart Components
//!
//! Dashboard charts drawn on HTML5 Canvas: a bar chart for payroll
//! expenses, a line chart for hire growth, and a doughnut for the
//! per-department payroll split. Each renderer takes a finished
//! [`ChartSeries`] and tolerates an empty one.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::ChartSeries;

/// Slice colors for the doughnut chart
const SLICE_COLORS: [&str; 5] = ["#FFC107", "#4CAF50", "#FF5722", "#4A90E2", "#8E44AD"];

/// Bar fill for the payroll-expense chart
const BAR_COLOR: &str = "#4A90E2";

/// Line stroke for the hire-growth chart
const LINE_COLOR: &str = "#FF9F40";

const PANEL_BG: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const HINT_COLOR: &str = "#6b7280"; // gray-500

/// Vertical bar chart for a labelled series
#[component]
pub fn BarChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &series);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
    }
}

/// Line chart with point markers
#[component]
pub fn LineChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &series);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
    }
}

/// Doughnut chart with a color legend under it
#[component]
pub fn DoughnutChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut_chart(&canvas, &series);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="320" height="320" class="mx-auto" />
            <DoughnutLegend series=series />
        </div>
    }
}

/// Legend mapping slice colors to their labels
#[component]
fn DoughnutLegend(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                series.get()
                    .labels
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&PANEL_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn empty_hint(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&HINT_COLOR.into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("No data yet", width / 2.0 - 34.0, height / 2.0);
}

/// Draw the bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    clear(&ctx, width, height);

    let max = if series.max() > 0.0 { series.max() * 1.1 } else { 1.0 };

    // Horizontal grid lines with value labels
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if series.is_empty() {
        empty_hint(&ctx, width, height);
        return;
    }

    // Label slots even when some months have no value yet
    let slots = series.labels.len().max(series.values.len());
    let slot = chart_width / slots as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&BAR_COLOR.into());
    for (i, value) in series.values.iter().enumerate() {
        let bar_height = (value / max) * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    for (i, label) in series.labels.iter().enumerate() {
        let x = margin_left + i as f64 * slot + slot / 2.0 - 10.0;
        let _ = ctx.fill_text(label, x, height - 12.0);
    }
}

/// Draw the line chart on canvas
fn draw_line_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    clear(&ctx, width, height);

    let max = if series.max() > 0.0 { series.max() * 1.1 } else { 1.0 };

    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if series.is_empty() {
        empty_hint(&ctx, width, height);
        return;
    }

    let points = series.values.len();
    let step = if points > 1 { chart_width / (points - 1) as f64 } else { 0.0 };
    let x_at = |i: usize| {
        if points > 1 {
            margin_left + i as f64 * step
        } else {
            margin_left + chart_width / 2.0
        }
    };
    let y_at = |value: f64| margin_top + chart_height - (value / max) * chart_height;

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in series.values.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(*value));
        } else {
            ctx.line_to(x_at(i), y_at(*value));
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, value) in series.values.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Sparse x labels so long series stay readable
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    let stride = (series.labels.len() / 6).max(1);
    for (i, label) in series.labels.iter().enumerate().step_by(stride) {
        let _ = ctx.fill_text(label, x_at(i) - 14.0, height - 12.0);
    }
}

/// Draw the doughnut chart on canvas
fn draw_doughnut_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    clear(&ctx, width, height);

    let total = series.total();
    if total <= 0.0 {
        // Placeholder ring until data arrives
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.set_line_width(18.0);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius - 9.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
        empty_hint(&ctx, width, height);
        return;
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, value) in series.values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / total * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&SLICE_COLORS[i % SLICE_COLORS.len()].into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }

    // Punch the hole
    ctx.set_fill_style(&PANEL_BG.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}
