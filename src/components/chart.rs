//! Blood Pressure Chart
//!
//! Bounded time series of systolic readings drawn on an HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::DiagnosisRecord;
use crate::state::global::GlobalState;

/// Fixed y-axis domain; readings outside it clamp to the plot edge.
const Y_MIN: f64 = 60.0;
const Y_MAX: f64 = 180.0;
const Y_STEP: f64 = 20.0;

/// Most recent periods charted per patient.
const WINDOW: usize = 6;

const SYSTOLIC_COLOR: &str = "#e66fd2";
const DIASTOLIC_COLOR: &str = "#8c6fe6";

/// Chart-ready projection of a diagnosis history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    /// "Mon YYYY" label per point, oldest first.
    pub labels: Vec<String>,
    pub systolic: Vec<f64>,
    /// Derived alongside systolic; feeds the legend readout rather than a
    /// second plotted line.
    pub diastolic: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.systolic.is_empty()
    }
}

/// Project a most-recent-first history onto at most the last six periods,
/// oldest first.
pub fn project(history: &[DiagnosisRecord]) -> ChartSeries {
    let mut window: Vec<&DiagnosisRecord> = history.iter().take(WINDOW).collect();
    window.reverse();

    ChartSeries {
        labels: window.iter().map(|r| r.period_label()).collect(),
        systolic: window
            .iter()
            .map(|r| r.blood_pressure.systolic.value)
            .collect(),
        diastolic: window
            .iter()
            .map(|r| r.blood_pressure.diastolic.value)
            .collect(),
    }
}

/// Blood pressure trend chart with the latest systolic/diastolic readout.
#[component]
pub fn BloodPressureChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // One projection per selection; setting the memo's new value drops the
    // previous series, so a single chart is live at any time.
    let series = create_memo(move |_| {
        state
            .selected
            .get()
            .map(|patient| project(&patient.diagnosis_history))
            .unwrap_or_default()
    });

    // Redraw whenever the selection changes. Drawing clears the canvas
    // first, so repeated selections never stack visuals.
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &series);
        }
    });

    view! {
        <div>
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-slate-800">"Blood Pressure"</h3>
                <span class="text-xs text-slate-500">"Last 6 periods"</span>
            </div>

            <canvas
                node_ref=canvas_ref
                width="760"
                height="300"
                class="w-full h-64 rounded-lg"
            />

            // Legend readout for the latest period
            <div class="flex items-center gap-6 mt-3 text-sm">
                <LegendEntry color=SYSTOLIC_COLOR label="Systolic" value=Signal::derive(move || {
                    series.get().systolic.last().copied()
                }) />
                <LegendEntry color=DIASTOLIC_COLOR label="Diastolic" value=Signal::derive(move || {
                    series.get().diastolic.last().copied()
                }) />
            </div>
        </div>
    }
}

/// One legend swatch with the latest value of its series.
#[component]
fn LegendEntry(
    color: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <span class="flex items-center gap-2 text-slate-600">
            <span
                class="w-3 h-3 rounded-full inline-block"
                style=format!("background-color: {}", color)
            />
            {label}
            <span class="font-semibold text-slate-900">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())}
            </span>
        </span>
    }
}

/// Draw the series on the canvas: clear, fixed 60-180 grid, systolic
/// polyline with point markers, one x label per point.
fn draw_series(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 48.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#f4f0fe");
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal gridline per 20 mmHg step, 180 at the top
    let steps = ((Y_MAX - Y_MIN) / Y_STEP) as i32;
    ctx.set_line_width(1.0);
    for i in 0..=steps {
        let y = margin_top + (f64::from(i) / f64::from(steps)) * chart_height;

        ctx.set_stroke_style_str("#e3e4e6");
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = Y_MAX - f64::from(i) * Y_STEP;
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&value.to_string(), 8.0, y + 4.0);
    }

    if series.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text(
            "No blood pressure history",
            width / 2.0 - 80.0,
            height / 2.0,
        );
        return;
    }

    let span = series.systolic.len().saturating_sub(1).max(1) as f64;
    let x_at = |i: usize| margin_left + (i as f64 / span) * chart_width;
    let y_at = |value: f64| {
        let clamped = value.clamp(Y_MIN, Y_MAX);
        margin_top + ((Y_MAX - clamped) / (Y_MAX - Y_MIN)) * chart_height
    };

    // Systolic polyline
    ctx.set_stroke_style_str(SYSTOLIC_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in series.systolic.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(*value));
        } else {
            ctx.line_to(x_at(i), y_at(*value));
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style_str(SYSTOLIC_COLOR);
    for (i, value) in series.systolic.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(*value), 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels
    ctx.set_fill_style_str("#6b7280");
    ctx.set_font("12px sans-serif");
    for (i, label) in series.labels.iter().enumerate() {
        let _ = ctx.fill_text(label, x_at(i) - 16.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BloodPressure, VitalReading};

    fn record(month: &str, year: i32, systolic: f64, diastolic: f64) -> DiagnosisRecord {
        let reading = |value: f64| VitalReading {
            value,
            levels: "Normal".to_string(),
        };
        DiagnosisRecord {
            month: month.to_string(),
            year,
            blood_pressure: BloodPressure {
                systolic: reading(systolic),
                diastolic: reading(diastolic),
            },
            respiratory_rate: reading(20.0),
            temperature: reading(98.6),
            heart_rate: reading(78.0),
        }
    }

    #[test]
    fn test_project_caps_window_at_six_points() {
        // Most recent first: August back to January.
        let months = [
            "August", "July", "June", "May", "April", "March", "February", "January",
        ];
        let history: Vec<_> = months
            .iter()
            .enumerate()
            .map(|(i, month)| record(month, 2024, 100.0 + i as f64, 70.0))
            .collect();

        let series = project(&history);

        assert_eq!(series.systolic.len(), 6);
        assert_eq!(
            series.labels,
            vec![
                "Mar 2024", "Apr 2024", "May 2024", "Jun 2024", "Jul 2024", "Aug 2024"
            ]
        );
        // Chronological order: the oldest charted period comes first.
        assert_eq!(series.systolic, vec![105.0, 104.0, 103.0, 102.0, 101.0, 100.0]);
    }

    #[test]
    fn test_project_short_history_keeps_all_points() {
        let history = vec![
            record("February", 2024, 118.0, 76.0),
            record("January", 2024, 122.0, 78.0),
        ];

        let series = project(&history);

        assert_eq!(series.labels, vec!["Jan 2024", "Feb 2024"]);
        assert_eq!(series.systolic, vec![122.0, 118.0]);
        assert_eq!(series.diastolic, vec![78.0, 76.0]);
    }

    #[test]
    fn test_project_single_point() {
        let history = vec![record("January", 2024, 120.0, 80.0)];

        let series = project(&history);

        assert_eq!(series.labels, vec!["Jan 2024"]);
        assert_eq!(series.systolic, vec![120.0]);
    }

    #[test]
    fn test_project_empty_history() {
        let series = project(&[]);
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
    }
}
