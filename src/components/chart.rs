//! Inline SVG charts: grouped bars, donut, line.
//!
//! Geometry is kept in plain functions so it can be checked without a DOM.
//! Every chart draws into a fixed `viewBox` and lets CSS scale it.

use std::f64::consts::PI;

use yew::prelude::*;

use crate::data::{Category, DailyVisits, LoanDay};

const GRID: &str = "#e2e8f0";
const AXIS: &str = "#64748b";
const LOANS_FILL: &str = "#10b981";
const RETURNS_FILL: &str = "#3b82f6";
const LINE_STROKE: &str = "#8b5cf6";

const TICKS: u32 = 4;

/// Plot area inside a chart's viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// y coordinate for `value` on an axis running 0..=`axis_max`.
    pub fn y_for(&self, value: u32, axis_max: u32) -> f64 {
        if axis_max == 0 {
            return self.baseline();
        }
        let v = value.min(axis_max) as f64;
        self.baseline() - v / axis_max as f64 * self.plot_height()
    }

    /// Left edge and width of the `i`th of `n` equal bands.
    pub fn band(&self, i: usize, n: usize) -> (f64, f64) {
        let w = self.plot_width() / n.max(1) as f64;
        (self.left + w * i as f64, w)
    }
}

/// Round tick step so that `ticks` steps cover `max` (1, 2 or 5 times a power of ten).
/// Clamped to `u32::MAX` near the top of the range.
pub fn tick_step(max: u32, ticks: u32) -> u32 {
    let raw = u64::from(max.div_ceil(ticks.max(1)).max(1));
    let mut magnitude = 1u64;
    while magnitude * 10 <= raw {
        magnitude *= 10;
    }
    let step = [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10 * magnitude);
    u32::try_from(step).unwrap_or(u32::MAX)
}

pub fn axis_ticks(max: u32) -> Vec<u32> {
    let step = tick_step(max, TICKS);
    (0..=TICKS).map(|i| i.saturating_mul(step)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Splits a circle among `values`, leaving `pad_deg` of gap after each slice.
/// Angles are clockwise from 12 o'clock.
pub fn donut_slices(values: &[u32], pad_deg: f64) -> Vec<Slice> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let pad = if values.len() > 1 { pad_deg } else { 0.0 };
    let available = (360.0 - pad * values.len() as f64).max(0.0);

    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = available * *v as f64 / total as f64;
            let slice = Slice {
                start_deg: cursor,
                end_deg: cursor + sweep,
            };
            cursor += sweep + pad;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed SVG path for a ring segment.
pub fn ring_segment_path(cx: f64, cy: f64, inner: f64, outer: f64, slice: Slice) -> String {
    let sweep = slice.end_deg - slice.start_deg;
    if sweep >= 360.0 {
        return full_ring_path(cx, cy, inner, outer, slice.start_deg);
    }
    let large = if sweep > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, slice.start_deg);
    let (ox2, oy2) = polar(cx, cy, outer, slice.end_deg);
    let (ix2, iy2) = polar(cx, cy, inner, slice.end_deg);
    let (ix1, iy1) = polar(cx, cy, inner, slice.start_deg);
    format!(
        "M {ox1:.2} {oy1:.2} A {outer} {outer} 0 {large} 1 {ox2:.2} {oy2:.2} \
         L {ix2:.2} {iy2:.2} A {inner} {inner} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
    )
}

// An arc whose ends coincide draws nothing, so a whole ring is two half
// arcs per edge. The inner edge runs the other way to leave the hole unfilled.
fn full_ring_path(cx: f64, cy: f64, inner: f64, outer: f64, start_deg: f64) -> String {
    let (ox1, oy1) = polar(cx, cy, outer, start_deg);
    let (ox2, oy2) = polar(cx, cy, outer, start_deg + 180.0);
    let (ix1, iy1) = polar(cx, cy, inner, start_deg);
    let (ix2, iy2) = polar(cx, cy, inner, start_deg + 180.0);
    format!(
        "M {ox1:.2} {oy1:.2} A {outer} {outer} 0 0 1 {ox2:.2} {oy2:.2} \
         A {outer} {outer} 0 0 1 {ox1:.2} {oy1:.2} Z \
         M {ix1:.2} {iy1:.2} A {inner} {inner} 0 0 0 {ix2:.2} {iy2:.2} \
         A {inner} {inner} 0 0 0 {ix1:.2} {iy1:.2} Z"
    )
}

/// `points` attribute for a polyline through band centres.
pub fn line_points(frame: &Frame, values: &[u32], axis_max: u32) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let (x, w) = frame.band(i, values.len());
            (x + w / 2.0, frame.y_for(*v, axis_max))
        })
        .collect()
}

fn fmt_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn grid_and_axis(frame: &Frame, ticks: &[u32], axis_max: u32) -> Html {
    html! {
        <g class="chart-grid">
            { for ticks.iter().map(|t| {
                let y = frame.y_for(*t, axis_max);
                html! {
                    <>
                        <line x1={frame.left.to_string()} x2={(frame.width - frame.right).to_string()}
                              y1={y.to_string()} y2={y.to_string()}
                              stroke={GRID} stroke-dasharray="3 3" />
                        <text x={(frame.left - 8.0).to_string()} y={(y + 4.0).to_string()}
                              text-anchor="end" fill={AXIS} font-size="12">{ t.to_string() }</text>
                    </>
                }
            }) }
            <line x1={frame.left.to_string()} x2={frame.left.to_string()}
                  y1={frame.top.to_string()} y2={frame.baseline().to_string()} stroke={AXIS} />
            <line x1={frame.left.to_string()} x2={(frame.width - frame.right).to_string()}
                  y1={frame.baseline().to_string()} y2={frame.baseline().to_string()} stroke={AXIS} />
        </g>
    }
}

fn x_labels<'a>(frame: &Frame, labels: impl ExactSizeIterator<Item = &'a str>) -> Html {
    let n = labels.len();
    html! {
        <g class="chart-labels">
            { for labels.enumerate().map(|(i, label)| {
                let (x, w) = frame.band(i, n);
                html! {
                    <text x={(x + w / 2.0).to_string()} y={(frame.baseline() + 18.0).to_string()}
                          text-anchor="middle" fill={AXIS} font-size="12">{ label.to_string() }</text>
                }
            }) }
        </g>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoanBarChartProps {
    pub days: &'static [LoanDay],
}

#[function_component(LoanBarChart)]
pub fn loan_bar_chart(props: &LoanBarChartProps) -> Html {
    let frame = Frame { width: 640.0, height: 300.0, left: 40.0, right: 10.0, top: 10.0, bottom: 28.0 };
    let max = props.days.iter().map(|d| d.loans.max(d.returns)).max().unwrap_or(0);
    let ticks = axis_ticks(max);
    let axis_max = ticks.last().copied().unwrap_or(0);

    html! {
        <svg class="chart" viewBox={format!("0 0 {} {}", frame.width, frame.height)} role="img">
            { grid_and_axis(&frame, &ticks, axis_max) }
            { for props.days.iter().enumerate().map(|(i, d)| {
                let (x, w) = frame.band(i, props.days.len());
                let bar_w = w * 0.32;
                let gap = w * 0.04;
                let x_loans = x + w / 2.0 - gap / 2.0 - bar_w;
                let x_returns = x + w / 2.0 + gap / 2.0;
                let y_loans = frame.y_for(d.loans, axis_max);
                let y_returns = frame.y_for(d.returns, axis_max);
                html! {
                    <g class="bar-group">
                        <title>{ format!("{}: préstamos {}, devoluciones {}", d.label, d.loans, d.returns) }</title>
                        <rect x={x_loans.to_string()} y={y_loans.to_string()} width={bar_w.to_string()}
                              height={(frame.baseline() - y_loans).to_string()} rx="4" fill={LOANS_FILL} />
                        <rect x={x_returns.to_string()} y={y_returns.to_string()} width={bar_w.to_string()}
                              height={(frame.baseline() - y_returns).to_string()} rx="4" fill={RETURNS_FILL} />
                    </g>
                }
            }) }
            { x_labels(&frame, props.days.iter().map(|d| d.label)) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryDonutProps {
    pub categories: &'static [Category],
}

#[function_component(CategoryDonut)]
pub fn category_donut(props: &CategoryDonutProps) -> Html {
    let values: Vec<u32> = props.categories.iter().map(|c| c.percent).collect();
    let slices = donut_slices(&values, 5.0);

    html! {
        <svg class="chart chart-donut" viewBox="0 0 200 200" role="img">
            { for props.categories.iter().zip(slices).map(|(c, s)| html! {
                <path d={ring_segment_path(100.0, 100.0, 40.0, 80.0, s)} fill={c.color}>
                    <title>{ format!("{}: {}%", c.name, c.percent) }</title>
                </path>
            }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct VisitsLineChartProps {
    pub visits: &'static [DailyVisits],
}

#[function_component(VisitsLineChart)]
pub fn visits_line_chart(props: &VisitsLineChartProps) -> Html {
    let frame = Frame { width: 480.0, height: 200.0, left: 40.0, right: 10.0, top: 10.0, bottom: 28.0 };
    let values: Vec<u32> = props.visits.iter().map(|v| v.visits).collect();
    let ticks = axis_ticks(values.iter().copied().max().unwrap_or(0));
    let axis_max = ticks.last().copied().unwrap_or(0);
    let points = line_points(&frame, &values, axis_max);

    html! {
        <svg class="chart" viewBox={format!("0 0 {} {}", frame.width, frame.height)} role="img">
            { grid_and_axis(&frame, &ticks, axis_max) }
            <polyline points={fmt_points(&points)} fill="none" stroke={LINE_STROKE} stroke-width="3"
                      stroke-linejoin="round" />
            { for props.visits.iter().zip(points.iter()).map(|(v, (x, y))| html! {
                <circle cx={x.to_string()} cy={y.to_string()} r="4" fill={LINE_STROKE} stroke={LINE_STROKE} stroke-width="2">
                    <title>{ format!("{}: {} visitas", v.day, v.visits) }</title>
                </circle>
            }) }
            { x_labels(&frame, props.visits.iter().map(|v| v.day)) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CATEGORIES, WEEKLY_LOANS, WEEKLY_VISITS};

    const FRAME: Frame = Frame { width: 640.0, height: 300.0, left: 40.0, right: 10.0, top: 10.0, bottom: 28.0 };

    #[test]
    fn tick_steps_are_round() {
        assert_eq!(tick_step(67, 4), 20);
        assert_eq!(tick_step(189, 4), 50);
        assert_eq!(tick_step(80, 4), 20);
        assert_eq!(tick_step(3, 4), 1);
        assert_eq!(tick_step(0, 4), 1);
        assert_eq!(tick_step(4001, 4), 2000);
    }

    #[test]
    fn tick_steps_near_the_top_of_the_range() {
        assert_eq!(tick_step(u32::MAX, 4), 2_000_000_000);
        assert_eq!(tick_step(u32::MAX, 1), u32::MAX);
        assert_eq!(tick_step(u32::MAX, 0), u32::MAX);

        let ticks = axis_ticks(u32::MAX);
        assert_eq!(ticks.len(), 5);
        assert!(ticks.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ticks.last(), Some(&u32::MAX));
    }

    #[test]
    fn axis_covers_the_data() {
        let max = WEEKLY_LOANS.iter().map(|d| d.loans.max(d.returns)).max().unwrap();
        assert_eq!(axis_ticks(max), [0, 20, 40, 60, 80]);

        let max = WEEKLY_VISITS.iter().map(|v| v.visits).max().unwrap();
        let ticks = axis_ticks(max);
        assert!(*ticks.last().unwrap() >= max);
        assert_eq!(ticks, [0, 50, 100, 150, 200]);
    }

    #[test]
    fn y_stays_inside_the_plot() {
        assert_eq!(FRAME.y_for(0, 80), FRAME.baseline());
        assert_eq!(FRAME.y_for(80, 80), FRAME.top);
        assert_eq!(FRAME.y_for(500, 80), FRAME.top);
        assert_eq!(FRAME.y_for(10, 0), FRAME.baseline());
        let mid = FRAME.y_for(40, 80);
        assert!(mid > FRAME.top && mid < FRAME.baseline());
    }

    #[test]
    fn bands_tile_the_plot_width() {
        let n = WEEKLY_LOANS.len();
        let (first, w) = FRAME.band(0, n);
        let (last, _) = FRAME.band(n - 1, n);
        assert_eq!(first, FRAME.left);
        assert!((last + w - (FRAME.width - FRAME.right)).abs() < 1e-9);
    }

    #[test]
    fn donut_slices_fill_the_circle_minus_padding() {
        let values: Vec<u32> = CATEGORIES.iter().map(|c| c.percent).collect();
        let slices = donut_slices(&values, 5.0);
        assert_eq!(slices.len(), CATEGORIES.len());
        assert_eq!(slices[0].start_deg, 0.0);

        let swept: f64 = slices.iter().map(|s| s.end_deg - s.start_deg).sum();
        assert!((swept - (360.0 - 5.0 * values.len() as f64)).abs() < 1e-9);

        for pair in slices.windows(2) {
            assert!((pair[1].start_deg - pair[0].end_deg - 5.0).abs() < 1e-9);
        }
        // 35% is the biggest share, so it gets the widest slice.
        let widest = slices
            .iter()
            .map(|s| s.end_deg - s.start_deg)
            .fold(0.0, f64::max);
        assert!((widest - (slices[0].end_deg - slices[0].start_deg)).abs() < 1e-9);
    }

    #[test]
    fn donut_edge_cases() {
        assert!(donut_slices(&[], 5.0).is_empty());
        assert!(donut_slices(&[0, 0], 5.0).is_empty());

        let whole = donut_slices(&[7], 5.0);
        assert_eq!(whole, [Slice { start_deg: 0.0, end_deg: 360.0 }]);

        let ring = ring_segment_path(100.0, 100.0, 40.0, 80.0, whole[0]);
        assert!(ring.starts_with("M 100.00 20.00 A 80 80 0 0 1 100.00 180.00"));
        assert_eq!(ring.matches("A 80 80").count(), 2);
        assert_eq!(ring.matches("A 40 40").count(), 2);
        assert!(ring.contains("M 100.00 60.00 A 40 40 0 0 0 100.00 140.00"));
        assert!(!ring.contains('L'));
    }

    #[test]
    fn ring_path_shape() {
        let small = ring_segment_path(100.0, 100.0, 40.0, 80.0, Slice { start_deg: 0.0, end_deg: 90.0 });
        assert!(small.starts_with("M 100.00 20.00 A 80 80 0 0 1 180.00 100.00"));
        assert!(small.ends_with('Z'));

        let big = ring_segment_path(100.0, 100.0, 40.0, 80.0, Slice { start_deg: 0.0, end_deg: 270.0 });
        assert!(big.contains("A 80 80 0 1 1"));
        assert!(big.contains("A 40 40 0 1 0"));
    }

    #[test]
    fn line_points_follow_the_data() {
        let values: Vec<u32> = WEEKLY_VISITS.iter().map(|v| v.visits).collect();
        let pts = line_points(&FRAME, &values, 200);
        assert_eq!(pts.len(), values.len());
        assert!(pts.windows(2).all(|w| w[0].0 < w[1].0));

        // Saturday (189) is the peak, so its point is the highest on screen.
        let top = pts
            .iter()
            .enumerate()
            .min_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(i, _)| i);
        assert_eq!(top, Some(5));
    }
}
