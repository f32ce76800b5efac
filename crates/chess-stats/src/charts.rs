//! Chart rendering: one SVG line chart per derived view.

use plotters::prelude::*;

use crate::error::StatsError;
use crate::series;
use crate::table::MoveRow;

const CHART_SIZE: (u32, u32) = (960, 540);

struct ChartSeries<'a> {
    label: &'a str,
    color: RGBColor,
    points: Vec<(f64, f64)>,
}

/// Time taken by each player for each move, in seconds.
pub fn time_chart(rows: &[MoveRow]) -> Result<String, StatsError> {
    let seconds = series::time_per_move(rows)?;
    line_chart(
        "Time Taken by Each Player for Each Move",
        "Move Number",
        "Time (seconds)",
        &[
            ChartSeries {
                label: "White Player",
                color: BLUE,
                points: indexed(seconds.white.iter().map(|&v| v as f64), 1),
            },
            ChartSeries {
                label: "Black Player",
                color: RED,
                points: indexed(seconds.black.iter().map(|&v| v as f64), 1),
            },
        ],
    )
}

/// Cumulative capture counts; index 0 is the pre-game baseline.
pub fn captures_chart(rows: &[MoveRow]) -> Result<String, StatsError> {
    let captures = series::cumulative_captures(rows);
    line_chart(
        "Pieces Captured by Each Player vs. Move Number",
        "Move Number",
        "Pieces Captured",
        &[
            ChartSeries {
                label: "White",
                color: BLUE,
                points: indexed(captures.white.iter().map(|&v| v as f64), 0),
            },
            ChartSeries {
                label: "Black",
                color: RED,
                points: indexed(captures.black.iter().map(|&v| v as f64), 0),
            },
        ],
    )
}

/// Heuristic accuracy curves over the flattened move sequence.
pub fn accuracy_chart(rows: &[MoveRow]) -> Result<String, StatsError> {
    let accuracy = series::accuracy_curves(&series::flatten_moves(rows));
    line_chart(
        "Player Accuracy Over Time",
        "Move Number",
        "Accuracy",
        &[
            ChartSeries {
                label: "White Player Accuracy",
                color: BLUE,
                points: indexed(accuracy.white.iter().copied(), 1),
            },
            ChartSeries {
                label: "Black Player Accuracy",
                color: RED,
                points: indexed(accuracy.black.iter().copied(), 1),
            },
        ],
    )
}

/// Inter-move time differences; the first move has no delta and is omitted
/// from the plot rather than drawn as zero.
pub fn time_delta_chart(rows: &[MoveRow]) -> Result<String, StatsError> {
    let deltas = series::time_deltas(rows)?;
    line_chart(
        "Time Difference Between Moves",
        "Move Number",
        "Time Difference (seconds)",
        &[
            ChartSeries {
                label: "White",
                color: BLUE,
                points: present_points(&deltas.white),
            },
            ChartSeries {
                label: "Black",
                color: RED,
                points: present_points(&deltas.black),
            },
        ],
    )
}

/// Running average move time per player, in seconds.
pub fn average_time_chart(rows: &[MoveRow]) -> Result<String, StatsError> {
    let averages = series::running_average(rows)?;
    line_chart(
        "Average Move Time by Player",
        "Move Number",
        "Average Move Time (seconds)",
        &[
            ChartSeries {
                label: "White",
                color: BLUE,
                points: indexed(averages.white.iter().copied(), 1),
            },
            ChartSeries {
                label: "Black",
                color: RED,
                points: indexed(averages.black.iter().copied(), 1),
            },
        ],
    )
}

fn indexed(values: impl IntoIterator<Item = f64>, start: usize) -> Vec<(f64, f64)> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| ((i + start) as f64, v))
        .collect()
}

fn present_points(values: &[Option<i64>]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|d| ((i + 1) as f64, d as f64)))
        .collect()
}

fn line_chart(
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[ChartSeries],
) -> Result<String, StatsError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let (x_range, y_range) = axis_ranges(series);

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 28))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(56)
            .build_cartesian_2d(x_range, y_range)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(chart_err)?;

        for s in series {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(s.points.iter().copied(), &color))
                .map_err(chart_err)?
                .label(s.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(buf)
}

fn chart_err<E: std::fmt::Display>(e: E) -> StatsError {
    StatsError::Chart(e.to_string())
}

fn axis_ranges(series: &[ChartSeries]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }
    if x_min == x_max {
        x_max += 1.0;
    }
    if y_min == y_max {
        y_max += 1.0;
    }
    (x_min..x_max, y_min..y_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<MoveRow> {
        vec![
            MoveRow {
                white_move: "Nf3".to_string(),
                black_move: "e5".to_string(),
                white_time: "0:00:10".to_string(),
                black_time: "0:00:08".to_string(),
            },
            MoveRow {
                white_move: "Bxc6+".to_string(),
                black_move: "dxc6".to_string(),
                white_time: "0:00:25".to_string(),
                black_time: "0:00:12".to_string(),
            },
        ]
    }

    #[test]
    fn test_each_chart_renders_svg_with_caption() {
        let cases = [
            (time_chart(&rows()), "Time Taken by Each Player"),
            (captures_chart(&rows()), "Pieces Captured"),
            (accuracy_chart(&rows()), "Player Accuracy Over Time"),
            (time_delta_chart(&rows()), "Time Difference Between Moves"),
            (average_time_chart(&rows()), "Average Move Time by Player"),
        ];
        for (result, caption) in cases {
            let svg = result.unwrap();
            assert!(svg.contains("<svg"), "missing svg root for {caption}");
            assert!(svg.contains(caption), "missing caption {caption}");
        }
    }

    #[test]
    fn test_charts_accept_empty_rows() {
        let svg = captures_chart(&[]).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_time_chart_surfaces_clock_errors() {
        let mut bad = rows();
        bad[1].black_time = "abc".to_string();
        let err = time_chart(&bad).unwrap_err();
        assert!(matches!(err, StatsError::InvalidClock { row: 2, .. }));
    }
}
