use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// A labeled polyline for [`write_line_chart_png`].
pub struct ChartSeries {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn new(label: &str, color: RGBColor, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.to_string(),
            color,
            points,
        }
    }
}

pub fn write_line_chart_png(
    output_path: &str,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[ChartSeries],
) -> Result<(), ChartError> {
    render_line_chart_png(output_path, caption, x_desc, y_desc, series)
}

fn render_line_chart_png(
    output_path: &str,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[ChartSeries],
) -> Result<(), ChartError> {
    let points: Vec<(f64, f64)> = series
        .iter()
        .flat_map(|s| s.points.iter().copied())
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let (x_range, y_range) = axis_ranges(&points);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    for item in series {
        let color = item.color;
        chart
            .draw_series(LineSeries::new(
                item.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(2),
            ))
            .map_err(|e| ChartError::Render(e.to_string()))?
            .label(item.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&color).stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

fn axis_ranges(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    (pad_range(min_x, max_x), pad_range(min_y, max_y))
}

// Degenerate ranges (single point, flat series) are widened so plotters has
// a nonzero span to draw on.
fn pad_range(min_value: f64, max_value: f64) -> std::ops::Range<f64> {
    let span = max_value - min_value;
    if span <= f64::EPSILON {
        (min_value - 1.0)..(max_value + 1.0)
    } else {
        let pad = span * 0.05;
        (min_value - pad)..(max_value + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_line_chart_png_writes_a_nonempty_file() {
        let output_file = assert_fs::NamedTempFile::new("chart.png").unwrap();
        let series = vec![
            ChartSeries::new(
                "first",
                RGBColor(30, 122, 204),
                vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)],
            ),
            ChartSeries::new(
                "second",
                RGBColor(204, 84, 30),
                vec![(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)],
            ),
        ];

        write_line_chart_png(
            output_file.path().to_str().unwrap(),
            "Test Chart",
            "x",
            "y",
            &series,
        )
        .unwrap();

        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_line_chart_png_ignores_empty_series() {
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();
        write_line_chart_png(
            output_file.path().to_str().unwrap(),
            "Empty",
            "x",
            "y",
            &[],
        )
        .unwrap();

        output_file.assert(predicate::path::missing());
    }

    #[test]
    fn pad_range_widens_a_flat_span() {
        let range = pad_range(3.0, 3.0);
        assert_eq!(range.start, 2.0);
        assert_eq!(range.end, 4.0);
    }
}
