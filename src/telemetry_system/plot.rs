use std::path::Path;

use plotters::prelude::*;

use crate::telemetry_system::telemetry::SimulationSeries;

/// Render a dual-axis time chart for one body: position on the left axis,
/// velocity on the right, written as an SVG artifact.
pub fn plot_timeline(
    path: &Path,
    caption: &str,
    series: &SimulationSeries,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let t_max = match series.times.last() {
        Some(&t) if t > 0.0 => t,
        _ => 1.0,
    };
    let (pos_min, pos_max) = axis_bounds(&series.positions);
    let (vel_min, vel_max) = axis_bounds(&series.velocities);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, pos_min..pos_max)?
        .set_secondary_coord(0.0..t_max, vel_min..vel_max);

    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Position (meters)")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Velocity (m/s)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series
                .times
                .iter()
                .zip(series.positions.iter())
                .map(|(t, p)| (*t, *p)),
            &BLUE,
        ))?
        .label("position")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_secondary_series(LineSeries::new(
            series
                .times
                .iter()
                .zip(series.velocities.iter())
                .map(|(t, v)| (*t, *v)),
            &RED,
        ))?
        .label("velocity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn axis_bounds(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        // A flat series still needs a non-degenerate axis.
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}
