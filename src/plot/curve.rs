use std::io;
use std::path::Path;

use plotters::{
    prelude::{BitMapBackend, ChartBuilder, IntoDrawingArea, LabelAreaPosition, PathElement},
    series::LineSeries,
    style::{Color, BLACK, BLUE, RED, WHITE},
};
use tracing::info;

use crate::train::epoch_stats::EpochStats;

fn plot_err<E: std::fmt::Display>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

/// Draws the accuracy and loss curves of a training log into a PNG.
///
/// The x axis is the 0-based epoch index; both series share the y axis.
pub fn plot_training_log<P: AsRef<Path>>(log: &[EpochStats], path: P) -> io::Result<()> {
    if log.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "training log is empty"));
    }
    let path = path.as_ref();

    let max_epoch = log.len().max(2) - 1;
    let y_max = log.iter()
        .map(|s| s.accuracy.max(s.mean_loss))
        .fold(1.0, f64::max)
        * 1.05;

    let root_area = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_err)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Accuracy / loss per epoch", ("sans-serif", 30))
        .build_cartesian_2d(0..max_epoch, 0.0..y_max)
        .map_err(plot_err)?;

    ctx.configure_mesh().x_desc("epoch").draw().map_err(plot_err)?;

    ctx.draw_series(LineSeries::new(
        log.iter().enumerate().map(|(i, s)| (i, s.accuracy)),
        &BLUE,
    ))
    .map_err(plot_err)?
    .label("acc")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    ctx.draw_series(LineSeries::new(
        log.iter().enumerate().map(|(i, s)| (i, s.mean_loss)),
        &RED,
    ))
    .map_err(plot_err)?
    .label("loss")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root_area.present().map_err(plot_err)?;
    info!(path = %path.display(), "wrote training curve");
    Ok(())
}
