use std::time::Instant;

use log::{debug, info};

use crate::{
    core::{
        config::{Mode, RenderConfig, output_path_with_jpg},
        data::read_points_from_path,
        error::PlotError,
    },
    render::render,
};

use super::parse::Cli;

/// Resolve the arguments into a validated configuration.
pub fn config_from_args(a: &Cli) -> Result<RenderConfig, PlotError> {
    let mode: Mode = a.mode.parse()?;
    let mut b = RenderConfig::builder(mode)
        .size(a.width, a.height)
        .point_radius(a.point_size)
        .draw_points(a.draw_points);
    if let Some(c) = &a.fill_color {
        b = b.point_fill(c);
    }
    Ok(b.build()?)
}

/// Load, render and save one image.
pub fn plot(a: &Cli) -> Result<(), PlotError> {
    let cfg = config_from_args(a)?;
    let output = output_path_with_jpg(&a.output_file);

    let t_ingest = Instant::now();
    let data = read_points_from_path(&a.input_file)?;
    let dur_ingest = t_ingest.elapsed().as_micros();
    info!(
        "{}: {} points, {} invalid lines skipped",
        a.input_file,
        data.points.len(),
        data.rejected.len()
    );

    let t_render = Instant::now();
    let canvas = render(&data, &cfg)?;
    let dur_render = t_render.elapsed().as_micros();

    let t_save = Instant::now();
    canvas.save_jpeg(&output)?;
    let dur_save = t_save.elapsed().as_micros();
    info!("wrote {output} ({}×{}, {} mode)", cfg.width, cfg.height, cfg.mode);

    if a.debug {
        debug!("ingest {dur_ingest} µs   render {dur_render} µs   encode {dur_save} µs");
    }
    Ok(())
}
