use clap::{ArgAction, Parser};

use crate::core::constants::{DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_POINT_SIZE};

/// Top-level CLI structure.
///
/// `-h` is the output height, so help lives on `-?` / `--help`.
#[derive(Parser, Debug)]
#[command(
    name = "constructible-plot",
    about = "Plot 2-column numeric data as points or as lines and circles through every pair",
    disable_help_flag = true
)]
pub struct Cli {
    /// Output MODE, one of: points, lines
    #[arg(short, long, value_name = "MODE")]
    pub mode: String,

    /// Data input FILE (use `-` for stdin)
    #[arg(short, long = "input-file", value_name = "FILE")]
    pub input_file: String,

    /// Image output FILE; `.jpg` is appended when missing
    #[arg(short, long = "output-file", value_name = "FILE")]
    pub output_file: String,

    /// WIDTH of the output in pixels; also sets the scale of both axes
    #[arg(short, long, value_name = "WIDTH", default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// HEIGHT of the output in pixels
    #[arg(short = 'h', long, value_name = "HEIGHT", default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: u32,

    /// SIZE (radius) of points, in pixels
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_POINT_SIZE)]
    pub point_size: u32,

    /// Also draw the points in line mode
    #[arg(short, long)]
    pub draw_points: bool,

    /// Point fill colour (name or `#RRGGBB`)
    #[arg(long, value_name = "COLOR")]
    pub fill_color: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Show this message and exit
    #[arg(short = '?', long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
