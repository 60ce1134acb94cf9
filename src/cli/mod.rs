mod handlers;
pub mod parse;

pub use handlers::config_from_args;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run(cli: &Cli) -> Result<(), PlotError> {
    handlers::plot(cli)
}
