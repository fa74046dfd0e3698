mod cli;
mod commands;
mod io;

use audience_builder::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
