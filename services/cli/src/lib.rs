mod cli;
mod commands;
mod demo;
mod infra;

use microfinance_risk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
