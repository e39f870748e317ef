use thiserror::Error;

use crate::{cli::CliError, term::TermError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Cli(#[from] CliError),

    #[error("failed to start the logger")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("terminal error")]
    Term(#[from] TermError),

    #[error("prompt failed")]
    Dialog(#[from] inquire::InquireError),
}
