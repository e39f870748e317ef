pub mod cli;
pub mod dialog;
pub mod error;
pub mod screen;
pub mod term;

pub use error::AppError;
