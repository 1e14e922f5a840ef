use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("command name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
