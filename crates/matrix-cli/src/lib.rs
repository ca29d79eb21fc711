//! Library side of the `market-matrix` command.

pub mod logging;
pub mod outline;
pub mod session;
