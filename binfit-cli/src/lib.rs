use std::sync::LazyLock;
use std::time::Instant;

pub mod io;

/// Process start, the origin of the elapsed time in log lines
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
