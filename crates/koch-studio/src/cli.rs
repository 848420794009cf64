use clap::Parser;
use koch_core::{Depth, parse_depth_arg};

#[derive(Debug, Parser)]
#[command(
    name = "koch",
    about = "Interactive Koch snowflake viewer",
    version
)]
pub struct Cli {
    /// Initial subdivision depth, clamped to 0..=10. Only one value is used.
    #[arg(value_name = "DEPTH", allow_negative_numbers = true)]
    pub depth: Vec<String>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Wait for vertical sync when presenting.
    #[arg(long)]
    pub vsync: bool,

    /// Log filter (env_logger syntax). Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    /// Depth to start with. Bad input falls back to 0 with a warning.
    pub fn initial_depth(&self) -> Depth {
        match self.depth.as_slice() {
            [] => Depth::MIN,
            [arg] => parse_depth_arg(arg).unwrap_or_else(|err| {
                log::warn!("{err}; starting at depth 0");
                Depth::MIN
            }),
            _ => {
                log::warn!("ignoring invalid arguments {:?}", self.depth);
                Depth::MIN
            }
        }
    }
}
