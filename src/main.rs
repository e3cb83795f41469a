mod commands;
mod greeting;
mod math;
mod terminal;

use commands::{CommandLine, greet};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    logging::init_logging();

    greet::greet(&args)
}
