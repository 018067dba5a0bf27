/// Sizebar CLI — terminal frontend.
///
/// Parses arguments, picks the output mode, and writes the listing to
/// stdout. All sizing logic lives in `sizebar-core`.
pub mod args;

mod output;

use clap::Parser;

/// Parse arguments and run the selected output mode.
pub fn run() -> anyhow::Result<()> {
    let args = args::Args::parse();
    if args.no_bar {
        output::print_streaming(&args.path)
    } else {
        output::print_buffered(&args.path)
    }
}
