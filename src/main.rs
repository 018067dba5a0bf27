//! Sizebar — directory-size visualizer for the terminal.
//!
//! Thin binary entry point. All logic lives in the `sizebar-core`
//! and `sizebar-cli` crates.

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries nothing but the listing.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    sizebar_cli::run()
}
