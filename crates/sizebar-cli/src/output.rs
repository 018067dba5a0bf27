/// Output orchestration — buffered bar listing or streaming entries.
use anyhow::Context;
use sizebar_core::render;
use sizebar_core::scan::events::TracingSink;
use sizebar_core::scan::stream::{self, StreamEvent};
use std::io::{self, Write};
use tracing::warn;

/// Scan everything up front, then print the sorted, bar-annotated
/// listing.
pub fn print_buffered(path: &str) -> anyhow::Result<()> {
    let report = sizebar_core::scan::scan(path, &TracingSink)?;

    let mut out = io::stdout().lock();
    for line in render::format_lines(&report) {
        writeln!(out, "{line}").context("writing to stdout")?;
    }
    Ok(())
}

/// Print each immediate child as soon as it is sized, then the summary.
///
/// The bar column is omitted: the grand total is not known until the
/// last child finishes.
pub fn print_streaming(path: &str) -> anyhow::Result<()> {
    let handle = stream::start_stream(path)?;
    let root = handle.root.clone();

    let mut out = io::stdout().lock();
    for event in handle.events.iter() {
        match event {
            StreamEvent::Entry { name, size } => {
                writeln!(out, "{}", render::stream_line(&name, size))
                    .context("writing to stdout")?;
                out.flush().context("flushing stdout")?;
            }
            StreamEvent::Skipped { path, message } => {
                warn!(
                    "skipping path that could not be read {}: {}",
                    path.display(),
                    message
                );
            }
        }
    }

    let total = handle.join()?;
    writeln!(out, "{}", render::SEPARATOR).context("writing to stdout")?;
    writeln!(out, "{}", render::summary_line(root.as_str(), total))
        .context("writing to stdout")?;
    Ok(())
}
