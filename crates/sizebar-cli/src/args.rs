/// Command-line argument surface.
use clap::Parser;

/// Report the size of every direct child of a directory, with a
/// proportional bar per entry.
#[derive(Parser, Debug)]
#[command(name = "sizebar", version, about)]
pub struct Args {
    /// Directory to size up.
    #[arg(default_value = ".")]
    pub path: String,

    /// Print each entry as soon as it is sized, without the bar column.
    #[arg(long)]
    pub no_bar: bool,
}
