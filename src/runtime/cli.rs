use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for audiosort
#[derive(Parser, Debug)]
#[command(name = "audiosort")]
#[command(about = "Rename numbered MP3 files to \"NNN <Album>.mp3\" and sync their track/album tags")]
#[command(version)]
pub struct Cli {
    /// Directory containing the numbered MP3 files
    pub directory: PathBuf,

    /// Album or book name used in the new file names and tags
    #[arg(short, long, env = "AUDIOSORT_ALBUM")]
    pub album: String,

    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print log lines without the [HH:MM:SS] prefix
    #[arg(long)]
    pub no_timestamps: bool,
}
