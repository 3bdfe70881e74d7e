use anyhow::Result;
use clap::Parser;
use retag_core::{expand_home, Config, TagEdit};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "retag", version, about = "Edit tags for an audio file.")]
struct Cli {
    /// Path to the audio file
    file_path: PathBuf,

    /// Title of the track
    #[arg(long)]
    title: Option<String>,

    /// Artist of the track
    #[arg(long)]
    artist: Option<String>,

    /// Album of the track
    #[arg(long)]
    album: Option<String>,

    /// Year of the track
    #[arg(long)]
    year: Option<String>,

    /// Path to the image file to be used as album cover
    ///
    /// MP3 files get an additional ID3v2 front-cover frame. FLAC files have
    /// all existing pictures replaced. Other formats skip the cover but still
    /// save the remaining edits.
    #[arg(long)]
    cover: Option<PathBuf>,

    /// List current tags of the audio file (edit options are ignored)
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn edit(&self) -> TagEdit {
        TagEdit {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            year: self.year.clone(),
            cover: self.cover.as_deref().map(expand_home),
        }
    }
}

fn log_filter(verbose: u8, default_level: &str) -> String {
    match verbose {
        0 => default_level.to_string(),
        1 => String::from("info"),
        2 => String::from("debug"),
        _ => String::from("trace"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();

    let default_level = loaded
        .as_ref()
        .map_or_else(|_| Config::default().log_level, |config| config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(log_filter(cli.verbose, &default_level))
            }),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring configuration: {:#}", e);
        Config::default()
    });

    let path = expand_home(&cli.file_path);

    if cli.list {
        commands::list_tags(&path);
    } else {
        commands::edit_tags(&path, &cli.edit(), &config);
    }

    Ok(())
}
