use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use lyricset::clients::{
    GeniusClient, JsonlWriter, LyricScraper,
    entities::OutputRecord,
    errors::Result,
};

/// Artists whose songs make up the training set. Edit to taste.
pub const ARTISTS: &[&str] = &["Peso Pluma", "Billie Eilish", "Bad Bunny"];

/// How many songs to collect per artist.
pub const SONGS_PER_ARTIST: usize = 20;

/// Where the JSONL rows end up.
pub const OUTPUT_PATH: &str = "merged_lyrics_all.jsonl";

// Configuration for the Scraper struct
pub struct Config {
    pub genius: GeniusClient,
    pub lyrics: LyricScraper,
    pub output_path: PathBuf,
    pub songs_per_artist: usize,
}

pub struct ConfigBuilder {
    genius: Option<GeniusClient>,
    lyrics: Option<LyricScraper>,
    output_path: Option<PathBuf>,
    songs_per_artist: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            genius: None,
            lyrics: None,
            output_path: None,
            songs_per_artist: None,
        }
    }

    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn songs_per_artist(mut self, count: usize) -> Self {
        self.songs_per_artist = Some(count);
        self
    }

    pub fn genius(mut self, genius: GeniusClient) -> Self {
        self.genius = Some(genius);
        self
    }

    pub fn lyrics(mut self, lyrics: LyricScraper) -> Self {
        self.lyrics = Some(lyrics);
        self
    }

    pub fn build(self) -> Result<Config> {
        let genius = match self.genius {
            Some(g) => g,
            None => GeniusClient::try_default()?,
        };
        let lyrics = match self.lyrics {
            Some(l) => l,
            None => LyricScraper::try_default()?,
        };
        Ok(Config {
            genius,
            lyrics,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(OUTPUT_PATH)),
            songs_per_artist: self.songs_per_artist.unwrap_or(SONGS_PER_ARTIST),
        })
    }
}

// The main Scraper struct that builds the training set
pub struct Scraper {
    config: Config,
}

impl Scraper {
    pub fn new(config: Config) -> Self {
        Scraper { config }
    }

    /// Build the training set for `artists`, one JSONL row per scraped song.
    ///
    /// Search failures abort the run; per-song extraction failures only skip
    /// that song. The output file is truncated at start and written row by
    /// row, so completed rows survive a crash.
    pub async fn run(&self, artists: &[&str]) -> Result<()> {
        info!("Starting lyric scrape for {} artists ...", artists.len());
        let mut writer = JsonlWriter::create(&self.config.output_path)?;

        for artist in artists {
            debug!("Searching songs for {artist} ...");
            let songs = self
                .config
                .genius
                .search_songs(artist, self.config.songs_per_artist)
                .await?;
            debug!("Found {} songs for {artist}", songs.len());

            let bar = progress_bar(songs.len() as u64, artist);
            for song in &songs {
                let extracted = self.config.lyrics.scrape(&song.url).await;
                record_song(&mut writer, artist, extracted)?;
                bar.inc(1);
            }
            bar.finish();
        }

        println!("✅  Saved → {}", self.config.output_path.display());
        Ok(())
    }
}

// Appends one row per successful extraction; a failed song is skipped and
// only shows up as a progress tick. Write errors are still fatal.
fn record_song(writer: &mut JsonlWriter, artist: &str, extracted: Result<String>) -> Result<()> {
    if let Ok(lyrics) = extracted {
        writer.append(&OutputRecord::style_imitation(artist, lyrics))?;
    }
    Ok(())
}

fn progress_bar(len: u64, artist: &str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("progress template is valid")
            .progress_chars("=> "),
    );
    bar.set_message(artist.to_string());
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricset::clients::errors::Error;
    use std::fs;

    #[test]
    fn failed_extraction_skips_song_but_keeps_going() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut writer = JsonlWriter::create(&path).unwrap();

        let extractions: Vec<Result<String>> = vec![
            Ok("first song".to_string()),
            Err(Error::NoLyrics("https://genius.com/gone".to_string())),
            Ok("third song".to_string()),
        ];
        for extracted in extractions {
            record_song(&mut writer, "Billie Eilish", extracted).unwrap();
        }
        drop(writer);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["output"], "first song");
        assert_eq!(last["output"], "third song");
    }

    #[test]
    fn builder_defaults_match_the_batch_job() {
        let config = ConfigBuilder::new()
            .genius(GeniusClient::new(reqwest::Client::new(), "token".into()))
            .lyrics(LyricScraper::new(reqwest::Client::new()))
            .build()
            .unwrap();
        assert_eq!(config.songs_per_artist, 20);
        assert_eq!(config.output_path, PathBuf::from("merged_lyrics_all.jsonl"));
    }

    #[test]
    fn builder_overrides_stick() {
        let config = ConfigBuilder::new()
            .genius(GeniusClient::new(reqwest::Client::new(), "token".into()))
            .lyrics(LyricScraper::new(reqwest::Client::new()))
            .output_path(PathBuf::from("elsewhere.jsonl"))
            .songs_per_artist(3)
            .build()
            .unwrap();
        assert_eq!(config.songs_per_artist, 3);
        assert_eq!(config.output_path, PathBuf::from("elsewhere.jsonl"));
    }
}
