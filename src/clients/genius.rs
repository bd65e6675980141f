use std::collections::HashSet;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::{
    entities::Song,
    errors::{Error, Result},
};

const BASE_URL: &str = "https://api.genius.com";
const PER_PAGE: u32 = 20;
// Genius stops returning useful hits quickly; five pages is plenty for one artist
const MAX_PAGES: u32 = 5;
const PAGE_DELAY: Duration = Duration::from_millis(600);

#[derive(Deserialize, Debug)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Deserialize, Debug)]
struct SearchBody {
    hits: Vec<Hit>,
}

// A search hit may be a song, album or artist; `result` stays untyped until
// the hit kind is known.
#[derive(Deserialize, Debug)]
struct Hit {
    #[serde(rename = "type")]
    kind: String,
    result: Value,
}

/// Client for the Genius metadata API.
pub struct GeniusClient {
    http: reqwest::Client,
    token: String,
}

impl GeniusClient {
    /// Wrap an existing HTTP client with a bearer token.
    #[must_use]
    pub fn new(http: reqwest::Client, token: String) -> Self {
        GeniusClient { http, token }
    }

    /// Create a client from the `GENIUS_TOKEN` environment variable or raise
    /// a configuration error.
    pub fn try_default() -> Result<Self> {
        let token = std::env::var("GENIUS_TOKEN")
            .map_err(|_| Error::Configuration("Missing GENIUS_TOKEN in env".into()))?;
        Ok(GeniusClient::new(reqwest::Client::new(), token))
    }

    /// Search Genius for up to `max_songs` unique songs matching `artist`.
    ///
    /// Walks the paginated search endpoint, keeping only song-typed hits,
    /// until enough hits have accumulated or the page cap is reached. A
    /// non-2xx response aborts the whole run.
    pub async fn search_songs(&self, artist: &str, max_songs: usize) -> Result<Vec<Song>> {
        let mut hits: Vec<Song> = Vec::new();
        let mut page: u32 = 1;
        while more_pages(hits.len(), max_songs, page) {
            let response: SearchResponse = self
                .http
                .get(format!("{BASE_URL}/search"))
                .query(&[
                    ("q", artist.to_string()),
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ])
                .bearer_auth(&self.token)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            hits.extend(song_hits(response.response.hits)?);
            debug!("{artist}: {} raw hits after page {page}", hits.len());
            page += 1;
            tokio::time::sleep(PAGE_DELAY).await;
        }
        Ok(dedup_songs(hits, max_songs))
    }
}

// Loop predicate for the page walk; duplicates count towards the stop
// condition since dedup happens after the walk.
fn more_pages(collected: usize, max_songs: usize, page: u32) -> bool {
    collected < max_songs && page <= MAX_PAGES
}

/// Keep song-typed hits only and decode them into [`Song`] descriptors.
fn song_hits(hits: Vec<Hit>) -> Result<Vec<Song>> {
    hits.into_iter()
        .filter(|h| h.kind == "song")
        .map(|h| serde_json::from_value(h.result).map_err(Error::from))
        .collect()
}

/// Drop duplicate song ids, preserving first-seen order, then cap the list.
fn dedup_songs(hits: Vec<Song>, max_songs: usize) -> Vec<Song> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Song> = hits.into_iter().filter(|s| seen.insert(s.id)).collect();
    unique.truncate(max_songs);
    unique
}
