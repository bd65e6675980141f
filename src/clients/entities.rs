use serde::{Deserialize, Serialize};

/// A song hit from the Genius search API.
///
/// Only the fields the scraper needs are kept; the rest of the API payload
/// is dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    /// Genius numeric song id, unique per song
    pub id: u64,
    /// Display title as shown on the song page
    pub title: String,
    /// Public song page URL, scraped for lyric text
    pub url: String,
}

/// One training example, serialized as a single JSON line.
#[derive(Debug, Serialize)]
pub struct OutputRecord {
    /// Prompt describing the style-imitation task
    pub instruction: String,
    /// Extracted lyric text
    pub output: String,
}

impl OutputRecord {
    /// Build a style-imitation record for `artist` from extracted lyrics.
    #[must_use]
    pub fn style_imitation(artist: &str, lyrics: String) -> Self {
        OutputRecord {
            instruction: format!("Write a full song in the style of {artist}"),
            output: lyrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_has_exactly_two_string_fields() {
        let record = OutputRecord::style_imitation("Bad Bunny", "la la".to_string());
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(
            object["instruction"],
            "Write a full song in the style of Bad Bunny"
        );
        assert_eq!(object["output"], "la la");
    }
}
