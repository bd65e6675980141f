use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use unicode_normalization::UnicodeNormalization;

use crate::clients::errors::{Error, Result};

// Genius serves lyric text inside these containers; annotations and section
// labels come along for the ride and are stripped afterwards.
static LYRIC_CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div[data-lyrics-container='true']").expect("lyric container selector is valid")
});

/// Matches bracketed annotations like `[Chorus]` or `[Verse 2]`, non-greedy.
static ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("annotation regex is valid"));

// Genius rejects requests from the default reqwest user agent
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Scrapes lyric text from public song pages. No auth required.
pub struct LyricScraper {
    http: reqwest::Client,
}

impl LyricScraper {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        LyricScraper { http }
    }

    /// Create a scraper with a browser-like user agent.
    pub fn try_default() -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(LyricScraper::new(http))
    }

    /// Fetch a song page and return its cleaned lyric text.
    ///
    /// Fails when the page cannot be fetched, has no lyric containers, or
    /// the containers hold no text; the caller decides whether that is fatal.
    pub async fn scrape(&self, url: &str) -> Result<String> {
        let html = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Fetched {} bytes from {url}", html.len());

        let raw = extract_lyric_text(&html).ok_or_else(|| Error::NoLyrics(url.to_string()))?;
        let cleaned = clean_lyrics(&raw);
        if cleaned.is_empty() {
            return Err(Error::NoLyrics(url.to_string()));
        }
        Ok(cleaned)
    }
}

/// Collect the text of every lyric container, newline-separated within and
/// between containers. `None` when the page has no containers.
fn extract_lyric_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let parts: Vec<String> = document
        .select(&LYRIC_CONTAINER)
        .map(|container| container.text().collect::<Vec<_>>().join("\n"))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

/// Strip bracketed annotations, NFKC-normalize and trim.
fn clean_lyrics(raw: &str) -> String {
    let stripped = ANNOTATION_RE.replace_all(raw, "");
    stripped.nfkc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_all_containers() {
        let html = "<html><body>\
            <div data-lyrics-container=\"true\">Hello<br>[Verse]<br>World</div>\
            <div>not lyrics</div>\
            <div data-lyrics-container=\"true\">More [Chorus] text</div>\
            </body></html>";
        let raw = extract_lyric_text(html).unwrap();
        assert_eq!(raw, "Hello\n[Verse]\nWorld\nMore [Chorus] text");
    }

    #[test]
    fn no_container_yields_none() {
        let html = "<html><body><div class=\"other\">nothing here</div></body></html>";
        assert!(extract_lyric_text(html).is_none());
    }

    #[test]
    fn nested_markup_keeps_text() {
        let html = "<div data-lyrics-container=\"true\">Line <i>one</i><br><a href=\"#\">Line two</a></div>";
        let raw = extract_lyric_text(html).unwrap();
        assert!(raw.contains("one"));
        assert!(raw.contains("Line two"));
    }

    #[test]
    fn clean_removes_bracketed_annotations() {
        let raw = "Hello\n[Verse]\nWorld\nMore [Chorus] text";
        assert_eq!(clean_lyrics(raw), "Hello\n\nWorld\nMore  text");
    }

    #[test]
    fn clean_is_non_greedy_across_brackets() {
        assert_eq!(clean_lyrics("[a] keep [b] this"), "keep  this");
    }

    #[test]
    fn clean_applies_nfkc() {
        // ligature and fullwidth forms decompose under NFKC
        assert_eq!(clean_lyrics("ﬁn ｄｅ"), "fin de");
    }

    #[test]
    fn clean_trims_surrounding_whitespace() {
        assert_eq!(clean_lyrics("\n\n  hola  \n"), "hola");
    }
}
