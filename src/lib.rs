//! Lyricset - build a lyric training set from Genius
//!
//! This library fetches song metadata from the Genius search API, scrapes
//! lyric text from the matching song pages and writes instruction/output
//! pairs as JSON Lines.

/// Client modules for the Genius API, song pages and JSONL output
pub mod clients;
