/// Data entities for songs and output records
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Genius search API client
pub mod genius;
/// Lyric page scraper
pub mod lyrics;
/// JSON Lines output writer
pub mod output;

pub use genius::GeniusClient;
pub use lyrics::LyricScraper;
pub use output::JsonlWriter;
