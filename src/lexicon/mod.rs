// ==========================================
// Transit Sentiment - lexicon layer
// ==========================================
// Static lookup tables: the region/city gazetteer, the sentiment word and
// emoji lists, and the transport keyword sets. Pure data, built once at
// startup and shared by read-only reference.
// ==========================================

pub mod gazetteer;
pub mod sentiment;
pub mod transport;

pub use gazetteer::Gazetteer;
pub use sentiment::SentimentLexicon;
pub use transport::TransportKeywords;
