// ==========================================
// Transit Sentiment - application layer
// ==========================================
// Wiring of repositories, classifier, writer and APIs.
// ==========================================

pub mod state;

pub use state::AppState;
