// ==========================================
// Transit Sentiment - repository layer
// ==========================================
// Data access only: SQL and row mapping, no business rules.
// ==========================================

pub mod error;
pub mod post_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use post_repo::PostRepository;
