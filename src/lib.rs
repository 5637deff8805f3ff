pub mod db;
pub mod domain;
pub mod matching;
pub mod models;
pub mod processing;
pub mod repository;
pub mod schema;
pub mod worker;

/// Minimum raw cosine similarity a found item must exceed to be reported.
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// Maximum number of candidates returned for one lost-item query.
pub const MAX_MATCHES: usize = 3;
