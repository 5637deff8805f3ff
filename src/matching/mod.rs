//! Text matching of lost-item descriptions against open found items.

pub mod matcher;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;

pub use matcher::find_matches;
