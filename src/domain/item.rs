use serde::Serialize;

/// Whether a report describes something lost or something found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

/// Report status that makes a found item a match candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Available,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
        }
    }
}

/// An open found-item report supplied by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundItem {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl FoundItem {
    pub fn new(id: i32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A lost-item report whose description is used as the query.
#[derive(Debug, Clone, PartialEq)]
pub struct LostItem {
    pub id: i32,
    pub title: String,
    pub description: String,
}

/// A ranked candidate: the found item's id and its similarity as a
/// percentage rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub item_id: i32,
    pub similarity: f64,
}
