use crate::domain::item::{FoundItem, MatchResult};
use crate::matching::similarity::{cosine_similarity, to_percentage};
use crate::matching::tfidf::TfidfModel;
use crate::{MAX_MATCHES, SIMILARITY_THRESHOLD};

/// Assemble the corpus for one matching call.
///
/// Found-item descriptions come first, in the order supplied, and the query
/// is always the last document.
pub fn build_corpus<'a>(query: &'a str, found_items: &'a [FoundItem]) -> Vec<&'a str> {
    found_items
        .iter()
        .map(|item| item.description.as_str())
        .chain(std::iter::once(query))
        .collect()
}

/// Rank `found_items` by textual similarity to `query`.
///
/// A fresh TF-IDF space is built over the found-item descriptions plus the
/// query. Items whose cosine similarity does not exceed
/// [`SIMILARITY_THRESHOLD`] are dropped, the rest are sorted by similarity
/// (descending, stable) and truncated to [`MAX_MATCHES`].
///
/// `found_items` must already be restricted to eligible records; no
/// filtering on kind or status happens here.
pub fn find_matches(query: &str, found_items: &[FoundItem]) -> Vec<MatchResult> {
    if found_items.is_empty() {
        return Vec::new();
    }

    let corpus = build_corpus(query, found_items);
    let (model, vectors) = TfidfModel::fit_transform(&corpus);

    if model.is_empty() {
        log::debug!(
            "No usable terms in corpus of {} documents; all similarities are zero",
            corpus.len()
        );
        return Vec::new();
    }

    let Some((query_vector, item_vectors)) = vectors.split_last() else {
        return Vec::new();
    };

    let scored = found_items
        .iter()
        .zip(item_vectors)
        .map(|(item, vector)| (item, cosine_similarity(query_vector, vector)));

    rank_scored(scored)
}

/// Keep candidates scoring strictly above [`SIMILARITY_THRESHOLD`], order them
/// by raw score (descending, stable) and cap the list at [`MAX_MATCHES`].
pub fn rank_scored<'a, I>(scored: I) -> Vec<MatchResult>
where
    I: IntoIterator<Item = (&'a FoundItem, f64)>,
{
    let mut kept: Vec<(&FoundItem, f64)> = scored
        .into_iter()
        .filter(|(_, score)| *score > SIMILARITY_THRESHOLD)
        .collect();

    kept.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    kept.truncate(MAX_MATCHES);

    kept.into_iter()
        .map(|(item, score)| MatchResult {
            item_id: item.id,
            similarity: to_percentage(score),
        })
        .collect()
}
