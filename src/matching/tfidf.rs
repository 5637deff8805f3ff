//! Term-frequency × inverse-document-frequency weighting.
//!
//! A [`TfidfModel`] is fitted on one corpus and discarded afterwards; nothing
//! is cached between matching calls. The weighting is:
//!
//! * `tf(t, d)`: raw count of term `t` in document `d`.
//! * `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, with `n` documents.
//! * Every document vector is L2-normalised. Zero vectors stay zero.

use std::collections::{BTreeMap, BTreeSet};

use crate::matching::similarity::normalize;
use crate::matching::tokenizer::tokenize;

/// Vocabulary and idf weights learned from a corpus.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Learn the vocabulary and idf weights, returning the model together with
    /// one weight vector per document, in input order.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<Vec<f64>>) {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        // Sorted vocabulary keeps column order independent of document order.
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let seen: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for index in seen {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let model = Self { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|tokens| model.weigh(tokens))
            .collect();

        (model, vectors)
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                vector[index] += 1.0;
            }
        }
        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }
        normalize(&vector)
    }

    /// Number of distinct terms, i.e. the dimensionality of every vector.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns `true` when the corpus produced no usable terms.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    #[cfg(test)]
    fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }
}
