/// Normalize a vector to unit length.
///
/// Returns the original vector when the norm is zero.
pub fn normalize(vec: &[f64]) -> Vec<f64> {
    let norm = magnitude(vec);
    if norm == 0.0 {
        vec.to_vec()
    } else {
        vec.iter().map(|x| x / norm).collect()
    }
}

fn magnitude(vec: &[f64]) -> f64 {
    vec.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two equally sized vectors.
///
/// Defined as `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denominator = magnitude(a) * magnitude(b);
    if denominator == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / denominator
}

/// Convert a raw similarity in `[0, 1]` to a percentage rounded to two decimals.
pub fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}
