use crate::descriptors::Descriptor;
use crate::error::{Result, SynonymError};

use std::fmt::Display;
use std::str::FromStr;


/// A similarity metric between two descriptors. May fail on degenerate input
/// (for cosine, a zero norm).
pub trait SimilarityFn {
    fn similarity(&self, a: &Descriptor, b: &Descriptor) -> Result<f64>;
}

impl<F> SimilarityFn for F
where
    F: Fn(&Descriptor, &Descriptor) -> Result<f64>,
{
    fn similarity(&self, a: &Descriptor, b: &Descriptor) -> Result<f64> {
        self(a, b)
    }
}

// counts are summed as integers so the result does not depend on map iteration order
fn sum_of_squares(vec: &Descriptor) -> u64 {
    vec.values().map(|v| (*v as u64) * (*v as u64)).sum()
}

fn integer_dot(vec1: &Descriptor, vec2: &Descriptor) -> u64 {

    // walk the smaller map, absent keys contribute nothing
    let (small, large) = if vec1.len() <= vec2.len() { (vec1, vec2) } else { (vec2, vec1) };
    small
        .iter()
        .filter_map(|(key, v)| large.get(key).map(|w| (*v as u64) * (*w as u64)))
        .sum()
}

pub fn norm(vec: &Descriptor) -> f64 {
    (sum_of_squares(vec) as f64).sqrt()
}

pub fn dot(vec1: &Descriptor, vec2: &Descriptor) -> f64 {
    integer_dot(vec1, vec2) as f64
}

pub fn cosine_similarity(vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {

    let left_norm = norm(vec1);
    let right_norm = norm(vec2);
    if left_norm == 0.0 || right_norm == 0.0 {
        return Err(SynonymError::UndefinedSimilarity { left_norm, right_norm })
    }

    Ok(dot(vec1, vec2) / (left_norm * right_norm))
}

/// Raw dot product as a metric, defined for every pair.
pub fn dot_similarity(vec1: &Descriptor, vec2: &Descriptor) -> Result<f64> {
    Ok(dot(vec1, vec2))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Cosine,
    Dot,
}

impl SimilarityFn for Metric {
    fn similarity(&self, a: &Descriptor, b: &Descriptor) -> Result<f64> {
        match self {
            Metric::Cosine => cosine_similarity(a, b),
            Metric::Dot => dot_similarity(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = SynonymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "dot" => Ok(Metric::Dot),
            other => Err(SynonymError::Config(format!("unrecognized metric {}", other)))
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Dot => write!(f, "dot"),
        }
    }
}
