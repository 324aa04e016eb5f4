use crate::descriptors::DescriptorTable;
use crate::error::{Result, SynonymError};
use crate::similarity::SimilarityFn;

use serde::Serialize;
use tracing::{debug, warn};

/// Score given to a candidate whose similarity could not be computed. Lower
/// than any similarity a non-negative count model can produce.
pub const SENTINEL_SCORE: f64 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CandidateStatus {
    Scored,
    /// The candidate has no descriptor.
    Unmatched,
    /// The metric failed on this pair (zero norm).
    Undefined,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateScore {
    pub word: String,
    pub score: f64,
    pub status: CandidateStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchContext {
    Evaluated,
    /// The target had no descriptor; the first choice was returned without comparison.
    NoContext,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Match {
    pub choice: String,
    pub score: f64,
    pub context: MatchContext,
    pub candidates: Vec<CandidateScore>,
}

impl Match {
    pub fn has_context(&self) -> bool {
        self.context == MatchContext::Evaluated
    }
}

/// Picks the choice most similar to `word`. Ties go to the choice listed first.
///
/// An unknown `word` yields the first choice with score 0 and
/// [`MatchContext::NoContext`].
pub fn most_similar_word<S: SimilarityFn + ?Sized>(word: &str, choices: &[String], table: &DescriptorTable, similarity_fn: &S) -> Result<Match> {

    let first = match choices.first() {
        Some(first) => first,
        None => return Err(SynonymError::EmptyChoices { word: word.to_string() })
    };

    let target = match table.get(word) {
        Some(target) => target,
        None => {
            warn!("can't find context for word '{}', no guesses possible among {:?}", word, choices);
            return Ok(Match {
                choice: first.to_owned(),
                score: 0.0,
                context: MatchContext::NoContext,
                candidates: Vec::new(),
            })
        }
    };

    let candidates: Vec<CandidateScore> = choices.iter().map(|choice| {
        let (score, status) = match table.get(choice) {
            None => (SENTINEL_SCORE, CandidateStatus::Unmatched),
            Some(desc) => match similarity_fn.similarity(target, desc) {
                Ok(score) => (score, CandidateStatus::Scored),
                Err(e) => {
                    debug!("similarity of '{}' and '{}' undefined: {}", word, choice, e);
                    (SENTINEL_SCORE, CandidateStatus::Undefined)
                }
            }
        };
        CandidateScore { word: choice.to_owned(), score, status }
    }).collect();

    // strictly greater replaces, so the earliest choice keeps a tie
    let mut best = 0;
    for (i, candidate) in candidates.iter().enumerate().skip(1) {
        if candidate.score > candidates[best].score {
            best = i;
        }
    }

    Ok(Match {
        choice: candidates[best].word.to_owned(),
        score: candidates[best].score,
        context: MatchContext::Evaluated,
        candidates,
    })
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::descriptors::{build_descriptors, Corpus};
    use crate::similarity::{cosine_similarity, Metric};
    use crate::descriptors::Descriptor;

    fn corpus(sentences: &[&[&str]]) -> Corpus {
        sentences.iter().map(|s| s.iter().map(|w| w.to_string()).collect()).collect()
    }

    fn choices(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn cat_dog() -> DescriptorTable {
        build_descriptors(&corpus(&[&["the", "cat", "sat"], &["the", "dog", "sat"]]))
    }

    #[test]
    fn tie_goes_to_first_choice() {

        let table = cat_dog();

        let result = most_similar_word("sat", &choices(&["cat", "dog"]), &table, &cosine_similarity).unwrap();
        assert_eq!(result.choice, "cat");
        assert!(result.has_context());
        assert_eq!(result.candidates[0].score, result.candidates[1].score);

        let result = most_similar_word("sat", &choices(&["dog", "cat"]), &table, &cosine_similarity).unwrap();
        assert_eq!(result.choice, "dog");
    }

    #[test]
    fn picks_highest_score() {

        let table = cat_dog();

        // cos(sat, the) = 1/3 while cos(sat, cat) = 1/sqrt(3)
        let result = most_similar_word("sat", &choices(&["the", "cat"]), &table, &Metric::Cosine).unwrap();
        assert_eq!(result.choice, "cat");
        assert!((result.score - 1.0 / 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn unknown_target_falls_back_to_first_choice() {

        let table = cat_dog();
        let result = most_similar_word("unknownword", &choices(&["x", "y"]), &table, &cosine_similarity).unwrap();

        assert_eq!(result.choice, "x");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.context, MatchContext::NoContext);
        assert!(!result.has_context());
    }

    #[test]
    fn unmatched_candidates_get_sentinel() {

        let table = cat_dog();
        let result = most_similar_word("sat", &choices(&["missing", "dog"]), &table, &cosine_similarity).unwrap();

        assert_eq!(result.choice, "dog");
        assert_eq!(result.candidates[0].score, SENTINEL_SCORE);
        assert_eq!(result.candidates[0].status, CandidateStatus::Unmatched);
        assert_eq!(result.candidates[1].status, CandidateStatus::Scored);
    }

    #[test]
    fn all_unmatched_keeps_first_choice() {

        let table = cat_dog();
        let result = most_similar_word("sat", &choices(&["p", "q"]), &table, &cosine_similarity).unwrap();

        assert_eq!(result.choice, "p");
        assert_eq!(result.score, SENTINEL_SCORE);
        assert!(result.has_context());
    }

    #[test]
    fn undefined_similarity_degrades_to_sentinel() {

        let table = build_descriptors(&corpus(&[&["alone"], &["a", "b"], &["b", "c"]]));
        let result = most_similar_word("a", &choices(&["alone", "c"]), &table, &cosine_similarity).unwrap();

        assert_eq!(result.choice, "c");
        assert_eq!(result.candidates[0].status, CandidateStatus::Undefined);
        assert_eq!(result.candidates[0].score, SENTINEL_SCORE);
    }

    #[test]
    fn empty_choices_is_an_error() {

        let table = cat_dog();
        match most_similar_word("sat", &[], &table, &cosine_similarity) {
            Err(SynonymError::EmptyChoices { word }) => assert_eq!(word, "sat"),
            other => panic!("expected empty choices error, got {:?}", other)
        }
    }

    #[test]
    fn accepts_custom_metric() {

        let table = cat_dog();
        // a metric that favours shorter descriptors
        let shortest = |_: &Descriptor, b: &Descriptor| -> Result<f64> { Ok(1.0 / b.len() as f64) };

        let result = most_similar_word("cat", &choices(&["the", "dog"]), &table, &shortest).unwrap();
        assert_eq!(result.choice, "dog");
    }

}
