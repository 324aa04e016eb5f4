use crate::descriptors::DescriptorTable;
use crate::error::{Result, SynonymError};
use crate::matcher::SENTINEL_SCORE;
use crate::similarity::{Metric, SimilarityFn};


/// Words of `table` whose similarity to `word` is strictly above `threshold`,
/// most similar first. A positive `max_results` keeps only that many; zero or
/// less keeps everything.
pub fn find_similar<S: SimilarityFn + ?Sized>(word: &str, table: &DescriptorTable, similarity_fn: &S, max_results: i64, threshold: f64) -> Result<Vec<(String, f64)>> {

    let target = match table.get(word) {
        Some(target) => target,
        None => return Err(SynonymError::UnknownWord { word: word.to_string() })
    };

    let mut similar_words: Vec<(String, f64)> = table
        .iter()
        .filter(|(w, _)| w.as_str() != word)
        .map(|(w, desc)| {
            // zero norms score as the sentinel and fall under any sane threshold
            let score = similarity_fn.similarity(target, desc).unwrap_or(SENTINEL_SCORE);
            (w.to_owned(), score)
        })
        .filter(|(_, score)| *score > threshold)
        .collect();

    // stable, ties keep table order
    similar_words.sort_by(|(_, s), (_, t)| t.total_cmp(s));

    if max_results > 0 {
        similar_words.truncate(max_results as usize);
    }

    Ok(similar_words)
}

/// Everything an interactive query needs, built once and shared by every
/// call.
pub struct Session {
    table: DescriptorTable,
    metric: Metric,
    max_results: i64,
    threshold: f64,
}

impl Session {

    pub fn new(table: DescriptorTable, metric: Metric, max_results: i64, threshold: f64) -> Session {
        Self {
            table,
            metric,
            max_results,
            threshold,
        }
    }

    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    pub fn query(&self, word: &str) -> Result<Vec<(String, f64)>> {
        let word = word.trim().to_lowercase();
        find_similar(&word, &self.table, &self.metric, self.max_results, self.threshold)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::descriptors::{build_descriptors, Corpus};
    use crate::similarity::{cosine_similarity, dot_similarity};

    fn cat_dog() -> DescriptorTable {
        let corpus: Corpus = vec![
            vec!["the".to_string(), "cat".to_string(), "sat".to_string()],
            vec!["the".to_string(), "dog".to_string(), "sat".to_string()],
        ];
        build_descriptors(&corpus)
    }

    #[test]
    fn single_result_is_the_best() {

        let table = cat_dog();
        let found = find_similar("sat", &table, &cosine_similarity, 1, 0.0).unwrap();

        // cat and dog tie, cat comes first in table order
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "cat");
        assert!((found[0].1 - 1.0 / 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn unbounded_results_are_sorted_and_skip_self() {

        let table = cat_dog();
        let found = find_similar("sat", &table, &cosine_similarity, -1, 0.0).unwrap();

        let words: Vec<&str> = found.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog", "the"]);
        assert!(found.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn threshold_is_strict() {

        let table = cat_dog();
        let found = find_similar("sat", &table, &cosine_similarity, 0, 0.5).unwrap();

        let words: Vec<&str> = found.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn zero_norm_words_are_excluded() {

        let corpus: Corpus = vec![vec!["alone".to_string()], vec!["a".to_string(), "b".to_string()]];
        let table = build_descriptors(&corpus);

        // b shares no context with a and scores 0, alone scores the sentinel
        let found = find_similar("a", &table, &cosine_similarity, 0, -0.5).unwrap();
        assert_eq!(found, vec![("b".to_string(), 0.0)]);

        // the target itself has zero norm, nothing can be scored
        assert!(find_similar("alone", &table, &cosine_similarity, 0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn unknown_word_is_reported() {

        let table = cat_dog();
        match find_similar("zebra", &table, &dot_similarity, 10, 0.0) {
            Err(SynonymError::UnknownWord { word }) => assert_eq!(word, "zebra"),
            other => panic!("expected unknown word, got {:?}", other)
        }
    }

    #[test]
    fn session_normalizes_queries() {

        let session = Session::new(cat_dog(), Metric::Cosine, 2, 0.0);
        let found = session.query("  SAT\n").unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(session.table().len(), 4);
        assert!(session.query("zebra").is_err());
    }

}
