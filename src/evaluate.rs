// imports
use crate::descriptors::DescriptorTable;
use crate::error::{Result, SynonymError};
use crate::matcher::{most_similar_word, MatchContext};
use crate::similarity::SimilarityFn;

use std::fmt::Display;
use serde::Serialize;
use tracing::{info, warn};


/// One multiple choice question: `target answer choice1 choice2 ...`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestRecord {
    pub target: String,
    pub answer: String,
    pub choices: Vec<String>,
}

impl TestRecord {

    pub fn parse(line: &str, line_number: usize) -> Result<TestRecord> {

        let mut tokens = line.split_whitespace().map(|t| t.to_lowercase());
        let (target, answer) = match (tokens.next(), tokens.next()) {
            (Some(target), Some(answer)) => (target, answer),
            _ => return Err(SynonymError::MalformedRecord { line: line_number, reason: "expected a target and an answer".to_string() })
        };
        let choices: Vec<String> = tokens.collect();
        if choices.is_empty() {
            return Err(SynonymError::MalformedRecord { line: line_number, reason: "no choices given".to_string() });
        }

        Ok(Self { target, answer, choices })
    }
}

/// Parses every non blank line. Malformed lines come back as errors in place
/// so the caller can report them and move on.
pub fn parse_records(text: &str) -> Vec<Result<TestRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| TestRecord::parse(line, i + 1))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordResult {
    pub record: TestRecord,
    pub chosen: Option<String>,
    pub score: f64,
    pub correct: bool,
    pub no_context: bool,
}

impl Display for RecordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target: {}\nChoices: {:?}\nBest Match: {:?} ({})\n{}",
            self.record.target, self.record.choices, self.chosen, self.score, self.correct)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub results: Vec<RecordResult>,
    pub total: usize,
    pub correct: usize,
    pub no_context: usize,
    pub skipped: usize,
}

impl EvaluationReport {

    /// Fraction answered correctly, `None` when nothing was evaluated.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None
        }
        Some(self.correct as f64 / self.total as f64)
    }
}

impl Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accuracy = match self.accuracy() {
            Some(accuracy) => format!("{:.4}", accuracy),
            None => "n/a".to_string()
        };
        write!(f, "Accuracy: {} ({} of {} correct, {} without context, {} skipped)",
            accuracy, self.correct, self.total, self.no_context, self.skipped)
    }
}

pub fn run_similarity_test<S: SimilarityFn + ?Sized>(records: Vec<Result<TestRecord>>, table: &DescriptorTable, similarity_fn: &S) -> EvaluationReport {

    let mut report = EvaluationReport::default();

    for record in records {

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping record: {}", e);
                report.skipped += 1;
                continue
            }
        };

        // a failed match only degrades this record
        let result = match most_similar_word(&record.target, &record.choices, table, similarity_fn) {
            Ok(found) => {
                let no_context = found.context == MatchContext::NoContext;
                RecordResult {
                    correct: found.choice == record.answer,
                    chosen: Some(found.choice),
                    score: found.score,
                    no_context,
                    record,
                }
            },
            Err(e) => {
                warn!("could not score '{}': {}", record.target, e);
                RecordResult { chosen: None, score: 0.0, correct: false, no_context: false, record }
            }
        };

        report.total += 1;
        if result.correct {
            report.correct += 1;
        }
        if result.no_context {
            report.no_context += 1;
        }
        report.results.push(result);
    }

    info!("evaluated {} records, {} correct, {} skipped", report.total, report.correct, report.skipped);
    report
}
