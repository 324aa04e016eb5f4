mod error;
mod config;
mod tokenizer;
mod descriptors;
mod similarity;
mod matcher;
mod explorer;
mod evaluate;
mod pipeline;

pub use error::{Result, SynonymError};
pub use config::{files_handling, Config, Params};
pub use tokenizer::{PunctuationTokenizer, Tokenizer};
pub use descriptors::{build_descriptors, build_descriptors_parallel, Corpus, Descriptor, DescriptorTable, Sentence};
pub use similarity::{cosine_similarity, dot, dot_similarity, norm, Metric, SimilarityFn};
pub use matcher::{most_similar_word, CandidateScore, CandidateStatus, Match, MatchContext, SENTINEL_SCORE};
pub use explorer::{find_similar, Session};
pub use evaluate::{parse_records, run_similarity_test, EvaluationReport, RecordResult, TestRecord};
pub use pipeline::Pipeline;
