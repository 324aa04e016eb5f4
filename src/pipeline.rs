// imports
use crate::config::{files_handling, Params};
use crate::descriptors::{build_descriptors_parallel, Corpus, DescriptorTable};
use crate::error::{Result, SynonymError};
use crate::evaluate::{parse_records, run_similarity_test, EvaluationReport};
use crate::tokenizer::Tokenizer;

use std::path::Path;
use std::time::Instant;
use tracing::info;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> reading and tokenizing the corpus files
    // -> descriptors building
    // -> scoring the test records

    pub fn load_corpus<T: Tokenizer>(corpus_files: &[String], tokenizer: &T) -> Result<Corpus> {

        // sentences of every file are appended in the given order
        let mut corpus: Corpus = Vec::new();
        for file in corpus_files {
            let text = files_handling::read_input::<String>(Path::new(file))?;
            let sentences = tokenizer.sentences(&text);
            info!("read {} sentences from {}", sentences.len(), file);
            corpus.extend(sentences);
        }

        Ok(corpus)
    }

    pub fn build<T: Tokenizer>(params: &Params, tokenizer: &T) -> Result<DescriptorTable> {

        let timer = Instant::now();
        info!("starting descriptors building...");

        let corpus = Pipeline::load_corpus(&params.corpus_files, tokenizer)?;
        let table = build_descriptors_parallel(&corpus, params.num_threads)?;

        info!("built {} descriptors, took {} ms", table.len(), timer.elapsed().as_millis());
        Ok(table)
    }

    pub fn evaluate(params: &Params, table: &DescriptorTable) -> Result<EvaluationReport> {

        let test_file = match &params.test_file {
            Some(test_file) => test_file,
            None => return Err(SynonymError::Config("test_file was not supplied".to_string()))
        };

        let timer = Instant::now();
        info!("starting evaluation of {} with {} similarity...", test_file, params.metric);

        let text = files_handling::read_input::<String>(Path::new(test_file))?;
        let report = run_similarity_test(parse_records(&text), table, &params.metric);

        // save the report when an output folder is given
        if let Some(output_dir) = &params.output_dir {
            files_handling::save_output(Path::new(output_dir), "report", &report)?;
            info!("saved report to {}", output_dir);
        }

        info!("finished evaluation, took {} ms", timer.elapsed().as_millis());
        Ok(report)
    }

    pub fn run<T: Tokenizer>(params: &Params, tokenizer: &T) -> Result<EvaluationReport> {
        let table = Pipeline::build(params, tokenizer)?;
        Pipeline::evaluate(params, &table)
    }

}
