use crate::error::{Result, SynonymError};
use crate::similarity::Metric;

use serde_json::Value;
use std::{fs::File, fmt::Display, io::BufReader, path::Path};

pub const DEFAULT_MAX_RESULTS: i64 = 50;
pub const DEFAULT_THRESHOLD: f64 = 0.75;
pub const MAX_THREADS: u64 = 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub corpus_files: Vec<String>,
    pub test_file: Option<String>,
    pub output_dir: Option<String>,
    pub metric: Metric,
    pub max_results: i64,
    pub threshold: f64,
    pub num_threads: usize,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using params:
        corpus_files: {:?}
        test_file: {:?}
        output_dir: {:?}
        metric: {}
        max_results: {}
        threshold: {}
        num_threads: {}",
        self.corpus_files, self.test_file, self.output_dir, self.metric, self.max_results, self.threshold, self.num_threads)
    }
}

pub struct Config {
    params: Params
}

impl Config {

    pub fn get_params(&self) -> Params {
        self.params.clone()
    }

    pub fn new(json_path: &Path) -> Result<Config> {

        // parse input json
        let f = File::open(json_path)?;
        let json: Value = serde_json::from_reader(BufReader::new(f))?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // corpus files are the only mandatory entry
        let corpus_files = match json.get("corpus_files") {
            Some(Value::Array(files)) => files.iter().map(|file| {
                file.as_str().map(|s| s.to_owned()).ok_or_else(|| invalid("corpus_files", "a list of strings"))
            }).collect::<Result<Vec<String>>>()?,
            Some(Value::String(file)) => vec![file.to_owned()],
            Some(_) => return Err(invalid("corpus_files", "a list of strings")),
            None => return Err(SynonymError::Config("corpus_files was not supplied through json".to_string()))
        };
        if corpus_files.is_empty() {
            return Err(SynonymError::Config("corpus_files is empty".to_string()));
        }

        // handle default vs input parameters
        let test_file = optional_string(json, "test_file")?;
        let output_dir = optional_string(json, "output_dir")?;
        let metric = match json.get("metric") {
            Some(metric) => metric.as_str().ok_or_else(|| invalid("metric", "a string"))?.parse::<Metric>()?,
            None => Metric::default()
        };
        let max_results = match json.get("max_results") {
            Some(max_results) => max_results.as_i64().ok_or_else(|| invalid("max_results", "an integer"))?,
            None => DEFAULT_MAX_RESULTS
        };
        let threshold = match json.get("threshold") {
            Some(threshold) => threshold.as_f64().ok_or_else(|| invalid("threshold", "numeric"))?,
            None => DEFAULT_THRESHOLD
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => num_threads.as_u64().ok_or_else(|| invalid("num_threads", "a non-negative integer"))?,
            None => 1
        };
        if num_threads > MAX_THREADS {
            return Err(SynonymError::Config(format!("num_threads {} is above the limit of {}", num_threads, MAX_THREADS)));
        }

        Ok(Self {
            params: Params {
                corpus_files,
                test_file,
                output_dir,
                metric,
                max_results,
                threshold,
                num_threads: num_threads as usize,
            }
        })
    }

}

fn invalid(key: &str, expected: &str) -> SynonymError {
    SynonymError::Config(format!("given {} is not {}", key, expected))
}

fn optional_string(json: &Value, key: &str) -> Result<Option<String>> {
    match json.get(key) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ok(Some(value.as_str().ok_or_else(|| invalid(key, "a string"))?.to_owned()))
    }
}


pub mod files_handling {

    use crate::error::Result;
    use crate::evaluate::EvaluationReport;

    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Read};
    use std::path::Path;
    use flate2::read::GzDecoder;

    pub fn read_input<R: ReadFile>(file_path: &Path) -> Result<R> {
        R::read_file(file_path)
    }

    pub fn save_output<S: SaveFile>(output_dir: &Path, file_name: &str, item: &S) -> Result<()> {

        // create output folder
        fs::create_dir_all(output_dir)?;
        item.save_file(output_dir, file_name)
    }

    pub trait ReadFile: Sized {
        fn read_file(file_path: &Path) -> Result<Self>;
    }

    impl ReadFile for String {
        // plain text, or gzip compressed text when the path ends with .gz
        fn read_file(file_path: &Path) -> Result<Self> {

            let mut f = BufReader::new(File::open(file_path)?);
            let mut text = String::new();
            match file_path.extension() {
                Some(ext) if ext == "gz" => GzDecoder::new(f).read_to_string(&mut text)?,
                _ => f.read_to_string(&mut text)?,
            };
            Ok(text)
        }
    }

    pub trait SaveFile {
        fn save_file(&self, output_dir: &Path, file_name: &str) -> Result<()>;
    }

    impl SaveFile for EvaluationReport {
        fn save_file(&self, output_dir: &Path, file_name: &str) -> Result<()> {
            let out = output_dir.join(format!("{}.json", file_name));
            let f = BufWriter::new(File::create(out)?);
            serde_json::to_writer_pretty(f, self)?;
            Ok(())
        }
    }

}
