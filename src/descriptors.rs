// imports
use crate::error::Result;

use std::collections::{BTreeMap, HashMap};
use rayon::{prelude::*, ThreadPoolBuilder};
use tracing::debug;

pub type Sentence = Vec<String>;
pub type Corpus = Vec<Sentence>;

/// Co-occurrence counts of one word: every word it shared a sentence with,
/// and how many times. A word never appears in its own descriptor.
pub type Descriptor = HashMap<String, usize>;

/// Descriptors of every word seen in a corpus.
///
/// Words are kept in lexicographic order so that scans over the table are
/// reproducible between runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescriptorTable {
    descriptors: BTreeMap<String, Descriptor>,
}

impl DescriptorTable {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<&Descriptor> {
        self.descriptors.get(word)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Descriptor)> {
        self.descriptors.iter()
    }

    fn accumulate(&mut self, sentence: &[String]) {

        // every token gets an entry, even when it has nothing to co-occur with
        for active in sentence {
            let descriptor = self.descriptors.entry(active.to_owned()).or_default();
            for word in sentence {
                if word == active {
                    continue
                }
                let val = descriptor.entry(word.to_owned()).or_insert(0);
                *val += 1;
            }
        }
    }

    /// Adds the counts of `other` into this table.
    pub fn merge(&mut self, other: DescriptorTable) {

        for (word, descriptor) in other.descriptors {
            let own = self.descriptors.entry(word).or_default();
            for (context, count) in descriptor {
                let val = own.entry(context).or_insert(0);
                *val += count;
            }
        }
    }
}

pub fn build_descriptors(corpus: &[Sentence]) -> DescriptorTable {

    let mut table = DescriptorTable::new();
    for sentence in corpus {
        table.accumulate(sentence);
    }

    debug!("built {} descriptors from {} sentences", table.len(), corpus.len());
    table
}

/// Same result as [`build_descriptors`], with the corpus split into shards
/// counted on a dedicated pool and merged afterwards.
pub fn build_descriptors_parallel(corpus: &[Sentence], num_threads: usize) -> Result<DescriptorTable> {

    if num_threads <= 1 || corpus.len() < 2 {
        return Ok(build_descriptors(corpus))
    }

    // no more workers than sentences
    let num_threads = num_threads.min(corpus.len());
    let shard_size = corpus.len().div_ceil(num_threads);
    let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

    let table = pool.install(|| {
        corpus
            .par_chunks(shard_size)
            .map(build_descriptors)
            .reduce(DescriptorTable::new, |mut acc, shard| {
                acc.merge(shard);
                acc
            })
    });

    debug!("merged {} shards into {} descriptors", corpus.len().div_ceil(shard_size), table.len());
    Ok(table)
}
