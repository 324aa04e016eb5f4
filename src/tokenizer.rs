// imports
use crate::descriptors::{Corpus, Sentence};


// defines the behavior needed for splitting raw text into sentences of lowercase words
pub trait Tokenizer {
    fn sentences(&self, text: &str) -> Corpus;
}

pub struct PunctuationTokenizer {
    sentence_separators: Vec<String>,
    word_separators: Vec<String>,
}

impl Default for PunctuationTokenizer {
    fn default() -> Self {
        Self::new(&["?", ".", "!"], &[" ", ",", "--", "-", ":", ";", "\"", "'"])
    }
}

impl PunctuationTokenizer {

    pub fn new(sentence_separators: &[&str], word_separators: &[&str]) -> PunctuationTokenizer {
        Self {
            sentence_separators: sentence_separators.iter().map(|s| s.to_string()).collect(),
            word_separators: word_separators.iter().map(|s| s.to_string()).collect(),
        }
    }

    // replace every separator by the first one and split once on it.
    // separators are applied in order, so "--" must come before "-".
    fn clean_and_split(text: &str, separators: &[String]) -> Vec<String> {

        let first = match separators.first() {
            Some(first) => first,
            None => return vec![text.to_string()]
        };

        let mut cleaned = text.to_string();
        for sep in &separators[1..] {
            cleaned = cleaned.replace(sep.as_str(), first);
        }
        cleaned.split(first.as_str()).map(|x| x.to_string()).collect()
    }

    fn parse_sentence(&self, sentence: &str) -> Sentence {
        PunctuationTokenizer::clean_and_split(sentence, &self.word_separators)
            .into_iter()
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect()
    }
}

impl Tokenizer for PunctuationTokenizer {

    fn sentences(&self, text: &str) -> Corpus {

        // join words broken across lines before flattening the line structure
        let text = text.replace("-\n", "").replace('\n', " ");

        PunctuationTokenizer::clean_and_split(&text, &self.sentence_separators)
            .iter()
            .map(|sentence| self.parse_sentence(sentence))
            .collect()
    }
}
