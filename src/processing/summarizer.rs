//! Frequency-weighted extractive summarization

use crate::processing::language::LanguageAnalyzer;
use std::collections::HashMap;
use std::sync::Arc;

pub const SUMMARY_SENTENCES: usize = 3;

pub struct Summarizer {
    analyzer: Arc<dyn LanguageAnalyzer>,
    max_sentences: usize,
}

impl Summarizer {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self {
            analyzer,
            max_sentences: SUMMARY_SENTENCES,
        }
    }

    /// Selects the highest-scoring sentences and returns them in document
    /// order, joined by single spaces.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = self.analyzer.sentences(text);
        if sentences.len() <= self.max_sentences {
            return sentences
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
        }

        let frequencies = self.term_frequencies(text);

        let mut scored: Vec<(usize, usize)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let score = self
                    .analyzer
                    .tokenize(&sentence.text)
                    .iter()
                    .filter_map(|token| frequencies.get(&token.text.to_lowercase()))
                    .sum();
                (idx, score)
            })
            .collect();

        // Stable sort keeps first-encountered order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(idx, _)| idx)
            .collect();
        selected.sort_unstable();

        selected
            .into_iter()
            .map(|idx| sentences[idx].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Counts of lower-cased content tokens across the whole text
    fn term_frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut frequencies = HashMap::new();
        for token in self.analyzer.tokenize(text) {
            if token.is_stopword || token.is_punct {
                continue;
            }
            *frequencies.entry(token.text.to_lowercase()).or_insert(0) += 1;
        }
        frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::text_processor::TextProcessor;

    fn summarizer() -> Summarizer {
        Summarizer::new(Arc::new(TextProcessor::new()))
    }

    #[test]
    fn test_short_documents_are_returned_whole() {
        let summary = summarizer().summarize("Rust is fast. It is also safe.");
        assert_eq!(summary, "Rust is fast. It is also safe.");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarizer().summarize(""), "");
    }

    #[test]
    fn test_selects_frequent_sentences_in_document_order() {
        let text = "Python powers our data platform. \
                    The office has a nice view. \
                    Python and SQL drive the Python reporting. \
                    Lunch is served at noon. \
                    Data pipelines in Python move platform data.";
        let summary = summarizer().summarize(text);

        assert_eq!(
            summary,
            "Python powers our data platform. \
             Python and SQL drive the Python reporting. \
             Data pipelines in Python move platform data."
        );
    }

    #[test]
    fn test_ties_keep_first_sentences() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta. Eta theta.";
        let summary = summarizer().summarize(text);
        assert_eq!(summary, "Alpha beta. Gamma delta. Epsilon zeta.");
    }
}
