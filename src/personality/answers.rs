//! Validated questionnaire answers

use crate::config::PersonalityConfig;
use crate::error::{CvInsightError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Answers keyed by 1-based question id, every value inside the Likert range
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalityAnswerSet(BTreeMap<u32, u8>);

impl PersonalityAnswerSet {
    /// Validates answers as they arrive from a form or JSON document: ids
    /// are numeric text, values are integers or integer strings.
    pub fn from_raw<'a, I>(raw: I, config: &PersonalityConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut answers = BTreeMap::new();
        for (key, value) in raw {
            let question = parse_question_id(key)?;
            let answer = parse_answer(question, value)?;
            answers.insert(question, answer);
        }
        Self::new(answers, config)
    }

    pub fn new(answers: BTreeMap<u32, u8>, config: &PersonalityConfig) -> Result<Self> {
        for (&question, &answer) in &answers {
            if question == 0 {
                return Err(CvInsightError::InvalidInput(
                    "question ids start at 1".to_string(),
                ));
            }
            if answer < config.likert_min || answer > config.likert_max {
                return Err(CvInsightError::InvalidInput(format!(
                    "answer {} to question {} is outside {}..={}",
                    answer, question, config.likert_min, config.likert_max
                )));
            }
        }
        Ok(Self(answers))
    }

    /// Answers in ascending question order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.0.iter().map(|(&question, &answer)| (question, answer))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse_question_id(key: &str) -> Result<u32> {
    match key.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(CvInsightError::InvalidInput(format!(
            "invalid question id '{}'",
            key
        ))),
        Ok(id) => Ok(id),
    }
}

fn parse_answer(question: u32, value: &Value) -> Result<u8> {
    let number = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    number
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| {
            CvInsightError::InvalidInput(format!(
                "answer to question {} is not a valid integer: {}",
                question, value
            ))
        })
}
