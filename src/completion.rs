//! Profile completion percentage

use serde::{Deserialize, Serialize};

/// Weights in percentage points: basic info, CVs, projects, personality
const BASIC_INFO_WEIGHT: f64 = 20.0;
const CV_WEIGHT: f64 = 40.0;
const PROJECT_WEIGHT: f64 = 20.0;
const PERSONALITY_WEIGHT: f64 = 20.0;

/// Facts about a stored profile, gathered by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCompletionInputs {
    pub has_full_name: bool,
    pub has_email: bool,
    pub cv_count: usize,
    pub project_count: usize,
    pub personality_count: usize,
}

impl ProfileCompletionInputs {
    fn basic_info_score(&self) -> f64 {
        match (self.has_full_name, self.has_email) {
            (true, true) => 1.0,
            (true, false) | (false, true) => 0.5,
            (false, false) => 0.0,
        }
    }
}

fn saturating(count: usize, per_item: f64) -> f64 {
    (count as f64 * per_item).min(1.0)
}

/// Weighted completion in `0.0..=100.0`
pub fn completion(inputs: &ProfileCompletionInputs) -> f64 {
    inputs.basic_info_score() * BASIC_INFO_WEIGHT
        + saturating(inputs.cv_count, 0.5) * CV_WEIGHT
        + saturating(inputs.project_count, 0.25) * PROJECT_WEIGHT
        + saturating(inputs.personality_count, 0.5) * PERSONALITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ProfileCompletionInputs {
        ProfileCompletionInputs {
            has_full_name: true,
            has_email: true,
            cv_count: 2,
            project_count: 4,
            personality_count: 2,
        }
    }

    #[test]
    fn test_weights_sum_to_one_hundred() {
        assert_eq!(BASIC_INFO_WEIGHT + CV_WEIGHT + PROJECT_WEIGHT + PERSONALITY_WEIGHT, 100.0);
    }

    #[test]
    fn test_saturated_profile_is_complete() {
        assert_eq!(completion(&full()), 100.0);

        let mut more = full();
        more.cv_count = 10;
        more.project_count = 30;
        assert_eq!(completion(&more), 100.0);
    }

    #[test]
    fn test_empty_profile_is_zero() {
        assert_eq!(completion(&ProfileCompletionInputs::default()), 0.0);
    }

    #[test]
    fn test_partial_profile() {
        let inputs = ProfileCompletionInputs {
            has_full_name: true,
            has_email: false,
            cv_count: 1,
            project_count: 1,
            personality_count: 0,
        };
        // 0.5 * 20 + 0.5 * 40 + 0.25 * 20
        assert_eq!(completion(&inputs), 35.0);
    }
}
