//! Template-based cover letters

use crate::processing::skill_extractor::SkillTerm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const MAX_LETTER_SKILLS: usize = 3;
const FALLBACK_SKILLS: [&str; 2] = ["communication", "organisation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
}

impl Tone {
    /// Unknown tones read as professional
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "enthusiastic" => Tone::Enthusiastic,
            _ => Tone::Professional,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Assembles a letter from the candidate's extracted skills and experience
/// lines. `job_skills` selects which extracted skills are worth citing.
pub fn compose(
    request: &CoverLetterRequest,
    skills: &BTreeSet<SkillTerm>,
    experiences: &[String],
    job_skills: &[String],
) -> String {
    let job_title = request.job_title.as_str();
    let company = request.company.as_str();

    let wanted: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut relevant: Vec<&str> = skills
        .iter()
        .map(SkillTerm::as_str)
        .filter(|skill| wanted.iter().any(|job_skill| skill.contains(job_skill.as_str())))
        .take(MAX_LETTER_SKILLS)
        .collect();
    if relevant.is_empty() {
        relevant = FALLBACK_SKILLS.to_vec();
    }

    let intro = match request.tone {
        Tone::Professional => format!(
            "Madame, Monsieur,\n\nJe vous soumets ma candidature pour le poste de {} au sein de {}.",
            job_title, company
        ),
        Tone::Friendly => format!(
            "Bonjour,\n\nC'est avec enthousiasme que je postule pour le poste de {} chez {}.",
            job_title, company
        ),
        Tone::Enthusiastic => format!(
            "Madame, Monsieur,\n\nPassionné(e) par le domaine de {}, je suis très enthousiaste à l'idée de rejoindre {}.",
            job_title.split_whitespace().next().unwrap_or(job_title),
            company
        ),
    };

    let background = experiences
        .first()
        .map(|line| line.trim())
        .unwrap_or(job_title);

    let body = format!(
        "Fort de mon expérience en tant que {}, j'ai développé des compétences en {}. \
         Ces compétences, associées à mon parcours professionnel, me permettraient d'apporter une contribution significative à votre entreprise.\n\n\
         Particulièrement intéressé(e) par {} pour sa réputation dans le domaine, je souhaite mettre à profit mes connaissances et mon expérience pour contribuer à vos projets innovants.",
        background,
        relevant.join(", "),
        company
    );

    let closing = "Je me tiens à votre disposition pour un entretien où je pourrai vous exposer plus en détail mes motivations et mes compétences.\n\n\
                   Je vous prie d'agréer, Madame, Monsieur, l'expression de mes salutations distinguées.";

    format!("{}\n\n{}\n\n{}", intro, body, closing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tone: Tone) -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: "Développeur Backend".to_string(),
            company: "Acme".to_string(),
            tone,
        }
    }

    fn skills(items: &[&str]) -> BTreeSet<SkillTerm> {
        items.iter().map(|s| SkillTerm::new(s)).collect()
    }

    fn developer_skills() -> Vec<String> {
        ["JavaScript", "Python", "Git", "SQL", "Résolution de problèmes"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_tone_parsing_defaults_to_professional() {
        assert_eq!(Tone::parse("Friendly"), Tone::Friendly);
        assert_eq!(Tone::parse("enthusiastic"), Tone::Enthusiastic);
        assert_eq!(Tone::parse("sarcastic"), Tone::Professional);
        assert_eq!(Tone::parse(""), Tone::Professional);
    }

    #[test]
    fn test_professional_letter_cites_relevant_skills() {
        let letter = compose(
            &request(Tone::Professional),
            &skills(&["python", "git", "sql", "photoshop", "postgresql"]),
            &["5 years experience in backend services".to_string()],
            &developer_skills(),
        );

        assert!(letter.starts_with("Madame, Monsieur,\n\nJe vous soumets ma candidature pour le poste de Développeur Backend au sein de Acme."));
        assert!(letter.contains("en tant que 5 years experience in backend services,"));
        assert!(letter.contains("compétences en git, postgresql, python."));
        assert!(!letter.contains("photoshop"));
        assert!(letter.ends_with("salutations distinguées."));
    }

    #[test]
    fn test_fallbacks_without_experience_or_skills() {
        let letter = compose(&request(Tone::Friendly), &BTreeSet::new(), &[], &developer_skills());

        assert!(letter.starts_with("Bonjour,"));
        assert!(letter.contains("en tant que Développeur Backend,"));
        assert!(letter.contains("compétences en communication, organisation."));
    }

    #[test]
    fn test_enthusiastic_uses_first_title_word() {
        let letter = compose(&request(Tone::Enthusiastic), &BTreeSet::new(), &[], &[]);
        assert!(letter.contains("Passionné(e) par le domaine de Développeur, je suis très enthousiaste à l'idée de rejoindre Acme."));
    }
}
