//! CV assistant: skill suggestions, chatbot replies and the step-by-step guide
//!
//! Every call to the generator is bounded by a timeout. When a call fails
//! for any reason the assistant answers with fixed content instead, so none
//! of these operations return an error.

use crate::catalog::SkillCatalog;
use crate::error::GenerationError;
use crate::llm::prompts::{ChatPromptParams, PromptTemplates};
use crate::llm::{GenerationRequest, TextGenerator};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const SUGGESTED_SKILLS: usize = 5;
const CHAT_SUGGESTIONS: usize = 3;

const EDUCATION_KEYWORDS: &[&str] = &["éducation", "formation", "diplôme", "études", "école"];
const EXPERIENCE_KEYWORDS: &[&str] = &["expérience", "travail", "emploi", "job", "poste"];
const SKILLS_KEYWORDS: &[&str] = &["compétence", "savoir-faire", "aptitude", "connaissance"];

const FALLBACK_MESSAGE: &str =
    "Je suis désolé, je n'ai pas pu traiter votre demande. Comment puis-je vous aider avec votre CV?";
const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Essayez de poser une question plus spécifique",
    "Demandez des conseils sur une section particulière de votre CV",
    "Précisez le poste que vous visez pour des conseils plus adaptés",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideStep {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Summary,
}

impl GuideStep {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "personal_info" => Some(GuideStep::PersonalInfo),
            "education" => Some(GuideStep::Education),
            "experience" => Some(GuideStep::Experience),
            "skills" => Some(GuideStep::Skills),
            "summary" => Some(GuideStep::Summary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuideStep::PersonalInfo => "personal_info",
            GuideStep::Education => "education",
            GuideStep::Experience => "experience",
            GuideStep::Skills => "skills",
            GuideStep::Summary => "summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub message: String,
    pub suggestions: Vec<String>,
    pub next_step: Option<GuideStep>,
}

impl AssistantReply {
    fn fixed(message: &str, suggestions: &[&str], next_step: Option<GuideStep>) -> Self {
        Self {
            message: message.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            next_step,
        }
    }
}

pub struct CvAssistant {
    generator: Arc<dyn TextGenerator>,
    catalog: Arc<SkillCatalog>,
    prompts: PromptTemplates,
    timeout: Duration,
}

impl CvAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>, catalog: Arc<SkillCatalog>, timeout: Duration) -> Self {
        Self {
            generator,
            catalog,
            prompts: PromptTemplates::default(),
            timeout,
        }
    }

    /// Up to five skills for a job title
    pub async fn suggest_skills(&self, job_title: &str) -> Vec<String> {
        if job_title.trim().is_empty() {
            return self.catalog.suggestion_fallback.clone();
        }

        let request = GenerationRequest::new(self.prompts.render_skill_suggestion(job_title), 150, 0.3);
        let parsed = self
            .generate(&request)
            .await
            .and_then(|reply| non_empty(split_list(&reply, ',', SUGGESTED_SKILLS)));

        match parsed {
            Ok(skills) => skills,
            Err(e) => {
                warn!("Skill suggestion for '{}' fell back to the catalog: {}", job_title, e);
                match self.catalog.find_profile_entry(job_title) {
                    Some(entry) => entry.skills.clone(),
                    None => self.catalog.suggestion_fallback.clone(),
                }
            }
        }
    }

    pub async fn chatbot_reply(&self, query: &str, job_title: Option<&str>) -> AssistantReply {
        let next_step = Self::detect_intent(query);

        match self.converse(query, job_title).await {
            Ok((message, suggestions)) => AssistantReply {
                message,
                suggestions,
                next_step,
            },
            Err(e) => {
                warn!("Chatbot reply fell back to the default message: {}", e);
                AssistantReply::fixed(FALLBACK_MESSAGE, &FALLBACK_SUGGESTIONS, next_step)
            }
        }
    }

    /// Fixed guidance for one step of CV writing. Unknown steps get the
    /// welcome message.
    pub async fn guide(&self, step: &str, job_title: &str) -> AssistantReply {
        match GuideStep::parse(step) {
            Some(GuideStep::PersonalInfo) => AssistantReply::fixed(
                "Commençons par vos informations personnelles",
                &[
                    "Ajoutez votre nom complet",
                    "Incluez un email professionnel",
                    "Ajoutez votre numéro de téléphone",
                ],
                Some(GuideStep::Education),
            ),
            Some(GuideStep::Education) => AssistantReply::fixed(
                "Maintenant, parlons de votre formation",
                &[
                    "Mentionnez vos diplômes les plus récents en premier",
                    "Incluez le nom de l'établissement et l'année d'obtention",
                    "Ajoutez votre spécialisation",
                ],
                Some(GuideStep::Experience),
            ),
            Some(GuideStep::Experience) => AssistantReply::fixed(
                "Passons à vos expériences professionnelles",
                &[
                    "Décrivez vos responsabilités avec des verbes d'action",
                    "Quantifiez vos réalisations quand c'est possible",
                    "Mentionnez les technologies/outils utilisés",
                ],
                Some(GuideStep::Skills),
            ),
            Some(GuideStep::Skills) => AssistantReply {
                message: format!("Voici des compétences pertinentes pour un poste de {}", job_title),
                suggestions: self.suggest_skills(job_title).await,
                next_step: Some(GuideStep::Summary),
            },
            Some(GuideStep::Summary) => AssistantReply::fixed(
                "Terminons par un résumé de votre profil",
                &[
                    "Présentez votre profil en trois ou quatre phrases",
                    "Mettez en avant les compétences clés pour le poste visé",
                    "Relisez l'ensemble de votre CV avant de l'envoyer",
                ],
                None,
            ),
            None => AssistantReply::fixed(
                "Bienvenue dans l'assistant CV! Suivez ces étapes pour créer un CV efficace.",
                &[
                    "Commencez par vos informations personnelles",
                    "Ajoutez ensuite votre formation",
                    "Puis vos expériences professionnelles",
                ],
                Some(GuideStep::PersonalInfo),
            ),
        }
    }

    /// Keyword routing, checked in order: education, experience, skills
    pub fn detect_intent(query: &str) -> Option<GuideStep> {
        let lowered = query.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if mentions(EDUCATION_KEYWORDS) {
            Some(GuideStep::Education)
        } else if mentions(EXPERIENCE_KEYWORDS) {
            Some(GuideStep::Experience)
        } else if mentions(SKILLS_KEYWORDS) {
            Some(GuideStep::Skills)
        } else {
            None
        }
    }

    async fn converse(
        &self,
        query: &str,
        job_title: Option<&str>,
    ) -> Result<(String, Vec<String>), GenerationError> {
        let params = ChatPromptParams {
            query: query.to_string(),
            job_title: job_title.map(str::to_string),
        };
        let answer = self
            .generate(&GenerationRequest::new(self.prompts.render_chatbot_answer(&params), 200, 0.7))
            .await?;

        let suggestions_prompt = self.prompts.render_chatbot_suggestions(query, &answer);
        let raw = self
            .generate(&GenerationRequest::new(suggestions_prompt, 150, 0.5))
            .await?;
        let suggestions = non_empty(split_list(&raw, '.', CHAT_SUGGESTIONS))?;

        Ok((answer, suggestions))
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        debug!("Calling generator {} ({} tokens)", self.generator.name(), request.max_tokens);

        let reply = tokio::time::timeout(self.timeout, self.generator.generate(request))
            .await
            .map_err(|_| GenerationError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        let reply = reply.trim().to_string();
        if reply.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(reply)
    }
}

/// Splits a generated list: one item per line (list markers stripped) or,
/// for single-line replies, on `separator`.
fn split_list(reply: &str, separator: char, limit: usize) -> Vec<String> {
    let items: Vec<String> = if reply.contains('\n') {
        reply
            .lines()
            .map(|line| line.trim_matches(|c: char| c == '-' || c == '*' || c == '•' || c.is_whitespace()))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        reply
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    };

    items.into_iter().take(limit).collect()
}

fn non_empty(items: Vec<String>) -> Result<Vec<String>, GenerationError> {
    if items.is_empty() {
        Err(GenerationError::Malformed("no list items in reply".to_string()))
    } else {
        Ok(items)
    }
}
