//! Prompt templates for skill suggestion and the CV chatbot

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub skill_suggestion: String,
    pub chatbot_answer: String,
    pub chatbot_suggestions: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            skill_suggestion: SKILL_SUGGESTION_TEMPLATE.to_string(),
            chatbot_answer: CHATBOT_ANSWER_TEMPLATE.to_string(),
            chatbot_suggestions: CHATBOT_SUGGESTIONS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for the chatbot templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPromptParams {
    pub query: String,
    pub job_title: Option<String>,
}

impl PromptTemplates {
    pub fn render_skill_suggestion(&self, job_title: &str) -> String {
        render(&self.skill_suggestion, &[("job_title", job_title)])
    }

    pub fn render_chatbot_answer(&self, params: &ChatPromptParams) -> String {
        let target = match params.job_title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => format!("Poste visé: {}", title),
            _ => String::new(),
        };

        render(&self.chatbot_answer, &[("query", &params.query), ("target", &target)])
    }

    pub fn render_chatbot_suggestions(&self, query: &str, answer: &str) -> String {
        render(&self.chatbot_suggestions, &[("query", query), ("answer", answer)])
    }
}

/// Fills `{name}` placeholders in one pass over the template, so values
/// are never scanned for placeholders themselves. Unknown names are kept.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                output.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

const SKILL_SUGGESTION_TEMPLATE: &str = "Suggère 5 compétences professionnelles pertinentes pour un poste de {job_title}.
Réponds uniquement avec une liste de compétences, sans phrases d'introduction.";

const CHATBOT_ANSWER_TEMPLATE: &str = "Tu es un assistant CV qui aide les utilisateurs à créer un CV professionnel.

Question de l'utilisateur: {query}

{target}

Réponds de manière concise et professionnelle avec des conseils pratiques.
Limite ta réponse à 3-4 phrases maximum.";

const CHATBOT_SUGGESTIONS_TEMPLATE: &str = "Basé sur cette question: \"{query}\"

Et cette réponse: \"{answer}\"

Génère 3 suggestions concrètes et pratiques que l'utilisateur peut suivre.
Chaque suggestion doit être une phrase courte et actionnable.
Réponds uniquement avec la liste des 3 suggestions, sans phrases d'introduction.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_suggestion_rendering() {
        let prompt = PromptTemplates::default().render_skill_suggestion("Data Scientist");
        assert!(prompt.contains("un poste de Data Scientist."));
        assert!(!prompt.contains("{job_title}"));
    }

    #[test]
    fn test_chatbot_answer_includes_target_only_when_given() {
        let templates = PromptTemplates::default();

        let with_title = templates.render_chatbot_answer(&ChatPromptParams {
            query: "Comment présenter mes études ?".to_string(),
            job_title: Some("Designer".to_string()),
        });
        assert!(with_title.contains("Question de l'utilisateur: Comment présenter mes études ?"));
        assert!(with_title.contains("Poste visé: Designer"));

        let without_title = templates.render_chatbot_answer(&ChatPromptParams {
            query: "Bonjour".to_string(),
            job_title: Some("  ".to_string()),
        });
        assert!(!without_title.contains("Poste visé"));
        assert!(!without_title.contains("{target}"));
    }

    #[test]
    fn test_user_text_is_not_treated_as_template() {
        let templates = PromptTemplates::default();

        let prompt = templates.render_chatbot_answer(&ChatPromptParams {
            query: "Que mettre dans {target} ?".to_string(),
            job_title: Some("Designer".to_string()),
        });
        assert!(prompt.contains("Question de l'utilisateur: Que mettre dans {target} ?"));
        assert!(prompt.contains("\n\nPoste visé: Designer\n\n"));

        let prompt = templates.render_chatbot_suggestions("Et {answer} ?", "Voir {query}.");
        assert!(prompt.contains("\"Et {answer} ?\""));
        assert!(prompt.contains("\"Voir {query}.\""));
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        assert_eq!(render("a {x} {y", &[("x", "1")]), "a 1 {y");
        assert_eq!(render("{}{x}", &[("x", "{x}")]), "{}{x}");
    }

    #[test]
    fn test_chatbot_suggestions_quote_both_turns() {
        let prompt = PromptTemplates::default().render_chatbot_suggestions("Q?", "A.");
        assert!(prompt.contains("\"Q?\""));
        assert!(prompt.contains("\"A.\""));
    }
}
