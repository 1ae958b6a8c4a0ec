//! Five-trait model: per-trait sums normalized to 0..=100

use super::{PersonalityAnswerSet, PersonalityProfile, ProfileKind};
use std::collections::BTreeMap;

/// Questions per trait band
const BAND_SIZE: u32 = 6;

struct TraitEntry {
    name: &'static str,
    description: &'static str,
    strengths: &'static [&'static str],
    weaknesses: &'static [&'static str],
    careers: &'static [&'static str],
}

/// Declaration order breaks ties for the dominant trait
const TRAITS: [TraitEntry; 5] = [
    TraitEntry {
        name: "openness",
        description: "Ouvert à l'expérience - Créatif, curieux et innovant",
        strengths: &["Adaptabilité", "Créativité", "Curiosité"],
        weaknesses: &["Distraction", "Impulsivité"],
        careers: &["Artiste", "Chercheur", "Entrepreneur", "Consultant"],
    },
    TraitEntry {
        name: "conscientiousness",
        description: "Consciencieux - Organisé, fiable et méthodique",
        strengths: &["Organisation", "Fiabilité", "Persévérance"],
        weaknesses: &["Rigidité", "Perfectionnisme"],
        careers: &["Gestionnaire de projet", "Comptable", "Analyste", "Médecin"],
    },
    TraitEntry {
        name: "extraversion",
        description: "Extraverti - Sociable, énergique et assertif",
        strengths: &["Aisance relationnelle", "Énergie", "Esprit d'équipe"],
        weaknesses: &["Besoin de reconnaissance", "Dispersion"],
        careers: &["Commercial", "Marketing", "Relations publiques", "Enseignant"],
    },
    TraitEntry {
        name: "agreeableness",
        description: "Agréable - Coopératif, empathique et altruiste",
        strengths: &["Coopération", "Empathie", "Écoute"],
        weaknesses: &["Difficulté à dire non", "Évitement des conflits"],
        careers: &["Travailleur social", "Infirmier", "Psychologue", "RH"],
    },
    TraitEntry {
        name: "neuroticism",
        description: "Émotif - Sensible, anxieux et réactif",
        strengths: &["Sensibilité", "Vigilance", "Lucidité"],
        weaknesses: &["Anxiété", "Vulnérabilité au stress"],
        careers: &["Écrivain", "Artiste", "Chercheur", "Analyste"],
    },
];

/// Trait index for a question id; everything past the fourth band is the
/// last trait.
fn trait_for(question: u32) -> usize {
    let band = question.saturating_sub(1) / BAND_SIZE;
    (band as usize).min(TRAITS.len() - 1)
}

fn normalize(sum: u32) -> f64 {
    (f64::from(sum) / f64::from(BAND_SIZE) * 20.0).clamp(0.0, 100.0)
}

pub fn analyze(answers: &PersonalityAnswerSet) -> PersonalityProfile {
    let mut sums = [0u32; 5];
    for (question, answer) in answers.iter() {
        sums[trait_for(question)] += u32::from(answer);
    }
    let normalized: Vec<f64> = sums.iter().map(|&sum| normalize(sum)).collect();

    let mut dominant = 0;
    for (idx, &score) in normalized.iter().enumerate() {
        if score > normalized[dominant] {
            dominant = idx;
        }
    }
    let entry = &TRAITS[dominant];

    let scores: BTreeMap<String, f64> = TRAITS
        .iter()
        .zip(normalized)
        .map(|(t, score)| (t.name.to_string(), score))
        .collect();

    PersonalityProfile {
        kind: ProfileKind::Trait,
        label: capitalize(entry.name),
        description: entry.description.to_string(),
        strengths: entry.strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: entry.weaknesses.iter().map(|s| s.to_string()).collect(),
        career_suggestions: entry.careers.iter().map(|s| s.to_string()).collect(),
        scores,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
