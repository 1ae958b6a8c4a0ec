//! Four-axis type model: each answer pushes one axis toward a pole

use super::{PersonalityAnswerSet, PersonalityProfile, ProfileKind};
use std::collections::BTreeMap;

pub const AXES: [&str; 4] = ["E-I", "S-N", "T-F", "J-P"];

/// (negative-or-zero pole, positive pole) for each axis
const POLES: [(char, char); 4] = [('E', 'I'), ('S', 'N'), ('T', 'F'), ('J', 'P')];

const GENERIC_CAREERS: &[&str] = &["Consultant", "Analyste"];

struct TypeEntry {
    label: &'static str,
    description: &'static str,
    careers: &'static [&'static str],
}

const TYPES: &[TypeEntry] = &[
    TypeEntry {
        label: "INTJ",
        description: "Architecte - Stratège, indépendant et analytique",
        careers: &["Architecte", "Ingénieur", "Scientifique", "Analyste"],
    },
    TypeEntry {
        label: "INTP",
        description: "Logicien - Innovateur, curieux et logique",
        careers: &["Développeur", "Chercheur", "Professeur", "Analyste de données"],
    },
    TypeEntry {
        label: "ENTJ",
        description: "Commandant - Leader, décisif et stratégique",
        careers: &["Directeur", "Entrepreneur", "Consultant", "Avocat"],
    },
    TypeEntry {
        label: "ENTP",
        description: "Innovateur - Visionnaire, curieux et débatteur",
        careers: &["Entrepreneur", "Avocat", "Consultant", "Marketing"],
    },
    TypeEntry {
        label: "INFJ",
        description: "Avocat - Idéaliste, intuitif et déterminé",
        careers: &["Psychologue", "Écrivain", "Conseiller", "Enseignant"],
    },
    TypeEntry {
        label: "INFP",
        description: "Médiateur - Empathique, créatif et idéaliste",
        careers: &["Écrivain", "Graphiste", "Psychologue", "Traducteur"],
    },
    TypeEntry {
        label: "ENFJ",
        description: "Protagoniste - Charismatique, inspirant et altruiste",
        careers: &["Enseignant", "Responsable RH", "Coach", "Relations publiques"],
    },
    TypeEntry {
        label: "ENFP",
        description: "Inspirateur - Enthousiaste, créatif et sociable",
        careers: &["Journaliste", "Chargé de communication", "Entrepreneur", "Designer"],
    },
    TypeEntry {
        label: "ISTJ",
        description: "Logisticien - Fiable, méthodique et rigoureux",
        careers: &["Comptable", "Auditeur", "Gestionnaire de projet", "Juriste"],
    },
    TypeEntry {
        label: "ISFJ",
        description: "Défenseur - Dévoué, attentionné et consciencieux",
        careers: &["Infirmier", "Assistant administratif", "Enseignant", "Bibliothécaire"],
    },
    TypeEntry {
        label: "ESTJ",
        description: "Directeur - Organisé, pragmatique et décidé",
        careers: &["Manager", "Chef de projet", "Officier", "Directeur financier"],
    },
    TypeEntry {
        label: "ESFJ",
        description: "Consul - Serviable, sociable et loyal",
        careers: &["Responsable RH", "Infirmier", "Commercial", "Organisateur d'événements"],
    },
    TypeEntry {
        label: "ISTP",
        description: "Virtuose - Pragmatique, observateur et habile",
        careers: &["Ingénieur", "Technicien", "Pilote", "Développeur"],
    },
    TypeEntry {
        label: "ISFP",
        description: "Aventurier - Sensible, flexible et artistique",
        careers: &["Designer", "Photographe", "Artisan", "Paysagiste"],
    },
    TypeEntry {
        label: "ESTP",
        description: "Entrepreneur - Énergique, perspicace et audacieux",
        careers: &["Commercial", "Entrepreneur", "Négociateur", "Agent immobilier"],
    },
    TypeEntry {
        label: "ESFP",
        description: "Amuseur - Spontané, chaleureux et expressif",
        careers: &["Animateur", "Comédien", "Commercial", "Organisateur d'événements"],
    },
];

/// Axis index for a question id: 1-5, 6-10, 11-15, then everything above
fn axis_for(question: u32) -> usize {
    match question {
        0..=5 => 0,
        6..=10 => 1,
        11..=15 => 2,
        _ => 3,
    }
}

pub fn analyze(answers: &PersonalityAnswerSet, midpoint: u8) -> PersonalityProfile {
    let mut sums = [0i32; 4];
    for (question, answer) in answers.iter() {
        sums[axis_for(question)] += if answer > midpoint { 1 } else { -1 };
    }

    let label: String = sums
        .iter()
        .zip(POLES.iter())
        .map(|(&sum, &(low, high))| if sum > 0 { high } else { low })
        .collect();

    let scores: BTreeMap<String, f64> = AXES
        .iter()
        .zip(sums.iter())
        .map(|(axis, &sum)| (axis.to_string(), f64::from(sum)))
        .collect();

    let (strengths, weaknesses) = temperament_traits(&label);
    let (description, careers) = describe_type(&label);

    PersonalityProfile {
        kind: ProfileKind::Axis,
        label,
        description,
        strengths: to_strings(strengths),
        weaknesses: to_strings(weaknesses),
        career_suggestions: careers,
        scores,
    }
}

/// Description and careers for a four-letter type
pub fn describe_type(label: &str) -> (String, Vec<String>) {
    match TYPES.iter().find(|entry| entry.label == label) {
        Some(entry) => (entry.description.to_string(), to_strings(entry.careers)),
        None => (format!("Type {}", label), to_strings(GENERIC_CAREERS)),
    }
}

/// Strengths and weaknesses shared by a temperament group (NT, NF, SJ, SP)
fn temperament_traits(label: &str) -> (&'static [&'static str], &'static [&'static str]) {
    let letters: Vec<char> = label.chars().collect();
    let intuitive = letters.get(1).copied() == Some('N');

    match (intuitive, letters.get(2).copied(), letters.get(3).copied()) {
        (true, Some('T'), _) => (
            &["Analytique", "Stratégique", "Indépendant"],
            &["Perfectionniste", "Critique", "Distant"],
        ),
        (true, _, _) => (
            &["Empathique", "Créatif", "Inspirant"],
            &["Idéaliste", "Sensible à la critique", "Dispersé"],
        ),
        (false, _, Some('J')) => (
            &["Organisé", "Fiable", "Responsable"],
            &["Rigide", "Résistant au changement", "Exigeant"],
        ),
        (false, _, _) => (
            &["Adaptable", "Pragmatique", "Réactif"],
            &["Impatient", "Impulsif", "Peu planificateur"],
        ),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
