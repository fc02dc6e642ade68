//! System instruction assembly.
//!
//! The instruction is a list of titled sections with three kinds of
//! placeholder: `{background}` (learner-profile adaptation),
//! `{education_plan}` (study plan loaded from disk) and `{imageN}` (markdown
//! image links). Sections are admin-editable configuration, so the assembled
//! text carries a fingerprint; sessions started under an older fingerprint
//! are rebuilt.

use std::path::Path;

use lexi_core::LearnerProfile;
use lexi_parser::ElementKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One titled block of the system instruction. An empty title renders the
/// content bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSection {
    pub title: String,
    pub content: String,
}

impl PromptSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An image the instruction may reference; rendered as a markdown link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: String,
    pub url: String,
    pub description: String,
}

/// The configurable section list making up the system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub sections: Vec<PromptSection>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                PromptSection::new(
                    "",
                    "You are Lexi, a warm and pedagogical tutor. You teach one learner at a \
                     time through a chat interface, working through the study plan below and \
                     checking understanding as you go.",
                ),
                PromptSection::new("Response format:", format_contract()),
                PromptSection::new(
                    "Teaching variety:",
                    "Alternate between information sections, open reflection questions, \
                     scenarios, roleplay dialogues and closed knowledge questions. Avoid using \
                     the same method twice in a row, and always present the information needed \
                     to answer before asking a question.",
                ),
                PromptSection::new(
                    "Feedback:",
                    "On a wrong answer, give short corrective feedback and offer the options \
                     again. On a right answer, confirm it, reinforce the key takeaway and move \
                     on.",
                ),
                PromptSection::new("Study plan:", "{education_plan}"),
                PromptSection::new("Learner background:", "{background}"),
                PromptSection::new(
                    "Image resources:",
                    "Available images:\n- Image 1: {image1}\n- Image 2: {image2}\n- Image 3: {image3}\n",
                ),
            ],
        }
    }
}

/// The output-format contract given to the generator. The key list here is
/// derived from the parser's vocabulary so the two can never drift apart.
fn format_contract() -> String {
    let keys = ElementKind::ALL[..7]
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "IMPORTANT: answer plain text explanations and open questions directly as \
         markdown prose. For interactive elements (closed questions with options, \
         scenarios, roleplay, matching, ordering), emit exactly one JSON object inside \
         a ```json fenced block, using one of these top-level keys: {keys}. Never wrap \
         an answer as {{ \"response\": \"...\" }}; that format breaks the chat. Never \
         mention that you are producing JSON."
    )
}

impl PromptConfig {
    /// Stable hash of the section list. Changes whenever an admin edits the
    /// sections, invalidating existing sessions.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(&self.sections).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }

    /// Assemble the full system instruction for one learner.
    pub fn build_system_instruction(
        &self,
        profile: &LearnerProfile,
        education_plan: &str,
        assets: &[ImageAsset],
    ) -> String {
        let background = build_background(profile);
        let mut parts = Vec::with_capacity(self.sections.len());

        for section in &self.sections {
            let mut content = section.content.clone();
            if content.contains("{background}") {
                content = content.replace("{background}", &background);
            }
            if content.contains("{education_plan}") {
                content = content.replace("{education_plan}", education_plan);
            }
            if section.title.is_empty() {
                parts.push(content);
            } else {
                parts.push(format!("**{}** {}", section.title, content));
            }
        }

        let mut instruction = parts.join("\n");

        // Image placeholders become markdown links.
        for asset in assets {
            let placeholder = format!("{{{}}}", asset.id);
            let replacement = format!("![{}]({})", asset.description, asset.url);
            instruction = instruction.replace(&placeholder, &replacement);
        }

        instruction
    }
}

/// Adaptation text derived from the background answers.
pub fn build_background(profile: &LearnerProfile) -> String {
    let mut text = String::from("Adapt the tutoring based on the following:\n");
    if profile.is_yes("certified") {
        text.push_str(
            "- The learner is a certified assistant nurse; use relevant examples and adjust \
             the language accordingly.\n",
        );
    } else {
        text.push_str("- The tutoring targets general care staff.\n");
    }
    if profile.is_yes("experienced") {
        text.push_str(
            "- The learner has prior delegation experience; some parts can move faster.\n",
        );
    } else {
        text.push_str(
            "- The learner is new to delegation; cover the basics thoroughly.\n",
        );
    }
    text.push('\n');
    text
}

/// Read the study plan from disk. Missing or unreadable files degrade to a
/// placeholder so instruction assembly never fails.
pub fn load_education_plan(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(plan) => plan,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read education plan");
            "Study plan missing or could not be loaded.".to_string()
        }
    }
}

/// Default image asset set under a static base URL.
pub fn image_assets(base_url: &str) -> Vec<ImageAsset> {
    (1..=3)
        .map(|n| ImageAsset {
            id: format!("image{n}"),
            url: format!("{}/images/image{n}.png", base_url.trim_end_matches('/')),
            description: format!("Illustration {n}"),
        })
        .collect()
}
