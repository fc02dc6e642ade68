//! Welcome message for a fresh session.
//!
//! The greeting is returned directly to the learner and also seeded into the
//! conversation history so the generator knows how the session opened.

use lexi_core::{LearnerProfile, Turn};

/// Build the personalized welcome text.
pub fn build_greeting(name: &str, profile: &LearnerProfile) -> String {
    let mut greeting = format!("Welcome {name} to the delegation course!\n");
    greeting.push_str(
        "I am your tutor, you can call me Lexi. This course focuses on **medication \
         administration under delegation** for staff in municipal care.\n\n",
    );

    if profile.is_yes("certified") {
        greeting.push_str(
            "As a certified assistant nurse you play a key role in care work. This course \
             is designed to give you the competence required for safe medication \
             administration under delegation.\n",
        );
    } else {
        greeting.push_str(
            "The course is aimed at all care staff who want to strengthen their competence \
             in medication administration through delegation.\n",
        );
    }

    if profile.is_yes("experienced") {
        greeting.push_str(
            "Since you already have delegation experience, some parts may feel familiar.\n",
        );
    } else {
        greeting.push_str(
            "If you are new to delegation we will go through the basics carefully so you \
             feel confident with the material.\n",
        );
    }

    greeting.push_str("\nAmong other things you will learn about:\n");
    greeting.push_str("- The basics of medication delegation.\n");
    greeting.push_str("- The regulations governing medication delegation.\n");
    greeting.push_str("- The division of responsibility between you and the nurse.\n\n");
    greeting.push_str(
        "**The goal is for you to understand the fundamentals of medication administration \
         so you have a solid base before you meet the nurse.** Use the chat box below to \
         interact with me; I will share information, ask questions and check that you have \
         understood. You can always ask me to explain again, or say that you did not \
         understand. We will work through this together. Ready to begin? Type 'continue' \
         in the chat box when you are.",
    );

    greeting
}

/// Seed history for a new session: the greeting as the opening assistant turn.
pub fn build_initial_history(name: &str, profile: &LearnerProfile) -> Vec<Turn> {
    vec![Turn::assistant(build_greeting(name, profile))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_core::Role;

    #[test]
    fn test_greeting_includes_name() {
        let greeting = build_greeting("Anna", &LearnerProfile::new());
        assert!(greeting.starts_with("Welcome Anna"));
    }

    #[test]
    fn test_greeting_branches_on_certification() {
        let certified = LearnerProfile::new().with_answer("certified", "yes");
        let uncertified = LearnerProfile::new().with_answer("certified", "no");

        assert!(build_greeting("A", &certified).contains("certified assistant nurse"));
        assert!(build_greeting("A", &uncertified).contains("aimed at all care staff"));
    }

    #[test]
    fn test_greeting_branches_on_experience() {
        let experienced = LearnerProfile::new().with_answer("experienced", "ja");
        let novice = LearnerProfile::new();

        assert!(build_greeting("A", &experienced).contains("may feel familiar"));
        assert!(build_greeting("A", &novice).contains("new to delegation"));
    }

    #[test]
    fn test_initial_history_is_one_assistant_turn() {
        let history = build_initial_history("Anna", &LearnerProfile::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, Role::Assistant);
        assert!(history[0].text.contains("Welcome Anna"));
    }
}
