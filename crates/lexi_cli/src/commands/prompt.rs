//! `lexi prompt` — inspect the assembled system instruction.

use std::path::Path;

use anyhow::Result;
use lexi_runtime::{image_assets, load_education_plan, PromptConfig, RuntimeConfig};

use crate::commands::parse_answers;
use crate::output;

pub async fn handle(answers: &[String], plan: Option<&str>, fingerprint_only: bool) -> Result<()> {
    let config = RuntimeConfig::from_env();
    let prompt = PromptConfig::default();

    if fingerprint_only {
        output::kv("fingerprint", &prompt.fingerprint());
        return Ok(());
    }

    let profile = parse_answers(answers)?;
    let plan_path = plan
        .map(Path::new)
        .unwrap_or_else(|| config.education_plan_path.as_path());
    let plan_text = load_education_plan(plan_path);
    let assets = image_assets(&config.static_base_url);

    let instruction = prompt.build_system_instruction(&profile, &plan_text, &assets);

    output::header("System instruction");
    output::kv("fingerprint", &prompt.fingerprint());
    output::kv("sections", &prompt.sections.len().to_string());
    output::text_block(&instruction);

    Ok(())
}
