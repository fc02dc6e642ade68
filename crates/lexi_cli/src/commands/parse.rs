//! `lexi parse` — run a raw reply through the response parser.

use std::io::Read;

use anyhow::{Context, Result};
use lexi_parser::parse_reply;

use crate::output;

pub async fn handle(file: Option<&str>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("could not read stdin")?;
            buf
        }
    };

    let reply = parse_reply(&raw);
    let value = serde_json::to_value(&reply)?;
    output::json_pretty(&value);

    match &reply.interactive_element {
        Some(element) => output::kv("element", element.kind.as_str()),
        None => output::kv("element", "none"),
    }
    output::kv("text chars", &reply.text_content.chars().count().to_string());

    Ok(())
}
