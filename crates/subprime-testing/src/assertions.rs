//! Assertions on `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse CLI stdout as JSON
pub fn parse_json(stdout: &[u8]) -> Result<Value> {
    serde_json::from_slice(stdout).context("stdout is not valid JSON")
}

/// Assert that a `show` result resolved the expected page.
pub fn assert_page(json: &Value, slug: &str) -> Result<()> {
    let page = json["content"]["entry"]["page"]
        .as_str()
        .context("Expected 'content.entry.page' in JSON")?;

    if page != slug {
        anyhow::bail!("Expected page {}, got {}", slug, page);
    }
    Ok(())
}

/// Kinds of the resolved entry's blocks, in order.
pub fn block_kinds(json: &Value) -> Result<Vec<String>> {
    let blocks = json["content"]["entry"]["blocks"]
        .as_array()
        .context("Expected 'content.entry.blocks' array in JSON")?;

    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            block["block"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Block {} has no kind", i))
        })
        .collect()
}

/// Chart blocks of the resolved entry.
pub fn charts(json: &Value) -> Result<Vec<&Value>> {
    let blocks = json["content"]["entry"]["blocks"]
        .as_array()
        .context("Expected 'content.entry.blocks' array in JSON")?;
    Ok(blocks.iter().filter(|b| b["block"] == "chart").collect())
}
