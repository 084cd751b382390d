use std::path::Path;
use anyhow::Context;

use crate::utils::encoding::decode_utf16;

/// Read a UTF-16 encoded list of URLs, one per line.
///
/// `\r`, `\n` and `\r\n` all end a line. Lines are trimmed and blank lines are dropped.
pub fn read_url_list(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read URL list {}", path.display()))?;
    let text = decode_utf16(&bytes)
        .with_context(|| format!("URL list {} is not valid UTF-16", path.display()))?;
    Ok(parse_url_lines(&text))
}

pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn filter_urls(urls: Vec<String>, filter: &str) -> Vec<String> {
    urls.into_iter()
        .filter(|url| url.contains(filter))
        .collect()
}
