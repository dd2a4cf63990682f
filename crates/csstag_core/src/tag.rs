use crate::block::scan_blocks;

/// A block captured for the extracted output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssTag {
  pub selector: String,
  pub properties: String,
  pub full_text: String,
  pub position: usize,
}

/// Collects every block of `text` in order of appearance.
pub fn extract_tags(text: &str) -> Vec<CssTag> {
  let mut tags: Vec<CssTag> = scan_blocks(text)
    .map(|block| CssTag {
      selector: block.selector().to_string(),
      properties: block.properties().to_string(),
      full_text: block.text.trim().to_string(),
      position: block.position,
    })
    .collect();

  // Scan order already matches, the stable sort keeps it that way
  tags.sort_by_key(|tag| tag.position);
  tracing::debug!("Extracted {} tags", tags.len());

  tags
}
