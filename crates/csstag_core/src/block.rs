use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use crate::declaration::{parse_declarations, Declaration};

/// A selector fragment, then `{`, then everything up to the first `}`.
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^{]+)\{([^}]*)\}").unwrap());

/// A `selector { properties }` block found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
  /// Byte range of the whole match in the scanned text
  pub range: Range<usize>,
  /// The matched text, including both braces
  pub text: &'a str,
  /// Everything between the end of the previous match and `{`
  pub selector_fragment: &'a str,
  /// Everything between `{` and `}`
  pub properties_fragment: &'a str,
  /// Scan order of the block, starting at 0
  pub position: usize,
}

impl<'a> Block<'a> {
  pub fn selector(&self) -> &'a str {
    self.selector_fragment.trim()
  }

  pub fn properties(&self) -> &'a str {
    self.properties_fragment.trim()
  }

  /// Whitespace separating this block from whatever came before it
  pub fn leading_whitespace(&self) -> &'a str {
    let trimmed = self.selector_fragment.trim_start();
    &self.selector_fragment[..self.selector_fragment.len() - trimmed.len()]
  }

  pub fn declarations(&self) -> Vec<Declaration<'a>> {
    parse_declarations(self.properties_fragment)
  }
}

/// Lazy sequence of the blocks of a document, in order of appearance.
///
/// Blocks with a blank selector or blank properties are skipped, as is any
/// block missing its closing `}`.
pub struct Blocks<'a> {
  matches: CaptureMatches<'static, 'a>,
  next_position: usize,
}

impl<'a> Iterator for Blocks<'a> {
  type Item = Block<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let captures = self.matches.next()?;
      let (Some(whole), Some(selector)) = (captures.get(0), captures.get(1)) else {
        continue;
      };
      let properties = captures.get(2).map_or("", |m| m.as_str());

      if selector.as_str().trim().is_empty() || properties.trim().is_empty() {
        tracing::trace!("Skipping empty block at {:?}", whole.range());
        continue;
      }

      let position = self.next_position;
      self.next_position += 1;

      return Some(Block {
        range: whole.range(),
        text: whole.as_str(),
        selector_fragment: selector.as_str(),
        properties_fragment: properties,
        position,
      });
    }
  }
}

pub fn scan_blocks(text: &str) -> Blocks<'_> {
  Blocks {
    matches: BLOCK_RE.captures_iter(text),
    next_position: 0,
  }
}

/// Replaces every scanned block with the output of `rewrite`.
///
/// Text outside of blocks, including skipped blocks, is copied unchanged.
/// `rewrite` receives the block and returns its replacement; the whitespace
/// in front of the selector is kept so blocks stay on their own lines.
pub fn rewrite_blocks<F>(text: &str, mut rewrite: F) -> String
where
  F: FnMut(&Block<'_>) -> String,
{
  let mut output = String::with_capacity(text.len());
  let mut last_end = 0;
  let mut count = 0;

  for block in scan_blocks(text) {
    output.push_str(&text[last_end..block.range.start]);
    output.push_str(block.leading_whitespace());
    output.push_str(&rewrite(&block));
    last_end = block.range.end;
    count += 1;
  }

  output.push_str(&text[last_end..]);
  tracing::debug!("Rewrote {} blocks", count);

  output
}
