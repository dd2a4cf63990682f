use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::declaration::split_fragments;
use crate::tag::CssTag;

pub const TOOL_NAME: &str = "csstag";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `<dir>/<stem>-extracted-<suffix>.css`, next to `source_path`
pub fn extracted_file_path(source_path: &Path, suffix: &str) -> PathBuf {
  let stem = source_path
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .unwrap_or_default();
  let file_name = format!("{stem}-extracted-{suffix}.css");

  match source_path.parent() {
    Some(directory) => directory.join(file_name),
    None => PathBuf::from(file_name),
  }
}

/// Renders the contents of an extracted file.
///
/// The file opens with a four line comment header followed by a blank line,
/// then every tag in position order with one declaration per line.
pub fn render_extracted_file(tags: &[CssTag], source_file_name: &str, date: NaiveDate) -> String {
  let mut content = format!("/* CSS extracted with {TOOL_NAME} v{TOOL_VERSION} */\n");
  content.push_str(format!("/* Source file: {source_file_name} */\n").as_str());
  content.push_str(format!("/* Date: {} */\n", date.format("%Y-%m-%d")).as_str());
  content.push_str(format!("/* Preserved order: {} selectors */\n\n", tags.len()).as_str());

  for tag in tags {
    content.push_str(format!("{} {{\n", tag.selector).as_str());
    for fragment in split_fragments(&tag.properties) {
      content.push_str(format!("  {fragment};\n").as_str());
    }
    content.push_str("}\n\n");
  }

  content
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::tag::extract_tags;

  #[test]
  fn names_file_next_to_source() {
    assert_eq!(
      extracted_file_path(Path::new("/project/styles/main.min.css"), "all"),
      PathBuf::from("/project/styles/main.min-extracted-all.css")
    );
    assert_eq!(
      extracted_file_path(Path::new("theme.scss"), "selected"),
      PathBuf::from("theme-extracted-selected.css")
    );
  }

  #[test]
  fn renders_header_and_blocks_in_order() {
    let tags = extract_tags(".b { color: red; top: 0 }\n.a {\n  left: 0;\n}");
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    assert_eq!(
      render_extracted_file(&tags, "main.css", date),
      format!(
        "/* CSS extracted with csstag v{TOOL_VERSION} */\n\
         /* Source file: main.css */\n\
         /* Date: 2024-03-09 */\n\
         /* Preserved order: 2 selectors */\n\
         \n\
         .b {{\n  color: red;\n  top: 0;\n}}\n\n\
         .a {{\n  left: 0;\n}}\n\n"
      )
    );
  }
}
