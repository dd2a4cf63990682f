use crate::block::rewrite_blocks;
use crate::declaration::{parse_declarations, serialize_block, Declaration};

/// Logical grouping used to reorder the declarations of a block.
///
/// Variants are declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  Positioning,
  BoxModel,
  Typography,
  Visual,
  Animation,
  Other,
}

const POSITIONING: &[&str] = &[
  "position", "top", "right", "bottom", "left", "z-index", "float", "clear",
];

const BOX_MODEL: &[&str] = &[
  "display",
  "width",
  "height",
  "min-width",
  "min-height",
  "max-width",
  "max-height",
  "margin",
  "margin-top",
  "margin-right",
  "margin-bottom",
  "margin-left",
  "padding",
  "padding-top",
  "padding-right",
  "padding-bottom",
  "padding-left",
  "border",
  "border-width",
  "border-style",
  "border-color",
  "border-radius",
  "box-sizing",
  "box-shadow",
  "overflow",
  "overflow-x",
  "overflow-y",
];

const TYPOGRAPHY: &[&str] = &[
  "font",
  "font-family",
  "font-size",
  "font-weight",
  "font-style",
  "font-variant",
  "line-height",
  "text-align",
  "text-decoration",
  "text-transform",
  "letter-spacing",
  "word-spacing",
  "color",
  "text-shadow",
  "white-space",
  "word-wrap",
  "text-overflow",
];

const VISUAL: &[&str] = &[
  "background",
  "background-color",
  "background-image",
  "background-position",
  "background-repeat",
  "background-size",
  "background-attachment",
  "opacity",
  "visibility",
  "cursor",
  "list-style",
  "outline",
];

const ANIMATION: &[&str] = &[
  "transition",
  "transition-property",
  "transition-duration",
  "transition-timing-function",
  "transition-delay",
  "animation",
  "animation-name",
  "animation-duration",
  "animation-timing-function",
  "animation-delay",
  "animation-iteration-count",
  "animation-direction",
  "animation-fill-mode",
  "animation-play-state",
];

const OTHER: &[&str] = &[
  "content",
  "quotes",
  "counter-reset",
  "counter-increment",
  "resize",
  "clip",
  "zoom",
];

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Positioning,
    Category::BoxModel,
    Category::Typography,
    Category::Visual,
    Category::Animation,
    Category::Other,
  ];

  pub fn property_names(self) -> &'static [&'static str] {
    match self {
      Category::Positioning => POSITIONING,
      Category::BoxModel => BOX_MODEL,
      Category::Typography => TYPOGRAPHY,
      Category::Visual => VISUAL,
      Category::Animation => ANIMATION,
      Category::Other => OTHER,
    }
  }

  /// First category listing `property_name`, or `None` for unknown properties.
  ///
  /// Names are compared exactly, so `Color` or `-webkit-transition` are
  /// uncategorized.
  pub fn classify(property_name: &str) -> Option<Category> {
    Category::ALL
      .into_iter()
      .find(|category| category.property_names().contains(&property_name))
  }
}

/// Orders declarations by category, keeping input order inside each category.
/// Unknown properties go last.
pub fn categorize<'a>(declarations: Vec<Declaration<'a>>) -> Vec<Declaration<'a>> {
  let mut buckets: [Vec<Declaration<'a>>; 6] = Default::default();
  let mut uncategorized = Vec::new();

  for declaration in declarations {
    match Category::classify(declaration.property_name) {
      Some(category) => buckets[category as usize].push(declaration),
      None => uncategorized.push(declaration),
    }
  }

  buckets.into_iter().flatten().chain(uncategorized).collect()
}

pub fn organize_block(selector: &str, properties: &str) -> String {
  serialize_block(selector, categorize(parse_declarations(properties)))
}

/// Rewrites every block of `css` with its declarations grouped by category.
#[tracing::instrument(level = "debug", skip_all, fields(len = css.len()))]
pub fn organize_by_category(css: &str) -> String {
  rewrite_blocks(css, |block| {
    organize_block(block.selector(), block.properties_fragment)
  })
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use pretty_assertions::assert_eq;

  use super::*;

  fn name_counts(css: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for block in crate::block::scan_blocks(css) {
      for declaration in block.declarations() {
        *counts
          .entry(declaration.property_name.to_string())
          .or_default() += 1;
      }
    }
    counts
  }

  #[test]
  fn classifies_first_matching_category() {
    assert_eq!(Category::classify("top"), Some(Category::Positioning));
    assert_eq!(Category::classify("display"), Some(Category::BoxModel));
    assert_eq!(Category::classify("color"), Some(Category::Typography));
    assert_eq!(Category::classify("opacity"), Some(Category::Visual));
    assert_eq!(Category::classify("transition"), Some(Category::Animation));
    assert_eq!(Category::classify("zoom"), Some(Category::Other));
    assert_eq!(Category::classify("foo-custom"), None);
    assert_eq!(Category::classify("Color"), None);
  }

  #[test]
  fn category_sets_do_not_overlap() {
    for category in Category::ALL {
      for name in category.property_names() {
        assert_eq!(
          Category::classify(name),
          Some(category),
          "{name} is listed in more than one category"
        );
      }
    }
  }

  #[test]
  fn orders_by_category() {
    assert_eq!(
      organize_by_category(".b { top: 0; color: red; display: block; }"),
      ".b {\n  top: 0;\n  display: block;\n  color: red;\n}"
    );
  }

  #[test]
  fn keeps_input_order_within_a_category() {
    assert_eq!(
      organize_by_category(".a { padding: 0; opacity: 1; margin: 0; width: 10px; }"),
      ".a {\n  padding: 0;\n  margin: 0;\n  width: 10px;\n  opacity: 1;\n}"
    );
  }

  #[test]
  fn unknown_properties_go_last() {
    assert_eq!(
      organize_by_category(".a { foo-custom: 1; zoom: 2; --x: 3; position: absolute; }"),
      ".a {\n  position: absolute;\n  zoom: 2;\n  foo-custom: 1;\n  --x: 3;\n}"
    );
  }

  #[test]
  fn semicolon_only_body_becomes_empty_block() {
    assert_eq!(organize_by_category(".a { ; ; }"), ".a {\n}");
  }

  #[test]
  fn blank_body_is_kept_while_semicolon_body_is_emptied() {
    assert_eq!(
      organize_by_category(".a { }\n.b { ; }\n.c {}"),
      ".a { }\n.b {\n}\n.c {}"
    );
  }

  #[test]
  fn rewrites_every_block_and_keeps_separators() {
    let css = "/* head */\n.a { color: red; top: 0 }\n\n.b{opacity:1;display:none}\n";

    assert_eq!(
      organize_by_category(css),
      "/* head */\n.a {\n  top: 0;\n  color: red;\n}\n\n.b {\n  display:none;\n  opacity:1;\n}\n"
    );
  }

  #[test]
  fn is_idempotent() {
    let css = ".a { color: red; top: 0; foo: 1; transition: all 1s; }\n\n.b { a: 1; b: 2; }";
    let once = organize_by_category(css);

    assert_eq!(organize_by_category(&once), once);
  }

  #[test]
  fn preserves_declaration_multiset() {
    let css = ".a { color: red; top: 0; color: blue; foo: 1 }\n.b { zoom: 1; zoom: 2; left: 0 }";

    assert_eq!(name_counts(&organize_by_category(css)), name_counts(css));
  }
}
