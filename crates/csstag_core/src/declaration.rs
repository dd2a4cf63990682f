/// A single `property: value` pair taken from a block's properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
  /// Text before the first `:`, trimmed
  pub property_name: &'a str,
  /// The whole declaration, trimmed and without its `;`
  pub raw_text: &'a str,
}

impl<'a> Declaration<'a> {
  pub fn parse(fragment: &'a str) -> Option<Self> {
    let raw_text = fragment.trim();
    if raw_text.is_empty() {
      return None;
    }

    let property_name = raw_text
      .split_once(':')
      .map_or(raw_text, |(name, _value)| name)
      .trim();

    Some(Declaration {
      property_name,
      raw_text,
    })
  }
}

/// Splits a properties string on `;`, dropping blank fragments.
///
/// A `;` inside a value (for example in a `url(...)` data URI) splits the
/// value as well.
pub fn split_fragments(properties: &str) -> impl Iterator<Item = &str> {
  properties
    .split(';')
    .map(str::trim)
    .filter(|fragment| !fragment.is_empty())
}

pub fn parse_declarations(properties: &str) -> Vec<Declaration<'_>> {
  split_fragments(properties)
    .filter_map(Declaration::parse)
    .collect()
}

/// Prints a block with one declaration per line, every declaration
/// terminated by `;`.
pub fn serialize_block<'a>(
  selector: &str,
  declarations: impl IntoIterator<Item = Declaration<'a>>,
) -> String {
  let mut output = format!("{selector} {{\n");

  for declaration in declarations {
    output.push_str("  ");
    output.push_str(declaration.raw_text);
    output.push_str(";\n");
  }

  output.push('}');
  output
}
