use indexmap::IndexMap;

use crate::block::rewrite_blocks;
use crate::declaration::{parse_declarations, serialize_block, Declaration};

/// Keeps the last declaration of every property.
///
/// The survivor takes the slot where its property was first seen: an
/// `IndexMap` keeps a key's index when its value is overwritten.
pub fn resolve_duplicates(properties: &str) -> Vec<Declaration<'_>> {
  let mut unique: IndexMap<&str, Declaration<'_>> = IndexMap::new();

  for declaration in parse_declarations(properties) {
    unique.insert(declaration.property_name, declaration);
  }

  unique.into_values().collect()
}

/// Rewrites every block of `css` with duplicate properties removed.
#[tracing::instrument(level = "debug", skip_all, fields(len = css.len()))]
pub fn remove_duplicate_properties(css: &str) -> String {
  rewrite_blocks(css, |block| {
    serialize_block(block.selector(), resolve_duplicates(block.properties_fragment))
  })
}
