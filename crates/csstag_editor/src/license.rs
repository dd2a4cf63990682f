use crate::host::{EditorHost, Message};

pub const VIEW_LICENSES_ACTION: &str = "View premium licenses";

/// Features only available with a premium license
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumFeature {
  OrganizeByCategory,
  RemoveDuplicates,
}

impl PremiumFeature {
  pub fn id(self) -> &'static str {
    match self {
      PremiumFeature::OrganizeByCategory => "organize-by-category",
      PremiumFeature::RemoveDuplicates => "remove-duplicates",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      PremiumFeature::OrganizeByCategory => "Organize by category",
      PremiumFeature::RemoveDuplicates => "Remove duplicates",
    }
  }
}

/// What the current user is licensed to run.
///
/// Resolved once by the caller and passed into every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
  pub premium: bool,
}

impl Capabilities {
  pub fn premium() -> Self {
    Capabilities { premium: true }
  }

  /// Returns whether `feature` may run.
  ///
  /// Without a premium license the user is warned, and offered the purchase
  /// page when `purchase_url` is set.
  pub fn validate_premium_feature(
    &self,
    feature: PremiumFeature,
    host: &dyn EditorHost,
    purchase_url: Option<&str>,
  ) -> bool {
    if self.premium {
      return true;
    }

    tracing::info!(feature = feature.id(), "Premium feature requested without a license");

    let text = format!(
      "The \"{}\" feature requires a premium license",
      feature.display_name()
    );

    let Some(url) = purchase_url else {
      host.show_message(Message::warning(text));
      return false;
    };

    let message = Message::warning(format!(
      "{text}\nVisit {url} to unlock every professional feature"
    ))
    .with_action(VIEW_LICENSES_ACTION);

    if host.show_message(message).as_deref() == Some(VIEW_LICENSES_ACTION) {
      host.open_external_url(url);
    }

    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::{MessageKind, MockEditorHost};

  #[test]
  fn premium_allows_every_feature() {
    let host = MockEditorHost::new();

    assert!(Capabilities::premium().validate_premium_feature(
      PremiumFeature::RemoveDuplicates,
      &host,
      None
    ));
  }

  #[test]
  fn warns_without_license() {
    let mut host = MockEditorHost::new();
    host
      .expect_show_message()
      .withf(|message| {
        message.kind == MessageKind::Warning
          && message.text == "The \"Organize by category\" feature requires a premium license"
          && message.actions.is_empty()
      })
      .times(1)
      .return_const(None::<String>);
    host.expect_open_external_url().never();

    assert!(!Capabilities::default().validate_premium_feature(
      PremiumFeature::OrganizeByCategory,
      &host,
      None
    ));
  }

  #[test]
  fn opens_purchase_page_when_action_is_picked() {
    let mut host = MockEditorHost::new();
    host
      .expect_show_message()
      .withf(|message| message.actions == vec![VIEW_LICENSES_ACTION.to_string()])
      .times(1)
      .return_const(Some(VIEW_LICENSES_ACTION.to_string()));
    host
      .expect_open_external_url()
      .withf(|url: &str| url == "https://licenses.test/buy")
      .times(1)
      .return_const(());

    assert!(!Capabilities::default().validate_premium_feature(
      PremiumFeature::RemoveDuplicates,
      &host,
      Some("https://licenses.test/buy")
    ));
  }

  #[test]
  fn dismissed_warning_opens_nothing() {
    let mut host = MockEditorHost::new();
    host.expect_show_message().times(1).return_const(None::<String>);
    host.expect_open_external_url().never();

    assert!(!Capabilities::default().validate_premium_feature(
      PremiumFeature::RemoveDuplicates,
      &host,
      Some("https://licenses.test/buy")
    ));
  }
}
