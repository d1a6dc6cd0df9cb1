use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Item {
  pub(crate) by: Option<String>,
  pub(crate) id: u64,
  pub(crate) score: Option<i64>,
  pub(crate) time: Option<u64>,
  pub(crate) title: Option<String>,
  pub(crate) r#type: Option<String>,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn is_story(&self) -> bool {
    self.r#type.as_deref() == Some("story")
      && self.url.as_deref().is_some_and(|url| !url.is_empty())
  }
}
