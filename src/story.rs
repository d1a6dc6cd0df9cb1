use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Story {
  pub(crate) by: String,
  pub(crate) id: u64,
  pub(crate) score: i64,
  pub(crate) time: u64,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Story {
  /// Accepts `item` when it is a story with a non-empty url.
  pub(crate) fn accept(item: Item) -> Option<Self> {
    if !item.is_story() {
      return None;
    }

    Some(Self {
      by: item.by.unwrap_or_default(),
      id: item.id,
      score: item.score.unwrap_or_default(),
      time: item.time.unwrap_or_default(),
      title: item.title.unwrap_or_default(),
      url: item.url.unwrap_or_default(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accept_copies_item_fields() {
    let story = Story::accept(Item {
      by: Some("pg".to_string()),
      id: 7,
      score: Some(42),
      time: Some(1_700_000_000),
      title: Some("Example".to_string()),
      r#type: Some("story".to_string()),
      url: Some("https://example.com".to_string()),
    })
    .unwrap();

    assert_eq!(
      story,
      Story {
        by: "pg".to_string(),
        id: 7,
        score: 42,
        time: 1_700_000_000,
        title: "Example".to_string(),
        url: "https://example.com".to_string(),
      }
    );
  }

  #[test]
  fn accept_rejects_non_stories() {
    assert!(
      Story::accept(Item {
        id: 8,
        r#type: Some("job".to_string()),
        url: Some("https://example.com/jobs".to_string()),
        ..Item::default()
      })
      .is_none()
    );
  }
}
