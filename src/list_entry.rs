use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListEntry {
  pub(crate) karma: Option<i64>,
  pub(crate) story: Story,
}

impl From<Story> for ListEntry {
  fn from(story: Story) -> Self {
    Self { karma: None, story }
  }
}

impl ListEntry {
  pub(crate) fn detail(&self, now: u64) -> String {
    let mut parts = vec![format_points(self.story.score)];

    if !self.story.by.is_empty() {
      parts.push(format!("by {}", self.story.by));

      if let Some(karma) = self.karma {
        parts.push(format!("({karma} karma)"));
      }
    }

    let mut detail = parts.join(" ");

    if self.story.time > 0 {
      detail = format!("{detail} • {}", format_age(self.story.time, now));
    }

    detail
  }

  pub(crate) fn discussion_url(&self) -> String {
    format!("{}?id={}", Client::DISCUSSION_URL, self.story.id)
  }

  pub(crate) fn title(&self) -> &str {
    &self.story.title
  }

  pub(crate) fn url(&self) -> &str {
    &self.story.url
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(by: &str, time: u64) -> ListEntry {
    ListEntry::from(Story {
      by: by.to_string(),
      id: 42,
      score: 120,
      time,
      title: "Example".to_string(),
      url: "https://example.com".to_string(),
    })
  }

  #[test]
  fn detail_includes_points_author_and_age() {
    assert_eq!(
      entry("pg", 1_000).detail(1_000 + 7_200),
      "120 points by pg • 2 hours ago"
    );
  }

  #[test]
  fn detail_includes_karma_once_known() {
    let mut entry = entry("pg", 1_000);

    entry.karma = Some(155_111);

    assert_eq!(
      entry.detail(1_030),
      "120 points by pg (155111 karma) • just now"
    );
  }

  #[test]
  fn detail_skips_missing_author_and_time() {
    assert_eq!(entry("", 0).detail(1_000), "120 points");
  }

  #[test]
  fn discussion_url_points_at_item_page() {
    assert_eq!(
      entry("pg", 0).discussion_url(),
      "https://news.ycombinator.com/item?id=42"
    );
  }
}
