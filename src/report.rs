use super::*;

/// Renders `stories` as a numbered plain-text list.
pub(crate) fn render(stories: &[Story], now: u64) -> String {
  if stories.is_empty() {
    return "No stories found.\n".to_string();
  }

  let width = stories.len().to_string().len();

  let indent = " ".repeat(width + 2);

  stories
    .iter()
    .cloned()
    .map(ListEntry::from)
    .enumerate()
    .map(|(index, entry)| {
      format!(
        "{:>width$}. {}\n{indent}{}\n{indent}{}\n",
        index + 1,
        entry.title(),
        entry.url(),
        entry.detail(now),
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn story(id: u64, score: i64) -> Story {
    Story {
      by: "pg".to_string(),
      id,
      score,
      time: 1_000,
      title: format!("Story {id}"),
      url: format!("https://example.com/{id}"),
    }
  }

  #[test]
  fn render_numbers_stories_in_order() {
    assert_eq!(
      render(&[story(1, 3), story(2, 9)], 1_000 + 120),
      "\
1. Story 1
   https://example.com/1
   3 points by pg • 2 minutes ago

2. Story 2
   https://example.com/2
   9 points by pg • 2 minutes ago
"
    );
  }

  #[test]
  fn render_aligns_two_digit_numbers() {
    let stories = (1..=10).map(|id| story(id, 1)).collect::<Vec<_>>();

    let rendered = render(&stories, 1_000);

    assert!(rendered.starts_with(" 1. Story 1\n    https://example.com/1\n"));
    assert!(rendered.contains("\n10. Story 10\n"));
  }

  #[test]
  fn render_reports_empty_result() {
    assert_eq!(render(&[], 0), "No stories found.\n");
  }
}
