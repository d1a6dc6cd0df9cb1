use super::*;

/// The loaded stories together with the selection and scroll offset.
#[derive(Debug, Default)]
pub(crate) struct StoryList {
  entries: Vec<ListEntry>,
  offset: usize,
  selected: usize,
}

impl StoryList {
  /// Distinct authors in display order.
  pub(crate) fn authors(&self) -> Vec<String> {
    let mut seen = HashSet::new();

    self
      .entries
      .iter()
      .map(|entry| entry.story.by.as_str())
      .filter(|by| !by.is_empty() && seen.insert(*by))
      .map(str::to_string)
      .collect()
  }

  pub(crate) fn entries(&self) -> &[ListEntry] {
    &self.entries
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn new(stories: Vec<Story>) -> Self {
    Self {
      entries: stories.into_iter().map(ListEntry::from).collect(),
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.entries.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn select_by(&mut self, delta: isize) {
    let target = if delta >= 0 {
      self.selected.saturating_add(delta.unsigned_abs())
    } else {
      self.selected.saturating_sub(delta.unsigned_abs())
    };

    self.set_selected(target);
  }

  pub(crate) fn selected_entry(&self) -> Option<&ListEntry> {
    self
      .selected_index()
      .and_then(|index| self.entries.get(index))
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.entries.is_empty() {
      None
    } else {
      Some(self.selected.min(self.entries.len().saturating_sub(1)))
    }
  }

  /// Records `karma` on every entry written by `author`.
  pub(crate) fn set_karma(&mut self, author: &str, karma: i64) -> usize {
    let mut updated = 0;

    for entry in &mut self.entries {
      if entry.story.by == author {
        entry.karma = Some(karma);
        updated += 1;
      }
    }

    updated
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.entries.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.entries.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.entries.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.entries.len().saturating_sub(1));
    }
  }
}
