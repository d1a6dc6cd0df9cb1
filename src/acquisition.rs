use super::*;

/// Parameters of the batch fetch loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Acquisition {
  pub(crate) batch_size: usize,
  pub(crate) target_count: usize,
}

impl Default for Acquisition {
  fn default() -> Self {
    Self {
      batch_size: DEFAULT_BATCH_SIZE,
      target_count: DEFAULT_TARGET_COUNT,
    }
  }
}

impl Acquisition {
  fn accept_batch(
    accepted: Vec<Story>,
    items: Vec<Option<Item>>,
  ) -> Vec<Story> {
    accepted
      .into_iter()
      .chain(items.into_iter().flatten().filter_map(Story::accept))
      .collect()
  }

  /// Fetches `ids` in batches until `target_count` stories were accepted or
  /// the ids run out.
  ///
  /// Items of one batch are fetched concurrently and the first failure aborts
  /// the whole operation. A `None` item (unknown id) counts as a non-story.
  pub(crate) async fn collect<F, Fut>(
    &self,
    ids: &[u64],
    fetch: F,
  ) -> Result<Vec<Story>, Error>
  where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<Option<Item>, Error>>,
  {
    let mut batches = ids.chunks(self.batch_size.max(1));

    let mut accepted = Vec::new();

    while accepted.len() < self.target_count {
      let Some(batch) = batches.next() else {
        break;
      };

      let items = try_join_all(batch.iter().map(|&id| fetch(id))).await?;

      let fetched = items.len();

      accepted = Self::accept_batch(accepted, items);

      tracing::debug!(fetched, accepted = accepted.len(), "Fetched batch");
    }

    accepted.truncate(self.target_count);

    Ok(accepted)
  }

  pub(crate) fn new(target_count: usize, batch_size: usize) -> Self {
    Self {
      batch_size: batch_size.max(1),
      target_count,
    }
  }
}

pub(crate) fn sort_by_score(mut stories: Vec<Story>) -> Vec<Story> {
  stories.sort_by_key(|story| story.score);
  stories
}
