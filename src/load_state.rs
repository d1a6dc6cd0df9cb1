use super::*;

#[derive(Debug)]
pub(crate) enum LoadState {
  Failed(String),
  Loaded(StoryList),
  Loading,
}

impl LoadState {
  pub(crate) fn list(&self) -> Option<&StoryList> {
    match self {
      Self::Loaded(list) => Some(list),
      Self::Failed(_) | Self::Loading => None,
    }
  }

  pub(crate) fn list_mut(&mut self) -> Option<&mut StoryList> {
    match self {
      Self::Loaded(list) => Some(list),
      Self::Failed(_) | Self::Loading => None,
    }
  }
}
