#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchKarma { author: String },
  LoadStories { request_id: u64 },
  OpenUrl { url: String },
}
