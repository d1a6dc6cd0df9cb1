use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  pub(crate) const DISCUSSION_URL: &str = "https://news.ycombinator.com/item";

  pub(crate) async fn fetch_item(&self, id: u64) -> Result<Option<Item>, Error> {
    self
      .get_json::<Option<Item>>(format!("{}/item/{id}.json", self.base_url))
      .await
  }

  /// Looks up the karma of `handle`. Every failure is reported as
  /// `Error::Enrichment`.
  pub(crate) async fn fetch_karma(&self, handle: &str) -> Result<i64, Error> {
    let url = format!("{}/user/{handle}.json", self.base_url);

    let user = self
      .get_json::<Option<User>>(url)
      .await
      .map_err(|error| Error::Enrichment {
        handle: handle.to_string(),
        reason: error.to_string(),
      })?;

    user
      .map(|user| user.karma)
      .ok_or_else(|| Error::Enrichment {
        handle: handle.to_string(),
        reason: "no such user".to_string(),
      })
  }

  pub(crate) async fn fetch_story_ids(&self) -> Result<Vec<u64>, Error> {
    self
      .get_json::<Vec<u64>>(format!("{}/topstories.json", self.base_url))
      .await
  }

  async fn get_json<T>(&self, url: String) -> Result<T, Error>
  where
    T: DeserializeOwned,
  {
    let response = match self.client.get(&url).send().await {
      Ok(response) => response,
      Err(source) => return Err(Error::Transport { source, url }),
    };

    let status = response.status();

    if !status.is_success() {
      return Err(Error::Status { status, url });
    }

    let body = match response.bytes().await {
      Ok(body) => body,
      Err(source) => return Err(Error::Transport { source, url }),
    };

    serde_json::from_slice(&body).map_err(|source| Error::Schema { source, url })
  }

  /// Lists the top story ids, collects the first accepted stories and sorts
  /// them ascending by score.
  pub(crate) async fn load_top_stories(
    &self,
    acquisition: Acquisition,
  ) -> Result<Vec<Story>, Error> {
    let ids = self.fetch_story_ids().await?;

    tracing::info!(ids = ids.len(), "Fetched top story ids");

    let stories = acquisition.collect(&ids, |id| self.fetch_item(id)).await?;

    tracing::info!(
      stories = stories.len(),
      target_count = acquisition.target_count,
      "Collected top stories"
    );

    Ok(sort_by_score(stories))
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }
}
