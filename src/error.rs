use super::*;

/// Failures of the story acquisition core.
///
/// `Transport` and `Status` make up the transport category, `Schema` covers
/// payloads of the wrong shape. `Enrichment` is only produced by karma
/// lookups and is expected to be discarded by the caller.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("could not enrich {handle}: {reason}")]
  Enrichment { handle: String, reason: String },
  #[error("unexpected payload from {url}: {source}")]
  Schema {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  #[error("HTTP error! status {status} from {url}")]
  Status { status: StatusCode, url: String },
  #[error("could not reach {url}: {source}")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },
}

impl Error {
  pub(crate) fn is_schema(&self) -> bool {
    matches!(self, Self::Schema { .. })
  }

  pub(crate) fn is_transport(&self) -> bool {
    matches!(self, Self::Status { .. } | Self::Transport { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_errors_belong_to_transport_category() {
    let error = Error::Status {
      status: StatusCode::SERVICE_UNAVAILABLE,
      url: "https://example.com/topstories.json".to_string(),
    };

    assert!(error.is_transport());
    assert!(!error.is_schema());

    assert_eq!(
      error.to_string(),
      "HTTP error! status 503 Service Unavailable from https://example.com/topstories.json"
    );
  }

  #[test]
  fn schema_errors_are_not_transport_errors() {
    let source = serde_json::from_str::<Vec<u64>>("{}").unwrap_err();

    let error = Error::Schema {
      source,
      url: "https://example.com/topstories.json".to_string(),
    };

    assert!(error.is_schema());
    assert!(!error.is_transport());
  }

  #[test]
  fn enrichment_errors_name_the_handle() {
    let error = Error::Enrichment {
      handle: "pg".to_string(),
      reason: "no such user".to_string(),
    };

    assert!(!error.is_transport());
    assert_eq!(error.to_string(), "could not enrich pg: no such user");
  }
}
