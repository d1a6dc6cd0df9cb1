use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct User {
  #[allow(dead_code)]
  pub(crate) id: String,
  pub(crate) karma: i64,
}
