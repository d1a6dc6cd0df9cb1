use super::*;

pub(crate) enum Event {
  Karma {
    author: String,
    karma: i64,
  },
  Stories {
    request_id: u64,
    result: Result<Vec<Story>, Error>,
  },
}
