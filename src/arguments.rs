use super::*;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Browse the current Hacker News top stories")]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HN_TOP_BASE_URL",
    default_value = Client::API_BASE_URL,
    help = "Base url of the Hacker News API"
  )]
  pub(crate) base_url: String,

  #[arg(
    long,
    env = "HN_TOP_BATCH_SIZE",
    default_value_t = DEFAULT_BATCH_SIZE,
    value_parser = parse_batch_size,
    help = "Number of items fetched concurrently per batch"
  )]
  pub(crate) batch_size: usize,

  #[arg(
    short = 'n',
    long,
    env = "HN_TOP_COUNT",
    default_value_t = DEFAULT_TARGET_COUNT,
    help = "Number of stories to show"
  )]
  pub(crate) count: usize,

  #[arg(long, env = "HN_TOP_LOG_FILE", help = "Write logs to this file")]
  pub(crate) log_file: Option<PathBuf>,

  #[arg(long, env = "HN_TOP_NO_KARMA", help = "Skip author karma lookups")]
  pub(crate) no_karma: bool,

  #[arg(long, help = "Print the stories instead of starting the viewer")]
  pub(crate) plain: bool,
}

impl Arguments {
  pub(crate) fn acquisition(&self) -> Acquisition {
    Acquisition::new(self.count, self.batch_size)
  }
}

fn parse_batch_size(value: &str) -> Result<usize, String> {
  match value.parse::<usize>() {
    Ok(0) => Err("batch size must be at least 1".to_string()),
    Ok(size) => Ok(size),
    Err(error) => Err(error.to_string()),
  }
}
