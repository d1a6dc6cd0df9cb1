use super::*;

fn default_log_path() -> Result<PathBuf> {
  let base_dir = if let Ok(dir) = env::var("XDG_STATE_HOME") {
    PathBuf::from(dir)
  } else if let Ok(home) = env::var("HOME") {
    PathBuf::from(home).join(".local").join("state")
  } else {
    env::current_dir()?.join(".local").join("state")
  };

  Ok(base_dir.join("hn-top").join("hn-top.log"))
}

/// Sends `tracing` output to a log file so it never interferes with the
/// terminal. The returned guard flushes the writer when dropped.
pub(crate) fn initialize(path: Option<PathBuf>) -> Result<WorkerGuard> {
  let path = match path {
    Some(path) => path,
    None => default_log_path()?,
  };

  let directory = path
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

  fs::create_dir_all(&directory).with_context(|| {
    format!("could not create log directory {}", directory.display())
  })?;

  let file_name = path
    .file_name()
    .with_context(|| format!("invalid log file {}", path.display()))?;

  let (writer, guard) = tracing_appender::non_blocking(
    tracing_appender::rolling::never(&directory, file_name),
  );

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  let layer = tracing_subscriber::fmt::layer()
    .with_writer(writer)
    .with_ansi(false)
    .with_filter(filter);

  tracing_subscriber::registry().with(layer).try_init()?;

  Ok(guard)
}
