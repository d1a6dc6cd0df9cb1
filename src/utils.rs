use super::*;

pub(crate) fn format_age(time: u64, now: u64) -> String {
  fn plural(count: u64, unit: &str) -> String {
    match count {
      1 => format!("1 {unit} ago"),
      _ => format!("{count} {unit}s ago"),
    }
  }

  let elapsed = now.saturating_sub(time);

  match elapsed {
    0..60 => "just now".to_string(),
    60..3_600 => plural(elapsed / 60, "minute"),
    3_600..86_400 => plural(elapsed / 3_600, "hour"),
    _ => plural(elapsed / 86_400, "day"),
  }
}

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn unix_now() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-1), "-1 points");
  }

  #[test]
  fn format_age_picks_the_largest_unit() {
    let now = 1_700_000_000;

    assert_eq!(format_age(now - 5, now), "just now");
    assert_eq!(format_age(now - 60, now), "1 minute ago");
    assert_eq!(format_age(now - 150, now), "2 minutes ago");
    assert_eq!(format_age(now - 3_600, now), "1 hour ago");
    assert_eq!(format_age(now - 7_300, now), "2 hours ago");
    assert_eq!(format_age(now - 86_400 * 3, now), "3 days ago");
  }

  #[test]
  fn format_age_treats_future_timestamps_as_now() {
    assert_eq!(format_age(200, 100), "just now");
  }
}
