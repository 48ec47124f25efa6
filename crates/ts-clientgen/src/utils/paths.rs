//! POSIX-style path arithmetic over generated file paths.
//!
//! Generated paths are always `/`-separated and relative to the output root, independent of the
//! host platform, so these helpers never touch `std::path`.

/// Resolves `.` and `..` segments and collapses repeated separators.
#[must_use]
pub fn normalize(path: &str) -> String {
  let absolute = path.starts_with('/');
  let mut segments: Vec<&str> = vec![];

  for segment in path.split('/') {
    match segment {
      "" | "." => {}
      ".." => match segments.last() {
        Some(&last) if last != ".." => {
          segments.pop();
        }
        _ if absolute => {}
        _ => segments.push(".."),
      },
      other => segments.push(other),
    }
  }

  let joined = segments.join("/");
  match (absolute, joined.is_empty()) {
    (true, _) => format!("/{joined}"),
    (false, true) => ".".to_string(),
    (false, false) => joined,
  }
}

#[must_use]
pub fn join(base: &str, path: &str) -> String {
  match (base.is_empty(), path.is_empty()) {
    (true, true) => ".".to_string(),
    (true, false) => normalize(path),
    (false, true) => normalize(base),
    (false, false) => normalize(&format!("{base}/{path}")),
  }
}

#[must_use]
pub fn dirname(path: &str) -> String {
  let trimmed = path.trim_end_matches('/');
  match trimmed.rfind('/') {
    Some(0) => "/".to_string(),
    Some(index) => trimmed[..index].to_string(),
    None if path.starts_with('/') => "/".to_string(),
    None => ".".to_string(),
  }
}

/// Path of `to` as seen from the directory `from`.
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
  let from = normalize(from);
  let to = normalize(to);
  let from_segments = segments(&from);
  let to_segments = segments(&to);

  let common = from_segments
    .iter()
    .zip(&to_segments)
    .take_while(|(left, right)| left == right)
    .count();

  std::iter::repeat_n("..", from_segments.len() - common)
    .chain(to_segments[common..].iter().copied())
    .collect::<Vec<_>>()
    .join("/")
}

/// Module specifier for importing `target` from the file `current_file`.
#[must_use]
pub fn import_path(current_file: &str, target: &str) -> String {
  let resolved = relative(&dirname(current_file), target);
  if resolved.starts_with('.') {
    resolved
  } else {
    format!("./{resolved}")
  }
}

fn segments(path: &str) -> Vec<&str> {
  path.split('/').filter(|segment| !segment.is_empty() && *segment != ".").collect()
}
