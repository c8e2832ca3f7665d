use crate::error::{Result, TrellisError};

/// Compose the full path of a binding from a mount prefix and a relative path
///
/// The prefix loses its trailing `/`, both parts gain a leading `/` when
/// missing, and an empty relative path mounts at the prefix itself.
///
/// ```
/// use trellis::routing::join;
///
/// assert_eq!(join("/home", "/").unwrap(), "/home/");
/// assert_eq!(join("", "/").unwrap(), "/");
/// assert_eq!(join("/home", "").unwrap(), "/home");
/// ```
pub fn join(prefix: &str, relative: &str) -> Result<String> {
    let mut full = String::with_capacity(prefix.len() + relative.len() + 2);

    let prefix = prefix.trim_end_matches('/');
    if !prefix.is_empty() {
        if !prefix.starts_with('/') {
            full.push('/');
        }
        full.push_str(prefix);
    }

    if !relative.is_empty() {
        if !relative.starts_with('/') {
            full.push('/');
        }
        full.push_str(relative);
    }

    if full.is_empty() {
        full.push('/');
    }

    validate(&full)?;
    Ok(full)
}

fn validate(path: &str) -> Result<()> {
    let malformed = path.contains("//")
        || path.chars().any(|c| c == '?' || c == '#' || c.is_whitespace())
        || !segments_are_valid(path);
    if malformed {
        return Err(TrellisError::InvalidRoute {
            path: path.to_string(),
        });
    }
    Ok(())
}

// A capture must span its whole segment: `{name}`, or `{*name}` as the last one.
fn segments_are_valid(path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let mut captures = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        if segment.starts_with(':') || segment.starts_with('*') {
            return false;
        }
        if !segment.contains(['{', '}']) {
            continue;
        }

        let Some(inner) = segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            return false;
        };
        let name = match inner.strip_prefix('*') {
            Some(name) if i + 1 == segments.len() => name,
            Some(_) => return false,
            None => inner,
        };
        if !is_identifier(name) || captures.contains(&name) {
            return false;
        }
        captures.push(name);
    }
    true
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
