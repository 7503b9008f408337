//! Snapshot codec - translates between the post log and its JSON array form.
//!
//! The encoder is hand-rolled so the byte shape stays fixed: one object per
//! post with exactly `id`, `title`, `content`, and only backslash, double
//! quote, LF, and CR escaped. Tabs and other control characters pass
//! through untouched.
//!
//! Loading first tries a compliant JSON parse. Raw control characters inside
//! string literals are escaped before parsing, so everything the encoder
//! writes takes this path. The lenient split-based reader only runs when the
//! file is not JSON at all.

use std::borrow::Cow;

use postboard_core::{Post, PostFields, SnapshotError};

/// Encode posts, in the given order, as a JSON array.
pub fn encode<'a, I>(posts: I) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut out = String::from("[");
    for (i, post) in posts.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("{\"id\":\"");
        escape_into(&mut out, post.id());
        out.push_str("\",\"title\":\"");
        escape_into(&mut out, post.title());
        out.push_str("\",\"content\":\"");
        escape_into(&mut out, post.content());
        out.push_str("\"}");
    }
    out.push(']');
    out
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
}

/// Decode a snapshot, newest first.
///
/// Blank input is an empty log. Records without an id are dropped.
pub fn decode(input: &str) -> Result<Vec<Post>, SnapshotError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    match decode_compliant(input) {
        Ok(posts) => Ok(posts),
        Err(err) => {
            let posts = decode_lenient(input);
            if posts.is_empty() {
                return Err(err);
            }
            tracing::warn!(
                error = %err,
                recovered = posts.len(),
                "Snapshot is not valid JSON, recovered posts with lenient reader"
            );
            Ok(posts)
        }
    }
}

/// Parse the snapshot as a JSON array of string-valued objects.
///
/// Raw U+0000..U+001F inside strings are accepted.
pub fn decode_compliant(input: &str) -> Result<Vec<Post>, SnapshotError> {
    let json = escape_raw_controls(input);
    let records: Vec<PostFields> =
        serde_json::from_str(&json).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

    Ok(records.into_iter().filter_map(Post::from_fields).collect())
}

/// Rewrite raw control characters inside string literals as `\u00XX`.
/// Whitespace between tokens is left alone.
fn escape_raw_controls(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| c < ' ') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    let mut in_string = false;
    let mut escaped = false;
    for c in input.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            } else if c < ' ' {
                out.push_str(&format!("\\u{:04x}", c as u32));
                continue;
            }
        } else if c == '"' {
            in_string = true;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Split-based reader for snapshots that are not valid JSON.
///
/// Records are split on `},{`, fields on `,`, and key from value on the
/// first `:`. All double quotes are dropped from keys and values. Values
/// containing `,`, `:`, `{`, `}` or quotes do not survive this reader.
pub fn decode_lenient(input: &str) -> Vec<Post> {
    let trimmed = input.trim();

    let mut chars = trimmed.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Vec::new();
    }
    let body = chars.as_str();
    if body.is_empty() {
        return Vec::new();
    }

    let records: Vec<&str> = body.split("},{").collect();
    let last = records.len() - 1;

    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, mut record)| {
            if i == 0 {
                record = record.strip_prefix('{').unwrap_or(record);
            }
            if i == last {
                record = record.strip_suffix('}').unwrap_or(record);
            }
            Post::from_fields(parse_lenient_record(record))
        })
        .collect()
}

fn parse_lenient_record(record: &str) -> PostFields {
    record
        .split(',')
        .filter_map(|fragment| fragment.split_once(':'))
        .map(|(key, value)| {
            let key = key.trim().replace('"', "");
            let value = value
                .trim()
                .replace('"', "")
                .replace("\\n", "\n")
                .replace("\\r", "\r")
                .replace("\\\"", "\"")
                .replace("\\\\", "\\");
            (key, value)
        })
        .collect()
}
