//! Document title extraction and title cleanup

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::errors::print_warning;

#[derive(Debug, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
}

/// Extract the course title from a document's YAML front matter.
///
/// Only the literal `title:` field is read; anything else in the block is
/// ignored. Falls back to the file's base name without extension when the
/// front matter is absent, unreadable, or has no title.
pub fn extract_course_title(path: &Path) -> String {
    let fallback = || {
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    };

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            return fallback();
        }
    };

    match title_from_frontmatter(&content) {
        Some(title) => title,
        None => fallback(),
    }
}

/// Read the `title:` field from a leading `---`-delimited YAML block
pub fn title_from_frontmatter(content: &str) -> Option<String> {
    if !content.trim_start().starts_with("---") {
        return None;
    }

    let parts: Vec<&str> = content.splitn(3, "---").collect();
    if parts.len() < 3 {
        return None;
    }

    let front: FrontMatter = serde_yaml::from_str(parts[1]).ok()?;
    front
        .title
        .map(|t| t.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|t| !t.is_empty())
}

/// Strip a trailing `TODO...` suffix and a trailing parenthetical from a title.
///
/// Module and activity identity across the guide, the outline, and the slide
/// content is literal-text equality after this cleanup.
pub fn clean_title(title: &str) -> String {
    let todo_re = Regex::new(r"(?i)\s*TODO.*$").unwrap();
    let paren_re = Regex::new(r"\s*\([^)]*\)\s*$").unwrap();

    let stripped = todo_re.replace(title.trim(), "");
    let stripped = paren_re.replace(&stripped, "");
    stripped.trim().to_string()
}

/// Strip a `Module <N>: ` style prefix if present
pub fn strip_module_prefix(title: &str) -> &str {
    let re = Regex::new(r"(?i)^module\s+\S+:\s*").unwrap();
    match re.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Cleaned-title equality, tolerant of a `Module <N>: ` prefix on either side
pub fn titles_match(a: &str, b: &str) -> bool {
    let ca = clean_title(a);
    let cb = clean_title(b);
    ca == cb || strip_module_prefix(&ca) == cb || ca == strip_module_prefix(&cb)
}
