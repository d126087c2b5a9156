//! Heading extraction from the guide document
//!
//! Walks the guide line by line and produces the ordered module/activity
//! heading sequence the outline is built from. Fenced code blocks are
//! excluded, and the registry's skip lists filter out front-matter H1s and
//! reference-style H2s.

use std::path::Path;

use crate::errors::print_warning;
use crate::patterns::PatternRegistry;

/// A module (level 1) or activity (level 2) heading found in the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub title: String,
    pub line: usize,
}

/// Extract headings from a guide file, degrading to an empty sequence when
/// the file cannot be read
pub fn extract_headings_from_file(path: &Path, registry: &PatternRegistry) -> Vec<Heading> {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_headings(&content, registry),
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            Vec::new()
        }
    }
}

/// Scan guide content for module and activity headings
pub fn extract_headings(content: &str, registry: &PatternRegistry) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_code_block = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;

        if line.trim().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        if let Some(caps) = registry.module_header.captures(line) {
            let title = caps[1].trim().to_string();
            if !registry.skip_title(&title) {
                headings.push(Heading { level: 1, title, line: line_no });
            }
            continue;
        }

        if let Some(caps) = registry.activity_header.captures(line) {
            // Indented H2s are quoted or illustrative, not real activities
            if line.starts_with(' ') || line.starts_with('\t') {
                continue;
            }
            let title = caps[1].trim().to_string();
            if registry.skip_heading(&title) {
                continue;
            }
            if is_path_like(&title) || title.len() <= 3 {
                continue;
            }
            headings.push(Heading { level: 2, title, line: line_no });
        }
    }

    headings
}

/// Windows drive paths and absolute paths show up in H2 position inside
/// reference sections; they are never activities
fn is_path_like(title: &str) -> bool {
    if title.starts_with('/') {
        return true;
    }
    let bytes = title.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}
