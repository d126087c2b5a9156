//! Slide content parsing
//!
//! Segments the slide content document into per-module, per-activity raw
//! line blocks. A single forward pass with strict priority per line: module
//! header, then activity bullet shapes in registry order, then free content.

use std::path::Path;

use crate::errors::print_warning;
use crate::patterns::PatternRegistry;

/// Lines that start with this are authoring notes carried between slides,
/// not slide content
const CONTINUATION_PHRASE: &str = "Using that same logic";

/// Raw content collected for one module in the slide content file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideModule {
    pub key: String,
    /// Lines that belong to the module itself, before any activity marker
    pub content: Vec<String>,
    /// Activity number (as written, e.g. "1") to that activity's lines
    pub activities: Vec<(String, Vec<String>)>,
}

impl SlideModule {
    pub fn activity_content(&self, number: &str) -> Option<&[String]> {
        self.activities.iter().find(|(n, _)| n == number).map(|(_, lines)| lines.as_slice())
    }

    fn activity_entry(&mut self, number: &str) -> &mut Vec<String> {
        if let Some(pos) = self.activities.iter().position(|(n, _)| n == number) {
            return &mut self.activities[pos].1;
        }
        self.activities.push((number.to_string(), Vec::new()));
        &mut self.activities.last_mut().unwrap().1
    }
}

/// Parsed slide content document
#[derive(Debug, Clone, Default)]
pub struct SlideContent {
    /// Free text before the first module header, kept verbatim
    pub preamble: Vec<String>,
    modules: Vec<SlideModule>,
}

impl SlideContent {
    pub fn modules(&self) -> &[SlideModule] {
        &self.modules
    }

    pub fn get(&self, key: &str) -> Option<&SlideModule> {
        self.modules.iter().find(|m| m.key == key)
    }

    fn entry(&mut self, key: &str) -> usize {
        if let Some(pos) = self.modules.iter().position(|m| m.key == key) {
            return pos;
        }
        self.modules.push(SlideModule { key: key.to_string(), ..Default::default() });
        self.modules.len() - 1
    }
}

/// Parse a slide content file, degrading to an empty map when the file
/// cannot be read
pub fn parse_slide_content_from_file(path: &Path, registry: &PatternRegistry) -> SlideContent {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_slide_content(&content, registry),
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            SlideContent::default()
        }
    }
}

/// Segment slide content text into module and activity blocks
pub fn parse_slide_content(content: &str, registry: &PatternRegistry) -> SlideContent {
    let mut result = SlideContent::default();
    let mut current_module: Option<usize> = None;
    let mut current_activity: Option<String> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = registry.slide_module_header.captures(line) {
            flush(&mut result, current_module, &current_activity, &mut buffer);
            let key = caps[1].trim().to_string();
            current_module = Some(result.entry(&key));
            current_activity = None;
            continue;
        }

        if current_module.is_none() {
            result.preamble.push(line.to_string());
            continue;
        }

        // Activity shapes anchor on an unindented `*`, so nested bullets
        // under an activity stay content
        if let Some(number) = registry.match_activity_bullet(line) {
            flush(&mut result, current_module, &current_activity, &mut buffer);
            current_activity = Some(number);
            continue;
        }

        if !line.trim().is_empty() && !line.trim_start().starts_with(CONTINUATION_PHRASE) {
            buffer.push(line.trim_end().to_string());
        }
    }

    flush(&mut result, current_module, &current_activity, &mut buffer);
    result
}

fn flush(
    result: &mut SlideContent,
    module: Option<usize>,
    activity: &Option<String>,
    buffer: &mut Vec<String>,
) {
    let Some(idx) = module else {
        buffer.clear();
        return;
    };
    if buffer.is_empty() {
        return;
    }

    let module = &mut result.modules[idx];
    match activity {
        Some(number) => module.activity_entry(number).append(buffer),
        None => module.content.append(buffer),
    }
}
