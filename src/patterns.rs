//! Recognized heading and bullet shapes
//!
//! Every extractor consults this registry instead of hard-coding patterns,
//! so adapting the tool to a new document dialect means editing only this
//! module.

use regex::Regex;

/// Compiled patterns and skip lists for the guide/slide-content conventions
#[derive(Debug)]
pub struct PatternRegistry {
    /// Guide module header: `# <title>`
    pub module_header: Regex,

    /// Guide activity header: `## <title>`
    pub activity_header: Regex,

    /// Objectives sub-section header: `#### Objectives`
    pub objectives_header: Regex,

    /// Task sub-section header: `#### Task|Exercise|Step[ N][:] <title>`
    pub task_header: Regex,

    /// Module header in the slide content file: `# <title>`
    pub slide_module_header: Regex,

    /// Outline module line: `## <key>: <title>`
    pub outline_module: Regex,

    /// Activity bullet shapes, tested in order; each captures the activity number
    pub activity_bullets: Vec<Regex>,

    /// Inline task bullet: `* task 3: <title>` and friends; the title is the
    /// second capture, after the marker and numbered prefix are stripped
    pub task_bullet: Regex,

    /// Numeric range in an activity label: `N(-M):`
    pub activity_range: Regex,

    /// H1 titles containing any of these (case-insensitive) are front matter
    /// or TOC noise, not modules
    pub title_skip_terms: Vec<&'static str>,

    /// H2 titles containing any of these are references or paths, not activities
    pub heading_skip_terms: Vec<&'static str>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        PatternRegistry {
            module_header: Regex::new(r"^#\s+(.+)$").unwrap(),
            activity_header: Regex::new(r"^\s*##\s+(.+)$").unwrap(),
            objectives_header: Regex::new(r"(?i)^####\s+objectives\s*$").unwrap(),
            task_header: Regex::new(r"(?i)^####\s+(?:task|exercise|step)(?:\s+\d+)?:?\s+(.+)$")
                .unwrap(),
            slide_module_header: Regex::new(r"^#\s+(.+)$").unwrap(),
            outline_module: Regex::new(r"^##\s+([^:]+):\s*(.+)$").unwrap(),
            activity_bullets: vec![
                Regex::new(r"(?i)^\*\s*activity[\s.-]*(\d+)").unwrap(),
                Regex::new(r"(?i)^\*\s*a(\d+)").unwrap(),
                Regex::new(r"(?i)^\*\s*task[\s.-]*(\d+)").unwrap(),
                Regex::new(r"(?i)^\*\s*exercise[\s.-]*(\d+)").unwrap(),
                Regex::new(r"(?i)^\*\s*step[\s.-]*(\d+)").unwrap(),
            ],
            task_bullet: Regex::new(
                r"(?i)^[*+-]\s*(?:task|exercise|step)[\s.-]*(\d+)\s*:?\s*(.+)$",
            )
            .unwrap(),
            activity_range: Regex::new(r"(\d+)(?:-(\d+))?:").unwrap(),
            title_skip_terms: vec![
                "contents",
                "front matter",
                "copyright",
                "revision history",
                "about this",
            ],
            heading_skip_terms: vec!["http://", "https://", "www.", "see also"],
        }
    }

    /// Test a line against the activity bullet shapes in registry order,
    /// returning the captured activity number of the first match
    pub fn match_activity_bullet(&self, line: &str) -> Option<String> {
        for re in &self.activity_bullets {
            if let Some(caps) = re.captures(line) {
                if let Some(num) = caps.get(1) {
                    return Some(num.as_str().to_string());
                }
            }
        }
        None
    }

    /// Extract the numeric label from an activity title like `Activity 2-3: ...`,
    /// preferring the end of a range over its start
    pub fn activity_number(&self, title: &str) -> Option<String> {
        let caps = self.activity_range.captures(title)?;
        let num = caps.get(2).or_else(|| caps.get(1))?;
        Some(num.as_str().to_string())
    }

    /// True when an H1 title should be skipped as front matter / TOC noise
    pub fn skip_title(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.title_skip_terms.iter().any(|term| lower.contains(term))
    }

    /// True when an H2 title should be skipped as a reference or path
    pub fn skip_heading(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.heading_skip_terms.iter().any(|term| lower.contains(term))
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_bullet_shapes() {
        let reg = PatternRegistry::new();
        assert_eq!(reg.match_activity_bullet("* activity 3"), Some("3".to_string()));
        assert_eq!(reg.match_activity_bullet("* Activity-12"), Some("12".to_string()));
        assert_eq!(reg.match_activity_bullet("* a4"), Some("4".to_string()));
        assert_eq!(reg.match_activity_bullet("* Exercise 2"), Some("2".to_string()));
        assert_eq!(reg.match_activity_bullet("* step.7"), Some("7".to_string()));
        assert_eq!(reg.match_activity_bullet("* just a note"), None);
    }

    #[test]
    fn test_activity_number_prefers_range_end() {
        let reg = PatternRegistry::new();
        assert_eq!(reg.activity_number("Activity 1-2: Setup"), Some("2".to_string()));
        assert_eq!(reg.activity_number("Activity 3: Deploy"), Some("3".to_string()));
        assert_eq!(reg.activity_number("No label here"), None);
    }

    #[test]
    fn test_skip_terms() {
        let reg = PatternRegistry::new();
        assert!(reg.skip_title("Table of Contents"));
        assert!(!reg.skip_title("Module 1: Basics"));
        assert!(reg.skip_heading("See also: https://example.com"));
        assert!(!reg.skip_heading("Activity 1-1: Intro"));
    }

    #[test]
    fn test_outline_module_shape() {
        let reg = PatternRegistry::new();
        let caps = reg.outline_module.captures("## Module 1: Basics").unwrap();
        assert_eq!(&caps[1], "Module 1");
        assert_eq!(&caps[2], "Basics");
    }

    #[test]
    fn test_task_header_shape() {
        let reg = PatternRegistry::new();
        let caps = reg.task_header.captures("#### Task 1: Say Hello").unwrap();
        assert_eq!(&caps[1], "Say Hello");
        let caps = reg.task_header.captures("#### Exercise Build the image").unwrap();
        assert_eq!(&caps[1], "Build the image");
    }
}
