//! Course outline generation and parsing
//!
//! The outline is the serialized form of the module hierarchy: one course
//! title line, then `## <key>: <title>` per module with `- <activity>`
//! bullets under it. `build_outline` and `parse_outline` round-trip through
//! this format.

use std::path::Path;

use crate::doc::clean_title;
use crate::errors::print_warning;
use crate::headings::Heading;
use crate::patterns::PatternRegistry;

/// One module recovered from the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineModule {
    /// Identifier before the colon in the module line, e.g. "Module 1"
    pub key: String,
    pub title: String,
    pub activities: Vec<String>,
}

/// Insertion-ordered module collection; order drives final output ordering
#[derive(Debug, Clone, Default)]
pub struct ModuleMap {
    modules: Vec<OutlineModule>,
}

impl ModuleMap {
    pub fn modules(&self) -> &[OutlineModule] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&OutlineModule> {
        self.modules.iter().find(|m| m.key == key)
    }

    /// Display title for a module key, falling back to the raw key when the
    /// key never appeared in the outline
    pub fn display_title(&self, key: &str) -> String {
        match self.get(key) {
            Some(module) => module.title.clone(),
            None => key.to_string(),
        }
    }

    fn push(&mut self, module: OutlineModule) {
        self.modules.push(module);
    }
}

/// Build the outline document from the extracted heading sequence
pub fn build_outline(headings: &[Heading], course_title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", course_title));

    let mut first_module = true;
    for heading in headings {
        let title = clean_title(&heading.title);
        match heading.level {
            1 => {
                if !first_module {
                    out.push('\n');
                }
                first_module = false;
                out.push_str(&format!("## {}\n", title));
            }
            _ => {
                out.push_str(&format!("- {}\n", title));
            }
        }
    }

    out
}

/// Parse a previously generated outline file, degrading to an empty map when
/// the file cannot be read
pub fn parse_outline_from_file(path: &Path, registry: &PatternRegistry) -> ModuleMap {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_outline(&content, registry),
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            ModuleMap::default()
        }
    }
}

/// Parse outline text into the keyed module structure
pub fn parse_outline(content: &str, registry: &PatternRegistry) -> ModuleMap {
    let mut map = ModuleMap::default();

    for line in content.lines() {
        if let Some(caps) = registry.outline_module.captures(line) {
            map.push(OutlineModule {
                key: caps[1].trim().to_string(),
                title: caps[2].trim().to_string(),
                activities: Vec::new(),
            });
        } else if let Some(text) = line.strip_prefix("- ") {
            // Bullets before the first module header are dropped
            if let Some(module) = map.modules.last_mut() {
                module.activities.push(text.to_string());
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::new()
    }

    fn heading(level: u8, title: &str, line: usize) -> Heading {
        Heading { level, title: title.to_string(), line }
    }

    #[test]
    fn test_build_outline_format() {
        let headings = vec![
            heading(1, "Module 1: Basics", 1),
            heading(2, "Activity 1-1: Intro TODO flesh out", 3),
            heading(1, "Module 2: Advanced (draft)", 9),
        ];
        let outline = build_outline(&headings, "Demo Course");

        assert_eq!(
            outline,
            "# Demo Course\n\n## Module 1: Basics\n- Activity 1-1: Intro\n\n## Module 2: Advanced\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let headings = vec![
            heading(1, "Module 1: Basics", 1),
            heading(2, "Activity 1-1: Intro", 3),
            heading(2, "Activity 1-2: Setup (optional)", 5),
            heading(1, "Module 2: Advanced", 9),
            heading(2, "Activity 2-1: Deploy TODO verify", 11),
        ];
        let outline = build_outline(&headings, "Demo Course");
        let map = parse_outline(&outline, &registry());

        let modules = map.modules();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].key, "Module 1");
        assert_eq!(modules[0].title, "Basics");
        assert_eq!(
            modules[0].activities,
            vec!["Activity 1-1: Intro".to_string(), "Activity 1-2: Setup".to_string()]
        );
        assert_eq!(modules[1].key, "Module 2");
        assert_eq!(modules[1].activities, vec!["Activity 2-1: Deploy".to_string()]);
    }

    #[test]
    fn test_leading_bullets_dropped() {
        let content = "- orphan\n## Module 1: Basics\n- Activity 1-1: Intro\n";
        let map = parse_outline(content, &registry());
        assert_eq!(map.modules().len(), 1);
        assert_eq!(map.modules()[0].activities, vec!["Activity 1-1: Intro".to_string()]);
    }

    #[test]
    fn test_module_without_colon_is_ignored() {
        let content = "## Just a heading\n- stray\n";
        let map = parse_outline(content, &registry());
        assert!(map.is_empty());
    }

    #[test]
    fn test_display_title_fallback() {
        let map = parse_outline("## Module 1: Basics\n", &registry());
        assert_eq!(map.display_title("Module 1"), "Basics");
        assert_eq!(map.display_title("Module 9"), "Module 9");
    }
}
