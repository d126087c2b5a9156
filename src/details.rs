//! On-demand detail extraction from the guide
//!
//! Two independent scans, recomputed per module/activity on each projection
//! pass: module objectives (bullets under an `#### Objectives` heading) and
//! activity scenario + tasks (first prose paragraph plus Task/Exercise/Step
//! headings and bullets).

use std::path::Path;

use crate::doc::titles_match;
use crate::errors::print_warning;
use crate::patterns::PatternRegistry;

/// Scenario paragraph and task titles for one activity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDetail {
    pub scenario: Vec<String>,
    pub tasks: Vec<String>,
}

/// Extract a module's objectives from the guide file, degrading to empty on
/// read failure
pub fn extract_objectives_from_file(
    path: &Path,
    module_title: &str,
    registry: &PatternRegistry,
) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_objectives(&content, module_title, registry),
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            Vec::new()
        }
    }
}

/// Collect the `*`/`-`/`+` bullets under the module's `#### Objectives`
/// heading. A module without such a section yields an empty list.
pub fn extract_objectives(
    content: &str,
    module_title: &str,
    registry: &PatternRegistry,
) -> Vec<String> {
    let mut objectives = Vec::new();
    let mut in_module = false;
    let mut in_objectives = false;

    for line in content.lines() {
        if let Some(caps) = registry.module_header.captures(line) {
            if in_module {
                // Next module reached; whatever we have is the result
                break;
            }
            in_module = titles_match(&caps[1], module_title);
            continue;
        }

        if !in_module {
            continue;
        }

        if registry.objectives_header.is_match(line) {
            in_objectives = true;
            continue;
        }

        if in_objectives {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                break;
            }
            if let Some(text) = bullet_text(trimmed) {
                objectives.push(text.to_string());
            }
        }
    }

    objectives
}

fn bullet_text(line: &str) -> Option<&str> {
    for marker in ["* ", "- ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim());
        }
    }
    None
}

/// Extract an activity's scenario and tasks from the guide file, degrading
/// to empty on read failure
pub fn extract_activity_detail_from_file(
    path: &Path,
    activity_title: &str,
    registry: &PatternRegistry,
) -> ActivityDetail {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_activity_detail(&content, activity_title, registry),
        Err(e) => {
            print_warning(&format!("Could not read {}: {}", path.display(), e));
            ActivityDetail::default()
        }
    }
}

/// Scan the activity's section (its H2 up to the next H2) for the scenario
/// paragraph and the task list.
///
/// The first prose line long enough to be a sentence becomes the sole
/// scenario paragraph; any Task/Exercise/Step heading or bullet switches to
/// tasks mode, after which no further prose is collected.
pub fn extract_activity_detail(
    content: &str,
    activity_title: &str,
    registry: &PatternRegistry,
) -> ActivityDetail {
    let mut detail = ActivityDetail::default();
    let mut in_activity = false;
    let mut tasks_mode = false;

    for line in content.lines() {
        if let Some(caps) = registry.activity_header.captures(line) {
            if in_activity {
                break;
            }
            in_activity = titles_match(&caps[1], activity_title);
            continue;
        }

        if !in_activity {
            continue;
        }

        if let Some(caps) = registry.task_header.captures(line.trim()) {
            detail.tasks.push(caps[1].trim().to_string());
            tasks_mode = true;
            continue;
        }

        if let Some(caps) = registry.task_bullet.captures(line.trim()) {
            detail.tasks.push(caps[2].trim().to_string());
            tasks_mode = true;
            continue;
        }

        if !tasks_mode && is_scenario_paragraph(line.trim()) {
            detail.scenario.push(line.trim().to_string());
            tasks_mode = true;
        }
    }

    detail
}

/// A scenario paragraph is ordinary prose: not a heading, list, bold span,
/// code fence, table row, blockquote, link, or comment, and long enough to
/// be a sentence
fn is_scenario_paragraph(line: &str) -> bool {
    if line.len() <= 10 {
        return false;
    }
    match line.chars().next() {
        Some(c) => c.is_alphanumeric(),
        None => false,
    }
}
