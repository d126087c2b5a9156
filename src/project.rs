//! Output projections
//!
//! Four independent passes over the parsed structures, each producing one
//! final document: the merged slide stubs, the course topics list, the
//! website agenda, and the titled slide content. No state is shared between
//! projections; detail extraction re-reads the guide on demand.

use std::path::Path;

use crate::details::{extract_activity_detail_from_file, extract_objectives_from_file};
use crate::doc::titles_match;
use crate::errors::print_warning;
use crate::flatten::{flatten, render, top_level_bullets};
use crate::outline::ModuleMap;
use crate::patterns::PatternRegistry;
use crate::slides::{SlideContent, SlideModule};

const OBJECTIVES_LABEL: &str = "What You'll Learn in This Module";

/// Build the merged slide-stub document
pub fn merge_slides(
    course_title: &str,
    modules: &ModuleMap,
    slides: &SlideContent,
    guide_path: &Path,
    registry: &PatternRegistry,
) -> String {
    let mut body = String::new();

    for module in modules.modules() {
        let full_title = format!("{}: {}", module.key, module.title);
        body.push_str(&format!("## {}\n", full_title));

        let objectives = extract_objectives_from_file(guide_path, &full_title, registry);
        if !objectives.is_empty() {
            body.push_str(&format!("  - {}\n", OBJECTIVES_LABEL));
            for objective in &objectives {
                body.push_str(&format!("    - {}\n", objective));
            }
        }

        let slide_module = find_slide_module(slides, module);
        if let Some(sm) = slide_module {
            for line in render(&flatten(&sm.content, registry), 1) {
                body.push_str(&line);
                body.push('\n');
            }
        }

        for activity in &module.activities {
            // Slide content for the activity goes before the activity bullet
            match registry.activity_number(activity) {
                Some(number) => {
                    let block = slide_module.and_then(|sm| sm.activity_content(&number));
                    match block {
                        Some(lines) => {
                            for line in render(&flatten(lines, registry), 1) {
                                body.push_str(&line);
                                body.push('\n');
                            }
                        }
                        None if slide_module.is_some() => {
                            print_warning(&format!(
                                "No slide content numbered {} for \"{}\" in {}",
                                number, activity, module.key
                            ));
                        }
                        None => {}
                    }
                }
                None => {
                    print_warning(&format!(
                        "No numeric label in activity \"{}\"; slide content skipped",
                        activity
                    ));
                }
            }

            body.push_str(&format!("  - {}\n", activity));

            let detail = extract_activity_detail_from_file(guide_path, activity, registry);
            if detail.scenario.is_empty() {
                for task in &detail.tasks {
                    body.push_str(&format!("    - {}\n", task));
                }
            } else {
                for paragraph in &detail.scenario {
                    body.push_str(&format!("    - {}\n", paragraph));
                }
                for task in &detail.tasks {
                    body.push_str(&format!("      - {}\n", task));
                }
            }
        }

        body.push('\n');
    }

    let slide_count = body.lines().filter(|line| line.starts_with("  - ")).count();

    format!(
        "# {}\n\nApproximately {} slides will be created for the required activities and associated content topics.\n\n{}",
        course_title, slide_count, body
    )
}

/// Build the course topics document: per slide-content module, the
/// outermost flattened bullets only
pub fn course_topics(
    course_title: &str,
    modules: &ModuleMap,
    slides: &SlideContent,
    registry: &PatternRegistry,
) -> String {
    let mut out = format!("# {}\n\n", course_title);

    for slide_module in slides.modules() {
        out.push_str(&format!("## {}\n", modules.display_title(&slide_module.key)));

        for topic in top_level_bullets(&flatten(&slide_module.content, registry)) {
            out.push_str(&format!("- {}\n", topic));
        }
        for (_, lines) in &slide_module.activities {
            for topic in top_level_bullets(&flatten(lines, registry)) {
                out.push_str(&format!("- {}\n", topic));
            }
        }

        out.push('\n');
    }

    out
}

/// Build the website agenda document: one bullet per module title
pub fn website_agenda(course_title: &str, modules: &ModuleMap) -> String {
    let mut out = format!("# {}\n\n## Agenda\n\n", course_title);

    for module in modules.modules() {
        out.push_str(&format!("- {}\n", module.title));
    }

    out
}

/// Build the titled slide content document: raw slide content under module
/// and activity titles, with `*` bullet markers rewritten to `-`
pub fn slides_with_titles(
    course_title: &str,
    modules: &ModuleMap,
    slides: &SlideContent,
    registry: &PatternRegistry,
) -> String {
    let mut out = format!("# {}\n\n", course_title);

    for line in &slides.preamble {
        out.push_str(line);
        out.push('\n');
    }
    if !slides.preamble.is_empty() {
        out.push('\n');
    }

    for module in modules.modules() {
        out.push_str(&format!("## {}: {}\n", module.key, module.title));

        let slide_module = find_slide_module(slides, module);
        if let Some(sm) = slide_module {
            for line in &sm.content {
                out.push_str(&rewrite_marker(line));
                out.push('\n');
            }
        }

        // Activity correlation here is strictly positional: the Nth activity
        // owns the block keyed "N"
        for (pos, activity) in module.activities.iter().enumerate() {
            out.push_str(&format!("- {}\n", activity));
            let key = (pos + 1).to_string();
            if let Some(lines) = slide_module.and_then(|sm| sm.activity_content(&key)) {
                for line in lines {
                    out.push_str(&rewrite_marker(line));
                    out.push('\n');
                }
            }
        }

        out.push('\n');
    }

    out
}

/// Locate the slide content block for an outline module, by key first and
/// by cleaned title as a fallback
fn find_slide_module<'a>(
    slides: &'a SlideContent,
    module: &crate::outline::OutlineModule,
) -> Option<&'a SlideModule> {
    let full_title = format!("{}: {}", module.key, module.title);
    slides
        .get(&module.key)
        .or_else(|| slides.modules().iter().find(|sm| titles_match(&sm.key, &full_title)))
}

/// Rewrite the leading `*` bullet marker to `-`, preserving indentation
fn rewrite_marker(line: &str) -> String {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => {
            let indent = &line[..line.len() - trimmed.len()];
            format!("{}-{}", indent, rest)
        }
        None => line.to_string(),
    }
}
