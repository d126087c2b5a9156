//! Bullet hierarchy flattening
//!
//! Reinterprets indented `*` bullet lines under the promotion rule: top-level
//! bullets that are activity markers are dropped, and their children move up
//! one level. Activity markers are redundant here because the activity
//! headers are materialized separately in the merged output; their children
//! carry the real content and must not end up orphaned or over-indented.

use crate::patterns::PatternRegistry;

/// One line of flattened output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatLine {
    /// A bullet at the given output level (1 = outermost)
    Bullet { level: usize, text: String },
    /// A non-bullet line passed through verbatim
    Raw(String),
}

/// Flatten a block of content lines
pub fn flatten(lines: &[String], registry: &PatternRegistry) -> Vec<FlatLine> {
    let mut out = Vec::new();
    // is-activity flag per bullet depth; truncation on dedent closes deeper scopes
    let mut stack: Vec<bool> = Vec::new();

    for line in lines {
        let trimmed = line.trim_start();
        if !trimmed.starts_with('*') {
            if !line.trim().is_empty() {
                out.push(FlatLine::Raw(line.clone()));
            }
            continue;
        }

        let depth = (line.len() - trimmed.len()) / 2;
        let text = trimmed.trim_start_matches('*').trim().to_string();
        let is_activity = registry.match_activity_bullet(trimmed).is_some();

        stack.truncate(depth);
        while stack.len() < depth {
            // A missing parent means the bullet was orphaned by an elided
            // activity marker (activity blocks arrive without their marker
            // line), so its subtree promotes too
            stack.push(true);
        }
        stack.push(is_activity);

        if depth == 0 {
            if is_activity {
                continue;
            }
            out.push(FlatLine::Bullet { level: 1, text });
        } else {
            let promoted = stack[0];
            let level = if promoted { depth } else { depth + 1 };
            out.push(FlatLine::Bullet { level, text });
        }
    }

    out
}

/// Render flattened lines as markdown bullets, `extra_levels` deep inside an
/// existing list (0 puts level-1 bullets at the left margin)
pub fn render(flat: &[FlatLine], extra_levels: usize) -> Vec<String> {
    flat.iter()
        .map(|line| match line {
            FlatLine::Bullet { level, text } => {
                format!("{}- {}", "  ".repeat(level - 1 + extra_levels), text)
            }
            FlatLine::Raw(raw) => raw.clone(),
        })
        .collect()
}

/// Only the outermost flattened bullets, for the topics projection
pub fn top_level_bullets(flat: &[FlatLine]) -> Vec<String> {
    flat.iter()
        .filter_map(|line| match line {
            FlatLine::Bullet { level: 1, text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::new()
    }

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_activity_bullet_promotion() {
        let input = lines(&["* activity 1", "  * some note"]);
        let flat = flatten(&input, &registry());

        assert_eq!(flat, vec![FlatLine::Bullet { level: 1, text: "some note".into() }]);
        assert_eq!(render(&flat, 0), vec!["- some note"]);
    }

    #[test]
    fn test_non_activity_bullets_keep_nesting() {
        let input = lines(&["* overview", "  * detail", "    * fine print"]);
        let flat = flatten(&input, &registry());

        assert_eq!(
            flat,
            vec![
                FlatLine::Bullet { level: 1, text: "overview".into() },
                FlatLine::Bullet { level: 2, text: "detail".into() },
                FlatLine::Bullet { level: 3, text: "fine print".into() },
            ]
        );
    }

    #[test]
    fn test_deep_children_of_activity_promote_one_level() {
        let input = lines(&["* activity 2", "  * point", "    * sub point"]);
        let flat = flatten(&input, &registry());

        assert_eq!(
            flat,
            vec![
                FlatLine::Bullet { level: 1, text: "point".into() },
                FlatLine::Bullet { level: 2, text: "sub point".into() },
            ]
        );
    }

    #[test]
    fn test_mixed_activity_and_plain_siblings() {
        let input =
            lines(&["* intro", "  * intro detail", "* activity 1", "  * promoted note"]);
        let flat = flatten(&input, &registry());

        assert_eq!(
            flat,
            vec![
                FlatLine::Bullet { level: 1, text: "intro".into() },
                FlatLine::Bullet { level: 2, text: "intro detail".into() },
                FlatLine::Bullet { level: 1, text: "promoted note".into() },
            ]
        );
    }

    #[test]
    fn test_orphaned_children_promote() {
        // An activity block keeps its original indentation but not its
        // marker line
        let input = lines(&["  * key point", "    * sub point"]);
        let flat = flatten(&input, &registry());

        assert_eq!(
            flat,
            vec![
                FlatLine::Bullet { level: 1, text: "key point".into() },
                FlatLine::Bullet { level: 2, text: "sub point".into() },
            ]
        );
    }

    #[test]
    fn test_non_bullet_lines_pass_through() {
        let input = lines(&["Some prose.", "", "* point"]);
        let flat = flatten(&input, &registry());

        assert_eq!(
            flat,
            vec![
                FlatLine::Raw("Some prose.".into()),
                FlatLine::Bullet { level: 1, text: "point".into() },
            ]
        );
    }

    #[test]
    fn test_flatten_is_idempotent_on_flattened_output() {
        let input = lines(&["* overview", "  * detail"]);
        let once = render(&flatten(&input, &registry()), 0);
        let twice = render(&flatten(&once, &registry()), 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_top_level_bullets() {
        let input = lines(&["* activity 1", "  * promoted", "* kept", "  * nested"]);
        let flat = flatten(&input, &registry());
        assert_eq!(top_level_bullets(&flat), vec!["promoted".to_string(), "kept".to_string()]);
    }
}
