use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Module;

pub struct GoAnalyzer;

impl GoAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for GoAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Module>> {
        let mod_path = path.join("go.mod");
        if !mod_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&mod_path)
            .with_context(|| format!("failed to read {}", mod_path.display()))?;
        Ok(parse_go_mod(&content))
    }
}

/// Collect every `require` entry from a go.mod file.
///
/// Handles both `require path version` lines and `require ( ... )` blocks.
/// Other directives (`replace`, `exclude`, `retract`) are ignored.
fn parse_go_mod(content: &str) -> Vec<Module> {
    let mut modules = BTreeSet::new();
    let mut in_require = false;

    for raw in content.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if in_require {
            if line == ")" {
                in_require = false;
            } else if let Some(m) = parse_requirement(line) {
                modules.insert(m);
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("require") {
            let rest = rest.trim();
            if rest == "(" {
                in_require = true;
            } else if let Some(m) = parse_requirement(rest) {
                modules.insert(m);
            }
        }
    }

    modules.into_iter().collect()
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

fn parse_requirement(spec: &str) -> Option<Module> {
    let mut parts = spec.split_whitespace();
    let path = parts.next()?.trim_matches('"');
    let version = parts.next()?;
    Some(Module::new(path, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_mod() {
        let content = r#"
module github.com/example/app

go 1.21

require github.com/pkg/errors v0.9.1

require (
	github.com/spf13/cobra v1.8.0
	golang.org/x/text v0.14.0 // indirect
	// golang.org/x/commented v0.1.0
)

replace github.com/spf13/cobra => ../cobra
"#;

        let modules = parse_go_mod(content);
        assert_eq!(
            modules,
            vec![
                Module::new("github.com/pkg/errors", "v0.9.1"),
                Module::new("github.com/spf13/cobra", "v1.8.0"),
                Module::new("golang.org/x/text", "v0.14.0"),
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = "require a.io/x v1.0.0\nrequire (\n\ta.io/x v1.0.0\n\ta.io/x v1.1.0\n)\n";
        assert_eq!(
            parse_go_mod(content),
            vec![Module::new("a.io/x", "v1.0.0"), Module::new("a.io/x", "v1.1.0")]
        );
    }

    #[test]
    fn test_no_requirements() {
        assert!(parse_go_mod("module example.com/app\n\ngo 1.22\n").is_empty());
    }
}
