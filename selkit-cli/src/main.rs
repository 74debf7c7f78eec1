//! selkit CLI
//!
//! Builds canonical CSS selector text from a JSON description.

mod description;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::warning::warn_once;
use selkit_css::{Combinator, Selector};

use description::Description;

/// selkit — build CSS selector text from a JSON description
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"DESCRIPTION FORMAT:
    A compound selector is a list of fragments, added in order:
        [{"element": "a"}, {"attr": "href^=https"}, {"pseudo-class": "hover"}]

    A combined selector joins two descriptions:
        {"left": [...], "combinator": ">", "right": [...]}

EXAMPLES:
    # Build from a file
    selkit selector.json

    # Build from inline JSON
    selkit --json '[{"element": "div"}, {"id": "main"}]'

    # Also show the combinator tree
    selkit --tree selector.json
"#)]
struct Cli {
    /// Path to a JSON selector description
    #[arg(value_name = "FILE", required_unless_present = "json")]
    path: Option<PathBuf>,

    /// JSON selector description given inline
    #[arg(long, value_name = "JSON", conflicts_with = "path")]
    json: Option<String>,

    /// Print the combinator tree before the selector text
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let description = Description::from_json(&load_text(&cli)?)?;
    let selector = description.build().context("failed to build selector")?;

    if cli.tree {
        for line in tree_lines(selector.as_ref()) {
            print_tree_line(&line);
        }
        println!();
    }
    let text = selector.stringify();
    if text.is_empty() {
        let _ = warn_once("CLI", "description produced an empty selector");
    }
    println!("{text}");
    Ok(())
}

/// The description text, from `--json` or from FILE.
fn load_text(cli: &Cli) -> Result<String> {
    match (&cli.json, &cli.path) {
        (Some(json), _) => Ok(json.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => anyhow::bail!("a FILE or --json description is required"),
    }
}

/// One line of the `--tree` view.
#[derive(Debug, PartialEq, Eq)]
enum TreeLine {
    Combinator { depth: usize, combinator: Combinator },
    Compound { depth: usize, text: String },
}

/// Flatten a built selector into tree lines, parents before children and
/// left operands before right ones.
fn tree_lines(selector: &dyn Selector) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    let mut pending = vec![(selector, 0)];
    while let Some((node, depth)) = pending.pop() {
        match node.operands() {
            Some((left, combinator, right)) => {
                lines.push(TreeLine::Combinator { depth, combinator });
                pending.push((right, depth + 1));
                pending.push((left, depth + 1));
            }
            None => lines.push(TreeLine::Compound {
                depth,
                text: node.stringify(),
            }),
        }
    }
    lines
}

fn print_tree_line(line: &TreeLine) {
    match line {
        TreeLine::Combinator { depth, combinator } => {
            let indent = "  ".repeat(*depth);
            println!("{indent}{}", format!("{:?}", combinator.symbol()).cyan());
        }
        TreeLine::Compound { depth, text } => {
            let indent = "  ".repeat(*depth);
            println!("{indent}{}", text.green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;
    use std::io::Write;

    const NESTED: &str = r#"{
        "left": [{"element": "ul"}],
        "combinator": ">",
        "right": {
            "left": [{"element": "li"}, {"class": "item"}],
            "combinator": "+",
            "right": [{"element": "li"}]
        }
    }"#;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_text_from_inline_json() {
        let cli = Cli::try_parse_from(["selkit", "--json", "[]"]).unwrap();
        assert_eq!(load_text(&cli).unwrap(), "[]");
    }

    #[test]
    fn test_load_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NESTED.as_bytes()).unwrap();

        let cli = Cli::try_parse_from([OsStr::new("selkit"), file.path().as_os_str()]).unwrap();
        let text = load_text(&cli).unwrap();
        let selector = Description::from_json(&text).unwrap().build().unwrap();
        assert_eq!(selector.stringify(), "ul > li.item + li");
    }

    #[test]
    fn test_load_text_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let cli = Cli::try_parse_from([OsStr::new("selkit"), path.as_os_str()]).unwrap();
        let err = load_text(&cli).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_file_and_json_conflict() {
        assert!(Cli::try_parse_from(["selkit", "a.json", "--json", "[]"]).is_err());
        assert!(Cli::try_parse_from(["selkit"]).is_err());
    }

    #[test]
    fn test_tree_flag_parses() {
        let cli = Cli::try_parse_from(["selkit", "--tree", "a.json"]).unwrap();
        assert!(cli.tree);
        assert_eq!(cli.path, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_tree_lines_walk_built_selector() {
        let selector = Description::from_json(NESTED).unwrap().build().unwrap();
        assert_eq!(
            tree_lines(selector.as_ref()),
            vec![
                TreeLine::Combinator {
                    depth: 0,
                    combinator: Combinator::Child
                },
                TreeLine::Compound {
                    depth: 1,
                    text: "ul".to_string()
                },
                TreeLine::Combinator {
                    depth: 1,
                    combinator: Combinator::NextSibling
                },
                TreeLine::Compound {
                    depth: 2,
                    text: "li.item".to_string()
                },
                TreeLine::Compound {
                    depth: 2,
                    text: "li".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_tree_lines_for_single_compound() {
        let selector = Description::from_json(r#"[{"id": "main"}]"#)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            tree_lines(selector.as_ref()),
            vec![TreeLine::Compound {
                depth: 0,
                text: "#main".to_string()
            }]
        );
    }
}
