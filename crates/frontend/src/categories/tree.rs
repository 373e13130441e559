//! Category tree model and the pure cascade logic behind the selector.
//!
//! The server embeds the tree as the `window.categories` global. A category
//! `name` is its full dotted path ("games.strategy"), so resolving a path
//! means walking prefix by prefix down the tree.

use serde::Deserialize;

/// Maximum nesting depth the selector renders.
pub const MAX_DEPTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Full dotted path of this category.
    pub name: String,
    /// Human-readable label shown in the selector.
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

/// Finds the category with the given full dotted name among `cats`.
pub fn find<'a>(cats: &'a [Category], name: &str) -> Option<&'a Category> {
    cats.iter().find(|cat| cat.name == name)
}

/// Resolves a dotted path into the chain of categories along it.
///
/// A dangling tail (a component that no longer exists in the tree) stops the
/// walk; whatever prefix did resolve is returned.
pub fn resolve_path<'a>(roots: &'a [Category], path: &str) -> Vec<&'a Category> {
    let mut chain = Vec::new();
    if path.is_empty() {
        return chain;
    }

    let mut cats = roots;
    let mut prefix = String::new();
    for part in path.split('.') {
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(part);

        let Some(cat) = find(cats, &prefix) else {
            break;
        };
        cats = &cat.sub_categories;
        chain.push(cat);
    }
    chain
}

/// Option list for one cascade level: a blank `---` entry followed by the
/// categories of that level as `(value, label)` pairs.
pub fn options_at(cats: &[Category]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "---".to_string())];
    options.extend(
        cats.iter()
            .map(|cat| (cat.name.clone(), cat.description.clone())),
    );
    options
}

/// New canonical path after picking `choice` in the selector at `level`.
///
/// A non-empty choice is already a full dotted path. Picking the blank entry
/// falls back to the parent selection (the path truncated to `level`
/// components), or clears the selection entirely at the root level.
pub fn select_at(current: &str, level: usize, choice: &str) -> String {
    if !choice.is_empty() {
        return choice.to_string();
    }
    if level == 0 {
        return String::new();
    }
    current
        .split('.')
        .take(level)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, description: &str) -> Category {
        Category {
            name: name.to_string(),
            description: description.to_string(),
            image: None,
            sub_categories: Vec::new(),
        }
    }

    fn sample_tree() -> Vec<Category> {
        vec![
            Category {
                name: "games".to_string(),
                description: "Games".to_string(),
                image: Some("games".to_string()),
                sub_categories: vec![
                    leaf("games.strategy", "Strategy"),
                    leaf("games.puzzle", "Puzzle"),
                ],
            },
            leaf("tools", "Tools"),
        ]
    }

    #[test]
    fn resolves_a_full_path() {
        let tree = sample_tree();
        let chain = resolve_path(&tree, "games.strategy");
        let names: Vec<&str> = chain.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["games", "games.strategy"]);
    }

    #[test]
    fn dangling_tail_keeps_the_resolved_prefix() {
        let tree = sample_tree();
        let chain = resolve_path(&tree, "games.retired.sub");
        let names: Vec<&str> = chain.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["games"]);
    }

    #[test]
    fn empty_path_resolves_to_nothing() {
        let tree = sample_tree();
        assert!(resolve_path(&tree, "").is_empty());
    }

    #[test]
    fn options_start_with_the_blank_entry() {
        let tree = sample_tree();
        let options = options_at(&tree);
        assert_eq!(options[0], (String::new(), "---".to_string()));
        assert_eq!(options[1], ("games".to_string(), "Games".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn picking_a_category_replaces_the_path() {
        assert_eq!(select_at("tools", 0, "games"), "games");
        assert_eq!(select_at("games", 1, "games.puzzle"), "games.puzzle");
    }

    #[test]
    fn blank_choice_falls_back_to_the_parent() {
        assert_eq!(select_at("games.strategy", 1, ""), "games");
        assert_eq!(select_at("games.strategy", 0, ""), "");
    }

    #[test]
    fn deserializes_the_embedded_tree_shape() {
        let json = r#"[
            {"name": "games", "description": "Games", "image": "games",
             "subCategories": [{"name": "games.puzzle", "description": "Puzzle"}]}
        ]"#;
        let tree: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(tree[0].sub_categories[0].name, "games.puzzle");
        assert!(tree[0].sub_categories[0].sub_categories.is_empty());
    }
}
