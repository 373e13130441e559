//! Cascading category selector island.

use leptos::prelude::*;

use super::tree::{options_at, resolve_path, select_at, Category, MAX_DEPTH};

/// One rendered cascade level: its depth, the value currently selected at
/// that depth (empty for the trailing "pick one" level) and its options.
type Level = (usize, String, Vec<(String, String)>);

fn levels_for(roots: &[Category], path: &str) -> Vec<Level> {
    let chain = resolve_path(roots, path);

    let mut levels = Vec::new();
    let mut cats = roots;
    for cat in chain.iter().take(MAX_DEPTH) {
        levels.push((levels.len(), cat.name.clone(), options_at(cats)));
        cats = &cat.sub_categories;
    }
    // one more selector for the next level down, while there is one
    if !cats.is_empty() && levels.len() < MAX_DEPTH {
        levels.push((levels.len(), String::new(), options_at(cats)));
    }
    levels
}

/// Replaces the static single-field category form with one `<select>` per
/// tree level. Every change recomputes the cascade from the canonical dotted
/// path and reports it through `on_change`.
#[component]
pub fn CategorySelector(
    roots: Vec<Category>,
    initial: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let roots = StoredValue::new(roots);
    let (selected, set_selected) = signal(initial);

    let levels = Memo::new(move |_| {
        roots.with_value(|roots| levels_for(roots, &selected.get()))
    });

    view! {
        <For
            each=move || levels.get()
            key=|level| level.clone()
            children=move |(level, value, options): Level| {
                let handle_change = move |ev: web_sys::Event| {
                    let choice = event_target_value(&ev);
                    let next = select_at(&selected.get_untracked(), level, &choice);
                    set_selected.set(next.clone());
                    on_change.run(next);
                };
                view! {
                    <select class="category-select" on:change=handle_change>
                        {options
                            .into_iter()
                            .map(|(val, label)| {
                                let is_selected = val == value;
                                view! {
                                    <option value=val selected=is_selected>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                }
            }
        />
    }
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
                image: None,
                sub_categories: vec![leaf("games.puzzle", "Puzzle")],
            },
            leaf("tools", "Tools"),
        ]
    }

    #[test]
    fn empty_selection_renders_just_the_root_level() {
        let levels = levels_for(&sample_tree(), "");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].0, 0);
        assert_eq!(levels[0].1, "");
    }

    #[test]
    fn selection_with_children_adds_the_next_level() {
        let levels = levels_for(&sample_tree(), "games");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].1, "games");
        assert_eq!(levels[1].1, "");
        // second level offers the subcategories of "games"
        assert!(levels[1]
            .2
            .iter()
            .any(|(value, _)| value == "games.puzzle"));
    }

    #[test]
    fn leaf_selection_adds_no_trailing_level() {
        let levels = levels_for(&sample_tree(), "tools");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].1, "tools");
    }

    // single chain of nested categories, `depth` levels deep
    fn deep_chain(depth: usize) -> Vec<Category> {
        let mut node: Option<Category> = None;
        for level in (0..depth).rev() {
            let name = (0..=level)
                .map(|i| format!("c{i}"))
                .collect::<Vec<_>>()
                .join(".");
            node = Some(Category {
                name,
                description: format!("Level {level}"),
                image: None,
                sub_categories: node.take().into_iter().collect(),
            });
        }
        node.into_iter().collect()
    }

    #[test]
    fn cascade_never_renders_more_than_the_depth_cap() {
        let tree = deep_chain(MAX_DEPTH + 2);
        let path = (0..MAX_DEPTH + 2)
            .map(|i| format!("c{i}"))
            .collect::<Vec<_>>()
            .join(".");
        let levels = levels_for(&tree, &path);
        assert_eq!(levels.len(), MAX_DEPTH);
        // the deepest rendered level still shows its own selection
        let last = levels.last().unwrap();
        assert_eq!(last.1.matches('.').count() + 1, MAX_DEPTH);
    }
}
