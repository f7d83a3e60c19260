use regex::Regex;
use tracing::debug;

use crate::filesystem::Node;

impl Node {
    /// Drops every node for which `predicate` holds, together with its
    /// subtree. Directories that lose all their children are kept.
    pub fn drop_where<P>(&self, predicate: P) -> Option<Node>
    where
        P: Fn(&Node) -> bool,
    {
        self.drop_where_ref(&predicate)
    }

    fn drop_where_ref(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<Node> {
        if predicate(self) {
            return None;
        }
        match self {
            Node::Directory { children, .. } => Some(
                self.with_children(
                    children
                        .iter()
                        .filter_map(|child| child.drop_where_ref(predicate))
                        .collect(),
                ),
            ),
            Node::File { .. } | Node::SymbolicLink { .. } => Some(self.clone()),
        }
    }

    /// Keeps `max_depth` levels of the tree, this node being the first.
    /// A budget of zero drops the node itself.
    pub fn drop_below_depth(&self, max_depth: usize) -> Option<Node> {
        if max_depth == 0 {
            return None;
        }
        match self {
            Node::Directory { children, .. } => Some(
                self.with_children(
                    children
                        .iter()
                        .filter_map(|child| child.drop_below_depth(max_depth - 1))
                        .collect(),
                ),
            ),
            Node::File { .. } | Node::SymbolicLink { .. } => Some(self.clone()),
        }
    }

    /// Drops directories left without children once their own subtrees have
    /// been pruned the same way.
    pub fn drop_empty(&self) -> Option<Node> {
        match self {
            Node::Directory { children, .. } => {
                let children: Vec<Node> = children.iter().filter_map(Node::drop_empty).collect();
                if children.is_empty() {
                    None
                } else {
                    Some(self.with_children(children))
                }
            }
            Node::File { .. } | Node::SymbolicLink { .. } => Some(self.clone()),
        }
    }

    /// Drops files and symbolic links whose name does not match `pattern`.
    pub fn drop_unmatched(&self, pattern: &Regex) -> Option<Node> {
        self.drop_where(|node| !node.is_directory() && !pattern.is_match(node.name()))
    }

    /// Drops files and symbolic links whose name matches `pattern`.
    pub fn drop_matched(&self, pattern: &Regex) -> Option<Node> {
        self.drop_where(|node| !node.is_directory() && pattern.is_match(node.name()))
    }
}

/// Validated filter settings, applied in a fixed order by [`FilterOptions::apply`].
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub show_hidden: bool,
    pub directories_only: bool,
    pub match_pattern: Option<Regex>,
    pub exclude_pattern: Option<Regex>,
    pub max_depth: Option<usize>,
    pub exclude_empty: bool,
}

impl FilterOptions {
    /// Runs the enabled passes in order: depth, directories only, hidden,
    /// match pattern, exclude pattern, empty directories.
    ///
    /// Returns `None` as soon as a pass drops the root.
    pub fn apply(&self, root: &Node) -> Option<Node> {
        let mut tree = root.clone();

        if let Some(max_depth) = self.max_depth {
            debug!("Dropping entries below depth {}", max_depth);
            tree = tree.drop_below_depth(max_depth)?;
        }
        if self.directories_only {
            debug!("Dropping everything but directories");
            tree = tree.drop_where(|node| !node.is_directory())?;
        }
        if !self.show_hidden {
            debug!("Dropping hidden entries");
            tree = tree.drop_where(Node::is_hidden)?;
        }
        if let Some(pattern) = &self.match_pattern {
            debug!("Dropping files not matching '{}'", pattern);
            tree = tree.drop_unmatched(pattern)?;
        }
        if let Some(pattern) = &self.exclude_pattern {
            debug!("Dropping files matching '{}'", pattern);
            tree = tree.drop_matched(pattern)?;
        }
        if self.exclude_empty {
            debug!("Dropping empty directories");
            tree = tree.drop_empty()?;
        }

        Some(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    /// `/a` holding `x.txt`, `.y` and an empty `b`.
    fn sample_tree() -> Node {
        Node::directory(
            "/a",
            "a",
            vec![
                Node::file("/a/x.txt", "x.txt"),
                Node::file("/a/.y", ".y"),
                Node::directory("/a/b", "b", vec![]),
            ],
        )
    }

    fn nested_tree() -> Node {
        Node::directory(
            "/r",
            "r",
            vec![
                Node::directory(
                    "/r/src",
                    "src",
                    vec![
                        Node::file("/r/src/main.rs", "main.rs"),
                        Node::directory(
                            "/r/src/empty",
                            "empty",
                            vec![Node::directory("/r/src/empty/inner", "inner", vec![])],
                        ),
                    ],
                ),
                Node::directory("/r/.git", ".git", vec![Node::file("/r/.git/HEAD", "HEAD")]),
                Node::symbolic_link("/r/link", "link"),
                Node::file("/r/notes.txt", "notes.txt"),
            ],
        )
    }

    #[fixture]
    fn sample() -> Node {
        sample_tree()
    }

    #[fixture]
    fn nested() -> Node {
        nested_tree()
    }

    fn depth(node: &Node) -> usize {
        1 + node.children().iter().map(depth).max().unwrap_or(0)
    }

    fn names(node: &Node) -> Vec<&str> {
        node.iter().map(Node::name).collect()
    }

    fn regex(pattern: &str) -> Regex {
        Regex::new(pattern).expect("Invalid test pattern")
    }

    #[rstest]
    fn drop_where_removes_whole_subtrees(nested: Node) {
        let pruned = nested
            .drop_where(|node| node.name() == "src")
            .expect("Root was dropped");
        assert_eq!(names(&pruned), vec!["r", ".git", "HEAD", "link", "notes.txt"]);
    }

    #[rstest]
    fn drop_where_keeps_emptied_directories(sample: Node) {
        let pruned = sample.drop_where(Node::is_file).expect("Root was dropped");
        assert_eq!(names(&pruned), vec!["a", "b"]);

        let git = nested_tree()
            .drop_where(|node| node.name() == "HEAD")
            .expect("Root was dropped");
        assert!(git.directory_names().contains(&".git"));
    }

    #[rstest]
    fn drop_where_can_drop_root(sample: Node) {
        assert_eq!(sample.drop_where(|_| true), None);
    }

    #[rstest]
    fn drop_where_never_grows_the_tree(
        nested: Node,
        #[values("r", "src", "main.rs", "link", "missing")] dropped: &str,
    ) {
        let before = nested.iter().count();
        let after = nested
            .drop_where(|node| node.name() == dropped)
            .map(|tree| tree.iter().count())
            .unwrap_or(0);
        assert!(after <= before);
    }

    #[rstest]
    fn drop_where_leaves_input_untouched(nested: Node) {
        let copy = nested.clone();
        let _ = nested.drop_where(Node::is_file);
        assert_eq!(nested, copy);
    }

    #[rstest]
    fn depth_zero_drops_root(sample: Node) {
        assert_eq!(sample.drop_below_depth(0), None);
        assert_eq!(Node::file("/f", "f").drop_below_depth(0), None);
    }

    #[rstest]
    fn depth_one_keeps_only_root(nested: Node) {
        let pruned = nested.drop_below_depth(1).expect("Root was dropped");
        assert_eq!(pruned, Node::directory("/r", "r", vec![]));
    }

    #[rstest]
    fn depth_two_keeps_direct_children(nested: Node) {
        let pruned = nested.drop_below_depth(2).expect("Root was dropped");
        assert_eq!(names(&pruned), vec!["r", "src", ".git", "link", "notes.txt"]);
        assert!(pruned.children()[0].children().is_empty());
    }

    #[rstest]
    fn depth_at_or_beyond_tree_depth_is_identity(nested: Node, #[values(0, 1, 5)] extra: usize) {
        let max_depth = depth(&nested) + extra;
        assert_eq!(nested.drop_below_depth(max_depth), Some(nested));
    }

    #[rstest]
    fn drop_empty_removes_nested_empty_directories(nested: Node) {
        let pruned = nested.drop_empty().expect("Root was dropped");
        assert_eq!(
            names(&pruned),
            vec!["r", "src", "main.rs", ".git", "HEAD", "link", "notes.txt"]
        );
    }

    #[test]
    fn drop_empty_drops_directory_with_only_empty_descendants() {
        let tree = Node::directory("/e", "e", vec![Node::directory("/e/f", "f", vec![])]);
        assert_eq!(tree.drop_empty(), None);
    }

    #[test]
    fn drop_empty_keeps_leaves() {
        let file = Node::file("/f", "f");
        let link = Node::symbolic_link("/l", "l");
        assert_eq!(file.drop_empty(), Some(file.clone()));
        assert_eq!(link.drop_empty(), Some(link.clone()));
    }

    #[rstest]
    #[case(nested_tree())]
    #[case(sample_tree())]
    #[case(Node::directory("/e", "e", vec![]))]
    fn drop_empty_is_idempotent(#[case] tree: Node) {
        let once = tree.drop_empty();
        let twice = once.as_ref().and_then(Node::drop_empty);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn match_pattern_keeps_directories_and_matching_files(sample: Node) {
        let pruned = sample
            .drop_unmatched(&regex(r"\.txt$"))
            .expect("Root was dropped");
        assert_eq!(names(&pruned), vec!["a", "x.txt", "b"]);
    }

    #[rstest]
    fn exclude_pattern_drops_matching_files_only(sample: Node) {
        let pruned = sample
            .drop_matched(&regex(r"\.txt$"))
            .expect("Root was dropped");
        assert_eq!(names(&pruned), vec!["a", ".y", "b"]);
    }

    #[rstest]
    fn name_patterns_never_drop_directories(nested: Node) {
        let pruned = nested
            .drop_unmatched(&regex("^nothing$"))
            .expect("Root was dropped");
        assert_eq!(pruned.directory_names(), nested.directory_names());
        assert!(pruned.file_names().is_empty());
        assert_eq!(pruned.symbolic_link_count(), 0);
    }

    #[rstest]
    fn default_options_hide_dot_entries(sample: Node) {
        let filtered = FilterOptions::default().apply(&sample).expect("Root was dropped");
        assert_eq!(names(&filtered), vec!["a", "x.txt", "b"]);
    }

    #[test]
    fn hidden_root_is_dropped_by_default() {
        let hidden = Node::directory("/.cache", ".cache", vec![]);
        assert_eq!(FilterOptions::default().apply(&hidden), None);
    }

    #[rstest]
    #[case::shown(FilterOptions { show_hidden: true, ..Default::default() }, 2, 2)]
    #[case::shown_and_pruned(
        FilterOptions { show_hidden: true, exclude_empty: true, ..Default::default() },
        1,
        2
    )]
    #[case::directories_only(
        FilterOptions { show_hidden: true, directories_only: true, ..Default::default() },
        2,
        0
    )]
    #[case::matching(
        FilterOptions { show_hidden: true, match_pattern: Some(regex(r"\.txt$")), ..Default::default() },
        2,
        1
    )]
    #[case::excluding(
        FilterOptions { show_hidden: true, exclude_pattern: Some(regex(r"\.txt$")), ..Default::default() },
        2,
        1
    )]
    fn options_produce_expected_counts(
        sample: Node,
        #[case] options: FilterOptions,
        #[case] directories: usize,
        #[case] files: usize,
    ) {
        let filtered = options.apply(&sample).expect("Root was dropped");
        assert_eq!(filtered.directory_names().len(), directories);
        assert_eq!(filtered.file_names().len(), files);
    }

    #[rstest]
    fn directories_only_then_prune_drops_everything(sample: Node) {
        let options = FilterOptions {
            directories_only: true,
            exclude_empty: true,
            ..Default::default()
        };
        assert_eq!(options.apply(&sample), None);
    }

    #[rstest]
    fn depth_runs_before_empty_prune(nested: Node) {
        // Depth 2 empties `src`, which the empty prune then removes.
        let options = FilterOptions {
            show_hidden: true,
            max_depth: Some(2),
            exclude_empty: true,
            ..Default::default()
        };
        let filtered = options.apply(&nested).expect("Root was dropped");
        assert_eq!(names(&filtered), vec!["r", "link", "notes.txt"]);
    }

    #[rstest]
    fn depth_zero_option_drops_root(sample: Node) {
        let options = FilterOptions {
            max_depth: Some(0),
            ..Default::default()
        };
        assert_eq!(options.apply(&sample), None);
    }
}
