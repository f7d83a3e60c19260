use colored::Colorize;

use crate::filesystem::Node;

const TEE: &str = "+--";
const CORNER: &str = "\\--";
const CONTINUATION: &str = "|   ";
const BLANK: &str = "    ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show `<path>/<name>` instead of the bare name.
    pub show_full_path: bool,
    /// Highlight directories and symbolic links with ANSI colors.
    pub colorize: bool,
}

/// Draws `node` and its subtree, one line per node.
pub fn render(node: &Node, show_full_path: bool) -> String {
    render_with(
        node,
        &RenderOptions {
            show_full_path,
            colorize: false,
        },
    )
}

pub fn render_with(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    render_into(&mut out, node, options, "", true);
    out
}

fn render_into(
    out: &mut String,
    node: &Node,
    options: &RenderOptions,
    indent: &str,
    is_last: bool,
) {
    let connector = if is_last { CORNER } else { TEE };
    out.push_str(indent);
    out.push_str(connector);
    out.push(' ');
    out.push_str(&display_name(node, options));
    out.push('\n');

    let children = node.children();
    if children.is_empty() {
        return;
    }

    let child_indent = format!("{indent}{}", if is_last { BLANK } else { CONTINUATION });
    for (idx, child) in children.iter().enumerate() {
        render_into(out, child, options, &child_indent, idx == children.len() - 1);
    }
}

fn display_name(node: &Node, options: &RenderOptions) -> String {
    let name = if options.show_full_path {
        format!("{}/{}", node.path(), node.name())
    } else {
        node.name().to_string()
    };

    if !options.colorize {
        return name;
    }
    match node {
        Node::Directory { .. } => name.blue().bold().to_string(),
        Node::SymbolicLink { .. } => name.cyan().to_string(),
        Node::File { .. } => name,
    }
}
