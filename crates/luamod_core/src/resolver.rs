//! Dependency-graph flattening: linearizes requirement graphs into a
//! dependency-first load order.
//!
//! The traversal is a literal post-order depth-first emission with an
//! explicit per-call accumulator, so it is reentrant and has no shared
//! state. It does **not** deduplicate across branches: a module required by
//! two independent branches appears once per path that reaches it. The
//! duplication is a documented characteristic of the load order, not a
//! defect; it is NOT a set-based topological sort.

use crate::module::Module;

/// Compute the dependency-first load order for `modules`.
///
/// Arguments are visited left-to-right. For each module, its own
/// requirements are fully resolved first (recursively, same rule), then the
/// module itself is appended; a module with no requirements is appended
/// immediately. Resolving a single leaf module therefore yields a
/// one-element sequence containing just that module.
///
/// Requirement declaration guards only reject one-level reverse
/// requirements; a cycle spanning three or more modules recurses without
/// bound here.
pub fn requirements(modules: &[Module]) -> Vec<Module> {
    let mut order = Vec::new();
    collect(modules, &mut order);
    order
}

fn collect(modules: &[Module], order: &mut Vec<Module>) {
    for module in modules {
        let direct = module.requirements();
        if !direct.is_empty() {
            collect(&direct, order);
        }
        order.push(module.clone());
    }
}

/// Indentation style for [`relationship`] trees.
#[derive(Clone, Copy, Debug)]
pub struct TreeStyle {
    /// Characters of indentation added per level.
    pub indent: usize,
    /// The character used as indentation fill.
    pub fill: char,
}

impl Default for TreeStyle {
    fn default() -> Self {
        TreeStyle {
            indent: 4,
            fill: '.',
        }
    }
}

/// Render an indented requirement tree for diagnostics.
///
/// One line per module, indentation proportional to depth. The visiting
/// order is the pre-order recursion, which is not the load order produced
/// by [`requirements`].
pub fn relationship(modules: &[Module], style: &TreeStyle) -> String {
    let mut rendered = String::new();
    render(&mut rendered, 0, modules, style);
    rendered
}

fn render(out: &mut String, depth: usize, modules: &[Module], style: &TreeStyle) {
    for module in modules {
        for _ in 0..depth {
            out.push(style.fill);
        }
        out.push_str(module.name());
        out.push('\n');
        let direct = module.requirements();
        if !direct.is_empty() {
            render(out, depth + style.indent, &direct, style);
        }
    }
}
