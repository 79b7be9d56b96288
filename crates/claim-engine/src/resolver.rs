//! Selection-to-policy highlight resolution.
//!
//! The rendered report is a labeled-node hierarchy: section elements carry
//! the section identifier the analysis service assigned, and the user's
//! selection anchor sits somewhere below one of them. Resolution is a
//! tree-ancestor query, expressed over the [`SectionNode`] trait so the
//! same walk runs against the live DOM in the browser adapter and against
//! a plain parent-pointer tree in tests.

use shared_types::SectionMappings;

/// Minimum trimmed selection length considered meaningful. Shorter
/// selections (an accidental double-click on a short word, stray
/// whitespace) clear the highlight instead of resolving.
const MIN_SELECTION_LEN: usize = 3;

/// A node in a labeled hierarchy the resolver can walk.
pub trait SectionNode: Clone {
    /// Parent node, if any.
    fn parent(&self) -> Option<Self>;

    /// Section identifier carried by this node, if any.
    fn section_id(&self) -> Option<String>;

    /// Identity comparison (DOM `isSameNode` semantics, not structural
    /// equality).
    fn same_node(&self, other: &Self) -> bool;
}

/// Resolve a selection to the policy section it should highlight.
///
/// Walks the ancestor chain from `anchor` toward `root`, recording the
/// nearest node that carries a section identifier. Returns the mapped
/// policy-section id, or `None` whenever the selection is too short,
/// anchored outside `root`, or lands in a section absent from `mappings`.
/// The caller clears any previous highlight on `None` — a report section
/// with no mapping must not leave a stale highlight active.
pub fn resolve_highlight<N: SectionNode>(
    selected_text: &str,
    anchor: Option<&N>,
    root: &N,
    mappings: &SectionMappings,
) -> Option<String> {
    if selected_text.trim().chars().count() < MIN_SELECTION_LEN {
        return None;
    }
    let anchor = anchor?;

    let mut section_id: Option<String> = None;
    let mut within_root = false;
    let mut cursor = Some(anchor.clone());
    while let Some(node) = cursor {
        if section_id.is_none() {
            section_id = node.section_id();
        }
        if node.same_node(root) {
            within_root = true;
            break;
        }
        cursor = node.parent();
    }

    // A walk that exhausts without meeting the root was anchored in some
    // other pane; stray selection events from there are ignored entirely.
    if !within_root {
        return None;
    }

    mappings.get(&section_id?).cloned()
}
