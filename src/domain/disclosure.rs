//! Expand/collapse state for the application tree.

use std::collections::HashSet;

/// Address of a collapsible node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// Top-level application row
    Application(String),
    /// Phase nested under an application
    Phase { app: String, phase: String },
}

impl NodeId {
    pub fn application(app_id: impl Into<String>) -> Self {
        Self::Application(app_id.into())
    }

    pub fn phase(app_id: impl Into<String>, phase_id: impl Into<String>) -> Self {
        Self::Phase {
            app: app_id.into(),
            phase: phase_id.into(),
        }
    }

    /// The node this one is nested under, if any
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Self::Application(_) => None,
            Self::Phase { app, .. } => Some(Self::Application(app.clone())),
        }
    }
}

/// Set of expanded nodes. Every node not in the set is collapsed.
///
/// Child state is independent of the parent: collapsing an application keeps
/// its phases' flags, so re-expanding it shows them exactly as they were.
#[derive(Debug, Clone, Default)]
pub struct DisclosureState {
    expanded: HashSet<NodeId>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node's own flag is set, regardless of its parent
    pub fn is_expanded(&self, node: &NodeId) -> bool {
        self.expanded.contains(node)
    }

    /// Whether the node is shown: every ancestor must be expanded
    pub fn is_visible(&self, node: &NodeId) -> bool {
        match node.parent() {
            Some(parent) => self.is_expanded(&parent) && self.is_visible(&parent),
            None => true,
        }
    }

    /// Flip the node's state and return the new expanded flag
    pub fn toggle(&mut self, node: &NodeId) -> bool {
        if self.expanded.remove(node) {
            false
        } else {
            self.expanded.insert(node.clone());
            true
        }
    }

    pub fn expand(&mut self, node: &NodeId) {
        self.expanded.insert(node.clone());
    }

    pub fn collapse(&mut self, node: &NodeId) {
        self.expanded.remove(node);
    }

    /// Collapse every node, children included
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Number of nodes with their flag set
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_node_is_collapsed() {
        let state = DisclosureState::new();
        assert!(!state.is_expanded(&NodeId::application("ba-1")));
    }

    #[test]
    fn test_toggle_unseen_expands() {
        let mut state = DisclosureState::new();
        let node = NodeId::application("ba-1");
        assert!(state.toggle(&node));
        assert!(state.is_expanded(&node));
    }

    #[test]
    fn test_even_toggles_restore_state() {
        let mut state = DisclosureState::new();
        let node = NodeId::phase("ba-1", "p1");
        for n in 1..=6 {
            state.toggle(&node);
            assert_eq!(state.is_expanded(&node), n % 2 == 1);
        }
        assert!(!state.is_expanded(&node));

        state.expand(&node);
        state.toggle(&node);
        state.toggle(&node);
        assert!(state.is_expanded(&node));
    }

    #[test]
    fn test_nodes_are_independent() {
        let mut state = DisclosureState::new();
        state.toggle(&NodeId::application("a"));
        assert!(!state.is_expanded(&NodeId::application("b")));
        assert!(!state.is_expanded(&NodeId::phase("a", "p1")));
    }

    #[test]
    fn test_same_phase_id_under_different_apps() {
        let mut state = DisclosureState::new();
        state.toggle(&NodeId::phase("a", "phase-1"));
        assert!(!state.is_expanded(&NodeId::phase("b", "phase-1")));
    }

    #[test]
    fn test_phase_visibility_follows_parent() {
        let mut state = DisclosureState::new();
        let phase = NodeId::phase("a", "p1");
        assert!(!state.is_visible(&phase));
        state.toggle(&NodeId::application("a"));
        assert!(state.is_visible(&phase));
        assert!(state.is_visible(&NodeId::application("zzz")));
    }

    #[test]
    fn test_phase_state_survives_parent_collapse() {
        let mut state = DisclosureState::new();
        let app = NodeId::application("a");
        let open_phase = NodeId::phase("a", "p1");
        let closed_phase = NodeId::phase("a", "p2");

        state.toggle(&app);
        state.toggle(&open_phase);
        state.toggle(&closed_phase);
        state.toggle(&closed_phase);

        // Collapse the parent, then bring it back
        state.toggle(&app);
        assert!(!state.is_visible(&open_phase));
        assert!(state.is_expanded(&open_phase));
        state.toggle(&app);

        assert!(state.is_visible(&open_phase));
        assert!(state.is_expanded(&open_phase));
        assert!(!state.is_expanded(&closed_phase));
    }

    #[test]
    fn test_collapse_all() {
        let mut state = DisclosureState::new();
        state.expand(&NodeId::application("a"));
        state.expand(&NodeId::phase("a", "p1"));
        assert_eq!(state.expanded_count(), 2);
        state.collapse_all();
        assert_eq!(state.expanded_count(), 0);
        state.collapse(&NodeId::application("a"));
        assert_eq!(state.expanded_count(), 0);
    }
}
