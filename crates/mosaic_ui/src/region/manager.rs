//! Region manager: per-frame layout, drawing, and focus fan-out.

use crate::input::{InputState, MouseButton};
use crate::layout::Rect;
use crate::render::{FrameRenderer, RenderCommand, TextMetrics};
use crate::style::RegionStyle;

use super::config::RegionConfig;
use super::tree::{RegionId, RegionKind, RegionTree};

/// Owns a layout description and the tree built from it.
///
/// The manager rebuilds the tree on [`reload`](Self::reload), recomputes
/// geometry top-down once per frame, draws every non-root node, hit-tests
/// leaves, and propagates focus when a leaf is clicked.
pub struct RegionManager {
    config: RegionConfig,
    tree: RegionTree,
}

impl RegionManager {
    /// Builds a manager from a layout description.
    #[must_use]
    pub fn new(config: RegionConfig) -> Self {
        let tree = config.build();
        Self { config, tree }
    }

    /// Returns the built tree for queries.
    #[must_use]
    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }

    /// Returns the layout description the tree was built from.
    #[must_use]
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Discards all runtime state and rebuilds the tree from the stored
    /// description, as if freshly constructed.
    pub fn reload(&mut self) {
        self.tree = self.config.build();
        tracing::info!("region tree rebuilt");
    }

    /// Swaps in a new layout description and rebuilds.
    pub fn set_config(&mut self, config: RegionConfig) {
        self.config = config;
        self.reload();
    }

    /// Recomputes geometry for the frame and emits draw commands.
    ///
    /// The content area is clamped to the style's minimum size before the
    /// layout pass, so a shrunken host window cannot collapse the panels.
    pub fn draw(
        &mut self,
        bounds: Rect,
        input: &InputState,
        style: &RegionStyle,
        metrics: &dyn TextMetrics,
        out: &mut FrameRenderer,
    ) {
        let Some(root) = self.tree.root() else {
            return;
        };

        let area = Rect::new(
            bounds.x,
            bounds.y,
            bounds.width.max(style.min_width),
            bounds.height.max(style.min_height),
        );

        self.update_layout(root, area);
        self.draw_node(root, input, style, metrics, out);
    }

    /// Assigns geometry top-down according to each node's kind.
    fn update_layout(&mut self, id: RegionId, rect: Rect) {
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        node.rect = rect;
        let kind = node.kind;

        let children: Vec<RegionId> = self.tree.children(id).to_vec();
        if children.is_empty() {
            return;
        }

        match kind {
            // Equal-height bands, top to bottom.
            RegionKind::Root => {
                for (index, child) in children.iter().enumerate() {
                    self.update_layout(*child, rect.band(index, children.len()));
                }
            }
            // Equal-width columns, left to right.
            RegionKind::Row | RegionKind::Group => {
                for (index, child) in children.iter().enumerate() {
                    self.update_layout(*child, rect.column(index, children.len()));
                }
            }
            RegionKind::Leaf => {}
        }
    }

    fn draw_node(
        &mut self,
        id: RegionId,
        input: &InputState,
        style: &RegionStyle,
        metrics: &dyn TextMetrics,
        out: &mut FrameRenderer,
    ) {
        let children: Vec<RegionId> = self.tree.children(id).to_vec();

        let Some(node) = self.tree.get(id) else {
            return;
        };
        let kind = node.kind;
        let rect = node.rect;
        let name = node.name.clone();
        let focused = node.focused;
        let hovered = node.hovered;

        // The root itself is never drawn, only its subtree.
        if kind == RegionKind::Root {
            for child in children {
                self.draw_node(child, input, style, metrics, out);
            }
            return;
        }

        let fill = if focused {
            style.fill_focused
        } else if hovered {
            style.fill_hovered
        } else {
            style.fill
        };

        out.push(RenderCommand::Rect {
            bounds: rect,
            color: fill,
            corner_radius: 0.0,
        });
        out.push(RenderCommand::RectOutline {
            bounds: rect,
            color: style.border,
            width: style.border_width,
            corner_radius: 0.0,
        });

        if !name.is_empty() {
            let (text_w, text_h) = metrics.measure(&name, style.font_size);
            let scale = 1.0_f32
                .min((rect.width - style.label_inset) / text_w)
                .min((rect.height - style.label_inset) / text_h)
                .max(0.0);

            if scale > 0.0 {
                let line = metrics.line_height(style.font_size);
                out.push(RenderCommand::Text {
                    text: name,
                    x: rect.x + (rect.width - text_w * scale) * 0.5,
                    y: rect.y + (rect.height - line * scale) * 0.5,
                    color: style.label,
                    font_size: style.font_size * scale,
                });
            }
        }

        if kind.is_leaf() {
            // Hit state updates after the cell is drawn; the fill above uses
            // the previous frame's hover.
            let over = rect.contains(input.mouse_x, input.mouse_y);
            if let Some(node) = self.tree.get_mut(id) {
                node.hovered = over;
            }
            if over && input.mouse_clicked(MouseButton::Left) {
                self.click(id);
            }
        }

        for child in children {
            self.draw_node(child, input, style, metrics, out);
        }
    }

    /// Runs the focus fan-out for a clicked region.
    ///
    /// Clears focus tree-wide, focuses the clicked node, then fans out to
    /// every leaf sharing the node's group id and, when the node is a leaf
    /// sitting directly in a row, to every leaf of that row. Both rules may
    /// fire for one click.
    pub fn click(&mut self, id: RegionId) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        tracing::debug!(region = %node.name, "region clicked");

        let group = node.group.clone();
        let kind = node.kind;
        let parent = node.parent;

        self.clear_focus();
        if let Some(node) = self.tree.get_mut(id) {
            node.focused = true;
        }

        if let Some(group) = group.filter(|g| !g.is_empty()) {
            self.set_group_focus(&group);
        }

        if kind.is_leaf() {
            if let Some(row) = parent {
                let parent_is_row = self
                    .tree
                    .get(row)
                    .is_some_and(|node| node.kind == RegionKind::Row);
                if parent_is_row {
                    self.set_row_focus(row);
                }
            }
        }
    }

    fn clear_focus(&mut self) {
        let ids: Vec<RegionId> = self.tree.iter_dfs().collect();
        for id in ids {
            if let Some(node) = self.tree.get_mut(id) {
                node.focused = false;
            }
        }
    }

    /// Focuses every leaf in the tree sharing `group`.
    fn set_group_focus(&mut self, group: &str) {
        let ids: Vec<RegionId> = self.tree.iter_dfs().collect();
        for id in ids {
            if let Some(node) = self.tree.get_mut(id) {
                if node.kind.is_leaf() && node.group.as_deref() == Some(group) {
                    node.focused = true;
                }
            }
        }
    }

    /// Focuses every leaf in the tree whose direct parent is `row`.
    fn set_row_focus(&mut self, row: RegionId) {
        let ids: Vec<RegionId> = self.tree.iter_dfs().collect();
        for id in ids {
            if let Some(node) = self.tree.get_mut(id) {
                if node.kind.is_leaf() && node.parent == Some(row) {
                    node.focused = true;
                }
            }
        }
    }
}

impl Default for RegionManager {
    fn default() -> Self {
        Self::new(RegionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::NodeSpec;
    use crate::render::MonospaceMetrics;

    fn draw_once(manager: &mut RegionManager, input: &InputState) {
        let mut renderer = FrameRenderer::new();
        renderer.begin_frame();
        manager.draw(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            input,
            &RegionStyle::LIGHT,
            &MonospaceMetrics::new(),
            &mut renderer,
        );
    }

    fn focused_names(manager: &RegionManager) -> Vec<String> {
        manager
            .tree()
            .iter_dfs()
            .filter_map(|id| manager.tree().get(id))
            .filter(|node| node.focused)
            .map(|node| node.name.clone())
            .collect()
    }

    fn rect_of(manager: &RegionManager, name: &str) -> Rect {
        let id = manager.tree().find_by_name(name).unwrap();
        manager.tree().get(id).unwrap().rect
    }

    #[test]
    fn test_layout_equal_splits() {
        let mut manager = RegionManager::default();
        draw_once(&mut manager, &InputState::new());

        // Two bands of 300, columns split per row.
        assert_eq!(rect_of(&manager, "Row1"), Rect::new(0.0, 0.0, 800.0, 300.0));
        assert_eq!(rect_of(&manager, "A1"), Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(rect_of(&manager, "A2"), Rect::new(400.0, 0.0, 400.0, 300.0));
        assert_eq!(
            rect_of(&manager, "A1B2"),
            Rect::new(200.0, 300.0, 200.0, 300.0)
        );

        // Three-way split divides in plain f32, no pixel compensation.
        let third = 400.0 / 3.0;
        assert_eq!(
            rect_of(&manager, "A2B2"),
            Rect::new(400.0 + third, 300.0, third, 300.0)
        );
    }

    #[test]
    fn test_small_bounds_clamped_to_minimum() {
        let mut manager = RegionManager::default();
        let mut renderer = FrameRenderer::new();
        renderer.begin_frame();
        manager.draw(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            &InputState::new(),
            &RegionStyle::LIGHT,
            &MonospaceMetrics::new(),
            &mut renderer,
        );

        let root = manager.tree().root().unwrap();
        let rect = manager.tree().get(root).unwrap().rect;
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 300.0);
    }

    #[test]
    fn test_group_focus_fans_out_across_subtrees() {
        let mut manager = RegionManager::default();
        draw_once(&mut manager, &InputState::new());

        let leaf = manager.tree().find_by_name("A1B1").unwrap();
        manager.click(leaf);

        // Every "A1"-group leaf focuses; the parent group node does not,
        // and the plain leaf also named A1 in Row1 stays out.
        assert_eq!(focused_names(&manager), ["A1B1", "A1B2"]);
    }

    #[test]
    fn test_row_focus_fans_out_to_siblings() {
        let mut manager = RegionManager::default();
        draw_once(&mut manager, &InputState::new());

        let leaf = manager.tree().find_by_name("A2").unwrap();
        manager.click(leaf);

        assert_eq!(focused_names(&manager), ["A1", "A2"]);
    }

    #[test]
    fn test_row_and_group_rules_fire_together() {
        let config = RegionConfig {
            name: "Root".to_string(),
            children: vec![
                NodeSpec::new("Top", RegionKind::Row).with_children(vec![
                    NodeSpec::new("L1", RegionKind::Leaf).with_group("G"),
                    NodeSpec::new("L2", RegionKind::Leaf),
                ]),
                NodeSpec::new("Bottom", RegionKind::Row).with_children(vec![
                    NodeSpec::new("Pen", RegionKind::Group).with_children(vec![
                        NodeSpec::new("L3", RegionKind::Leaf).with_group("G"),
                    ]),
                ]),
            ],
        };
        let mut manager = RegionManager::new(config);

        let leaf = manager.tree().find_by_name("L1").unwrap();
        manager.click(leaf);

        // Group rule reaches L3 in the other subtree; row rule reaches L2.
        assert_eq!(focused_names(&manager), ["L1", "L2", "L3"]);
    }

    #[test]
    fn test_click_replaces_previous_focus() {
        let mut manager = RegionManager::default();

        let first = manager.tree().find_by_name("A1B1").unwrap();
        manager.click(first);
        let second = manager.tree().find_by_name("A2B3").unwrap();
        manager.click(second);

        assert_eq!(focused_names(&manager), ["A2B1", "A2B2", "A2B3"]);
    }

    #[test]
    fn test_hover_tracks_leaves_only() {
        let mut manager = RegionManager::default();
        let mut input = InputState::new();
        input.set_mouse_pos(100.0, 100.0);
        draw_once(&mut manager, &input);

        let leaf = manager.tree().find_by_name("A1").unwrap();
        assert!(manager.tree().get(leaf).unwrap().hovered);

        let row = manager.tree().find_by_name("Row1").unwrap();
        assert!(!manager.tree().get(row).unwrap().hovered);

        input.set_mouse_pos(700.0, 100.0);
        draw_once(&mut manager, &input);
        assert!(!manager.tree().get(leaf).unwrap().hovered);
    }

    #[test]
    fn test_click_through_input_path() {
        let mut manager = RegionManager::default();
        let mut input = InputState::new();
        input.set_mouse_pos(100.0, 450.0);
        input.mouse_button_down(MouseButton::Left);
        draw_once(&mut manager, &input);

        assert_eq!(focused_names(&manager), ["A1B1", "A1B2"]);
    }

    #[test]
    fn test_set_config_swaps_topology() {
        let mut manager = RegionManager::default();

        manager.set_config(RegionConfig {
            name: "Root".to_string(),
            children: vec![NodeSpec::new("Only", RegionKind::Row)
                .with_children(vec![NodeSpec::new("Solo", RegionKind::Leaf)])],
        });

        assert_eq!(manager.tree().len(), 3);
        assert!(manager.tree().find_by_name("Solo").is_some());
        assert!(manager.tree().find_by_name("A1B1").is_none());
    }

    #[test]
    fn test_reload_resets_to_fresh_state() {
        let mut manager = RegionManager::default();
        let mut input = InputState::new();
        input.set_mouse_pos(100.0, 100.0);
        draw_once(&mut manager, &input);
        manager.click(manager.tree().find_by_name("A1B1").unwrap());

        manager.reload();

        assert!(focused_names(&manager).is_empty());
        let fresh = RegionManager::default();
        assert_eq!(manager.tree().len(), fresh.tree().len());
        for (a, b) in manager.tree().iter_dfs().zip(fresh.tree().iter_dfs()) {
            let a = manager.tree().get(a).unwrap();
            let b = fresh.tree().get(b).unwrap();
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.rect, b.rect);
            assert!(!a.hovered);
        }
    }
}
