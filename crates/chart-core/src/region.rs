// File: crates/chart-core/src/region.rs
// Summary: Per-chart arena of transient nodes (tooltip) owned by the chart's own container.

use crate::tooltip::Tooltip;

/// Handle to a node inside one `Region`. Handles from another region are
/// never valid here; generations reject stale handles after removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    slot: usize,
    generation: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Tooltip(Tooltip),
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The chart's container. Nodes live exactly as long as the region holds them.
#[derive(Debug, Default)]
pub struct Region {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Region {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, node: Node) -> NodeId {
        if let Some(slot) = self.free.pop() {
            let s = &mut self.slots[slot];
            s.generation = s.generation.wrapping_add(1);
            s.node = Some(node);
            NodeId { slot, generation: s.generation }
        } else {
            self.slots.push(Slot { generation: 0, node: Some(node) });
            NodeId { slot: self.slots.len() - 1, generation: 0 }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.slot)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.slot)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    /// Remove a node; stale or foreign handles return `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.slot).filter(|s| s.generation == id.generation)?;
        let node = slot.node.take()?;
        self.free.push(id.slot);
        Some(node)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn tooltip_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.node, Some(Node::Tooltip(_))))
            .count()
    }

    pub fn clear(&mut self) {
        for (i, s) in self.slots.iter_mut().enumerate() {
            if s.node.take().is_some() {
                self.free.push(i);
            }
        }
    }
}
