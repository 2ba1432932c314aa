use crate::search::{HeuristicValue, OperatorId};

/// Identifier of a search node and its state in the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
    /// Node is a dead end
    DeadEnd,
}

/// A [`SearchNode`] holds the search bookkeeping for one state: status,
/// costs, the transition that led to it, and the operators the heuristic
/// marked preferred when the state was evaluated.
#[derive(Debug)]
pub struct SearchNode {
    status: SearchNodeStatus,
    g: HeuristicValue,
    h: HeuristicValue,
    /// Operator that led to this node, `None` for the root.
    reached_by: Option<OperatorId>,
    parent: Option<NodeId>,
    preferred_operators: Vec<OperatorId>,
}

impl SearchNode {
    pub fn new(parent: Option<NodeId>, reached_by: Option<OperatorId>) -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: HeuristicValue::MAX,
            h: HeuristicValue::MAX,
            reached_by,
            parent,
            preferred_operators: vec![],
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn mark_as_dead_end(&mut self) {
        self.status = SearchNodeStatus::DeadEnd;
    }

    pub fn set_preferred_operators(&mut self, preferred_operators: Vec<OperatorId>) {
        self.preferred_operators = preferred_operators;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn get_reached_by(&self) -> Option<OperatorId> {
        self.reached_by
    }

    pub fn get_preferred_operators(&self) -> &[OperatorId] {
        &self.preferred_operators
    }
}
