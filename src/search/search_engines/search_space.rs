use crate::search::search_engines::{NodeId, SearchNode};
use crate::search::{OperatorId, Plan, State};
use std::collections::HashMap;

/// Stores the states and nodes of a search, deduplicating states: each state
/// gets exactly one node, no matter how often it is generated.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: Vec<SearchNode>,
    states: Vec<State>,
    registered_nodes: HashMap<State, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut registered_nodes = HashMap::new();
        registered_nodes.insert(initial_state.clone(), NodeId::new(0));
        Self {
            nodes: vec![SearchNode::new(None, None)],
            states: vec![initial_state],
            registered_nodes,
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    /// The node for `state`, created with the given transition if the state
    /// has not been seen before.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        reached_by: OperatorId,
        parent: NodeId,
    ) -> NodeId {
        match self.registered_nodes.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.registered_nodes.insert(state.clone(), node_id);
                self.nodes
                    .push(SearchNode::new(Some(parent), Some(reached_by)));
                self.states.push(state);
                node_id
            }
        }
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        &self.nodes[node_id.index()]
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        &mut self.nodes[node_id.index()]
    }

    pub fn get_state(&self, node_id: NodeId) -> &State {
        &self.states[node_id.index()]
    }

    /// The operator sequence leading from the root to `goal_id`.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current = self.get_node(goal_id);
        while let Some(parent) = current.get_parent() {
            steps.push(
                current
                    .get_reached_by()
                    .expect("non-root nodes record their reaching operator"),
            );
            current = self.get_node(parent);
        }
        steps.reverse();
        Plan::new(steps)
    }
}
