use tracing::info;

/// Counters maintained by the search engines.
#[derive(Debug, Default)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    pub expanded_nodes: u64,
    /// Number of nodes evaluated by the heuristic
    pub evaluated_nodes: u64,
    /// Number of unique nodes generated
    pub generated_nodes: u64,
    /// Number of nodes the heuristic declared dead ends
    pub dead_end_nodes: u64,
    /// Number of applicable operators generated
    pub generated_operators: u64,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_dead_end_nodes(&mut self) {
        self.dead_end_nodes += 1;
    }

    pub fn increment_generated_operators(&mut self, num_operators: usize) {
        self.generated_operators += num_operators as u64;
    }

    pub fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            dead_end_nodes = self.dead_end_nodes,
            generated_operators = self.generated_operators,
        );
    }
}
