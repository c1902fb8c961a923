//! Workload runner for simulation testing.

use kraft_tree::{kraft_sum, CodeSet, CodeTree};
use rand::Rng;

use crate::simulation::context::WorkloadContext;
use crate::simulation::invariants::{
    check_improve_step, check_matches_model, check_structural, ReferenceModel,
};

/// Configuration for workload execution.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    pub operations_per_run: u64,
    pub max_depth: u8,
    /// Percentage of operations that are toggles (the rest split between
    /// improve, improve-to-fixpoint and reset).
    pub toggle_percent: u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            operations_per_run: 1000,
            max_depth: 4,
            toggle_percent: 70,
        }
    }
}

/// Result of a workload run.
#[derive(Debug)]
pub struct WorkloadResult {
    pub seed: u64,
    pub operations_executed: u64,
    pub success: bool,
    pub violations: Vec<String>,
}

/// Drives random toggle/improve/reset sequences against the engine while
/// cross-checking a reference model and structural invariants.
pub struct WorkloadRunner {
    tree: CodeTree,
    codes: CodeSet,
    model: ReferenceModel,
    config: WorkloadConfig,
}

impl WorkloadRunner {
    pub fn new(config: WorkloadConfig) -> Self {
        let tree = CodeTree::new(config.max_depth).expect("workload depth in range");
        Self {
            tree,
            codes: CodeSet::new(),
            model: ReferenceModel::new(),
            config,
        }
    }

    /// Run the configured number of operations, collecting violations.
    pub fn run(&mut self, ctx: &mut WorkloadContext) -> WorkloadResult {
        let mut violations = Vec::new();

        for _ in 0..self.config.operations_per_run {
            let op_id = ctx.next_op_id();
            let roll = ctx.rng().gen_range(0..100u32);

            if roll < self.config.toggle_percent {
                let node = ctx.random_node(&self.tree);
                self.codes.toggle(&self.tree, node);
                self.model.toggle(&self.tree, node);
                if let Some(v) = check_matches_model(op_id, &self.codes, &self.model) {
                    violations.push(v.to_string());
                }
            } else if roll < self.config.toggle_percent + 20 {
                self.improve_once(op_id, &mut violations);
            } else if roll < self.config.toggle_percent + 25 {
                // improve to fixpoint, bounded by the node count
                let mut budget = self.tree.node_count();
                while self.codes.improve(&self.tree) {
                    budget -= 1;
                    if budget == 0 {
                        violations.push(format!(
                            "op {op_id}: improve did not reach a fixpoint within {} calls",
                            self.tree.node_count()
                        ));
                        break;
                    }
                }
                self.model.sync_from(&self.codes);
            } else {
                self.codes.reset();
                self.model.reset();
                if !self.codes.is_empty() {
                    violations.push(format!("op {op_id}: reset left codewords behind"));
                }
            }

            if let Some(v) = check_structural(op_id, &self.codes) {
                violations.push(v.to_string());
            }
        }

        WorkloadResult {
            seed: ctx.seed(),
            operations_executed: ctx.total_ops(),
            success: violations.is_empty(),
            violations,
        }
    }

    fn improve_once(&mut self, op_id: u64, violations: &mut Vec<String>) {
        let before = kraft_sum(&self.codes);
        let snapshot = self.codes.clone();
        let changed = self.codes.improve(&self.tree);
        let after = kraft_sum(&self.codes);

        if let Some(v) = check_improve_step(op_id, changed, before, after) {
            violations.push(v.to_string());
        }
        if !changed && self.codes != snapshot {
            violations.push(format!(
                "op {op_id}: improve reported no-op but mutated the set"
            ));
        }
        self.model.sync_from(&self.codes);
    }
}
