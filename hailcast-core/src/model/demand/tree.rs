use super::ModelError;
use serde::{Deserialize, Serialize};

/// one regression tree of the boosted ensemble, in the parallel-array layout
/// of the XGBoost JSON model format. node i is a leaf iff left_children[i]
/// is negative, in which case split_conditions[i] holds the leaf value.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Tree {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<u32>,
    pub split_conditions: Vec<f64>,
    #[serde(default)]
    pub default_left: Vec<u8>,
}

impl Tree {
    /// checks array lengths agree and child indices stay in bounds and point
    /// strictly forward, so traversal terminates.
    pub fn validate(&self, tree_index: usize) -> Result<(), String> {
        let n = self.left_children.len();
        if self.right_children.len() != n
            || self.split_indices.len() != n
            || self.split_conditions.len() != n
        {
            return Err(format!(
                "tree {tree_index} has mismatched node array lengths"
            ));
        }
        if !self.default_left.is_empty() && self.default_left.len() != n {
            return Err(format!(
                "tree {tree_index} default_left length disagrees with node count {n}"
            ));
        }
        if n == 0 {
            return Err(format!("tree {tree_index} has no nodes"));
        }
        for (node, (left, right)) in self
            .left_children
            .iter()
            .zip(self.right_children.iter())
            .enumerate()
        {
            for child in [*left, *right] {
                if child >= 0 && (child as usize >= n || child as usize <= node) {
                    return Err(format!(
                        "tree {tree_index} node {node} has invalid child index {child}"
                    ));
                }
            }
            // a node is either internal (two children) or a leaf (none)
            if (*left < 0) != (*right < 0) {
                return Err(format!(
                    "tree {tree_index} node {node} has exactly one child"
                ));
            }
        }
        Ok(())
    }

    /// walks from the root to a leaf for one feature vector and returns the
    /// leaf value. NaN feature values take the node's default branch.
    pub fn evaluate(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut node = 0usize;
        loop {
            let left = self.left_children[node];
            if left < 0 {
                return Ok(self.split_conditions[node]);
            }
            let split_index = self.split_indices[node] as usize;
            let value = features.get(split_index).copied().ok_or_else(|| {
                ModelError::Predict(format!(
                    "split index {split_index} exceeds feature vector length {}",
                    features.len()
                ))
            })?;
            let go_left = if value.is_nan() {
                self.default_left.get(node).copied().unwrap_or(1) != 0
            } else {
                value < self.split_conditions[node]
            };
            node = if go_left {
                left as usize
            } else {
                self.right_children[node] as usize
            };
        }
    }
}
