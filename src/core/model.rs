use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a regression model, either when scoring or when its
/// structure is checked after deserialization
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Feature count mismatch: model expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),

    #[error("Invalid model structure: {0}")]
    InvalidStructure(String),
}

/// A fitted regression model
///
/// Serialized with a `kind` tag:
/// ```json
/// { "kind": "linear", "intercept": 0.4, "coefficients": [0.1, 0.2] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl RegressionModel {
    pub fn kind(&self) -> &'static str {
        match self {
            RegressionModel::Linear(_) => "linear",
            RegressionModel::Forest(_) => "forest",
        }
    }

    /// Number of features the model was fitted on
    pub fn n_features(&self) -> usize {
        match self {
            RegressionModel::Linear(m) => m.coefficients.len(),
            RegressionModel::Forest(m) => m.n_features,
        }
    }

    /// Check the structure is usable for scoring
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            RegressionModel::Linear(m) => m.validate(),
            RegressionModel::Forest(m) => m.validate(),
        }
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }

        let value = match self {
            RegressionModel::Linear(m) => m.score(features),
            RegressionModel::Forest(m) => m.score(features)?,
        };

        if !value.is_finite() {
            return Err(ModelError::NonFinite(value));
        }
        Ok(value)
    }
}

/// Ordinary least squares style model: `intercept + coefficients · x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::InvalidStructure("linear model has no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::InvalidStructure("linear model has non-finite parameters".to_string()));
        }
        Ok(())
    }

    #[inline]
    fn score(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Random forest regressor; the prediction is the mean of its trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub trees: Vec<RegressionTree>,
}

impl ForestModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidStructure("forest has no trees".to_string()));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|reason| ModelError::InvalidStructure(format!("tree {}: {}", idx, reason)))?;
        }
        Ok(())
    }

    fn score(&self, features: &[f64]) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidStructure("forest has no trees".to_string()));
        }
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.score(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

/// Binary regression tree stored as a flat node list with node 0 as the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Samples with `x[feature] <= threshold` go to `left`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl RegressionTree {
    /// Children must come after their parent, which rules out cycles and
    /// bounds every walk by the node count.
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if feature >= n_features {
                        return Err(format!("node {} splits on feature {} of {}", idx, feature, n_features));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", idx));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {} has invalid child {}", idx, child));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {} has a non-finite value", idx));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks at most one step per node, so a tree that skipped `validate`
    /// fails instead of looping or indexing out of bounds.
    fn score(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut idx = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features.get(*feature).ok_or_else(|| {
                        ModelError::InvalidStructure(format!("node {} splits on missing feature {}", idx, feature))
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::InvalidStructure(format!("node {} does not exist", idx)));
                }
            }
        }
        Err(ModelError::InvalidStructure("tree walk does not reach a leaf".to_string()))
    }
}
