use super::{ModelError, Tree};
use serde::Deserialize;
use std::path::Path;

/// a trained gradient-boosted regression ensemble in the XGBoost JSON model
/// format. a prediction is the sum of each tree's leaf value plus the learned
/// base score; the squared-error objective uses the identity output
/// transform, so no further mapping is applied.
#[derive(Clone, Debug)]
pub struct Forest {
    pub trees: Vec<Tree>,
    pub base_score: f64,
    /// column names the artifact was trained with, when the artifact carries
    /// them. empty when absent.
    pub feature_names: Vec<String>,
    /// declared input width, when the artifact carries one.
    pub num_features: Option<usize>,
}

// mirror of the slice of the XGBoost JSON layout this crate consumes.
// numeric learner parameters are stored as strings in the artifact.
#[derive(Deserialize)]
struct ModelFile {
    learner: Learner,
}

#[derive(Deserialize)]
struct Learner {
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: GradientBooster,
    learner_model_param: LearnerModelParam,
}

#[derive(Deserialize)]
struct GradientBooster {
    model: BoosterModel,
}

#[derive(Deserialize)]
struct BoosterModel {
    trees: Vec<Tree>,
}

#[derive(Deserialize)]
struct LearnerModelParam {
    base_score: String,
    #[serde(default)]
    num_feature: Option<String>,
}

impl Forest {
    /// loads and validates an ensemble from an XGBoost JSON model file.
    pub fn from_file(path: &Path) -> Result<Forest, ModelError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: ModelFile = serde_json::from_str(&contents).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let forest = Forest::try_from(file).map_err(|message| ModelError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        log::info!(
            "loaded demand model from {} ({} trees, base score {})",
            path.display(),
            forest.trees.len(),
            forest.base_score
        );
        Ok(forest)
    }

    /// evaluates the ensemble for one feature vector.
    pub fn evaluate(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut sum = self.base_score;
        for tree in self.trees.iter() {
            sum += tree.evaluate(features)?;
        }
        Ok(sum)
    }
}

impl TryFrom<ModelFile> for Forest {
    type Error = String;

    fn try_from(file: ModelFile) -> Result<Forest, String> {
        let base_score = file
            .learner
            .learner_model_param
            .base_score
            .parse::<f64>()
            .map_err(|e| {
                format!(
                    "cannot read base_score '{}' as a number: {e}",
                    file.learner.learner_model_param.base_score
                )
            })?;
        let num_features = match file.learner.learner_model_param.num_feature {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|e| format!("cannot read num_feature '{raw}' as a count: {e}"))?,
            ),
            None => None,
        };
        let trees = file.learner.gradient_booster.model.trees;
        for (tree_index, tree) in trees.iter().enumerate() {
            tree.validate(tree_index)?;
        }
        Ok(Forest {
            trees,
            base_score,
            feature_names: file.learner.feature_names,
            num_features,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tree_json(split_index: u32, condition: f64, left: f64, right: f64) -> String {
        format!(
            r#"{{
                "left_children": [1, -1, -1],
                "right_children": [2, -1, -1],
                "split_indices": [{split_index}, 0, 0],
                "split_conditions": [{condition}, {left}, {right}],
                "default_left": [1, 0, 0]
            }}"#
        )
    }

    fn model_json(trees: &[String]) -> String {
        format!(
            r#"{{
                "learner": {{
                    "feature_names": ["pickup_hour", "is_weekend"],
                    "gradient_booster": {{ "model": {{ "trees": [{}] }} }},
                    "learner_model_param": {{ "base_score": "5E-1", "num_feature": "2" }}
                }},
                "version": [2, 0, 3]
            }}"#,
            trees.join(",")
        )
    }

    fn parse_forest(json: &str) -> Result<Forest, String> {
        let file: ModelFile = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Forest::try_from(file)
    }

    #[test]
    fn test_parse_and_evaluate_two_tree_ensemble() {
        let json = model_json(&[
            tree_json(0, 12.0, 1.5, 2.5),
            tree_json(1, 0.5, 0.25, 0.75),
        ]);
        let forest = parse_forest(&json).expect("failed to parse model");
        assert_eq!(forest.trees.len(), 2);
        assert_eq!(forest.base_score, 0.5);
        assert_eq!(forest.num_features, Some(2));
        assert_eq!(forest.feature_names, vec!["pickup_hour", "is_weekend"]);

        // hour 9 weekday: 1.5 + 0.25 + 0.5
        let weekday_morning = forest.evaluate(&[9.0, 0.0]).expect("evaluate failed");
        assert!((weekday_morning - 2.25).abs() < 1e-9);
        // hour 18 weekend: 2.5 + 0.75 + 0.5
        let weekend_evening = forest.evaluate(&[18.0, 1.0]).expect("evaluate failed");
        assert!((weekend_evening - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_scientific_notation_base_score() {
        let json = model_json(&[tree_json(0, 12.0, 0.0, 0.0)]);
        let forest = parse_forest(&json).expect("failed to parse model");
        assert_eq!(forest.base_score, 0.5);
    }

    #[test]
    fn test_invalid_tree_fails_parse() {
        let bad_tree = r#"{
            "left_children": [1, -1, -1],
            "right_children": [0, -1, -1],
            "split_indices": [0, 0, 0],
            "split_conditions": [12.0, 1.0, 2.0]
        }"#;
        let json = model_json(&[bad_tree.to_string()]);
        let result = parse_forest(&json);
        assert!(result.is_err());
    }
}
