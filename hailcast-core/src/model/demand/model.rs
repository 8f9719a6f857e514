use super::{Forest, ModelError, Prediction};
use crate::model::feature::FeatureRow;
use std::path::Path;

/// the demand model consumed by the render cycle. wraps the loaded ensemble
/// behind a batch predict call; callers never see tree internals.
#[derive(Clone, Debug)]
pub struct DemandModel {
    forest: Forest,
}

impl DemandModel {
    pub fn new(forest: Forest) -> DemandModel {
        DemandModel { forest }
    }

    pub fn from_file(path: &Path) -> Result<DemandModel, ModelError> {
        let forest = Forest::from_file(path)?;
        Ok(DemandModel::new(forest))
    }

    /// one prediction per input row, in input order. fails without producing
    /// partial output when the artifact's schema disagrees with the feature
    /// row schema.
    pub fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<Prediction>, ModelError> {
        self.validate_schema()?;
        rows.iter()
            .map(|row| {
                let demand = self.forest.evaluate(&row.to_values())?;
                Ok(Prediction {
                    zone_id: row.zone_id,
                    demand,
                })
            })
            .collect()
    }

    /// compares the artifact's declared feature names (and count) against
    /// [`FeatureRow::COLUMN_NAMES`]. missing, extra, or misordered columns are
    /// all schema errors; nothing is coerced.
    fn validate_schema(&self) -> Result<(), ModelError> {
        if let Some(num_features) = self.forest.num_features {
            if num_features != FeatureRow::COLUMN_NAMES.len() {
                return Err(ModelError::Schema(format!(
                    "model expects {num_features} features, rows provide {}",
                    FeatureRow::COLUMN_NAMES.len()
                )));
            }
        }
        let names = &self.forest.feature_names;
        if names.is_empty() {
            // older artifacts omit names; the count check above still applies
            return Ok(());
        }
        if names.len() != FeatureRow::COLUMN_NAMES.len() {
            return Err(ModelError::Schema(format!(
                "model was trained with {} named features, rows provide {}",
                names.len(),
                FeatureRow::COLUMN_NAMES.len()
            )));
        }
        for (position, (found, expected)) in
            names.iter().zip(FeatureRow::COLUMN_NAMES.iter()).enumerate()
        {
            if found != expected {
                return Err(ModelError::Schema(format!(
                    "column {position}: model expects '{found}', rows provide '{expected}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::demand::Tree;
    use crate::model::zone::ZoneId;

    fn feature_row(zone_id: i64, pickup_hour: u32) -> FeatureRow {
        FeatureRow {
            pickup_hour,
            month: 6,
            day_of_month: 15,
            day_of_week: 7,
            is_weekend: true,
            zone_id: ZoneId(zone_id),
            is_weather_bad: false,
            is_tourist_zone: false,
            is_airport_station: false,
        }
    }

    /// single stump splitting on pickup_hour at 12.0
    fn test_forest(feature_names: Vec<String>, num_features: Option<usize>) -> Forest {
        Forest {
            trees: vec![Tree {
                left_children: vec![1, -1, -1],
                right_children: vec![2, -1, -1],
                split_indices: vec![0, 0, 0],
                split_conditions: vec![12.0, 10.0, 20.0],
                default_left: vec![1, 0, 0],
            }],
            base_score: 0.5,
            feature_names,
            num_features,
        }
    }

    fn column_names() -> Vec<String> {
        FeatureRow::COLUMN_NAMES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_predict_preserves_order_and_length() {
        let model = DemandModel::new(test_forest(column_names(), Some(9)));
        let rows = vec![feature_row(230, 9), feature_row(1, 15), feature_row(50, 23)];
        let predictions = model.predict(&rows).expect("predict failed");
        assert_eq!(predictions.len(), rows.len());
        for (prediction, row) in predictions.iter().zip(rows.iter()) {
            assert_eq!(prediction.zone_id, row.zone_id);
        }
        assert_eq!(predictions[0].demand, 10.5);
        assert_eq!(predictions[1].demand, 20.5);
        assert_eq!(predictions[2].demand, 20.5);
    }

    #[test]
    fn test_empty_input_empty_output() {
        let model = DemandModel::new(test_forest(column_names(), Some(9)));
        let predictions = model.predict(&[]).expect("predict failed");
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_misnamed_column_is_a_schema_error() {
        let mut names = column_names();
        names[5] = String::from("DOLocationID");
        let model = DemandModel::new(test_forest(names, Some(9)));
        let result = model.predict(&[feature_row(1, 12)]);
        match result {
            Err(ModelError::Schema(message)) => {
                assert!(message.contains("DOLocationID"));
                assert!(message.contains("column 5"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_feature_count_is_a_schema_error() {
        let model = DemandModel::new(test_forest(vec![], Some(7)));
        assert!(matches!(
            model.predict(&[feature_row(1, 12)]),
            Err(ModelError::Schema(_))
        ));
    }

    #[test]
    fn test_unnamed_artifact_with_matching_count_predicts() {
        let model = DemandModel::new(test_forest(vec![], Some(9)));
        let predictions = model
            .predict(&[feature_row(1, 12)])
            .expect("predict failed");
        assert_eq!(predictions.len(), 1);
    }
}
