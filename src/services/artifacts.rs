use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::{Predictor, RegressionModel};
use crate::models::FeatureNames;

/// Errors that can occur while loading the startup artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incompatible artifact {path}: {reason}")]
    Incompatible { path: PathBuf, reason: String },
}

/// Loads the fitted model and its feature list from disk
///
/// Both files are JSON. Loading happens once, before the server binds; any
/// error is fatal to startup.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    model_path: PathBuf,
    features_path: PathBuf,
}

impl ArtifactLoader {
    pub fn new(model_path: impl Into<PathBuf>, features_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            features_path: features_path.into(),
        }
    }

    /// Load both artifacts and bundle them into a predictor
    pub fn load(&self) -> Result<Predictor, ArtifactError> {
        let model = self.load_model()?;
        let feature_names = self.load_feature_names()?;

        // Left to surface per request as a prediction error
        if model.n_features() != feature_names.len() {
            tracing::warn!(
                "Model expects {} features but feature list has {}; predictions will fail",
                model.n_features(),
                feature_names.len()
            );
        }

        tracing::info!(
            "Loaded {} model ({} features) from {}",
            model.kind(),
            model.n_features(),
            self.model_path.display()
        );

        Ok(Predictor::new(model, feature_names))
    }

    pub fn load_model(&self) -> Result<RegressionModel, ArtifactError> {
        let model: RegressionModel = read_json(&self.model_path)?;
        model.validate().map_err(|e| ArtifactError::Incompatible {
            path: self.model_path.clone(),
            reason: e.to_string(),
        })?;
        Ok(model)
    }

    pub fn load_feature_names(&self) -> Result<FeatureNames, ArtifactError> {
        let names: FeatureNames = read_json(&self.features_path)?;
        let incompatible = |reason: String| ArtifactError::Incompatible {
            path: self.features_path.clone(),
            reason,
        };

        if names.is_empty() {
            return Err(incompatible("feature list is empty".to_string()));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(incompatible("feature list contains an empty name".to_string()));
        }
        if let Some(dup) = names.first_duplicate() {
            return Err(incompatible(format!("duplicate feature name {:?}", dup)));
        }

        tracing::debug!("Loaded {} feature names from {}", names.len(), self.features_path.display());
        Ok(names)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("job-satisfaction-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_ok() {
        let model = write_temp(r#"{"kind": "linear", "intercept": 1.0, "coefficients": [0.5, 0.5]}"#);
        let features = write_temp(r#"["Job Security", "Gender_Female"]"#);

        let predictor = ArtifactLoader::new(&model, &features).load().unwrap();
        assert_eq!(predictor.feature_names().len(), 2);
        assert_eq!(predictor.model().kind(), "linear");

        fs::remove_file(model).ok();
        fs::remove_file(features).ok();
    }

    #[test]
    fn test_missing_file() {
        let loader = ArtifactLoader::new("/nonexistent/model.json", "/nonexistent/features.json");
        assert!(matches!(loader.load(), Err(ArtifactError::Io { .. })));
    }

    #[test]
    fn test_corrupt_model() {
        let model = write_temp("not json at all");
        let features = write_temp(r#"["a"]"#);

        let err = ArtifactLoader::new(&model, &features).load().unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { ref path, .. } if *path == model));

        fs::remove_file(model).ok();
        fs::remove_file(features).ok();
    }

    #[test]
    fn test_feature_list_rejects_duplicates() {
        let features = write_temp(r#"["a", "b", "a"]"#);
        let err = ArtifactLoader::new("unused.json", &features)
            .load_feature_names()
            .unwrap_err();

        assert!(matches!(err, ArtifactError::Incompatible { .. }));
        fs::remove_file(features).ok();
    }

    #[test]
    fn test_feature_list_rejects_empty() {
        let features = write_temp("[]");
        assert!(ArtifactLoader::new("unused.json", &features).load_feature_names().is_err());
        fs::remove_file(features).ok();
    }

    #[test]
    fn test_model_structure_checked() {
        let model = write_temp(r#"{"kind": "forest", "n_features": 1, "trees": []}"#);
        let err = ArtifactLoader::new(&model, "unused.json").load_model().unwrap_err();

        assert!(matches!(err, ArtifactError::Incompatible { .. }));
        fs::remove_file(model).ok();
    }

    #[test]
    fn test_dimension_mismatch_still_loads() {
        let model = write_temp(r#"{"kind": "linear", "intercept": 0.0, "coefficients": [1.0]}"#);
        let features = write_temp(r#"["a", "b"]"#);

        assert!(ArtifactLoader::new(&model, &features).load().is_ok());

        fs::remove_file(model).ok();
        fs::remove_file(features).ok();
    }
}
