use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The single capability the service needs from a classifier: a batch of
/// texts in, one predicted topic label per text out.
pub trait Classifier: Send + Sync {
    fn predict(&self, texts: &[String]) -> Result<Vec<String>, ClassifyError>;
}

#[derive(Debug)]
pub struct ClassifyError {
    message: String,
}

impl ClassifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ClassifyError {}

#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Decode(bincode::error::DecodeError),
    NoLabels,
    ShapeMismatch,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read classifier artifact: {err}"),
            Self::Decode(err) => write!(f, "failed to decode classifier artifact: {err}"),
            Self::NoLabels => write!(f, "classifier artifact contains no labels"),
            Self::ShapeMismatch => {
                write!(f, "classifier artifact weights do not match its labels")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// Pre-trained bag-of-words linear model. Produced by an external training
/// pipeline and shipped as a bincode artifact; this crate only deserializes
/// and invokes it.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinearClassifier {
    labels: Vec<String>,
    vocabulary: HashMap<String, usize>,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl LinearClassifier {
    pub fn new(
        labels: Vec<String>,
        vocabulary: HashMap<String, usize>,
        weights: Vec<Vec<f32>>,
        bias: Vec<f32>,
    ) -> Self {
        Self {
            labels,
            vocabulary,
            weights,
            bias,
        }
    }

    fn predict_one(&self, text: &str) -> Result<String, ClassifyError> {
        let mut scores = self.bias.clone();
        for token in tokenize(text) {
            if let Some(&term) = self.vocabulary.get(&token) {
                for (score, row) in scores.iter_mut().zip(&self.weights) {
                    *score += row.get(term).copied().unwrap_or(0.0);
                }
            }
        }

        let best = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index)
            .ok_or_else(|| ClassifyError::new("classifier has no labels"))?;

        Ok(self.labels[best].clone())
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, texts: &[String]) -> Result<Vec<String>, ClassifyError> {
        texts.iter().map(|text| self.predict_one(text)).collect()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

pub fn load(path: impl AsRef<Path>) -> Result<LinearClassifier, LoadError> {
    let bytes = fs::read(path).map_err(LoadError::Read)?;
    let (model, _): (LinearClassifier, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .map_err(LoadError::Decode)?;

    if model.labels.is_empty() {
        return Err(LoadError::NoLabels);
    }
    if model.weights.len() != model.labels.len() || model.bias.len() != model.labels.len() {
        return Err(LoadError::ShapeMismatch);
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_topic_model() -> LinearClassifier {
        let vocabulary = HashMap::from([
            ("cut".to_string(), 0),
            ("bleeding".to_string(), 1),
            ("burn".to_string(), 2),
        ]);
        LinearClassifier::new(
            vec!["Cuts".to_string(), "Burns".to_string()],
            vocabulary,
            vec![vec![2.0, 1.5, -1.0], vec![-1.0, 0.0, 2.5]],
            vec![0.1, 0.0],
        )
    }

    #[test]
    fn predicts_highest_scoring_label() {
        let model = two_topic_model();

        let labels = model.predict(&["I have a cut and it keeps bleeding".to_string()]).unwrap();
        assert_eq!(labels, vec!["Cuts".to_string()]);

        let labels = model.predict(&["Burn from the stove".to_string()]).unwrap();
        assert_eq!(labels, vec!["Burns".to_string()]);
    }

    #[test]
    fn unknown_words_fall_back_to_bias() {
        let model = two_topic_model();
        let labels = model.predict(&["completely unrelated text".to_string()]).unwrap();
        assert_eq!(labels, vec!["Cuts".to_string()]);
    }

    #[test]
    fn load_round_trips_an_artifact_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let bytes =
            bincode::serde::encode_to_vec(two_topic_model(), bincode::config::standard()).unwrap();
        fs::write(&path, bytes).unwrap();

        let model = load(&path).unwrap();
        let labels = model.predict(&["a burn".to_string()]).unwrap();
        assert_eq!(labels, vec!["Burns".to_string()]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load("no/such/model.bin").unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
    }

    #[test]
    fn load_reports_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, b"definitely not bincode").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn load_rejects_mismatched_weights() {
        let lopsided = LinearClassifier::new(
            vec!["Cuts".to_string(), "Burns".to_string()],
            HashMap::new(),
            vec![vec![1.0]],
            vec![0.0, 0.0],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let bytes =
            bincode::serde::encode_to_vec(lopsided, bincode::config::standard()).unwrap();
        fs::write(&path, bytes).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::ShapeMismatch));
    }
}
