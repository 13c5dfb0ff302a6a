//! Trained cluster artefacts: the fitted feature scaler and centroids.
//!
//! The offline training pipeline standardises recipes over five features
//! (calories, protein, carbs, fat, price), clusters them, and persists the
//! scaler and centroids as one versioned artefact. At request time the
//! model is read-only: a target vector is scaled with the fitted parameters
//! and matched to the nearest centroid.

#[cfg(feature = "serde")]
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MealTargets;

/// Number of scaled features per centroid.
pub const FEATURE_COUNT: usize = 5;

/// File identifier for persisted cluster models.
#[cfg(feature = "serde")]
pub(crate) const CLUSTER_MODEL_MAGIC: [u8; 4] = *b"NCCM";

/// Supported version of the persisted cluster-model format.
#[cfg(feature = "serde")]
pub(crate) const CLUSTER_MODEL_VERSION: u16 = 1;

/// Per-feature standardisation parameters fitted during offline training.
///
/// A raw target vector is transformed by subtracting `mean` and dividing by
/// `scale`, feature by feature, exactly as the training pipeline did.
///
/// # Examples
/// ```
/// use nutricart_core::FeatureScaler;
///
/// let scaler = FeatureScaler::identity();
/// assert_eq!(scaler.transform([1.0, 2.0, 3.0, 4.0, 5.0]), [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureScaler {
    /// Per-feature mean fitted on training data.
    pub mean: [f64; FEATURE_COUNT],
    /// Per-feature scale fitted on training data; never zero.
    pub scale: [f64; FEATURE_COUNT],
}

impl FeatureScaler {
    /// A scaler that leaves vectors untouched (zero mean, unit scale).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            mean: [0.0; FEATURE_COUNT],
            scale: [1.0; FEATURE_COUNT],
        }
    }

    /// Standardise a raw feature vector with the fitted parameters.
    #[must_use]
    pub fn transform(&self, raw: [f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for index in 0..FEATURE_COUNT {
            scaled[index] = (raw[index] - self.mean[index]) / self.scale[index];
        }
        scaled
    }

    /// Index of the first unusable parameter pair, if any.
    fn invalid_feature(&self) -> Option<usize> {
        (0..FEATURE_COUNT).find(|&index| {
            !self.mean[index].is_finite()
                || !self.scale[index].is_finite()
                || self.scale[index] == 0.0
        })
    }
}

/// Errors raised while validating or persisting a cluster model.
#[derive(Debug, Error)]
pub enum ClusterModelError {
    /// The model contained no centroids.
    #[error("cluster model must contain at least one centroid")]
    EmptyCentroids,
    /// A scaler parameter was non-finite or zero.
    #[error("scaler parameters for feature {feature} are unusable")]
    InvalidScaler {
        /// Index of the offending feature.
        feature: usize,
    },
    /// Reading the persisted model from disk failed.
    #[cfg(feature = "serde")]
    #[error("failed to read cluster model from {}: {source}", path.display())]
    Io {
        /// Location of the persisted artefact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file did not carry the expected header.
    #[cfg(feature = "serde")]
    #[error("invalid cluster model magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// Expected byte sequence identifying a cluster-model file.
        expected: [u8; 4],
        /// Sequence read from the file.
        found: [u8; 4],
    },
    /// The reader encountered an unsupported format version.
    #[cfg(feature = "serde")]
    #[error("unsupported cluster model version {found}; supported version is {supported}")]
    UnsupportedVersion {
        /// Version present in the file header.
        found: u16,
        /// Latest version supported by this binary.
        supported: u16,
    },
    /// The serialised model could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to decode cluster model from {}: {source}", path.display())]
    Decode {
        /// Location of the persisted artefact.
        path: PathBuf,
        /// Decoder error returned by `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// The in-memory model could not be encoded.
    #[cfg(feature = "serde")]
    #[error("failed to encode cluster model for {}: {source}", path.display())]
    Encode {
        /// Destination file path.
        path: PathBuf,
        /// Encoder failure from `bincode`.
        #[source]
        source: bincode::Error,
    },
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClusterModelFile {
    magic: [u8; 4],
    version: u16,
    scaler: FeatureScaler,
    centroids: Vec<[f64; FEATURE_COUNT]>,
}

/// The fitted scaler and cluster centroids, read-only at request time.
///
/// # Examples
/// ```
/// use nutricart_core::{ClusterModel, FeatureScaler, MealTargets};
///
/// let model = ClusterModel::new(
///     FeatureScaler::identity(),
///     vec![[500.0, 30.0, 60.0, 15.0, 8.0], [900.0, 50.0, 90.0, 30.0, 15.0]],
/// )
/// .unwrap();
/// let targets = MealTargets {
///     calories: 520.0,
///     protein_g: 28.0,
///     carbs_g: 55.0,
///     fat_g: 16.0,
///     price: 8.5,
/// };
/// assert_eq!(model.nearest(&targets), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterModel {
    scaler: FeatureScaler,
    centroids: Vec<[f64; FEATURE_COUNT]>,
}

impl ClusterModel {
    /// Validate and construct a model from fitted parameters.
    ///
    /// # Errors
    /// Returns [`ClusterModelError::EmptyCentroids`] when no centroids are
    /// supplied and [`ClusterModelError::InvalidScaler`] when a scaler
    /// parameter is non-finite or zero.
    pub fn new(
        scaler: FeatureScaler,
        centroids: Vec<[f64; FEATURE_COUNT]>,
    ) -> Result<Self, ClusterModelError> {
        if centroids.is_empty() {
            return Err(ClusterModelError::EmptyCentroids);
        }
        if let Some(feature) = scaler.invalid_feature() {
            return Err(ClusterModelError::InvalidScaler { feature });
        }
        Ok(Self { scaler, centroids })
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    /// The cluster centroids in scaled feature space.
    #[must_use]
    pub fn centroids(&self) -> &[[f64; FEATURE_COUNT]] {
        &self.centroids
    }

    /// Match a target vector to the nearest centroid and return its cluster
    /// id.
    ///
    /// The target is standardised with the fitted scaler, then compared to
    /// every centroid by Euclidean distance (squared distance preserves the
    /// argmin). An exact tie resolves to the lowest cluster index, keeping
    /// the choice deterministic.
    #[must_use]
    pub fn nearest(&self, targets: &MealTargets) -> u32 {
        let scaled = self.scaler.transform(targets.to_array());
        let mut best_index = 0_usize;
        let mut best_distance = f64::INFINITY;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let distance = squared_distance(&scaled, centroid);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        best_index as u32
    }

    /// Load a persisted cluster model, validating header and parameters.
    ///
    /// # Errors
    /// Returns [`ClusterModelError`] when the file is unreadable, carries
    /// the wrong magic or version, fails to decode, or holds invalid
    /// parameters.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClusterModelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ClusterModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ClusterModelFile = match bincode::deserialize(&bytes) {
            Ok(file) => file,
            Err(source) => {
                let mut found = [0_u8; 4];
                let prefix_len = bytes.len().min(CLUSTER_MODEL_MAGIC.len());
                found[..prefix_len].copy_from_slice(&bytes[..prefix_len]);
                if found != CLUSTER_MODEL_MAGIC {
                    return Err(ClusterModelError::InvalidMagic {
                        expected: CLUSTER_MODEL_MAGIC,
                        found,
                    });
                }
                return Err(ClusterModelError::Decode {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if file.magic != CLUSTER_MODEL_MAGIC {
            return Err(ClusterModelError::InvalidMagic {
                expected: CLUSTER_MODEL_MAGIC,
                found: file.magic,
            });
        }
        if file.version != CLUSTER_MODEL_VERSION {
            return Err(ClusterModelError::UnsupportedVersion {
                found: file.version,
                supported: CLUSTER_MODEL_VERSION,
            });
        }

        let model = Self::new(file.scaler, file.centroids)?;
        log::info!(
            "loaded cluster model from {}: {} centroids",
            path.display(),
            model.centroids.len()
        );
        Ok(model)
    }

    /// Persist the model for later loading; the interface the offline
    /// training pipeline writes through.
    ///
    /// # Errors
    /// Returns [`ClusterModelError::Io`] or [`ClusterModelError::Encode`]
    /// when writing fails.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ClusterModelError> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|source| ClusterModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let payload = ClusterModelFile {
            magic: CLUSTER_MODEL_MAGIC,
            version: CLUSTER_MODEL_VERSION,
            scaler: self.scaler.clone(),
            centroids: self.centroids.clone(),
        };
        bincode::serialize_into(&mut file, &payload).map_err(|source| {
            ClusterModelError::Encode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        file.sync_all().map_err(|source| ClusterModelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn squared_distance(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    let mut total = 0.0;
    for index in 0..FEATURE_COUNT {
        let delta = a[index] - b[index];
        total += delta * delta;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn targets(calories: f64, protein: f64, carbs: f64, fat: f64, price: f64) -> MealTargets {
        MealTargets {
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
            price,
        }
    }

    #[rstest]
    fn rejects_empty_centroids() {
        let result = ClusterModel::new(FeatureScaler::identity(), Vec::new());
        assert!(matches!(result, Err(ClusterModelError::EmptyCentroids)));
    }

    #[rstest]
    #[case([1.0, 1.0, 0.0, 1.0, 1.0], 2)]
    #[case([1.0, f64::NAN, 1.0, 1.0, 1.0], 1)]
    fn rejects_unusable_scaler(#[case] scale: [f64; FEATURE_COUNT], #[case] feature: usize) {
        let scaler = FeatureScaler {
            mean: [0.0; FEATURE_COUNT],
            scale,
        };
        let result = ClusterModel::new(scaler, vec![[0.0; FEATURE_COUNT]]);
        assert!(
            matches!(result, Err(ClusterModelError::InvalidScaler { feature: f }) if f == feature)
        );
    }

    #[rstest]
    fn picks_nearest_centroid_in_scaled_space() {
        // Means and scales chosen so the raw target lands exactly on the
        // second centroid after standardisation.
        let scaler = FeatureScaler {
            mean: [500.0, 25.0, 50.0, 15.0, 8.0],
            scale: [100.0, 5.0, 10.0, 5.0, 2.0],
        };
        let centroids = vec![[0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT]];
        let model = ClusterModel::new(scaler, centroids).expect("valid model");
        let near_second = targets(600.0, 30.0, 60.0, 20.0, 10.0);
        assert_eq!(model.nearest(&near_second), 1);
    }

    #[rstest]
    fn exact_tie_resolves_to_lowest_index() {
        let centroids = vec![
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let model = ClusterModel::new(FeatureScaler::identity(), centroids).expect("valid model");
        // Equidistant from every centroid listed.
        assert_eq!(model.nearest(&targets(0.0, 0.0, 0.0, 0.0, 0.0)), 0);
    }

    #[cfg(feature = "serde")]
    mod artefact {
        use super::*;
        use std::io::Write;
        use tempfile::TempDir;

        fn sample_model() -> ClusterModel {
            let scaler = FeatureScaler {
                mean: [480.0, 24.0, 52.0, 16.0, 7.5],
                scale: [120.0, 6.0, 14.0, 4.0, 2.5],
            };
            let centroids = vec![
                [-0.5, -0.5, -0.5, -0.5, -0.5],
                [0.0, 0.0, 0.0, 0.0, 0.0],
                [0.5, 0.5, 0.5, 0.5, 0.5],
            ];
            ClusterModel::new(scaler, centroids).expect("valid model")
        }

        #[rstest]
        fn round_trips_through_disk() {
            let dir = TempDir::new().expect("create temp dir");
            let path = dir.path().join("clusters.bin");
            let model = sample_model();
            model.write(&path).expect("persist model");
            let loaded = ClusterModel::load(&path).expect("load model");
            assert_eq!(loaded, model);
        }

        #[rstest]
        fn errors_on_corrupted_magic() {
            let dir = TempDir::new().expect("create temp dir");
            let path = dir.path().join("clusters.bin");
            std::fs::write(&path, b"BAD!").expect("write corrupt file");
            let error = ClusterModel::load(&path).expect_err("invalid magic should fail");
            assert!(matches!(error, ClusterModelError::InvalidMagic { .. }));
        }

        #[rstest]
        fn errors_on_unsupported_version() {
            let dir = TempDir::new().expect("create temp dir");
            let path = dir.path().join("clusters.bin");
            let payload = ClusterModelFile {
                magic: CLUSTER_MODEL_MAGIC,
                version: CLUSTER_MODEL_VERSION + 1,
                scaler: FeatureScaler::identity(),
                centroids: vec![[0.0; FEATURE_COUNT]],
            };
            let mut file = std::fs::File::create(&path).expect("create artefact");
            bincode::serialize_into(&mut file, &payload).expect("encode artefact");
            file.flush().expect("flush artefact");

            let error = ClusterModel::load(&path).expect_err("unsupported version should fail");
            assert!(matches!(
                error,
                ClusterModelError::UnsupportedVersion { found, supported }
                    if found == CLUSTER_MODEL_VERSION + 1 && supported == CLUSTER_MODEL_VERSION
            ));
        }

        #[rstest]
        fn errors_on_missing_file() {
            let dir = TempDir::new().expect("create temp dir");
            let path = dir.path().join("missing.bin");
            let error = ClusterModel::load(&path).expect_err("missing file should fail");
            assert!(matches!(error, ClusterModelError::Io { .. }));
        }
    }
}
