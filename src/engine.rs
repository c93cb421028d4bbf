//! Decision engine facade.
//!
//! [`SawEngine`] ties the three stages together behind the boundary a
//! presentation shell consumes: record entry and removal, insertion-order
//! listing for redraw, and a single `compute_ranking` entry point that runs
//! normalize-then-score over the current dataset.
//!
//! # State machine
//!
//! Conceptually the engine moves through `Empty → Loaded → Normalized →
//! Scored`. Normalized output is staged in an `Option` that every mutation
//! clears, so scoring can never observe derived data that predates an
//! `add`/`remove`. `compute_ranking` recomputes both stages eagerly on every
//! call; recomputation over a session-sized dataset is cheap, so there is no
//! caching or dirty tracking.

use std::collections::{HashMap, HashSet};

use crate::criteria::CriteriaConfig;
use crate::dataset::{DatasetStore, Record};
use crate::error::SawError;
use crate::saw::{self, NormalizedRecord, RankedEntry, ScoredRecord};

/// A SAW decision engine over one immutable criteria configuration and one
/// session-local dataset.
///
/// Single-threaded and synchronous: every operation runs to completion on
/// the calling thread. The engine is owned mutable state with no internal
/// locking; wrap it in explicit synchronization before sharing it between
/// actors.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use saw_rank::criteria::{CriteriaConfig, Direction};
/// use saw_rank::engine::SawEngine;
///
/// let config = CriteriaConfig::new().with_criterion("speed", 1.0, Direction::Benefit);
/// let mut engine = SawEngine::new(config)?;
///
/// for (name, speed) in [("A", "10"), ("B", "20")] {
///     engine.add_record(name, &HashMap::from([("speed".to_string(), speed.to_string())]))?;
/// }
///
/// let ranking = engine.compute_ranking()?;
/// assert_eq!(ranking[0].name, "B");
/// # Ok::<(), saw_rank::SawError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SawEngine {
    config: CriteriaConfig,
    store: DatasetStore,
    normalized: Option<Vec<NormalizedRecord>>,
}

impl SawEngine {
    /// Creates an engine, validating the configuration up front.
    ///
    /// Configuration faults surface here, before any user interaction, as
    /// [`SawError::InvalidConfiguration`].
    pub fn new(config: CriteriaConfig) -> Result<Self, SawError> {
        config.validate()?;
        Ok(Self {
            config,
            store: DatasetStore::new(),
            normalized: None,
        })
    }

    /// Returns the criteria configuration this engine was built with.
    pub fn config(&self) -> &CriteriaConfig {
        &self.config
    }

    /// Parses and inserts a record from user-entered text values keyed by
    /// criterion name.
    ///
    /// Fails with [`SawError::InvalidValue`] (naming the criterion) or
    /// [`SawError::DuplicateKey`] without modifying the dataset. On success,
    /// previously staged normalized output is discarded.
    pub fn add_record(
        &mut self,
        name: &str,
        values: &HashMap<String, String>,
    ) -> Result<(), SawError> {
        let record = Record::parse(name, values, &self.config)?;
        self.store.add(record)?;
        self.normalized = None;
        Ok(())
    }

    /// Removes every record whose name appears in `names`.
    ///
    /// Unknown names are ignored. Staged normalized output is discarded
    /// even when nothing matched; the next ranking recomputes anyway.
    pub fn remove_records(&mut self, names: &HashSet<String>) {
        self.store.remove(names);
        self.normalized = None;
    }

    /// Returns the records in insertion order, for redrawing the input table.
    pub fn list_records(&self) -> impl Iterator<Item = &Record> {
        self.store.iter()
    }

    /// Returns the number of records currently in the dataset.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Runs the normalization stage and stages its output.
    ///
    /// Returns the normalized view so a shell can render the intermediate
    /// table. Fails with [`SawError::EmptyDataset`] when no records exist.
    pub fn normalize(&mut self) -> Result<&[NormalizedRecord], SawError> {
        let normalized = saw::normalize(self.store.records(), &self.config)?;
        self.normalized = Some(normalized);
        Ok(self.normalized.as_deref().unwrap_or(&[]))
    }

    /// Computes weighted-sum scores from the staged normalized output, in
    /// insertion order.
    ///
    /// Fails with [`SawError::NotNormalized`] unless [`Self::normalize`] has
    /// run since the last mutation. Callers wanting the final table should
    /// use [`Self::compute_ranking`], which sequences both stages.
    pub fn score(&self) -> Result<Vec<ScoredRecord>, SawError> {
        match &self.normalized {
            Some(normalized) => Ok(saw::score(normalized, &self.config)),
            None => Err(SawError::NotNormalized),
        }
    }

    /// Normalizes, scores, and ranks the current dataset.
    ///
    /// The one-call entry point for a "compute recommendation" action.
    /// Both stages recompute from the raw dataset on every call, so the
    /// result always reflects the latest mutations.
    pub fn compute_ranking(&mut self) -> Result<Vec<RankedEntry>, SawError> {
        self.normalize()?;
        let normalized = self.normalized.as_deref().unwrap_or(&[]);
        Ok(saw::rank(normalized, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Direction;

    fn single(direction: Direction) -> SawEngine {
        let config = CriteriaConfig::new().with_criterion("c", 1.0, direction);
        SawEngine::new(config).unwrap()
    }

    fn add(engine: &mut SawEngine, name: &str, value: &str) -> Result<(), SawError> {
        engine.add_record(
            name,
            &HashMap::from([("c".to_string(), value.to_string())]),
        )
    }

    #[test]
    fn test_invalid_configuration_rejected_at_construction() {
        let config = CriteriaConfig::new().with_criterion("c", -1.0, Direction::Benefit);
        assert!(matches!(
            SawEngine::new(config),
            Err(SawError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_single_benefit_criterion_ranking() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();
        add(&mut engine, "B", "20").unwrap();
        add(&mut engine, "C", "0").unwrap();

        let ranking = engine.compute_ranking().unwrap();
        let rows: Vec<(usize, &str, f64)> = ranking
            .iter()
            .map(|e| (e.rank, e.name.as_str(), e.score))
            .collect();

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].0, rows[0].1), (1, "B"));
        assert!((rows[0].2 - 1.0).abs() < 1e-10);
        assert_eq!((rows[1].0, rows[1].1), (2, "A"));
        assert!((rows[1].2 - 0.5).abs() < 1e-10);
        assert_eq!((rows[2].0, rows[2].1), (3, "C"));
        assert!(rows[2].2.abs() < 1e-10);
    }

    #[test]
    fn test_single_cost_criterion_with_zero_cost_tie() {
        let mut engine = single(Direction::Cost);
        add(&mut engine, "A", "5").unwrap();
        add(&mut engine, "B", "10").unwrap();
        add(&mut engine, "C", "0").unwrap();

        let ranking = engine.compute_ranking().unwrap();

        // A and C both score 1.0; A entered first, so insertion order breaks
        // the tie.
        assert_eq!(ranking[0].name, "A");
        assert!((ranking[0].score - 1.0).abs() < 1e-10);
        assert_eq!(ranking[1].name, "C");
        assert!((ranking[1].score - 1.0).abs() < 1e-10);
        assert_eq!(ranking[2].name, "B");
        assert!((ranking[2].score - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_value_leaves_dataset_unchanged() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();

        let err = add(&mut engine, "B", "abc").unwrap_err();
        assert!(matches!(err, SawError::InvalidValue { .. }));
        assert_eq!(engine.record_count(), 1);
    }

    #[test]
    fn test_empty_dataset_ranking() {
        let mut engine = single(Direction::Benefit);
        assert!(matches!(
            engine.compute_ranking(),
            Err(SawError::EmptyDataset)
        ));
    }

    #[test]
    fn test_remove_missing_name_is_noop() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();

        engine.remove_records(&HashSet::from(["X".to_string()]));
        assert_eq!(engine.record_count(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();
        assert!(matches!(
            add(&mut engine, "A", "20"),
            Err(SawError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_compute_ranking_is_idempotent() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();
        add(&mut engine, "B", "20").unwrap();

        let first = engine.compute_ranking().unwrap();
        let second = engine.compute_ranking().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_requires_normalization() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();

        assert!(matches!(engine.score(), Err(SawError::NotNormalized)));
        engine.normalize().unwrap();
        assert!(engine.score().is_ok());
    }

    #[test]
    fn test_mutation_invalidates_staged_normalization() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();
        engine.normalize().unwrap();

        add(&mut engine, "B", "20").unwrap();
        assert!(matches!(engine.score(), Err(SawError::NotNormalized)));

        engine.normalize().unwrap();
        engine.remove_records(&HashSet::from(["B".to_string()]));
        assert!(matches!(engine.score(), Err(SawError::NotNormalized)));
    }

    #[test]
    fn test_ranking_reflects_removal() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "A", "10").unwrap();
        add(&mut engine, "B", "20").unwrap();
        assert_eq!(engine.compute_ranking().unwrap()[0].name, "B");

        engine.remove_records(&HashSet::from(["B".to_string()]));
        let ranking = engine.compute_ranking().unwrap();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "A");
        assert_eq!(ranking[0].rank, 1);
    }

    #[test]
    fn test_list_records_in_insertion_order() {
        let mut engine = single(Direction::Benefit);
        add(&mut engine, "B", "1").unwrap();
        add(&mut engine, "A", "2").unwrap();

        let names: Vec<&str> = engine.list_records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    // Worked example: the phone-selection criteria set this engine was
    // originally built around.
    #[test]
    fn test_phone_selection_example() {
        let config = CriteriaConfig::new()
            .with_criterion("RAM (GB)", 0.25, Direction::Benefit)
            .with_criterion("Storage (GB)", 0.20, Direction::Benefit)
            .with_criterion("Harga (juta)", 0.25, Direction::Cost)
            .with_criterion("Kamera (MP)", 0.15, Direction::Benefit)
            .with_criterion("Baterai (mAh)", 0.15, Direction::Benefit);
        let mut engine = SawEngine::new(config).unwrap();

        let phones: [(&str, [&str; 5]); 3] = [
            ("Budget", ["4", "64", "1,5", "13", "4000"]),
            ("Mid", ["8", "128", "3,0", "50", "5000"]),
            ("Flagship", ["12", "256", "15,0", "108", "4500"]),
        ];
        for (name, [ram, storage, price, camera, battery]) in phones {
            engine
                .add_record(
                    name,
                    &HashMap::from([
                        ("RAM (GB)".to_string(), ram.to_string()),
                        ("Storage (GB)".to_string(), storage.to_string()),
                        ("Harga (juta)".to_string(), price.to_string()),
                        ("Kamera (MP)".to_string(), camera.to_string()),
                        ("Baterai (mAh)".to_string(), battery.to_string()),
                    ]),
                )
                .unwrap();
        }

        let ranking = engine.compute_ranking().unwrap();
        assert_eq!(ranking.len(), 3);
        for pair in ranking.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }

        // Mid: ram 8/12, storage 128/256, price 1.5/3.0, camera 50/108,
        // battery 5000/5000.
        let mid = ranking.iter().find(|e| e.name == "Mid").unwrap();
        let expected = 0.25 * (8.0 / 12.0)
            + 0.20 * (128.0 / 256.0)
            + 0.25 * (1.5 / 3.0)
            + 0.15 * (50.0 / 108.0)
            + 0.15 * 1.0;
        assert!((mid.score - expected).abs() < 1e-10);
    }
}
