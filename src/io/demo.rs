//! Seeded synthetic lead tables for demos and benchmarks.

use crate::core::{round_to, Disposition, Error, Lead, LeadState, LeadTable, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_DEMO_ROWS: usize = 500;
pub const DEFAULT_DEMO_SEED: u64 = 42;

const DISPOSITION_WEIGHTS: [(Disposition, f64); 6] = [
    (Disposition::Ptp, 0.22),
    (Disposition::Rtp, 0.12),
    (Disposition::NotEvaluated, 0.18),
    (Disposition::Callback, 0.15),
    (Disposition::ConnectedNoOutcome, 0.13),
    (Disposition::Unreachable, 0.20),
];

const STATE_WEIGHTS: [(LeadState, f64); 3] = [
    (LeadState::Active, 0.55),
    (LeadState::Inactive, 0.25),
    (LeadState::Completed, 0.20),
];

/// Attempts drawn uniformly from `[1, 16)`
const ATTEMPT_RANGE: std::ops::Range<u32> = 1..16;
/// Spend drawn uniformly from `[5, 45)`
const SPEND_RANGE: std::ops::Range<f64> = 5.0..45.0;
/// Connections for dispositions reached without a live conversation, `[0, 3)`
const STRAY_CONNECTION_RANGE: std::ops::Range<u32> = 0..3;

fn weighted<T: Clone>(choices: &[(T, f64)]) -> Result<(Vec<T>, WeightedIndex<f64>)> {
    let index = WeightedIndex::new(choices.iter().map(|(_, weight)| *weight))
        .map_err(|e| Error::Configuration(format!("Invalid demo weights: {e}")))?;
    let values = choices.iter().map(|(value, _)| value.clone()).collect();
    Ok((values, index))
}

/// Generate `rows` synthetic leads; the same seed always yields the same table.
pub fn generate_demo_leads(rows: usize, seed: u64) -> Result<LeadTable> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (dispositions, disposition_index) = weighted(&DISPOSITION_WEIGHTS)?;
    let (states, state_index) = weighted(&STATE_WEIGHTS)?;

    let leads = (0..rows)
        .map(|i| {
            let disposition = dispositions[disposition_index.sample(&mut rng)].clone();
            let state = states[state_index.sample(&mut rng)].clone();
            let attempted_calls = rng.gen_range(ATTEMPT_RANGE);
            let connected_calls = if disposition.implies_connection() {
                rng.gen_range(1..=attempted_calls)
            } else {
                rng.gen_range(STRAY_CONNECTION_RANGE).min(attempted_calls)
            };
            let spend = round_to(rng.gen_range(SPEND_RANGE), 2);

            Lead {
                lead_id: format!("L{}", 10000 + i),
                disposition,
                state,
                attempted_calls,
                connected_calls,
                spend,
            }
        })
        .collect::<LeadTable>();

    log::info!("Generated {} demo leads (seed {})", leads.len(), seed);
    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        let first = generate_demo_leads(200, 7).unwrap();
        let second = generate_demo_leads(200, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_demo_leads(200, 1).unwrap();
        let second = generate_demo_leads(200, 2).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_rows_respect_generator_ranges() {
        let table = generate_demo_leads(DEFAULT_DEMO_ROWS, DEFAULT_DEMO_SEED).unwrap();
        assert_eq!(table.len(), 500);
        assert_eq!(table.leads()[0].lead_id, "L10000");
        assert_eq!(table.leads()[499].lead_id, "L10499");
        for lead in &table {
            assert!((1..16).contains(&lead.attempted_calls));
            assert!(lead.connected_calls <= lead.attempted_calls);
            assert!((5.0..=45.0).contains(&lead.spend));
            assert!(lead.disposition.is_known());
            assert!(lead.state.is_known());
            if lead.disposition.implies_connection() {
                assert!(lead.connected_calls >= 1);
            } else {
                assert!(lead.connected_calls < 3);
            }
        }
    }
}
