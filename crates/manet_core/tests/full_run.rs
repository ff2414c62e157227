//! Whole-run properties over many seeds.

use manet_core::{RoundStatus, SimConfig, SimState, SimulationController};

#[test]
fn energy_is_never_negative() {
    for seed in 0..50 {
        let mut controller = SimulationController::new(SimConfig::default(), seed).unwrap();
        while controller.state() == SimState::Running && controller.rounds_executed() < 5 {
            controller.step();
            assert!(
                controller.network().nodes().all(|n| n.energy >= 0.0),
                "negative energy after round {} (seed {})",
                controller.rounds_executed(),
                seed
            );
        }
    }
}

#[test]
fn surviving_node_set_is_non_increasing() {
    for seed in 0..50 {
        let mut controller = SimulationController::new(SimConfig::default(), seed).unwrap();
        let mut previous = controller.network().node_count();
        while controller.state() == SimState::Running && controller.rounds_executed() < 5 {
            controller.step();
            let current = controller.network().node_count();
            assert!(current <= previous, "node set grew (seed {seed})");
            previous = current;
        }
    }
}

#[test]
fn recorded_paths_are_valid_and_scores_consistent() {
    let config = SimConfig::default();
    for seed in 0..50 {
        let mut controller = SimulationController::new(config.clone(), seed).unwrap();
        while controller.state() == SimState::Running && controller.rounds_executed() < 5 {
            controller.step();
            let Some(record) = controller.history().last() else {
                continue;
            };
            if record.status != RoundStatus::PathFound {
                assert!(record.path.is_none());
                continue;
            }
            let path = record.path.as_ref().unwrap();
            assert!(path.len() >= 2);
            assert!(path.len() - 1 <= config.cutoff);
            assert_eq!(path.first(), Some(&config.source_id));
            assert_eq!(path.last(), Some(&config.destination_id));
            // Decay never removes nodes, so the path must still be alive.
            assert!(path.iter().all(|&id| controller.network().contains(id)));

            let total = record.total_distance.unwrap();
            let min_energy = record.min_energy.unwrap();
            let score = record.score.unwrap();
            assert!(min_energy > 0.0);
            assert!((score - total as f64 / min_energy).abs() < 1e-12);
        }
    }
}

#[test]
fn same_seed_reproduces_the_run() {
    let config = SimConfig::default();
    for seed in [0, 7, 123456789] {
        let mut a = SimulationController::new(config.clone(), seed).unwrap();
        let mut b = SimulationController::new(config.clone(), seed).unwrap();
        assert_eq!(a.run(), b.run());
    }
}

#[test]
fn history_is_bounded_by_round_budget() {
    for seed in 0..50 {
        let config = SimConfig {
            rounds: 8,
            ..SimConfig::default()
        };
        let mut controller = SimulationController::new(config, seed).unwrap();
        let history = controller.run().to_vec();
        assert!(history.len() <= 8);
        // Rounds are numbered 1..=n with no gaps.
        for (i, record) in history.iter().enumerate() {
            assert_eq!(record.round as usize, i + 1);
        }
        match controller.state() {
            SimState::Completed => assert!(history
                .iter()
                .all(|r| r.status != RoundStatus::EndpointLost)),
            SimState::EndpointLost => {
                assert_eq!(history.last().map(|r| r.status), Some(RoundStatus::EndpointLost))
            }
            SimState::Running => panic!("run() must end in a terminal state"),
        }
    }
}
