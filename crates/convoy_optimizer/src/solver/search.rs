use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use rayon::prelude::*;
use tracing::debug;

use crate::problem::{booking::Booking, vehicle::Vehicle};
use crate::solver::{assignment::VehicleAssignment, packing::pack_loads};

/// A pluggable candidate generator and objective for the population search.
/// Alternative move sets (local search, simulated annealing) can be
/// substituted without touching the orchestrator.
pub trait SearchStrategy {
    fn generate(
        &self,
        bookings: &[Booking],
        vehicles: &[Vehicle],
        rng: &mut SmallRng,
    ) -> Vec<VehicleAssignment>;

    fn fitness(&self, solution: &[VehicleAssignment]) -> f64;
}

/// The default move: reshuffle the booking order and repack. Fitness trades
/// mean utilization (percent) against total distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShufflePack;

impl SearchStrategy for ShufflePack {
    fn generate(
        &self,
        bookings: &[Booking],
        vehicles: &[Vehicle],
        rng: &mut SmallRng,
    ) -> Vec<VehicleAssignment> {
        let mut shuffled = bookings.to_vec();
        shuffled.shuffle(rng);
        pack_loads(&shuffled, vehicles)
    }

    fn fitness(&self, solution: &[VehicleAssignment]) -> f64 {
        if solution.is_empty() {
            return 0.0;
        }

        let mean_utilization = solution
            .iter()
            .map(VehicleAssignment::utilization)
            .sum::<f64>()
            / solution.len() as f64;
        let total_distance_km: f64 = solution
            .iter()
            .map(VehicleAssignment::total_distance_km)
            .sum();

        mean_utilization - total_distance_km / 100.0
    }
}

/// A small evolutionary loop over candidate packings: each generation the
/// population is ranked by fitness, the elites survive, and the rest is
/// refilled with fresh candidates. Retaining the elites makes the best
/// fitness monotonically non-decreasing across generations.
#[derive(Debug, Clone)]
pub struct EvolutionarySearch {
    pub population_size: usize,
    pub generations: usize,
    pub elite: usize,
}

impl Default for EvolutionarySearch {
    fn default() -> Self {
        EvolutionarySearch {
            population_size: 5,
            generations: 10,
            elite: 3,
        }
    }
}

impl EvolutionarySearch {
    pub fn run(
        &self,
        strategy: &(impl SearchStrategy + Sync),
        bookings: &[Booking],
        vehicles: &[Vehicle],
        rng: &mut SmallRng,
    ) -> Vec<VehicleAssignment> {
        self.run_with_history(strategy, bookings, vehicles, rng).0
    }

    /// Like [`run`](Self::run), but also reports the best fitness observed
    /// at each generation.
    pub fn run_with_history(
        &self,
        strategy: &(impl SearchStrategy + Sync),
        bookings: &[Booking],
        vehicles: &[Vehicle],
        rng: &mut SmallRng,
    ) -> (Vec<VehicleAssignment>, Vec<f64>) {
        if bookings.is_empty() || vehicles.is_empty() || self.population_size == 0 {
            return (Vec::new(), Vec::new());
        }

        let mut population =
            self.spawn_candidates(strategy, bookings, vehicles, rng, self.population_size);
        let mut history = Vec::with_capacity(self.generations);

        for generation in 0..self.generations {
            population.sort_by(|a, b| b.1.total_cmp(&a.1));
            population.truncate(self.elite.max(1));
            history.push(population[0].1);

            debug!(generation, best_fitness = population[0].1, "retained elites");

            let refill = self.population_size.saturating_sub(population.len());
            population.extend(self.spawn_candidates(strategy, bookings, vehicles, rng, refill));
        }

        let best = population
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(solution, _)| solution)
            .unwrap_or_default();

        (best, history)
    }

    /// Candidate generation is embarrassingly parallel: every candidate gets
    /// its own RNG derived from the master so results stay reproducible.
    fn spawn_candidates(
        &self,
        strategy: &(impl SearchStrategy + Sync),
        bookings: &[Booking],
        vehicles: &[Vehicle],
        rng: &mut SmallRng,
        count: usize,
    ) -> Vec<(Vec<VehicleAssignment>, f64)> {
        let mut rngs: Vec<SmallRng> = (0..count).map(|_| SmallRng::from_rng(rng)).collect();

        rngs.par_iter_mut()
            .map(|candidate_rng| {
                let solution = strategy.generate(bookings, vehicles, candidate_rng);
                let fitness = strategy.fitness(&solution);
                (solution, fitness)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    fn mixed_fleet() -> (Vec<Booking>, Vec<Vehicle>) {
        let bookings: Vec<_> = (0..10)
            .map(|i| {
                test_utils::create_booking(
                    format!("BK-{i:03}"),
                    "Connaught Place",
                    "Khan Market",
                    200.0 + 150.0 * i as f64,
                    8.0 + i as f64,
                )
            })
            .collect();
        let vehicles = vec![
            test_utils::create_vehicle("V1", "Cargo Van", 1200.0),
            test_utils::create_vehicle("V2", "Box Truck", 3500.0),
            test_utils::create_vehicle("V3", "Mini Van", 800.0),
        ];
        (bookings, vehicles)
    }

    #[test]
    fn test_best_fitness_is_monotonic_across_generations() {
        let (bookings, vehicles) = mixed_fleet();
        let mut rng = SmallRng::seed_from_u64(42);

        let (_, history) =
            EvolutionarySearch::default().run_with_history(&ShufflePack, &bookings, &vehicles, &mut rng);

        assert_eq!(history.len(), 10);
        for pair in history.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_identical_seeds_give_identical_solutions() {
        let (bookings, vehicles) = mixed_fleet();

        let mut first_rng = SmallRng::seed_from_u64(7);
        let first = EvolutionarySearch::default().run(&ShufflePack, &bookings, &vehicles, &mut first_rng);

        let mut second_rng = SmallRng::seed_from_u64(7);
        let second =
            EvolutionarySearch::default().run(&ShufflePack, &bookings, &vehicles, &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    fn test_solution_respects_capacity() {
        let (bookings, vehicles) = mixed_fleet();
        let mut rng = SmallRng::seed_from_u64(11);

        let solution = EvolutionarySearch::default().run(&ShufflePack, &bookings, &vehicles, &mut rng);

        assert!(!solution.is_empty());
        for assignment in &solution {
            assert!(assignment.total_load_kg() <= assignment.vehicle().effective_capacity_kg());
        }
    }

    #[test]
    fn test_empty_inputs_short_circuit() {
        let (bookings, vehicles) = mixed_fleet();
        let mut rng = SmallRng::seed_from_u64(3);

        let search = EvolutionarySearch::default();
        assert!(search.run(&ShufflePack, &[], &vehicles, &mut rng).is_empty());
        assert!(search.run(&ShufflePack, &bookings, &[], &mut rng).is_empty());
    }

    #[test]
    fn test_empty_solution_has_zero_fitness() {
        assert_eq!(ShufflePack.fitness(&[]), 0.0);
    }
}
