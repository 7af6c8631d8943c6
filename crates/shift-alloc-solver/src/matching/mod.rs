// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use shift_alloc_model::prelude::{Problem, VolunteerIdentifier};
use std::collections::BTreeMap;

/// Result of one top-`n` matchability check. `feasible` means every
/// volunteer can receive one shift ranked at or better than `n` without any
/// shift exceeding its capacity; this is a one-shift-per-volunteer
/// feasibility question, not a full schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    feasible: bool,
    unmatched: Vec<VolunteerIdentifier>,
}

impl MatchOutcome {
    #[inline]
    pub fn feasible(&self) -> bool {
        self.feasible
    }

    #[inline]
    pub fn unmatched(&self) -> &[VolunteerIdentifier] {
        &self.unmatched
    }
}

/// Result of the strongest-guarantee scan. A `level` of zero means no
/// guarantee is achievable at any rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuaranteeScan {
    level: u32,
    unmatched_by_level: BTreeMap<u32, Vec<VolunteerIdentifier>>,
}

impl GuaranteeScan {
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn unmatched_by_level(&self) -> &BTreeMap<u32, Vec<VolunteerIdentifier>> {
        &self.unmatched_by_level
    }
}

/// Bipartite many-to-one matching feasibility checker.
///
/// Plain DFS augmentation; at the targeted sizes (hundreds of volunteers
/// and shifts) there is no need for Hopcroft-Karp. Volunteers are processed
/// in input order, which makes the matching deterministic.
#[derive(Debug, Clone)]
pub struct MatchingOracle;

impl MatchingOracle {
    /// Can every volunteer receive one of their top-`n` preferences?
    /// Never errors; an infeasible instance reports the unmatched names.
    pub fn is_top_n_matchable(problem: &Problem, n: u32) -> MatchOutcome {
        let shifts = problem.shifts();
        let volunteers = problem.volunteers();

        // Adjacency by input index, restricted to ranks within n.
        let adjacency: Vec<Vec<usize>> = volunteers
            .iter()
            .map(|v| {
                v.iter_ranked_within(n)
                    .filter_map(|(shift_id, _)| shifts.index_of(shift_id))
                    .collect()
            })
            .collect();

        let capacities: Vec<usize> = shifts.iter().map(|s| s.capacity() as usize).collect();

        // Only the reverse view (shift -> matched volunteers) is maintained;
        // the forward view is derivable and never consulted.
        let mut matched: Vec<Vec<usize>> = vec![Vec::new(); shifts.len()];
        let mut unmatched = Vec::new();

        for v in 0..volunteers.len() {
            let mut visited = vec![false; shifts.len()];
            if !Self::augment(v, &adjacency, &capacities, &mut matched, &mut visited) {
                unmatched.push(volunteers.get(v).map(|vol| vol.name().clone()));
            }
        }

        let unmatched: Vec<VolunteerIdentifier> = unmatched.into_iter().flatten().collect();
        MatchOutcome {
            feasible: unmatched.is_empty(),
            unmatched,
        }
    }

    /// Finds an augmenting path for `v`. The visited set lives for one
    /// outer volunteer, preventing cycles across re-routing attempts.
    fn augment(
        v: usize,
        adjacency: &[Vec<usize>],
        capacities: &[usize],
        matched: &mut Vec<Vec<usize>>,
        visited: &mut Vec<bool>,
    ) -> bool {
        for &s in &adjacency[v] {
            if visited[s] {
                continue;
            }
            visited[s] = true;

            if matched[s].len() < capacities[s] {
                matched[s].push(v);
                return true;
            }

            // Shift is full: try to re-route one occupant elsewhere.
            for slot in 0..matched[s].len() {
                let occupant = matched[s][slot];
                if Self::augment(occupant, adjacency, capacities, matched, visited) {
                    matched[s][slot] = v;
                    return true;
                }
            }
        }
        false
    }

    /// Scans `n = 1, 2, ...` and returns the smallest level at which every
    /// volunteer can be matched, together with the unmatched names of every
    /// level attempted. The scan stops at `max(max_rank, 10)`; if nothing
    /// matches by then the level is zero.
    pub fn detect_strongest_guarantee(problem: &Problem) -> GuaranteeScan {
        let upper = problem.volunteers().max_rank().unwrap_or(0).max(10);
        let mut unmatched_by_level = BTreeMap::new();

        for n in 1..=upper {
            let outcome = Self::is_top_n_matchable(problem, n);
            let feasible = outcome.feasible();
            unmatched_by_level.insert(n, outcome.unmatched);
            if feasible {
                return GuaranteeScan {
                    level: n,
                    unmatched_by_level,
                };
            }
        }

        GuaranteeScan {
            level: 0,
            unmatched_by_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use shift_alloc_core::prelude::{Points, TimePoint};
    use shift_alloc_model::prelude::{
        Shift, ShiftContainer, ShiftIdentifier, Volunteer, VolunteerContainer,
    };
    use shift_alloc_model::common::DayKey;
    use std::collections::BTreeMap;

    fn shift(id: &str, capacity: u32) -> Shift {
        Shift::new(
            ShiftIdentifier::new(id),
            DayKey::new("d1"),
            "gate",
            TimePoint::new(0),
            TimePoint::new(60),
            capacity,
            Points::from_deci(10),
        )
        .unwrap()
    }

    fn vol(name: &str, entries: &[(&str, u32)]) -> Volunteer {
        let prefs: BTreeMap<ShiftIdentifier, u32> = entries
            .iter()
            .map(|(id, r)| (ShiftIdentifier::new(*id), *r))
            .collect();
        Volunteer::new(VolunteerIdentifier::new(name), Points::ZERO, prefs).unwrap()
    }

    fn problem(shifts: Vec<Shift>, vols: Vec<Volunteer>) -> Problem {
        Problem::new(
            ShiftContainer::try_from_iter(shifts).unwrap(),
            VolunteerContainer::try_from_iter(vols).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_disjoint_first_choices_match_at_level_one() {
        let p = problem(
            vec![shift("a", 1), shift("b", 1)],
            vec![vol("x", &[("a", 1)]), vol("y", &[("b", 1)])],
        );
        let outcome = MatchingOracle::is_top_n_matchable(&p, 1);
        assert!(outcome.feasible());
        assert!(outcome.unmatched().is_empty());
    }

    #[test]
    fn test_contested_shift_needs_rerouting() {
        // Both want "a" first; x can fall back to "b" at rank 2.
        let p = problem(
            vec![shift("a", 1), shift("b", 1)],
            vec![vol("x", &[("a", 1), ("b", 2)]), vol("y", &[("a", 1)])],
        );
        assert!(!MatchingOracle::is_top_n_matchable(&p, 1).feasible());
        assert!(MatchingOracle::is_top_n_matchable(&p, 2).feasible());
    }

    #[test]
    fn test_capacity_admits_multiple_volunteers() {
        let p = problem(
            vec![shift("a", 2)],
            vec![vol("x", &[("a", 1)]), vol("y", &[("a", 1)])],
        );
        assert!(MatchingOracle::is_top_n_matchable(&p, 1).feasible());
    }

    #[test]
    fn test_unmatched_names_reported_in_input_order() {
        let p = problem(
            vec![shift("a", 1)],
            vec![
                vol("x", &[("a", 1)]),
                vol("y", &[("a", 1)]),
                vol("z", &[("a", 1)]),
            ],
        );
        let outcome = MatchingOracle::is_top_n_matchable(&p, 1);
        assert!(!outcome.feasible());
        let names: Vec<&str> = outcome.unmatched().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["y", "z"]);
    }

    #[test]
    fn test_strongest_guarantee_scans_upward() {
        // Matching only succeeds once rank-2 edges are allowed.
        let p = problem(
            vec![shift("a", 1), shift("b", 1)],
            vec![vol("x", &[("a", 1), ("b", 2)]), vol("y", &[("a", 1)])],
        );
        let scan = MatchingOracle::detect_strongest_guarantee(&p);
        assert_eq!(scan.level(), 2);
        assert_eq!(scan.unmatched_by_level().len(), 2);
        assert_eq!(scan.unmatched_by_level()[&1].len(), 1);
        assert!(scan.unmatched_by_level()[&2].is_empty());
    }

    #[test]
    fn test_no_guarantee_achievable_returns_zero() {
        // y ranks nothing, so no level can ever cover everyone.
        let p = problem(
            vec![shift("a", 1)],
            vec![vol("x", &[("a", 1)]), vol("y", &[])],
        );
        let scan = MatchingOracle::detect_strongest_guarantee(&p);
        assert_eq!(scan.level(), 0);
        // The scan bound is max(max_rank, 10) = 10.
        assert_eq!(scan.unmatched_by_level().len(), 10);
    }

    /// Exhaustive reference: try every way of giving each volunteer one of
    /// its eligible shifts under the capacity limits.
    fn brute_force_feasible(
        adjacency: &[Vec<usize>],
        capacities: &[usize],
        used: &mut Vec<usize>,
        v: usize,
    ) -> bool {
        if v == adjacency.len() {
            return true;
        }
        for &s in &adjacency[v] {
            if used[s] < capacities[s] {
                used[s] += 1;
                if brute_force_feasible(adjacency, capacities, used, v + 1) {
                    used[s] -= 1;
                    return true;
                }
                used[s] -= 1;
            }
        }
        false
    }

    #[test]
    fn test_oracle_agrees_with_brute_force_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        for _ in 0..200 {
            let shift_count = rng.random_range(1..=5usize);
            let vol_count = rng.random_range(1..=6usize);
            let shifts: Vec<Shift> = (0..shift_count)
                .map(|i| shift(&format!("s{i}"), rng.random_range(1..=2u32)))
                .collect();
            let vols: Vec<Volunteer> = (0..vol_count)
                .map(|i| {
                    let entries: Vec<(String, u32)> = (0..shift_count)
                        .filter(|_| rng.random_bool(0.5))
                        .map(|s| (format!("s{s}"), 1))
                        .collect();
                    let prefs: BTreeMap<ShiftIdentifier, u32> = entries
                        .iter()
                        .map(|(id, r)| (ShiftIdentifier::new(id.clone()), *r))
                        .collect();
                    Volunteer::new(
                        VolunteerIdentifier::new(format!("v{i}")),
                        Points::ZERO,
                        prefs,
                    )
                    .unwrap()
                })
                .collect();

            let adjacency: Vec<Vec<usize>> = vols
                .iter()
                .map(|v| {
                    v.iter_ranked_within(1)
                        .map(|(id, _)| id.as_str()[1..].parse::<usize>().unwrap())
                        .collect()
                })
                .collect();
            let capacities: Vec<usize> =
                shifts.iter().map(|s| s.capacity() as usize).collect();

            let p = problem(shifts, vols);
            let oracle = MatchingOracle::is_top_n_matchable(&p, 1).feasible();
            let mut used = vec![0usize; capacities.len()];
            let reference = brute_force_feasible(&adjacency, &capacities, &mut used, 0);
            assert_eq!(oracle, reference);
        }
    }
}
