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

//! End-to-end scenarios against the real HiGHS backend.

use shift_alloc_core::prelude::{Points, TimeDelta, TimePoint};
use shift_alloc_model::common::DayKey;
use shift_alloc_model::prelude::*;
use shift_alloc_model::validation::RosterValidator;
use shift_alloc_solver::engine::solve;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();
}

fn shift(id: &str, date: &str, start: i64, end: i64, capacity: u32, deci: u32) -> Shift {
    Shift::new(
        ShiftIdentifier::new(id),
        DayKey::new(date),
        "crew",
        TimePoint::new(start),
        TimePoint::new(end),
        capacity,
        Points::from_deci(deci),
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

fn idx(problem: &Problem, shift: &str) -> usize {
    problem
        .shifts()
        .index_of(&ShiftIdentifier::new(shift))
        .unwrap()
}

/// S1: two volunteers with disjoint first choices each receive their #1.
#[test]
fn trivial_optimum_gives_everyone_their_first_choice() {
    init_tracing();
    let p = problem(
        vec![
            shift("A", "day-1", 540, 660, 1, 20),
            shift("B", "day-1", 840, 960, 1, 20),
        ],
        vec![
            vol("Alice", &[("A", 1), ("B", 2)]),
            vol("Bob", &[("B", 1), ("A", 2)]),
        ],
    );
    let settings = Settings {
        min_points: Points::from_deci(20),
        max_over: Points::ZERO,
        max_shifts: 1,
        guarantee_level: 1,
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert_eq!(report.status(), SolveStatus::Optimal);
    assert_eq!(report.phase(), Phase::Egalitarian);
    assert!(report.roster().contains(0, idx(&p, "A")));
    assert!(report.roster().contains(1, idx(&p, "B")));

    let conflicts = p.conflicts(settings.back_to_back_gap);
    RosterValidator::validate(&p, &settings, &conflicts, report.roster(), None, true).unwrap();
}

/// S2: the guarantee plus maximin protect Bob's only ranked shift even
/// though handing it to Alice would raise the satisfaction sum.
#[test]
fn maximin_beats_total_satisfaction() {
    init_tracing();
    let p = problem(
        vec![
            shift("s1", "day-1", 540, 660, 1, 20),
            shift("s2", "day-1", 800, 920, 1, 20),
            shift("s3", "day-1", 1100, 1220, 1, 20),
        ],
        vec![
            vol("Alice", &[("s1", 1), ("s2", 2), ("s3", 3)]),
            vol("Bob", &[("s3", 1)]),
        ],
    );
    let settings = Settings {
        min_points: Points::from_deci(20),
        max_over: Points::from_deci(20),
        max_shifts: 2,
        guarantee_level: 1,
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert!(report.status().is_success());
    let bob = 1;
    assert!(report.roster().contains(bob, idx(&p, "s3")));
    let alice = 0;
    assert!(report.roster().contains(alice, idx(&p, "s1")));
    assert!(report.roster().contains(alice, idx(&p, "s2")));
}

/// S3: with back-to-back work forbidden, the sequential pair (s1, s2) is
/// split across volunteers.
#[test]
fn forbidden_back_to_back_forces_a_split() {
    init_tracing();
    // 09:00-10:00, 10:30-11:30, 14:00-15:00 on one day; a 2 h gap makes
    // only (s1, s2) sequential.
    let p = problem(
        vec![
            shift("s1", "day-1", 540, 600, 1, 10),
            shift("s2", "day-1", 630, 690, 1, 10),
            shift("s3", "day-1", 840, 900, 1, 10),
        ],
        vec![
            vol("Alice", &[("s1", 1), ("s2", 2), ("s3", 3)]),
            vol("Bob", &[("s1", 1), ("s2", 2), ("s3", 3)]),
        ],
    );
    let settings = Settings {
        min_points: Points::from_deci(10),
        max_over: Points::from_deci(10),
        max_shifts: 2,
        forbid_back_to_back: true,
        back_to_back_gap: TimeDelta::new(120),
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert!(report.status().is_success());
    let (s1, s2) = (idx(&p, "s1"), idx(&p, "s2"));
    for v in 0..2 {
        assert!(
            !(report.roster().contains(v, s1) && report.roster().contains(v, s2)),
            "volunteer {v} works both sequential shifts"
        );
    }
    // All three shifts end up covered.
    for s in 0..3 {
        assert_eq!(report.roster().assigned_count(s), 1);
    }

    let conflicts = p.conflicts(settings.back_to_back_gap);
    RosterValidator::validate(
        &p,
        &settings,
        &conflicts,
        report.roster(),
        report.relaxation(),
        true,
    )
    .unwrap();
}

/// S4: a shift nobody ranked is left empty by the egalitarian phase and
/// filled by hard-fill without relaxing anything.
#[test]
fn hard_fill_covers_unranked_shift_without_relaxation() {
    init_tracing();
    let p = problem(
        vec![
            shift("s1", "day-1", 540, 660, 1, 20),
            shift("s2", "day-1", 840, 960, 1, 20),
            shift("s3", "day-2", 540, 660, 1, 20),
        ],
        vec![
            vol("Alice", &[("s1", 1), ("s2", 2)]),
            vol("Bob", &[("s2", 1), ("s1", 2)]),
        ],
    );
    let settings = Settings {
        min_points: Points::from_deci(20),
        max_over: Points::from_deci(20),
        max_shifts: 2,
        guarantee_level: 1,
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert_eq!(report.status(), SolveStatus::Optimal);
    assert_eq!(report.phase(), Phase::HardFill);
    assert!(report.relaxation().is_none());
    assert_eq!(report.roster().assigned_count(idx(&p, "s3")), 1);
}

fn fifty_points_fifteen_shifts() -> Problem {
    // 5 shifts of 4.0 points and 10 of 3.0: 50 points total, one slot each,
    // all timing-disjoint.
    let mut shifts = Vec::new();
    for i in 0..5 {
        shifts.push(shift(
            &format!("big-{i}"),
            &format!("day-{i}"),
            540,
            900,
            1,
            40,
        ));
    }
    for i in 0..10 {
        shifts.push(shift(
            &format!("small-{i}"),
            &format!("day-{}", 5 + i),
            540,
            780,
            1,
            30,
        ));
    }
    let vols = (0..10)
        .map(|i| {
            let big = format!("big-{}", i % 5);
            let small = format!("small-{i}");
            vol(
                &format!("vol-{i:02}"),
                &[(big.as_str(), 1), (small.as_str(), 2)],
            )
        })
        .collect();
    problem(shifts, vols)
}

/// S5: workload floors exceed the available points; hard-fill succeeds at
/// the relaxed-points level and says so.
#[test]
fn relaxation_required_and_disclosed() {
    init_tracing();
    let p = fifty_points_fifteen_shifts();
    let settings = Settings {
        min_points: Points::from_deci(60),
        max_over: Points::from_deci(20),
        max_shifts: 3,
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert!(report.status().is_success());
    assert_eq!(report.phase(), Phase::HardFill);
    assert!(report.diagnoses().is_empty());

    let relaxation = report.relaxation().expect("relaxation must be disclosed");
    assert_eq!(relaxation.level(), RelaxationLevel::RelaxedPoints);
    let f = relaxation.factors();
    assert_eq!(
        (f.workload_floor, f.shift_count, f.workload_ceiling),
        (0.5, 1.5, 1.5)
    );

    let conflicts = p.conflicts(settings.back_to_back_gap);
    RosterValidator::validate(
        &p,
        &settings,
        &conflicts,
        report.roster(),
        report.relaxation(),
        true,
    )
    .unwrap();
}

/// S6: the same shortage without permission to relax is a diagnosed
/// failure.
#[test]
fn forbidden_relaxation_yields_points_shortage_diagnosis() {
    init_tracing();
    let p = fifty_points_fifteen_shifts();
    let settings = Settings {
        min_points: Points::from_deci(60),
        max_over: Points::from_deci(20),
        max_shifts: 3,
        allow_relaxation: false,
        ..Settings::default()
    };

    let report = solve(&p, &settings).unwrap();
    assert_eq!(report.status(), SolveStatus::Infeasible);
    let shortage = report
        .diagnoses()
        .iter()
        .find(|d| d.kind() == DiagnosisKind::PointsShortage)
        .expect("points_shortage must be diagnosed");
    // 60 points required against 50 available.
    assert!(shortage.description().contains("shortfall of 10"));
}

/// Identical input and seed must reproduce the identical assignment.
#[test]
fn solve_is_idempotent_for_a_fixed_seed() {
    init_tracing();
    let p = fifty_points_fifteen_shifts();
    let settings = Settings {
        min_points: Points::from_deci(30),
        max_over: Points::from_deci(20),
        max_shifts: 3,
        seed: 42,
        ..Settings::default()
    };

    let first = solve(&p, &settings).unwrap();
    let second = solve(&p, &settings).unwrap();
    assert_eq!(first.status(), second.status());
    assert_eq!(first.roster(), second.roster());
}
