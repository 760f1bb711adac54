// ABOUTME: Static workout library with category browsing and home screen recommendations
// ABOUTME: Catalog filtering preserves library order; home picks go through a selection order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use crate::selection::SelectionOrder;
use forma_core::models::{Intensity, Workout, WorkoutCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static CATALOG: OnceLock<Vec<Workout>> = OnceLock::new();

/// Browse filter for the workout library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every workout
    #[default]
    All,
    /// Workouts of one category
    Only(WorkoutCategory),
}

impl CategoryFilter {
    /// Whether a workout passes the filter
    #[must_use]
    pub fn matches(self, workout: &Workout) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => workout.category == category,
        }
    }

    /// Tab label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Browse tabs in display order
pub const BROWSE_TABS: [CategoryFilter; 5] = [
    CategoryFilter::All,
    CategoryFilter::Only(WorkoutCategory::Strength),
    CategoryFilter::Only(WorkoutCategory::Cardio),
    CategoryFilter::Only(WorkoutCategory::Yoga),
    CategoryFilter::Only(WorkoutCategory::Flexibility),
];

/// The static workout library
pub fn workout_catalog() -> &'static [Workout] {
    CATALOG.get_or_init(build_catalog)
}

/// Library entries passing `filter`, in library order
#[must_use]
pub fn filter_catalog(filter: CategoryFilter) -> Vec<&'static Workout> {
    workout_catalog()
        .iter()
        .filter(|workout| filter.matches(workout))
        .collect()
}

/// Up to `limit` workouts in the order chosen by `order`
#[must_use]
pub fn home_recommendations(
    workouts: &[Workout],
    order: &mut dyn SelectionOrder,
    limit: usize,
) -> Vec<Workout> {
    order
        .order(workouts.len())
        .into_iter()
        .filter_map(|index| workouts.get(index).cloned())
        .take(limit)
        .collect()
}

fn entry(
    number: u32,
    title: &str,
    description: &str,
    duration_minutes: u32,
    intensity: Intensity,
    category: WorkoutCategory,
    photo: &str,
) -> Workout {
    Workout {
        id: format!("catalog-{number}"),
        title: title.to_owned(),
        description: description.to_owned(),
        duration_minutes,
        intensity,
        category,
        exercises: Vec::new(),
        image_url: Some(format!(
            "https://images.unsplash.com/{photo}&auto=format&fit=crop"
        )),
    }
}

fn build_catalog() -> Vec<Workout> {
    vec![
        entry(
            1,
            "HIIT Cardio Blast",
            "A high-intensity interval training workout to boost your cardio endurance and burn calories.",
            25,
            Intensity::Hard,
            WorkoutCategory::Cardio,
            "photo-1571019613454-1cb2f99b2d8b?q=80&w=3270",
        ),
        entry(
            2,
            "Full Body Strength",
            "Build strength and muscle with this comprehensive full body routine.",
            45,
            Intensity::Medium,
            WorkoutCategory::Strength,
            "photo-1581009146145-b5ef050c2e1e?q=80&w=3270",
        ),
        entry(
            3,
            "Yoga Flow",
            "Improve flexibility, balance, and mindfulness with this calming yoga session.",
            30,
            Intensity::Easy,
            WorkoutCategory::Yoga,
            "photo-1575052814086-f385e2e2ad1b?q=80&w=3270",
        ),
        entry(
            4,
            "Core Crusher",
            "Strengthen your core and improve posture with this targeted ab workout.",
            20,
            Intensity::Medium,
            WorkoutCategory::Strength,
            "photo-1517836357463-d25dfeac3438?q=80&w=3270",
        ),
        entry(
            5,
            "Flexibility Focus",
            "Improve range of motion and prevent injuries with this stretching routine.",
            25,
            Intensity::Easy,
            WorkoutCategory::Flexibility,
            "photo-1518611012118-696072aa579a?q=80&w=3270",
        ),
        entry(
            6,
            "Tabata Training",
            "Maximize calorie burn in minimal time with this efficient Tabata workout.",
            20,
            Intensity::Hard,
            WorkoutCategory::Cardio,
            "photo-1599058917212-d750089bc07e?q=80&w=3269",
        ),
    ]
}
