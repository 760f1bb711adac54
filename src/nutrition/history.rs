// ABOUTME: In-memory meal history for saved nutrition analyses
// ABOUTME: Append-only session log with daily calorie and macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use chrono::NaiveDate;
use forma_core::models::{MealHistoryEntry, NutritionResult};

/// Saved meals for the current session
#[derive(Debug, Clone, Default)]
pub struct MealHistory {
    entries: Vec<MealHistoryEntry>,
}

/// Summed nutrition over a set of meals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MealTotals {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl MealHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result and return the stamped entry
    pub fn record(&mut self, result: NutritionResult) -> &MealHistoryEntry {
        let index = self.entries.len();
        self.entries.push(MealHistoryEntry::new(result));
        &self.entries[index]
    }

    /// Entries in save order
    #[must_use]
    pub fn entries(&self) -> &[MealHistoryEntry] {
        &self.entries
    }

    /// Number of saved meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was saved yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Totals across every saved meal
    #[must_use]
    pub fn totals(&self) -> MealTotals {
        sum(self.entries.iter())
    }

    /// Totals for meals logged on `day` (UTC)
    #[must_use]
    pub fn totals_on(&self, day: NaiveDate) -> MealTotals {
        sum(self
            .entries
            .iter()
            .filter(|entry| entry.logged_at.date_naive() == day))
    }
}

fn sum<'a>(entries: impl Iterator<Item = &'a MealHistoryEntry>) -> MealTotals {
    entries.fold(MealTotals::default(), |totals, entry| MealTotals {
        calories: totals.calories.saturating_add(entry.result.calories),
        protein: totals.protein + entry.result.protein,
        carbs: totals.carbs + entry.result.carbs,
        fat: totals.fat + entry.result.fat,
    })
}
