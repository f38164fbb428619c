// ABOUTME: Party-size menu planning and randomized balanced dish selection
// ABOUTME: Plans meat/vegetable quotas, draws from shuffled pools, reports actual counts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Menu Composition
//!
//! Turns a party size into a concrete dish list:
//!
//! 1. plan quotas from the party size (always ≥ 2 dishes, meat equal to or
//!    one more than vegetable)
//! 2. build candidate pools — meat pulls from 荤菜 and 水产; vegetable from
//!    素菜, extended with 汤 and 甜品 when 素菜 alone cannot cover the quota
//! 3. shuffle each pool independently with a fresh RNG and take the quota
//! 4. assemble meat-first and report the counts actually delivered
//!
//! Under-filled pools are not an error: the response simply carries fewer
//! dishes, with counts reflecting the actual selection.

use rand::seq::SliceRandom;

use crate::constants::categories::{AQUATIC, DESSERT, MEAT, SOUP, VEGETABLE};
use crate::constants::limits::{MAX_PEOPLE_COUNT, MIN_PEOPLE_COUNT};
use crate::errors::{AppError, AppResult};
use crate::models::{DishRecommendation, DishSelectionPlan, Recipe, RecipeSummary};
use crate::store::RecipeStore;

/// Derive the dish quota plan for a party size.
///
/// `total = max(2, ceil(people * 0.8) + 1)`, meat gets the larger half.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when `people_count` is outside
/// 1..=10. The bound is a product constraint, rejected before any
/// planning — never silently clamped.
pub fn plan_for_party(people_count: u64) -> AppResult<DishSelectionPlan> {
    if !(MIN_PEOPLE_COUNT..=MAX_PEOPLE_COUNT).contains(&people_count) {
        return Err(AppError::value_out_of_range(format!(
            "people_count must be between {MIN_PEOPLE_COUNT} and {MAX_PEOPLE_COUNT}, got {people_count}"
        )));
    }

    let total_dishes = usize::max(2, (people_count as usize * 4).div_ceil(5) + 1);
    let meat_count = total_dishes.div_ceil(2);
    let vegetable_count = total_dishes - meat_count;

    Ok(DishSelectionPlan {
        total_dishes,
        meat_count,
        vegetable_count,
    })
}

/// Compose a randomized, balanced menu for a party.
///
/// Two calls with identical input may return different dish sets; the
/// randomness is drawn fresh per call and shared with no other request.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when `people_count` is outside 1..=10.
pub fn recommend(store: &RecipeStore, people_count: u64) -> AppResult<DishRecommendation> {
    let plan = plan_for_party(people_count)?;

    let mut meat_pool: Vec<&Recipe> = store
        .recipes()
        .iter()
        .filter(|r| r.category == MEAT || r.category == AQUATIC)
        .collect();

    let mut vegetable_pool: Vec<&Recipe> = store
        .recipes()
        .iter()
        .filter(|r| r.category == VEGETABLE)
        .collect();

    // Sparse vegetable data must not starve the menu: top the pool up with
    // soups and desserts before drawing.
    if vegetable_pool.len() < plan.vegetable_count {
        vegetable_pool.extend(
            store
                .recipes()
                .iter()
                .filter(|r| r.category == SOUP || r.category == DESSERT),
        );
    }

    let mut rng = rand::thread_rng();
    meat_pool.shuffle(&mut rng);
    vegetable_pool.shuffle(&mut rng);

    let meat_selected = &meat_pool[..plan.meat_count.min(meat_pool.len())];
    let vegetable_selected = &vegetable_pool[..plan.vegetable_count.min(vegetable_pool.len())];

    // Meat first is a presentation convention, not a ranking.
    let dishes: Vec<RecipeSummary> = meat_selected
        .iter()
        .chain(vegetable_selected.iter())
        .map(|recipe| RecipeSummary::from(*recipe))
        .collect();

    let message = format!(
        "为{people_count}人推荐{}道菜：{}荤{}素",
        dishes.len(),
        meat_selected.len(),
        vegetable_selected.len()
    );

    Ok(DishRecommendation {
        people_count,
        meat_dish_count: meat_selected.len(),
        vegetable_dish_count: vegetable_selected.len(),
        dishes,
        message,
    })
}
