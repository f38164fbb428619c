// ABOUTME: Integration tests for the randomized balanced menu composer
// ABOUTME: Asserts structural properties - counts, membership, no duplicates - never exact picks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_panics_doc,
    clippy::uninlined_format_args
)]

//! Menu composer properties. The selection is randomized by design, so
//! these tests pin counts, pool membership, and bounds; they never assert
//! a specific dish set.

use std::collections::HashSet;

use cookbook_mcp_server::menu::{plan_for_party, recommend};
use cookbook_mcp_server::store::RecipeStore;

fn recipe(name: &str, category: &str) -> String {
    format!(
        r#"{{"name": "{name}", "description": "d", "category": "{category}", "ingredients": [], "steps": []}}"#
    )
}

fn store_with(entries: &[(&str, &str)]) -> RecipeStore {
    let body: Vec<String> = entries
        .iter()
        .map(|(name, category)| recipe(name, category))
        .collect();
    RecipeStore::from_json(&format!("[{}]", body.join(","))).unwrap()
}

fn rich_store() -> RecipeStore {
    store_with(&[
        ("荤1", "荤菜"),
        ("荤2", "荤菜"),
        ("荤3", "荤菜"),
        ("鱼1", "水产"),
        ("鱼2", "水产"),
        ("素1", "素菜"),
        ("素2", "素菜"),
        ("素3", "素菜"),
        ("素4", "素菜"),
        ("汤1", "汤"),
        ("甜1", "甜品"),
    ])
}

#[test]
fn test_plan_sizing_is_monotonic_and_balanced() {
    let mut previous = 0;
    for people in 1..=10 {
        let plan = plan_for_party(people).unwrap();
        assert!(plan.total_dishes >= 2);
        assert!(plan.total_dishes >= previous);
        assert_eq!(plan.meat_count + plan.vegetable_count, plan.total_dishes);
        assert!(plan.meat_count >= plan.vegetable_count);
        assert!(plan.meat_count - plan.vegetable_count <= 1);
        previous = plan.total_dishes;
    }
}

#[test]
fn test_party_size_bounds_are_enforced() {
    assert!(plan_for_party(0).is_err());
    assert!(plan_for_party(11).is_err());
    assert!(recommend(&rich_store(), 0).is_err());
    assert!(recommend(&rich_store(), 11).is_err());
}

#[test]
fn test_counts_always_match_the_delivered_dishes() {
    let store = rich_store();
    for people in 1..=10 {
        let recommendation = recommend(&store, people).unwrap();
        let plan = plan_for_party(people).unwrap();

        assert_eq!(recommendation.people_count, people);
        assert_eq!(
            recommendation.meat_dish_count + recommendation.vegetable_dish_count,
            recommendation.dishes.len()
        );
        assert!(recommendation.dishes.len() <= plan.total_dishes);
        assert!(recommendation.meat_dish_count <= plan.meat_count);
        assert!(recommendation.vegetable_dish_count <= plan.vegetable_count);
    }
}

#[test]
fn test_dishes_come_from_the_right_pools_meat_first() {
    let store = rich_store();
    let meat_names: HashSet<&str> = ["荤1", "荤2", "荤3", "鱼1", "鱼2"].into();
    let veg_names: HashSet<&str> = ["素1", "素2", "素3", "素4"].into();

    for _ in 0..20 {
        let recommendation = recommend(&store, 6).unwrap();
        let (meat_part, veg_part) = recommendation
            .dishes
            .split_at(recommendation.meat_dish_count);

        for dish in meat_part {
            assert!(meat_names.contains(dish.name.as_str()), "{}", dish.name);
        }
        // The vegetable pool is large enough here, so no fallback entries
        for dish in veg_part {
            assert!(veg_names.contains(dish.name.as_str()), "{}", dish.name);
        }
    }
}

#[test]
fn test_no_duplicate_dishes_within_a_draw() {
    let store = rich_store();
    for _ in 0..20 {
        let recommendation = recommend(&store, 10).unwrap();
        let unique: HashSet<&str> = recommendation
            .dishes
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(unique.len(), recommendation.dishes.len());
    }
}

#[test]
fn test_soup_and_dessert_fill_a_short_vegetable_pool() {
    // One 素菜 recipe, but a plan for 10 people wants four vegetable dishes
    let store = store_with(&[
        ("荤1", "荤菜"),
        ("荤2", "荤菜"),
        ("荤3", "荤菜"),
        ("荤4", "荤菜"),
        ("荤5", "荤菜"),
        ("素1", "素菜"),
        ("汤1", "汤"),
        ("汤2", "汤"),
        ("甜1", "甜品"),
    ]);

    let recommendation = recommend(&store, 10).unwrap();
    assert_eq!(recommendation.vegetable_dish_count, 4);

    let veg_part: HashSet<&str> = recommendation.dishes
        [recommendation.meat_dish_count..]
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    // All four fallback-extended candidates are needed, so all are drawn
    assert_eq!(veg_part, ["素1", "汤1", "汤2", "甜1"].into());
}

#[test]
fn test_underfilled_pools_shrink_the_menu_silently() {
    // Nothing but one meat dish: the menu simply gets shorter, the counts
    // reflect what was delivered, and no error is raised.
    let store = store_with(&[("荤1", "荤菜")]);

    let recommendation = recommend(&store, 10).unwrap();
    assert_eq!(recommendation.meat_dish_count, 1);
    assert_eq!(recommendation.vegetable_dish_count, 0);
    assert_eq!(recommendation.dishes.len(), 1);
    assert!(recommendation.message.contains("1道菜"));
    assert!(recommendation.message.contains("1荤0素"));
}

#[test]
fn test_message_reports_actual_counts() {
    let store = rich_store();
    let recommendation = recommend(&store, 4).unwrap();
    let expected = format!(
        "为4人推荐{}道菜：{}荤{}素",
        recommendation.dishes.len(),
        recommendation.meat_dish_count,
        recommendation.vegetable_dish_count
    );
    assert_eq!(recommendation.message, expected);
}

#[test]
fn test_selection_varies_across_draws() {
    // With five meat candidates and a quota of one, 200 identical draws in
    // a row would mean the shuffle is broken.
    let store = rich_store();
    let mut seen: HashSet<String> = HashSet::new();
    for _ in 0..200 {
        let recommendation = recommend(&store, 1).unwrap();
        seen.insert(recommendation.dishes[0].name.clone());
    }
    assert!(seen.len() > 1, "draws never varied");
}
