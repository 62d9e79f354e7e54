use chrono::{Duration, NaiveTime};
use proptest::prelude::*;
use proptest::sample::Index;
use restaurant_finder::models::{validate_item_name, CatalogError, Item, Restaurant};
use restaurant_finder::RestaurantService;
use std::collections::BTreeMap;

// Property-based test strategies
prop_compose! {
    fn arb_time()(seconds in 0u32..86_400) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap()
    }
}

prop_compose! {
    fn arb_menu()(items in prop::collection::btree_map("[A-Za-z ]{1,24}", 0u32..100_000, 1..20)) -> BTreeMap<String, u32> {
        items
    }
}

fn restaurant_with_menu(menu: &BTreeMap<String, u32>) -> Restaurant {
    let mut restaurant = Restaurant::new(
        "Amelie's Cafe",
        "Chennai",
        NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    );
    for (name, price) in menu {
        restaurant.add_to_menu(name.clone(), *price);
    }
    restaurant
}

proptest! {
    #[test]
    fn test_full_menu_cost_is_sum_of_prices(menu in arb_menu()) {
        let restaurant = restaurant_with_menu(&menu);
        let expected: u64 = menu.values().map(|price| u64::from(*price)).sum();

        prop_assert_eq!(restaurant.order_cost(restaurant.menu()), Ok(expected));
    }

    #[test]
    fn test_selection_cost_counts_repeats(
        menu in arb_menu(),
        picks in prop::collection::vec(any::<Index>(), 0..30),
    ) {
        let restaurant = restaurant_with_menu(&menu);
        let selected: Vec<Item> = picks
            .iter()
            .map(|pick| pick.get(restaurant.menu()).clone())
            .collect();
        let expected: u64 = selected.iter().map(|item| u64::from(item.price())).sum();

        prop_assert_eq!(restaurant.order_cost(&selected), Ok(expected));
    }

    #[test]
    fn test_removed_selected_item_fails_order(
        menu in arb_menu(),
        pick in any::<Index>(),
    ) {
        let mut restaurant = restaurant_with_menu(&menu);
        let selected = restaurant.menu().to_vec();
        let removed = pick.get(&selected).name().to_string();

        restaurant.remove_from_menu(&removed).unwrap();

        prop_assert_eq!(
            restaurant.order_cost(&selected),
            Err(CatalogError::ItemNotFound { name: removed })
        );
    }

    #[test]
    fn test_menu_size_tracks_adds_and_removes(names in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut restaurant = restaurant_with_menu(&BTreeMap::new());

        for (count, name) in names.iter().enumerate() {
            restaurant.add_to_menu(name.clone(), 100);
            prop_assert_eq!(restaurant.menu().len(), count + 1);
        }
        for (count, name) in names.iter().enumerate() {
            prop_assert!(restaurant.remove_from_menu(name).is_ok());
            prop_assert_eq!(restaurant.menu().len(), names.len() - count - 1);
        }
        prop_assert!(restaurant.remove_from_menu("anything").is_err());
    }

    #[test]
    fn test_open_when_now_lies_inside_window(
        now in arb_time(),
        opened_ago in 1i64..43_200,
        closes_in in 1i64..43_200,
    ) {
        let restaurant = Restaurant::new(
            "Amelie's Cafe",
            "Chennai",
            now - Duration::seconds(opened_ago),
            now + Duration::seconds(closes_in),
        );

        prop_assert!(restaurant.is_open_at(now));
    }

    #[test]
    fn test_closed_when_now_lies_outside_window(
        now in arb_time(),
        opened_ago in 2i64..86_399,
        gap in 1i64..86_398,
    ) {
        // Window closes `gap` seconds before now, so now sits outside it.
        prop_assume!(gap < opened_ago);
        let opening = now - Duration::seconds(opened_ago);
        let closing = now - Duration::seconds(gap);
        let restaurant = Restaurant::new("Amelie's Cafe", "Chennai", opening, closing);

        prop_assert!(!restaurant.is_open_at(now));
    }

    #[test]
    fn test_open_check_excludes_boundaries(opening in arb_time(), closing in arb_time()) {
        let restaurant = Restaurant::new("Amelie's Cafe", "Chennai", opening, closing);

        prop_assert!(!restaurant.is_open_at(opening));
        prop_assert!(!restaurant.is_open_at(closing));
    }

    #[test]
    fn test_unknown_restaurant_names_not_found(
        known in prop::collection::btree_set("[a-z]{1,10}", 0..10),
        unknown in "[A-Z]{1,10}",
    ) {
        let mut service = RestaurantService::new();
        for name in &known {
            service.add_restaurant(
                name.clone(),
                "Chennai",
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            );
        }
        let expected = CatalogError::RestaurantNotFound { name: unknown.clone() };

        prop_assert_eq!(service.find_restaurant_by_name(&unknown).unwrap_err(), expected.clone());
        prop_assert_eq!(service.remove_restaurant(&unknown).unwrap_err(), expected);
        prop_assert_eq!(service.len(), known.len());
    }

    #[test]
    fn test_generated_item_names_pass_validation(name in "[A-Za-z][A-Za-z ]{0,24}") {
        prop_assert!(validate_item_name(&name).is_ok());
    }
}
