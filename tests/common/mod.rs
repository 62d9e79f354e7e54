#![allow(dead_code)]

use chrono::{Duration, Local, NaiveTime};
use restaurant_finder::{Restaurant, RestaurantService};

pub const CAFE: &str = "Amelie's Cafe";
pub const SOUP: (&str, u32) = ("Sweet Corn Soup", 119);
pub const LASAGNE: (&str, u32) = ("Vegetable Lasagne", 269);
pub const BROWNIE: (&str, u32) = ("Sizzling Brownie", 319);

pub fn time(text: &str) -> NaiveTime {
    text.parse().expect("valid HH:MM:SS time")
}

/// Service seeded with Amelie's Cafe (10:30-22:00) serving soup and lasagne
pub fn seeded_service() -> RestaurantService {
    let mut service = RestaurantService::new();
    let restaurant = service.add_restaurant(CAFE, "Chennai", time("10:30:00"), time("22:00:00"));
    restaurant.add_to_menu(SOUP.0, SOUP.1);
    restaurant.add_to_menu(LASAGNE.0, LASAGNE.1);
    service
}

/// Shift a restaurant's hours relative to the current local time
pub fn hours_around_now(restaurant: &mut Restaurant, opened_hours_ago: i64, closes_in_hours: i64) {
    let now = Local::now().time();
    restaurant.set_hours(
        now - Duration::hours(opened_hours_ago),
        now + Duration::hours(closes_in_hours),
    );
}
