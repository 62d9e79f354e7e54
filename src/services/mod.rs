// Services module - catalog operations

pub mod restaurant_service;

pub use restaurant_service::RestaurantService;
