use chrono::NaiveTime;
use tracing::{debug, info, instrument, warn};

use crate::models::{CatalogError, CatalogResult, Restaurant};

/// Service for managing the restaurant catalog
#[derive(Debug, Clone, Default)]
pub struct RestaurantService {
    restaurants: Vec<Restaurant>,
}

impl RestaurantService {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new restaurant with an empty menu and return it for setup
    #[instrument(skip_all)]
    pub fn add_restaurant(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> &mut Restaurant {
        let restaurant = Restaurant::new(name, location, opening_time, closing_time);
        info!(
            restaurant = %restaurant.name(),
            location = %restaurant.location(),
            "Adding restaurant"
        );

        let index = self.restaurants.len();
        self.restaurants.push(restaurant);
        &mut self.restaurants[index]
    }

    /// Find the first restaurant with the given name
    #[instrument(level = "debug", skip(self))]
    pub fn find_restaurant_by_name(&self, name: &str) -> CatalogResult<&Restaurant> {
        match self.restaurants.iter().find(|r| r.name() == name) {
            Some(restaurant) => Ok(restaurant),
            None => {
                debug!("Restaurant not found");
                Err(Self::not_found(name))
            }
        }
    }

    /// Find the first restaurant with the given name for modification
    #[instrument(level = "debug", skip(self))]
    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> CatalogResult<&mut Restaurant> {
        self.restaurants
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| Self::not_found(name))
    }

    /// Remove the first restaurant with the given name and return it
    #[instrument(skip(self))]
    pub fn remove_restaurant(&mut self, name: &str) -> CatalogResult<Restaurant> {
        let position = match self.restaurants.iter().position(|r| r.name() == name) {
            Some(position) => position,
            None => {
                warn!("Cannot remove unknown restaurant");
                return Err(Self::not_found(name));
            }
        };

        let removed = self.restaurants.remove(position);
        info!(remaining = self.restaurants.len(), "Restaurant removed");
        Ok(removed)
    }

    /// All restaurants in insertion order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants open at the current local time of day
    pub fn open_restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter().filter(|r| r.is_restaurant_open())
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    fn not_found(name: &str) -> CatalogError {
        CatalogError::RestaurantNotFound {
            name: name.to_string(),
        }
    }
}
