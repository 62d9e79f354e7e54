use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::{CatalogError, CatalogResult, Item};

/// A restaurant with its opening hours and menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<Item>,
}

impl Restaurant {
    /// Create a restaurant with an empty menu
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Replace the opening hours
    pub fn set_hours(&mut self, opening_time: NaiveTime, closing_time: NaiveTime) {
        self.opening_time = opening_time;
        self.closing_time = closing_time;
    }

    /// Menu items in the order they were added
    pub fn menu(&self) -> &[Item] {
        &self.menu
    }

    /// First menu item with the given name
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.menu.iter().find(|item| item.name() == name)
    }

    /// Append an item to the menu. Duplicate names are accepted.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = Item::new(name, price);
        debug!(restaurant = %self.name, item = %item.name(), price, "Adding item to menu");
        self.menu.push(item);
    }

    /// Remove the first menu item with the given name and return it
    pub fn remove_from_menu(&mut self, name: &str) -> CatalogResult<Item> {
        let position = self
            .menu
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| CatalogError::ItemNotFound {
                name: name.to_string(),
            })?;

        debug!(restaurant = %self.name, item = %name, "Removing item from menu");
        Ok(self.menu.remove(position))
    }

    /// Check whether the restaurant is open at the current local time of day
    pub fn is_restaurant_open(&self) -> bool {
        self.is_open_at(Local::now().time())
    }

    /// Check whether `time` falls strictly between opening and closing time,
    /// i.e. `time > opening && time < closing`.
    ///
    /// Extends that strict check to windows that run past midnight: when the
    /// closing time is earlier than the opening time, the restaurant is open
    /// after opening or before closing. Both boundaries stay excluded.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.opening_time <= self.closing_time {
            time > self.opening_time && time < self.closing_time
        } else {
            time > self.opening_time || time < self.closing_time
        }
    }

    /// Total cost of the selected items.
    ///
    /// Every selected item is looked up by name in the live menu and priced
    /// at the menu's current price. Fails on the first selected item that is
    /// no longer on the menu; no partial total is returned.
    pub fn order_cost(&self, selected: &[Item]) -> CatalogResult<u64> {
        let mut total = 0u64;
        for selected_item in selected {
            let item = self.find_item_by_name(selected_item.name()).ok_or_else(|| {
                warn!(
                    restaurant = %self.name,
                    item = %selected_item.name(),
                    "Selected item is no longer on the menu"
                );
                CatalogError::ItemNotFound {
                    name: selected_item.name().to_string(),
                }
            })?;
            total += u64::from(item.price());
        }
        Ok(total)
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.opening_time)?;
        writeln!(f, "Closing time: {}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n{}", item)?;
        }
        Ok(())
    }
}
