//! The menu catalog: an ordered list of named items with per-size prices.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MenuError;

/// Width of the size and price columns in the text rendering.
const COLUMN_WIDTH: usize = 10;

/// A named product with a size label to price mapping.
///
/// Sizes are kept sorted so rendering is stable between calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

impl MenuItem {
    /// An item with no sizes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: BTreeMap::new(),
        }
    }

    /// An item with the given sizes. Prices are validated and sizes must
    /// stay distinct after trimming.
    pub fn with_prices<I, S>(name: impl Into<String>, prices: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut item = Self::new(name);
        for (size, price) in prices {
            item.insert_new_price(size.into(), price)?;
        }
        Ok(item)
    }

    /// Trimmed, validated size label. Replaces any existing price.
    fn insert_price(&mut self, size: &str, price: f64) -> Result<(), MenuError> {
        let size = size.trim();
        if size.is_empty() {
            return Err(MenuError::EmptySize);
        }
        validate_price(price)?;
        self.prices.insert(size.to_string(), price);
        Ok(())
    }

    /// Like `insert_price`, but a size already present is an error.
    fn insert_new_price(&mut self, size: String, price: f64) -> Result<(), MenuError> {
        if self.prices.contains_key(size.trim()) {
            return Err(MenuError::DuplicateSize {
                name: self.name.clone(),
                size: size.trim().to_string(),
            });
        }
        self.insert_price(&size, price)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "-".repeat(COLUMN_WIDTH))?;
        for (size, cost) in &self.prices {
            writeln!(
                f,
                "\t{:>width$}{:>width$.2}",
                size,
                cost,
                width = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), MenuError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(MenuError::InvalidPrice {
            value: price.to_string(),
        })
    }
}

/// Parse a price typed at the prompt.
pub fn parse_price(raw: &str) -> Result<f64, MenuError> {
    let trimmed = raw.trim();
    let price: f64 = trimmed.parse().map_err(|_| MenuError::InvalidPrice {
        value: trimmed.to_string(),
    })?;
    validate_price(price)?;
    Ok(price)
}

/// The ordered collection of menu items for one session.
///
/// Insertion order is display order and names are unique.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from pre-made items, rejecting duplicate names.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Result<Self, MenuError> {
        let mut catalog = Self::new();
        for mut item in items {
            item.name = item.name.trim().to_string();
            if catalog.contains(&item.name) {
                return Err(MenuError::DuplicateItem { name: item.name });
            }
            let prices = std::mem::take(&mut item.prices);
            for (size, price) in prices {
                item.insert_new_price(size, price)?;
            }
            catalog.items.push(item);
        }
        Ok(catalog)
    }

    /// The sample menu: a single Coffee with three sizes.
    pub fn house_menu() -> Self {
        let coffee = MenuItem {
            name: "Coffee".to_string(),
            prices: BTreeMap::from([
                ("small".to_string(), 1.65),
                ("medium".to_string(), 1.80),
                ("large".to_string(), 1.95),
            ]),
        };
        Self { items: vec![coffee] }
    }

    /// Load a start-up menu from a JSON array of items.
    pub fn load_json(path: &Path) -> Result<Self, MenuError> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<MenuItem> = serde_json::from_str(&raw)?;
        let catalog = Self::from_items(items)?;
        debug!(path = %path.display(), items = catalog.len(), "loaded menu file");
        Ok(catalog)
    }

    /// Current items in insertion order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        let name = name.trim();
        self.items.iter().find(|item| item.name == name)
    }

    fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Append a new, unpriced item.
    ///
    /// The name is trimmed and compared exactly (case-sensitive) against
    /// every existing name. On a match the catalog is left unchanged.
    pub fn append(&mut self, raw_name: &str) -> Result<&MenuItem, MenuError> {
        let name = raw_name.trim();
        if self.contains(name) {
            info!(name, "rejected duplicate menu item");
            return Err(MenuError::DuplicateItem {
                name: name.to_string(),
            });
        }

        let index = self.items.len();
        self.items.push(MenuItem::new(name));
        debug!(name, position = index, "appended menu item");
        Ok(&self.items[index])
    }

    /// Set (or replace) the price of one size of an existing item.
    pub fn set_price(&mut self, name: &str, size: &str, price: f64) -> Result<(), MenuError> {
        let name = name.trim();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| MenuError::UnknownItem {
                name: name.to_string(),
            })?;
        item.insert_price(size, price)?;
        debug!(name, size = size.trim(), price, "set menu price");
        Ok(())
    }

    /// Text rendering of every item, in order.
    pub fn render(&self) -> String {
        self.items.iter().map(ToString::to_string).collect()
    }
}
