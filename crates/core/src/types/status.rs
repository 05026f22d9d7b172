//! Enumerated tags and states shared by the catalog, cart and checkout.

use serde::{Deserialize, Serialize};

/// Ordering page a cart and catalog belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shop {
    /// Clubhouse food and drink menu.
    Menu,
    /// Pro shop golf goods.
    ProShop,
}

impl Shop {
    /// All shops, in navigation order.
    pub const ALL: [Self; 2] = [Self::Menu, Self::ProShop];

    /// Categories offered by this shop, in the order the filter bar shows them.
    #[must_use]
    pub const fn categories(self) -> &'static [Category] {
        match self {
            Self::Menu => &[Category::Drinks, Category::Food, Category::Snacks],
            Self::ProShop => &[
                Category::Accessories,
                Category::Equipment,
                Category::Merch,
            ],
        }
    }
}

impl std::fmt::Display for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::ProShop => write!(f, "pro-shop"),
        }
    }
}

impl std::str::FromStr for Shop {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Self::Menu),
            "pro-shop" | "pro_shop" => Ok(Self::ProShop),
            _ => Err(format!("invalid shop: {s}")),
        }
    }
}

/// Catalog category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Drinks,
    Food,
    Snacks,
    Accessories,
    Equipment,
    Merch,
}

impl Category {
    /// The shop whose catalog carries this category.
    #[must_use]
    pub const fn shop(self) -> Shop {
        match self {
            Self::Drinks | Self::Food | Self::Snacks => Shop::Menu,
            Self::Accessories | Self::Equipment | Self::Merch => Shop::ProShop,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Drinks => "Drinks",
            Self::Food => "Food",
            Self::Snacks => "Snacks",
            Self::Accessories => "Accessories",
            Self::Equipment => "Equipment",
            Self::Merch => "Merch",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drinks" => Ok(Self::Drinks),
            "food" => Ok(Self::Food),
            "snacks" => Ok(Self::Snacks),
            "accessories" => Ok(Self::Accessories),
            "equipment" => Ok(Self::Equipment),
            "merch" => Ok(Self::Merch),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// How a placed order reaches the golfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    /// Collected at the clubhouse counter.
    #[default]
    Pickup,
    /// Brought out to the golfer on the course.
    Delivery,
}

impl std::fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for Fulfillment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            _ => Err(format!("invalid fulfillment: {s}")),
        }
    }
}

/// Whether a cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Empty,
    NonEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_round_trips_through_str() {
        for shop in Shop::ALL {
            assert_eq!(shop.to_string().parse::<Shop>(), Ok(shop));
        }
        assert!("range".parse::<Shop>().is_err());
    }

    #[test]
    fn test_categories_belong_to_their_shop() {
        for shop in Shop::ALL {
            for category in shop.categories() {
                assert_eq!(category.shop(), shop);
            }
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Drinks".parse::<Category>(), Ok(Category::Drinks));
        assert_eq!("merch".parse::<Category>(), Ok(Category::Merch));
        assert!("Balls".parse::<Category>().is_err());
    }

    #[test]
    fn test_fulfillment_parse() {
        assert_eq!("pickup".parse::<Fulfillment>(), Ok(Fulfillment::Pickup));
        assert_eq!("delivery".parse::<Fulfillment>(), Ok(Fulfillment::Delivery));
        assert!("drone".parse::<Fulfillment>().is_err());
        assert_eq!(Fulfillment::default(), Fulfillment::Pickup);
    }
}
