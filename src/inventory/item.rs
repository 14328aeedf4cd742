use std::fmt;
use std::str::FromStr;

/// Identifier assigned to an item by the store.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Units of measure an item can be stocked in.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Kg,
    Litre,
    Packets,
}

impl Unit {
    /// Every selectable unit, in picker order.
    ///
    pub const ALL: [Unit; 3] = [Unit::Kg, Unit::Litre, Unit::Packets];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Litre => "litre",
            Unit::Packets => "packets",
        }
    }

    /// Position of this unit within `Unit::ALL`.
    ///
    pub fn index(&self) -> usize {
        match self {
            Unit::Kg => 0,
            Unit::Litre => 1,
            Unit::Packets => 2,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a unit label is outside the fixed set.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit '{0}'")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kg" => Ok(Unit::Kg),
            "litre" => Ok(Unit::Litre),
            "packets" => Ok(Unit::Packets),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// A validated candidate waiting to be admitted to the store.
///
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub stock: f64,
    pub unit: Unit,
}

impl NewItem {
    pub fn new(name: impl Into<String>, stock: f64, unit: Unit) -> Self {
        NewItem {
            name: name.into(),
            stock,
            unit,
        }
    }
}

/// One inventory line. Items are immutable once created.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub stock: f64,
    pub unit: Unit,
}

impl Item {
    /// Whether stock is strictly below the given threshold.
    ///
    pub fn is_low_stock(&self, threshold: f64) -> bool {
        self.stock < threshold
    }

    /// Render the quantity as "<stock> <unit>", dropping a zero fraction.
    ///
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.stock, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("kg".parse::<Unit>(), Ok(Unit::Kg));
        assert_eq!(" litre ".parse::<Unit>(), Ok(Unit::Litre));
        assert_eq!("packets".parse::<Unit>(), Ok(Unit::Packets));
        for text in ["ltr", "KG", "Litre", "PACKETS", "boxes"] {
            assert_eq!(text.parse::<Unit>(), Err(UnknownUnit(text.to_string())));
        }
    }

    #[test]
    fn test_unit_index_matches_all() {
        for (i, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), i);
        }
        assert_eq!(Unit::default(), Unit::Kg);
    }

    #[test]
    fn test_item_is_low_stock() {
        let item = Item {
            id: ItemId(1),
            name: "rice".to_string(),
            stock: 19.5,
            unit: Unit::Kg,
        };
        assert!(item.is_low_stock(20.0));
        assert!(!item.is_low_stock(19.5));
    }

    #[test]
    fn test_quantity_label() {
        let item = Item {
            id: ItemId(2),
            name: "milk".to_string(),
            stock: 15.0,
            unit: Unit::Litre,
        };
        assert_eq!(item.quantity_label(), "15 litre");

        let item = Item { stock: 2.5, ..item };
        assert_eq!(item.quantity_label(), "2.5 litre");
    }
}
