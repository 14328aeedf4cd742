use super::item::{Item, ItemId, NewItem, Unit};
use log::*;

/// Items with stock strictly below this are considered low stock.
///
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 20.0;

/// Owns the item collection and the id counter.
///
/// Ids are handed out in increasing order and never reused, even after the
/// item holding one is deleted. Insertion order is preserved; deletions remove
/// in place.
///
#[derive(Clone, Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore::new()
    }
}

impl ItemStore {
    /// Return an empty store whose first item will receive id 1.
    ///
    pub fn new() -> Self {
        ItemStore {
            items: vec![],
            next_id: 1,
        }
    }

    /// Return a store pre-filled with the given items, ids assigned in order.
    ///
    pub fn seeded(seed: impl IntoIterator<Item = NewItem>) -> Self {
        let mut store = ItemStore::new();
        for candidate in seed {
            store.add_item(candidate);
        }
        store
    }

    /// Append a new item built from the candidate and return its id.
    ///
    pub fn add_item(&mut self, candidate: NewItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        debug!("Adding item {} '{}'", id, candidate.name);
        self.items.push(Item {
            id,
            name: candidate.name,
            stock: candidate.stock,
            unit: candidate.unit,
        });
        id
    }

    /// Remove the item with the given id. Returns false when no such item
    /// exists, leaving the collection untouched.
    ///
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                debug!("Deleted item {} '{}'", removed.id, removed.name);
                true
            }
            None => false,
        }
    }

    /// Return every item in insertion order.
    ///
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Iterate the items whose stock is strictly below `threshold`, in order.
    ///
    pub fn list_low_stock(&self, threshold: f64) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| item.is_low_stock(threshold))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next added item will receive.
    ///
    pub fn next_id(&self) -> ItemId {
        ItemId(self.next_id)
    }
}

/// Starter inventory shown on a fresh launch.
///
pub fn demo_items() -> Vec<NewItem> {
    vec![
        NewItem::new("biscuit", 5.0, Unit::Packets),
        NewItem::new("chips", 10.0, Unit::Packets),
        NewItem::new("chocolate", 15.0, Unit::Packets),
        NewItem::new("cold drinks", 20.0, Unit::Litre),
        NewItem::new("wheat", 25.0, Unit::Kg),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn random_candidate<R: Rng>(rng: &mut R) -> NewItem {
        let unit = *Unit::ALL.choose(rng).unwrap();
        NewItem::new(Word().fake::<String>(), rng.gen_range(0.5..40.0), unit)
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn new_store_starts_at_one() {
        let mut store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ItemId(1));
        let id = store.add_item(NewItem::new("rice", 3.0, Unit::Kg));
        assert_eq!(id, ItemId(1));
        assert_eq!(store.next_id(), ItemId(2));
    }

    #[test]
    fn add_item_appends_with_next_id() {
        let mut rng = rand::thread_rng();
        let mut store = ItemStore::seeded(demo_items());
        for _ in 0..50 {
            let before = store.len();
            let max_id = store.list_all().iter().map(|item| item.id).max();
            let candidate = random_candidate(&mut rng);
            let id = store.add_item(candidate.clone());

            assert_eq!(store.len(), before + 1);
            assert_eq!(id, ItemId(max_id.map_or(1, |max| max.0 + 1)));
            let last = store.list_all().last().unwrap();
            assert_eq!(last.id, id);
            assert_eq!(last.name, candidate.name);
            assert_eq!(last.stock, candidate.stock);
            assert_eq!(last.unit, candidate.unit);
        }
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = ItemStore::seeded(demo_items());
        assert!(store.delete_item(ItemId(5)));
        let id = store.add_item(NewItem::new("salt", 3.0, Unit::Kg));
        assert_eq!(id, ItemId(6));
    }

    #[test]
    fn low_stock_is_ordered_subsequence() {
        let mut rng = rand::thread_rng();
        let mut store = ItemStore::new();
        for _ in 0..100 {
            store.add_item(random_candidate(&mut rng));
        }

        let expected: Vec<&Item> = store
            .list_all()
            .iter()
            .filter(|item| item.stock < 20.0)
            .collect();
        let low: Vec<&Item> = store.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD).collect();
        assert_eq!(low, expected);
    }

    #[test]
    fn low_stock_threshold_is_exclusive() {
        let store = ItemStore::seeded(demo_items());
        let stocks: Vec<f64> = store.list_low_stock(20.0).map(|item| item.stock).collect();
        assert_eq!(stocks, vec![5.0, 10.0, 15.0]);

        let stocks: Vec<f64> = store.list_low_stock(10.0).map(|item| item.stock).collect();
        assert_eq!(stocks, vec![5.0]);
    }

    #[test]
    fn delete_present_id_removes_only_that_item() {
        let mut store = ItemStore::seeded(demo_items());
        assert!(store.delete_item(ItemId(3)));
        assert_eq!(ids(store.list_all()), vec![1, 2, 4, 5]);
        assert!(store.get(ItemId(3)).is_none());
        assert_eq!(store.get(ItemId(4)).unwrap().name, "cold drinks");
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut store = ItemStore::seeded(demo_items());
        let before = store.list_all().to_vec();
        assert!(!store.delete_item(ItemId(42)));
        assert_eq!(store.list_all(), before.as_slice());
        assert_eq!(store.next_id(), ItemId(6));
    }

    #[test]
    fn list_all_is_idempotent() {
        let store = ItemStore::seeded(demo_items());
        let first = store.list_all().to_vec();
        let second = store.list_all().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_scenario_end_to_end() {
        let mut store = ItemStore::seeded(demo_items());
        assert_eq!(ids(store.list_all()), vec![1, 2, 3, 4, 5]);

        let low: Vec<u64> = store.list_low_stock(20.0).map(|item| item.id.0).collect();
        assert_eq!(low, vec![1, 2, 3]);

        let id = store.add_item(NewItem::new("salt", 3.0, Unit::Kg));
        assert_eq!(id, ItemId(6));
        assert_eq!(store.list_low_stock(20.0).count(), 4);
    }
}
