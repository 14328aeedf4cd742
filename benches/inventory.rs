//! Benchmarks for the item store.
//!
//! These benchmarks measure insertion and the low-stock filter over stores of
//! a few thousand items.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stock_tui::inventory::{demo_items, ItemStore, NewItem, Unit, DEFAULT_LOW_STOCK_THRESHOLD};

fn large_store(size: usize) -> ItemStore {
    ItemStore::seeded((0..size).map(|i| {
        NewItem::new(format!("item {}", i), (i % 40) as f64 + 0.5, Unit::Packets)
    }))
}

fn bench_add_items(c: &mut Criterion) {
    c.bench_function("store_add_1000_items", |b| {
        b.iter(|| {
            let mut store = ItemStore::new();
            for i in 0..1000 {
                store.add_item(NewItem::new("rice", black_box(i as f64), Unit::Kg));
            }
            store
        })
    });
}

fn bench_list_low_stock(c: &mut Criterion) {
    let store = large_store(5000);

    c.bench_function("store_list_low_stock_5000", |b| {
        b.iter(|| {
            store
                .list_low_stock(black_box(DEFAULT_LOW_STOCK_THRESHOLD))
                .count()
        })
    });
}

fn bench_delete_item(c: &mut Criterion) {
    c.bench_function("store_delete_from_demo", |b| {
        b.iter(|| {
            let mut store = ItemStore::seeded(demo_items());
            let id = store.list_all()[2].id;
            store.delete_item(black_box(id))
        })
    });
}

criterion_group!(benches, bench_add_items, bench_list_low_stock, bench_delete_item);
criterion_main!(benches);
