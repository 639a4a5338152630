use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use addrbook::prelude::*;
use tempfile::TempDir;

// Helper to create a book prepopulated with `n` contacts in-memory.
fn book_with_n(n: usize) -> AddressBook {
    (0..n)
        .map(|i| {
            Contact::new(
                format!("User{i}"),
                format!("0888549{i:04}"),
                format!("user{i}@yahoo.com"),
                if i % 2 == 0 {
                    "friends".to_string()
                } else {
                    "work".to_string()
                },
            )
        })
        .collect()
}

fn bench_save_load(c: &mut Criterion) {
    let book = book_with_n(5_000);

    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("contacts.json");
    let json = JsonStore::new(path.to_str().expect("utf-8 path")).expect("store");

    c.bench_function("json_save_5k", |b| {
        b.iter(|| json.save(black_box(&book)).expect("save"))
    });

    json.save(&book).expect("seed");
    c.bench_function("json_load_5k", |b| {
        b.iter(|| black_box(json.load().expect("load")))
    });

    let mem = MemStore::new();
    c.bench_function("mem_save_load_5k", |b| {
        b.iter(|| {
            mem.save(black_box(&book)).expect("save");
            black_box(mem.load().expect("load"))
        })
    });
}

criterion_group!(benches, bench_save_load);
criterion_main!(benches);
