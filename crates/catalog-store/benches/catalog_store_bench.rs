use catalog_store::{CatalogStore, InMemoryCatalogStore, PageRequest, ProductUpdate};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::ProductFields;

fn widget(i: i64) -> ProductFields {
    ProductFields::new(format!("Widget {i}"), 9.99, "A widget", i)
}

fn bench_insert(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("catalog_store/insert", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryCatalogStore::new();
                store.insert(widget(1)).await.unwrap();
            });
        });
    });
}

fn bench_list_page(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCatalogStore::new();
    rt.block_on(async {
        for i in 0..1_000 {
            store.insert(widget(i)).await.unwrap();
        }
    });

    c.bench_function("catalog_store/list_page_of_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.list(PageRequest::new(50, 10)).await.unwrap();
            });
        });
    });
}

fn bench_find_and_update(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCatalogStore::new();
    let id = rt.block_on(async {
        for i in 0..999 {
            store.insert(widget(i)).await.unwrap();
        }
        store.insert(widget(999)).await.unwrap().id
    });

    c.bench_function("catalog_store/find_and_update_of_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .find_and_update(id, ProductUpdate::fields(widget(7)))
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_insert, bench_list_page, bench_find_and_update);
criterion_main!(benches);
