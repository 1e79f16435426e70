//! End-to-end catalog flow over the filesystem backend, covering the
//! full create / list / get / update / delete lifecycle and the on-disk
//! document format.

use prodz::{FsBackend, ProdzError, ProductDraft, ProductPatch, ProductStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, ProductStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("products.json"));
    let store = ProductStore::with_backend(backend).unwrap();
    (dir, store)
}

fn test_draft() -> ProductDraft {
    ProductDraft {
        title: "producto prueba".to_string(),
        description: "Este es un producto prueba".to_string(),
        price: 200.0,
        img: "Sin imagen".to_string(),
        code: "abc123".to_string(),
        stock: 25,
    }
}

#[test]
fn test_full_catalog_lifecycle() {
    let (_dir, mut store) = setup();

    // Fresh store lists an empty catalog
    assert!(store.list_products().unwrap().is_empty());

    // Create: first record gets id 1 and the given fields
    let added = store.add_product(test_draft()).unwrap();
    assert_eq!(added.id, 1);
    assert_eq!(added.title, "producto prueba");
    assert_eq!(added.description, "Este es un producto prueba");
    assert_eq!(added.price, 200.0);
    assert_eq!(added.img, "Sin imagen");
    assert_eq!(added.code, "abc123");
    assert_eq!(added.stock, 25);

    let products = store.list_products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0], added);

    // Get by id round-trips the record
    assert_eq!(store.get_product(1).unwrap(), added);

    // Update: price changes, everything else survives
    let updated = store
        .update_product(
            1,
            ProductPatch {
                price: Some(250.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.price, 250.0);
    assert_eq!(updated.title, "producto prueba");

    // Delete: catalog is empty again, second delete fails
    store.delete_product(1).unwrap();
    assert!(store.list_products().unwrap().is_empty());
    assert!(matches!(
        store.delete_product(1),
        Err(ProdzError::ProductNotFound(1))
    ));
}

#[test]
fn test_on_disk_document_is_a_pretty_json_array() {
    let (dir, mut store) = setup();
    store.add_product(test_draft()).unwrap();

    let raw = fs::read_to_string(dir.path().join("products.json")).unwrap();

    // Two-space pretty printing
    assert!(raw.starts_with("[\n  {"));

    // Exactly the record fields plus id, with id serialized first
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &parsed.as_array().unwrap()[0];
    let mut keys: Vec<&str> = record
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["code", "description", "id", "img", "price", "stock", "title"]
    );
    assert!(raw.find("\"id\"").unwrap() < raw.find("\"title\"").unwrap());
    assert_eq!(record["id"], 1);
    assert_eq!(record["code"], "abc123");
}

#[test]
fn test_fresh_store_continues_the_id_sequence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");

    {
        let mut store = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
        store.add_product(test_draft()).unwrap();
        let mut second = test_draft();
        second.code = "def456".to_string();
        assert_eq!(store.add_product(second).unwrap().id, 2);
    }

    // A new instance over the same document seeds from the existing max
    let mut reopened = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
    let mut third = test_draft();
    third.code = "ghi789".to_string();
    assert_eq!(reopened.add_product(third).unwrap().id, 3);
    assert_eq!(reopened.list_products().unwrap().len(), 3);
}

#[test]
fn test_duplicate_code_rejected_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");

    {
        let mut store = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
        store.add_product(test_draft()).unwrap();
    }

    // Uniqueness is enforced against the document, not instance memory
    let mut reopened = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
    assert!(matches!(
        reopened.add_product(test_draft()),
        Err(ProdzError::DuplicateCode(_))
    ));
}

#[test]
fn test_corrupt_document_surfaces_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    fs::write(&path, "{\"not\": \"an array\"}").unwrap();

    let result = ProductStore::with_backend(FsBackend::new(&path));
    assert!(matches!(result, Err(ProdzError::Serialization(_))));
}

#[test]
fn test_updates_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");

    {
        let mut store = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
        let added = store.add_product(test_draft()).unwrap();
        store
            .update_product(
                added.id,
                ProductPatch {
                    stock: Some(7),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    let reopened = ProductStore::with_backend(FsBackend::new(&path)).unwrap();
    assert_eq!(reopened.get_product(1).unwrap().stock, 7);
}
