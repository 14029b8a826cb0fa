use sift::store::{MemoryStore, ObjectStore};

#[tokio::test]
async fn put_then_get() {
    let store = MemoryStore::new();

    assert!(store.put("avatars", "42.png", vec![1, 2, 3]).await.unwrap());
    assert_eq!(store.get("avatars", "42.png").await.unwrap(), [1, 2, 3]);
}

#[tokio::test]
async fn put_does_not_overwrite() {
    let store = MemoryStore::new();

    assert!(store.put("avatars", "42.png", vec![1]).await.unwrap());
    assert!(!store.put("avatars", "42.png", vec![2]).await.unwrap());
    assert_eq!(store.get("avatars", "42.png").await.unwrap(), [1]);
}

#[tokio::test]
async fn get_missing_is_record_not_found() {
    let store = MemoryStore::new();
    let err = store.get("avatars", "nope.png").await.unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: avatars/nope.png");
}

#[tokio::test]
async fn delete_reports_whether_anything_was_removed() {
    let store = MemoryStore::new();
    store.put("docs", "a.pdf", vec![0]).await.unwrap();

    assert!(store.delete("docs", "a.pdf").await.unwrap());
    assert!(!store.delete("docs", "a.pdf").await.unwrap());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn directories_namespace_keys() {
    let store = MemoryStore::new();

    assert!(store.put("a", "x", vec![1]).await.unwrap());
    assert!(store.put("b", "x", vec![2]).await.unwrap());
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn usable_as_trait_object() {
    let store: Box<dyn ObjectStore> = Box::new(MemoryStore::new());

    assert!(store.put("d", "k", b"data".to_vec()).await.unwrap());
    assert_eq!(store.get("d", "k").await.unwrap(), b"data");
}
