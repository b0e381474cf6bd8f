use amanti_core::{
    InMemoryItemRegistry, ItemDraft, ItemKind, ItemPatch, ItemRegistry, ItemStatus,
};
use uuid::Uuid;

fn draft(title: &str, location: &str) -> ItemDraft {
    ItemDraft {
        title: title.to_string(),
        description: "plain description".to_string(),
        category: "Other".to_string(),
        location: location.to_string(),
        reported_on: "2024-05-01".to_string(),
        contact_info: "owner@example.com".to_string(),
        image_urls: None,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let mut registry = InMemoryItemRegistry::new();

    let created = registry.create(ItemKind::Lost, draft("Red Wallet", "Central Park"));
    let loaded = registry.get(ItemKind::Lost, created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.status, ItemStatus::Lost);
    assert!(!loaded.created_at.is_empty());
}

#[test]
fn created_found_item_gets_found_status() {
    let mut registry = InMemoryItemRegistry::new();

    let created = registry.create(ItemKind::Found, draft("iPhone 13", "Bus stop"));
    assert_eq!(created.status, ItemStatus::Found);
    assert_eq!(created.kind, ItemKind::Found);
}

#[test]
fn missing_id_is_absent_not_an_error() {
    let mut registry = InMemoryItemRegistry::new();
    let unknown = Uuid::new_v4();

    assert!(registry.get(ItemKind::Lost, unknown).is_none());
    assert!(registry
        .update(ItemKind::Lost, unknown, ItemPatch::default())
        .is_none());
    assert!(!registry.remove(ItemKind::Lost, unknown));
}

#[test]
fn empty_patch_leaves_record_unchanged() {
    let mut registry = InMemoryItemRegistry::new();
    let created = registry.create(ItemKind::Lost, draft("Keys", "Lobby"));

    let updated = registry
        .update(ItemKind::Lost, created.id, ItemPatch::default())
        .unwrap();

    assert_eq!(updated, created);
}

#[test]
fn update_never_touches_id_or_created_at() {
    let mut registry = InMemoryItemRegistry::new();
    let created = registry.create(ItemKind::Found, draft("Umbrella", "Cafe"));

    let patch = ItemPatch {
        title: Some("Black Umbrella".to_string()),
        description: Some("wooden handle".to_string()),
        category: Some("Other".to_string()),
        location: Some("Cafe entrance".to_string()),
        reported_on: Some("2024-05-02".to_string()),
        contact_info: Some("finder@example.com".to_string()),
        image_urls: Some(vec!["https://img.example/umbrella.jpg".to_string()]),
        status: Some(ItemStatus::Claimed),
    };
    let updated = registry.update(ItemKind::Found, created.id, patch).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.kind, created.kind);
    assert_eq!(updated.title, "Black Umbrella");
    assert_eq!(updated.status, ItemStatus::Claimed);
}

#[test]
fn status_update_keeps_every_other_field() {
    let mut registry = InMemoryItemRegistry::new();
    let created = registry.create(ItemKind::Lost, draft("Passport", "Airport"));

    let patch = ItemPatch {
        status: Some(ItemStatus::Returned),
        ..ItemPatch::default()
    };
    registry.update(ItemKind::Lost, created.id, patch).unwrap();

    let loaded = registry.get(ItemKind::Lost, created.id).unwrap();
    assert_eq!(loaded.status, ItemStatus::Returned);
    assert_eq!(loaded.title, created.title);
    assert_eq!(loaded.description, created.description);
    assert_eq!(loaded.category, created.category);
    assert_eq!(loaded.location, created.location);
    assert_eq!(loaded.reported_on, created.reported_on);
    assert_eq!(loaded.contact_info, created.contact_info);
    assert_eq!(loaded.image_urls, created.image_urls);
}

#[test]
fn delete_then_get_is_absent() {
    let mut registry = InMemoryItemRegistry::new();
    let created = registry.create(ItemKind::Found, draft("Wallet", "Platform 2"));

    assert!(registry.remove(ItemKind::Found, created.id));
    assert!(registry.get(ItemKind::Found, created.id).is_none());
}

#[test]
fn delete_unknown_id_leaves_collection_untouched() {
    let mut registry = InMemoryItemRegistry::new();
    registry.create(ItemKind::Found, draft("Scarf", "Tram"));

    assert!(!registry.remove(ItemKind::Found, Uuid::new_v4()));
    assert_eq!(registry.get_all(ItemKind::Found).len(), 1);
}

#[test]
fn get_all_preserves_creation_order() {
    let mut registry = InMemoryItemRegistry::new();
    let first = registry.create(ItemKind::Found, draft("iPhone 13", "Bench"));
    let second = registry.create(ItemKind::Found, draft("Wallet", "Bench"));

    let all = registry.get_all(ItemKind::Found);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn delete_preserves_order_of_remaining_records() {
    let mut registry = InMemoryItemRegistry::new();
    let a = registry.create(ItemKind::Lost, draft("A", "x"));
    let b = registry.create(ItemKind::Lost, draft("B", "x"));
    let c = registry.create(ItemKind::Lost, draft("C", "x"));

    assert!(registry.remove(ItemKind::Lost, b.id));

    let remaining: Vec<_> = registry
        .get_all(ItemKind::Lost)
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(remaining, vec![a.id, c.id]);
}

#[test]
fn image_urls_default_to_empty_and_can_be_supplied() {
    let mut registry = InMemoryItemRegistry::new();

    let bare = registry.create(ItemKind::Lost, draft("Gloves", "Park"));
    assert!(bare.image_urls.is_empty());

    let mut with_images = draft("Camera", "Park");
    with_images.image_urls = Some(vec!["https://img.example/cam.jpg".to_string()]);
    let created = registry.create(ItemKind::Lost, with_images);
    assert_eq!(created.image_urls.len(), 1);
}
