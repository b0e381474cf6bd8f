//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `amanti_core` linkage.
//! - Exercise create and search end-to-end on a throwaway registry.

use amanti_core::{InMemoryItemRegistry, ItemDraft, ItemService};

fn main() {
    println!("amanti_core ping={}", amanti_core::ping());
    println!("amanti_core version={}", amanti_core::core_version());

    let mut service = ItemService::new(InMemoryItemRegistry::new());
    service.create_lost_item(demo_draft(
        "Red Wallet",
        "leather, small",
        "Bags",
        "Central Park",
    ));
    service.create_found_item(demo_draft(
        "Black Umbrella",
        "wooden handle",
        "Other",
        "Cafe entrance",
    ));

    let query = std::env::args().nth(1).unwrap_or_else(|| "wallet".to_string());
    let matches = service.search_items(&query);
    println!(
        "search query={query:?} lost_matches={} found_matches={}",
        matches.lost_items.len(),
        matches.found_items.len()
    );
    for item in matches.lost_items.iter().chain(matches.found_items.iter()) {
        println!("  [{:?}] {} @ {}", item.status, item.title, item.location);
    }
}

fn demo_draft(title: &str, description: &str, category: &str, location: &str) -> ItemDraft {
    ItemDraft {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        reported_on: "2024-05-01".to_string(),
        contact_info: "demo@amanti.app".to_string(),
        image_urls: None,
    }
}
