use std::fmt::Write;

use crate::api::Breed;
use crate::detail::{display_image_url, temperament_traits};
use crate::state::collections::{CollectionItem, CollectionType, CollectionsState, UNKNOWN_GROUP};
use crate::state::{AppState, HomeView};

/// Tab strip, e.g. `[All Breeds]  Wish List (2)  Ready to Adopt (0)  Owned (1)`.
pub fn render_tabs(collections: &CollectionsState) -> String {
    let mut tabs = vec![tab("All Breeds", collections.active_collection.is_none())];
    for collection in CollectionType::ALL {
        let label = format!("{} ({})", collection.label(), collections.items(collection).len());
        tabs.push(tab(&label, collections.active_collection == Some(collection)));
    }
    tabs.join("  ")
}

fn tab(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

/// The home screen for the current state.
pub fn render_home(state: &AppState) -> String {
    let mut out = render_tabs(&state.collections);
    out.push('\n');

    match state.home_view() {
        HomeView::Loading => out.push_str("Loading..."),
        HomeView::Failed(message) => {
            let _ = write!(out, "! {}", message);
        }
        HomeView::Collection { collection, items } => {
            out.push_str(&render_collection(collection, items));
        }
        HomeView::NoResults { query } => {
            let _ = write!(
                out,
                "No results found for '{}'.\nTry a different search term or browse all breeds.",
                query
            );
        }
        HomeView::Breeds {
            items,
            pages,
            current_page,
            total_pages,
        } => {
            for breed in items {
                let memberships = state.collections.memberships(breed.id);
                let _ = writeln!(out, "{}", breed_line(breed, &memberships));
            }
            if let Some(pages) = pages {
                let buttons: Vec<String> = pages
                    .map(|p| {
                        if p == current_page {
                            format!("[{}]", p + 1)
                        } else {
                            (p + 1).to_string()
                        }
                    })
                    .collect();
                let _ = write!(
                    out,
                    "< {} >  (page {} of {})",
                    buttons.join(" "),
                    current_page + 1,
                    total_pages
                );
            }
        }
    }

    out
}

fn breed_line(breed: &Breed, memberships: &[CollectionType]) -> String {
    let marks: String = memberships
        .iter()
        .map(|c| match c {
            CollectionType::Wishlist => '♥',
            CollectionType::ReadyToAdopt => '🐾',
            CollectionType::Owned => '⌂',
        })
        .collect();
    format!(
        "{:>4}  {:<32} {:<12} {}  {}",
        breed.id,
        breed.name,
        breed.group().unwrap_or(UNKNOWN_GROUP),
        breed.life_span,
        marks
    )
}

fn render_collection(collection: CollectionType, items: &[CollectionItem]) -> String {
    if items.is_empty() {
        return format!(
            "No dogs in this collection yet.\nBrowse the breeds and add some to your {} collection.",
            collection
        );
    }

    let mut out = String::new();
    if collection == CollectionType::ReadyToAdopt {
        let _ = writeln!(out, "Adopt Now ({} breeds): type `adopt`", items.len());
    }
    for item in items {
        let _ = writeln!(out, "{:>4}  {:<32} {}", item.id, item.name, item.breed_group);
    }
    out.trim_end().to_string()
}

/// Full description of one breed, including where it is collected.
pub fn render_breed_detail(breed: &Breed, collections: &CollectionsState, cdn_base: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", breed.name, breed.id);
    if let Some(group) = breed.group() {
        let _ = writeln!(out, "Group:       {}", group);
    }
    let _ = writeln!(out, "Life span:   {}", breed.life_span);
    let _ = writeln!(out, "Origin:      {}", breed.origin.as_deref().filter(|o| !o.is_empty()).unwrap_or("Unknown"));
    let _ = writeln!(
        out,
        "Weight:      {} kg / {} lbs",
        breed.weight.metric, breed.weight.imperial
    );
    let _ = writeln!(
        out,
        "Height:      {} cm / {} in",
        breed.height.metric, breed.height.imperial
    );
    if let Some(bred_for) = breed.bred_for.as_deref().filter(|b| !b.is_empty()) {
        let _ = writeln!(out, "Bred for:    {}", bred_for);
    }
    let traits = temperament_traits(breed);
    if !traits.is_empty() {
        let _ = writeln!(out, "Temperament: {}", traits.join(" · "));
    }
    match display_image_url(breed, cdn_base) {
        Some(url) => {
            let _ = writeln!(out, "Image:       {}", url);
        }
        None => out.push_str("Image:       No image available\n"),
    }

    let memberships: Vec<&str> = collections
        .memberships(breed.id)
        .into_iter()
        .map(|c| c.label())
        .collect();
    if !memberships.is_empty() {
        let _ = writeln!(out, "In:          {}", memberships.join(", "));
    }

    out.trim_end().to_string()
}
