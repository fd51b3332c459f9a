//! vidmark: a local catalog of saved video bookmarks.
//!
//! Runs a console walkthrough of the catalog over an in-memory store. The
//! `vidmark-rpc` binary is the long-running entry point.

use vidmark::app::App;
use vidmark::logging;
use vidmark::managers::bookmark_store::BookmarkStoreTrait;
use vidmark::services::video_metadata;
use vidmark::types::bookmark::BookmarkDraft;

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_visible(app: &App) {
    for b in app.visible() {
        println!(
            "    [{}] {} ({}, {}★)",
            b.id,
            b.title,
            b.category,
            b.rating
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("warn");
    println!();
    println!("  vidmark v{} demo", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::in_memory()?;

    section("Seeded catalog");
    println!("  Categories: {}", app.store().categories().join(", "));
    let assignable: Vec<&str> = app.store().category_manager().assignable().collect();
    println!("  Assignable: {}", assignable.join(", "));
    print_visible(&app);

    section("Add a bookmark");
    let url = "https://youtu.be/dQw4w9WgXcQ";
    if let Some(meta) = video_metadata::inspect(url) {
        println!("  Video id {} -> {}", meta.video_id, meta.thumbnail);
    }
    let id = app.store_mut().add_bookmark(
        BookmarkDraft::new("Classic Music Video", url)
            .with_channel("Rick Astley")
            .with_description("The official music video")
            .with_category("Music")
            .with_rating(5),
    )?;
    println!("  Added {}", id);

    section("Filter by Music, then search \"piano\"");
    app.select_category("Music");
    print_visible(&app);
    app.set_search_term("piano");
    print_visible(&app);
    app.clear_search();

    section("Rate and delete");
    let stars = app.store_mut().toggle_rating("3", 3);
    println!("  Clicking star 3 on a 3-star bookmark -> {:?}", stars);
    app.store_mut().delete_bookmark(&id);
    println!("  {} bookmarks left", app.store().bookmark_count());

    section("Delete category Tech");
    let outcome = app.delete_category("Tech");
    println!("  {:?}", outcome);
    app.select_category("Entertainment");
    print_visible(&app);

    app.flush()?;
    app.shutdown();
    println!();
    println!("  ✓ Done");
    Ok(())
}
