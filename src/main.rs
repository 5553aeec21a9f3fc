// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use goods_catalog::{denormalize, CatalogSession, RecordStore};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "list" {
        // Plain stdout mode
        run_list(args.get(2).map(String::as_str))?;
    } else {
        // UI mode (default); optional fixtures directory as first argument
        run_ui_mode(args.get(1).map(String::as_str))?;
    }

    Ok(())
}

/// Build the store from the embedded fixtures, or from a JSON directory
fn load_store(fixtures_dir: Option<&str>) -> Result<RecordStore> {
    match fixtures_dir {
        Some(dir) => RecordStore::from_json_dir(dir),
        None => Ok(RecordStore::with_fixtures()),
    }
}

fn run_list(fixtures_dir: Option<&str>) -> Result<()> {
    let store = load_store(fixtures_dir)?;
    let goods = denormalize(&store);
    let session = CatalogSession::new(goods);

    println!("Product Categories");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<4} {:<16} {:<20} {}", "ID", "Product", "Category", "User");

    for good in session.visible() {
        println!(
            "{:<4} {:<16} {:<20} {}",
            good.id,
            good.name,
            good.category_label(),
            good.user_name()
        );
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ {} products", session.visible().len());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(fixtures_dir: Option<&str>) -> Result<()> {
    let store = load_store(fixtures_dir)?;

    println!("📊 Loading catalog...");
    let goods = denormalize(&store);
    println!("✓ Loaded {} products\n", goods.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(&store, goods);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_fixtures_dir: Option<&str>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use plain output: goods-catalog list");
    std::process::exit(1);
}
