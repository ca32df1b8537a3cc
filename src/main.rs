use anyhow::Context;
use realty_hub::catalog::PropertyCatalog;
use realty_hub::content;
use realty_hub::search::{self, SearchState};
use realty_hub::store::{StoreConfig, SupabaseStore};
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏭 Industrial Realty Hub - property catalog");
    info!("============================================");

    let config = StoreConfig::from_env().context("store configuration is incomplete")?;
    let store = SupabaseStore::new(config)?;
    let mut catalog = PropertyCatalog::new(store);

    info!("Fetching listings from the store...");
    catalog.refresh().await?;

    // An optional free-text term on the command line runs the same search
    // the landing page offers.
    let mut state = SearchState::default();
    if let Some(term) = std::env::args().nth(1) {
        info!("Searching for \"{}\"", term);
        state.submit_search(&term, "all");
    }
    let results = search::filter(catalog.properties(), state.query());

    info!("\n✅ {} listings\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({} {})", i + 1, property.title, property.currency, property.price);
        println!("   {} · {} m² · {}", property.category, property.area, property.operation);
        println!("   {}", property.location);
        println!("   Portada: {}", property.cover_image);
        if property.images.len() > 1 {
            println!("   {} imágenes adicionales", property.images.len() - 1);
        }
        println!();
    }

    if let Some(agent) = content::agents().first() {
        println!("Contacto: {} · {}", agent.name, content::whatsapp_url(
            &agent.whatsapp,
            content::DEFAULT_WHATSAPP_MESSAGE,
        ));
    }

    // Snapshot the full catalog for inspection
    let json = serde_json::to_string_pretty(catalog.properties())?;
    tokio::fs::write("catalog.json", json).await?;
    info!("💾 Saved {} listings to catalog.json", catalog.properties().len());

    Ok(())
}
