use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrina_catalog::Registry;

mod app_config;

use app_config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina_catalog=info,vitrina_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting Vitrina catalog demo with {} seed products",
        config.demo.seed.len()
    );

    // One registry for the whole process, passed explicitly from here on.
    let mut registry = Registry::new();

    for item in &config.demo.seed {
        let added = if item.discount > Decimal::ZERO {
            registry.add_with_discount(&item.name, item.price, item.discount)
        } else {
            registry.add(&item.name, item.price)
        };
        if let Err(e) = added {
            tracing::warn!("Skipping seed product {:?}: {}", item.name, e);
        }
    }

    println!("===== PRODUCT CATALOG =====");
    if registry.is_empty() {
        println!("No products in the catalog");
    } else {
        for product in registry.products() {
            println!("{}", product.details());
            println!();
        }
        println!("Total products: {}", registry.len());
    }
    println!("===========================");

    let search = &config.demo.search_name;
    match registry.find(search) {
        Some(product) => {
            println!();
            println!("Found '{}':", search);
            println!("{}", product.details());
        }
        None => {
            println!();
            println!("Product '{}' not found", search);
        }
    }

    let target = &config.demo.remove_name;
    println!();
    match registry.remove(target) {
        Some(product) => println!("Removed: {}", product),
        None => println!("Product '{}' not found, nothing removed", target),
    }

    println!();
    println!("===== UPDATED CATALOG =====");
    for product in registry.products() {
        println!("{}", product);
    }
    println!("Total base price: ${}", registry.total());
    println!("===========================");

    Ok(())
}
