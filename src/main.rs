use anyhow::Context;
use tracing::info;

use restaurant_finder::{init_observability, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_environment().context("failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )
    .context("failed to initialize logging")?;

    info!(
        "Service: {} v{}",
        config.observability.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let service = config.catalog.build_service();
    info!("Catalog initialized with {} restaurants", service.len());

    if service.is_empty() {
        println!(
            "No restaurants configured. Point RESTAURANT_CONFIG_FILE at a catalog file."
        );
        return Ok(());
    }

    for restaurant in service.restaurants() {
        let status = if restaurant.is_restaurant_open() {
            "open"
        } else {
            "closed"
        };
        let full_menu_cost = restaurant
            .order_cost(restaurant.menu())
            .with_context(|| format!("failed to price menu of {}", restaurant.name()))?;

        println!("{}", restaurant);
        println!("Currently {}; full menu costs {}\n", status, full_menu_cost);
    }

    let open_count = service.open_restaurants().count();
    info!("{} of {} restaurants open now", open_count, service.len());

    Ok(())
}
