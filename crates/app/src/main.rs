//! `storefront`: browse the catalog from the command line.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
use storefront_app::{
    CatalogSourceConfig, FilterMode, Intent, ListingView, Storefront, StorefrontConfig,
};
#[cfg(not(target_arch = "wasm32"))]
use storefront_catalog::DEFAULT_CATALOG_URL;
#[cfg(not(target_arch = "wasm32"))]
use storefront_core::ProductId;
#[cfg(not(target_arch = "wasm32"))]
use storefront_listing::{CategorySelector, PageWindow, SortKey, parse_price_bound};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Search, filter and page through the product catalog")]
struct Args {
    /// Case-insensitive text matched against product titles.
    #[arg(long, default_value = "")]
    search: String,
    /// Category name, or `all`.
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long)]
    min_price: Option<String>,
    #[arg(long)]
    max_price: Option<String>,
    /// default, price-asc, price-desc, rating-desc, rating-count-desc, name-asc, name-desc.
    #[arg(long, default_value = "default")]
    sort: String,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Load the catalog over HTTP instead of the built-in list.
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CATALOG_URL)]
    remote: Option<String>,
    /// Put a product in the cart (repeatable).
    #[arg(long = "add", value_name = "PRODUCT_ID")]
    add: Vec<String>,
    /// Print view models as JSON.
    #[arg(long)]
    json: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let args = Args::parse();

    let mut config = StorefrontConfig::from_env();
    if let Some(url) = args.remote.clone() {
        config.catalog = CatalogSourceConfig::Remote { url };
    }
    // The CLI submits every control at once.
    config.filter_mode = FilterMode::OnApply;

    let mut storefront = Storefront::new(config);
    let source = storefront.config().catalog_source();
    storefront
        .start(source.as_ref())
        .await
        .with_context(|| format!("loading catalog from {}", source.describe()))?;

    let intents = [
        Intent::search(&args.search),
        Intent::SetCategory {
            category: args.category.parse::<CategorySelector>()?,
        },
        Intent::SetPriceRange {
            min: bound(args.min_price.as_deref())?,
            max: bound(args.max_price.as_deref())?,
        },
        Intent::SetSort {
            sort: args.sort.parse::<SortKey>()?,
        },
        Intent::ApplyFilters,
        Intent::GoToPage { page: args.page },
    ];
    for intent in intents {
        storefront.dispatch(intent)?;
    }

    for raw in &args.add {
        let product_id: ProductId = raw.parse()?;
        storefront
            .dispatch(Intent::AddToCart { product_id })
            .with_context(|| format!("adding product {raw} to the cart"))?;
    }

    let listing = storefront.listing_view();
    let cart = storefront.cart_summary()?;

    if args.json {
        let out = serde_json::json!({
            "session_id": storefront.session_id(),
            "listing": listing,
            "cart": cart,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match &listing {
        ListingView::Products {
            cards,
            page,
            total_pages,
            total_items,
            pagination,
        } => {
            for card in cards {
                println!(
                    "#{:<4} {:<40} {:>10}  {:<16} {}",
                    card.id.get(), card.title, card.price_label, card.category, card.rating_label
                );
            }
            println!();
            println!("Page {page} of {total_pages} ({total_items} products)");
            println!("{}", render_window(pagination));
        }
        other => println!("{}", other.message().unwrap_or_default()),
    }

    if cart.count > 0 {
        println!();
        for line in &cart.lines {
            println!(
                "{} × {:<40} {:>10}",
                line.quantity, line.title, line.subtotal_label
            );
        }
        println!("Cart: {} items, total {}", cart.count, cart.total_label);
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn bound(raw: Option<&str>) -> anyhow::Result<Option<storefront_core::Price>> {
    match raw {
        Some(raw) => Ok(parse_price_bound(raw)?),
        None => Ok(None),
    }
}

/// `‹ 1 [2] 3 ›`, with disabled controls dimmed to `·`.
#[cfg(not(target_arch = "wasm32"))]
fn render_window(window: &PageWindow) -> String {
    let mut parts = Vec::with_capacity(window.pages.len() + 2);
    parts.push(if window.previous.disabled { "·" } else { "‹" }.to_string());
    for link in &window.pages {
        parts.push(if link.active {
            format!("[{}]", link.number)
        } else {
            link.number.to_string()
        });
    }
    parts.push(if window.next.disabled { "·" } else { "›" }.to_string());
    parts.join(" ")
}

#[cfg(target_arch = "wasm32")]
fn main() {}
