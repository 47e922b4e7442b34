use storefront_app::{FilterMode, Intent, ListingView, Outcome, Storefront, StorefrontConfig};
use storefront_catalog::EmbeddedCatalog;
use storefront_core::{Price, ProductId};
use storefront_listing::{CategorySelector, SortKey};

async fn started(mode: FilterMode) -> Storefront {
    let config = StorefrontConfig {
        filter_mode: mode,
        ..StorefrontConfig::default()
    };
    let mut storefront = Storefront::new(config);
    let loaded = storefront
        .start(&EmbeddedCatalog::builtin())
        .await
        .expect("embedded catalog loads");
    assert_eq!(loaded, 12);
    storefront
}

fn ids(view: &ListingView) -> Vec<u64> {
    match view {
        ListingView::Products { cards, .. } => cards.iter().map(|c| c.id.get()).collect(),
        other => panic!("expected products, got {other:?}"),
    }
}

#[tokio::test]
async fn first_render_shows_catalog_order_in_pages_of_eight() {
    let mut sf = started(FilterMode::Live).await;

    match sf.listing_view() {
        ListingView::Products { cards, page, total_pages, total_items, pagination } => {
            assert_eq!(cards.len(), 8);
            assert_eq!((page, total_pages, total_items), (1, 2, 12));
            assert_eq!(pagination.pages.len(), 2);
            assert!(pagination.previous.disabled);
            assert!(!pagination.next.disabled);
        }
        other => panic!("expected products, got {other:?}"),
    }

    sf.dispatch(Intent::GoToPage { page: 2 }).unwrap();
    assert_eq!(ids(&sf.listing_view()), vec![9, 10, 11, 12]);
}

#[tokio::test]
async fn starting_twice_reuses_the_loaded_catalog() {
    let mut sf = started(FilterMode::Live).await;
    sf.add(ProductId::new(1)).unwrap();

    let again = sf.start(&EmbeddedCatalog::with_products(Vec::new())).await.unwrap();
    assert_eq!(again, 12);
    assert_eq!(sf.count(), 1);
}

#[tokio::test]
async fn category_and_price_sort_compose() {
    let mut sf = started(FilterMode::Live).await;
    sf.dispatch(Intent::SetCategory {
        category: CategorySelector::Only("Electronics".to_string()),
    })
    .unwrap();
    sf.dispatch(Intent::SetSort { sort: SortKey::PriceAsc }).unwrap();

    assert_eq!(ids(&sf.listing_view()), vec![10, 1, 4]);
}

#[tokio::test]
async fn search_matches_titles_case_insensitively() {
    let mut sf = started(FilterMode::Live).await;
    sf.dispatch(Intent::SetSearch { text: "SHOES".to_string() }).unwrap();
    assert_eq!(ids(&sf.listing_view()), vec![2, 11]);

    sf.dispatch(Intent::SetSearch { text: "protection".to_string() }).unwrap();
    assert_eq!(sf.listing_view(), ListingView::NoMatches);
}

#[tokio::test]
async fn price_range_with_name_sort() {
    let mut sf = started(FilterMode::OnApply).await;
    sf.dispatch(Intent::SetPriceRange {
        min: Some(Price::from_cents(2000)),
        max: Some(Price::from_cents(5000)),
    })
    .unwrap();
    let staged = sf.dispatch(Intent::SetSort { sort: SortKey::NameAsc }).unwrap();
    assert_eq!(staged, Outcome::DraftChanged);
    assert_eq!(ids(&sf.listing_view()).len(), 8);

    sf.dispatch(Intent::ApplyFilters).unwrap();
    assert_eq!(ids(&sf.listing_view()), vec![10, 7, 5, 6, 8]);
}

#[tokio::test]
async fn rating_sort_puts_best_rated_first() {
    let mut sf = started(FilterMode::Live).await;
    sf.dispatch(Intent::SetSort { sort: SortKey::RatingDesc }).unwrap();
    assert_eq!(ids(&sf.listing_view())[..3], [2, 8, 4]);
}

#[tokio::test]
async fn cart_totals_follow_catalog_prices() {
    let mut sf = started(FilterMode::Live).await;
    let mug = ProductId::new(3);
    let pillow = ProductId::new(12);

    sf.dispatch(Intent::AddToCart { product_id: mug }).unwrap();
    sf.dispatch(Intent::AddToCart { product_id: mug }).unwrap();
    sf.dispatch(Intent::AddToCart { product_id: pillow }).unwrap();

    assert_eq!(sf.count(), 3);
    assert_eq!(sf.total().unwrap(), Price::from_cents(4000));

    let summary = sf.cart_summary().unwrap();
    assert_eq!(summary.total_label, "$40.00");
    let titles: Vec<&str> = summary.lines.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Coffee Mug", "Throw Pillow"]);
    assert_eq!(summary.lines[0].subtotal_label, "$25.00");

    sf.dispatch(Intent::RemoveFromCart { product_id: mug }).unwrap();
    sf.dispatch(Intent::RemoveFromCart { product_id: mug }).unwrap();
    assert_eq!(sf.total().unwrap(), Price::from_cents(1500));
    assert_eq!(sf.cart_summary().unwrap().lines.len(), 1);
}

#[tokio::test]
async fn empty_feed_renders_empty_state() {
    let mut sf = Storefront::new(StorefrontConfig::default());
    sf.start(&EmbeddedCatalog::with_products(Vec::new())).await.unwrap();
    assert_eq!(sf.listing_view(), ListingView::Empty);
}
