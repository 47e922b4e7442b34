use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::json;

use storefront_app::{ListingView, Storefront, StorefrontConfig};
use storefront_catalog::{CatalogSource, CatalogStatus, RemoteCatalog};
use storefront_core::{DomainError, ProductId};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = Router::new()
            .route(
                "/products",
                get(|| async {
                    axum::Json(json!([
                        {
                            "id": 1,
                            "title": "Fjallraven Backpack",
                            "price": 109.95,
                            "description": "Fits 15 inch laptops",
                            "category": "men's clothing",
                            "image": "https://example.test/1.jpg",
                            "rating": { "rate": 3.9, "count": 120 }
                        },
                        {
                            "id": "2",
                            "title": "Slim Fit T-Shirt",
                            "price": 22.3,
                            "description": "Slim-fitting style",
                            "category": "men's clothing",
                            "image": "https://example.test/2.jpg",
                            "rating": { "rate": 4.1, "count": 259 }
                        },
                        { "id": 3, "title": "", "price": 5.0, "category": "broken" },
                        {
                            "id": 4,
                            "title": "Gold Ring",
                            "price": 9.99,
                            "category": "jewelery",
                            "rating": 4.6,
                            "ratingCount": 400
                        }
                    ]))
                }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            )
            .route("/not-a-list", get(|| async { axum::Json(json!({ "products": [] })) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn source(&self, path: &str) -> RemoteCatalog {
        RemoteCatalog::new(format!("{}{}", self.base_url, path))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn remote_feed_is_normalized_on_load() {
    let server = TestServer::spawn().await;

    let products = server.source("/products").fetch().await.unwrap();
    let ids: Vec<u64> = products.iter().map(|p| p.id_typed().get()).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert_eq!(products[1].rating().count(), 259);
    assert_eq!(products[2].rating().count(), 400);
}

#[tokio::test]
async fn storefront_renders_remote_catalog() {
    let server = TestServer::spawn().await;
    let mut sf = Storefront::new(StorefrontConfig::default());

    sf.start(&server.source("/products")).await.unwrap();
    assert_eq!(sf.categories(), vec!["jewelery", "men's clothing"]);

    sf.add(ProductId::new(2)).unwrap();
    assert_eq!(sf.cart_summary().unwrap().total_label, "$22.30");

    match sf.listing_view() {
        ListingView::Products { total_items, .. } => assert_eq!(total_items, 3),
        other => panic!("expected products, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_load_is_reported_and_retry_succeeds() {
    let server = TestServer::spawn().await;
    let mut sf = Storefront::new(StorefrontConfig::default());

    let err = sf.start(&server.source("/broken")).await.unwrap_err();
    assert!(matches!(err, DomainError::CatalogUnavailable(ref msg) if msg.contains("503")));
    assert!(matches!(sf.catalog_status(), CatalogStatus::Unavailable(_)));
    assert!(matches!(sf.listing_view(), ListingView::Unavailable { .. }));
    assert!(sf.add(ProductId::new(1)).is_err());

    sf.start(&server.source("/products")).await.unwrap();
    assert_eq!(sf.catalog_status(), CatalogStatus::Ready);
}

#[tokio::test]
async fn non_array_document_is_unavailable() {
    let server = TestServer::spawn().await;
    let mut sf = Storefront::new(StorefrontConfig::default());

    let err = sf.start(&server.source("/not-a-list")).await.unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unreachable_host_is_unavailable() {
    let source = RemoteCatalog::new("http://127.0.0.1:9/products");
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, storefront_catalog::SourceError::Network(_)));
}
