//! Leptos storefront page.
//!
//! Components never touch catalog or cart data directly: they read view
//! models from the [`Storefront`] held in a signal and dispatch [`Intent`]s.

use leptos::*;

use storefront_listing::{CategorySelector, PageControl, PageWindow, SortKey, parse_price_bound};

use crate::config::{CatalogSourceConfig, FilterMode, StorefrontConfig};
use crate::controller::Storefront;
use crate::intent::Intent;
use crate::view::{CartSummary, FilterPanel, ListingView, ProductCard, ProductDetail};
use storefront_catalog::DEFAULT_CATALOG_URL;

/// `None` only while a catalog load is in flight.
type Shared = RwSignal<Option<Storefront>>;

fn browser_config() -> StorefrontConfig {
    StorefrontConfig {
        catalog: CatalogSourceConfig::Remote {
            url: DEFAULT_CATALOG_URL.to_string(),
        },
        filter_mode: FilterMode::OnApply,
        ..StorefrontConfig::default()
    }
}

fn dispatch(storefront: Shared, intent: Intent) {
    storefront.update(|slot| {
        if let Some(sf) = slot {
            if let Err(err) = sf.dispatch(intent) {
                tracing::warn!(error = %err, "intent rejected");
            }
        }
    });
}

fn load(storefront: Shared) {
    spawn_local(async move {
        let Some(mut sf) = storefront.try_update(Option::take).flatten() else {
            return;
        };
        let source = sf.config().catalog_source();
        if let Err(err) = sf.start(source.as_ref()).await {
            tracing::warn!(error = %err, "catalog unavailable");
        }
        storefront.set(Some(sf));
    });
}

#[component]
pub fn App() -> impl IntoView {
    let storefront: Shared = create_rw_signal(Some(Storefront::new(browser_config())));
    load(storefront);

    let badge = move || storefront.with(|s| s.as_ref().map_or(0, Storefront::count));

    view! {
        <div class="app">
            <header>
                <h1>"Storefront"</h1>
                <span class="cart-count">{badge}</span>
            </header>
            <main>
                <FilterBar storefront=storefront/>
                <ProductGrid storefront=storefront/>
            </main>
            <aside>
                <CartPanel storefront=storefront/>
            </aside>
            <DetailModal storefront=storefront/>
        </div>
    }
}

#[component]
fn FilterBar(storefront: Shared) -> impl IntoView {
    let panel = move || {
        storefront.with(|s| s.as_ref().map(Storefront::filter_panel).unwrap_or_else(|| FilterPanel {
            search: String::new(),
            categories: Vec::new(),
            sorts: Vec::new(),
            min_price: String::new(),
            max_price: String::new(),
            show_apply: false,
            has_pending_changes: false,
        }))
    };

    // Raw search box text; the dispatched query is trimmed.
    let search_box = create_rw_signal(String::new());

    // Edits one bound, keeping the other as currently drafted.
    let set_bound = move |value: String, is_min: bool| {
        let Ok(bound) = parse_price_bound(&value) else {
            return;
        };
        let (min, max) = storefront.with(|s| {
            s.as_ref()
                .map(|sf| (sf.draft().min_price, sf.draft().max_price))
                .unwrap_or_default()
        });
        let intent = if is_min {
            Intent::SetPriceRange { min: bound, max }
        } else {
            Intent::SetPriceRange { min, max: bound }
        };
        dispatch(storefront, intent);
    };

    view! {
        <div class="filters">
            <input
                type="search"
                placeholder="Search products"
                prop:value=move || search_box.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    dispatch(storefront, Intent::search(&raw));
                    search_box.set(raw);
                }
            />
            <select on:change=move |ev| {
                if let Ok(category) = event_target_value(&ev).parse::<CategorySelector>() {
                    dispatch(storefront, Intent::SetCategory { category });
                }
            }>
                {move || panel().categories.into_iter().map(|o| view! {
                    <option value=o.value selected=o.selected>{o.label}</option>
                }).collect_view()}
            </select>
            <input
                type="number"
                placeholder="Min price"
                prop:value=move || panel().min_price
                on:change=move |ev| set_bound(event_target_value(&ev), true)
            />
            <input
                type="number"
                placeholder="Max price"
                prop:value=move || panel().max_price
                on:change=move |ev| set_bound(event_target_value(&ev), false)
            />
            <select on:change=move |ev| {
                if let Ok(sort) = event_target_value(&ev).parse::<SortKey>() {
                    dispatch(storefront, Intent::SetSort { sort });
                }
            }>
                {move || panel().sorts.into_iter().map(|o| view! {
                    <option value=o.value selected=o.selected>{o.label}</option>
                }).collect_view()}
            </select>
            <Show when=move || panel().show_apply>
                <button
                    class:pending=move || panel().has_pending_changes
                    on:click=move |_| dispatch(storefront, Intent::ApplyFilters)
                >
                    "Apply Filters"
                </button>
            </Show>
            <button on:click=move |_| {
                search_box.set(String::new());
                dispatch(storefront, Intent::ResetFilters);
            }>"Reset"</button>
        </div>
    }
}

#[component]
fn ProductGrid(storefront: Shared) -> impl IntoView {
    let listing = move || {
        storefront.with(|s| s.as_ref().map_or(ListingView::Loading, Storefront::listing_view))
    };

    view! {
        <section class="listing">
            {move || match listing() {
                ListingView::Products { cards, pagination, .. } => view! {
                    <div>
                        <div class="product-grid">
                            {cards.into_iter().map(|card| view! {
                                <ProductTile card=card storefront=storefront/>
                            }).collect_view()}
                        </div>
                        <Pagination window=pagination storefront=storefront/>
                    </div>
                }.into_view(),
                unavailable @ ListingView::Unavailable { .. } => view! {
                    <div class="listing-message error">
                        <p>{unavailable.message().unwrap_or_default()}</p>
                        <button on:click=move |_| load(storefront)>"Retry"</button>
                    </div>
                }.into_view(),
                other => view! {
                    <p class="listing-message">{other.message().unwrap_or_default()}</p>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn ProductTile(card: ProductCard, storefront: Shared) -> impl IntoView {
    let id = card.id;
    view! {
        <article class="product-card">
            <img
                src=card.image
                alt=card.title.clone()
                on:click=move |_| dispatch(storefront, Intent::ViewProduct { product_id: id })
            />
            <h3>{card.title}</h3>
            <p class="category">{card.category}</p>
            <p class="rating"><span class="stars">{card.stars}</span>" "{card.rating_label}</p>
            <p class="price">{card.price_label}</p>
            <button on:click=move |_| dispatch(storefront, Intent::AddToCart { product_id: id })>
                {if card.in_cart > 0 { format!("Add to Cart ({})", card.in_cart) } else { "Add to Cart".to_string() }}
            </button>
        </article>
    }
}

#[component]
fn Pagination(window: PageWindow, storefront: Shared) -> impl IntoView {
    let control = move |label: &'static str, control: PageControl| {
        view! {
            <button
                disabled=control.disabled
                on:click=move |_| dispatch(storefront, Intent::GoToPage { page: control.target })
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="pagination">
            {control("Previous", window.previous)}
            {window.pages.into_iter().map(|link| view! {
                <button
                    class:active=link.active
                    on:click=move |_| dispatch(storefront, Intent::GoToPage { page: link.number })
                >
                    {link.number}
                </button>
            }).collect_view()}
            {control("Next", window.next)}
        </nav>
    }
}

#[component]
fn CartPanel(storefront: Shared) -> impl IntoView {
    let summary = move || {
        storefront.with(|s| {
            s.as_ref()
                .and_then(|sf| sf.cart_summary().ok())
                .unwrap_or_else(|| CartSummary {
                    lines: Vec::new(),
                    count: 0,
                    total_label: "$0.00".to_string(),
                    checkout_enabled: false,
                })
        })
    };

    view! {
        <div class="cart">
            <h2>"Cart"</h2>
            {move || {
                let summary = summary();
                if summary.lines.is_empty() {
                    view! { <p>"Your cart is empty."</p> }.into_view()
                } else {
                    summary.lines.into_iter().map(|line| {
                        let id = line.id;
                        view! {
                            <div class="cart-line">
                                <span>{line.title}</span>
                                <span>{format!("{} × {}", line.quantity, line.price_label)}</span>
                                <span>{line.subtotal_label}</span>
                                <button on:click=move |_| dispatch(storefront, Intent::RemoveFromCart { product_id: id })>"−"</button>
                                <button on:click=move |_| dispatch(storefront, Intent::AddToCart { product_id: id })>"+"</button>
                            </div>
                        }
                    }).collect_view()
                }
            }}
            <p class="cart-total">"Total: "{move || summary().total_label}</p>
            <button
                disabled=move || !summary().checkout_enabled
                on:click=move |_| dispatch(storefront, Intent::Checkout)
            >
                "Checkout"
            </button>
            <button on:click=move |_| dispatch(storefront, Intent::ClearCart)>"Clear"</button>
        </div>
    }
}

#[component]
fn DetailModal(storefront: Shared) -> impl IntoView {
    let detail = move || storefront.with(|s| s.as_ref().and_then(Storefront::product_detail));

    view! {
        {move || detail().map(|d: ProductDetail| {
            view! {
                <div class="modal" on:click=move |_| dispatch(storefront, Intent::CloseProduct)>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <img src=d.image alt=d.image_alt/>
                        <h2>{d.title}</h2>
                        <p>{d.price_label}<span class="category">{d.category_label}</span></p>
                        <p class="rating">{d.rating_label}</p>
                        <p>{d.description}</p>
                        <button on:click=move |_| dispatch(storefront, Intent::AddSelectedToCart)>"Add to Cart"</button>
                        <button on:click=move |_| dispatch(storefront, Intent::CloseProduct)>"Close"</button>
                    </div>
                </div>
            }
        })}
    }
}
