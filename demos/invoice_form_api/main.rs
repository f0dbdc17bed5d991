//! Demo host: mounts the invoice form handlers on an axum router
//!
//! Shows the wiring a host application owns: store, listing view, pipeline
//! context, and routes. Run with `cargo run --example invoice_form_api`,
//! then:
//!
//! ```text
//! curl -i -X POST localhost:3000/invoices \
//!   -d 'customerId=c1&amount=19.99&status=pending'
//! curl localhost:3000/dashboard/invoices
//! ```

use axum::Json;
use axum::extract::{FromRef, State};
use axum::routing::{delete, get, post, put};
use invoice_actions::prelude::*;
use invoice_actions::server;

#[derive(Clone, FromRef)]
struct DemoState {
    app: AppState,
    listing: Arc<ListingView>,
}

async fn list_invoices(State(listing): State<Arc<ListingView>>) -> Json<Vec<Invoice>> {
    Json(listing.read().await.unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = PipelineConfig::default();

    let store: Arc<dyn InvoiceStore> = Arc::new(InMemoryInvoiceStore::new());
    let listing = Arc::new(ListingView::with_path(
        Arc::clone(&store),
        config.listing_path.clone(),
    ));

    let ctx = ActionContext::new(
        Arc::clone(&store),
        Arc::clone(&listing) as Arc<dyn ViewInvalidator>,
    )
    .with_listing_path(config.listing_path.clone());

    let state = DemoState {
        app: AppState::new(ctx),
        listing: Arc::clone(&listing),
    };

    let app = axum::Router::new()
        .route("/invoices", post(server::create_invoice))
        .route("/invoices/{id}", put(server::update_invoice))
        .route("/invoices/{id}", delete(server::delete_invoice))
        .route(&config.listing_path, get(list_invoices))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("invoice form API listening on 127.0.0.1:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
