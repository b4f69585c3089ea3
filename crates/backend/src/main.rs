use axum::http::{header, Method};
use axum::middleware;
use backend::shared::config;
use backend::shared::data::DatasetStore;
use backend::system::middleware::request_logger;
use backend::{routes, system};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize("backend")?;

    let app_config = config::load_config()?;
    let dataset_path = config::get_dataset_path(&app_config);

    // Датасет читается один раз; без файла сервис не стартует
    let store = DatasetStore::open(&dataset_path)
        .await
        .inspect_err(|e| {
            tracing::error!(
                "Failed to load sales dataset {}: {:#}",
                dataset_path.display(),
                e
            )
        })?;
    tracing::info!(
        "Sales dataset ready: {} rows from {}",
        store.current().await.len(),
        dataset_path.display()
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(store)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config::get_server_addr(&app_config)?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
