use backend::routes::configure_routes;
use backend::shared::data::DatasetStore;
use contracts::dashboards::d400_sales_analysis::{
    FilterOptions, ReloadResponse, SalesAnalysisResponse,
};
use contracts::enums::{City, DayOfWeek};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

const HEADER: &str = "id_cliente,fecha_compra,monto,categoria_producto,ciudad,metodo_pago\n";

// 2024-07-01 is a Monday
const ROWS: &str = "\
c1,2024-07-01 09:00:00,100.0,Electrónica,Bogotá,PSE
c2,2024-07-01 09:30:00,50.25,Ropa,Cali,Efectivo
c1,2024-07-03 20:10:00,10.0,Electrónica,Medellín,Tarjeta de Crédito
";

fn write_dataset(path: &Path, rows: &str) {
    std::fs::write(path, format!("{}{}", HEADER, rows)).unwrap();
}

async fn spawn_app(path: &Path) -> SocketAddr {
    let store = DatasetStore::open(path).await.unwrap();
    let app = configure_routes(store);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_and_filter_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    write_dataset(&path, ROWS);
    let addr = spawn_app(&path).await;
    let client = reqwest::Client::new();

    let health = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");

    let options: FilterOptions = client
        .get(format!("http://{}/api/d400/filter_options", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(options.cities, vec![City::Bogota, City::Cali, City::Medellin]);
    assert_eq!(options.categories, vec!["All", "Electrónica", "Ropa"]);
}

#[tokio::test]
async fn sales_analysis_filters_and_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    write_dataset(&path, ROWS);
    let addr = spawn_app(&path).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/api/d400/sales_analysis", addr);

    let all: SalesAnalysisResponse = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.kpis.total_transactions, 3);
    assert_eq!(all.kpis.total_sales_display, "$160.25");
    assert_eq!(all.sales_by_hour.len(), 2);
    assert_eq!(all.sales_by_weekday[0].day, DayOfWeek::Monday);
    assert_eq!(all.sales_by_weekday[0].total, 150.25);
    assert_eq!(all.sales_by_weekday[2].total, 10.0);

    let filtered: SalesAnalysisResponse = client
        .get(&url)
        .query(&[("cities", "Bogotá,Medellín"), ("category", "Electrónica")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered.kpis.total_transactions, 2);
    assert_eq!(filtered.kpis.average_ticket, Some(55.0));
    assert_eq!(filtered.kpis.average_ticket_display, "$55.00");

    let empty: SalesAnalysisResponse = client
        .get(&url)
        .query(&[("cities", "")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty.kpis.total_transactions, 0);
    assert_eq!(empty.kpis.average_ticket, None);
    assert_eq!(empty.kpis.average_ticket_display, "N/A");
    assert!(empty.sales_by_hour.is_empty());
    assert_eq!(empty.sales_by_weekday.len(), 7);
    assert!(empty.rows.is_empty());

    let bad = client
        .get(&url)
        .query(&[("category", "Zapatos")])
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reload_picks_up_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    write_dataset(&path, ROWS);
    let addr = spawn_app(&path).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/api/d400/sales_analysis", addr);

    write_dataset(&path, "c9,2024-07-06 12:00:00,5.5,Libros,Cartagena,PSE\n");

    // Cached dataset is still served until the operator reloads
    let before: SalesAnalysisResponse = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(before.kpis.total_transactions, 3);

    let reload: ReloadResponse = client
        .post(format!("http://{}/api/d400/reload", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reload.rows, 1);

    let after: SalesAnalysisResponse = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(after.kpis.total_transactions, 1);
    assert_eq!(after.sales_by_weekday[5].total, 5.5);

    // A broken file does not replace the cached dataset
    std::fs::write(&path, "garbage\n").unwrap();
    let failed = client
        .post(format!("http://{}/api/d400/reload", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(failed.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let still: SalesAnalysisResponse = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(still.kpis.total_transactions, 1);
}
