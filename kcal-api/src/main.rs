use std::{env, sync::Arc};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use kcal_api::calculate;
use kcal_engine::dispatch::{Calculator, CalculatorImpl};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();
    dotenv::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8080u16);

    let calculator: Arc<dyn Calculator> = Arc::new(CalculatorImpl);

    info!("Starting calculation server on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(calculator.clone()))
            .wrap(Cors::permissive())
            .service(calculate)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
