use actix_web::{
    middleware::Logger,
    web::{route, Data, JsonConfig},
    App, HttpServer,
};
use dotenvy::dotenv;
use log::info;
use sqlx::mysql::MySqlPool;
use title_registry::{apis, config::Config, logging, State};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let _logger = logging::init(&config.log_level).expect("Failed to start logger");

    let db_pool = MySqlPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to DB");

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .expect("Failed to run DB migrations");

    info!(
        "event=server_start address={} port={} version={}",
        config.bind_address,
        config.port,
        env!("CARGO_PKG_VERSION")
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(State::new(db_pool.clone())))
            .app_data(JsonConfig::default().error_handler(apis::json_error_handler))
            .service(apis::title::get::service)
            .service(apis::owner::get::service)
            .service(apis::conveyancer::list::service)
            .service(apis::conveyancer::create::service)
            .service(apis::conveyancer::get::service)
            .default_service(route().to(apis::not_found))
    })
    .bind((config.bind_address.as_str(), config.port))
    .expect("Failed to bind to socket")
    .run()
    .await
    .expect("Failed to run the server");
}
