use actix_web::web::Data;
use actix_web::{App, HttpServer};
use golf_scorecard::args;
use golf_scorecard::controller::{configure, routes::configure_static};
use golf_scorecard::model::Round;
use golf_scorecard::mvu::ScorecardStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::args_checks();
    let store = Data::new(ScorecardStore::new(Round::new(args.holes, args.default_par)));

    info!(
        host = %args.host,
        port = args.port,
        holes = args.holes,
        default_par = args.default_par,
        "serving scorecard"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(configure)
            .configure(configure_static)
    })
    .bind(args.bind_addr())?
    .run()
    .await?;
    Ok(())
}
