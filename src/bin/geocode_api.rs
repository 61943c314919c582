use clap::Parser;
use photopin::server;

/// Photo Location Geocoding API: place-name lookup service.
///
/// Forwards place-name queries to Nominatim and answers with the best
/// match, or a suggestion list for partial queries.
///
/// Examples:
///   photopin-geocode
///   photopin-geocode --host 127.0.0.1 --port 8081
#[derive(Parser)]
#[command(name = "photopin-geocode", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = 5001)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    eprintln!("  Photo Location Geocoding API (Nominatim)");
    server::serve(server::geocode_router(), &cli.host, cli.port).await;
}
