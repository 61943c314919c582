use clap::Parser;
use photopin::server;

/// Photo Location Map API: EXIF GPS extraction service.
///
/// Accepts base64-encoded photos and answers with the decimal GPS
/// coordinates found in their EXIF metadata.
///
/// Examples:
///   photopin-gps
///   photopin-gps --host 127.0.0.1 --port 8080
#[derive(Parser)]
#[command(name = "photopin-gps", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    eprintln!("  Photo Location Map API (EXIF GPS)");
    server::serve(server::gps_router(), &cli.host, cli.port).await;
}
