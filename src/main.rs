#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    if let Err(e) = git_recall::cli::run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
