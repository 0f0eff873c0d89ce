// Main entry point
use clap::Parser;
use colored::Colorize;
use wd_rust::application::lookup::lookup_word;
use wd_rust::domain::traits::DictSource;
use wd_rust::infrastructure::config::{BaiduSession, CaiyunAuth};
use wd_rust::infrastructure::network::http::create_client;
use wd_rust::infrastructure::network::{BaiduClient, CaiyunClient};
use wd_rust::interfaces::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    // Exactly one word, checked before anything touches the network
    let Some(word) = cli.single_word() else {
        eprintln!("{}", "usage: wd WORD".red());
        eprintln!("example: wd hello");
        std::process::exit(1);
    };

    let client = create_client()?;
    let caiyun = CaiyunClient::new(client.clone(), CaiyunAuth::default());
    let baidu = BaiduClient::new(client, BaiduSession::default());

    // Caiyun first, then Baidu; any failure is fatal
    let sources: [&dyn DictSource; 2] = [&caiyun, &baidu];
    lookup_word(&sources, word).await?;

    Ok(())
}

/// Logging goes to stderr so stdout carries only the lookup output.
/// Default level warn, RUST_LOG overrides.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
