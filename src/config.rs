use clap::Parser;

/// Bet-slip picker for scraped betting tips
#[derive(Parser, Debug, Clone)]
#[command(name = "oso-picks", version, about)]
pub struct Config {
    /// Web server listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Dataset items endpoint the scraper publishes tips to
    #[arg(
        long,
        env = "DATASET_URL",
        default_value = "https://api.apify.com/v2/datasets/49G0FpM1tuOTfXgab/items?clean=true&format=json"
    )]
    pub dataset_url: String,

    /// Seconds to wait before each fetch so the scraper run can finish
    /// populating the dataset
    #[arg(long, env = "FETCH_DELAY_SECS", default_value = "120")]
    pub fetch_delay_secs: u64,

    /// HTTP client timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "30")]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!(
                "listen_addr '{}' is not a valid socket address",
                self.listen_addr
            );
        }
        match url::Url::parse(&self.dataset_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => anyhow::bail!(
                "dataset_url must be http(s), got scheme '{}'",
                parsed.scheme()
            ),
            Err(e) => anyhow::bail!(
                "dataset_url '{}' is not a valid URL: {}",
                self.dataset_url,
                e
            ),
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be positive");
        }
        Ok(())
    }
}
