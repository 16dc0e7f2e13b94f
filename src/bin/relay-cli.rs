use clap::{Parser, Subcommand};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the webhook relay", long_about = None)]
struct Cli {
    /// Base URL of a running relay.
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Fire the canned diagnostic payload at the webhook
    Test,
    /// Relay a JSON body through /call-webhook
    Send {
        /// JSON body to forward
        body: String,

        /// Authorization header to pass through
        #[arg(short, long)]
        authorization: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Test => {
            let res = client
                .get(format!("{}/test-webhook", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Send { body, authorization } => {
            let body: Value = serde_json::from_str(&body)?;
            let mut request = client
                .post(format!("{}/call-webhook", cli.url))
                .json(&body);
            if let Some(auth) = authorization {
                request = request.header(AUTHORIZATION, auth);
            }
            print_response(request.send().await?).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
