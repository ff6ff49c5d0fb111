use std::path::PathBuf;
use std::time::Duration;

use aftership::{
    AfterShip, CallContext, ClientConfig, CreateTracking, DeliveryType, StringOrList, commands,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::warn;

/// aftership - AfterShip tracking API client
///
/// Create and delete trackings, and inspect webhook payloads.
///
/// The API key is read from --api-key or the AFTERSHIP_API_KEY environment
/// variable.
///
/// Examples:
///   aftership create 1Z999AA10123456784 --slug ups
///   aftership delete ups 1Z999AA10123456784
///   aftership webhook payload.json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(clap::Args, Debug)]
pub struct GlobalArgs {
    /// AfterShip API key
    #[arg(
        long = "api-key",
        env = "AFTERSHIP_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// API base URL (defaults to https://api.aftership.com/v4)
    #[arg(
        long = "api-url",
        env = "AFTERSHIP_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Log outgoing requests (API key redacted); use with --verbose
    #[arg(long = "debug-requests", global = true)]
    pub debug_requests: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a tracking
    Create(CreateArgs),

    /// Delete a tracking
    Delete(DeleteArgs),

    /// Parse a webhook payload and print a summary
    Webhook(WebhookArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Tracking number of the shipment
    #[arg(value_name = "TRACKING_NUMBER")]
    pub tracking_number: String,

    /// Carrier slug; repeat to let the service pick among several
    #[arg(long = "slug", value_name = "SLUG")]
    pub slugs: Vec<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long = "customer-name")]
    pub customer_name: Option<String>,

    #[arg(long = "order-id")]
    pub order_id: Option<String>,

    /// Email address to notify; may be repeated
    #[arg(long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Phone number to notify by SMS; may be repeated
    #[arg(long = "sms", value_name = "PHONE")]
    pub smses: Vec<String>,

    /// pickup_at_store, pickup_at_courier or door_to_door
    #[arg(long = "delivery-type")]
    pub delivery_type: Option<String>,

    /// ISO 3166-1 alpha-3 code of the destination country
    #[arg(long = "destination-country", value_name = "ISO3")]
    pub destination_country: Option<String>,

    #[arg(long)]
    pub note: Option<String>,

    #[arg(long)]
    pub language: Option<String>,
}

impl CreateArgs {
    fn into_payload(self) -> CreateTracking {
        CreateTracking {
            slug: StringOrList::from_values(self.slugs),
            title: self.title,
            customer_name: self.customer_name,
            order_id: self.order_id,
            emails: StringOrList::from_values(self.emails),
            smses: StringOrList::from_values(self.smses),
            delivery_type: self.delivery_type.map(DeliveryType::from),
            destination_country_iso3: self.destination_country,
            note: self.note,
            language: self.language,
            ..CreateTracking::new(self.tracking_number)
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Carrier slug
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Tracking number of the shipment
    #[arg(value_name = "TRACKING_NUMBER")]
    pub tracking_number: String,
}

#[derive(clap::Args, Debug)]
pub struct WebhookArgs {
    /// Payload file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl GlobalArgs {
    fn client(&self) -> Result<AfterShip> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("An API key is required (--api-key or AFTERSHIP_API_KEY)"))?;

        let mut config = ClientConfig::new(api_key).with_debug_requests(self.debug_requests);
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        if let Some(seconds) = self.timeout {
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        AfterShip::new(config).context("Failed to create AfterShip client")
    }
}

/// Cancels `ctx` when the process receives Ctrl-C.
fn cancel_on_interrupt(ctx: &CallContext) {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            ctx.cancel();
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let ctx = CallContext::new();
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Create(args) => {
            let client = cli.global.client()?;
            cancel_on_interrupt(&ctx);
            commands::create(&client, &ctx, args.into_payload(), &mut stdout).await?
        }
        Commands::Delete(args) => {
            let client = cli.global.client()?;
            cancel_on_interrupt(&ctx);
            commands::delete(&client, &ctx, &args.slug, &args.tracking_number, &mut stdout)
                .await?
        }
        Commands::Webhook(args) => commands::webhook(args.file.as_deref(), &mut stdout)?,
    }
    Ok(())
}
