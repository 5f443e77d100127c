//! Comanda Binary
//!
//! Headless driver for the dashboard configuration store.

use std::fmt::Display;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};

use comanda::app::init_tracing;
use comanda::{App, AppConfig};
use comanda_common::{Currency, FontSize, Language};
use comanda_fx::RateOrigin;
use comanda_settings::ConfigStore;

/// Comanda restaurant dashboard settings
#[derive(Parser, Debug)]
#[command(name = "comanda")]
#[command(about = "Inspect and change the Comanda dashboard settings")]
struct Args {
    /// Skip the exchange rate fetch
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the saved configuration and exchange rate status
    Show,

    /// Change settings and save them
    Set {
        /// Display language (es, en, de)
        #[arg(long)]
        language: Option<Language>,

        /// Display currency (EUR, USD, COP)
        #[arg(long)]
        currency: Option<Currency>,

        /// Font size (small, medium, large, extra-large)
        #[arg(long)]
        font_size: Option<FontSize>,

        /// Preview the change without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Format a USD amount in the saved currency
    Format {
        /// Amount in USD
        amount: Decimal,
    },

    /// Translate a key into the saved language
    Translate {
        /// Dictionary key
        key: String,

        /// Placeholder value as name=value
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Show the exchange rates in use
    Rates {
        /// List every currency the rate table holds
        #[arg(long)]
        all: bool,
    },
}

impl Command {
    fn needs_rates(&self) -> bool {
        match self {
            Command::Show | Command::Format { .. } | Command::Rates { .. } => true,
            Command::Set { dry_run, .. } => *dry_run,
            Command::Translate { .. } => false,
        }
    }
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got {raw}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let args = Args::parse();
    let app = App::from_config(&config)?;

    if args.command.needs_rates() && !args.offline {
        app.load_rates().await;
    }

    let store = app.store();
    match args.command {
        Command::Show => show(store),
        Command::Set {
            language,
            currency,
            font_size,
            dry_run,
        } => {
            if let Some(language) = language {
                store.set_draft_language(language);
            }
            if let Some(currency) = currency {
                store.set_draft_currency(currency);
            }
            if let Some(font_size) = font_size {
                store.set_draft_font_size(font_size);
            }

            let changed = store.draft().changed_fields(&store.saved());
            if dry_run {
                let preview = store.format_currency_draft(Decimal::ONE_HUNDRED);
                println!(
                    "{}: {}",
                    store.translate("settings.pendingChanges"),
                    changed.join(", ")
                );
                println!("{}", store.translate_with("settings.preview", &[("amount", &preview)]));
                store.discard();
            } else {
                store.save()?;
                info!(changed = ?changed, "Settings updated");
                println!("{}", store.translate("settings.saved"));
            }
        }
        Command::Format { amount } => println!("{}", store.format_currency(amount)),
        Command::Translate { key, vars } => {
            let vars: Vec<(&str, &dyn Display)> = vars
                .iter()
                .map(|(name, value)| (name.as_str(), value as &dyn Display))
                .collect();
            println!("{}", store.translate_with(&key, &vars));
        }
        Command::Rates { all } => {
            let rates = store.rates();
            if all {
                for (code, rate) in rates.table.iter() {
                    println!("{}\t{rate}", code.to_uppercase());
                }
            } else {
                for currency in Currency::ALL {
                    match rates.table.rate_for(currency) {
                        Some(rate) => println!("{currency}\t{rate}"),
                        None => println!("{currency}\t-"),
                    }
                }
            }
            rate_status(store);
        }
    }

    Ok(())
}

fn show(store: &ConfigStore) {
    let saved = store.saved();
    let language = store.translate(&format!("language.{}", saved.language.code()));
    let currency = store.translate(&format!("currency.{}", saved.currency.code()));
    let font_size = store.translate(&format!("settings.fontSize.{}", saved.font_size.name()));

    println!("{}", store.translate("settings.title"));
    println!("  {}: {language}", store.translate("settings.language"));
    println!("  {}: {currency}", store.translate("settings.currency"));
    println!(
        "  {}: {font_size} ({})",
        store.translate("settings.fontSize"),
        store.font_size_class()
    );
    if store.has_pending_changes() {
        println!("{}", store.translate("settings.pendingChanges"));
    }
    rate_status(store);
}

fn rate_status(store: &ConfigStore) {
    let rates = store.rates();
    match rates.origin {
        RateOrigin::Pending => {}
        RateOrigin::Fallback => println!("{}", store.translate("rates.fallback")),
        RateOrigin::Remote { as_of: Some(date), .. } => {
            println!("{}", store.translate_with("rates.asOf", &[("date", &date)]));
        }
        RateOrigin::Remote { as_of: None, .. } => {}
    }
}
