//! Lists the payment methods available to an account.
//!
//! ```text
//! ACCESS_TOKEN=APP_USR-... MERCADOPAGO_LOG=mercadopago=debug \
//!     cargo run --example payment_methods
//! ```

use mercadopago::{Config, MercadoPago, PaymentMethodApi};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_env("MERCADOPAGO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let token = std::env::var("ACCESS_TOKEN").map_err(|_| "ACCESS_TOKEN is not set")?;
    let client = MercadoPago::new(Config::new(token)?);

    for method in client.payment_methods().list().await? {
        println!(
            "{:<24} {:<16} {}",
            method.id, method.payment_type_id, method.name
        );
    }
    Ok(())
}
