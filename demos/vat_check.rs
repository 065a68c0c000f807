//! Validate VAT numbers from the command line.
//!
//! ```text
//! cargo run --example vat_check --features vies -- "NL 123456789 B13" DE136695976
//! cargo run --example vat_check --features vies -- --vies DE136695976
//! RUST_LOG=eurovat=trace cargo run --example vat_check --features vies
//! ```

use eurovat::vies::{ViesClient, ViesConfig, check_active};
use eurovat::{parse, validate};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut online = false;
    let mut inputs = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--vies" {
            online = true;
        } else {
            inputs.push(arg);
        }
    }
    if inputs.is_empty() {
        inputs = [
            "DE136695976",
            "at u13585627",
            "GR 094 259 216",
            "NL123456789B13",
            "BE0897221791", // wrong check digits
            "DE12345678",   // too short
            "XX999999999",  // unknown country
        ]
        .map(String::from)
        .to_vec();
    }

    println!("=== Local Validation ===\n");
    for raw in &inputs {
        match validate(raw).reason() {
            None => println!("  {raw:<20} => valid"),
            Some(reason) => println!("  {raw:<20} => INVALID: {reason}"),
        }
    }

    if !online {
        println!("\n  (pass --vies to also query the VIES registry)");
        return;
    }

    println!("\n=== VIES Registration ===\n");
    let client = match ViesClient::new(ViesConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cannot build VIES client: {e}");
            return;
        }
    };
    for raw in inputs.iter().filter(|raw| parse(raw).is_ok()) {
        match check_active(&client, raw).await {
            Ok(status) => println!(
                "  {raw:<20} => active={}, name={}",
                status.active,
                status.name.as_deref().unwrap_or("-")
            ),
            Err(e) => println!("  {raw:<20} => lookup failed: {e}"),
        }
    }
}
