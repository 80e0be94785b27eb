//! Matcher Order - Binary Entry Point
//!
//! Builds a reference order and prints its signing payload, id and REST
//! body. Log level comes from `RUST_LOG` (default `info`).

use matcher_order::{AssetPair, Order, OrderStatus, OrderType, PublicKey, Signable};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  Matcher Order - signing payload demo");
    println!("===========================================");
    println!();

    let order = Order::new(
        OrderType::Buy,
        AssetPair::default(),       // WAVES/WAVES
        100_000_000,                // amount: 1.00000000
        300_000_000,                // price: 3.00000000
        1_577_836_800_000,          // timestamp: 2020-01-01T00:00:00Z
        0,                          // filled
        OrderStatus::Accepted,
        1_577_923_200_000,          // expiration: 2020-01-02T00:00:00Z
        300_000,                    // matcher fee: 0.003
        PublicKey::new([1u8; 32]),  // sender
        PublicKey::new([2u8; 32]),  // matcher
    );
    info!(order_type = %order.order_type(), pair = %order.asset_pair(), "order built");

    match order.signing_bytes() {
        Ok(bytes) => {
            println!("Signing payload: {} bytes", bytes.len());
            println!("  {}", hex::encode(&bytes));
        }
        Err(e) => {
            error!(error = %e, "failed to encode order");
            std::process::exit(1);
        }
    }

    match order.id() {
        Ok(id) => println!("Order id: {id}"),
        Err(e) => {
            error!(error = %e, "failed to derive order id");
            std::process::exit(1);
        }
    }

    match serde_json::to_string_pretty(&order.to_json()) {
        Ok(body) => println!("REST body:\n{body}"),
        Err(e) => {
            error!(error = %e, "failed to render REST body");
            std::process::exit(1);
        }
    }
}
