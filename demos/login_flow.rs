//! Logs in by email, then lists nearby items and active orders.
//!
//! This example shows how to:
//! - Run the login → poll handshake and wait for the email confirmation
//! - Call authenticated endpoints once the client holds tokens
//! - Tell a pending login apart from a real failure
//!
//! Run with: `TGTG_EMAIL=you@example.com cargo run --example login_flow`

use std::time::Duration;
use tgtg::{Client, ListItemsRequest, LoginRequest, Origin, PollRequest};

const DEVICE_TYPE: &str = "IOS";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("tgtg=debug,login_flow=info")
        .init();

    let email = std::env::var("TGTG_EMAIL").map_err(|_| "TGTG_EMAIL is not set")?;

    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

    println!("=== Login ===");
    let login = client
        .auth()
        .login(Some(&LoginRequest {
            device_type: DEVICE_TYPE.to_string(),
            email: email.clone(),
        }))
        .await?;
    println!("Check your inbox and click the login link...");

    let poll_request = PollRequest {
        device_type: DEVICE_TYPE.to_string(),
        email,
        polling_id: login.data.polling_id.clone(),
    };
    loop {
        match client.auth().poll(Some(&poll_request)).await {
            Ok(response) => {
                println!("Logged in as user {}", response.data.startup_data.user.user_id);
                break;
            }
            Err(e) if e.is_login_pending() => {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!();

    println!("=== Items nearby ===");
    let items = client
        .items()
        .list(Some(&ListItemsRequest {
            origin: Some(Origin {
                latitude: 52.5200,
                longitude: 13.4050,
            }),
            radius: 5,
            page: 1,
            page_size: 20,
            with_stock_only: true,
            ..Default::default()
        }))
        .await?;
    for entry in &items.data.items {
        println!(
            "{} - {} left ({:.2} {})",
            entry.display_name,
            entry.items_available,
            entry.item.price_including_taxes.amount(),
            entry.item.price_including_taxes.code
        );
    }
    println!("Request latency: {:?}", items.latency);
    println!();

    println!("=== Active orders ===");
    let orders = client.orders().active(None).await?;
    for order in &orders.data.orders {
        println!("{} at {}: {}", order.item_name, order.store_name, order.state);
    }

    Ok(())
}
