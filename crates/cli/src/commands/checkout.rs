//! Simulated checkout.
//!
//! There is no payment integration: "processing" is a fixed delay, after
//! which an order receipt is printed and the cart is cleared. Shipping is
//! free at or above the threshold, otherwise a flat fee, matching the web
//! client's checkout summary.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use lumora_cart::CartLineItem;
use lumora_core::{OrderId, OrderStatus, PaymentStatus, Price};

use crate::commands::cart::open_store;
use crate::config::CliConfig;

/// Subtotal at which shipping becomes free.
const FREE_SHIPPING_THRESHOLD: Price = Price::from_minor_units(100_000);

/// Flat shipping fee below the threshold.
const FLAT_SHIPPING_FEE: Price = Price::from_minor_units(15_000);

/// Duration of the simulated payment processing delay.
const PROCESSING_DELAY: Duration = Duration::from_secs(3);

/// An order produced by checkout. Built in memory for the receipt; orders
/// are not persisted anywhere.
#[derive(Debug)]
pub struct OrderReceipt {
    pub id: OrderId,
    pub full_name: String,
    pub email: String,
    pub items: Vec<CartLineItem>,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub placed_at: DateTime<Utc>,
}

/// Shipping cost for a given subtotal.
#[must_use]
pub fn shipping_cost(subtotal: Price) -> Price {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        Price::ZERO
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Build a receipt from the cart contents.
#[must_use]
pub fn build_receipt(full_name: &str, email: &str, items: Vec<CartLineItem>) -> OrderReceipt {
    let subtotal: Price = items.iter().map(CartLineItem::line_total).sum();
    let shipping = shipping_cost(subtotal);
    OrderReceipt {
        id: OrderId::new(uuid::Uuid::new_v4().to_string()),
        full_name: full_name.to_string(),
        email: email.to_string(),
        items,
        subtotal,
        shipping,
        total: subtotal + shipping,
        status: OrderStatus::Processing,
        payment_status: PaymentStatus::Paid,
        placed_at: Utc::now(),
    }
}

/// Run the simulated checkout: validate the cart, "process" payment, print
/// the receipt, clear the cart.
///
/// # Errors
///
/// Returns an error if the cart is empty or storage cannot be opened.
pub fn place_order(
    config: &CliConfig,
    full_name: &str,
    email: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    if store.is_empty() {
        return Err("cart is empty; add something first".into());
    }

    println!("Processing payment...");
    thread::sleep(PROCESSING_DELAY);

    let receipt = build_receipt(full_name, email, store.items().to_vec());
    store.clear_cart();

    println!();
    println!("Order {} — {}", receipt.id, receipt.placed_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  {} <{}>", receipt.full_name, receipt.email);
    println!();
    for item in &receipt.items {
        println!(
            "  {} ×{}  {}",
            item.name,
            item.quantity,
            item.line_total().display()
        );
    }
    println!();
    println!("  subtotal:  {}", receipt.subtotal.display());
    if receipt.shipping == Price::ZERO {
        println!("  shipping:  free");
    } else {
        println!("  shipping:  {}", receipt.shipping.display());
    }
    println!("  total:     {}", receipt.total.display());
    println!();
    println!(
        "  status: {} / payment: {}",
        receipt.status, receipt.payment_status
    );
    Ok(())
}
