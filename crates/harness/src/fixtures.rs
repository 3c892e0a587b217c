//! Random fixture builders.
//!
//! Every builder produces a structurally valid request body the backend
//! should accept. Tests override individual public fields for targeted
//! cases; deliberate violations (missing field, wrong type) go through
//! [`raw`] and `galleria_sdk::raw` instead of bending the typed builders.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Uuid;

use galleria_core::{
    AdministratorCreate, CartId, CartItemCreate, CouponCreate, CustomerCreate, CustomerId, Email,
    OrderCreate, Price, ProductId, ReviewCreate, TicketIssue,
};

const WORDS: &[&str] = &[
    "maple", "harbor", "velvet", "cinder", "juniper", "atlas", "meadow", "quartz", "breeze",
    "lantern",
];

const SENTENCES: &[&str] = &[
    "Arrived earlier than expected.",
    "Packaging was intact and the color matches the photos.",
    "Would order from this store again.",
    "The sizing runs slightly small.",
    "Quality is fine for the price.",
];

/// A fresh unique email; the backend keys accounts on it.
#[must_use]
pub fn email() -> Email {
    let address = format!("probe-{}@galleria-test.dev", Uuid::new_v4());
    Email::parse(&address).expect("generated email is structurally valid")
}

/// A plausible mobile number.
#[must_use]
pub fn mobile() -> String {
    let mut rng = rand::rng();
    format!(
        "+82-10-{:04}-{:04}",
        rng.random_range(0..10_000u16),
        rng.random_range(0..10_000u16)
    )
}

/// A human-looking display name, unique enough to search for.
#[must_use]
pub fn nickname() -> String {
    let mut rng = rand::rng();
    let word = WORDS.choose(&mut rng).copied().unwrap_or("maple");
    format!("{word}-{:05}", rng.random_range(0..100_000u32))
}

/// A throwaway password satisfying the backend's minimum length.
#[must_use]
pub fn password() -> String {
    format!("pw-{}", Uuid::new_v4().simple())
}

/// `count` sentences of filler prose.
#[must_use]
pub fn paragraph(count: usize) -> String {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            SENTENCES
                .choose(&mut rng)
                .copied()
                .unwrap_or("Quality is fine for the price.")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A positive price between 1.00 and 1000.00.
#[must_use]
pub fn price() -> Price {
    let mut rng = rand::rng();
    Price::from_cents(rng.random_range(100..=100_000))
}

/// An in-range star rating (1..=5).
#[must_use]
pub fn rating() -> u8 {
    rand::rng().random_range(1..=5)
}

/// A unique coupon code like "TEST-9F4A2C1B".
#[must_use]
pub fn coupon_code() -> String {
    let tail: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    format!("TEST-{}", tail.to_uppercase())
}

/// Valid body for `POST /customers`.
#[must_use]
pub fn customer_create() -> CustomerCreate {
    CustomerCreate {
        email: email(),
        nickname: nickname(),
        mobile: mobile(),
        password: password(),
    }
}

/// Valid body for `POST /administrators`.
#[must_use]
pub fn administrator_create() -> AdministratorCreate {
    AdministratorCreate {
        email: email(),
        name: nickname(),
        password: password(),
    }
}

/// Valid body for `POST /carts/{cart_id}/items`.
#[must_use]
pub fn cart_item_create() -> CartItemCreate {
    let mut rng = rand::rng();
    CartItemCreate {
        product_id: ProductId::random(),
        name: format!("{} lamp", WORDS.choose(&mut rng).copied().unwrap_or("atlas")),
        quantity: rng.random_range(1..=5),
        unit_price: price(),
    }
}

/// Valid body for `POST /orders`, checking out the given cart.
#[must_use]
pub fn order_create(cart_id: CartId) -> OrderCreate {
    OrderCreate {
        cart_id,
        note: None,
    }
}

/// Valid body for `POST /coupons`, expiring 30 days out.
#[must_use]
pub fn coupon_create() -> CouponCreate {
    CouponCreate {
        code: coupon_code(),
        discount: price(),
        expires_at: Utc::now() + Duration::days(30),
    }
}

/// Valid body for `POST /coupons/{coupon_id}/tickets`.
#[must_use]
pub fn ticket_issue(customer_id: CustomerId) -> TicketIssue {
    TicketIssue { customer_id }
}

/// Valid body for `POST /reviews`.
#[must_use]
pub fn review_create() -> ReviewCreate {
    ReviewCreate {
        product_id: ProductId::random(),
        rating: rating(),
        title: format!("{} impressions", nickname()),
        body: paragraph(3),
    }
}

/// Turn a typed body into a mutable JSON value for negative-path tampering.
///
/// This is the only sanctioned route from a typed builder to a broken
/// payload; production-path probes never touch it.
///
/// # Panics
///
/// Panics if the body fails to serialize, which fixture types never do.
#[must_use]
pub fn raw<T: serde::Serialize>(body: &T) -> serde_json::Value {
    serde_json::to_value(body).expect("fixture bodies always serialize")
}
