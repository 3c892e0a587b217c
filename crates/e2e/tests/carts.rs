//! Contract probes for carts and their nested line items.
//!
//! Run with: `cargo test -p galleria-e2e -- --ignored`

use galleria_core::{Cart, CartCreate, CartId, CartItemUpdate, Price};
use galleria_harness::{expect_error, fixtures, shapes};
use galleria_sdk::{Connection, carts, raw};

fn connection() -> Connection {
    galleria_e2e::config()
        .as_customer()
        .expect("customer connection")
}

/// Open a fresh guest cart for one probe.
async fn open_cart(conn: &Connection) -> Cart {
    carts::create(conn, &CartCreate::default())
        .await
        .expect("opening a guest cart should succeed")
}

// ============================================================================
// Cart lifecycle
// ============================================================================

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_create_and_fetch() {
    let conn = connection();

    let cart = open_cart(&conn).await;
    shapes::assert_dto_conforms(&cart, &shapes::cart());

    let fetched = carts::at(&conn, cart.id).await.expect("fetch by id");
    assert_eq!(fetched.id, cart.id);
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_erase_unknown_id_fails() {
    let conn = connection();

    expect_error(
        "discarding a cart id the backend never issued",
        carts::erase(&conn, CartId::random()),
    )
    .await;
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_erase_then_fetch_fails() {
    let conn = connection();

    let cart = open_cart(&conn).await;
    carts::erase(&conn, cart.id).await.expect("discard");

    expect_error("fetching a discarded cart", carts::at(&conn, cart.id)).await;
}

// ============================================================================
// Line items (nested resource)
// ============================================================================

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_add_and_list() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    let body = fixtures::cart_item_create();
    let item = carts::items::create(&conn, cart.id, &body)
        .await
        .expect("adding a line item should succeed");

    shapes::assert_dto_conforms(&item, &shapes::cart_item());
    assert_eq!(item.cart_id, cart.id);
    assert_eq!(item.quantity, body.quantity);
    assert_eq!(item.unit_price, body.unit_price);

    let items = carts::items::index(&conn, cart.id).await.expect("list");
    assert!(items.iter().any(|i| i.id == item.id));
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_update_quantity() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    let item = carts::items::create(&conn, cart.id, &fixtures::cart_item_create())
        .await
        .expect("add item");

    let updated = carts::items::update(
        &conn,
        cart.id,
        item.id,
        &CartItemUpdate { quantity: Some(7) },
    )
    .await
    .expect("quantity update");

    assert_eq!(updated.quantity, 7);
    assert_eq!(updated.id, item.id);
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_zero_quantity_rejected() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    let mut body = fixtures::cart_item_create();
    body.quantity = 0;

    expect_error(
        "adding a line item with zero quantity",
        carts::items::create(&conn, cart.id, &body),
    )
    .await;
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_non_positive_price_rejected() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    let mut body = fixtures::cart_item_create();
    body.unit_price = Price::from_cents(-100);

    expect_error(
        "adding a line item with a negative unit price",
        carts::items::create(&conn, cart.id, &body),
    )
    .await;
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_missing_name_rejected() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    // Typed builders cannot drop a required field; tamper via the raw hatch
    let mut body = fixtures::raw(&fixtures::cart_item_create());
    body.as_object_mut()
        .expect("fixture serializes to an object")
        .remove("name");

    expect_error(
        "adding a line item with the name field missing",
        raw::post(&conn, &format!("carts/{}/items", cart.id), &body),
    )
    .await;
}

#[tokio::test]
#[ignore = "requires a running mall backend"]
async fn test_cart_item_erase_removes_it_from_listing() {
    let conn = connection();
    let cart = open_cart(&conn).await;

    let item = carts::items::create(&conn, cart.id, &fixtures::cart_item_create())
        .await
        .expect("add item");

    carts::items::erase(&conn, cart.id, item.id)
        .await
        .expect("remove item");

    let items = carts::items::index(&conn, cart.id).await.expect("list");
    assert!(items.iter().all(|i| i.id != item.id));
}
