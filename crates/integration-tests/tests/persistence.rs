//! Slot persistence across restarts: round-trips, legacy upgrades, faults.

#![allow(clippy::unwrap_used)]

use std::fs;

use autohaus_core::{Car, Money};
use autohaus_integration_tests::TestContext;
use autohaus_showroom::{App, Config, Error};

#[test]
fn catalog_round_trips_through_a_restart() {
    let ctx = TestContext::new();

    let before: Vec<Car> = {
        let mut app = ctx.app();
        let catalog = app.catalog_mut();
        catalog
            .add(Car::new(
                "Audi",
                "RS6",
                Money::from(98_000),
                "Estate",
                "rs6.png",
            ))
            .unwrap();
        catalog.delete(1).unwrap();
        catalog
            .update(
                0,
                Car::new(
                    "Mercedes-Benz",
                    "S580",
                    Money::from(65_000),
                    "Luxury Sedan",
                    "mers_s580.png",
                ),
            )
            .unwrap();
        catalog.list().to_vec()
    };

    let app = ctx.app();
    assert_eq!(app.catalog().list(), &before[..]);
}

#[test]
fn seeded_defaults_are_not_persisted_until_first_mutation() {
    let ctx = TestContext::new();
    let catalog_path = ctx.data_dir().join("catalog.json");

    {
        let app = ctx.app();
        assert_eq!(app.catalog().len(), 4);
        assert!(!catalog_path.exists());
    }

    {
        let mut app = ctx.app();
        app.catalog_mut().delete(3).unwrap();
    }
    assert!(catalog_path.exists());

    let app = ctx.app();
    assert_eq!(app.catalog().len(), 3);
}

#[test]
fn legacy_directory_entries_upgrade_through_the_app() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.data_dir()).unwrap();
    fs::write(
        ctx.data_dir().join("directory.json"),
        r#"{
            "alice": {"username": "alice", "password": "wonderland", "balance": "250.75"},
            "bob": "builder"
        }"#,
    )
    .unwrap();

    let mut app = ctx.app();
    assert_eq!(app.directory().len(), 2);
    assert_eq!(
        app.directory().get("alice").unwrap().balance,
        Money::parse("250.75").unwrap()
    );

    let bob = app.directory().get("bob").unwrap();
    assert_eq!(bob.username.as_str(), "bob");
    assert_eq!(bob.balance, Money::ZERO);

    // The upgraded record authenticates with the legacy password.
    assert!(app.login("bob", "builder").is_some());
}

#[test]
fn legacy_numeric_prices_decode_in_the_catalog() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.data_dir()).unwrap();
    fs::write(
        ctx.data_dir().join("catalog.json"),
        r#"[{
            "brand": "Volkswagen",
            "model": "ID.6",
            "price": 3500,
            "description": "Compact Car",
            "photo": "vw.png"
        }]"#,
    )
    .unwrap();

    let app = ctx.app();
    assert_eq!(app.catalog().len(), 1);
    assert_eq!(app.catalog().get(0).unwrap().price, Money::from(3_500));
}

#[test]
fn corrupt_slot_is_a_fault_not_a_reset() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.data_dir()).unwrap();
    fs::write(ctx.data_dir().join("cart.json"), "not json {").unwrap();

    let result = App::open(Config::with_data_dir(ctx.data_dir()));
    assert!(matches!(
        result,
        Err(Error::Corrupt { ref slot, .. }) if slot == "cart"
    ));
}

#[test]
fn slots_are_independent_durability_domains() {
    let ctx = TestContext::new();

    {
        let mut app = ctx.app();
        app.directory_mut()
            .add(TestContext::user("alice", "wonderland", 100_000))
            .unwrap();
    }

    assert!(ctx.data_dir().join("directory.json").exists());
    assert!(!ctx.data_dir().join("catalog.json").exists());
    assert!(!ctx.data_dir().join("cart.json").exists());
}
