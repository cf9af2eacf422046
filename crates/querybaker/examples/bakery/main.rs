//! Bake the statements for a small bakery schema.
//!
//! Run with:
//!   cargo run --example bakery -p querybaker
//!
//! Optional:
//!   QUERYBAKER_CONFIG=querybaker.toml   (e.g. `dialect = "postgres"`)
//!   RUST_LOG=querybaker.sql=debug       (print each statement as it is built)

use querybaker::prelude::*;
use std::env;
use tracing_subscriber::EnvFilter;

fn load_config() -> QbResult<Config> {
    match env::var("QUERYBAKER_CONFIG") {
        Ok(path) => Config::load(path),
        Err(_) => Ok(Config::default()),
    }
}

fn main() -> QbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    println!("-- dialect: {}", config.dialect);

    let breads = Table::new("breads").with_alias("b").try_columns([
        Column::new("id", DataType::Integer, 1)
            .not_null()
            .primary_key()
            .auto_increment(),
        Column::new("name", DataType::Varchar, 80).not_null(),
        Column::new("price", DataType::Decimal, 1),
        Column::new("baked_on", DataType::Date, 1),
    ])?;
    let orders = Table::new("orders").with_alias("o").try_columns([
        Column::new("id", DataType::Integer, 1).not_null().primary_key(),
        Column::new("bread_id", DataType::Integer, 1).not_null(),
        Column::new("quantity", DataType::Smallint, 1),
    ])?;

    println!("{}", breads.try_build_with(&config)?);
    println!("{}", orders.try_build_with(&config)?);

    let id = breads.column("id")?;
    let name = breads.column("name")?;
    let price = breads.column("price")?;
    let baked_on = breads.column("baked_on")?;
    let bread_id = orders.column("bread_id")?;
    let quantity = orders.column("quantity")?;

    let insert = breads
        .insert()
        .values([pair(name, "sourdough"), pair(price, 6.5)]);
    println!("{}", insert.try_build_with(&config)?);

    let popular = breads
        .select()
        .columns([name, quantity])
        .inner_join(&orders, equal(id, bread_id))
        .where_(and(
            greater_than(quantity, 10),
            not(less_than(price, 2)),
        ))
        .order([name]);
    println!("{}", popular.build_with(&config));

    let markdown = breads
        .update()
        .set(pair(price, 3))
        .where_(less_than(baked_on, "2024-01-01"));
    println!("{}", markdown.try_build_with(&config)?);

    println!("{}", orders.delete().where_(equal(quantity, 0)).build_with(&config));
    println!("{}", orders.truncate());
    println!("{}", breads.drop());

    Ok(())
}
