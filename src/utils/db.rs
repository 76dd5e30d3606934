use std::time::Duration;

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::*;

use crate::models::{
    challenge, nutrition_tip, strength_routine, stress_entry, training_plan, user,
    user_profile, workout,
};
use crate::storage::seed;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // Every pooled connection to an in-memory SQLite database is its own database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Creates any missing tables, then seeds the catalog tables that are empty.
pub async fn prepare_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_tables(db).await?;
    seed_if_empty(db).await
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parents before children so foreign keys resolve
    let mut statements: Vec<TableCreateStatement> = vec![
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(user_profile::Entity),
        schema.create_table_from_entity(stress_entry::Entity),
        schema.create_table_from_entity(workout::Entity),
        schema.create_table_from_entity(training_plan::Entity),
        schema.create_table_from_entity(challenge::Entity),
        schema.create_table_from_entity(nutrition_tip::Entity),
        schema.create_table_from_entity(strength_routine::Entity),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    log::info!("Database schema ready ({} tables)", statements.len());
    Ok(())
}

async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), DbErr> {
    if user::Entity::find().count(db).await? == 0 {
        let (account, profile) = seed::demo_user();
        let txn = db.begin().await?;
        user::ActiveModel::from(account).insert(&txn).await?;
        user_profile::ActiveModel::from(profile).insert(&txn).await?;
        txn.commit().await?;
        log::info!("Seeded demo user '{}'", seed::DEMO_USER_EMAIL);
    }

    if workout::Entity::find().count(db).await? == 0 {
        let rows = seed::workouts().into_iter().map(workout::ActiveModel::from);
        workout::Entity::insert_many(rows).exec(db).await?;
        log::info!("Seeded workouts");
    }

    if challenge::Entity::find().count(db).await? == 0 {
        let rows = seed::challenges().into_iter().map(challenge::ActiveModel::from);
        challenge::Entity::insert_many(rows).exec(db).await?;
        log::info!("Seeded challenges");
    }

    if nutrition_tip::Entity::find().count(db).await? == 0 {
        let rows = seed::nutrition_tips()
            .into_iter()
            .map(nutrition_tip::ActiveModel::from);
        nutrition_tip::Entity::insert_many(rows).exec(db).await?;
        log::info!("Seeded nutrition tips");
    }

    if strength_routine::Entity::find().count(db).await? == 0 {
        let rows = seed::strength_routines()
            .into_iter()
            .map(strength_routine::ActiveModel::from);
        strength_routine::Entity::insert_many(rows).exec(db).await?;
        log::info!("Seeded strength routines");
    }

    Ok(())
}
