//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name to prevent unique-constraint collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a trail together with its owning national park.
///
/// Convenience method for tests that only care about having a valid trail
/// and its foreign-key target in place.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((park, trail))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trail_with_park(
    db: &DatabaseConnection,
) -> Result<(entity::national_park::Model, entity::trail::Model), DbErr> {
    let park = crate::factory::national_park::create_park(db).await?;
    let trail = crate::factory::trail::create_trail(db, park.id).await?;

    Ok((park, trail))
}
