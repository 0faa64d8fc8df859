//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let park = factory::national_park::create_park(&db).await?;
//!     let trail = factory::trail::create_trail(&db, park.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let park = factory::national_park::NationalParkFactory::new(&db)
//!     .name("Yellowstone")
//!     .state("Wyoming")
//!     .picture(vec![0xFF, 0xD8])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `national_park` - Create national park entities
//! - `trail` - Create trail entities (with an owning park)
//! - `user` - Create user account entities

pub mod helpers;
pub mod national_park;
pub mod trail;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use national_park::create_park;
pub use trail::create_trail;
pub use user::create_user;
