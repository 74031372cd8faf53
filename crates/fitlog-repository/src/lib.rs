//! # Fitlog Repository
//!
//! Persistence for users and exercise entries.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn ExerciseRepository>
//! SqliteUserRepository / SqliteExerciseRepository
//!   ↓  Arc<DatabasePool>
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
