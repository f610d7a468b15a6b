pub mod postgres;
pub mod store;

pub use postgres::PgUserStore;
pub use store::{AuthUser, UserStore, UserStoreError};
