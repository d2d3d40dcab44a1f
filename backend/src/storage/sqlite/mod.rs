pub mod connection;
pub mod user_repository;

pub use connection::DbConnection;
pub use user_repository::UserRepository;
