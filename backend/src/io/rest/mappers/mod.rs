pub mod user_mapper;

pub use user_mapper::UserMapper;
