use shared::UserDto;

use crate::domain::models::User;

/// Converts domain users into wire DTOs
pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(user: User) -> UserDto {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
