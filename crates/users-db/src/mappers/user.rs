//! User entity <-> model mapper

use users_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity. The password is never loaded.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            date_created: model.date_created,
            status: model.status,
            password: String::new(),
        }
    }
}

/// Values bound by the insert statement. `password` must already be hashed.
pub struct UserInsert<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub date_created: &'a str,
    pub status: &'a str,
    pub password: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            date_created: &user.date_created,
            status: &user.status,
            password: &user.password,
        }
    }
}

/// Values bound by the update statement
pub struct UserUpdate<'a> {
    pub id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id,
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
        }
    }
}
