use super::{create_new_user::check_person_name, prelude::*};
use crate::util::validate::Validate;

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Changes the personal data of the current user.
pub fn update_current_user<R: UserRepo>(repo: &R, user: &User, update: UserUpdate) -> Result<User> {
    let mut user = repo.get_user(user.id)?;
    if let Some(first_name) = update.first_name {
        let first_name = first_name.trim();
        check_person_name(first_name, "first_name")?;
        user.first_name = first_name.to_string();
    }
    if let Some(last_name) = update.last_name {
        let last_name = last_name.trim();
        check_person_name(last_name, "last_name")?;
        user.last_name = last_name.to_string();
    }
    if let Some(email) = update.email {
        user.email = email.parse()?;
    }
    user.validate()?;
    repo.update_user(&user)?;
    log::info!("User {} updated the profile", user.username);
    Ok(user)
}
