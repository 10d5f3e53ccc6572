use super::{non_blank, prelude::*, required};
use crate::util::validate::{self, Validate};

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password1: Option<String>,
    pub password2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub const MAX_PERSON_NAME_LEN: usize = 150;

pub(crate) fn check_person_name(name: &str, field: &'static str) -> Result<()> {
    if name.chars().count() > MAX_PERSON_NAME_LEN {
        return Err(Error::Name(field));
    }
    Ok(())
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let username = required(non_blank(u.username), "username")?.trim().to_string();
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let email = required(non_blank(u.email), "email")?;
    let password1 = required(non_blank(u.password1), "password1")?;
    let password2 = required(non_blank(u.password2), "password2")?;
    let first_name = u.first_name.unwrap_or_default().trim().to_string();
    let last_name = u.last_name.unwrap_or_default().trim().to_string();
    check_person_name(&first_name, "first_name")?;
    check_person_name(&last_name, "last_name")?;
    if password1 != password2 {
        return Err(Error::PasswordMismatch);
    }
    let mut new_user = User {
        id: Id::default(),
        username,
        email: email.parse::<EmailAddress>()?,
        password: password1.parse::<Password>()?,
        first_name,
        last_name,
        avatar: None,
        role: Role::User,
        date_joined: Timestamp::now(),
    };
    new_user.validate()?;
    if repo.try_get_user_by_username(&new_user.username)?.is_some() {
        return Err(Error::UserExists);
    }
    log::debug!("Creating new user: username = {}", new_user.username);
    new_user.id = repo.create_user(&new_user)?;
    Ok(new_user)
}
