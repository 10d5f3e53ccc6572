use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login_with_username<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    match repo.try_get_user_by_username(login.username)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

/// Loads the account of an authenticated session.
pub fn authorize_user_by_username<R: UserRepo>(repo: &R, username: &str) -> Result<User> {
    repo.try_get_user_by_username(username)?
        .ok_or(Error::Unauthorized)
}
