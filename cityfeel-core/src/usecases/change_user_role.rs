use super::prelude::*;

/// Grants a role without further checks, only meant
/// for administrative tools.
pub fn change_user_role<R: UserRepo>(repo: &R, username: &str, role: Role) -> Result<User> {
    log::info!("Changing role to {role} for {username}");
    let mut user = repo
        .try_get_user_by_username(username)?
        .ok_or(Error::UserDoesNotExist)?;
    user.role = role;
    repo.update_user(&user)?;
    Ok(user)
}
