use super::*;

pub fn change_user_role(
    connections: &sqlite::Connections,
    username: &str,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_user_role(conn, username, role).map_err(|err| {
            warn!("Failed to change role of user {username}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_promote_a_user_to_staff() {
        let fixture = BackendFixture::new();
        fixture.create_user("alice");
        assert_eq!(fixture.try_get_user("alice").unwrap().role, Role::User);
        let user = flows::change_user_role(&fixture.db_connections, "alice", Role::Staff).unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(fixture.try_get_user("alice").unwrap().role, Role::Staff);
    }

    #[test]
    fn should_fail_for_unknown_users() {
        let fixture = BackendFixture::new();
        let err = flows::change_user_role(&fixture.db_connections, "nobody", Role::Admin)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserDoesNotExist))
        ));
    }
}
