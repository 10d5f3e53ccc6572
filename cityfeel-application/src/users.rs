use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            debug!("Rejected registration: {err}");
            err
        })
    })?)
}

pub fn update_current_user(
    connections: &sqlite::Connections,
    user: &User,
    update: usecases::UserUpdate,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_current_user(conn, user, update).map_err(|err| {
            debug!("Failed to update user {}: {err}", user.username);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_user(username: &str) -> usecases::NewUser {
        usecases::NewUser {
            username: Some(username.into()),
            email: Some(format!("{username}@example.com")),
            password1: Some("secret123".into()),
            password2: Some("secret123".into()),
            ..Default::default()
        }
    }

    #[test]
    fn register_and_reject_duplicates() {
        let fixture = BackendFixture::new();
        let user = flows::register_user(&fixture.db_connections, new_user("bob")).unwrap();
        assert!(user.id.is_valid());
        assert!(user.password.verify("secret123"));
        let err = flows::register_user(&fixture.db_connections, new_user("bob")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
    }

    #[test]
    fn update_names_and_email() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("carol");
        let update = usecases::UserUpdate {
            first_name: Some("Carol".into()),
            email: Some("carol@example.org".into()),
            ..Default::default()
        };
        flows::update_current_user(&fixture.db_connections, &user, update).unwrap();
        let user = fixture.try_get_user("carol").unwrap();
        assert_eq!("Carol", user.first_name);
        assert_eq!("carol@example.org", user.email.as_str());
    }
}
