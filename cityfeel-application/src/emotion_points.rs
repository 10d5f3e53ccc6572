use super::*;

pub fn submit_emotion_point(
    connections: &sqlite::Connections,
    user: &User,
    new_point: usecases::NewEmotionPoint,
    proximity_radius: Distance,
) -> Result<usecases::SubmittedEmotionPoint> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_emotion_point(conn, user, new_point, proximity_radius).map_err(|err| {
            debug!("Rejected emotion point of user {}: {err}", user.username);
            err
        })
    })?)
}

pub fn delete_emotion_point(
    connections: &sqlite::Connections,
    user: &User,
    id: Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_emotion_point(conn, user, id).map_err(|err| {
            warn!("Failed to delete emotion point {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn nearby_submissions_share_a_location() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice");
        let bob = fixture.create_user("bob");
        let first = fixture.submit(&alice, 52.2297, 21.0122, 4);
        assert!(first.created);
        let second = fixture.submit(&bob, 52.2298, 21.0122, 2);
        assert!(second.created);
        assert_eq!(first.location.id, second.location.id);

        let again = fixture.submit(&alice, 52.22975, 21.0122, 5);
        assert!(!again.created);
        assert_eq!(first.emotion_point.id, again.emotion_point.id);
        assert_eq!(5, again.emotion_point.value.to_u8());
    }

    #[test]
    fn only_the_owner_deletes() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice");
        let bob = fixture.create_user("bob");
        let point = fixture.submit(&alice, 50.0, 8.0, 3).emotion_point;

        let err = flows::delete_emotion_point(&fixture.db_connections, &bob, point.id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));
        flows::delete_emotion_point(&fixture.db_connections, &alice, point.id).unwrap();
        let err =
            flows::delete_emotion_point(&fixture.db_connections, &alice, point.id).unwrap_err();
        assert!(matches!(err, AppError::Business(BError::Repo(RepoError::NotFound))));
    }
}
