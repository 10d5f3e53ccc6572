use super::*;

#[post("/emotion-points", format = "application/json", data = "<new_point>")]
pub fn post_emotion_point(
    connections: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    new_point: JsonResult<json::NewEmotionPoint>,
) -> CustomStatusResult<json::EmotionPoint> {
    let new_point = from_json::new_emotion_point(new_point?.into_inner());
    let user = account.user(&connections.shared()?)?;
    let usecases::SubmittedEmotionPoint {
        emotion_point,
        location,
        created,
    } = flows::submit_emotion_point(&connections, &user, new_point, cfg.proximity_radius)?;
    let status = if created { Status::Created } else { Status::Ok };
    Ok(status::Custom(status, Json((emotion_point, location).into())))
}

#[delete("/emotion-points/<id>")]
pub fn delete_emotion_point(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> StatusResult {
    let user = account.user(&connections.shared()?)?;
    flows::delete_emotion_point(&connections, &user, Id::new(id))?;
    Ok(Status::NoContent)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn post<'c>(client: &'c Client, body: &str) -> Response<'c> {
        client
            .post("/emotion-points")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
    }

    #[test]
    fn create_and_update_an_emotion_point() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");

        let res = post(
            &client,
            r#"{"latitude":52.2297,"longitude":21.0122,"emotional_value":4}"#,
        );
        assert_eq!(res.status(), Status::Created);
        test_json(&res);
        let created: json::EmotionPoint =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(4, created.emotional_value);
        assert_eq!(json::PrivacyStatus::Public, created.privacy_status);
        assert_eq!("Lat: 52.2297, Lon: 21.0122", created.location.name);

        // about 11 meters further north
        let res = post(
            &client,
            r#"{"latitude":52.2298,"longitude":21.0122,"emotional_value":2,"privacy_status":"private"}"#,
        );
        assert_eq!(res.status(), Status::Ok);
        let updated: json::EmotionPoint =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!(created.location.id, updated.location.id);
        assert_eq!(2, updated.emotional_value);
        assert_eq!(json::PrivacyStatus::Private, updated.privacy_status);
        assert_eq!(created.created_at, updated.created_at);
    }

    #[test]
    fn use_an_existing_location_by_id() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");
        let point = submit_named(&client, 50.0, 8.0, "Cathedral", 3, "public");
        let res = post(
            &client,
            &format!(r#"{{"location_id":{},"emotional_value":5}}"#, point.location.id),
        );
        assert_eq!(res.status(), Status::Ok);

        let res = post(&client, r#"{"location_id":9999,"emotional_value":5}"#);
        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(Some("location_id"), error_body(res).field.as_deref());
    }

    #[test]
    fn reject_invalid_emotion_points() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");

        let res = post(&client, r#"{"latitude":1.0,"longitude":1.0,"emotional_value":3}"#);
        assert_eq!(res.status(), Status::Unauthorized);

        login(&client, "alice", "secret123");
        for (body, field) in [
            (r#"{"latitude":1.0,"longitude":1.0,"emotional_value":6}"#, "emotional_value"),
            (r#"{"latitude":1.0,"longitude":1.0}"#, "emotional_value"),
            (r#"{"latitude":91.0,"longitude":1.0,"emotional_value":3}"#, "latitude"),
            (r#"{"latitude":1.0,"longitude":-181.0,"emotional_value":3}"#, "longitude"),
            (
                r#"{"latitude":1.0,"longitude":1.0,"emotional_value":3,"privacy_status":"friends"}"#,
                "privacy_status",
            ),
        ] {
            let res = post(&client, body);
            assert_eq!(res.status(), Status::BadRequest, "{body}");
            assert_eq!(Some(field), error_body(res).field.as_deref(), "{body}");
        }
    }

    #[test]
    fn only_the_owner_deletes_an_emotion_point() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        register_user(&db, "bob", "secret123");
        login(&client, "alice", "secret123");
        let point = submit(&client, 50.0, 8.0, 3, "public");
        client.post("/logout").dispatch();

        login(&client, "bob", "secret123");
        let res = client
            .delete(format!("/emotion-points/{}", point.id))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        client.post("/logout").dispatch();

        login(&client, "alice", "secret123");
        let res = client
            .delete(format!("/emotion-points/{}", point.id))
            .dispatch();
        assert_eq!(res.status(), Status::NoContent);
        let res = client
            .delete(format!("/emotion-points/{}", point.id))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }
}
