use super::*;

impl<'a> EmotionPointRepo for DbReadOnly<'a> {
    fn upsert_emotion_point(&self, _point: &EmotionPoint) -> Result<Id> {
        unreachable!();
    }

    fn get_emotion_point(&self, id: Id) -> Result<EmotionPoint> {
        get_emotion_point(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_emotion_point_of_user(
        &self,
        user_id: Id,
        location_id: Id,
    ) -> Result<Option<EmotionPoint>> {
        try_get_emotion_point_of_user(&mut self.conn.borrow_mut(), user_id, location_id)
    }
    fn emotion_points_of_locations(&self, location_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn emotion_points_of_users(&self, user_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_users(&mut self.conn.borrow_mut(), user_ids)
    }

    fn delete_emotion_point(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> EmotionPointRepo for DbReadWrite<'a> {
    fn upsert_emotion_point(&self, point: &EmotionPoint) -> Result<Id> {
        upsert_emotion_point(&mut self.conn.borrow_mut(), point)
    }

    fn get_emotion_point(&self, id: Id) -> Result<EmotionPoint> {
        get_emotion_point(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_emotion_point_of_user(
        &self,
        user_id: Id,
        location_id: Id,
    ) -> Result<Option<EmotionPoint>> {
        try_get_emotion_point_of_user(&mut self.conn.borrow_mut(), user_id, location_id)
    }
    fn emotion_points_of_locations(&self, location_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn emotion_points_of_users(&self, user_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_users(&mut self.conn.borrow_mut(), user_ids)
    }

    fn delete_emotion_point(&self, id: Id) -> Result<()> {
        delete_emotion_point(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> EmotionPointRepo for DbConnection<'a> {
    fn upsert_emotion_point(&self, point: &EmotionPoint) -> Result<Id> {
        upsert_emotion_point(&mut self.conn.borrow_mut(), point)
    }

    fn get_emotion_point(&self, id: Id) -> Result<EmotionPoint> {
        get_emotion_point(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_emotion_point_of_user(
        &self,
        user_id: Id,
        location_id: Id,
    ) -> Result<Option<EmotionPoint>> {
        try_get_emotion_point_of_user(&mut self.conn.borrow_mut(), user_id, location_id)
    }
    fn emotion_points_of_locations(&self, location_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn emotion_points_of_users(&self, user_ids: &[Id]) -> Result<Vec<EmotionPoint>> {
        emotion_points_of_users(&mut self.conn.borrow_mut(), user_ids)
    }

    fn delete_emotion_point(&self, id: Id) -> Result<()> {
        delete_emotion_point(&mut self.conn.borrow_mut(), id)
    }
}

fn load_emotion_point(entity: models::EmotionPointEntity) -> Result<EmotionPoint> {
    let models::EmotionPointEntity {
        id,
        user_id,
        location_id,
        emotional_value,
        privacy_status,
        created_at,
        updated_at,
    } = entity;
    Ok(EmotionPoint {
        id: id.into(),
        user_id: user_id.into(),
        location_id: location_id.into(),
        value: load_emotion_value(emotional_value)?,
        privacy: load_privacy_status(&privacy_status)?,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn upsert_emotion_point(conn: &mut SqliteConnection, point: &EmotionPoint) -> Result<Id> {
    use schema::emotion_point::dsl;
    let privacy_status = point.privacy.to_string();
    let emotional_value = i16::from(point.value.to_u8());
    let updated_at = point.updated_at.as_millis();
    let new_point = models::NewEmotionPoint {
        user_id: point.user_id.to_raw(),
        location_id: point.location_id.to_raw(),
        emotional_value,
        privacy_status: &privacy_status,
        created_at: point.created_at.as_millis(),
        updated_at,
    };
    // The unique constraint on (user_id, location_id) turns
    // a repeated submission into an update of the existing row.
    let id = diesel::insert_into(schema::emotion_point::table)
        .values(&new_point)
        .on_conflict((dsl::user_id, dsl::location_id))
        .do_update()
        .set((
            dsl::emotional_value.eq(emotional_value),
            dsl::privacy_status.eq(privacy_status.as_str()),
            dsl::updated_at.eq(updated_at),
        ))
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn get_emotion_point(conn: &mut SqliteConnection, id: Id) -> Result<EmotionPoint> {
    use schema::emotion_point::dsl;
    load_emotion_point(
        dsl::emotion_point
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::EmotionPointEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn try_get_emotion_point_of_user(
    conn: &mut SqliteConnection,
    user_id: Id,
    location_id: Id,
) -> Result<Option<EmotionPoint>> {
    use schema::emotion_point::dsl;
    dsl::emotion_point
        .filter(dsl::user_id.eq(user_id.to_raw()))
        .filter(dsl::location_id.eq(location_id.to_raw()))
        .first::<models::EmotionPointEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_emotion_point)
        .transpose()
}

fn emotion_points_of_locations(
    conn: &mut SqliteConnection,
    location_ids: &[Id],
) -> Result<Vec<EmotionPoint>> {
    use schema::emotion_point::dsl;
    dsl::emotion_point
        .filter(dsl::location_id.eq_any(ids_to_raw(location_ids)))
        .order_by(dsl::id)
        .load::<models::EmotionPointEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_emotion_point)
        .collect()
}

fn emotion_points_of_users(
    conn: &mut SqliteConnection,
    user_ids: &[Id],
) -> Result<Vec<EmotionPoint>> {
    use schema::emotion_point::dsl;
    dsl::emotion_point
        .filter(dsl::user_id.eq_any(ids_to_raw(user_ids)))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::EmotionPointEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_emotion_point)
        .collect()
}

fn delete_emotion_point(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::{comment::dsl as comment_dsl, emotion_point::dsl};
    // Comments are removed explicitly in case foreign key
    // enforcement is disabled for the connection.
    let comments = diesel::delete(
        schema::comment::table.filter(comment_dsl::emotion_point_id.eq(Some(id.to_raw()))),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    log::debug!("Deleting emotion point {id} together with {comments} comment(s)");
    let count = diesel::delete(dsl::emotion_point.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
