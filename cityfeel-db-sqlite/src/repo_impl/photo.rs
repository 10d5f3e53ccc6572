use super::*;

impl<'a> PhotoRepo for DbReadOnly<'a> {
    fn create_photo(&self, _photo: &Photo) -> Result<Id> {
        unreachable!();
    }
    fn delete_photo(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_location(&self, location_id: Id) -> Result<Vec<Photo>> {
        photos_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl<'a> PhotoRepo for DbReadWrite<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<Id> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: Id) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_location(&self, location_id: Id) -> Result<Vec<Photo>> {
        photos_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

impl<'a> PhotoRepo for DbConnection<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<Id> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: Id) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_location(&self, location_id: Id) -> Result<Vec<Photo>> {
        photos_of_location(&mut self.conn.borrow_mut(), location_id)
    }
}

fn load_photo(entity: models::PhotoEntity) -> Result<Photo> {
    let models::PhotoEntity {
        id,
        user_id,
        location_id,
        image,
        caption,
        privacy_status,
        created_at,
    } = entity;
    Ok(Photo {
        id: id.into(),
        user_id: user_id.map(Into::into),
        location_id: location_id.into(),
        image,
        caption,
        privacy: load_privacy_status(&privacy_status)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<Id> {
    use schema::photo::dsl;
    let privacy_status = photo.privacy.to_string();
    let new_photo = models::NewPhoto {
        user_id: photo.user_id.map(Id::to_raw),
        location_id: photo.location_id.to_raw(),
        image: &photo.image,
        caption: &photo.caption,
        privacy_status: &privacy_status,
        created_at: photo.created_at.as_millis(),
    };
    let id = diesel::insert_into(schema::photo::table)
        .values(&new_photo)
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn delete_photo(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::photo::dsl;
    let count = diesel::delete(dsl::photo.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_photo(conn: &mut SqliteConnection, id: Id) -> Result<Photo> {
    use schema::photo::dsl;
    load_photo(
        dsl::photo
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::PhotoEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn photos_of_location(conn: &mut SqliteConnection, location_id: Id) -> Result<Vec<Photo>> {
    use schema::photo::dsl;
    dsl::photo
        .filter(dsl::location_id.eq(location_id.to_raw()))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_photo)
        .collect()
}
