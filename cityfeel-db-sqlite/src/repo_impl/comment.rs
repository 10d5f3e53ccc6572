use super::*;

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: &Comment) -> Result<Id> {
        unreachable!();
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn delete_comment(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_locations(&self, location_ids: &[Id]) -> Result<Vec<Comment>> {
        comments_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
}

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_locations(&self, location_ids: &[Id]) -> Result<Vec<Comment>> {
        comments_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_locations(&self, location_ids: &[Id]) -> Result<Vec<Comment>> {
        comments_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
}

fn load_comment(entity: models::CommentEntity) -> Result<Comment> {
    let models::CommentEntity {
        id,
        user_id,
        location_id,
        emotion_point_id,
        content,
        privacy_status,
        created_at,
    } = entity;
    Ok(Comment {
        id: id.into(),
        user_id: user_id.into(),
        location_id: location_id.into(),
        emotion_point_id: emotion_point_id.map(Into::into),
        content,
        privacy: load_privacy_status(&privacy_status)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<Id> {
    use schema::comment::dsl;
    let privacy_status = comment.privacy.to_string();
    let new_comment = models::NewComment {
        user_id: comment.user_id.to_raw(),
        location_id: comment.location_id.to_raw(),
        emotion_point_id: comment.emotion_point_id.map(Id::to_raw),
        content: &comment.content,
        privacy_status: &privacy_status,
        created_at: comment.created_at.as_millis(),
    };
    let id = diesel::insert_into(schema::comment::table)
        .values(&new_comment)
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

/// Only content and privacy of a comment are mutable.
fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(dsl::comment.filter(dsl::id.eq(comment.id.to_raw())))
        .set((
            dsl::content.eq(comment.content.as_str()),
            dsl::privacy_status.eq(comment.privacy.to_string()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_comment(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::delete(dsl::comment.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_comment(conn: &mut SqliteConnection, id: Id) -> Result<Comment> {
    use schema::comment::dsl;
    load_comment(
        dsl::comment
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::CommentEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn comments_of_locations(conn: &mut SqliteConnection, location_ids: &[Id]) -> Result<Vec<Comment>> {
    use schema::comment::dsl;
    dsl::comment
        .filter(dsl::location_id.eq_any(ids_to_raw(location_ids)))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_comment)
        .collect()
}

fn all_comments(conn: &mut SqliteConnection) -> Result<Vec<Comment>> {
    use schema::comment::dsl;
    dsl::comment
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_comment)
        .collect()
}
