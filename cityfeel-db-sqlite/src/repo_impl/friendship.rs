use super::*;

impl<'a> FriendshipRepo for DbReadOnly<'a> {
    fn upsert_friendship(&self, _friendship: &Friendship) -> Result<Id> {
        unreachable!();
    }
    fn update_friendship_status(&self, _id: Id, _status: FriendshipStatus) -> Result<()> {
        unreachable!();
    }
    fn delete_friendship(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_friendship(&self, id: Id) -> Result<Friendship> {
        get_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn friendships_between(&self, a: Id, b: Id) -> Result<Vec<Friendship>> {
        friendships_between(&mut self.conn.borrow_mut(), a, b)
    }
    fn friendships_of_user(&self, user_id: Id) -> Result<Vec<Friendship>> {
        friendships_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FriendshipRepo for DbReadWrite<'a> {
    fn upsert_friendship(&self, friendship: &Friendship) -> Result<Id> {
        upsert_friendship(&mut self.conn.borrow_mut(), friendship)
    }
    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> Result<()> {
        update_friendship_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_friendship(&self, id: Id) -> Result<()> {
        delete_friendship(&mut self.conn.borrow_mut(), id)
    }

    fn get_friendship(&self, id: Id) -> Result<Friendship> {
        get_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn friendships_between(&self, a: Id, b: Id) -> Result<Vec<Friendship>> {
        friendships_between(&mut self.conn.borrow_mut(), a, b)
    }
    fn friendships_of_user(&self, user_id: Id) -> Result<Vec<Friendship>> {
        friendships_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FriendshipRepo for DbConnection<'a> {
    fn upsert_friendship(&self, friendship: &Friendship) -> Result<Id> {
        upsert_friendship(&mut self.conn.borrow_mut(), friendship)
    }
    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> Result<()> {
        update_friendship_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_friendship(&self, id: Id) -> Result<()> {
        delete_friendship(&mut self.conn.borrow_mut(), id)
    }

    fn get_friendship(&self, id: Id) -> Result<Friendship> {
        get_friendship(&mut self.conn.borrow_mut(), id)
    }
    fn friendships_between(&self, a: Id, b: Id) -> Result<Vec<Friendship>> {
        friendships_between(&mut self.conn.borrow_mut(), a, b)
    }
    fn friendships_of_user(&self, user_id: Id) -> Result<Vec<Friendship>> {
        friendships_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn load_friendship(entity: models::FriendshipEntity) -> Result<Friendship> {
    let models::FriendshipEntity {
        id,
        creator_id,
        target_id,
        status,
        created_at,
    } = entity;
    let status = status
        .parse()
        .map_err(|_| anyhow!("Invalid friendship status: {status}"))?;
    Ok(Friendship {
        id: id.into(),
        creator_id: creator_id.into(),
        target_id: target_id.into(),
        status,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn upsert_friendship(conn: &mut SqliteConnection, friendship: &Friendship) -> Result<Id> {
    use schema::friendship::dsl;
    let pending = FriendshipStatus::Pending.to_string();
    let new_friendship = models::NewFriendship {
        creator_id: friendship.creator_id.to_raw(),
        target_id: friendship.target_id.to_raw(),
        status: &pending,
        created_at: friendship.created_at.as_millis(),
    };
    // A repeated request of the same creator reopens the
    // existing row and keeps its creation time.
    let id = diesel::insert_into(schema::friendship::table)
        .values(&new_friendship)
        .on_conflict((dsl::creator_id, dsl::target_id))
        .do_update()
        .set(dsl::status.eq(pending.as_str()))
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn update_friendship_status(
    conn: &mut SqliteConnection,
    id: Id,
    status: FriendshipStatus,
) -> Result<()> {
    use schema::friendship::dsl;
    let count = diesel::update(dsl::friendship.filter(dsl::id.eq(id.to_raw())))
        .set(dsl::status.eq(status.to_string()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_friendship(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::friendship::dsl;
    let count = diesel::delete(dsl::friendship.filter(dsl::id.eq(id.to_raw())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_friendship(conn: &mut SqliteConnection, id: Id) -> Result<Friendship> {
    use schema::friendship::dsl;
    load_friendship(
        dsl::friendship
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::FriendshipEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn friendships_between(conn: &mut SqliteConnection, a: Id, b: Id) -> Result<Vec<Friendship>> {
    use schema::friendship::dsl;
    let (a, b) = (a.to_raw(), b.to_raw());
    dsl::friendship
        .filter(
            (dsl::creator_id.eq(a).and(dsl::target_id.eq(b)))
                .or(dsl::creator_id.eq(b).and(dsl::target_id.eq(a))),
        )
        .order_by(dsl::id)
        .load::<models::FriendshipEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_friendship)
        .collect()
}

fn friendships_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Friendship>> {
    use schema::friendship::dsl;
    let user_id = user_id.to_raw();
    dsl::friendship
        .filter(dsl::creator_id.eq(user_id).or(dsl::target_id.eq(user_id)))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::FriendshipEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_friendship)
        .collect()
}
