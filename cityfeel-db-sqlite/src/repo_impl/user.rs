use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<Id> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(
        &self,
        username_contains: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), username_contains, pagination)
    }
    fn count_users(&self, username_contains: Option<&str>) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), username_contains)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(
        &self,
        username_contains: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), username_contains, pagination)
    }
    fn count_users(&self, username_contains: Option<&str>) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), username_contains)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn query_users(
        &self,
        username_contains: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<User>> {
        query_users(&mut self.conn.borrow_mut(), username_contains, pagination)
    }
    fn count_users(&self, username_contains: Option<&str>) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), username_contains)
    }
}

fn new_user(u: &User) -> models::NewUser<'_> {
    models::NewUser {
        username: &u.username,
        email: u.email.as_str(),
        password: u.password.as_ref(),
        first_name: &u.first_name,
        last_name: &u.last_name,
        avatar: u.avatar.as_deref(),
        role: u.role as i16,
        date_joined: u.date_joined.as_millis(),
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        username,
        email,
        password,
        first_name,
        last_name,
        avatar,
        role,
        date_joined,
    } = entity;
    Ok(User {
        id: id.into(),
        username,
        email: EmailAddress::new_unchecked(email),
        password: password.into(),
        first_name,
        last_name,
        avatar,
        role: load_role(role)?,
        date_joined: Timestamp::from_millis(date_joined),
    })
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<Id> {
    use schema::users::dsl;
    let id = diesel::insert_into(schema::users::table)
        .values(&new_user(u))
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.to_raw())))
        .set(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    load_user(
        dsl::users
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::UserEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn get_users(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq_any(ids_to_raw(ids)))
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn query_users(
    conn: &mut SqliteConnection,
    username_contains: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<User>> {
    use schema::users::dsl;
    let mut query = dsl::users
        .order_by((dsl::date_joined.desc(), dsl::id.desc()))
        .into_boxed();
    if let Some(needle) = username_contains {
        query = query.filter(dsl::username.like(contains_pattern(needle)).escape('\\'));
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(i64::try_from(limit).unwrap_or(i64::MAX));
    }
    if let Some(offset) = pagination.offset {
        // OFFSET without LIMIT is not supported
        if pagination.limit.is_none() {
            query = query.limit(i64::MAX);
        }
        query = query.offset(i64::try_from(offset).unwrap_or(i64::MAX));
    }
    query
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn count_users(conn: &mut SqliteConnection, username_contains: Option<&str>) -> Result<u64> {
    use schema::users::dsl;
    let mut query = dsl::users.into_boxed();
    if let Some(needle) = username_contains {
        query = query.filter(dsl::username.like(contains_pattern(needle)).escape('\\'));
    }
    Ok(query
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}
