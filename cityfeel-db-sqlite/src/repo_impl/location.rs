use super::*;

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: &Location) -> Result<Id> {
        unreachable!();
    }
    fn get_location(&self, id: Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn get_locations(&self, ids: &[Id]) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), ids)
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

impl<'a> LocationRepo for DbReadWrite<'a> {
    fn create_location(&self, location: &Location) -> Result<Id> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn get_locations(&self, ids: &[Id]) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), ids)
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: &Location) -> Result<Id> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: Id) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn get_locations(&self, ids: &[Id]) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), ids)
    }
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), query)
    }
}

fn load_location(entity: models::LocationEntity) -> Result<Location> {
    let models::LocationEntity { id, name, lat, lon } = entity;
    Ok(Location {
        id: id.into(),
        name,
        pos: load_map_point(lat, lon)?,
    })
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<Id> {
    use schema::location::dsl;
    let (lat, lon) = location.pos.to_lat_lng_deg();
    let new_location = models::NewLocation {
        name: &location.name,
        lat,
        lon,
    };
    let id = diesel::insert_into(schema::location::table)
        .values(&new_location)
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn get_location(conn: &mut SqliteConnection, id: Id) -> Result<Location> {
    use schema::location::dsl;
    load_location(
        dsl::location
            .filter(dsl::id.eq(id.to_raw()))
            .first::<models::LocationEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn get_locations(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<Location>> {
    use schema::location::dsl;
    dsl::location
        .filter(dsl::id.eq_any(ids_to_raw(ids)))
        .order_by(dsl::id)
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_location)
        .collect()
}

fn query_locations(conn: &mut SqliteConnection, params: &LocationQuery) -> Result<Vec<Location>> {
    use schema::{emotion_point::dsl as ep_dsl, location::dsl};
    let LocationQuery {
        name,
        bbox,
        emotional_values,
    } = params;
    let mut query = dsl::location.order_by(dsl::id).into_boxed();
    if let Some(bbox) = bbox {
        let (south, west) = bbox.south_west().to_lat_lng_deg();
        let (north, east) = bbox.north_east().to_lat_lng_deg();
        query = query
            .filter(dsl::lat.between(south, north))
            .filter(dsl::lon.between(west, east));
    }
    if let Some(values) = emotional_values {
        let values: Vec<i16> = values.iter().map(|v| i16::from(v.to_u8())).collect();
        let public = PrivacyStatus::Public.to_string();
        query = query.filter(
            dsl::id.eq_any(
                schema::emotion_point::table
                    .select(ep_dsl::location_id)
                    .filter(ep_dsl::privacy_status.eq(public))
                    .filter(ep_dsl::emotional_value.eq_any(values)),
            ),
        );
    }
    // SQLite's LIKE only folds ASCII letters
    let name = name.as_deref().map(str::to_lowercase);
    query
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .filter(|l| {
            name.as_deref()
                .map_or(true, |name| l.name.to_lowercase().contains(name))
        })
        .map(load_location)
        .collect()
}
