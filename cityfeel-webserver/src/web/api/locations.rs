use super::*;

#[allow(clippy::too_many_arguments)]
#[get("/locations?<name>&<lat>&<lon>&<radius>&<bbox>&<emotional_value>&<page>")]
pub fn get_locations(
    connections: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    name: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
    radius: Option<String>,
    bbox: Option<String>,
    emotional_value: Option<String>,
    page: Option<u64>,
) -> Result<json::Page<json::Location>> {
    let db = connections.shared()?;
    account.user(&db)?;
    let filter = usecases::LocationFilter {
        name,
        lat,
        lon,
        radius,
        bbox,
        emotional_value,
    };
    let locations =
        usecases::query_locations(&db, &filter, page.unwrap_or(1), cfg.page_size)?;
    Ok(Json(to_json::page(locations, to_json::location)))
}

#[get("/locations/<id>")]
pub fn get_location(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::LocationDetail> {
    let db = connections.shared()?;
    let viewer = account.user(&db)?;
    let details = usecases::location_detail(&db, &viewer, Id::new(id))?;
    Ok(Json(to_json::location_detail(details)))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn get_page(client: &Client, query: &str) -> json::Page<json::Location> {
        let res = client.get(format!("/locations{query}")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        serde_json::from_str(&res.into_string().unwrap()).unwrap()
    }

    fn names(page: &json::Page<json::Location>) -> Vec<&str> {
        page.items.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn locations_require_authentication() {
        let (client, _) = setup();
        let res = client.get("/locations").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        assert_eq!(401, error_body(res).http_status);
    }

    #[test]
    fn list_public_statistics_ordered_by_average() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        register_user(&db, "bob", "secret123");

        login(&client, "alice", "secret123");
        submit_named(&client, 52.0, 13.0, "Park", 2, "public");
        submit_named(&client, 48.0, 11.0, "Square", 5, "private");
        submit_named(&client, 50.0, 8.0, "Bridge", 4, "public");
        client.post("/logout").dispatch();

        login(&client, "bob", "secret123");
        submit_named(&client, 52.0, 13.0, "Park", 5, "public");

        let page = get_page(&client, "");
        // 3.5, 4.0 and no public rating
        assert_eq!(vec!["Bridge", "Park", "Square"], names(&page));
        let park = &page.items[1];
        assert_eq!(Some(3.5), park.avg_emotional_value);
        assert_eq!(2, park.emotion_points_count);
        let square = &page.items[2];
        assert_eq!(None, square.avg_emotional_value);
        assert_eq!(0, square.emotion_points_count);
    }

    #[test]
    fn filter_locations() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");
        submit_named(&client, 52.2297, 21.0122, "Old Town", 4, "public");
        submit_named(&client, 52.2400, 21.0122, "New Town", 2, "public");
        submit_named(&client, 50.0647, 19.9450, "Main Square", 5, "private");

        assert_eq!(vec!["Old Town", "New Town"], names(&get_page(&client, "?name=town")));
        assert_eq!(
            vec!["Old Town"],
            names(&get_page(&client, "?lat=52.2297&lon=21.0122&radius=500"))
        );
        // incomplete circles are ignored
        assert_eq!(3, get_page(&client, "?lat=52.2297&lon=21.0122").total);
        assert_eq!(0, get_page(&client, "?lat=52.2297&lon=21.0122&radius=0").total);
        assert_eq!(0, get_page(&client, "?lat=abc&lon=21.0122&radius=10").total);

        assert_eq!(
            vec!["Old Town", "New Town"],
            names(&get_page(&client, "?bbox=20.9,52.2,21.1,52.3"))
        );
        assert_eq!(0, get_page(&client, "?bbox=20.9,52.2,21.1").total);

        assert_eq!(vec!["Old Town"], names(&get_page(&client, "?emotional_value=4,5")));
        assert_eq!(0, get_page(&client, "?emotional_value=5").total);
        assert_eq!(0, get_page(&client, "?emotional_value=x").total);
    }

    #[test]
    fn filter_non_ascii_names_case_insensitive() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");
        submit_named(&client, 52.2318, 21.0060, "Pałac Kultury", 4, "public");
        submit_named(&client, 52.2150, 21.0350, "Łazienki Północne", 5, "public");

        // PAŁAC
        assert_eq!(vec!["Pałac Kultury"], names(&get_page(&client, "?name=PA%C5%81AC")));
        // łazienki
        assert_eq!(
            vec!["Łazienki Północne"],
            names(&get_page(&client, "?name=%C5%82azienki"))
        );
        // empty values do not filter
        assert_eq!(2, get_page(&client, "?name=&bbox=&emotional_value=").total);
    }

    #[test]
    fn page_beyond_the_end_is_empty() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");
        submit(&client, 52.0, 13.0, 3, "public");
        let page = get_page(&client, "?page=18446744073709551615");
        assert_eq!(1, page.total);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn paginate_locations() {
        let (client, db) = setup_with_page_size(2);
        register_user(&db, "alice", "secret123");
        login(&client, "alice", "secret123");
        for i in 0..5 {
            submit(&client, 40.0 + f64::from(i), 10.0, 3, "public");
        }
        let first = get_page(&client, "");
        assert_eq!(5, first.total);
        assert_eq!(2, first.items.len());
        assert!(first.has_next);
        let last = get_page(&client, "?page=3");
        assert_eq!(1, last.items.len());
        assert!(!last.has_next);
    }

    #[test]
    fn location_detail() {
        let (client, db) = setup();
        register_user(&db, "alice", "secret123");
        register_user(&db, "bob", "secret123");

        login(&client, "alice", "secret123");
        let own = submit(&client, 52.0, 13.0, 3, "private");
        let location_id = own.location.id;
        upload_photo(&client, location_id, &png_image(), "private");
        client.post("/logout").dispatch();

        login(&client, "bob", "secret123");
        submit(&client, 52.0, 13.0, 5, "public");
        submit(&client, 52.0001, 13.0, 5, "public");
        upload_photo(&client, location_id, &png_image(), "public");

        let res = client.get(format!("/locations/{location_id}")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let detail: json::LocationDetail =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(location_id, detail.location.id);
        assert_eq!(Some(5.0), detail.location.avg_emotional_value);
        let counts: Vec<_> = detail
            .emotional_value_distribution
            .iter()
            .map(|c| (c.emotional_value, c.count))
            .collect();
        assert_eq!(vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 1)], counts);
        assert_eq!(5, detail.own_emotion_point.unwrap().emotional_value);
        // the private photo of alice is hidden
        assert_eq!(1, detail.photos.len());

        let res = client.get("/locations/9999").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }
}
