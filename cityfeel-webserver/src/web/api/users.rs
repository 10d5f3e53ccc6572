use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    connections: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> CustomStatusResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&connections, new_user)?;
    Ok(created(user.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    connections: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            username: &login.username,
            password: &login.password,
        };
        usecases::login_with_username(&connections.shared()?, &credentials).map_err(|err| {
            debug!("Login with username '{}' failed: {err}", login.username);
            err
        })?
    };
    let token = jwt_state.generate_token(&user.username)?;
    cookies.add_private(
        Cookie::build((COOKIE_USERNAME_KEY, user.username))
            .same_site(rocket::http::SameSite::None),
    );
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(COOKIE_USERNAME_KEY);
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[get("/users/current")]
pub fn get_current_user(connections: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&connections.shared()?)?;
    Ok(Json(user.into()))
}

#[patch("/users/current", format = "application/json", data = "<update>")]
pub fn patch_current_user(
    connections: sqlite::Connections,
    account: Account,
    update: JsonResult<json::UserUpdate>,
) -> Result<json::User> {
    let update = from_json::user_update(update?.into_inner());
    let user = account.user(&connections.shared()?)?;
    let user = flows::update_current_user(&connections, &user, update)?;
    Ok(Json(user.into()))
}

#[get("/users/<id>/profile")]
pub fn get_user_profile(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::UserProfile> {
    let db = connections.shared()?;
    let viewer = account.user(&db)?;
    let profile = usecases::user_profile(&db, &viewer, Id::new(id))?;
    Ok(Json(to_json::user_profile(profile)))
}

#[get("/community?<q>&<page>")]
pub fn get_community(
    connections: sqlite::Connections,
    account: Account,
    q: Option<String>,
    page: Option<u64>,
) -> Result<json::Page<json::CommunityMember>> {
    let db = connections.shared()?;
    account.user(&db)?;
    let members = usecases::community(&db, q.as_deref(), page.unwrap_or(1))?;
    Ok(Json(to_json::page(members, to_json::community_member)))
}
