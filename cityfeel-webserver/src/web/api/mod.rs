use std::{fmt::Display, result};

use cityfeel_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::{Cookie, CookieJar, Status},
    patch, post,
    response::{self, status, Responder},
    routes, Catcher, Request, Route, State,
};

use super::{guards::*, jwt, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};
use cityfeel_application::prelude as flows;

mod comments;
mod emotion_points;
mod error;
mod friendship;
mod locations;
mod photos;
mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;
type CustomStatusResult<T> = result::Result<status::Custom<Json<T>>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        users::patch_current_user,
        users::get_user_profile,
        users::get_community,
        // ---   locations   --- //
        locations::get_locations,
        locations::get_location,
        // ---   emotion points   --- //
        emotion_points::post_emotion_point,
        emotion_points::delete_emotion_point,
        // ---   comments   --- //
        comments::get_comments,
        comments::get_comment,
        comments::post_comment,
        comments::patch_comment,
        comments::delete_comment,
        // ---   photos   --- //
        photos::post_photo,
        photos::delete_photo,
        // ---   friendship   --- //
        friendship::post_friendship,
        friendship::get_friendship_requests,
        friendship::get_friendship,
        friendship::patch_friendship,
        friendship::delete_friendship,
        friendship::get_friends,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Errors raised by rocket itself, e.g. by a failing guard.
#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<JsonErrorResponse>) {
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_string(),
        field: None,
    };
    (status, Json(boundary_error))
}

fn created<T>(body: T) -> status::Custom<Json<T>> {
    status::Custom(Status::Created, Json(body))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
    field: Option<&str>,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        field: field.map(ToOwned::to_owned),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
