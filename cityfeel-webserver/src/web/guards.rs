use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{prelude::*, usecases},
    web::jwt,
};
use cityfeel_application::error::AppError;
use cityfeel_core::usecases::Error as ParameterError;

pub const COOKIE_USERNAME_KEY: &str = "cityfeel-username";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_username: Option<String>,
}

impl Auth {
    pub fn account_username(&self) -> Result<&str> {
        self.account_username
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// The authenticated user, if any.
    pub fn viewer<R: UserRepo>(&self, repo: &R) -> Result<Option<User>> {
        self.account_username
            .as_deref()
            .map(|username| usecases::authorize_user_by_username(repo, username))
            .transpose()
            .map_err(Into::into)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn account_username_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_USERNAME_KEY)
            .map(|cookie| cookie.value().to_owned())
    }

    async fn account_username_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_username(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let mut account_username = Self::account_username_from_cookie(request);
        if account_username.is_none() {
            account_username =
                Self::account_username_from_jwt_in_header(request, &bearer_tokens).await;
        }
        Outcome::Success(Self {
            bearer_tokens,
            account_username,
        })
    }
}

/// An authenticated request.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn username(&self) -> &str {
        &self.0
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_user_by_username(repo, self.username())?)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_username() {
            Ok(username) => Outcome::Success(Account(username.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
