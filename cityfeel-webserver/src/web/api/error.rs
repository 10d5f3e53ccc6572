use super::json_error_response;
use anyhow::anyhow;
use cityfeel_application::error::{AppError, BError};
pub use cityfeel_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    form,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<form::Errors<'_>> for Error {
    fn from(errs: form::Errors) -> Self {
        Self::OtherWithStatus(anyhow!("Invalid form data: {errs}"), Status::BadRequest)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            let status = match *err {
                                ParameterError::Credentials | ParameterError::Unauthorized => {
                                    Status::Unauthorized
                                }
                                ParameterError::Forbidden => Status::Forbidden,
                                ParameterError::UserDoesNotExist => Status::NotFound,
                                ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
                                ParameterError::Repo(_) => Status::InternalServerError,
                                _ => Status::BadRequest,
                            };
                            if status != Status::InternalServerError {
                                return json_error_response(req, err, status, err.field());
                            }
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound, None);
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(req, err, Status::Conflict, None);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError, None)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status, None),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError, None)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
