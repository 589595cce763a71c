use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("no authenticated principal on request")]
    MissingPrincipal,
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;
