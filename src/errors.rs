use diesel::result::Error as DieselError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),
    #[error("record not found")]
    NotFound,
}
