use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InitError {
    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
