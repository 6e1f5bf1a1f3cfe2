use thiserror::Error;

#[derive(Error, Debug)]
pub enum CamelError {
    #[error("The game is already over")]
    GameOver,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
