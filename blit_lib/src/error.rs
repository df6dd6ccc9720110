use std::path::PathBuf;
use thiserror::Error;

pub type BlitResult<T> = ::std::result::Result<T, BlitError>;

#[derive(Error, Debug)]
pub enum BlitError {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
    #[error("Image {} has no pixels", .0.display())]
    EmptyImage(PathBuf),
}
