pub mod error;
pub mod logging;
pub mod pagination;
pub mod response;

pub use error::AppError;
pub use response::{BaseResponse, ErrorResponse};
