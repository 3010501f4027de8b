mod backend;
mod requests;

pub use backend::{ApiError, HttpBackend, SharedBackend, StockBackend};
pub use requests::{AsyncState, Dispatcher, RequestTracker};
