//! Dispatches failed HTTP requests to notification handlers by status code.
//!
//! Built around a single [`ErrorHandler`]: callers register per-status
//! overrides and a login URL up front, then feed every failed request
//! through [`ErrorHandler::dispatch`], which issues exactly one notice
//! through the injected surfaces and hands the error back unchanged.

mod convert;
mod error;
mod handler;
mod status;
mod surface;

pub use self::error::{ErrorData, ErrorResponse, FailureKind, ResponseError};
pub use self::handler::{CodeHandler, ErrorHandler, ErrorHandlerConfig};
pub use self::status::status_message;
pub use self::surface::{Navigator, Notice, Notifier, OnClose};
