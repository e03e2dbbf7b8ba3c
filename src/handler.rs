//! Status-code driven dispatch of failed requests to notification handlers.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ErrorData, ErrorResponse, ResponseError};
use crate::status::status_message;
use crate::surface::{Navigator, Notice, Notifier};

/// Per-status override invoked in place of the built-in policy.
pub type CodeHandler = Box<dyn Fn(&ResponseError) + Send + Sync>;

/// Static configuration captured once at construction.
///
/// Both fields are optional: `login_url` is only consulted when the
/// built-in 401 policy fires, and statuses without an entry in
/// `code_handlers` fall through to the built-in policies.
#[derive(Default)]
pub struct ErrorHandlerConfig {
    login_url: Option<String>,
    code_handlers: HashMap<u16, CodeHandler>,
}

impl ErrorHandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the login page the built-in 401 policy redirects to.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into());
        self
    }

    /// Registers an override for `status`, replacing the built-in policy
    /// for that code entirely. Registering the same code again keeps the
    /// latest handler.
    pub fn on_code(
        mut self,
        status: u16,
        handler: impl Fn(&ResponseError) + Send + Sync + 'static,
    ) -> Self {
        self.code_handlers.insert(status, Box::new(handler));
        self
    }
}

/// Classifies failed requests by status code, issues one notice per
/// failure through the injected surfaces, and hands the error back to
/// the caller.
pub struct ErrorHandler {
    config: ErrorHandlerConfig,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorHandler {
    /// Builds a dispatcher over the given notification and navigation
    /// surfaces. Construction never fails; missing configuration is only
    /// consulted when the corresponding built-in policy fires.
    pub fn new(
        config: ErrorHandlerConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            notifier,
            navigator,
        }
    }

    /// Classifies `error`, invokes the registered override or built-in
    /// policy for it, and returns the same error to the caller.
    ///
    /// The `Ok` arm is uninhabited: dispatch observes and forwards, it
    /// never absorbs a failure.
    pub fn dispatch(&self, error: ResponseError) -> Result<Infallible, ResponseError> {
        match &error.response {
            Some(response) => {
                if let Some(handler) = self.config.code_handlers.get(&response.status) {
                    tracing::debug!("invoking override handler for status {}", response.status);
                    handler(&error);
                } else {
                    match response.status {
                        401 => self.unauthorized(),
                        403 => self.forbidden(),
                        _ => self.other(response, error.data.as_ref()),
                    }
                }
            }
            None => self.network(),
        }
        Err(error)
    }

    fn unauthorized(&self) {
        let mut notice = Notice::new(
            "拒绝访问",
            "用户没有权限或登录态已过期，系统将在3秒后自动跳转至登录页...",
        )
        .with_duration(Duration::from_secs(3));
        match self.config.login_url.clone() {
            Some(url) => {
                let navigator = Arc::clone(&self.navigator);
                notice = notice.with_on_close(move || navigator.navigate(&url));
            }
            None => {
                tracing::warn!("no login URL configured, skipping redirect after 401");
            }
        }
        self.notifier.error(notice);
    }

    fn forbidden(&self) {
        self.notifier
            .error(Notice::new("拒绝访问", "用户得到授权，但是访问是被禁止的"));
    }

    fn other(&self, response: &ErrorResponse, data: Option<&ErrorData>) {
        let description = data
            .and_then(|d| d.message.as_deref())
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| match status_message(response.status) {
                Some(text) => text.to_owned(),
                None => response.status_text.clone(),
            });
        tracing::error!(
            "request to {} failed with status {}",
            response.url,
            response.status
        );
        self.notifier.error(
            Notice::new(
                format!("请求错误 {}: {}", response.status, response.url),
                description,
            )
            .with_duration(Duration::from_secs(5)),
        );
    }

    fn network(&self) {
        tracing::error!("network failure, no response received");
        self.notifier
            .error(Notice::new("网络异常", "您的网络发生异常，无法连接服务器"));
    }
}
