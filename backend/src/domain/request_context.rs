//! Task-local request scope shared by the trace middleware and domain errors.

use std::future::Future;
use std::sync::Arc;

use tokio::task_local;

use super::TraceId;

task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Per-request data available to any code running inside the request task.
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: TraceId,
    path: Arc<str>,
}

impl RequestContext {
    /// Build a context for a request to `path`.
    pub fn new(trace_id: TraceId, path: impl Into<Arc<str>>) -> Self {
        Self {
            trace_id,
            path: path.into(),
        }
    }

    /// Trace identifier of this request.
    #[must_use]
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Request path as received.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Trace identifier of the request in scope.
    #[must_use]
    pub fn current_trace_id() -> Option<TraceId> {
        REQUEST_CONTEXT.try_with(|ctx| ctx.trace_id).ok()
    }

    /// Path of the request in scope.
    #[must_use]
    pub fn current_path() -> Option<String> {
        REQUEST_CONTEXT.try_with(|ctx| ctx.path.to_string()).ok()
    }

    /// Run `fut` with `context` in scope.
    ///
    /// # Examples
    /// ```
    /// use gri_service::domain::RequestContext;
    /// use gri_service::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let ctx = RequestContext::new(TraceId::generate(), "/api/v1/gri");
    /// let path = RequestContext::scope(ctx, async { RequestContext::current_path() }).await;
    /// assert_eq!(path.as_deref(), Some("/api/v1/gri"));
    /// # });
    /// ```
    pub async fn scope<Fut>(context: RequestContext, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_CONTEXT.scope(context, fut).await
    }

    /// Run the synchronous closure `f` with `context` in scope.
    ///
    /// Actix services may do work in `call` before returning their future,
    /// so the middleware enters the scope for both halves.
    pub fn sync_scope<F, R>(context: RequestContext, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        REQUEST_CONTEXT.sync_scope(context, f)
    }
}
