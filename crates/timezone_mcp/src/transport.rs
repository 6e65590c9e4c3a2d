//! HTTP entry point: path-based dispatch to the SSE and streamable HTTP transports.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    extract::{OriginalUri, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use rmcp::transport::{
    sse_server::{SseServer, SseServerConfig},
    streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};
use tokio_util::sync::CancellationToken;

use crate::core::error::{TimezoneServerError, TimezoneServerResult};
use crate::server::TimezoneService;

pub const SSE_PATH: &str = "/sse";
pub const SSE_MESSAGE_PATH: &str = "/sse/message";
pub const MCP_PATH: &str = "/mcp";

const NOT_FOUND_BODY: &str = "Not found";

/// Destination of an inbound HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Long-lived SSE stream and its message endpoint
    Sse,
    /// Single-shot streamable HTTP requests
    StreamableHttp,
    NotFound,
}

impl Route {
    pub fn classify(path: &str) -> Self {
        match path {
            SSE_PATH | SSE_MESSAGE_PATH => Route::Sse,
            MCP_PATH => Route::StreamableHttp,
            _ => Route::NotFound,
        }
    }
}

/// Handle to the dispatcher's transports
pub struct Dispatcher {
    pub router: Router,
    pub ct: CancellationToken,
}

/// Build the HTTP router with both transports bound to [`TimezoneService`].
///
/// Must be called inside a tokio runtime: the SSE transport spawns its
/// session acceptor immediately.
pub fn build_dispatcher(
    bind: SocketAddr,
    sse_keep_alive: Option<Duration>,
    ct: CancellationToken,
) -> Dispatcher {
    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: SSE_PATH.to_string(),
        post_path: SSE_MESSAGE_PATH.to_string(),
        ct: ct.clone(),
        sse_keep_alive,
    });
    let sse_ct = sse_server.with_service(TimezoneService::new);

    let streamable = StreamableHttpService::new(
        || Ok(TimezoneService::new()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            sse_keep_alive,
            ..Default::default()
        },
    );

    let router = Router::new()
        .merge(sse_router)
        .nest_service(MCP_PATH, streamable)
        .fallback(not_found)
        .layer(middleware::from_fn(dispatch));

    Dispatcher {
        router,
        ct: sse_ct,
    }
}

async fn dispatch(OriginalUri(uri): OriginalUri, request: Request, next: Next) -> Response {
    let route = Route::classify(uri.path());
    tracing::debug!(method = %request.method(), path = uri.path(), ?route, "dispatch");
    match route {
        Route::NotFound => not_found().await.into_response(),
        Route::Sse | Route::StreamableHttp => next.run(request).await,
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Serve the dispatcher over HTTP until Ctrl-C
pub async fn serve_http(
    bind: SocketAddr,
    sse_keep_alive: Option<Duration>,
) -> TimezoneServerResult<()> {
    let ct = CancellationToken::new();
    let Dispatcher { router, ct: sse_ct } = build_dispatcher(bind, sse_keep_alive, ct.clone());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|source| TimezoneServerError::Bind { addr: bind, source })?;
    tracing::info!(
        "Timezone MCP server listening on http://{} (SSE: {}, streamable HTTP: {})",
        bind,
        SSE_PATH,
        MCP_PATH
    );

    let shutdown = ct.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
        tracing::info!("Shutting down Timezone MCP server");
        shutdown.cancel();
    });

    let graceful = ct.child_token();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { graceful.cancelled().await })
        .await
        .map_err(|e| TimezoneServerError::Transport(e.to_string()))?;

    sse_ct.cancel();
    Ok(())
}

/// Serve the same tools over stdin/stdout
pub async fn serve_stdio() -> TimezoneServerResult<()> {
    use rmcp::{ServiceExt, transport::stdio};

    let service = TimezoneService::new()
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .map_err(|e| TimezoneServerError::Transport(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TimezoneServerError::Transport(e.to_string()))?;
    Ok(())
}
