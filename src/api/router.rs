use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::handlers::{
    create_account_handler, create_container_handler, delete_account_handler,
    delete_container_handler, delete_handler, download_handler, health_handler,
    list_accounts_handler, list_containers_handler, list_objects_handler, readiness_handler,
    upload_handler, upload_many_handler, version_handler,
};
use crate::api::middleware::request_log_middleware;
use crate::api::openapi::openapi_handler;
use crate::application::use_cases::{
    CreateFolderUseCase, DeleteFolderUseCase, DeleteObjectUseCase, DownloadObjectUseCase,
    ListChildrenUseCase, UploadObjectUseCase, UploadObjectsUseCase,
};
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub create_folder_use_case: Arc<CreateFolderUseCase>,
    pub delete_folder_use_case: Arc<DeleteFolderUseCase>,
    pub list_use_case: Arc<ListChildrenUseCase>,
    pub download_use_case: Arc<DownloadObjectUseCase>,
    pub delete_use_case: Arc<DeleteObjectUseCase>,
    pub upload_use_case: Arc<UploadObjectUseCase>,
    pub upload_many_use_case: Arc<UploadObjectsUseCase>,
    pub config: Config,
}

/// URL scheme for the hierarchy routes. Both layouts call the same handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLayout {
    /// `/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}`
    Nested,
    /// `/v1/{account}/{container}/{object}`
    Flat,
}

impl RouteLayout {
    pub const ALL: [RouteLayout; 2] = [RouteLayout::Nested, RouteLayout::Flat];

    pub fn accounts(self) -> &'static str {
        match self {
            RouteLayout::Nested => "/api/{version}/accounts",
            RouteLayout::Flat => "/v1",
        }
    }

    pub fn account(self) -> &'static str {
        match self {
            RouteLayout::Nested => "/api/{version}/accounts/{account}",
            RouteLayout::Flat => "/v1/{account}",
        }
    }

    pub fn containers(self) -> &'static str {
        match self {
            RouteLayout::Nested => "/api/{version}/accounts/{account}/containers",
            // the flat layout lists containers on the account path itself
            RouteLayout::Flat => "/v1/{account}",
        }
    }

    pub fn container(self) -> &'static str {
        match self {
            RouteLayout::Nested => "/api/{version}/accounts/{account}/containers/{container}",
            RouteLayout::Flat => "/v1/{account}/{container}",
        }
    }

    pub fn object(self) -> &'static str {
        match self {
            RouteLayout::Nested => {
                "/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}"
            }
            RouteLayout::Flat => "/v1/{account}/{container}/{object}",
        }
    }

    /// Hierarchy routes for this layout
    pub fn routes(self, state: &AppState) -> Router {
        let create_state = &state.create_folder_use_case;
        let delete_folder_state = &state.delete_folder_use_case;
        let list_state = &state.list_use_case;

        Router::new()
            .route(
                self.accounts(),
                get(list_accounts_handler).with_state(Arc::clone(list_state)),
            )
            .route(
                self.account(),
                post(create_account_handler).with_state(Arc::clone(create_state)),
            )
            .route(
                self.account(),
                delete(delete_account_handler).with_state(Arc::clone(delete_folder_state)),
            )
            .route(
                self.containers(),
                get(list_containers_handler).with_state(Arc::clone(list_state)),
            )
            .route(
                self.container(),
                post(create_container_handler).with_state(Arc::clone(create_state)),
            )
            .route(
                self.container(),
                delete(delete_container_handler).with_state(Arc::clone(delete_folder_state)),
            )
            .route(
                self.container(),
                get(list_objects_handler).with_state(Arc::clone(list_state)),
            )
            .route(
                self.container(),
                put(upload_many_handler).with_state(Arc::clone(&state.upload_many_use_case)),
            )
            .route(
                self.object(),
                get(download_handler).with_state(Arc::clone(&state.download_use_case)),
            )
            .route(
                self.object(),
                post(upload_handler).with_state(Arc::clone(&state.upload_use_case)),
            )
            .route(
                self.object(),
                delete(delete_handler).with_state(Arc::clone(&state.delete_use_case)),
            )
    }
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let hierarchy = RouteLayout::ALL
        .into_iter()
        .fold(Router::new(), |router, layout| router.merge(layout.routes(&state)));

    Router::new()
        .route("/healthz", get(health_handler))
        .route(
            "/healthz/ready",
            get(readiness_handler).with_state(Arc::clone(&state.list_use_case)),
        )
        .route("/version", get(version_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .merge(hierarchy)
        // Multipart bodies above the limit fail while decoding the form
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(axum_middleware::from_fn(request_log_middleware))
}
