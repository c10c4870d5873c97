//! Blog Router

use std::sync::Arc;

use auth::domain::repository::{AuthSessionRepository, UserRepository};
use auth::middleware::{AuthMiddlewareState, load_viewer, require_auth_session};
use auth::{AuthConfig, SqliteAuthRepository};
use axum::{Router, middleware, routing::get};

use crate::domain::repository::ArticleRepository;
use crate::infra::sqlite::SqliteArticleRepository;
use crate::presentation::handlers::{self, BlogAppState};
use crate::presentation::middleware::redirect_unauthorized;
use crate::presentation::view::{HtmlRenderer, PageRenderer};

/// Create the blog router over SQLite repositories with HTML pages
pub fn blog_router(
    auth_repo: SqliteAuthRepository,
    article_repo: SqliteArticleRepository,
    config: AuthConfig,
) -> Router {
    blog_router_generic(auth_repo, article_repo, config, Arc::new(HtmlRenderer))
}

/// Create a blog router for any repository and renderer implementation
pub fn blog_router_generic<A, R>(
    auth_repo: A,
    article_repo: R,
    config: AuthConfig,
    renderer: Arc<dyn PageRenderer>,
) -> Router
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let auth_repo = Arc::new(auth_repo);
    let config = Arc::new(config);

    let auth_state = AuthMiddlewareState::new(auth_repo.clone(), config.clone());
    let state = BlogAppState {
        auth_repo,
        articles: Arc::new(article_repo),
        config,
        renderer,
    };

    let protected = Router::new()
        .route("/user_posts", get(handlers::user_posts::<A, R>))
        .route("/posts/{id}", get(handlers::post_detail::<A, R>))
        .route("/posts/{id}/delete", get(handlers::post_delete::<A, R>))
        .route(
            "/posts/{id}/update",
            get(handlers::post_update_form::<A, R>).post(handlers::post_update::<A, R>),
        )
        .route(
            "/create-article",
            get(handlers::create_article_form::<A, R>).post(handlers::create_article::<A, R>),
        )
        .route(
            "/logout",
            get(handlers::logout::<A, R>).post(handlers::logout::<A, R>),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth_session::<A>,
        ));

    Router::new()
        .route("/", get(handlers::index::<A, R>))
        .route("/posts", get(handlers::posts::<A, R>))
        .route(
            "/login",
            get(handlers::login_form::<A, R>).post(handlers::login::<A, R>),
        )
        .route(
            "/register",
            get(handlers::register_form::<A, R>).post(handlers::register::<A, R>),
        )
        .merge(protected)
        .layer(middleware::from_fn_with_state(auth_state, load_viewer::<A>))
        .layer(middleware::map_response(redirect_unauthorized))
        .with_state(state)
}
