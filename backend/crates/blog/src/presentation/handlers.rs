//! HTTP Handlers

use std::sync::Arc;

use auth::application::{SignInUseCase, SignOutUseCase, SignUpUseCase};
use auth::domain::repository::{AuthSessionRepository, UserRepository};
use auth::middleware::{clear_session_cookie, session_cookie};
use auth::{AuthConfig, AuthError, CurrentUser, SessionUser, Viewer};
use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};

use crate::application::{
    CreateArticleUseCase, DeleteArticleUseCase, ListArticlesUseCase, ShowArticleUseCase,
    UpdateArticleUseCase,
};
use crate::domain::repository::ArticleRepository;
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{ArticleForm, ArticlePath, LoginForm, RegisterForm};
use crate::presentation::flash::{IncomingFlash, clear_flash_cookie, set_flash_cookie};
use crate::presentation::view::{Page, PageContext, PageRenderer};

pub const SIGNED_IN_MESSAGE: &str = "You are signed in";

/// Shared state for blog handlers
pub struct BlogAppState<A, R>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    pub auth_repo: Arc<A>,
    pub articles: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl<A, R> Clone for BlogAppState<A, R>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            auth_repo: self.auth_repo.clone(),
            articles: self.articles.clone(),
            config: self.config.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<A, R> BlogAppState<A, R>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    /// Render `page`, showing pending flash messages followed by `messages`.
    ///
    /// A flash cookie that came with the request is cleared.
    fn render(
        &self,
        page: &Page<'_>,
        viewer: &impl SessionUser,
        flash: IncomingFlash,
        messages: &[&str],
    ) -> Response {
        let clear_flash = flash.is_present();

        let mut flashes = flash.into_messages();
        flashes.extend(messages.iter().map(|m| m.to_string()));

        let ctx = PageContext {
            flashes,
            authenticated: viewer.is_authenticated(),
        };
        let body = Html(self.renderer.render(page, &ctx));

        if clear_flash {
            let cookie = clear_flash_cookie(self.config.cookie_secure);
            (AppendHeaders([(header::SET_COOKIE, cookie)]), body).into_response()
        } else {
            body.into_response()
        }
    }
}

// ============================================================================
// Public pages
// ============================================================================

/// GET /
pub async fn index<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
) -> Response
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    state.render(&Page::Index, &viewer, flash, &[])
}

/// GET /posts
pub async fn posts<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let articles = ListArticlesUseCase::new(state.articles.clone()).all().await?;

    let page = Page::Posts {
        heading: "All articles",
        articles: &articles,
    };
    Ok(state.render(&page, &viewer, flash, &[]))
}

// ============================================================================
// Articles (sign-in required)
// ============================================================================

/// GET /user_posts
pub async fn user_posts<A, R>(
    State(state): State<BlogAppState<A, R>>,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let articles = ListArticlesUseCase::new(state.articles.clone())
        .by_owner(user.user_id)
        .await?;

    let page = Page::Posts {
        heading: "My articles",
        articles: &articles,
    };
    Ok(state.render(&page, &user, flash, &[]))
}

/// GET /posts/{id}
pub async fn post_detail<A, R>(
    State(state): State<BlogAppState<A, R>>,
    ArticlePath(id): ArticlePath,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let detail = ShowArticleUseCase::new(state.articles.clone())
        .detail(id)
        .await?;

    let page = Page::PostDetail {
        can_edit: detail.article.is_owned_by(&user),
        article: &detail,
    };
    Ok(state.render(&page, &user, flash, &[]))
}

/// GET /posts/{id}/delete
pub async fn post_delete<A, R>(
    State(state): State<BlogAppState<A, R>>,
    ArticlePath(id): ArticlePath,
    CurrentUser(user): CurrentUser,
) -> BlogResult<Redirect>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    DeleteArticleUseCase::new(state.articles.clone())
        .execute(id, &user)
        .await?;

    Ok(Redirect::to("/posts"))
}

/// GET /posts/{id}/update
pub async fn post_update_form<A, R>(
    State(state): State<BlogAppState<A, R>>,
    ArticlePath(id): ArticlePath,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let article = ShowArticleUseCase::new(state.articles.clone())
        .for_edit(id, &user)
        .await?;

    let draft = ArticleForm {
        title: article.title,
        intro: article.intro,
        text: article.text,
    };
    let page = Page::PostUpdate {
        article_id: id.as_i64(),
        draft: &draft,
    };
    Ok(state.render(&page, &user, flash, &[]))
}

/// POST /posts/{id}/update
pub async fn post_update<A, R>(
    State(state): State<BlogAppState<A, R>>,
    ArticlePath(id): ArticlePath,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
    Form(form): Form<ArticleForm>,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let result = UpdateArticleUseCase::new(state.articles.clone())
        .execute(id, &user, form.clone().into())
        .await;

    match result {
        Ok(_) => Ok(Redirect::to("/posts").into_response()),
        Err(BlogError::Validation(message)) => {
            let page = Page::PostUpdate {
                article_id: id.as_i64(),
                draft: &form,
            };
            Ok(state.render(&page, &user, flash, &[message.as_str()]))
        }
        Err(e) => Err(e),
    }
}

/// GET /create-article
pub async fn create_article_form<A, R>(
    State(state): State<BlogAppState<A, R>>,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
) -> Response
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let draft = ArticleForm::default();
    state.render(&Page::CreateArticle { draft: &draft }, &user, flash, &[])
}

/// POST /create-article
pub async fn create_article<A, R>(
    State(state): State<BlogAppState<A, R>>,
    CurrentUser(user): CurrentUser,
    flash: IncomingFlash,
    Form(form): Form<ArticleForm>,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let result = CreateArticleUseCase::new(state.articles.clone())
        .execute(user.user_id, form.clone().into())
        .await;

    match result {
        Ok(_) => Ok(Redirect::to("/posts").into_response()),
        Err(BlogError::Validation(message)) => {
            let page = Page::CreateArticle { draft: &form };
            Ok(state.render(&page, &user, flash, &[message.as_str()]))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Sign in / register / sign out
// ============================================================================

/// GET /login
pub async fn login_form<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
) -> Response
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    state.render(&Page::Login { login: "" }, &viewer, flash, &[])
}

/// POST /login
pub async fn login<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
    Form(form): Form<LoginForm>,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let login = form.login.clone();
    let use_case = SignInUseCase::new(
        state.auth_repo.clone(),
        state.auth_repo.clone(),
        state.config.clone(),
    );

    match use_case.execute(form.into()).await {
        Ok(output) => {
            let cookies = AppendHeaders([
                (
                    header::SET_COOKIE,
                    session_cookie(&state.config, &output.session_token),
                ),
                (
                    header::SET_COOKIE,
                    set_flash_cookie(state.config.cookie_secure, &[SIGNED_IN_MESSAGE]),
                ),
            ]);
            Ok((cookies, Redirect::to("/")).into_response())
        }
        Err(e) if e.is_user_facing() => {
            let message = e.to_string();
            let page = Page::Login { login: &login };
            Ok(state.render(&page, &viewer, flash, &[message.as_str()]))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /register
pub async fn register_form<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
) -> Response
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let draft = RegisterForm::default();
    state.render(&Page::Register { draft: &draft }, &viewer, flash, &[])
}

/// POST /register
pub async fn register<A, R>(
    State(state): State<BlogAppState<A, R>>,
    viewer: Viewer,
    flash: IncomingFlash,
    Form(form): Form<RegisterForm>,
) -> BlogResult<Response>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.auth_repo.clone(), state.config.clone());

    match use_case.execute(form.clone().into()).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(e) if e.is_user_facing() => {
            let message = e.to_string();
            let page = Page::Register { draft: &form };
            Ok(state.render(&page, &viewer, flash, &[message.as_str()]))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET|POST /logout
pub async fn logout<A, R>(
    State(state): State<BlogAppState<A, R>>,
    CurrentUser(user): CurrentUser,
    headers: HeaderMap,
) -> Result<Response, AuthError>
where
    A: UserRepository + AuthSessionRepository + Send + Sync + 'static,
    R: ArticleRepository + Send + Sync + 'static,
{
    if let Some(token) =
        platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        SignOutUseCase::new(state.auth_repo.clone(), state.config.clone())
            .execute(&token)
            .await?;
    }

    tracing::debug!(user_id = %user.user_id, "Session cookie cleared");

    let cookie = clear_session_cookie(&state.config);
    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Redirect::to("/")).into_response())
}
