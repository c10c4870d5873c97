//! Page Rendering
//!
//! Handlers describe *what* to show with a [`Page`]; a [`PageRenderer`]
//! turns it into a document. [`HtmlRenderer`] is the bundled renderer.

use std::fmt::Write;

use crate::domain::entities::{Article, ArticleWithOwner};
use crate::presentation::dto::{ArticleForm, RegisterForm};

/// Per-request data shared by every page
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub flashes: Vec<String>,
    pub authenticated: bool,
}

/// A page and the data it displays
pub enum Page<'a> {
    Index,
    Posts {
        heading: &'a str,
        articles: &'a [Article],
    },
    PostDetail {
        article: &'a ArticleWithOwner,
        /// Show edit and delete controls
        can_edit: bool,
    },
    PostUpdate {
        article_id: i64,
        draft: &'a ArticleForm,
    },
    CreateArticle {
        draft: &'a ArticleForm,
    },
    Login {
        login: &'a str,
    },
    Register {
        draft: &'a RegisterForm,
    },
}

impl Page<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Index => "Home",
            Page::Posts { .. } => "Articles",
            Page::PostDetail { .. } => "Article",
            Page::PostUpdate { .. } => "Edit article",
            Page::CreateArticle { .. } => "New article",
            Page::Login { .. } => "Sign in",
            Page::Register { .. } => "Register",
        }
    }
}

/// Renders pages to a response body
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page<'_>, ctx: &PageContext) -> String;
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Plain HTML5 renderer with no external assets
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn nav(out: &mut String, authenticated: bool) {
        out.push_str("<nav><a href=\"/\">Home</a> <a href=\"/posts\">Articles</a>");
        if authenticated {
            out.push_str(
                " <a href=\"/user_posts\">My articles</a> \
                 <a href=\"/create-article\">New article</a> \
                 <a href=\"/logout\">Sign out</a>",
            );
        } else {
            out.push_str(" <a href=\"/login\">Sign in</a> <a href=\"/register\">Register</a>");
        }
        out.push_str("</nav>\n");
    }

    fn flashes(out: &mut String, flashes: &[String]) {
        for message in flashes {
            let _ = writeln!(out, "<div class=\"flash\">{}</div>", escape_html(message));
        }
    }

    fn posts(out: &mut String, heading: &str, articles: &[Article]) {
        let _ = writeln!(out, "<h1>{}</h1>", escape_html(heading));
        if articles.is_empty() {
            out.push_str("<p>No articles yet.</p>\n");
            return;
        }
        for article in articles {
            let _ = writeln!(
                out,
                "<article><h2>{}</h2><p>{}</p><p><time>{}</time></p>\
                 <a href=\"/posts/{}\">Read more</a></article>",
                escape_html(&article.title),
                escape_html(&article.intro),
                article.date.format("%Y-%m-%d %H:%M"),
                article.article_id,
            );
        }
    }

    fn post_detail(out: &mut String, detail: &ArticleWithOwner, can_edit: bool) {
        let article = &detail.article;
        let _ = writeln!(
            out,
            "<article><h1>{}</h1><p>{}</p><div class=\"text\">{}</div>\
             <p><time>{}</time></p></article>",
            escape_html(&article.title),
            escape_html(&article.intro),
            escape_html(&article.text),
            article.date.format("%Y-%m-%d %H:%M"),
        );
        let _ = write!(
            out,
            "<aside><p>Author: {}</p><p>Email: {}</p>",
            escape_html(&detail.owner_name),
            escape_html(&detail.owner_email),
        );
        if let Some(phone) = &detail.owner_phone_number {
            let _ = write!(out, "<p>Phone: {}</p>", escape_html(phone));
        }
        out.push_str("</aside>\n");
        if can_edit {
            let _ = writeln!(
                out,
                "<p><a href=\"/posts/{id}/update\">Edit</a> \
                 <a href=\"/posts/{id}/delete\">Delete</a></p>",
                id = article.article_id,
            );
        }
    }

    fn article_form(out: &mut String, heading: &str, action: &str, draft: &ArticleForm) {
        let _ = writeln!(
            out,
            "<h1>{heading}</h1>\n<form method=\"post\" action=\"{action}\">\
             <input name=\"title\" placeholder=\"Title\" maxlength=\"100\" value=\"{}\">\
             <textarea name=\"intro\" placeholder=\"Intro\" maxlength=\"300\">{}</textarea>\
             <textarea name=\"text\" placeholder=\"Text\">{}</textarea>\
             <button type=\"submit\">Save</button></form>",
            escape_html(&draft.title),
            escape_html(&draft.intro),
            escape_html(&draft.text),
        );
    }

    fn login(out: &mut String, login: &str) {
        let _ = writeln!(
            out,
            "<h1>Sign in</h1>\n<form method=\"post\" action=\"/login\">\
             <input name=\"login\" placeholder=\"Login\" value=\"{}\">\
             <input name=\"password\" type=\"password\" placeholder=\"Password\">\
             <button type=\"submit\">Sign in</button></form>",
            escape_html(login),
        );
    }

    fn register(out: &mut String, draft: &RegisterForm) {
        let _ = writeln!(
            out,
            "<h1>Register</h1>\n<form method=\"post\" action=\"/register\">\
             <input name=\"login\" placeholder=\"Login\" maxlength=\"30\" value=\"{}\">\
             <input name=\"password\" type=\"password\" placeholder=\"Password\">\
             <input name=\"repeat-password\" type=\"password\" placeholder=\"Repeat password\">\
             <input name=\"name\" placeholder=\"Name\" maxlength=\"50\" value=\"{}\">\
             <input name=\"email\" type=\"email\" placeholder=\"Email\" maxlength=\"100\" value=\"{}\">\
             <input name=\"phone-number\" placeholder=\"Phone number\" maxlength=\"20\" value=\"{}\">\
             <button type=\"submit\">Register</button></form>",
            escape_html(&draft.login),
            escape_html(&draft.name),
            escape_html(&draft.email),
            escape_html(draft.phone_number.as_deref().unwrap_or_default()),
        );
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page<'_>, ctx: &PageContext) -> String {
        let mut out = String::with_capacity(2048);
        let _ = writeln!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
             <title>{} - Blog</title></head>\n<body>",
            page.title()
        );
        Self::nav(&mut out, ctx.authenticated);
        Self::flashes(&mut out, &ctx.flashes);

        match page {
            Page::Index => out.push_str(
                "<h1>Blog</h1>\n<p>Read articles or sign in to write your own.</p>\n",
            ),
            Page::Posts { heading, articles } => Self::posts(&mut out, heading, articles),
            Page::PostDetail { article, can_edit } => {
                Self::post_detail(&mut out, article, *can_edit)
            }
            Page::PostUpdate { article_id, draft } => Self::article_form(
                &mut out,
                "Edit article",
                &format!("/posts/{}/update", article_id),
                draft,
            ),
            Page::CreateArticle { draft } => {
                Self::article_form(&mut out, "New article", "/create-article", draft)
            }
            Page::Login { login } => Self::login(&mut out, login),
            Page::Register { draft } => Self::register(&mut out, draft),
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}
