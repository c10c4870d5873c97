//! Presentation Layer
//!
//! Handlers, form DTOs, flash cookie, page rendering, and the router.

pub mod dto;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod view;

pub use handlers::BlogAppState;
pub use router::{blog_router, blog_router_generic};
pub use view::{HtmlRenderer, Page, PageContext, PageRenderer};
