//! Server-rendered HTML pages.
//!
//! Filter state lives in the URL (`?q=&category=`), so every render is a pure
//! function of the query string and the shared catalog.

mod catalog;
mod home;
mod stores;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use chrono::Datelike;
use dairy_core::{NavbarState, NAV_LINKS};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::api::AppState;

pub(crate) const BRAND_NAME: &str = "Mayank Dairy";

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/about", get(|| async { Redirect::to("/#about") }))
        .route("/contact", get(|| async { Redirect::to("/#contact") }))
        .route("/products", get(catalog::catalog_page))
        .route("/products/{id}", get(catalog::product_page))
        .route("/products/{id}/cart", post(catalog::add_to_cart))
        .route("/stores", get(stores::stores_page))
        .route("/stores/{id}/directions", get(stores::open_directions))
}

/// Escapes text for use in HTML element content and quoted attributes.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes a single query-string value.
pub(crate) fn encode_query_value(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

/// Wraps `body` in the shared document shell: navbar on top, footer below.
pub(crate) fn layout(title: &str, navbar: &NavbarState, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {brand}</title>
</head>
<body>
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = escape_html(title),
        brand = BRAND_NAME,
        nav = render_navbar(navbar),
        footer = render_footer(chrono::Utc::now().year()),
    )
}

fn render_navbar(navbar: &NavbarState) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link.path, link.name))
        .collect();

    let badge = if navbar.shows_cart_badge() {
        format!(r#"<span class="cart-badge">{}</span>"#, navbar.cart_item_count)
    } else {
        String::new()
    };

    // The mobile menu is a <details> element so it toggles without scripts.
    let open = if navbar.mobile_menu_open { " open" } else { "" };

    format!(
        r#"<nav class="navbar">
<a class="logo" href="/">{BRAND_NAME}</a>
<div class="nav-links">{links}</div>
<a class="cart" href="/api/v1/cart" aria-label="Cart">Cart{badge}</a>
<details class="mobile-menu"{open}><summary aria-label="Menu">Menu</summary><div class="mobile-links">{links}</div></details>
</nav>"#
    )
}

fn render_footer(year: i32) -> String {
    let quick_links: String = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<li><a href="{}">{}</a></li>"#, link.path, link.name))
        .collect();

    let product_links: String = ["milk", "cheese", "yogurt", "butter"]
        .iter()
        .map(|category| {
            format!(
                r#"<li><a href="/products?category={category}" class="capitalize">{category}</a></li>"#
            )
        })
        .collect();

    format!(
        r##"<footer>
<div class="footer-about"><h3>{BRAND_NAME}</h3><p>Bringing the freshest dairy products from our farm to your table since 2005.</p></div>
<div><h4>Quick Links</h4><ul>{quick_links}</ul></div>
<div><h4>Products</h4><ul>{product_links}</ul></div>
<div><h4>Connect With Us</h4><p><a href="#">Facebook</a> <a href="#">Instagram</a> <a href="#">Twitter</a></p></div>
<p class="copyright">&copy; {year} {BRAND_NAME}. All rights reserved.</p>
</footer>"##
    )
}

pub(crate) fn not_found_page(navbar: &NavbarState, what: &str) -> Response {
    let body = format!(
        r#"<section class="not-found"><h1>Not Found</h1><p>{}</p><a href="/products">Back to products</a></section>"#,
        escape_html(what)
    );
    (
        StatusCode::NOT_FOUND,
        Html(layout("Not Found", navbar, &body)),
    )
        .into_response()
}
