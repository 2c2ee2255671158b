use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use dairy_core::{CardFormat, CatalogView, FilterState, ProductCard};
use serde::Deserialize;

use super::{encode_query_value, escape_html, layout, not_found_page};
use crate::api::{AppState, CatalogQuery};

/// The catalog URL that reopens `filter`, e.g. `/products?category=cheese&q=ched`.
pub(super) fn catalog_url(filter: &FilterState) -> String {
    let mut params = Vec::new();
    if !filter.category.is_all() {
        params.push(format!(
            "category={}",
            encode_query_value(filter.category.as_str())
        ));
    }
    if !filter.query.is_empty() {
        params.push(format!("q={}", encode_query_value(&filter.query)));
    }

    if params.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", params.join("&"))
    }
}

/// Renders the catalog block: search box, category tabs, then either the card
/// grid or the empty state with its reset link.
pub(super) fn render_catalog_section(view: &CatalogView, format: &CardFormat) -> String {
    let state = view.state();
    let query = escape_html(&state.query);

    let tabs: String = view
        .categories()
        .iter()
        .map(|category| {
            let active = if *category == state.category {
                r#" class="tab active" aria-selected="true""#
            } else {
                r#" class="tab""#
            };
            let mut href = format!(
                "/products?category={}",
                encode_query_value(category.as_str())
            );
            if !state.query.is_empty() {
                href.push_str("&amp;q=");
                href.push_str(&encode_query_value(&state.query));
            }
            format!(
                r#"<a href="{href}"{active}>{}</a>"#,
                escape_html(category.as_str())
            )
        })
        .collect();

    let return_to = catalog_url(state);
    let visible = view.visible();
    let results = if visible.is_empty() {
        r#"<div class="empty-state">
<p>No products found matching your criteria.</p>
<a class="button" href="/products">Reset Filters</a>
</div>"#
            .to_string()
    } else {
        let cards: String = visible
            .iter()
            .map(|p| render_card(&ProductCard::from_product(p, format), &return_to))
            .collect();
        format!(r#"<div class="product-grid">{cards}</div>"#)
    };

    format!(
        r#"<section class="catalog" id="products">
<div class="section-heading">
<h2>Our Products</h2>
<p>Discover our range of fresh, high-quality dairy products made with care from the finest ingredients.</p>
</div>
<div class="catalog-controls">
<form class="search" method="get" action="/products">
<input type="text" name="q" placeholder="Search products..." value="{query}">
<input type="hidden" name="category" value="{category}">
</form>
<nav class="tabs" role="tablist">{tabs}</nav>
</div>
{results}
</section>"#,
        category = escape_html(state.category.as_str()),
    )
}

/// `return_to` is the catalog URL the add-to-cart redirect lands on.
fn render_card(card: &ProductCard, return_to: &str) -> String {
    let badge = if card.is_new {
        r#"<span class="badge badge-new">New</span>"#
    } else {
        ""
    };
    let id = encode_query_value(&card.id);

    format!(
        r#"<article class="product-card">
<div class="product-image">{badge}<img src="{image}" alt="{name}"></div>
<div class="product-body">
<div class="product-meta"><span class="badge capitalize">{category}</span><span class="price">{price}</span></div>
<h3>{name}</h3>
<p class="description">{description}</p>
</div>
<div class="product-actions">
<a class="button outline" href="/products/{id}">Details</a>
<form method="post" action="/products/{id}/cart"><input type="hidden" name="return_to" value="{return_to}"><button type="submit">Add</button></form>
</div>
</article>"#,
        return_to = escape_html(return_to),
        image = escape_html(&card.image),
        name = escape_html(&card.name),
        category = escape_html(&card.category),
        price = escape_html(&card.price),
        description = escape_html(&card.description),
    )
}

pub(super) async fn catalog_page(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let view = state.catalog_view(query.into_filter());
    let body = render_catalog_section(&view, &state.card_format);
    Html(layout("Products", &state.navbar(), &body))
}

pub(super) async fn product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(product) = state.find_product(&id) else {
        return not_found_page(&state.navbar(), &format!("No product with id '{id}'."));
    };

    state.actions.view_details(&product.id);

    // Details show the full description, not the card's truncated one.
    let format = CardFormat {
        description_max_chars: usize::MAX,
        ..state.card_format.clone()
    };
    let card = ProductCard::from_product(product, &format);

    let body = format!(
        r#"<section class="product-detail">
<a href="/products">&larr; All products</a>
<img src="{image}" alt="{name}">
<h1>{name}</h1>
<p><span class="badge capitalize">{category}</span> <span class="price">{price}</span></p>
<p>{description}</p>
<form method="post" action="/products/{id}/cart"><button type="submit">Add to cart</button></form>
</section>"#,
        image = escape_html(&card.image),
        name = escape_html(&card.name),
        category = escape_html(&card.category),
        price = escape_html(&card.price),
        description = escape_html(&card.description),
        id = encode_query_value(&card.id),
    );

    Html(layout(&product.name, &state.navbar(), &body)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AddToCartForm {
    pub return_to: Option<String>,
}

impl AddToCartForm {
    /// Only same-site catalog URLs are honoured; anything else lands on `/products`.
    fn redirect_target(&self) -> &str {
        match self.return_to.as_deref() {
            Some(url) if url == "/products" || url.starts_with("/products?") => url,
            _ => "/products",
        }
    }
}

pub(super) async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<AddToCartForm>, FormRejection>,
) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    if state.find_product(&id).is_none() {
        return not_found_page(&state.navbar(), &format!("No product with id '{id}'."));
    }

    state.actions.add_to_cart(&id);
    Redirect::to(form.redirect_target()).into_response()
}
