use axum::{extract::State, response::Html};
use dairy_core::{FilterState, StoreLocatorView};

use super::{catalog::render_catalog_section, layout, stores::render_store_locator, BRAND_NAME};
use crate::api::AppState;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1550583724-b2692b85b150?w=1200&q=80";

const CERTIFICATIONS: &[(&str, &str)] = &[
    ("SGS Certified", "Quality assurance and safety standards"),
    ("ISO 22000", "Food safety management systems"),
    ("GMP Certified", "Good manufacturing practices"),
    ("FSSAI Approved", "Food safety and standards authority"),
];

const QUALITY_STEPS: &[(&str, &str)] = &[
    (
        "Ethical Sourcing",
        "We source milk only from healthy, well-cared-for cows raised on local partner farms.",
    ),
    (
        "Careful Processing",
        "Our products are processed with minimal intervention to preserve natural goodness.",
    ),
    (
        "Quality Testing",
        "Every batch is tested for purity, freshness and nutritional content before it leaves the dairy.",
    ),
];

fn render_hero() -> String {
    format!(
        r#"<section class="hero">
<div class="hero-text">
<h1>Fresh Dairy Products From Farm to Table</h1>
<p>Experience the pure taste of nature with {BRAND_NAME}'s premium dairy products, made with care from the milk of happy cows.</p>
<div class="hero-actions">
<a class="button" href="/products">Explore Products</a>
<a class="button outline" href="/stores">Find a Store</a>
</div>
</div>
<img src="{HERO_IMAGE}" alt="Fresh dairy products">
</section>"#
    )
}

fn render_about() -> String {
    let certifications: String = CERTIFICATIONS
        .iter()
        .map(|(title, detail)| {
            format!(r#"<li class="certification"><h4>{title}</h4><p>{detail}</p></li>"#)
        })
        .collect();

    let steps: String = QUALITY_STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, detail))| {
            format!(
                r#"<li class="quality-step"><span class="step">{}</span><h4>{title}</h4><p>{detail}</p></li>"#,
                i + 1
            )
        })
        .collect();

    format!(
        r#"<section class="about" id="about">
<div class="section-heading">
<h2>Our Story</h2>
<p>Founded in 2005, {BRAND_NAME} began as a small family farm with a handful of cows and a passion for pure, wholesome dairy.</p>
<p>Today we partner with local farmers who share our commitment to animal welfare and sustainable practices, delivering fresh dairy to thousands of families.</p>
</div>
<h3>Our Certifications</h3>
<ul class="certifications">{certifications}</ul>
<h3>Our Quality Process</h3>
<ol class="quality-process">{steps}</ol>
</section>"#
    )
}

fn render_contact() -> String {
    r#"<section class="contact" id="contact">
<div class="section-heading">
<h2>Contact Us</h2>
<p>Have questions about our products or want to become a retailer? Get in touch with us.</p>
</div>
<form class="contact-form" onsubmit="return false">
<input type="text" name="name" placeholder="Your Name">
<input type="email" name="email" placeholder="Your Email">
<input type="text" name="subject" placeholder="Subject">
<textarea name="message" placeholder="Your Message"></textarea>
<button type="submit">Send Message</button>
</form>
</section>"#
        .to_string()
}

/// Landing page: every section of the storefront on one scroll.
pub(super) async fn home_page(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog_view(FilterState::default());
    let body = [
        render_hero(),
        render_catalog_section(&catalog, &state.card_format),
        render_about(),
        render_store_locator(&StoreLocatorView::default(), state.stores.stores()),
        render_contact(),
    ]
    .concat();

    Html(layout("Fresh Dairy", &state.navbar(), &body))
}
