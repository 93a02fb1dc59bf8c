use leptos::prelude::*;
use leptos_meta::*;

use crate::config::site_url;
use crate::content::PROFILE;
use crate::seo::*;

/// Everything the page puts in `<head>`: search, social card, and geo tags,
/// plus the JSON-LD person document.
#[component]
pub fn PageMeta() -> impl IntoView {
    let canonical = site_url("");
    let image = og_image_url();

    view! {
        <Title text=TITLE />
        <Meta name="title" content=TITLE />
        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content=KEYWORDS />
        <Meta name="author" content=PROFILE.name />
        <Meta name="robots" content="index, follow" />
        <Meta name="language" content="English" />
        <Meta name="revisit-after" content="7 days" />
        <Meta name="theme-color" content=THEME_COLOR />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=TITLE />
        <Meta property="og:description" content=SOCIAL_DESCRIPTION />
        <Meta property="og:image" content=image.clone() />
        <Meta property="og:image:width" content=OG_IMAGE_WIDTH.to_string() />
        <Meta property="og:image:height" content=OG_IMAGE_HEIGHT.to_string() />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:locale" content="en_US" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:url" content=canonical.clone() />
        <Meta name="twitter:title" content=TITLE />
        <Meta name="twitter:description" content=SOCIAL_DESCRIPTION />
        <Meta name="twitter:image" content=image />

        <Link rel="canonical" href=canonical />
        <Link rel="icon" type_="image/png" sizes="32x32" href="/favicon-32x32.png" />
        <Link rel="icon" type_="image/png" sizes="16x16" href="/favicon-16x16.png" />
        <Link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png" />
        <Link rel="manifest" href="/site.webmanifest" />
        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
        <Link
            rel="stylesheet"
            href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
        />

        <Meta name="geo.region" content=PROFILE.region_code />
        <Meta name="geo.placename" content=PROFILE.city />
        <Meta name="geo.position" content=geo_position() />
        <Meta name="ICBM" content=icbm() />

        <Script type_="application/ld+json">{structured_data()}</Script>
    }
}
