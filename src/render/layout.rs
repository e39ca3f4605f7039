use crate::i18n::{Locale, LocaleStrings};
use crate::render::components::Button;
use crate::render::SiteContext;
use crate::routing::{RouteEntry, StaticPage};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Nebula Infinity";
pub const CONTACT_EMAIL: &str = "info@nebulainfinity.com";
pub const TWITTER_URL: &str = "https://twitter.com/N_I_COM";

/// Per-page `<head>` data.
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Full HTML document for a localized route: head, header, body, footer.
pub fn document(
    ctx: &SiteContext<'_>,
    entry: &RouteEntry,
    meta: &PageMeta,
    body: Markup,
) -> Markup {
    let locale = entry.locale;
    let t = ctx.translations.for_locale(locale);

    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                meta property="og:locale" content=(locale.og_locale());
                link rel="canonical" href=(ctx.absolute_url(&entry.path()));
                @for alternate in Locale::ALL {
                    link rel="alternate"
                        hreflang=(alternate.code())
                        href=(ctx.absolute_url(&entry.with_locale(alternate).path()));
                }
                link rel="icon" href="/favicon.ico";
                link rel="stylesheet" href="/styles.css";
            }
            body {
                (header(entry, t))
                main { (body) }
                (footer(locale, t))
            }
        }
    }
}

fn nav_links(locale: Locale, t: LocaleStrings<'_>) -> Markup {
    html! {
        @for page in StaticPage::ALL {
            a.nav-link href=(RouteEntry::page(locale, page).path()) { (t.get(page.nav_key())) }
        }
    }
}

fn header(entry: &RouteEntry, t: LocaleStrings<'_>) -> Markup {
    let locale = entry.locale;
    let switch_to = locale.other();

    html! {
        header.site-header {
            div.container {
                a.logo href=(RouteEntry::page(locale, StaticPage::Home).path()) {
                    img.logo-image src="/images/logo.png" alt=(SITE_NAME);
                    span.logo-text { (SITE_NAME) }
                }
                nav.nav { (nav_links(locale, t)) }
                a.lang-button
                    href=(entry.with_locale(switch_to).path())
                    hreflang=(switch_to.code())
                    title=(switch_to.native_name()) {
                    (switch_to.toggle_label())
                }
            }
        }
    }
}

fn footer(locale: Locale, t: LocaleStrings<'_>) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.brand {
                    span.logo-text { (SITE_NAME) }
                    p.description { (t.get("footer.tagline")) }
                }
                div.link-group {
                    h4 { (t.get("footer.quickLinks")) }
                    nav.link-list { (nav_links(locale, t)) }
                }
                div.link-group {
                    h4 { (t.get("contact.info.social")) }
                    a.social-link
                        href=(TWITTER_URL)
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="X (Twitter)" { "X" }
                    a.social-link href={ "mailto:" (CONTACT_EMAIL) } aria-label="Email" {
                        (CONTACT_EMAIL)
                    }
                }
                p.copyright { (t.get("footer.copyright")) }
            }
        }
    }
}

/// Locale-less 404 document, offering both home pages.
pub fn root_not_found(ctx: &SiteContext<'_>) -> Markup {
    let ja = ctx.translations.for_locale(Locale::Ja);
    let en = ctx.translations.for_locale(Locale::En);

    html! {
        (DOCTYPE)
        html lang=(Locale::DEFAULT.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "404 - " (SITE_NAME) }
                meta name="robots" content="noindex";
                link rel="stylesheet" href="/styles.css";
            }
            body {
                main.not-found {
                    span.eyebrow { "404 ERROR" }
                    h1.title { "404" }
                    h2.subtitle {
                        span lang="ja" { (ja.get("notFound.title")) }
                        " / "
                        span lang="en" { (en.get("notFound.title")) }
                    }
                    p.description lang="ja" { (ja.get("notFound.description")) }
                    p.description lang="en" { (en.get("notFound.description")) }
                    div.actions {
                        (Button::large().link(
                            &RouteEntry::page(Locale::Ja, StaticPage::Home).path(),
                            ja.get("notFound.home"),
                        ))
                        (Button::large().outline().link(
                            &RouteEntry::page(Locale::En, StaticPage::Home).path(),
                            en.get("notFound.home"),
                        ))
                    }
                }
            }
        }
    }
}
