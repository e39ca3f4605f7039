//! Page bodies. Each function returns the page's `<head>` metadata and the
//! markup placed inside `<main>`; the layout wraps it.

use crate::content::{Project, ProjectDetail, ProjectStatus};
use crate::i18n::{Locale, LocaleStrings};
use crate::render::components::{Button, Card};
use crate::render::layout::{PageMeta, CONTACT_EMAIL, SITE_NAME, TWITTER_URL};
use crate::render::SiteContext;
use crate::routing::{RouteEntry, StaticPage};
use maud::{html, Markup, PreEscaped};

/// Service cards in display order; the first is featured on the home page.
const SERVICES: [&str; 4] = ["smartContract", "web3Content", "consulting", "aiDevelopment"];

/// Inquiry categories offered by the contact form.
pub const INQUIRY_TYPES: [&str; 4] = ["smartContract", "web3", "ai", "other"];

/// Number of projects previewed on the home page.
const HOME_PROJECT_PREVIEW: usize = 3;

fn page_href(locale: Locale, page: StaticPage) -> String {
    RouteEntry::page(locale, page).path()
}

fn hero(title: &str, subtitle: &str) -> Markup {
    html! {
        section.hero {
            div.container {
                h1.title { span.gradient-text { (title) } }
                p.subtitle { (subtitle) }
            }
        }
    }
}

fn service_card(t: LocaleStrings<'_>, key: &str, featured: bool) -> Markup {
    let title = format!("services.{}.title", key);
    let description = format!("services.{}.description", key);
    let card = if featured { Card::default() } else { Card::hover() };

    card.render(html! {
        div.service.featured[featured] data-service=(key) {
            h3.card-title { (t.get_owned(&title)) }
            p.card-description { (t.get_owned(&description)) }
        }
    })
}

fn project_card(t: LocaleStrings<'_>, project: &Project) -> Markup {
    let locale = t.locale();
    let status = project.status;

    Card::hover().render(html! {
        div.project-card {
            div.project-icon { (project.icon.as_deref().unwrap_or("📦")) }
            div.project-header {
                h3.project-title { (project.name.get(locale)) }
                span.status.completed[status == ProjectStatus::Completed] {
                    (t.get(status.label_key()))
                }
            }
            p.project-description { (project.short_description.get(locale)) }
            div.tags {
                @for tag in &project.tags { span.tag { (tag) } }
            }
            (Button::default().outline().full_width().link(
                &RouteEntry::project(locale, project.slug.as_str()).path(),
                t.get("projects.viewDetails"),
            ))
        }
    })
}

pub fn home(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("{} - {}", SITE_NAME, t.get("hero.title")),
        description: t.get("hero.subtitle").to_string(),
    };

    let body = html! {
        section.hero.home-hero {
            div.container {
                h1.title { span.gradient-text { (t.get("hero.title")) } }
                p.subtitle { (t.get("hero.subtitle")) }
                (Button::large().link(&page_href(locale, StaticPage::Contact), t.get("hero.cta")))
            }
        }
        section.section {
            div.container {
                h2.section-title { (t.get("services.title")) }
                p.section-subtitle { (t.get("services.subtitle")) }
                div.services-grid {
                    @for (i, key) in SERVICES.iter().enumerate() {
                        (service_card(t, key, i == 0))
                    }
                }
                (Button::default().outline().link(&page_href(locale, StaticPage::Services), t.get("common.learnMore")))
            }
        }
        section.section {
            div.container {
                h2.section-title { (t.get("projects.title")) }
                div.projects-grid {
                    @for project in ctx.content.projects().iter().take(HOME_PROJECT_PREVIEW) {
                        (project_card(t, project))
                    }
                }
                (Button::default().outline().link(&page_href(locale, StaticPage::Projects), t.get("common.viewAll")))
            }
        }
    };

    (meta, body)
}

pub fn about(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("{} - {}", t.get("about.title"), SITE_NAME),
        description: t.get("about.description").to_string(),
    };

    let body = html! {
        (hero(t.get("about.title"), t.get("about.subtitle")))
        section.section {
            div.container {
                (Card::default().render(html! { p.description { (t.get("about.description")) } }))
            }
        }
        section.section {
            div.container {
                div.grid {
                    @for key in ["mission", "vision"] {
                        (Card::hover().render(html! {
                            h3.card-title { (t.get_owned(&format!("about.{}.title", key))) }
                            p.card-description { (t.get_owned(&format!("about.{}.description", key))) }
                        }))
                    }
                }
            }
        }
    };

    (meta, body)
}

pub fn services(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("{} - {}", t.get("services.title"), SITE_NAME),
        description: t.get("services.subtitle").to_string(),
    };

    let body = html! {
        (hero(t.get("services.title"), t.get("services.subtitle")))
        section.section {
            div.container {
                div.services-grid {
                    @for key in SERVICES {
                        (service_card(t, key, false))
                    }
                }
            }
        }
        section.section.cta-section {
            div.container {
                (Button::large().link(&page_href(locale, StaticPage::Contact), t.get("nav.contact")))
            }
        }
    };

    (meta, body)
}

pub fn projects(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("{} - {}", t.get("projects.title"), SITE_NAME),
        description: t.get("projects.subtitle").to_string(),
    };

    let body = html! {
        (hero(t.get("projects.title"), t.get("projects.subtitle")))
        section.section {
            div.container {
                div.projects-grid {
                    @for project in ctx.content.projects() {
                        (project_card(t, project))
                    }
                }
            }
        }
    };

    (meta, body)
}

/// Project detail page. `None` when the slug matches no project; the
/// caller renders the not-found state instead.
pub fn project_detail(
    ctx: &SiteContext<'_>,
    locale: Locale,
    slug: &str,
) -> Option<(PageMeta, Markup)> {
    let project = ctx.content.find_project(slug)?;
    let detail = ctx.content.detail(slug);
    let t = ctx.translations.for_locale(locale);

    let meta = PageMeta {
        title: format!("{} - {}", project.name.get(locale), SITE_NAME),
        description: project.short_description.get(locale).to_string(),
    };

    let body = html! {
        section.hero {
            div.container {
                a.back-link href=(page_href(locale, StaticPage::Projects)) {
                    "← " (t.get("projects.backToProjects"))
                }
                span.eyebrow { (t.get("projectDetail.eyebrow")) }
                h1.title { (project.name.get(locale)) }
                p.subtitle { (project.short_description.get(locale)) }
                div.meta {
                    span.status-badge { (t.get(project.status.label_key())) }
                    div.tags {
                        @for tag in &project.tags { span.tag { (tag) } }
                    }
                }
            }
        }
        @if let Some(detail) = &detail {
            (detail_sections(t, detail))
        }
        section.cta-section {
            div.container {
                (Card::default().render(html! {
                    h2.cta-title { (t.get("projectDetail.cta.title")) }
                    p.cta-description { (t.get("projectDetail.cta.description")) }
                    div.cta-actions {
                        (Button::large().link(&page_href(locale, StaticPage::Contact), t.get("nav.contact")))
                        (Button::large().outline().link(&page_href(locale, StaticPage::Services), t.get("nav.services")))
                    }
                }))
            }
        }
    };

    Some((meta, body))
}

fn section_header(t: LocaleStrings<'_>, key: &str) -> Markup {
    html! {
        div.section-header {
            h2.section-title { (t.get_owned(&format!("projectDetail.{}.title", key))) }
            p.section-subtitle { (t.get_owned(&format!("projectDetail.{}.subtitle", key))) }
        }
    }
}

fn detail_sections(t: LocaleStrings<'_>, detail: &ProjectDetail) -> Markup {
    let locale = t.locale();
    let results = detail.results.as_ref().map(|r| r.get(locale)).unwrap_or_default();

    html! {
        section.section {
            div.container {
                (section_header(t, "overview"))
                (Card::default().render(html! {
                    p.full-description { (detail.full_description.get(locale)) }
                }))
            }
        }
        @if !detail.tech_stack.is_empty() {
            section.section {
                div.container {
                    (section_header(t, "techStack"))
                    div.bento-grid {
                        @for tech in &detail.tech_stack {
                            (Card::hover().render(html! { div.tech-item { (tech) } }))
                        }
                    }
                }
            }
        }
        @if !detail.features.is_empty() {
            section.section {
                div.container {
                    (section_header(t, "features"))
                    div.bento-grid {
                        @for feature in &detail.features {
                            (Card::hover().render(html! { div.feature { "✓ " (feature.get(locale)) } }))
                        }
                    }
                }
            }
        }
        @if !results.is_empty() {
            section.section {
                div.container {
                    (section_header(t, "results"))
                    (Card { glass: false, hover: false }.render(html! {
                        ul.results-list {
                            @for result in results { li.result-item { (result) } }
                        }
                    }))
                }
            }
        }
    }
}

/// Not-found state for a locale, used for unknown project slugs.
pub fn not_found(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("404 - {}", SITE_NAME),
        description: t.get("notFound.description").to_string(),
    };

    let body = html! {
        section.not-found {
            div.container {
                h1.title { "404" }
                h2.subtitle { (t.get("notFound.title")) }
                p.description { (t.get("notFound.description")) }
                div.actions {
                    (Button::large().link(&page_href(locale, StaticPage::Projects), t.get("projects.backToProjects")))
                    (Button::large().outline().link(&page_href(locale, StaticPage::Home), t.get("notFound.home")))
                }
            }
        }
    };

    (meta, body)
}

/// Submits the form as JSON and shows the localized outcome message.
const CONTACT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var form = document.getElementById('contact-form');
  if (!form) return;
  var status = document.getElementById('contact-status');
  var submit = form.querySelector('button[type=submit]');
  var idleLabel = submit.textContent;
  form.addEventListener('submit', function (e) {
    e.preventDefault();
    var data = Object.fromEntries(new FormData(form).entries());
    data.lang = form.dataset.lang;
    submit.disabled = true;
    submit.textContent = form.dataset.submitting;
    fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data)
    }).then(function (res) {
      status.textContent = res.ok ? form.dataset.success : form.dataset.error;
      status.className = res.ok ? 'success-message' : 'error-message';
      if (res.ok) form.reset();
    }).catch(function () {
      status.textContent = form.dataset.error;
      status.className = 'error-message';
    }).finally(function () {
      submit.disabled = false;
      submit.textContent = idleLabel;
    });
  });
});
"#;

pub fn contact(ctx: &SiteContext<'_>, locale: Locale) -> (PageMeta, Markup) {
    let t = ctx.translations.for_locale(locale);
    let meta = PageMeta {
        title: format!("{} - {}", t.get("contact.title"), SITE_NAME),
        description: t.get("contact.subtitle").to_string(),
    };

    let body = html! {
        (hero(t.get("contact.title"), t.get("contact.subtitle")))
        section.section {
            div.container.contact-content {
                div.form-section {
                    (Card::default().render(html! {
                        form #contact-form.form
                            data-lang=(locale.code())
                            data-success=(t.get("contact.form.success"))
                            data-error=(t.get("contact.form.error"))
                            data-submitting=(t.get("contact.form.submitting")) {
                            div.form-group {
                                label for="name" { (t.get("contact.form.name")) " *" }
                                input #name type="text" name="name" required placeholder=(t.get("contact.form.namePlaceholder"));
                            }
                            div.form-group {
                                label for="company" { (t.get("contact.form.company")) }
                                input #company type="text" name="company" placeholder=(t.get("contact.form.companyPlaceholder"));
                            }
                            div.form-row {
                                div.form-group {
                                    label for="email" { (t.get("contact.form.email")) " *" }
                                    input #email type="email" name="email" required placeholder=(t.get("contact.form.emailPlaceholder"));
                                }
                                div.form-group {
                                    label for="phone" { (t.get("contact.form.phone")) }
                                    input #phone type="tel" name="phone" placeholder=(t.get("contact.form.phonePlaceholder"));
                                }
                            }
                            div.form-group {
                                label for="inquiryType" { (t.get("contact.form.inquiryType")) " *" }
                                select #inquiryType name="inquiryType" required {
                                    option value="" { (t.get("contact.form.selectPlaceholder")) }
                                    @for kind in INQUIRY_TYPES {
                                        option value=(kind) { (t.get_owned(&format!("contact.form.inquiryTypes.{}", kind))) }
                                    }
                                }
                            }
                            div.form-group {
                                label for="message" { (t.get("contact.form.message")) " *" }
                                textarea #message name="message" required rows="6" placeholder=(t.get("contact.form.messagePlaceholder")) {}
                            }
                            div #contact-status role="status" {}
                            (Button::large().full_width().submit(t.get("contact.form.submit")))
                        }
                    }))
                }
                div.info-section {
                    (Card::hover().render(html! {
                        h3.info-title { (t.get("contact.info.email")) }
                        a.info-link href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) }
                    }))
                    (Card::hover().render(html! {
                        h3.info-title { (t.get("contact.info.social")) }
                        a.social-link href=(TWITTER_URL) target="_blank" rel="noopener noreferrer" { "X (Twitter)" }
                    }))
                }
            }
        }
        script { (PreEscaped(CONTACT_SCRIPT)) }
    };

    (meta, body)
}
