use maud::{html, Markup};

/// Visual options for a card container.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub glass: bool,
    pub hover: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            glass: true,
            hover: false,
        }
    }
}

impl Card {
    pub fn hover() -> Self {
        Self {
            hover: true,
            ..Self::default()
        }
    }

    pub fn render(&self, content: Markup) -> Markup {
        html! {
            div.card.glass[self.glass].hover[self.hover] { (content) }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

/// Visual options for a button or button-styled link.
#[derive(Debug, Clone, Copy, Default)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl Button {
    pub fn large() -> Self {
        Self {
            size: ButtonSize::Lg,
            ..Self::default()
        }
    }

    pub fn outline(mut self) -> Self {
        self.variant = ButtonVariant::Outline;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    fn class(&self) -> String {
        let mut classes = vec!["btn"];
        classes.push(match self.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        });
        classes.push(match self.size {
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        });
        if self.full_width {
            classes.push("btn-full");
        }
        classes.join(" ")
    }

    /// An anchor styled as a button.
    pub fn link(&self, href: &str, label: &str) -> Markup {
        html! {
            a class=(self.class()) href=(href) { (label) }
        }
    }

    /// A form submit button.
    pub fn submit(&self, label: &str) -> Markup {
        html! {
            button class=(self.class()) type="submit" { (label) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults_to_glass() {
        let html = Card::default().render(html! { "x" }).into_string();
        assert!(html.starts_with("<div class=\"card glass"));
        assert!(html.ends_with(">x</div>"));
        assert!(!html.contains("hover"));
    }

    #[test]
    fn test_card_hover() {
        let html = Card::hover().render(html! { "x" }).into_string();
        assert!(html.contains("hover"));
        assert!(html.contains("glass"));
    }

    #[test]
    fn test_card_without_glass() {
        let card = Card {
            glass: false,
            hover: false,
        };
        let html = card.render(html! {}).into_string();
        assert!(!html.contains("glass"));
        assert!(!html.contains("hover"));
    }

    #[test]
    fn test_button_link_classes() {
        let html = Button::large().outline().link("/en/", "Home").into_string();
        assert!(html.contains(r#"class="btn btn-outline btn-lg""#));
        assert!(html.contains(r#"href="/en/""#));
    }

    #[test]
    fn test_button_escapes_label() {
        let html = Button::default().submit("<Send>").into_string();
        assert!(html.contains("&lt;Send&gt;"));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn test_button_full_width() {
        let html = Button::default().full_width().submit("Go").into_string();
        assert!(html.contains("btn-full"));
    }
}
