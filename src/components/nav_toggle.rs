//! Menu button that shows or hides the navigation list on narrow screens.
//! The component renders both the button and the list, so neither can be missing.
use leptos::*;
use leptos::logging::log;

/// Inline `display` of the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavDisplay {
    /// No inline value, the stylesheet decides.
    #[default]
    Stylesheet,
    Hidden,
    Flex,
}

impl NavDisplay {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "none" => NavDisplay::Hidden,
            "flex" => NavDisplay::Flex,
            _ => NavDisplay::Stylesheet,
        }
    }

    pub fn as_css(self) -> Option<&'static str> {
        match self {
            NavDisplay::Stylesheet => None,
            NavDisplay::Hidden => Some("none"),
            NavDisplay::Flex => Some("flex"),
        }
    }

    /// Hidden lists become flex, anything else becomes hidden.
    pub fn toggled(self) -> Self {
        match self {
            NavDisplay::Hidden => NavDisplay::Flex,
            NavDisplay::Flex | NavDisplay::Stylesheet => NavDisplay::Hidden,
        }
    }
}

#[component]
pub fn NavToggle(
    #[prop(optional)] initial: NavDisplay,
    children: Children,
) -> impl IntoView {
    let (display, set_display) = create_signal(initial);

    let toggle = move |_| {
        set_display.update(|d| *d = d.toggled());
        log!("[NAV] Navigation list display: {:?}", display.get_untracked());
    };

    view! {
        <button id="navtoggle" type="button" on:click=toggle>{ "☰" }</button>
        <ul class="navlist" style:display=move || display.get().as_css()>
            {children()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_toggles_to_flex_and_back() {
        let display = NavDisplay::Hidden;
        assert_eq!(display.toggled(), NavDisplay::Flex);
        assert_eq!(display.toggled().toggled(), NavDisplay::Hidden);
    }

    #[test]
    fn repeated_toggles_alternate_between_two_values() {
        let mut display = NavDisplay::from_css("none");
        let mut seen = Vec::new();
        for _ in 0..4 {
            display = display.toggled();
            seen.push(display.as_css());
        }
        assert_eq!(seen, vec![Some("flex"), Some("none"), Some("flex"), Some("none")]);
    }

    #[test]
    fn first_click_without_inline_style_hides() {
        assert_eq!(NavDisplay::from_css(""), NavDisplay::Stylesheet);
        assert_eq!(NavDisplay::Stylesheet.as_css(), None);
        assert_eq!(NavDisplay::Stylesheet.toggled(), NavDisplay::Hidden);
    }

    #[test]
    fn unknown_inline_values_count_as_visible() {
        assert_eq!(NavDisplay::from_css("block").toggled(), NavDisplay::Hidden);
    }
}
