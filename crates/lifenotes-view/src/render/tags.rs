//! Tag filter buttons

use crate::element::Element;
use crate::messages::class;

/// One button per tag, in the given order
#[must_use]
pub fn tag_buttons<'a>(tags: impl IntoIterator<Item = &'a str>, active: Option<&str>) -> Vec<Element> {
    let mut buttons: Vec<Element> = tags
        .into_iter()
        .map(|tag| {
            Element::new("button")
                .with_class("tag-button")
                .with_attr("type", "button")
                .with_text(tag)
        })
        .collect();
    project_active_tag(&mut buttons, active);
    buttons
}

/// Mark the button whose text equals `active`, unmark the rest
pub fn project_active_tag(buttons: &mut [Element], active: Option<&str>) {
    for button in buttons {
        let is_active = active.is_some_and(|tag| button.text_content() == tag);
        button.toggle_class(class::IS_ACTIVE, is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_projection_follows_state() {
        let mut buttons = tag_buttons(["calm", "focus"], Some("focus"));
        assert!(!buttons[0].has_class("is-active"));
        assert!(buttons[1].has_class("is-active"));

        project_active_tag(&mut buttons, None);
        assert!(buttons.iter().all(|b| !b.has_class("is-active")));
    }
}
