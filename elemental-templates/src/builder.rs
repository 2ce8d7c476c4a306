//! Hand-authored node trees for each archetype.

use crate::kind::TemplateKind;
use elemental_types::{BoxModel, ElType, Node, SettingValue, Settings, UnitValue, WidgetType};
use serde_json::{Value, json};

/// Deterministic 7-hex-digit ids, the width Elementor uses.
pub(crate) struct IdSequence {
    prefix: u32,
    next: u32,
}

impl IdSequence {
    pub(crate) fn new(kind: TemplateKind) -> Self {
        Self {
            prefix: kind.id_prefix(),
            next: 1,
        }
    }

    fn next_id(&mut self) -> String {
        let id = format!("{:x}{:06x}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

fn settings(value: Value) -> Settings {
    match SettingValue::from(value) {
        SettingValue::Object(map) => map,
        _ => Settings::new(),
    }
}

fn container(ids: &mut IdSequence, mut props: Settings, children: Vec<Node>) -> Node {
    props
        .entry("content_width".into())
        .or_insert_with(|| "boxed".into());
    Node::structural(ids.next_id(), ElType::Container, props, children)
}

fn inner_container(ids: &mut IdSequence, props: Settings, children: Vec<Node>) -> Node {
    let mut node = container(ids, props, children);
    node.is_inner = Some(true);
    node
}

fn heading(ids: &mut IdSequence, title: &str, header_size: &str) -> Node {
    Node::widget(
        ids.next_id(),
        WidgetType::Heading,
        settings(json!({"title": title, "header_size": header_size})),
    )
}

fn paragraph(ids: &mut IdSequence, html: &str) -> Node {
    Node::widget(
        ids.next_id(),
        WidgetType::TextEditor,
        settings(json!({"editor": html})),
    )
}

fn button(ids: &mut IdSequence, text: &str, url: &str) -> Node {
    Node::widget(
        ids.next_id(),
        WidgetType::Button,
        settings(json!({
            "text": text,
            "link": {"url": url, "is_external": "", "nofollow": ""}
        })),
    )
}

fn section_padding() -> SettingValue {
    BoxModel {
        top: "96".into(),
        right: "24".into(),
        bottom: "96".into(),
        left: "24".into(),
        unit: "px".into(),
        is_linked: false,
    }
    .into()
}

pub(crate) fn hero(ids: &mut IdSequence) -> Node {
    let mut props = settings(json!({
        "flex_direction": "column",
        "flex_align_items": "center",
        "flex_gap": {"column": "24", "row": "24", "unit": "px", "isLinked": true}
    }));
    props.insert("padding".into(), section_padding());

    let title = heading(ids, "Build beautiful pages in minutes", "h1");
    let body = paragraph(
        ids,
        "<p>Drop in ready-made sections, tweak the copy, and publish. No code required.</p>",
    );
    let primary = button(ids, "Get started", "#signup");
    let secondary = button(ids, "Learn more", "#features");
    let actions = inner_container(
        ids,
        settings(json!({"flex_direction": "row", "flex_justify_content": "center"})),
        vec![primary, secondary],
    );
    let mut image_settings = settings(json!({
        "image": {"url": "https://placehold.co/1200x720", "id": "", "alt": "Product preview"},
        "image_size": "full"
    }));
    image_settings.insert("width".into(), UnitValue { size: 100_i64.into(), unit: "%".into() }.into());
    let image = Node::widget(ids.next_id(), WidgetType::Image, image_settings);

    container(ids, props, vec![title, body, actions, image])
}

fn feature_card(ids: &mut IdSequence, icon: &str, title: &str, description: &str) -> Node {
    let card = Node::widget(
        ids.next_id(),
        WidgetType::IconBox,
        settings(json!({
            "selected_icon": {"value": icon, "library": "fa-solid"},
            "title_text": title,
            "description_text": description,
            "title_size": "h3",
            "position": "top"
        })),
    );
    inner_container(
        ids,
        settings(json!({"_element_width": "initial", "_element_custom_width": {"unit": "%", "size": 33}})),
        vec![card],
    )
}

pub(crate) fn features(ids: &mut IdSequence) -> Node {
    let mut props = settings(json!({
        "flex_direction": "column",
        "flex_align_items": "center"
    }));
    props.insert("padding".into(), section_padding());

    let title = heading(ids, "Everything you need to launch", "h2");
    let intro = paragraph(
        ids,
        "<p>A focused toolkit for teams that ship landing pages every week.</p>",
    );
    let cards = vec![
        feature_card(ids, "fas fa-bolt", "Fast", "Start from tested layouts instead of a blank canvas."),
        feature_card(ids, "fas fa-layer-group", "Consistent", "Every block follows the same spacing and type scale."),
        feature_card(ids, "fas fa-mobile-alt", "Responsive", "Sections adapt to tablet and mobile out of the box."),
    ];
    let grid = inner_container(
        ids,
        settings(json!({"flex_direction": "row", "flex_wrap": "wrap"})),
        cards,
    );

    container(ids, props, vec![title, intro, grid])
}

fn form_field(id: &str, field_type: &str, label: &str, placeholder: &str, required: bool) -> Value {
    json!({
        "custom_id": id,
        "field_type": field_type,
        "field_label": label,
        "placeholder": placeholder,
        "required": if required { "true" } else { "" },
        "width": "100",
        "_id": format!("f{id}")
    })
}

pub(crate) fn form(ids: &mut IdSequence) -> Node {
    let mut props = settings(json!({
        "flex_direction": "column",
        "flex_align_items": "stretch",
        "boxed_width": {"unit": "px", "size": 640, "sizes": []}
    }));
    props.insert("padding".into(), section_padding());

    let title = heading(ids, "Get in touch", "h2");
    let intro = paragraph(ids, "<p>Tell us about your project and we will reply within a day.</p>");
    let form = Node::widget(
        ids.next_id(),
        WidgetType::Form,
        settings(json!({
            "form_name": "Contact",
            "form_fields": [
                form_field("name", "text", "Name", "Your name", true),
                form_field("email", "email", "Email", "you@company.com", true),
                form_field("message", "textarea", "Message", "How can we help?", false)
            ],
            "button_text": "Send message",
            "email_to": "hello@example.com",
            "email_subject": "New message from your site"
        })),
    );

    container(ids, props, vec![title, intro, form])
}
