use std::collections::HashMap;
use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::Error;
use crate::message::Message;

/// Builds a message body from view templates.
///
/// The template root is resolved per call, so composer implementations can
/// be shared freely between services and threads.
pub trait Composer {
    /// `layout` maps view kinds (`html`, `text`) to template names;
    /// `params` are exposed to the templates under the `params` key.
    fn compose(
        &self,
        view_path: &Path,
        layout: &HashMap<String, String>,
        params: &Value,
    ) -> Result<Message, Error>;
}

/// Handlebars-backed composer.
///
/// Templates live under the view path as `<name>.<kind>.hbs`, so a layout
/// of `{html: "contact"}` renders `<view_path>/contact.html.hbs`.
pub struct TemplateComposer {
    registry: Handlebars<'static>,
}

impl TemplateComposer {
    pub fn new() -> Self {
        let registry = Handlebars::new();
        Self { registry }
    }

    fn render(
        &self,
        view_path: &Path,
        template: &str,
        kind: &str,
        data: &Value,
    ) -> Result<String, Error> {
        let path = view_path.join(format!("{}.{}.hbs", template, kind));
        let source = fs::read_to_string(&path)
            .map_err(|e| Error::Template(format!("{}: {}", path.display(), e)))?;

        self.registry
            .render_template(&source, data)
            .map_err(|e| Error::Template(e.to_string()))
    }
}

impl Default for TemplateComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer for TemplateComposer {
    fn compose(
        &self,
        view_path: &Path,
        layout: &HashMap<String, String>,
        params: &Value,
    ) -> Result<Message, Error> {
        let mut data = serde_json::Map::new();
        data.insert("params".to_string(), params.clone());
        let data = Value::Object(data);

        let mut message = Message::new();

        for (kind, template) in layout {
            match kind.as_str() {
                "html" => message.html_body = Some(self.render(view_path, template, kind, &data)?),
                "text" => message.text_body = Some(self.render(view_path, template, kind, &data)?),
                _ => return Err(Error::Template(format!("unknown view kind: {}", kind))),
            }
        }

        Ok(message)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    static VIEW_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/mail");

    fn layout(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_html_and_text_views() {
        let composer = TemplateComposer::new();
        let params = json!({ "username": "User", "body": "TestMe" });

        let message = composer
            .compose(
                Path::new(VIEW_PATH),
                &layout(&[("html", "contact"), ("text", "contact")]),
                &params,
            )
            .unwrap();

        let html = message.html_body.unwrap();
        assert!(html.contains("User"));
        assert!(html.contains("TestMe"));
        assert!(message.text_body.unwrap().contains("User"));
    }

    #[test]
    fn empty_layout_renders_nothing() {
        let composer = TemplateComposer::new();
        let message = composer
            .compose(Path::new(VIEW_PATH), &HashMap::new(), &json!({}))
            .unwrap();

        assert!(message.html_body.is_none());
        assert!(message.text_body.is_none());
    }

    #[test]
    fn missing_template_is_an_error() {
        let composer = TemplateComposer::new();
        let err = composer
            .compose(
                Path::new(VIEW_PATH),
                &layout(&[("html", "does-not-exist")]),
                &json!({}),
            )
            .unwrap_err();

        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn unknown_view_kind_is_an_error() {
        let composer = TemplateComposer::new();
        let err = composer
            .compose(
                Path::new(VIEW_PATH),
                &layout(&[("pdf", "contact")]),
                &json!({}),
            )
            .unwrap_err();

        assert!(matches!(err, Error::Template(_)));
    }
}
