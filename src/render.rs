//! HTML page rendering
//!
//! Two Handlebars templates compiled into the binary: the listing page
//! (context key `pokemones`) and the not-found page.

use catalog_types::ViewModel;
use handlebars::Handlebars;
use serde_json::json;

use crate::error::PageError;

const LISTING: &str = "pokemon";
const NOT_FOUND: &str = "not_found";

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, PageError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_helper("join", Box::new(join_helper));
        handlebars.register_template_string(LISTING, include_str!("../templates/pokemon.hbs"))?;
        handlebars
            .register_template_string(NOT_FOUND, include_str!("../templates/not_found.hbs"))?;

        Ok(Self { handlebars })
    }

    /// Render the listing page. An empty slice renders the empty state.
    pub fn render_listing(&self, items: &[ViewModel]) -> Result<String, PageError> {
        Ok(self
            .handlebars
            .render(LISTING, &json!({ "pokemones": items }))?)
    }

    pub fn render_not_found(&self) -> Result<String, PageError> {
        Ok(self.handlebars.render(NOT_FOUND, &json!({}))?)
    }
}

// Handlebars helpers

/// `{{join list ", "}}`: string items joined by the separator.
fn join_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");
    let joined = h
        .param(0)
        .and_then(|v| v.value().as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(separator)
        })
        .unwrap_or_default();
    out.write(&handlebars::html_escape(&joined))?;
    Ok(())
}
