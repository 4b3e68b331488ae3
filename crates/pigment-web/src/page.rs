//! The bundled single-page UI.
//!
//! The page is embedded at compile time and rendered once at startup:
//! the model selector options are generated from the catalog so the UI
//! and the relay can never disagree about which aliases exist.

use axum::extract::State;
use axum::response::Html;
use pigment_core::ModelCatalog;

use crate::state::AppState;

/// Raw page template.
const PAGE_TEMPLATE: &str = include_str!("../assets/index.html");

/// Placeholder replaced with the rendered `<option>` list.
const MODEL_OPTIONS_SLOT: &str = "<!--model-options-->";

/// Render the page for a catalog, pre-selecting the default alias.
pub(crate) fn render_page(catalog: &ModelCatalog) -> String {
    let options = catalog
        .iter()
        .map(|(alias, id)| {
            let selected = if alias == catalog.default_alias() {
                " selected"
            } else {
                ""
            };
            let label = id.rsplit('/').next().unwrap_or(alias);
            format!("<option value=\"{alias}\"{selected}>{label}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n          ");
    PAGE_TEMPLATE.replace(MODEL_OPTIONS_SLOT, &options)
}

/// Serve the UI for any request that is not the relay POST.
pub(crate) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_ref().to_owned())
}
