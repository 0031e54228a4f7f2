//! Typed wrappers around Plotly.js via `js_sys::eval()`.
//!
//! Plotly is loaded from its CDN at runtime as a plain global (`window.Plotly`).
//! Figures arrive from the API already in Plotly's `{data, layout}` shape, so
//! rendering is a single `Plotly.react` call once the library and the container
//! element both exist.

use bbs_core::events::ClickPoint;
use bbs_core::figure::Figure;
use dioxus::document::{self, Eval};

pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BBS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly script tag once. Safe to call on every render.
pub fn init_plotly() {
    call_js(&format!(
        r#"
        if (!window.__bbsPlotlyRequested) {{
            window.__bbsPlotlyRequested = true;
            var s = document.createElement('script');
            s.src = '{src}';
            s.onload = function() {{ console.log('BBS Plotly loaded'); }};
            document.head.appendChild(s);
        }}
        "#,
        src = PLOTLY_SRC
    ));
}

/// JS that waits for Plotly and the container, then draws `figure_json`.
///
/// The figure is embedded as a JS object literal; JSON is valid JS, so no
/// string escaping is involved.
pub fn figure_script(container_id: &str, figure_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var fig = {figure_json};
            var poll = setInterval(function() {{
                if (typeof window.Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.Plotly.react('{container_id}', fig.data, fig.layout, {{responsive: true}});
                    }} catch(e) {{ console.error('[BBS] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Draw (or redraw in place) a figure into the element with `container_id`.
pub fn render_figure(container_id: &str, figure: &Figure) {
    match serde_json::to_string(figure) {
        Ok(json) => {
            log::info!("[BBS Debug] render_figure {} ({} traces)", container_id, figure.data.len());
            call_js(&figure_script(container_id, &json));
        }
        Err(e) => log::error!("[BBS Debug] figure for {} did not serialize: {}", container_id, e),
    }
}

/// Remove a plot and its listeners from the container.
pub fn purge_figure(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{id}'); if (el && window.Plotly) {{ window.Plotly.purge(el); }} else if (el) {{ el.innerHTML = ''; }}",
        id = container_id
    ));
}

/// JS that forwards the first point of every `plotly_click` on the container
/// through `dioxus.send`.
///
/// Plotly replaces the element's event emitter (`_ev`) after a purge, so the
/// poll keeps running and binds again whenever it sees a new emitter.
pub fn click_listener_script(container_id: &str) -> String {
    format!(
        r#"
        var bound = null;
        setInterval(function() {{
            var el = document.getElementById('{container_id}');
            if (el && typeof el.on === 'function' && el._ev && el._ev !== bound) {{
                bound = el._ev;
                el.on('plotly_click', function(ev) {{
                    var p = (ev && ev.points && ev.points[0]) || {{}};
                    dioxus.send({{
                        text: (p.text === undefined || p.text === null) ? null : String(p.text),
                        customdata: (p.customdata === undefined || p.customdata === null) ? null : String(p.customdata)
                    }});
                }});
                console.log('[BBS] click listener bound to {container_id}');
            }}
        }}, 250);
        "#,
    )
}

/// Start listening for clicks on a map; receive them with [`next_click`].
pub fn click_events(container_id: &str) -> Eval {
    document::eval(&click_listener_script(container_id))
}

/// Wait for the next clicked point. `None` once the page goes away.
pub async fn next_click(events: &mut Eval) -> Option<ClickPoint> {
    match events.recv::<ClickPoint>().await {
        Ok(point) => Some(point),
        Err(e) => {
            log::warn!("[BBS Debug] click channel closed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_is_embedded_as_object_literal() {
        let script = figure_script("graph-all", r#"{"data":[],"layout":{"title":{"text":"O'Hare"}}}"#);
        assert!(script.contains(r#"var fig = {"data":[],"layout":{"title":{"text":"O'Hare"}}};"#));
        assert!(script.contains("Plotly.react('graph-all'"));
    }

    #[test]
    fn click_listener_targets_container() {
        let script = click_listener_script("graph-specific");
        assert!(script.contains("getElementById('graph-specific')"));
        assert!(script.contains("plotly_click"));
        assert!(script.contains("dioxus.send"));
    }
}
