//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module serializes data and calls those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is present, so their `function` declarations become globals. Calling
/// this more than once is harmless.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, MULTI_LINE_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__gmChartsReady) {{ window.__gmChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gmChartsReady || window.__gmChartsInit) return;
            window.__gmChartsInit = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gmChartScripts);
                    delete window.__gmChartScripts;
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gmChartsReady = true;
                    console.log('GM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a multi-line chart, one line per series key.
///
/// Polls until D3.js has loaded, the chart scripts are initialized and the
/// container element exists. A newer render for the same container cancels
/// a pending older one, so a quick change of selection never draws stale
/// data over fresh data.
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            window.__gmChartPolls = window.__gmChartPolls || {{}};
            if (window.__gmChartPolls['{container_id}']) {{
                clearInterval(window.__gmChartPolls['{container_id}']);
            }}
            var poll = setInterval(function() {{
                if (window.__gmChartsReady &&
                    typeof window.renderMultiLineChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete window.__gmChartPolls['{container_id}'];
                    try {{
                        window.renderMultiLineChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GM] renderMultiLineChart error:', e); }}
                }}
            }}, 100);
            window.__gmChartPolls['{container_id}'] = poll;
        }})();
        "#,
    ));
}

/// Clear a chart container and cancel any render still waiting for it.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        if (window.__gmChartPolls && window.__gmChartPolls['{0}']) {{
            clearInterval(window.__gmChartPolls['{0}']);
            delete window.__gmChartPolls['{0}'];
        }}
        var el = document.getElementById('{0}'); if (el) el.innerHTML = '';
        "#,
        container_id
    ));
}
