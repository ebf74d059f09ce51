//! Standalone HTML report that hands the figure to Plotly.

use crate::domain::model::{CalculationResponse, Language, VisualizationType};
use crate::render::labels::labels;
use crate::render::panel::{error_html, escape_html, results_panel_html};
use crate::utils::error::{EkmanError, Result};
use serde_json::json;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; background: #f5f8fb; color: #1d2a36; }
h1 { font-size: 1.4rem; }
#visualizationContainer { background: #fff; border-radius: 8px; min-height: 400px; }
#resultsPanel { margin-top: 1.5rem; background: #fff; border-radius: 8px; padding: 1rem; }
.result-item { display: flex; justify-content: space-between; padding: .35rem 0; border-bottom: 1px solid #e3e8ee; }
.result-label { font-weight: 600; }
.alert-danger { color: #842029; background: #f8d7da; border: 1px solid #f5c2c7; padding: 1rem; border-radius: 6px; }
"#;

pub fn visualization_title(visualization: VisualizationType, language: Language) -> &'static str {
    let text = labels(language);
    match visualization {
        VisualizationType::ThreeD => text.title_3d,
        VisualizationType::TwoD => text.title_2d,
    }
}

/// Options passed as the fourth argument of `Plotly.newPlot`.
pub fn plot_config() -> serde_json::Value {
    json!({
        "responsive": true,
        "displayModeBar": true,
        "modeBarButtonsToRemove": ["pan2d", "lasso2d", "select2d"],
        "displaylogo": false
    })
}

// JSON embedded in a <script> block must not close it early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn document(title: &str, body: &str, script: Option<&str>) -> String {
    let script = script
        .map(|s| {
            format!(
                "<script src=\"{PLOTLY_CDN}\"></script>\n<script>\n{s}\n</script>\n"
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1 id="visualizationTitle">{title}</h1>
{body}
{script}</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Renders a calculation response into a self-contained page.
///
/// Fails when `graph` is not a JSON document.
pub fn render_page(
    response: &CalculationResponse,
    visualization: VisualizationType,
    language: Language,
) -> Result<String> {
    let graph: serde_json::Value =
        serde_json::from_str(&response.graph).map_err(|e| EkmanError::RenderError {
            message: format!("graph payload is not valid JSON: {}", e),
        })?;

    if graph.get("data").is_none() || graph.get("layout").is_none() {
        return Err(EkmanError::RenderError {
            message: "graph payload lacks `data` or `layout`".to_string(),
        });
    }

    let script = format!(
        "const graph = {};\nPlotly.newPlot(document.getElementById('visualizationContainer'), graph.data, graph.layout, {});",
        script_safe(&graph.to_string()),
        plot_config()
    );

    let body = format!(
        "<div id=\"visualizationContainer\" class=\"fade-in\"></div>\n<div id=\"resultsPanel\" class=\"fade-in\">\n{}\n</div>",
        results_panel_html(&response.results, language)
    );

    Ok(document(
        visualization_title(visualization, language),
        &body,
        Some(&script),
    ))
}

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");

/// Interactive page served at `/`, with its text in `language`.
pub fn index_page(language: Language) -> String {
    let text = labels(language);
    let client_text = json!({
        "title_3d": text.title_3d,
        "title_2d": text.title_2d,
        "wind_stress": text.wind_stress,
        "ekman_transport_x": text.ekman_transport_x,
        "ekman_transport_y": text.ekman_transport_y,
        "ekman_depth": text.ekman_depth,
        "coriolis_parameter": text.coriolis_parameter,
        "total_transport": text.total_transport,
        "calculation_failed": text.calculation_failed,
    });

    let fields = [
        ("lang", text.code),
        ("app_title", text.app_title),
        ("wind_speed_control", text.wind_speed_control),
        ("wind_direction_control", text.wind_direction_control),
        ("latitude_control", text.latitude_control),
        ("depth_control", text.depth_control),
        ("view_control", text.view_control),
        ("calculate_button", text.calculate_button),
        ("title_3d", text.title_3d),
        ("calculating", text.calculating),
    ];

    let mut page = INDEX_TEMPLATE.replace(
        "{{labels_json}}",
        &script_safe(&client_text.to_string()),
    );
    for (key, value) in fields {
        page = page.replace(&format!("{{{{{}}}}}", key), &escape_html(value));
    }
    page
}

/// Page shown when the calculation round-trip failed.
pub fn render_error_page(visualization: VisualizationType, language: Language) -> String {
    let body = format!(
        "<div id=\"visualizationContainer\">\n{}\n</div>",
        error_html(labels(language).calculation_failed)
    );
    document(visualization_title(visualization, language), &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::EkmanCalculator;
    use crate::domain::model::EkmanParameters;
    use crate::render::plot::build_figure;

    fn response(visualization: VisualizationType) -> CalculationResponse {
        let results = EkmanCalculator::new().calculate(&EkmanParameters::default());
        let graph = build_figure(&results, visualization, Language::En)
            .to_json()
            .unwrap();
        CalculationResponse { graph, results }
    }

    #[test]
    fn page_embeds_plotly_call_and_panel() {
        let page = render_page(
            &response(VisualizationType::ThreeD),
            VisualizationType::ThreeD,
            Language::En,
        )
        .unwrap();

        assert!(page.contains("<title>3D Ekman Transport Visualization</title>"));
        assert!(page.contains(PLOTLY_CDN));
        assert!(page.contains("Plotly.newPlot("));
        assert!(page.contains(r#""displaylogo":false"#));
        assert!(page.contains(r#""modeBarButtonsToRemove":["pan2d","lasso2d","select2d"]"#));
        assert_eq!(page.matches("result-item").count(), 6);
    }

    #[test]
    fn title_follows_visualization_type() {
        assert_eq!(
            visualization_title(VisualizationType::TwoD, Language::En),
            "2D Ekman Transport Analysis"
        );
        assert_eq!(
            visualization_title(VisualizationType::ThreeD, Language::Ko),
            "3D 에크만 수송 시각화"
        );
    }

    #[test]
    fn malformed_graph_is_rejected() {
        let mut broken = response(VisualizationType::TwoD);
        broken.graph = "{not json".to_string();
        assert!(render_page(&broken, VisualizationType::TwoD, Language::En).is_err());

        broken.graph = "{}".to_string();
        assert!(render_page(&broken, VisualizationType::TwoD, Language::En).is_err());
    }

    #[test]
    fn error_page_shows_generic_message_without_plot() {
        let page = render_error_page(VisualizationType::TwoD, Language::En);
        assert!(page.contains(crate::utils::error::GENERIC_FAILURE_MESSAGE));
        assert!(!page.contains("Plotly.newPlot"));
    }

    #[test]
    fn index_page_follows_language() {
        let english = index_page(Language::En);
        assert!(english.contains(r#"<html lang="en">"#));
        assert!(english.contains("Ekman Transport Explorer"));
        assert!(!english.contains("{{"));

        let korean = index_page(Language::Ko);
        assert!(korean.contains(r#"<html lang="ko">"#));
        assert!(korean.contains("<h1>에크만 수송 탐색기</h1>"));
        assert!(korean.contains("계산 중 오류가 발생했습니다"));
        assert!(!korean.contains("Ekman Transport Explorer"));
        assert!(!korean.contains("{{"));
    }

    #[test]
    fn script_safe_breaks_closing_tags() {
        assert_eq!(script_safe(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }
}
