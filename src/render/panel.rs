//! Results panel and slider read-outs.

use crate::domain::model::{EkmanParameters, EkmanResults, Language};
use crate::render::labels::labels;

/// One formatted row of the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

/// Slider read-outs in display order: speed, direction, latitude, depth.
pub fn slider_labels(parameters: &EkmanParameters) -> [String; 4] {
    [
        format!("{}", parameters.wind_speed),
        format!("{}°", parameters.wind_direction),
        format!("{}°", parameters.latitude),
        format!("{}m", parameters.depth),
    ]
}

pub fn result_rows(results: &EkmanResults, language: Language) -> Vec<ResultRow> {
    let text = labels(language);
    vec![
        ResultRow {
            label: text.wind_stress,
            value: format!("{:.2} mN/m²", results.wind_stress * 1000.0),
        },
        ResultRow {
            label: text.ekman_transport_x,
            value: format!("{:.2} m³/s × 10⁶", results.mx * 1e6),
        },
        ResultRow {
            label: text.ekman_transport_y,
            value: format!("{:.2} m³/s × 10⁶", results.my * 1e6),
        },
        ResultRow {
            label: text.ekman_depth,
            value: format!("{:.1} m", results.ekman_depth),
        },
        ResultRow {
            label: text.coriolis_parameter,
            value: format!("{:.3} × 10⁻⁵ s⁻¹", results.f * 1e5),
        },
        ResultRow {
            label: text.total_transport,
            value: format!("{:.2} m³/s × 10⁶", results.total_transport() * 1e6),
        },
    ]
}

pub fn results_panel_html(results: &EkmanResults, language: Language) -> String {
    result_rows(results, language)
        .iter()
        .map(|row| {
            format!(
                r#"<div class="result-item">
    <span class="result-label">{}:</span>
    <span class="result-value">{}</span>
</div>"#,
                escape_html(row.label),
                escape_html(&row.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Terminal rendition with the two derived quantities appended.
pub fn results_panel_text(results: &EkmanResults, language: Language) -> String {
    let text = labels(language);
    let mut rows = result_rows(results, language);
    rows.push(ResultRow {
        label: text.energy_transfer,
        value: format!("{:.3} mW/m²", results.energy_transfer_rate * 1000.0),
    });
    rows.push(ResultRow {
        label: text.transport_direction,
        value: format!("{:.1}°", results.transport_direction_deg()),
    });

    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", text.results_heading);
    for row in rows {
        let pad = width - row.label.chars().count();
        out.push_str(&format!("  {}:{} {}\n", row.label, " ".repeat(pad), row.value));
    }
    out
}

pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger" role="alert">
    <i class="fas fa-exclamation-triangle me-2"></i>
    {}
</div>"#,
        escape_html(message)
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::EkmanCalculator;

    #[test]
    fn slider_labels_carry_units() {
        let labels = slider_labels(&EkmanParameters::default());
        assert_eq!(labels, ["10", "0°", "30°", "100m"].map(String::from));

        let labels = slider_labels(&EkmanParameters {
            wind_speed: 12.5,
            wind_direction: 270.0,
            latitude: -60.0,
            depth: 250.0,
        });
        assert_eq!(labels[0], "12.5");
        assert_eq!(labels[2], "-60°");
    }

    #[test]
    fn panel_scales_values_like_the_web_view() {
        let results = EkmanCalculator::new().calculate(&EkmanParameters::default());
        let rows = result_rows(&results, Language::En);

        assert_eq!(rows.len(), 6);
        // 1.225 * 0.0013 * 100 = 0.15925 N/m²
        assert_eq!(rows[0].value, "159.25 mN/m²");
        assert_eq!(rows[4].value, "7.292 × 10⁻⁵ s⁻¹");
        assert!(rows[3].value.ends_with(" m"));
    }

    #[test]
    fn html_panel_has_one_item_per_row() {
        let results = EkmanCalculator::new().calculate(&EkmanParameters::default());
        let html = results_panel_html(&results, Language::Ko);

        assert_eq!(html.matches(r#"class="result-item""#).count(), 6);
        assert!(html.contains("바람 응력:"));
        assert!(html.contains("코리올리 매개변수:"));
    }

    #[test]
    fn text_panel_includes_derived_rows() {
        let results = EkmanCalculator::new().calculate(&EkmanParameters::default());
        let text = results_panel_text(&results, Language::En);

        assert!(text.starts_with("Calculation Results\n"));
        assert!(text.contains("Energy Transfer Rate:"));
        assert!(text.contains("Transport Direction:"));
        // eastward wind, northern hemisphere -> northward transport
        assert!(text.contains("90.0°"));
        assert!(!text.contains("-90.0°"));
    }

    #[test]
    fn error_block_is_escaped() {
        let html = error_html("<script>bad</script>");
        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
