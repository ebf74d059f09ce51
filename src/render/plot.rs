//! Plotly figure description for Ekman results.
//!
//! Only the subset of the Plotly schema the two views need is modelled. The
//! serialized figure is handed to `Plotly.newPlot` unchanged.

use crate::domain::model::{EkmanResults, Language, VisualizationType};
use crate::render::labels::{labels, Labels};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every n-th depth level gets an arrow in the 3D view.
const ARROW_STRIDE: usize = 3;

/// Arrow length multiplier for current vectors in the 3D view.
const ARROW_SCALE: f64 = 10.0;

/// Height (m above the surface) at which the wind arrow is drawn.
const WIND_ARROW_HEIGHT: f64 = 5.0;

/// Multiplier bringing transport (m²/s) to a scale comparable with wind (m/s).
const TRANSPORT_SCALE: f64 = 1e6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(Scatter),
    Scatter3d(Scatter3d),
    Bar(Bar),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter3d {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: String,
    pub name: String,
    pub line: Line,
    pub marker: Marker,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: Marker,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// 2D cartesian axes keyed by Plotly name (`xaxis`, `yaxis2`, ...).
    #[serde(flatten)]
    pub axes: BTreeMap<String, Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub xaxis: SceneAxis,
    pub yaxis: SceneAxis,
    pub zaxis: SceneAxis,
    pub camera: Camera,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAxis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Eye,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eye {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub domain: [f64; 2],
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub xanchor: String,
    pub yanchor: String,
    pub showarrow: bool,
}

impl Figure {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds the figure for the requested view.
pub fn build_figure(
    results: &EkmanResults,
    visualization: VisualizationType,
    language: Language,
) -> Figure {
    match visualization {
        VisualizationType::ThreeD => figure_3d(results, language),
        VisualizationType::TwoD => figure_2d(results, language),
    }
}

fn wind_vector(results: &EkmanResults) -> (f64, f64) {
    let direction = results.wind_direction.to_radians();
    (
        results.wind_speed * direction.cos(),
        results.wind_speed * direction.sin(),
    )
}

/// Blue-to-magenta ramp on relative speed.
fn speed_color(relative: f64) -> String {
    let s = relative.clamp(0.0, 1.0);
    format!(
        "rgb({}, {}, 255)",
        (255.0 * s) as u8,
        (128.0 * (1.0 - s)) as u8
    )
}

pub fn figure_3d(results: &EkmanResults, language: Language) -> Figure {
    let text = labels(language);
    let spiral = &results.ekman_spiral;
    let speeds = spiral.speeds();
    let max_speed = spiral.max_speed();

    let mut data: Vec<Trace> = results
        .z_levels
        .iter()
        .enumerate()
        .step_by(ARROW_STRIDE)
        .map(|(i, &z)| {
            Trace::Scatter3d(Scatter3d {
                x: vec![0.0, spiral.u[i] * ARROW_SCALE],
                y: vec![0.0, spiral.v[i] * ARROW_SCALE],
                z: vec![-z, -z],
                mode: "lines+markers".to_string(),
                name: format!("{} {:.1}m", text.depth, z),
                line: Line {
                    color: speed_color(speeds[i] / max_speed),
                    width: 3.0,
                },
                marker: Marker {
                    size: Some(3.0),
                    color: None,
                },
                showlegend: false,
            })
        })
        .collect();

    let (wind_x, wind_y) = wind_vector(results);
    data.push(Trace::Scatter3d(Scatter3d {
        x: vec![0.0, wind_x],
        y: vec![0.0, wind_y],
        z: vec![WIND_ARROW_HEIGHT, WIND_ARROW_HEIGHT],
        mode: "lines+markers".to_string(),
        name: format!("{} {:.1} m/s", text.wind, results.wind_speed),
        line: Line {
            color: "orange".to_string(),
            width: 8.0,
        },
        marker: Marker {
            size: Some(8.0),
            color: Some(Color::Single("orange".to_string())),
        },
        showlegend: true,
    }));

    Figure {
        data,
        layout: Layout {
            title: Title::new(text.plot_title_3d),
            scene: Some(Scene {
                xaxis: SceneAxis {
                    title: Title::new(text.axis_east_west),
                },
                yaxis: SceneAxis {
                    title: Title::new(text.axis_north_south),
                },
                zaxis: SceneAxis {
                    title: Title::new(text.axis_depth),
                },
                camera: Camera {
                    eye: Eye {
                        x: 1.5,
                        y: 1.5,
                        z: 1.5,
                    },
                },
            }),
            width: Some(800),
            height: Some(600),
            margin: Some(Margin {
                l: 0,
                r: 0,
                t: 50,
                b: 0,
            }),
            showlegend: None,
            annotations: Vec::new(),
            axes: BTreeMap::new(),
        },
    }
}

/// Axis layout of a 2×2 subplot grid, cells numbered row-major from 1.
struct Grid;

impl Grid {
    const COLUMNS: [[f64; 2]; 2] = [[0.0, 0.45], [0.55, 1.0]];
    const ROWS: [[f64; 2]; 2] = [[0.575, 1.0], [0.0, 0.425]];

    fn cell(row: usize, col: usize) -> usize {
        (row - 1) * 2 + col
    }

    fn suffix(cell: usize) -> String {
        if cell == 1 {
            String::new()
        } else {
            cell.to_string()
        }
    }

    fn refs(row: usize, col: usize) -> (Option<String>, Option<String>) {
        let suffix = Self::suffix(Self::cell(row, col));
        (Some(format!("x{suffix}")), Some(format!("y{suffix}")))
    }

    fn axes() -> BTreeMap<String, Axis> {
        let mut axes = BTreeMap::new();
        for row in 1..=2 {
            for col in 1..=2 {
                let suffix = Self::suffix(Self::cell(row, col));
                axes.insert(
                    format!("xaxis{suffix}"),
                    Axis {
                        domain: Self::COLUMNS[col - 1],
                        anchor: format!("y{suffix}"),
                    },
                );
                axes.insert(
                    format!("yaxis{suffix}"),
                    Axis {
                        domain: Self::ROWS[row - 1],
                        anchor: format!("x{suffix}"),
                    },
                );
            }
        }
        axes
    }

    fn title(text: &str, row: usize, col: usize) -> Annotation {
        let [x0, x1] = Self::COLUMNS[col - 1];
        Annotation {
            text: text.to_string(),
            x: (x0 + x1) / 2.0,
            y: Self::ROWS[row - 1][1],
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            xanchor: "center".to_string(),
            yanchor: "bottom".to_string(),
            showarrow: false,
        }
    }
}

fn line_scatter(
    x: Vec<f64>,
    y: Vec<f64>,
    name: &str,
    color: &str,
    width: f64,
    marker_size: Option<f64>,
    cell: (usize, usize),
) -> Trace {
    let (xaxis, yaxis) = Grid::refs(cell.0, cell.1);
    Trace::Scatter(Scatter {
        x,
        y,
        mode: if marker_size.is_some() {
            "lines+markers".to_string()
        } else {
            "lines".to_string()
        },
        name: name.to_string(),
        line: Some(Line {
            color: color.to_string(),
            width,
        }),
        marker: marker_size.map(|size| Marker {
            size: Some(size),
            color: None,
        }),
        xaxis,
        yaxis,
    })
}

pub fn figure_2d(results: &EkmanResults, language: Language) -> Figure {
    let text: &Labels = labels(language);
    let spiral = &results.ekman_spiral;
    let negative_depth: Vec<f64> = results.z_levels.iter().map(|z| -z).collect();
    let (wind_x, wind_y) = wind_vector(results);

    let (bar_xaxis, bar_yaxis) = Grid::refs(2, 2);

    let data = vec![
        line_scatter(
            vec![0.0, wind_x],
            vec![0.0, wind_y],
            text.wind,
            "orange",
            4.0,
            Some(8.0),
            (1, 1),
        ),
        line_scatter(
            vec![0.0, results.mx * TRANSPORT_SCALE],
            vec![0.0, results.my * TRANSPORT_SCALE],
            text.transport,
            "blue",
            4.0,
            Some(8.0),
            (1, 1),
        ),
        line_scatter(
            spiral.u.clone(),
            spiral.v.clone(),
            text.spiral,
            "red",
            2.0,
            Some(3.0),
            (1, 2),
        ),
        line_scatter(
            spiral.u.clone(),
            negative_depth.clone(),
            text.u_velocity,
            "blue",
            2.0,
            None,
            (2, 1),
        ),
        line_scatter(
            spiral.v.clone(),
            negative_depth,
            text.v_velocity,
            "red",
            2.0,
            None,
            (2, 1),
        ),
        Trace::Bar(Bar {
            x: vec!["Mx".to_string(), "My".to_string()],
            y: vec![results.mx, results.my],
            name: text.transport_components.to_string(),
            marker: Marker {
                size: None,
                color: Some(Color::PerPoint(vec!["blue".to_string(), "red".to_string()])),
            },
            xaxis: bar_xaxis,
            yaxis: bar_yaxis,
        }),
    ];

    Figure {
        data,
        layout: Layout {
            title: Title::new(text.plot_title_2d),
            scene: None,
            width: None,
            height: Some(800),
            margin: None,
            showlegend: Some(true),
            annotations: vec![
                Grid::title(text.subplot_wind_vs_transport, 1, 1),
                Grid::title(text.subplot_spiral, 1, 2),
                Grid::title(text.subplot_profile, 2, 1),
                Grid::title(text.subplot_components, 2, 2),
            ],
            axes: Grid::axes(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::EkmanCalculator;
    use crate::domain::model::EkmanParameters;

    fn results() -> EkmanResults {
        EkmanCalculator::new().calculate(&EkmanParameters::default())
    }

    #[test]
    fn three_d_figure_has_arrow_per_third_level_plus_wind() {
        let figure = build_figure(&results(), VisualizationType::ThreeD, Language::En);

        // 50 levels, every third one -> 17 arrows, plus the wind.
        assert_eq!(figure.data.len(), 18);
        let Trace::Scatter3d(wind) = figure.data.last().unwrap() else {
            panic!("wind trace should be scatter3d");
        };
        assert_eq!(wind.z, vec![5.0, 5.0]);
        assert_eq!(wind.x[1], 10.0);
        assert_eq!(wind.line.color, "orange");
        assert_eq!(figure.layout.width, Some(800));
    }

    #[test]
    fn surface_arrow_is_fastest_color() {
        let figure = figure_3d(&results(), Language::En);
        let Trace::Scatter3d(surface) = &figure.data[0] else {
            panic!("expected scatter3d");
        };
        assert_eq!(surface.line.color, "rgb(255, 0, 255)");
        assert_eq!(surface.z, vec![0.0, 0.0]);
    }

    #[test]
    fn two_d_figure_uses_four_subplots() {
        let figure = build_figure(&results(), VisualizationType::TwoD, Language::En);

        assert_eq!(figure.data.len(), 6);
        assert_eq!(figure.layout.annotations.len(), 4);
        assert_eq!(figure.layout.axes.len(), 8);
        assert!(figure.layout.axes.contains_key("xaxis"));
        assert!(figure.layout.axes.contains_key("yaxis4"));

        let Trace::Bar(bar) = &figure.data[5] else {
            panic!("last trace should be the component bar chart");
        };
        assert_eq!(bar.x, vec!["Mx".to_string(), "My".to_string()]);
        assert_eq!(bar.xaxis.as_deref(), Some("x4"));
    }

    #[test]
    fn serialized_figure_follows_plotly_schema() {
        let json = figure_2d(&results(), Language::Ko).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["data"][0]["type"], "scatter");
        assert_eq!(value["data"][5]["type"], "bar");
        assert_eq!(value["layout"]["title"]["text"], "에크만 수송 2D 분석");
        assert_eq!(value["layout"]["yaxis3"]["anchor"], "x3");
        assert!(value["data"][0].get("xaxis").is_some());

        let json = figure_3d(&results(), Language::En).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["data"][0]["type"], "scatter3d");
        assert_eq!(value["layout"]["scene"]["camera"]["eye"]["x"], 1.5);
    }
}
