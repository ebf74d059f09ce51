pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{EkmanParameters, Language};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::form::ParameterForm;
#[cfg(feature = "cli")]
use crate::domain::model::VisualizationType;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ekman-transport")]
#[command(about = "Compute and visualize wind-driven Ekman transport")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Language for plot labels and result panels
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Language>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server with the interactive page
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },

    /// Compute locally and print the results panel
    Calculate {
        #[command(flatten)]
        form: FormArgs,

        /// Print the raw results as JSON instead of the panel
        #[arg(long)]
        json: bool,
    },

    /// Send the parameters to a server and write an HTML report
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Base URL of the calculation server
        #[arg(long)]
        endpoint: Option<String>,

        /// Directory for reports
        #[arg(short, long)]
        output: Option<String>,

        /// Also write a zip bundle with results.json and profile.csv
        #[arg(long)]
        bundle: bool,

        /// Compute in-process instead of calling the server
        #[arg(long)]
        local: bool,
    },

    /// List location and wind presets
    Presets,

    /// Show the parameter ranges a server accepts
    Ranges {
        #[arg(long)]
        endpoint: Option<String>,
    },
}

/// Slider values as typed on the command line.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Wind speed in m/s
    #[arg(long)]
    pub wind_speed: Option<String>,

    /// Wind direction in degrees, counter-clockwise from east
    #[arg(long)]
    pub wind_direction: Option<String>,

    /// Latitude in degrees
    #[arg(long)]
    pub latitude: Option<String>,

    /// Depth of the profile in metres
    #[arg(long)]
    pub depth: Option<String>,

    /// Visualization type: 3d or 2d
    #[arg(long = "viz", default_value = "3d")]
    pub visualization_type: String,

    /// Location preset (see `presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Wind preset: normal, strong_wind or typhoon
    #[arg(long)]
    pub wind_preset: Option<String>,
}

#[cfg(feature = "cli")]
impl FormArgs {
    /// Starts from `defaults`, applies presets, then explicit values.
    pub fn to_form(&self, defaults: &EkmanParameters) -> Result<ParameterForm> {
        let mut form = ParameterForm::from_parameters(defaults, VisualizationType::default());
        form.visualization_type = self.visualization_type.clone();

        if let Some(preset) = &self.preset {
            form.apply_location(preset)?;
        }
        if let Some(wind) = &self.wind_preset {
            form.apply_wind_preset(wind)?;
        }

        let overrides = [
            (&self.wind_speed, &mut form.wind_speed),
            (&self.wind_direction, &mut form.wind_direction),
            (&self.latitude, &mut form.latitude),
            (&self.depth, &mut form.depth),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        Ok(form)
    }
}

/// Effective settings: the TOML file (or defaults) with command line overrides applied.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub file: TomlConfig,
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self { file })
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if let Some(language) = language {
            self.file.language = language;
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.file.client.endpoint = endpoint.to_string();
        }
        self
    }

    pub fn with_output(mut self, output: Option<&str>, bundle: bool) -> Self {
        if let Some(output) = output {
            self.file.output.path = output.to_string();
        }
        self.file.output.bundle |= bundle;
        self
    }

    pub fn with_bind(mut self, bind: Option<&str>) -> Self {
        if let Some(bind) = bind {
            self.file.server.bind = bind.to_string();
        }
        self
    }

    pub fn bind(&self) -> &str {
        &self.file.server.bind
    }

    pub fn defaults(&self) -> &EkmanParameters {
        &self.file.defaults
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        self.file.endpoint()
    }

    fn output_path(&self) -> &str {
        self.file.output_path()
    }

    fn language(&self) -> Language {
        self.file.language()
    }

    fn timeout_seconds(&self) -> u64 {
        self.file.timeout_seconds()
    }

    fn bundle_enabled(&self) -> bool {
        self.file.bundle_enabled()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.file.validate()
    }
}
