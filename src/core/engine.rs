use crate::core::form::ParameterForm;
use crate::core::{Backend, ConfigProvider, Storage};
use crate::domain::model::{CalculationResponse, EkmanResults, Language, ParameterRanges};
use crate::render::page::{render_error_page, render_page};
use crate::utils::error::{EkmanError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// What a successful submit left behind.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub report_path: String,
    pub bundle_path: Option<String>,
    pub response: CalculationResponse,
}

/// Runs one submit: read the form, call the backend once, render, save.
pub struct Explorer<B: Backend, S: Storage> {
    backend: B,
    storage: S,
    ranges: ParameterRanges,
    language: Language,
    output_path: String,
    bundle: bool,
    report_stem: Option<String>,
}

impl<B: Backend, S: Storage> Explorer<B, S> {
    pub fn new(backend: B, storage: S, config: &impl ConfigProvider) -> Self {
        Self {
            backend,
            storage,
            ranges: ParameterRanges::default(),
            language: config.language(),
            output_path: config.output_path().to_string(),
            bundle: config.bundle_enabled(),
            report_stem: None,
        }
    }

    pub fn with_ranges(mut self, ranges: ParameterRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Fixes the output file stem instead of the timestamped default.
    pub fn with_report_stem(mut self, stem: impl Into<String>) -> Self {
        self.report_stem = Some(stem.into());
        self
    }

    fn stem(&self) -> String {
        self.report_stem.clone().unwrap_or_else(|| {
            chrono::Local::now()
                .format("Ekman_Report_%Y-%m-%d_%H-%M-%S")
                .to_string()
        })
    }

    fn full_path(&self, name: &str) -> String {
        format!("{}/{}", self.output_path.trim_end_matches('/'), name)
    }

    pub async fn submit(&self, form: &ParameterForm) -> Result<SubmitOutcome> {
        tracing::info!("Reading parameters...");
        let request = form.read()?;
        self.ranges.check(&request.parameters())?;

        let stem = self.stem();
        let report_name = format!("{}.html", stem);
        let visualization = request.visualization_type;

        tracing::info!("Submitting {} calculation...", visualization);
        let rendered = match self.backend.calculate(&request).await {
            Ok(response) => render_page(&response, visualization, self.language)
                .map(|page| (response, page)),
            Err(e) => Err(e),
        };

        let (response, page) = match rendered {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!("Calculation failed: {}", e);
                let page = render_error_page(visualization, self.language);
                if let Err(write_err) = self
                    .storage
                    .write_file(&report_name, page.as_bytes())
                    .await
                {
                    tracing::warn!("Could not save error page {}: {}", report_name, write_err);
                }
                return Err(e);
            }
        };

        tracing::info!("Saving report...");
        self.storage.write_file(&report_name, page.as_bytes()).await?;

        let bundle_path = if self.bundle {
            let bundle_name = format!("{}.zip", stem);
            let data = build_bundle(&page, &response.results)?;
            tracing::debug!("Writing bundle ({} bytes) to storage", data.len());
            self.storage.write_file(&bundle_name, &data).await?;
            Some(self.full_path(&bundle_name))
        } else {
            None
        };

        Ok(SubmitOutcome {
            report_path: self.full_path(&report_name),
            bundle_path,
            response,
        })
    }
}

/// Depth profile as CSV: one row per level.
pub fn profile_csv(results: &EkmanResults) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["z_m", "u_m_s", "v_m_s", "speed_m_s"])?;

    let spiral = &results.ekman_spiral;
    for ((z, u), v) in results.z_levels.iter().zip(&spiral.u).zip(&spiral.v) {
        writer.write_record([
            z.to_string(),
            u.to_string(),
            v.to_string(),
            u.hypot(*v).to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| EkmanError::IoError(e.into_error()))
}

/// Zip archive holding the report page, raw results and the depth profile.
pub fn build_bundle(page: &str, results: &EkmanResults) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>("report.html", FileOptions::default())?;
    zip.write_all(page.as_bytes())?;

    zip.start_file::<_, ()>("results.json", FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(results)?.as_bytes())?;

    zip.start_file::<_, ()>("profile.csv", FileOptions::default())?;
    zip.write_all(&profile_csv(results)?)?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
