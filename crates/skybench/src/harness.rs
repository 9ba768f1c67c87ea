use skybench_convert::results_to_proto;
use skybench_equiv::{Comparator, Report};
use skybench_model::SearchResults;
use skybench_proto as proto;
use tracing::{info, warn};

use crate::config::HarnessConfig;
use crate::fixture::load_results;
use crate::payload::PayloadPair;
use crate::report::SizeReport;
use crate::samples::SampleSet;
use crate::telemetry::init_tracing;
use crate::SkybenchError;

/// Everything a benchmark or equivalence run needs, built once from a
/// [`HarnessConfig`].
#[derive(Debug)]
pub struct Harness {
    config: HarnessConfig,
    results: PayloadPair<SearchResults, proto::SearchResults>,
    samples: SampleSet,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self, SkybenchError> {
        config.validate()?;
        let results = load_results(&config.fixture)?;
        let message = results_to_proto(&results);
        let samples = SampleSet::generate(&config.samples);
        info!(
            chunks = results.len(),
            seeded = config.samples.seed.is_some(),
            "harness ready"
        );
        Ok(Self {
            results: PayloadPair::new(results, message),
            samples,
            config,
        })
    }

    /// Reads the configuration named by the environment, installs logging
    /// and builds the harness.
    pub fn from_env() -> Result<Self, SkybenchError> {
        let config = HarnessConfig::from_env()?;
        init_tracing(&config.logging);
        Self::new(config)
    }

    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    #[must_use]
    pub fn results(&self) -> &PayloadPair<SearchResults, proto::SearchResults> {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut PayloadPair<SearchResults, proto::SearchResults> {
        &mut self.results
    }

    #[must_use]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut SampleSet {
        &mut self.samples
    }

    /// Compares the fixture with its converted message tree.
    pub fn verify_equivalence(&self) -> Result<Report, SkybenchError> {
        let report = Comparator::new().compare(&self.results.domain, &self.results.message)?;
        if report.is_equivalent() {
            info!("converted search results are equivalent");
        } else {
            warn!(
                mismatches = report.mismatches().len(),
                "converted search results differ"
            );
        }
        Ok(report)
    }

    /// Encoded sizes of the fixture and every sample payload.
    pub fn size_reports(&mut self) -> Result<Vec<SizeReport>, SkybenchError> {
        let levels = self.config.gzip_levels.clone();
        let samples = &mut self.samples;
        Ok(vec![
            SizeReport::measure("search_results", &mut self.results, &levels)?,
            SizeReport::measure("long_string", &mut samples.long_string, &levels)?,
            SizeReport::measure("response", &mut samples.response, &levels)?,
            SizeReport::measure("object", &mut samples.object, &levels)?,
            SizeReport::measure("large_response", &mut samples.large_response, &levels)?,
            SizeReport::measure_message("simple_object", &samples.simple, &levels)?,
        ])
    }
}
