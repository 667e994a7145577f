//! Report source — load the report, producing it lazily when absent.

use std::path::{Path, PathBuf};

use qgate_core::config::QgateConfig;
use qgate_core::errors::{PipelineError, ProducerError, ReportError};

use super::loader::load_report;
use super::producer::{CommandProducer, ReportProducer};
use super::types::AnalysisReport;

/// A report obtained for one run.
#[derive(Debug, Clone)]
pub struct Obtained {
    pub report: AnalysisReport,
    /// True when the producer ran during this call.
    pub generated: bool,
}

/// Where the report lives and how to produce it.
pub struct ReportSource {
    path: PathBuf,
    producer: Option<Box<dyn ReportProducer>>,
    regenerate: bool,
}

impl ReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            producer: None,
            regenerate: false,
        }
    }

    /// Build from resolved config. The producer is attached only when
    /// `report.auto_generate` is on and a producer command is configured.
    ///
    /// A relative `root` is made absolute so the report path handed to the
    /// producer names the same file from inside its working directory.
    pub fn from_config(config: &QgateConfig, root: &Path) -> Self {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        let mut source = Self::new(config.report.resolve_path(&root));
        if config.report.effective_auto_generate() {
            if let Some(producer) = CommandProducer::from_argv(&config.report.producer) {
                source = source.with_producer(Box::new(producer.in_dir(root)));
            }
        }
        source
    }

    pub fn with_producer(mut self, producer: Box<dyn ReportProducer>) -> Self {
        self.producer = Some(producer);
        self
    }

    /// Produce a fresh report even if one exists.
    pub fn regenerate(mut self, regenerate: bool) -> Self {
        self.regenerate = regenerate;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_producer(&self) -> bool {
        self.producer.is_some()
    }

    /// Load the report, running the producer at most once.
    ///
    /// A present but malformed report is fatal and never regenerated.
    pub fn obtain(&self) -> Result<Obtained, PipelineError> {
        if !self.regenerate {
            match load_report(&self.path) {
                Ok(report) => {
                    return Ok(Obtained {
                        report,
                        generated: false,
                    })
                }
                Err(ReportError::NotFound { .. }) => {
                    tracing::info!(path = %self.path.display(), "analysis report not found");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let path = self.path.display().to_string();
        let producer = match (&self.producer, self.regenerate) {
            (Some(producer), _) => producer,
            (None, true) => return Err(ProducerError::RegenerateUnavailable { path }.into()),
            (None, false) => return Err(ProducerError::NotConfigured { path }.into()),
        };

        // A stale report must not satisfy the check below.
        if self.regenerate {
            self.discard_existing()?;
        }

        tracing::info!(producer = producer.name(), path = %self.path.display(), "generating analysis report");
        producer.produce(&self.path)?;

        if !self.path.exists() {
            return Err(ProducerError::NoReportWritten {
                producer: producer.name().to_string(),
                path: self.path.display().to_string(),
            }
            .into());
        }

        let report = load_report(&self.path)?;
        Ok(Obtained {
            report,
            generated: true,
        })
    }

    fn discard_existing(&self) -> Result<(), ReportError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed previous report before regenerating");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ReportError::Io {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}

impl std::fmt::Debug for ReportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportSource")
            .field("path", &self.path)
            .field("producer", &self.producer.as_ref().map(|p| p.name()))
            .field("regenerate", &self.regenerate)
            .finish()
    }
}
