use crate::assets::ImageCache;
use crate::batch::archive::ArchiveSink;
use crate::batch::naming::{NameRegistry, archive_name, file_name};
use crate::collab::{AnalyticsSink, Labels, NoopAnalytics};
use crate::expand::{Variant, expand_model};
use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::model::{OptionModel, PlatformDimension};
use crate::render::{RasterSurface, RenderRequest, render_png};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "a batch is running" flag.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark busy until the returned guard drops, or fail with [`AdsmithError::Busy`].
    pub fn try_acquire(&self) -> AdsmithResult<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AdsmithError::Busy)?;
        Ok(BusyGuard(self.0.clone()))
    }
}

#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// What a batch will attempt, computed before any rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchPlan {
    pub images: usize,
    pub platforms: usize,
    pub variants: usize,
    pub total: usize,
}

/// Validate a model for generation and size the batch.
pub fn plan(model: &OptionModel) -> AdsmithResult<BatchPlan> {
    if model.images.is_empty() {
        return Err(AdsmithError::validation(
            "upload at least one image before generating",
        ));
    }
    let platforms = model.platforms.selected_count();
    if platforms == 0 {
        return Err(AdsmithError::validation(
            "select at least one platform before generating",
        ));
    }
    let images = model.images.len();
    let variants = crate::expand::variant_count(&model.text_groups, &model.button);
    Ok(BatchPlan {
        images,
        platforms,
        variants,
        total: images * platforms * variants,
    })
}

/// One tuple that produced no file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub image_index: usize,
    pub platform: String,
    pub seq: usize,
    pub reason: String,
}

/// Outcome of a completed batch. `produced + skipped == total` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub produced: usize,
    pub skipped: usize,
    pub archive_name: String,
    pub skipped_entries: Vec<SkippedEntry>,
}

/// Runs image × platform × variant through the compositor into an [`ArchiveSink`].
pub struct BatchOrchestrator {
    labels: Labels,
    analytics: Box<dyn AnalyticsSink>,
    busy: BusyFlag,
    cache: ImageCache,
}

impl std::fmt::Debug for BatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("labels", &self.labels)
            .field("busy", &self.busy.is_busy())
            .finish()
    }
}

impl Default for BatchOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchOrchestrator {
    pub fn new() -> Self {
        Self {
            labels: Labels::default(),
            analytics: Box::new(NoopAnalytics),
            busy: BusyFlag::new(),
            cache: ImageCache::new(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_analytics(mut self, analytics: Box<dyn AnalyticsSink>) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Handle for observing (or externally holding) the re-entrancy guard.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Render every tuple and hand the PNGs to `sink`.
    ///
    /// Per-tuple failures are logged and counted; sink failures abort the batch with
    /// [`AdsmithError::Archive`].
    #[tracing::instrument(skip_all)]
    pub fn generate<S, A>(
        &mut self,
        model: &OptionModel,
        surface: &mut S,
        sink: &mut A,
    ) -> AdsmithResult<BatchReport>
    where
        S: RasterSurface + ?Sized,
        A: ArchiveSink + ?Sized,
    {
        let _guard = self.busy.try_acquire()?;
        let plan = plan(model)?;
        let variants = expand_model(model);
        let platforms: Vec<&PlatformDimension> = model.platforms.selected().collect();

        tracing::info!(
            images = plan.images,
            platforms = plan.platforms,
            variants = plan.variants,
            total = plan.total,
            "batch started"
        );
        self.analytics
            .emit("generate_started", &serde_json::to_value(&plan).unwrap_or_default());

        match self.run(model, &platforms, &variants, &plan, surface, sink) {
            Ok(report) => {
                if report.skipped > 0 {
                    tracing::warn!(
                        skipped = report.skipped,
                        total = report.total,
                        "some variants could not be rendered"
                    );
                }
                tracing::info!(
                    produced = report.produced,
                    archive = %report.archive_name,
                    "batch completed"
                );
                self.analytics.emit(
                    "generate_completed",
                    &serde_json::json!({
                        "total": report.total,
                        "produced": report.produced,
                        "skipped": report.skipped,
                    }),
                );
                Ok(report)
            }
            Err(e) => {
                tracing::error!("batch failed: {e}");
                self.analytics
                    .emit("generate_failed", &serde_json::json!({ "error": e.to_string() }));
                Err(e)
            }
        }
    }

    fn run<S, A>(
        &mut self,
        model: &OptionModel,
        platforms: &[&PlatformDimension],
        variants: &[Variant],
        plan: &BatchPlan,
        surface: &mut S,
        sink: &mut A,
    ) -> AdsmithResult<BatchReport>
    where
        S: RasterSurface + ?Sized,
        A: ArchiveSink + ?Sized,
    {
        sink.begin(plan.total).map_err(fatal)?;

        let mut names = NameRegistry::default();
        let mut produced = 0usize;
        let mut skipped_entries = Vec::new();

        for image_index in 0..model.images.len() {
            let decoded = self.cache.get(&model.images, image_index);
            for platform in platforms {
                for (i, variant) in variants.iter().enumerate() {
                    let seq = i + 1;
                    let rendered = match &decoded {
                        Ok(Some(img)) => render_png(
                            surface,
                            &RenderRequest {
                                canvas: platform.canvas(),
                                image: Some(img.as_ref()),
                                variant,
                                button: &model.button,
                                scale: &model.image_scale,
                            },
                        )
                        .and_then(|png| {
                            png.ok_or_else(|| AdsmithError::render("renderer produced no output"))
                        }),
                        Ok(None) => Err(AdsmithError::render("image is no longer available")),
                        Err(AdsmithError::Render(msg)) => Err(AdsmithError::render(msg.clone())),
                        Err(e) => Err(AdsmithError::render(e.to_string())),
                    };

                    match rendered {
                        Ok(png) => {
                            let name = names.claim(file_name(
                                &self.labels.image_prefix,
                                image_index,
                                &platform.name,
                                variant,
                                seq,
                            ));
                            sink.add_file(&name, &png).map_err(fatal)?;
                            tracing::debug!(%name, bytes = png.len(), "entry added");
                            produced += 1;
                        }
                        Err(e) => {
                            tracing::warn!(
                                image_index,
                                platform = %platform.name,
                                seq,
                                "skipping variant: {e}"
                            );
                            skipped_entries.push(SkippedEntry {
                                image_index,
                                platform: platform.name.clone(),
                                seq,
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        sink.finish().map_err(fatal)?;

        Ok(BatchReport {
            total: plan.total,
            produced,
            skipped: skipped_entries.len(),
            archive_name: archive_name(&self.labels.archive_prefix, plan.total),
            skipped_entries,
        })
    }
}

fn fatal(e: AdsmithError) -> AdsmithError {
    match e {
        AdsmithError::Archive(_) => e,
        other => AdsmithError::archive(other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/orchestrator.rs"]
mod tests;
