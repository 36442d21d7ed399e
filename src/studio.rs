//! Session facade tying the option model to its live preview and the batch generator.

use crate::batch::{ArchiveSink, BatchOrchestrator, BatchReport, ZipArchiveSink};
use crate::collab::Labels;
use crate::foundation::error::AdsmithResult;
use crate::model::{Applied, ModelUpdate, OptionModel};
use crate::preview::{DragTarget, PreviewFrame, PreviewLoop};
use crate::render::RasterSurface;

/// A finished zip archive, ready to be offered for download.
#[derive(Clone, Debug)]
pub struct GeneratedArchive {
    pub report: BatchReport,
    pub bytes: Vec<u8>,
}

/// One editing session.
///
/// Every model edit is routed through [`Studio::apply`] so the preview sees it. While a batch
/// runs the preview is suspended and the batch borrows its surface.
pub struct Studio<S: RasterSurface> {
    model: OptionModel,
    preview: PreviewLoop<S>,
    batch: BatchOrchestrator,
}

impl<S: RasterSurface> Studio<S> {
    pub fn new(model: OptionModel, surface: S) -> Self {
        Self {
            model,
            preview: PreviewLoop::new(surface),
            batch: BatchOrchestrator::new(),
        }
    }

    pub fn with_orchestrator(mut self, batch: BatchOrchestrator) -> Self {
        self.batch = batch;
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.batch = std::mem::take(&mut self.batch).with_labels(labels);
        self
    }

    pub fn model(&self) -> &OptionModel {
        &self.model
    }

    pub fn preview(&self) -> &PreviewLoop<S> {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewLoop<S> {
        &mut self.preview
    }

    pub fn orchestrator(&self) -> &BatchOrchestrator {
        &self.batch
    }

    /// Apply one edit. The result reflects the edit only; preview failures are logged.
    pub fn apply(&mut self, update: ModelUpdate) -> AdsmithResult<Applied> {
        let applied = self.model.apply(update)?;
        if applied != Applied::Unchanged {
            if let Err(err) = self.preview.notify_change(&self.model) {
                tracing::warn!(error = %err, "preview refresh after edit failed");
            }
        }
        Ok(applied)
    }

    pub fn refresh_preview(&mut self) -> AdsmithResult<Option<&PreviewFrame>> {
        self.preview.refresh(&self.model)
    }

    pub fn pointer_down(
        &mut self,
        client_x: f64,
        client_y: f64,
    ) -> AdsmithResult<Option<DragTarget>> {
        self.preview.pointer_down(&self.model, client_x, client_y)
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> AdsmithResult<bool> {
        self.preview.pointer_move(&mut self.model, client_x, client_y)
    }

    pub fn pointer_up(&mut self) -> AdsmithResult<bool> {
        self.preview.pointer_up(&mut self.model)
    }

    pub fn pointer_leave(&mut self) -> AdsmithResult<bool> {
        self.preview.pointer_leave(&mut self.model)
    }

    /// Run a batch into `sink` with the preview suspended.
    pub fn generate_into<A>(&mut self, sink: &mut A) -> AdsmithResult<BatchReport>
    where
        A: ArchiveSink + ?Sized,
    {
        self.preview.suspend();
        let result = self
            .batch
            .generate(&self.model, self.preview.surface_mut(), sink);
        let resumed = self.preview.resume(&self.model);
        let report = result?;
        if let Err(err) = resumed {
            tracing::warn!(error = %err, "preview refresh after batch failed");
        }
        Ok(report)
    }

    /// Run a batch into an in-memory zip.
    pub fn generate_zip(&mut self) -> AdsmithResult<GeneratedArchive> {
        let mut sink = ZipArchiveSink::in_memory();
        let report = self.generate_into(&mut sink)?;
        Ok(GeneratedArchive {
            report,
            bytes: sink.into_bytes()?,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/studio.rs"]
mod tests;
