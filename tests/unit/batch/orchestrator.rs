use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use super::*;
use crate::batch::archive::InMemoryArchive;
use crate::model::{ModelUpdate, SourceImage, UploadMode};
use crate::render::RecordingSurface;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn model_with_images(payloads: Vec<Vec<u8>>) -> OptionModel {
    let mut m = OptionModel::new();
    m.apply(ModelUpdate::UploadImages {
        images: payloads
            .into_iter()
            .enumerate()
            .map(|(i, b)| SourceImage::new(format!("img{i}.png"), b))
            .collect(),
        mode: UploadMode::Append,
    })
    .unwrap();
    m
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl AnalyticsSink for Recorder {
    fn emit(&self, event: &str, _props: &serde_json::Value) {
        self.0.borrow_mut().push(event.to_string());
    }
}

struct BrokenSink;

impl ArchiveSink for BrokenSink {
    fn begin(&mut self, _expected: usize) -> AdsmithResult<()> {
        Ok(())
    }
    fn add_file(&mut self, _name: &str, _bytes: &[u8]) -> AdsmithResult<()> {
        Err(AdsmithError::Other(anyhow::anyhow!("out of memory")))
    }
    fn finish(&mut self) -> AdsmithResult<()> {
        Ok(())
    }
}

#[test]
fn validation_runs_before_rendering() {
    let mut orch = BatchOrchestrator::new();
    let mut surface = RecordingSurface::default();
    let mut sink = InMemoryArchive::new();

    let empty = OptionModel::new();
    let err = orch.generate(&empty, &mut surface, &mut sink).unwrap_err();
    assert!(matches!(err, AdsmithError::Validation(_)));

    let mut no_platform = model_with_images(vec![png(4, 4)]);
    no_platform
        .apply(ModelUpdate::SetPlatformSelected {
            key: "Facebook_Square".into(),
            selected: false,
        })
        .unwrap();
    let err = orch.generate(&no_platform, &mut surface, &mut sink).unwrap_err();
    assert!(matches!(err, AdsmithError::Validation(_)));
    assert!(sink.expected().is_none());
    assert!(!orch.busy_flag().is_busy());
}

#[test]
fn busy_flag_rejects_reentry_and_releases() {
    let mut orch = BatchOrchestrator::new();
    let model = model_with_images(vec![png(4, 4)]);
    let mut surface = RecordingSurface::default();
    let mut sink = InMemoryArchive::new();

    let guard = orch.busy_flag().try_acquire().unwrap();
    assert!(matches!(
        orch.generate(&model, &mut surface, &mut sink),
        Err(AdsmithError::Busy)
    ));
    drop(guard);

    let report = orch.generate(&model, &mut surface, &mut sink).unwrap();
    assert_eq!(report.produced, 1);
    assert!(!orch.busy_flag().is_busy());
}

#[test]
fn undecodable_image_is_skipped_per_variant() {
    let recorder = Recorder::default();
    let mut orch = BatchOrchestrator::new().with_analytics(Box::new(recorder.clone()));
    let mut model = model_with_images(vec![png(4, 4), b"corrupt".to_vec()]);
    model.apply(ModelUpdate::AddCtaOption).unwrap();
    model
        .apply(ModelUpdate::UpdateCtaOption {
            index: 1,
            value: "Shop".into(),
        })
        .unwrap();

    let mut surface = RecordingSurface::default();
    let mut sink = InMemoryArchive::new();
    let report = orch.generate(&model, &mut surface, &mut sink).unwrap();

    assert_eq!(report.total, 4);
    assert_eq!(report.produced, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.produced + report.skipped, report.total);
    assert_eq!(report.skipped_entries[0].image_index, 1);
    assert_eq!(report.skipped_entries[1].seq, 2);
    assert_eq!(report.archive_name, "advertisement_images_4_variants.zip");
    assert!(sink.is_finished());
    assert_eq!(
        sink.names(),
        vec![
            "Image1_Facebook_Square_none_Shop_Now_001.png",
            "Image1_Facebook_Square_none_Shop_002.png",
        ]
    );
    assert_eq!(
        *recorder.0.borrow(),
        vec!["generate_started".to_string(), "generate_completed".to_string()]
    );
}

#[test]
fn sink_failure_is_fatal_and_clears_busy() {
    let recorder = Recorder::default();
    let mut orch = BatchOrchestrator::new().with_analytics(Box::new(recorder.clone()));
    let model = model_with_images(vec![png(4, 4)]);
    let mut surface = RecordingSurface::default();

    let err = orch.generate(&model, &mut surface, &mut BrokenSink).unwrap_err();
    assert!(matches!(err, AdsmithError::Archive(_)));
    assert!(err.to_string().contains("please retry"));
    assert!(!orch.busy_flag().is_busy());
    assert_eq!(recorder.0.borrow().last().map(String::as_str), Some("generate_failed"));
}

#[test]
fn labels_drive_entry_and_archive_names() {
    let mut orch = BatchOrchestrator::new().with_labels(Labels {
        image_prefix: "Bild".into(),
        archive_prefix: "anzeigen".into(),
    });
    let model = model_with_images(vec![png(4, 4)]);
    let mut sink = InMemoryArchive::new();
    let report = orch
        .generate(&model, &mut RecordingSurface::default(), &mut sink)
        .unwrap();
    assert_eq!(report.archive_name, "anzeigen_1_variants.zip");
    assert!(sink.names()[0].starts_with("Bild1_Facebook_Square_"));
}

#[test]
fn plan_counts_tuples() {
    let mut model = model_with_images(vec![png(2, 2), png(2, 2)]);
    model
        .apply(ModelUpdate::SetPlatformSelected {
            key: "Twitter_Post".into(),
            selected: true,
        })
        .unwrap();
    let p = plan(&model).unwrap();
    assert_eq!((p.images, p.platforms, p.variants, p.total), (2, 2, 1, 4));
}
