mod common;

use halftone_core::error::HalftoneError;
use halftone_core::geometry::SizingPolicy;
use halftone_core::luma::LumaWeighting;
use halftone_core::pipeline::config::{FillMode, HalftoneConfig};
use halftone_core::pipeline::{
    collect_dots, evaluate_region, render_halftone, render_halftone_reported, DotDescriptor, Fill,
    PipelineStage, ProgressReporter,
};
use halftone_core::sampler::{RegionColor, RegionGrid};
use halftone_core::sink::DotCollector;

use common::{boxed_gray_frame, noise_frame, solid_frame};

fn config_with_box(box_size: u32) -> HalftoneConfig {
    HalftoneConfig {
        box_size,
        ..Default::default()
    }
}

#[test]
fn test_black_image_gives_four_full_dots() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let dots = collect_dots(&frame, &config_with_box(50)).unwrap();

    let centers: Vec<(u32, u32)> = dots.iter().map(|d| (d.cx, d.cy)).collect();
    assert_eq!(centers, vec![(25, 25), (25, 75), (75, 25), (75, 75)]);
    for dot in &dots {
        assert_eq!(dot.radius, 25);
        assert_eq!(dot.fill, Fill::Color(RegionColor::BLACK));
        assert_eq!(dot.style(), "fill:#000000;stroke:none");
    }
}

#[test]
fn test_scale_multiplies_centers_and_radius() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let config = HalftoneConfig {
        scale: 2,
        ..config_with_box(50)
    };
    let mut sink = DotCollector::default();
    let summary = render_halftone(&frame, &config, &mut sink).unwrap();

    assert_eq!(sink.canvas, Some((200, 200)));
    assert_eq!((summary.canvas_width, summary.canvas_height), (200, 200));
    assert_eq!(sink.dots[0].radius, 50);
    assert_eq!((sink.dots[3].cx, sink.dots[3].cy), (150, 150));
}

#[test]
fn test_black_fill_mode() {
    let frame = solid_frame(100, 100, [40, 80, 120]);
    let config = HalftoneConfig {
        fill: FillMode::Black,
        ..config_with_box(50)
    };
    let dots = collect_dots(&frame, &config).unwrap();
    assert_eq!(dots.len(), 4);
    assert!(dots.iter().all(|d| d.fill == Fill::Black));
    assert_eq!(dots[0].style(), "fill:black;stroke:none");
}

#[test]
fn test_white_image_is_fully_suppressed() {
    let frame = solid_frame(100, 100, [255, 255, 255]);
    let mut sink = DotCollector::default();
    let summary = render_halftone(&frame, &config_with_box(50), &mut sink).unwrap();

    assert!(sink.dots.is_empty());
    assert_eq!(summary.dots, 0);
    assert_eq!(summary.suppressed, 4);
    assert!(sink.finished);
}

#[test]
fn test_summary_reports_suppressed_regions() {
    let frame = boxed_gray_frame(10, 2, 1, &[0, 255]);
    let mut sink = DotCollector::default();
    let summary = render_halftone(&frame, &config_with_box(10), &mut sink).unwrap();

    assert_eq!((summary.dots, summary.suppressed), (1, 1));
    assert_eq!(
        summary.to_string(),
        "1 of 2 regions drawn (1 at or above threshold skipped)"
    );
}

#[test]
fn test_zero_threshold_emits_nothing() {
    let frame = noise_frame(64, 64, 3);
    let config = HalftoneConfig {
        luma_threshold: 0.0,
        ..config_with_box(8)
    };
    assert!(collect_dots(&frame, &config).unwrap().is_empty());
}

#[test]
fn test_threshold_one_keeps_every_non_white_region() {
    let frame = boxed_gray_frame(10, 2, 3, &[0, 64, 128, 200, 250, 255]);
    let dots = collect_dots(&frame, &config_with_box(10)).unwrap();
    // 250 * 1.03 / 255 >= 1.0 under BT.601, so only the first four survive.
    assert_eq!(dots.len(), 4);

    // BT.709 weights sum to just under 1.0 in f64, so even pure white
    // evaluates below the threshold and keeps a zero-radius dot.
    let config = HalftoneConfig {
        luma_weighting: LumaWeighting::Bt709,
        ..config_with_box(10)
    };
    let dots = collect_dots(&frame, &config).unwrap();
    assert_eq!(dots.len(), 6);
    assert_eq!(dots[5].radius, 0);
}

#[test]
fn test_box_larger_than_image_is_empty_not_error() {
    let frame = solid_frame(30, 30, [0, 0, 0]);
    let mut sink = DotCollector::default();
    let summary = render_halftone(&frame, &config_with_box(50), &mut sink).unwrap();

    assert_eq!(summary.grid.region_count(), 0);
    assert_eq!(sink.canvas, Some((30, 30)));
    assert!(sink.dots.is_empty());
    assert!(sink.finished);
}

#[test]
fn test_zero_box_is_empty_not_error() {
    let frame = solid_frame(30, 30, [0, 0, 0]);
    assert!(collect_dots(&frame, &config_with_box(0)).unwrap().is_empty());
}

#[test]
fn test_invalid_threshold_rejected_before_sink_starts() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let config = HalftoneConfig {
        luma_threshold: 1.5,
        ..config_with_box(50)
    };
    let mut sink = DotCollector::default();
    let err = render_halftone(&frame, &config, &mut sink).unwrap_err();

    assert!(matches!(err, HalftoneError::InvalidThreshold(t) if t == 1.5));
    assert!(sink.canvas.is_none());
}

#[test]
fn test_scale_overflowing_canvas_is_rejected() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let config = HalftoneConfig {
        scale: 50_000_000,
        ..config_with_box(50)
    };
    let mut sink = DotCollector::default();
    let err = render_halftone(&frame, &config, &mut sink).unwrap_err();

    assert!(matches!(err, HalftoneError::InvalidScale(50_000_000)));
    assert!(sink.canvas.is_none());
}

#[test]
fn test_largest_fitting_scale_renders() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let scale = u32::MAX / 100;
    let config = HalftoneConfig {
        scale,
        ..config_with_box(50)
    };
    let mut sink = DotCollector::default();
    render_halftone(&frame, &config, &mut sink).unwrap();

    assert_eq!(sink.canvas, Some((100 * scale, 100 * scale)));
    assert_eq!((sink.dots[3].cx, sink.dots[3].radius), (75 * scale, 25 * scale));
}

#[test]
fn test_darker_regions_get_larger_dots() {
    let frame = boxed_gray_frame(20, 3, 1, &[0, 100, 200]);
    let dots = collect_dots(&frame, &config_with_box(20)).unwrap();
    assert_eq!(dots.len(), 3);
    assert!(dots[0].radius > dots[1].radius);
    assert!(dots[1].radius > dots[2].radius);
}

#[test]
fn test_area_policy_sizes() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let config = HalftoneConfig {
        sizing: SizingPolicy::Area,
        ..config_with_box(50)
    };
    let dots = collect_dots(&frame, &config).unwrap();
    assert!(dots.iter().all(|d| d.radius == 23));
}

#[test]
fn test_odd_box_centers_use_truncated_half() {
    let frame = solid_frame(10, 10, [0, 0, 0]);
    let config = config_with_box(5);
    let grid = RegionGrid::new(10, 10, 5);
    let cells: Vec<_> = grid.cells().collect();
    let last = evaluate_region(&frame, &config, &grid, cells[3]).unwrap();
    assert_eq!((last.cx, last.cy, last.radius), (7, 7, 2));
}

#[test]
fn test_average_color_fill() {
    let frame = solid_frame(20, 20, [200, 10, 30]);
    let dots = collect_dots(&frame, &config_with_box(20)).unwrap();
    assert_eq!(dots[0].fill, Fill::Color(RegionColor::new(200, 10, 30)));
    assert_eq!(dots[0].style(), "fill:#c80a1e;stroke:none");
}

#[test]
fn test_runs_are_identical() {
    let frame = noise_frame(120, 90, 11);
    let config = config_with_box(7);
    let first = collect_dots(&frame, &config).unwrap();
    let second = collect_dots(&frame, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_walk_matches_sequential_order() {
    // 65 x 65 = 4225 cells, above the parallel threshold.
    let frame = noise_frame(130, 130, 5);
    let config = HalftoneConfig {
        luma_threshold: 0.6,
        ..config_with_box(2)
    };
    let grid = RegionGrid::for_image(&frame, 2);
    let expected: Vec<DotDescriptor> = grid
        .cells()
        .filter_map(|cell| evaluate_region(&frame, &config, &grid, cell))
        .collect();

    let dots = collect_dots(&frame, &config).unwrap();
    assert!(!dots.is_empty());
    assert_eq!(dots, expected);
}

#[derive(Default)]
struct StageLog {
    stages: std::sync::Mutex<Vec<PipelineStage>>,
}

impl ProgressReporter for StageLog {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.stages.lock().unwrap().push(stage);
    }
}

#[test]
fn test_reporter_sees_sampling_then_writing() {
    let frame = solid_frame(100, 100, [0, 0, 0]);
    let log = StageLog::default();
    let mut sink = DotCollector::default();
    render_halftone_reported(&frame, &config_with_box(50), &mut sink, &log).unwrap();
    assert_eq!(
        *log.stages.lock().unwrap(),
        vec![PipelineStage::Sampling, PipelineStage::Writing]
    );
}
