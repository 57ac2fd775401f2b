use magickwand::{
    AffineMatrix, ChannelType, DrawingWand, ErrorKind, ImageLayerMethod, KernelInfo, MagickWand,
    MetricType, NoiseType, PixelWand, Severity,
};

mod utils;

use utils::*;

#[test]
fn blur_single_pixel() {
    init();

    let mut wand = solid(1, 1, "red");
    wand.blur_image(0., 1.).unwrap();
    wand.blur_image_channel(ChannelType::RED, 0., 1.).unwrap();
    wand.adaptive_blur_image(0., 1.).unwrap();
    wand.adaptive_blur_image_channel(ChannelType::default(), 0., 1.)
        .unwrap();

    assert_eq!(wand.image_width().unwrap(), 1);
    assert_close(wand.image_pixel_color(0, 0).unwrap().red(), 1.);
}

#[test]
fn filters_keep_dimensions() {
    init();

    let mut wand = solid(8, 6, "gray");
    wand.adaptive_sharpen_image(0., 1.).unwrap();
    wand.adaptive_sharpen_image_channel(ChannelType::GRAY_CHANNELS, 0., 1.)
        .unwrap();
    wand.add_noise_image(NoiseType::Gaussian).unwrap();
    wand.add_noise_image_channel(ChannelType::BLUE, NoiseType::Uniform)
        .unwrap();
    wand.auto_gamma_image().unwrap();
    wand.auto_gamma_image_channel(ChannelType::RED).unwrap();
    wand.auto_level_image().unwrap();
    wand.auto_level_image_channel(ChannelType::GREEN).unwrap();
    wand.blue_shift_image(1.5).unwrap();
    wand.brightness_contrast_image(10., -10.).unwrap();
    wand.brightness_contrast_image_channel(ChannelType::BLUE, 5., 5.)
        .unwrap();
    wand.charcoal_image(0., 1.).unwrap();
    wand.clamp_image().unwrap();
    wand.clamp_image_channel(ChannelType::ALPHA).unwrap();
    wand.comment_image("magickwand").unwrap();
    wand.adaptive_threshold_image(3, 3, 0).unwrap();

    assert_eq!(wand.image_width().unwrap(), 8);
    assert_eq!(wand.image_height().unwrap(), 6);
}

#[test]
fn geometry() {
    init();

    let mut wand = solid(3, 3, "white");
    wand.chop_image(1, 1, 0, 0).unwrap();
    assert_eq!(wand.image_width().unwrap(), 2);
    assert_eq!(wand.image_height().unwrap(), 2);

    let border = PixelWand::from_color("black").unwrap();
    wand.border_image(&border, 2, 1).unwrap();
    assert_eq!(wand.image_width().unwrap(), 6);
    assert_eq!(wand.image_height().unwrap(), 4);
    assert_close(wand.image_pixel_color(0, 0).unwrap().red(), 0.);

    wand.adaptive_resize_image(12, 8).unwrap();
    assert_eq!(wand.image_width().unwrap(), 12);
    assert_eq!(wand.image_height().unwrap(), 8);
}

#[test]
fn thresholds_and_colors() {
    init();

    let mut wand = solid(2, 2, "rgb(64,64,64)");
    let threshold = PixelWand::from_color("rgb(128,128,128)").unwrap();
    wand.black_threshold_image(&threshold).unwrap();
    assert_close(wand.image_pixel_color(0, 0).unwrap().red(), 0.);

    let colorize = PixelWand::from_color("red").unwrap();
    let opacity = PixelWand::from_color("rgb(100%,100%,100%)").unwrap();
    wand.colorize_image(&colorize, &opacity).unwrap();
    assert_close(wand.image_pixel_color(1, 1).unwrap().red(), 1.);
}

#[test]
fn clut() {
    init();

    let mut wand = solid(2, 2, "black");
    let mut table = sequence(4, 1, &["blue"]);
    wand.clut_image(&table).unwrap();
    assert_close(wand.image_pixel_color(0, 0).unwrap().blue(), 1.);

    table.set_first_iterator();
    wand.clut_image_channel(ChannelType::BLUE, &table).unwrap();
}

#[test]
fn kernels() {
    init();

    let mut wand = solid(4, 4, "rgb(255,0,0)");

    let identity = KernelInfo::new("3x3: 0,0,0 0,1,0 0,0,0").unwrap();
    wand.filter_image(&identity).unwrap();
    assert_close(wand.image_pixel_color(2, 2).unwrap().red(), 1.);

    let swap = KernelInfo::new("3x3: 0,1,0 1,0,0 0,0,1").unwrap();
    wand.color_matrix_image(&swap).unwrap();
    let color = wand.image_pixel_color(2, 2).unwrap();
    assert_close(color.red(), 0.);
    assert_close(color.green(), 1.);
}

#[test]
fn affine_transform() {
    init();

    let mut wand = solid(2, 2, "white");
    let mut drawing = DrawingWand::new().unwrap();
    drawing.affine(&AffineMatrix::scale(2., 2.));
    wand.affine_transform_image(&drawing).unwrap();

    assert!(wand.image_width().unwrap() >= 4);
}

#[test]
fn color_decision_list() {
    init();

    let ccc = r#"<ColorCorrectionCollection xmlns="urn:ASC:CDL:v1.2">
  <ColorCorrection id="cc03345">
    <SOPNode>
      <Slope> 1.0 1.0 1.0 </Slope>
      <Offset> 0.0 0.0 0.0 </Offset>
      <Power> 1.0 1.0 1.0 </Power>
    </SOPNode>
    <SATNode>
      <Saturation> 1.0 </Saturation>
    </SATNode>
  </ColorCorrection>
</ColorCorrectionCollection>"#;

    let mut wand = solid(2, 2, "red");
    wand.color_decision_list_image(ccc).unwrap();
    assert_close(wand.image_pixel_color(0, 0).unwrap().red(), 1.);
}

#[test]
fn append() {
    init();

    let wand = sequence(2, 3, &["red", "green", "blue"]);

    let row = wand.append_images(false).unwrap();
    assert_eq!(row.number_images(), 1);
    assert_eq!(row.image_width().unwrap(), 6);
    assert_eq!(row.image_height().unwrap(), 3);

    let column = wand.append_images(true).unwrap();
    assert_eq!(column.image_width().unwrap(), 2);
    assert_eq!(column.image_height().unwrap(), 9);

    // Source is left untouched
    assert_eq!(wand.number_images(), 3);
}

#[test]
fn append_empty() {
    init();

    let wand = MagickWand::new().unwrap();
    assert!(wand.append_images(false).is_err());
    assert!(wand.coalesce_images().is_err());
}

#[test]
fn coalesce() {
    init();

    let wand = sequence(3, 3, &["red", "green"]);
    let coalesced = wand.coalesce_images().unwrap();

    assert_eq!(coalesced.number_images(), 2);
    assert_eq!(coalesced.image_width().unwrap(), 3);
}

#[test]
fn combine() {
    init();

    let wand = sequence(2, 2, &["white", "black", "white"]);
    let combined = wand
        .combine_images(ChannelType::RED | ChannelType::GREEN | ChannelType::BLUE)
        .unwrap();

    assert_eq!(combined.number_images(), 1);
    let color = combined.image_pixel_color(0, 0).unwrap();
    assert_close(color.red(), 1.);
    assert_close(color.green(), 0.);
    assert_close(color.blue(), 1.);
}

#[test]
fn compare_with_itself() {
    init();

    let wand = solid(4, 4, "orange");
    let reference = wand.try_clone().unwrap();

    let (difference, distortion) = wand
        .compare_image_channels(
            &reference,
            ChannelType::default(),
            MetricType::RootMeanSquaredError,
        )
        .unwrap();

    assert_eq!(distortion, 0.);
    assert_eq!(difference.number_images(), 1);
    assert_eq!(difference.image_width().unwrap(), 4);
}

#[test]
fn compare_different() {
    init();

    let wand = solid(4, 4, "black");
    let reference = solid(4, 4, "white");

    let (_, distortion) = wand
        .compare_image_channels(
            &reference,
            ChannelType::default(),
            MetricType::MeanAbsoluteError,
        )
        .unwrap();

    assert!(distortion > 0.);
}

#[test]
fn compare_layers() {
    init();

    let wand = sequence(4, 4, &["red", "red", "blue"]);
    let layers = wand.compare_image_layers(ImageLayerMethod::CompareAny).unwrap();

    assert_eq!(layers.number_images(), 3);
}

#[test]
fn annotate() {
    init();

    let mut wand = solid(64, 24, "white");
    let mut drawing = DrawingWand::new().unwrap();
    drawing.set_font_size(12.);
    drawing.set_fill_color(&PixelWand::from_color("black").unwrap());
    drawing.set_stroke_color(&PixelWand::from_color("none").unwrap());

    for antialias in [true, false] {
        drawing.set_text_antialias(antialias);
        match wand.annotate_image(&drawing, 2., 16., 0., "magick") {
            Ok(()) => {}
            // No usable font installed
            Err(err) => assert!(
                err.exception().is_some_and(|x| !x.message().is_empty()),
                "{err}"
            ),
        }
    }

    assert_eq!(wand.image_width().unwrap(), 64);
    assert_eq!(wand.image_height().unwrap(), 24);
}

#[test]
fn drawing_font() {
    init();

    let mut drawing = DrawingWand::new().unwrap();
    drawing.set_font("DejaVu-Sans").unwrap();

    let err = drawing.set_font("Dejà\0Vu").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InteriorNul(_)));
    assert_eq!(err.operation(), Some("DrawSetFont"));
}

#[test]
fn clip_without_clip_path() {
    init();

    let mut wand = solid(4, 4, "white");

    let err = wand.clip_image().unwrap_err();
    assert_eq!(err.operation(), Some("MagickClipImage"));
    assert!(!err.to_string().is_empty());

    for inside in [true, false] {
        let err = wand.clip_image_path("#1", inside).unwrap_err();
        assert_eq!(err.operation(), Some("MagickClipImagePath"));
        assert!(!err.to_string().is_empty());
    }

    // Failures are not carried over
    wand.blur_image(0., 1.).unwrap();
}

#[test]
fn animate_without_display() {
    init();

    let mut wand = solid(2, 2, "white");
    let err = wand
        .x11_animate_images(":magickwand-no-display")
        .unwrap_err();

    assert_eq!(err.operation(), Some("MagickAnimateImages"));
    assert!(!err.to_string().is_empty());
}

#[test]
fn compare_size_mismatch() {
    init();

    let wand = solid(4, 4, "black");
    let reference = solid(2, 2, "black");

    let err = wand
        .compare_image_channels(
            &reference,
            ChannelType::default(),
            MetricType::RootMeanSquaredError,
        )
        .unwrap_err();

    assert!(err.exception().is_some_and(|x| !x.message().is_empty()));
    assert_eq!(err.severity(), Some(Severity::Error));
    assert_eq!(err.operation(), Some("MagickCompareImageChannels"));

    let same = wand.try_clone().unwrap();
    let (_, distortion) = wand
        .compare_image_channels(&same, ChannelType::default(), MetricType::RootMeanSquaredError)
        .unwrap();
    assert_eq!(distortion, 0.);
}
