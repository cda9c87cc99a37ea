mod tests {
    use ledlib::color::{HueInterpolation, Hsv, Rgb, lerp_hsv, lerp_rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_lerp_rgb_endpoints() {
        assert_eq!(lerp_rgb(RED, BLUE, 0.0), RED);
        assert_eq!(lerp_rgb(RED, BLUE, 1.0), BLUE);
        assert_eq!(lerp_rgb(WHITE, BLACK, 1.0), BLACK);
    }

    #[test]
    fn test_lerp_rgb_midpoints() {
        assert_eq!(lerp_rgb(RED, BLUE, 0.5), Rgb::new(128, 0, 128));
        assert_eq!(lerp_rgb(BLACK, WHITE, 0.25), Rgb::new(64, 64, 64));
        assert_eq!(
            lerp_rgb(Rgb::new(10, 20, 30), Rgb::new(20, 40, 60), 0.5),
            Rgb::new(15, 30, 45)
        );
    }

    #[test]
    fn test_lerp_rgb_clamps_t() {
        assert_eq!(lerp_rgb(RED, BLUE, -3.0), RED);
        assert_eq!(lerp_rgb(RED, BLUE, 7.5), BLUE);
        assert_eq!(lerp_rgb(RED, BLUE, f32::NAN), RED);
    }

    #[test]
    fn test_lerp_hsv_endpoints() {
        let from = Hsv::new(10.0, 0.2, 0.4);
        let to = Hsv::new(200.0, 0.8, 1.0);
        assert_eq!(lerp_hsv(from, to, 0.0, HueInterpolation::Linear), from);

        let end = lerp_hsv(from, to, 1.0, HueInterpolation::Linear);
        assert_close(end.hue, to.hue);
        assert_close(end.saturation, to.saturation);
        assert_close(end.value, to.value);

        assert_eq!(lerp_hsv(from, to, -1.0, HueInterpolation::Shortest), from);
    }

    #[test]
    fn test_lerp_hsv_linear_hue() {
        let mid = lerp_hsv(
            Hsv::new(0.0, 1.0, 1.0),
            Hsv::new(300.0, 1.0, 1.0),
            0.5,
            HueInterpolation::Linear,
        );
        assert_close(mid.hue, 150.0);

        let mid = lerp_hsv(
            Hsv::new(350.0, 1.0, 1.0),
            Hsv::new(10.0, 1.0, 1.0),
            0.5,
            HueInterpolation::Linear,
        );
        assert_close(mid.hue, 180.0);
    }

    #[test]
    fn test_lerp_hsv_shortest_hue() {
        let mid = lerp_hsv(
            Hsv::new(0.0, 1.0, 1.0),
            Hsv::new(300.0, 1.0, 1.0),
            0.5,
            HueInterpolation::Shortest,
        );
        assert_close(mid.hue, 330.0);

        let mid = lerp_hsv(
            Hsv::new(350.0, 1.0, 1.0),
            Hsv::new(10.0, 1.0, 1.0),
            0.5,
            HueInterpolation::Shortest,
        );
        assert_close(mid.hue, 0.0);

        let quarter = lerp_hsv(
            Hsv::new(20.0, 1.0, 1.0),
            Hsv::new(100.0, 1.0, 1.0),
            0.25,
            HueInterpolation::Shortest,
        );
        assert_close(quarter.hue, 40.0);
    }

    #[test]
    fn test_lerp_hsv_saturation_and_value() {
        let mid = lerp_hsv(
            Hsv::new(0.0, 0.0, 1.0),
            Hsv::new(0.0, 1.0, 0.5),
            0.5,
            HueInterpolation::default(),
        );
        assert_close(mid.saturation, 0.5);
        assert_close(mid.value, 0.75);
    }
}
