mod tests {
    use ledlib::{
        Error, FrameBuffer, Hsv, PackedColor, PixelSink, Rgb, Strip, StripMode,
        color::rgb_to_packed,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Sink that only counts driver calls
    #[derive(Debug, Default)]
    struct CallCounter {
        pixel_writes: usize,
        bulk_writes: usize,
        flushes: usize,
    }

    impl PixelSink for CallCounter {
        fn set_pixel(&mut self, _index: usize, _color: PackedColor) {
            self.pixel_writes += 1;
        }

        fn set_all(&mut self, _color: PackedColor) {
            self.bulk_writes += 1;
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_strip_length_validation() {
        assert_eq!(
            Strip::new(FrameBuffer::new(0), 0).err(),
            Some(Error::StripSizeOutOfRange { length: 0 })
        );
        assert_eq!(
            Strip::new(FrameBuffer::new(64), 65).err(),
            Some(Error::StripSizeOutOfRange { length: 65 })
        );
        assert_eq!(Strip::new(FrameBuffer::new(64), 64).map(|s| s.len()), Ok(64));
        assert_eq!(Strip::new(FrameBuffer::new(1), 1).map(|s| s.len()), Ok(1));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::StripSizeOutOfRange { length: 65 }.to_string(),
            "strip length 65 is outside the supported range 1-64"
        );
        assert_eq!(
            Error::PixelOutOfRange {
                index: 9,
                length: 8
            }
            .to_string(),
            "pixel index 9 is outside a strip of 8 pixels"
        );
    }

    #[test]
    fn test_set_pixel() {
        let mut strip = Strip::new(FrameBuffer::new(5), 5).unwrap();
        assert_eq!(strip.mode(), StripMode::Off);

        assert_eq!(strip.set_pixel(2, RED), Ok(()));
        assert_eq!(strip.set_pixel_hsv(4, Hsv::new(240.0, 1.0, 1.0)), Ok(()));
        assert_eq!(strip.set_pixel_packed(0, 0x0000_FF00), Ok(()));

        assert_eq!(strip.mode(), StripMode::Manual);
        assert_eq!(
            strip.sink().pixels(),
            &[0x0000_FF00, 0, 0x00FF_0000, 0, 0x0000_00FF]
        );
    }

    #[test]
    fn test_set_pixel_out_of_range() {
        let mut strip = Strip::new(FrameBuffer::new(5), 5).unwrap();
        assert_eq!(
            strip.set_pixel(5, RED),
            Err(Error::PixelOutOfRange {
                index: 5,
                length: 5
            })
        );
        assert_eq!(strip.mode(), StripMode::Off);
        assert!(strip.sink().pixels().iter().all(|&pixel| pixel == 0));
    }

    #[test]
    fn test_strip_shorter_than_sink() {
        let mut strip = Strip::new(FrameBuffer::new(8), 4).unwrap();
        assert!(strip.set_pixel(4, RED).is_err());
        strip.fill_with(|_| BLUE);
        assert_eq!(strip.sink().pixel(3), Some(BLUE));
        assert_eq!(strip.sink().pixel(4), Some(BLACK));
    }

    #[test]
    fn test_set_all_variants() {
        let mut strip = Strip::new(CallCounter::default(), 6).unwrap();
        strip.set_all(RED);
        assert_eq!(strip.sink().bulk_writes, 1);
        assert_eq!(strip.sink().pixel_writes, 0);

        strip.set_all_sequential(RED);
        assert_eq!(strip.sink().bulk_writes, 1);
        assert_eq!(strip.sink().pixel_writes, 6);
        assert_eq!(strip.mode(), StripMode::Manual);

        let mut strip = Strip::new(FrameBuffer::new(3), 3).unwrap();
        strip.set_all_sequential(BLUE);
        let sequential = strip.sink().pixels().to_vec();
        strip.set_all_hsv(Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(strip.sink().pixels(), sequential.as_slice());
    }

    #[test]
    fn test_fill_gradient() {
        let mut strip = Strip::new(FrameBuffer::new(5), 5).unwrap();
        strip.fill_gradient(RED, BLUE);
        assert_eq!(strip.sink().pixel(0), Some(RED));
        assert_eq!(strip.sink().pixel(2), Some(Rgb::new(128, 0, 128)));
        assert_eq!(strip.sink().pixel(4), Some(BLUE));

        strip.fill_gradient_packed(rgb_to_packed(BLUE), rgb_to_packed(RED));
        assert_eq!(strip.sink().pixel(0), Some(BLUE));
        assert_eq!(strip.sink().pixel(4), Some(RED));

        strip.fill_gradient_hsv(Hsv::new(0.0, 1.0, 1.0), Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(strip.sink().pixel(0), Some(RED));
        assert_eq!(strip.sink().pixel(4), Some(BLUE));
    }

    #[test]
    fn test_fill_gradient_single_pixel() {
        let mut strip = Strip::new(FrameBuffer::new(1), 1).unwrap();
        strip.fill_gradient(RED, BLUE);
        assert_eq!(strip.sink().pixel(0), Some(RED));
    }

    #[test]
    fn test_clear_and_flush() {
        let mut strip = Strip::new(FrameBuffer::new(2), 2).unwrap();
        strip.set_all(RED);
        assert_eq!(strip.sink().frame(), &[0, 0]);

        strip.flush();
        assert_eq!(strip.sink().frame(), &[0x00FF_0000, 0x00FF_0000]);
        assert_eq!(strip.sink().flush_count(), 1);

        strip.clear();
        assert_eq!(strip.mode(), StripMode::Off);
        assert_eq!(strip.sink().pixels(), &[0, 0]);
        assert_eq!(strip.sink().frame(), &[0x00FF_0000, 0x00FF_0000]);
    }

    #[test]
    fn test_strip_over_borrowed_sink() {
        let mut sink = FrameBuffer::new(3);
        {
            let mut strip = Strip::new(&mut sink, 3).unwrap();
            strip.set_all(RED);
            strip.flush();
        }
        assert_eq!(sink.flush_count(), 1);
        assert_eq!(sink.pixel(1), Some(RED));
    }

    #[test]
    fn test_frame_buffer_caps_length() {
        let buffer = FrameBuffer::new(100);
        assert_eq!(buffer.pixels().len(), 64);
    }
}
