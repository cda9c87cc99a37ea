mod tests {
    use ledlib::{
        Duration, EffectEngine, FrameBuffer, FrameScheduler, GradientEffect, Instant, Rgb,
        Shared, Strip, StripMode,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn scheduler() -> FrameScheduler<FrameBuffer> {
        let strip = Strip::new(FrameBuffer::new(3), 3).unwrap();
        let mut engine: EffectEngine = EffectEngine::new();
        let index = engine.add_effect(GradientEffect::new(RED, BLUE)).unwrap();
        engine.set_active_effect(Some(index));
        FrameScheduler::new(strip, engine)
    }

    #[test]
    fn test_tick_updates_and_flushes() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));

        let buffer = scheduler.strip().sink();
        assert_eq!(buffer.flush_count(), 1);
        assert_eq!(buffer.frame(), &[0x00FF_0000, 0x0080_0080, 0x0000_00FF]);
        assert_eq!(scheduler.strip().mode(), StripMode::Effect);
    }

    #[test]
    fn test_tick_sleep_durations() {
        let mut scheduler = scheduler();
        assert_eq!(scheduler.frame_duration(), Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(10));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        // Late but within two frames: catch up without sleeping long
        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));
    }

    #[test]
    fn test_tick_resets_after_drift() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(110));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_custom_frame_duration() {
        let strip = Strip::new(FrameBuffer::new(1), 1).unwrap();
        let engine: EffectEngine = EffectEngine::new();
        let mut scheduler =
            FrameScheduler::with_frame_duration(strip, engine, Duration::from_millis(25));

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(25));
        // No active effect, the strip is still flushed
        assert_eq!(scheduler.strip().sink().flush_count(), 1);
        assert_eq!(scheduler.strip().mode(), StripMode::Off);
    }

    #[test]
    fn test_manual_drawing_between_ticks() {
        let mut scheduler = scheduler();
        scheduler.engine_mut().set_active_effect(None);
        scheduler.strip_mut().set_all(BLUE);
        scheduler.tick(Instant::from_millis(0));

        assert_eq!(scheduler.strip().sink().frame(), &[0x0000_00FF; 3]);
        assert_eq!(scheduler.strip().mode(), StripMode::Manual);

        let (strip, engine) = scheduler.into_parts();
        assert_eq!(strip.len(), 3);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_shared_scheduler() {
        let shared = Shared::new(scheduler());

        let result = shared.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let flushes = shared.lock(|scheduler| scheduler.strip().sink().flush_count());
        assert_eq!(flushes, 1);

        shared.lock(|scheduler| scheduler.engine_mut().set_active_effect(None));
        shared.tick(Instant::from_millis(10));

        let scheduler = shared.into_inner();
        assert_eq!(scheduler.strip().sink().flush_count(), 2);
        assert_eq!(scheduler.engine().active_effect(), None);
    }

    #[test]
    fn test_shared_value() {
        let counter = Shared::new(0u32);
        for _ in 0..3 {
            counter.lock(|value| *value += 1);
        }
        assert_eq!(counter.into_inner(), 3);
    }
}
