//! Desktop preview app for ledlib effects
//!
//! Renders a simulated LED strip in a window with interactive controls.
//! Every frame goes through the same `Strip` + `EffectEngine` +
//! `FrameScheduler` path the firmware uses.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use ledlib::{
    EffectEngine, EffectId, FrameBuffer, FrameScheduler, Instant, MAX_STRIP_LEN, Rgb, Strip,
    StripMode, color::packed_to_rgb,
};

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 32;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 16.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Effects registered in the engine, in index order
const EFFECTS: [EffectId; 4] = [
    EffectId::Gradient,
    EffectId::Rainbow,
    EffectId::OffsetRainbow,
    EffectId::TurnSignal,
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("LED Strip Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ledlib-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Strip, engine and tick pacing
    scheduler: FrameScheduler<FrameBuffer>,

    // UI state (tracked to detect changes and apply them to the scheduler)
    /// Currently selected effect, `None` draws the colors by hand
    effect_id: Option<EffectId>,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next scheduled tick
    next_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// First color (gradient start, turn signal color)
    start_color: [u8; 3],
    /// Second color (gradient end)
    end_color: [u8; 3],
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
}

fn to_rgb(color: [u8; 3]) -> Rgb {
    Rgb::new(color[0], color[1], color[2])
}

fn build_scheduler(
    led_count: usize,
    start: Rgb,
    end: Rgb,
    active: Option<EffectId>,
) -> FrameScheduler<FrameBuffer> {
    let led_count = led_count.clamp(1, MAX_STRIP_LEN);
    let strip = match Strip::new(FrameBuffer::new(led_count), led_count) {
        Ok(strip) => strip,
        Err(err) => panic!("invalid preview strip: {err}"),
    };

    let mut engine: EffectEngine = EffectEngine::new();
    for id in EFFECTS {
        if let Err(err) = engine.add_effect(id.to_slot(start, end)) {
            eprintln!("failed to register {}: {err}", id.as_str());
        }
    }
    engine.set_active_effect(active.map(|id| id as usize));

    FrameScheduler::new(strip, engine)
}

impl PreviewApp {
    fn new() -> Self {
        let start_color = [255, 0, 0];
        let end_color = [0, 0, 255];
        let effect_id = Some(EffectId::Rainbow);

        Self {
            scheduler: build_scheduler(
                DEFAULT_LED_COUNT,
                to_rgb(start_color),
                to_rgb(end_color),
                effect_id,
            ),
            effect_id,
            t_ms: 0,
            next_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            start_color,
            end_color,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        }
    }

    /// Switch the engine to another effect, or to hand-drawn colors
    fn apply_effect(&mut self, effect_id: Option<EffectId>) {
        self.scheduler
            .engine_mut()
            .set_active_effect(effect_id.map(|id| id as usize));
        if effect_id.is_none() {
            self.draw_manual();
        }
    }

    /// Rebuild the effects that depend on the selected colors
    fn apply_colors(&mut self) {
        let (start, end) = (to_rgb(self.start_color), to_rgb(self.end_color));
        for id in [EffectId::Gradient, EffectId::TurnSignal] {
            if let Some(slot) = self.scheduler.engine_mut().effect_mut(id as usize) {
                *slot = id.to_slot(start, end);
            }
        }
        // Re-run setup on the rebuilt effect
        self.apply_effect(self.effect_id);
    }

    /// Recreate the strip with a new length
    fn apply_led_count(&mut self) {
        self.scheduler = build_scheduler(
            self.led_count,
            to_rgb(self.start_color),
            to_rgb(self.end_color),
            self.effect_id,
        );
        if self.effect_id.is_none() {
            self.draw_manual();
        }
    }

    fn draw_manual(&mut self) {
        let (start, end) = (to_rgb(self.start_color), to_rgb(self.end_color));
        self.scheduler.strip_mut().fill_gradient(start, end);
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.next_tick_ms = 0;
        self.last_frame = StdInstant::now();
        self.apply_led_count();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every scheduler tick that is due at the current synthetic time
    fn run_ticks(&mut self) {
        while self.next_tick_ms <= self.t_ms {
            let result = self.scheduler.tick(Instant::from_millis(self.t_ms));
            self.next_tick_ms = result.next_deadline.as_millis();
            if result.sleep_duration.as_millis() > 0 {
                break;
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_ticks();

        // Only flushed pixels are visible, like on the hardware
        let frame: Vec<Rgb> = (0..self.led_count)
            .map(|index| {
                let frame = self.scheduler.strip().sink().frame();
                frame.get(index).copied().map(packed_to_rgb).unwrap_or_default()
            })
            .collect();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_STRIP_LEN));
                        if self.led_count != old_led_count {
                            self.apply_led_count();
                        }
                    });

                    ui.add_space(4.0);

                    let mode = match self.scheduler.strip().mode() {
                        StripMode::Off => "off",
                        StripMode::Manual => "manual",
                        StripMode::Effect => "effect",
                    };
                    ui.label(format!("Mode: {mode}"));
                });
                // </LayoutControls>
            });

            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Effect:");
                    let mut selected_effect = self.effect_id;
                    egui::ComboBox::from_id_salt("effect_selector")
                        .selected_text(self.effect_id.map_or("manual", EffectId::as_str))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut selected_effect, None, "manual");
                            for id in EFFECTS {
                                ui.selectable_value(&mut selected_effect, Some(id), id.as_str());
                            }
                        });
                    if selected_effect != self.effect_id {
                        self.effect_id = selected_effect;
                        self.apply_effect(selected_effect);
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Colors:");
                    let start_changed = ui.color_edit_button_srgb(&mut self.start_color).changed();
                    let end_changed = ui.color_edit_button_srgb(&mut self.end_color).changed();
                    if start_changed || end_changed {
                        self.apply_colors();
                    }

                    ui.add_space(8.0);

                    if ui.button("Clear").clicked() {
                        self.effect_id = None;
                        self.scheduler.engine_mut().set_active_effect(None);
                        self.scheduler.strip_mut().clear();
                    }
                });
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = self.led_count.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
