/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct holding per-frame metrics and the
 * overlay panel that displays them. Press D to toggle the overlay.
 */

use std::time::Duration;

use nannou::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub box_count: usize,
    pub platform_count: usize,
    pub steps: u64,
    pub spawn_counter: u32,
}

impl DebugInfo {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boxes: {}", self.box_count),
            format!("Platforms: {}", self.platform_count),
            format!("Steps: {}", self.steps),
            format!("Spawn counter: {}", self.spawn_counter),
        ]
    }
}

// Draw debug information in the top-left corner
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let lines = debug_info.lines();
    let panel_height = line_height * lines.len() as f32 + margin;

    draw.rect()
        .x_y(
            window_rect.left() + panel_width / 2.0,
            window_rect.top() - panel_height / 2.0,
        )
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        // nannou centers text on its position, so shift right by half a typical line
        draw.text(text)
            .x_y(text_x + 70.0, text_y - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
