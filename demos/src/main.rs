// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pan/zoom session: feeds a fixed pointer/wheel event sequence into
//! a [`PanZoomController`] and prints every committed transform, the way a
//! rendering host would consume them.

use kurbo::{Point, Vec2};

use stratus_controller::{InputEvent, PanDirection, PanZoomController, Transform};

/// Stand-in for the host's content layer: it just remembers the label of what
/// it draws and the transform it would draw it with.
struct ContentLayer {
    source: &'static str,
    transform: Transform,
}

impl ContentLayer {
    fn apply(&mut self, transform: Transform) {
        self.transform = transform;
        println!(
            "  [{}] scale {:.3}, offset ({:.1}, {:.1})",
            self.source, transform.scale, transform.offset.x, transform.offset.y
        );
    }
}

fn main() {
    let mut controller = PanZoomController::new();
    let mut layer = ContentLayer {
        source: "radar_tiles",
        transform: controller.transform(),
    };

    println!("drag from (200, 200) to (250, 180):");
    let script = [
        InputEvent::PointerDown(Point::new(200.0, 200.0)),
        InputEvent::PointerMove(Point::new(215.0, 195.0)),
        InputEvent::PointerMove(Point::new(232.0, 188.0)),
        InputEvent::PointerMove(Point::new(250.0, 180.0)),
        InputEvent::PointerUp(Point::new(250.0, 180.0)),
    ];
    for event in script {
        controller.handle(event, |t| layer.apply(t));
    }

    println!("two wheel ticks in at (100, 50), one out:");
    for delta_y in [-120.0, -120.0, 120.0] {
        controller.handle(
            InputEvent::Wheel {
                pos: Point::new(100.0, 50.0),
                delta_y,
            },
            |t| layer.apply(t),
        );
    }

    println!("button controls: pan left, pan up, zoom in at the view center:");
    let center = Point::new(320.0, 240.0);
    controller.pan_towards(PanDirection::Left, |t| layer.apply(t));
    controller.pan_towards(PanDirection::Up, |t| layer.apply(t));
    controller.zoom_in(center, |t| layer.apply(t));

    // The content point under the wheel cursor is recoverable from the
    // committed transform; hosts use this for hit testing.
    let under_cursor = layer.transform.view_to_content_point(Point::new(100.0, 50.0));
    println!(
        "content under (100, 50): ({:.2}, {:.2})",
        under_cursor.x, under_cursor.y
    );

    controller.pan_by(Vec2::new(-30.0, 12.5), |t| layer.apply(t));
    println!("final state: {:?}", controller.debug_info());
}
