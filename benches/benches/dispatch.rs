// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use orrery_event_state::buttons::{Modifiers, PointerButton, PointerButtons};
use orrery_event_state::mode::InteractionMode;
use orrery_interaction::{
    ControllerConfig, CursorIcon, InteractionController, KeyCode, Viewer, ViewportHost,
};

#[derive(Debug)]
struct Never;

impl std::fmt::Display for Never {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("never")
    }
}

impl std::error::Error for Never {}

/// Accumulates camera input so the optimizer cannot drop the calls.
#[derive(Default)]
struct SinkViewer {
    acc: f64,
}

impl Viewer for SinkViewer {
    type Shape = u32;
    type Error = Never;

    fn begin_rotation(&mut self, pos: Point) {
        self.acc += pos.x;
    }
    fn rotate(&mut self, pos: Point) {
        self.acc += pos.x + pos.y;
    }
    fn pan(&mut self, dx: f64, dy: f64) {
        self.acc += dx - dy;
    }
    fn dynamic_zoom(&mut self, from: Point, to: Point) {
        self.acc += to.y - from.y;
    }
    fn zoom_by_factor(&mut self, factor: f64) {
        self.acc *= factor;
    }
    fn zoom_to_area(&mut self, area: Rect) {
        self.acc += area.area();
    }
    fn pick(&mut self, pos: Point) -> Result<Vec<u32>, Never> {
        Ok(vec![pos.x as u32])
    }
    fn pick_additive(&mut self, pos: Point) -> Result<Vec<u32>, Never> {
        self.pick(pos)
    }
    fn pick_area(&mut self, area: Rect) -> Result<Vec<u32>, Never> {
        Ok(vec![area.width() as u32, area.height() as u32])
    }
    fn pick_at_point(&mut self, pos: Point) -> Result<Vec<u32>, Never> {
        self.pick(pos)
    }
    fn move_to(&mut self, pos: Point) {
        self.acc += pos.y;
    }
    fn repaint(&mut self) {}
    fn resize(&mut self, _: Size) {}
    fn set_wireframe(&mut self) {}
    fn set_shaded(&mut self) {}
    fn enable_anti_aliasing(&mut self) {}
    fn disable_anti_aliasing(&mut self) {}
    fn set_hidden_line_removal(&mut self) {}
    fn fit_all(&mut self) {
        self.acc = 0.0;
    }
    fn set_selection_mode(&mut self) {}
    fn view_iso(&mut self) {}
    fn view_above(&mut self) {}
    fn up(&mut self) {}
}

struct SinkHost {
    cursor_changes: usize,
}

impl ViewportHost for SinkHost {
    type Cursor = CursorIcon;

    fn load_cursor(&mut self, icon: CursorIcon) -> Option<CursorIcon> {
        Some(icon)
    }
    fn apply_cursor(&mut self, _: &CursorIcon) {
        self.cursor_changes += 1;
    }
    fn restore_cursor(&mut self) {}
}

type Controller = InteractionController<SinkViewer, SinkHost>;

fn controller() -> Controller {
    let config = ControllerConfig::default().with_selection_history(false);
    let mut controller = Controller::new(SinkHost { cursor_changes: 0 }, config);
    controller
        .attach(SinkViewer::default(), Size::new(1_920.0, 1_080.0))
        .unwrap();
    controller
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/move");
    const MOVES: u64 = 256;
    group.throughput(Throughput::Elements(MOVES));

    let cases = [
        ("hover", PointerButtons::empty(), Modifiers::empty()),
        ("rotate", PointerButtons::PRIMARY, Modifiers::empty()),
        ("pan", PointerButtons::MIDDLE, Modifiers::empty()),
        ("dynamic_zoom", PointerButtons::SECONDARY, Modifiers::empty()),
        ("area_zoom", PointerButtons::SECONDARY, Modifiers::SHIFT),
    ];

    for (name, buttons, modifiers) in cases {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut c = controller();
                    if !buttons.is_empty() {
                        c.on_pointer_down(Point::new(10.0, 10.0), PointerButton::Middle)
                            .unwrap();
                    }
                    c
                },
                |mut c| {
                    for i in 0..MOVES {
                        let t = i as f64;
                        c.on_pointer_move(Point::new(10.0 + t, 10.0 + 0.5 * t), buttons, modifiers)
                            .unwrap();
                    }
                    black_box(c.mode());
                    c
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/gesture");

    // A full orbit-and-click: down, a few moves, up with a published pick.
    group.bench_function("rotate_click", |b| {
        let mut c = controller();
        b.iter(|| {
            c.on_pointer_down(Point::new(100.0, 100.0), PointerButton::Primary)
                .unwrap();
            for step in 1..=8 {
                let d = f64::from(step);
                c.on_pointer_move(
                    Point::new(100.0 + d, 100.0 - d),
                    PointerButtons::PRIMARY,
                    Modifiers::empty(),
                )
                .unwrap();
            }
            c.on_pointer_up(Point::new(108.0, 92.0), PointerButton::Primary, Modifiers::empty())
                .unwrap();
            debug_assert_eq!(c.mode(), InteractionMode::Idle);
        });
    });

    group.bench_function("area_select", |b| {
        let mut c = controller();
        b.iter(|| {
            c.on_pointer_down(Point::new(50.0, 50.0), PointerButton::Primary)
                .unwrap();
            c.on_pointer_move(Point::new(300.0, 200.0), PointerButtons::PRIMARY, Modifiers::SHIFT)
                .unwrap();
            c.on_pointer_up(Point::new(300.0, 200.0), PointerButton::Primary, Modifiers::SHIFT)
                .unwrap();
        });
    });

    group.bench_function("key_press", |b| {
        let mut c = controller();
        let keys = [
            KeyCode::from_char('F'),
            KeyCode::from_char('W'),
            KeyCode::from_char('Z'),
            KeyCode(0xFF1B),
        ];
        b.iter(|| {
            for key in keys {
                c.on_key_press(black_box(key)).unwrap();
            }
        });
    });

    group.bench_function("wheel", |b| {
        let mut c = controller();
        let mut delta = 120.0;
        b.iter(|| {
            c.on_wheel(black_box(delta)).unwrap();
            delta = -delta;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_moves, bench_gestures);
criterion_main!(benches);
