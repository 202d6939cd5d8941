mod common;

use common::RecordingRenderer;
use glam::Vec2;
use ragdoll_lab::figure::behavior::Behavior;
use ragdoll_lab::figure::physics::{presets, Mode};
use ragdoll_lab::figure::skeleton::{BoneSpec, NodeSpec, Skeleton};
use ragdoll_lab::{DragTarget, Figure, Pointer, RigError, Viewport};

// At 1100x1100 the scale is exactly 1, so simulation and screen units agree
// up to the horizontal centering offset of 550.
fn viewport() -> Viewport {
    Viewport::new(1100.0, 1100.0)
}

fn node_at(x: f32, y: f32, behavior: Option<Behavior>) -> NodeSpec {
    NodeSpec {
        x,
        y,
        w: 30.0,
        mass: 1.0,
        behavior,
    }
}

fn figure(index: usize, skeleton: &Skeleton) -> (Figure, RecordingRenderer) {
    let mut renderer = RecordingRenderer::new(true);
    let figure = Figure::new(index, 0.0, skeleton, viewport(), &mut renderer).unwrap();
    (figure, renderer)
}

fn figure_pair(skeleton: &Skeleton) -> (Figure, RecordingRenderer) {
    figure(0, skeleton)
}

#[test]
fn inert_node_stays_put() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, None)],
        bones: vec![],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    let mut pointer = Pointer::default();
    for _ in 0..10 {
        figure.step(viewport(), &mut pointer, &mut renderer);
    }
    assert_eq!(figure.nodes[0].position, Vec2::new(0.0, 500.0));
}

#[test]
fn ground_clamp_holds_every_frame() {
    let skeleton = Skeleton {
        nodes: vec![node_at(
            0.0,
            1000.0,
            Some(Behavior::Stamp {
                sink: 1.5,
                raise: 1.0,
                slam: 5.0,
                reverse: false,
            }),
        )],
        bones: vec![],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    let mut pointer = Pointer::default();
    let floor = 1100.0 - 30.0;
    for _ in 0..120 {
        figure.step(viewport(), &mut pointer, &mut renderer);
        assert!(figure.nodes[0].position.y <= floor + 1e-3);
    }
    assert!((figure.nodes[0].position.y - floor).abs() < 1e-3);
}

#[test]
fn oscillation_flips_at_the_pace() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, None)],
        bones: vec![],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    let mut pointer = Pointer::default();
    let pace = presets::RELAXED.pace;
    for frame in 1..=2 * pace {
        figure.step(viewport(), &mut pointer, &mut renderer);
        let expected = if frame < pace || frame == 2 * pace {
            1.0
        } else {
            -1.0
        };
        assert_eq!(figure.dir(), expected, "frame {frame}");
    }
}

#[test]
fn first_node_in_reach_captures_the_pointer() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, None), node_at(10.0, 500.0, None)],
        bones: vec![BoneSpec {
            n0: 0,
            n1: 1,
            segment: None,
        }],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    // Screen position of the first node; both nodes are within reach.
    let mut pointer = Pointer {
        position: Vec2::new(550.0, 500.0),
        pressed: true,
        drag: None,
    };
    figure.step(viewport(), &mut pointer, &mut renderer);
    assert_eq!(pointer.drag, Some(DragTarget { figure: 0, node: 0 }));

    pointer.pressed = false;
    figure.step(viewport(), &mut pointer, &mut renderer);
    assert_eq!(pointer.drag, None);
}

#[test]
fn distant_press_captures_nothing() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, None)],
        bones: vec![],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    // Reach is 90 units at scale 1; this press is 200 away.
    let mut pointer = Pointer {
        position: Vec2::new(750.0, 500.0),
        pressed: true,
        drag: None,
    };
    figure.step(viewport(), &mut pointer, &mut renderer);
    assert_eq!(pointer.drag, None);
}

#[test]
fn dragged_node_pauses_its_gait() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, Some(Behavior::Lift { rate: 0.4 }))],
        bones: vec![],
    };
    let (mut figure, mut renderer) = figure_pair(&skeleton);
    // Pointer parked exactly over the node so the drag easing is a no-op.
    let mut pointer = Pointer {
        position: Vec2::new(550.0, 500.0),
        pressed: true,
        drag: Some(DragTarget { figure: 0, node: 0 }),
    };
    figure.step(viewport(), &mut pointer, &mut renderer);
    assert_eq!(figure.nodes[0].position.y, 500.0);

    // The same node free of the pointer lifts as usual.
    let (mut free, mut renderer) = figure_pair(&skeleton);
    let mut idle = Pointer::default();
    free.step(viewport(), &mut idle, &mut renderer);
    assert!(free.nodes[0].position.y < 500.0);
}

#[test]
fn follow_eases_toward_a_drag_on_the_other_figure() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, Some(Behavior::Follow))],
        bones: vec![],
    };
    let (mut hand, mut renderer) = figure(1, &skeleton);
    // Pointer at simulation (100, 500), dragging a node of figure 0.
    let mut pointer = Pointer {
        position: Vec2::new(650.0, 500.0),
        pressed: true,
        drag: Some(DragTarget { figure: 0, node: 0 }),
    };
    hand.step(viewport(), &mut pointer, &mut renderer);
    assert!((hand.nodes[0].position.x - 1.0).abs() < 1e-4, "1% easing");
    assert_eq!(hand.nodes[0].position.y, 500.0);

    // No drag anywhere, no following.
    let (mut still, mut renderer) = figure(1, &skeleton);
    let mut idle = Pointer::default();
    still.step(viewport(), &mut idle, &mut renderer);
    assert_eq!(still.nodes[0].position.x, 0.0);
}

#[test]
fn engaging_applies_the_preset_idempotently() {
    let skeleton = Skeleton {
        nodes: vec![node_at(0.0, 500.0, Some(Behavior::Lift { rate: 0.4 }))],
        bones: vec![],
    };
    let (mut figure, _) = figure_pair(&skeleton);
    assert_eq!(figure.mode(), Mode::Relaxed);

    figure.set_engaged(true);
    let once = (*figure.physics(), figure.nodes[0].intensity);
    figure.set_engaged(true);
    assert_eq!((*figure.physics(), figure.nodes[0].intensity), once);
    assert_eq!(figure.mode(), Mode::Engaged);
    assert_eq!(*figure.physics(), presets::ENGAGED);

    figure.set_engaged(false);
    assert_eq!(figure.mode(), Mode::Relaxed);
    assert_eq!(*figure.physics(), presets::RELAXED);
    assert_eq!(figure.nodes[0].intensity, presets::RELAXED.intensity);
}

#[test]
fn skeleton_validation_rejects_broken_rigs() {
    let empty = Skeleton {
        nodes: vec![],
        bones: vec![],
    };
    assert_eq!(empty.validate(), Err(RigError::EmptySkeleton));

    let dangling = Skeleton {
        nodes: vec![node_at(0.0, 0.0, None)],
        bones: vec![BoneSpec {
            n0: 0,
            n1: 5,
            segment: None,
        }],
    };
    assert_eq!(
        dangling.validate(),
        Err(RigError::NodeOutOfRange {
            constraint: 0,
            node: 5
        })
    );

    let collapsed = Skeleton {
        nodes: vec![node_at(10.0, 10.0, None), node_at(10.0, 10.0, None)],
        bones: vec![BoneSpec {
            n0: 0,
            n1: 1,
            segment: None,
        }],
    };
    assert_eq!(
        collapsed.validate(),
        Err(RigError::CoincidentEndpoints { constraint: 0 })
    );
}

#[test]
fn skeleton_deserializes_from_json() {
    let skeleton: Skeleton = serde_json::from_str(
        r#"{
            "nodes": [
                {"x": 0.0, "y": 400.0, "w": 30.0},
                {"x": 0.0, "y": 500.0, "w": 30.0, "mass": 0.5,
                 "behavior": {"Lift": {"rate": 0.4}}}
            ],
            "bones": [
                {"n0": 0, "n1": 1, "segment": {"image": "torso"}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(skeleton.nodes[0].mass, 1.0, "mass defaults to one");

    let (mut figure, mut renderer) = figure_pair(&skeleton);
    assert_eq!(renderer.prepared, vec!["torso".to_string()]);
    let mut pointer = Pointer::default();
    figure.step(viewport(), &mut pointer, &mut renderer);
    assert_eq!(renderer.segments.len(), 1);
}
