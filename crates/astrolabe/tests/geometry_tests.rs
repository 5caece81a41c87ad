use astrolabe::chart::HouseCusp;
use astrolabe::layout::coords::{map, CoordinateMapper};
use astrolabe::layout::rings::{segment_width, RingGeometryBuilder};
use astrolabe::layout::{Layer, LayoutItem, PathCommand};
use astrolabe::rendering::primitives::Point;
use astrolabe::{DisplayConfig, StandardSymbols};

const EPS: f64 = 1e-6;

fn assert_point(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

fn uneven_houses() -> Vec<HouseCusp> {
    let cusps = [
        341.5, 12.0, 40.25, 68.0, 99.9, 131.0, 161.5, 192.0, 220.25, 248.0, 279.9, 311.0,
    ];
    cusps
        .iter()
        .enumerate()
        .map(|(i, lon)| HouseCusp::new(i as u8 + 1, *lon, "Sign"))
        .collect()
}

#[test]
fn test_reference_longitude_pins_to_left_horizon() {
    for asc in [0.0, 95.0, 181.3, 359.5, -20.0, 725.0] {
        for r in [1.0, 100.0, 285.0, 350.0] {
            assert_point(map(asc, r, asc), -r, 0.0);
        }
    }
}

#[test]
fn test_map_is_periodic() {
    for lon in [0.0, 10.0, 95.5, 359.9, -45.0] {
        for asc in [0.0, 95.0, 300.0] {
            let a = map(lon, 250.0, asc);
            let b = map(lon + 360.0, 250.0, asc);
            assert_point(b, a.x, a.y);
        }
    }
}

#[test]
fn test_map_ascendant_95() {
    let r = 320.0;
    assert_point(map(95.0, r, 95.0), -r, 0.0);
    // Descendant sits on the right horizon
    assert_point(map(275.0, r, 95.0), r, 0.0);
    // MC a quarter turn behind the ascendant is at the top
    assert_point(map(5.0, r, 95.0), 0.0, -r);
}

#[test]
fn test_screen_angle_range() {
    let mapper = CoordinateMapper::new(95.0);
    assert!((mapper.screen_angle(95.0) - 180.0).abs() < EPS);
    assert!((mapper.screen_angle(275.0) - 0.0).abs() < EPS);
    assert!(mapper.screen_angle(-1000.0) >= 0.0);
    assert!(mapper.screen_angle(1000.0) < 360.0);
}

#[test]
fn test_house_widths_sum_to_full_circle() {
    let houses = uneven_houses();
    let total: f64 = (0..12)
        .map(|i| segment_width(houses[i].longitude, houses[(i + 1) % 12].longitude))
        .sum();
    assert!((total - 360.0).abs() < EPS, "total was {total}");
}

#[test]
fn test_house_ring_segments_cover_circle() {
    let houses = uneven_houses();
    let refs: Vec<&HouseCusp> = houses.iter().collect();
    let builder = RingGeometryBuilder::new(CoordinateMapper::new(houses[0].longitude));
    let items = builder.house_ring(&refs, &DisplayConfig::default());

    let segments: Vec<_> = items
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Ring(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 12);
    let total: f64 = segments.iter().map(|s| s.width).sum();
    assert!((total - 360.0).abs() < EPS);
    assert!(segments.iter().all(|s| s.layer == Layer::HouseRing));
    // House 1 spans the 0° crossing
    assert!((segments[0].width - 30.5).abs() < EPS);
}

#[test]
fn test_house_ring_accepts_unreduced_cusps() {
    // Same chart as `uneven_houses`, some cusps written one or two turns further on
    let houses: Vec<HouseCusp> = uneven_houses()
        .into_iter()
        .map(|mut cusp| {
            cusp.longitude += match cusp.number {
                2 | 5 => 360.0,
                9 => 720.0,
                _ => 0.0,
            };
            cusp
        })
        .collect();
    let refs: Vec<&HouseCusp> = houses.iter().collect();
    let builder = RingGeometryBuilder::new(CoordinateMapper::new(341.5));
    let items = builder.house_ring(&refs, &DisplayConfig::default());

    let segments: Vec<_> = items
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Ring(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 12);
    let expected = uneven_houses();
    for (i, segment) in segments.iter().enumerate() {
        let width = segment_width(expected[i].longitude, expected[(i + 1) % 12].longitude);
        assert!(segment.width > 0.0 && segment.width < 360.0);
        assert!((segment.width - width).abs() < EPS, "house {}", i + 1);
        assert!((0.0..360.0).contains(&segment.start_longitude));
    }
    let total: f64 = segments.iter().map(|s| s.width).sum();
    assert!((total - 360.0).abs() < EPS, "total was {total}");

    for segment in &segments {
        for command in &segment.path {
            if let PathCommand::ArcTo { sweep, .. } = command {
                assert!((sweep.abs() - segment.width).abs() < EPS);
            }
        }
    }
}

#[test]
fn test_house_ring_requires_twelve_cusps() {
    let houses = uneven_houses();
    let refs: Vec<&HouseCusp> = houses.iter().take(11).collect();
    let builder = RingGeometryBuilder::new(CoordinateMapper::new(0.0));
    assert!(builder.house_ring(&refs, &DisplayConfig::default()).is_empty());
}

#[test]
fn test_wedge_path_shape() {
    let mapper = CoordinateMapper::new(0.0);
    let builder = RingGeometryBuilder::new(mapper);
    let path = builder.wedge_path(100.0, 130.0, 350.0, 20.0);

    assert_eq!(path.len(), 6);
    match &path[0] {
        PathCommand::MoveTo { to } => {
            let expected = mapper.map(350.0, 100.0);
            assert_point(*to, expected.x, expected.y);
        }
        other => panic!("expected MoveTo, got {other:?}"),
    }
    match (&path[2], &path[4]) {
        (
            PathCommand::ArcTo {
                radius: outer,
                sweep: outer_sweep,
                end: outer_end,
                ..
            },
            PathCommand::ArcTo {
                radius: inner,
                sweep: inner_sweep,
                ..
            },
        ) => {
            assert_eq!(*outer, 130.0);
            assert_eq!(*inner, 100.0);
            assert!((outer_sweep - 30.0).abs() < EPS);
            assert!((inner_sweep + 30.0).abs() < EPS);
            let expected = mapper.map(20.0, 130.0);
            assert_point(*outer_end, expected.x, expected.y);
        }
        other => panic!("expected two arcs, got {other:?}"),
    }
    assert_eq!(path[5], PathCommand::Close);
}

#[test]
fn test_zodiac_ring_follows_ascendant() {
    let config = DisplayConfig::default();
    let builder = RingGeometryBuilder::new(CoordinateMapper::new(0.0));
    let items = builder.zodiac_ring(&config, &StandardSymbols::new());

    let segments: Vec<_> = items
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Ring(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 12);
    assert_eq!(segments[0].id, "sign:Aries");
    assert_eq!(segments[0].tooltip.as_deref(), Some("Aries"));

    // With the ascendant at 0° Aries starts on the left horizon
    match &segments[0].path[1] {
        PathCommand::LineTo { to } => assert_point(*to, -config.outer_radius(), 0.0),
        other => panic!("expected LineTo, got {other:?}"),
    }

    let labels: Vec<_> = items
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Label(l) => Some(l),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[3].text, "♋");
}
