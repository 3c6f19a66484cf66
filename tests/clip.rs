use rand::Rng;
use rectclip::{
    Bounds, ClipOptions, Clipper, Geometry, Intersection, IsClose, LineString, LinearRing,
    MultiPolygon, Point, Polygon, Segment, Tolerance, clip_geometry, clip_polygon,
};

fn approx() -> Tolerance<f64> {
    Tolerance::new(0., 1e-9)
}

fn rect() -> Bounds<f64> {
    Bounds::new(0., 0., 10., 10.)
}

#[test]
fn clip_line_across_the_rectangle() {
    let line = LineString::from(vec![[-5., 5.], [15., 5.]]);

    assert_eq!(
        clip_geometry(&line.into(), &rect(), &ClipOptions::default()),
        Ok(Some(LineString::from(vec![[0., 5.], [10., 5.]]).into()))
    );
}

#[test]
fn line_inside_the_rectangle_keeps_its_identity() {
    let line: Geometry<f64> = LineString::from(vec![[1., 1.], [4., 7.], [9., 2.]])
        .with_id("trail")
        .into();

    let got = Clipper::new(rect()).clip(&line);
    assert_eq!(got, Ok(Some(line)));
}

#[test]
fn polygon_enclosing_the_rectangle_becomes_the_rectangle() {
    let polygon = Polygon::from(vec![vec![[-5., -5.], [15., -5.], [15., 15.], [-5., 15.]]]);

    let Ok(Some(clipped)) = clip_polygon(&polygon, &rect(), &ClipOptions::default()) else {
        panic!("expected the polygon to be clipped");
    };

    let [shell] = clipped.rings.as_slice() else {
        panic!("expected a single ring, got {clipped:?}");
    };

    assert_eq!(shell.len(), 4);
    rect().corners().iter().for_each(|corner| {
        assert!(
            shell.points.iter().any(|point| point.is_close(corner, &approx())),
            "corner {corner:?} missing in {shell:?}"
        );
    });
}

#[test]
fn disjoint_geometries_are_clipped_away() {
    let geometries: Vec<Geometry<f64>> = vec![
        LineString::from(vec![[20., 20.], [30., 20.]]).into(),
        LinearRing::from(vec![[20., 20.], [30., 20.], [30., 30.]]).into(),
        Polygon::from(vec![vec![[20., 20.], [30., 20.], [30., 30.], [20., 30.]]]).into(),
        MultiPolygon::from(vec![Polygon::from(vec![vec![
            [-20., -20.],
            [-10., -20.],
            [-10., -10.],
        ]])])
        .into(),
    ];

    geometries.into_iter().for_each(|geometry| {
        let got = clip_geometry(&geometry, &rect(), &ClipOptions::default());
        assert_eq!(got, Ok(None), "{}", geometry.kind());
    });
}

#[test]
fn clipping_twice_changes_nothing() {
    let geometries: Vec<Geometry<f64>> = vec![
        LineString::from(vec![[-5., 2.], [5., 2.], [5., 15.], [8., 15.], [8., 5.]]).into(),
        Polygon::from(vec![vec![[5., -3.], [13., 5.], [5., 13.], [-3., 5.]]]).into(),
    ];

    geometries.into_iter().for_each(|geometry| {
        let Ok(Some(once)) = clip_geometry(&geometry, &rect(), &ClipOptions::default()) else {
            panic!("expected the {} to be clipped", geometry.kind());
        };

        let twice = clip_geometry(&once, &rect(), &ClipOptions::default());
        assert_eq!(twice, Ok(Some(once)), "{}", geometry.kind());
    });
}

#[test]
fn diamond_loses_its_corners() {
    let diamond = Polygon::from(vec![vec![[5., -3.], [13., 5.], [5., 13.], [-3., 5.]]]);

    let Ok(Some(clipped)) = clip_polygon(&diamond, &rect(), &ClipOptions::default()) else {
        panic!("expected the diamond to be clipped");
    };

    assert_eq!(clipped.rings[0].len(), 8);
    assert!(clipped.area() < diamond.area());
    assert!(clipped.area().is_close(&92., &approx()));
}

#[test]
fn clipped_rectangles_cover_their_overlap() {
    let mut rng = rand::rng();
    let rect = rect();

    for _ in 0..1000 {
        let left = rng.random_range(-20..20) as f64;
        let bottom = rng.random_range(-20..20) as f64;
        let right = left + rng.random_range(1..20) as f64;
        let top = bottom + rng.random_range(1..20) as f64;

        let subject = Polygon::from(vec![vec![
            [left, bottom],
            [right, bottom],
            [right, top],
            [left, top],
        ]]);

        let overlap = (right.min(rect.right) - left.max(rect.left)).max(0.)
            * (top.min(rect.top) - bottom.max(rect.bottom)).max(0.);

        let got = clip_polygon(&subject, &rect, &ClipOptions::default())
            .expect("rectangles are always valid")
            .map(|clipped| clipped.area())
            .unwrap_or_default();

        assert!(
            got.is_close(&overlap, &approx()),
            "{subject:?}: got area = {got}, want = {overlap}"
        );
    }
}

#[test]
fn segment_intersection_is_symmetric() {
    let mut rng = rand::rng();
    let tolerance = Tolerance::new(0., 1e-6);

    for _ in 0..1000 {
        let [a, b, c, d]: [Point<f64>; 4] = rng.random::<[[f64; 2]; 4]>().map(Into::into);

        let lhs = Segment::new(&a, &b).intersection(&Segment::new(&c, &d), &Default::default());
        let rhs = Segment::new(&c, &d).intersection(&Segment::new(&a, &b), &Default::default());

        match (lhs, rhs) {
            (Intersection::Point(lhs), Intersection::Point(rhs)) => {
                assert!(lhs.is_close(&rhs, &tolerance), "got {lhs:?} and {rhs:?}")
            }
            (lhs, rhs) => assert_eq!(lhs, rhs),
        }
    }
}
