use num_traits::Float;

use crate::{
    Bounds,
    clip::{ClipOptions, FastPath, clip_polygon, ensure_min_points},
    error::Result,
    geometry::{Kind, MultiPolygon},
};

/// Clips every polygon of the given collection against the rectangle, dropping those clipped
/// away.
///
/// Returns `None` if no polygon keeps any area inside the rectangle. Every ring of every
/// polygon must have at least 3 points, wherever it lays.
pub fn clip_multi_polygon<T>(
    multi: &MultiPolygon<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<MultiPolygon<T>>>
where
    T: Float,
{
    for ring in multi.polygons.iter().flat_map(|polygon| &polygon.rings) {
        ensure_min_points(Kind::LinearRing, &ring.points, 3)?;
    }

    rect.ensure_valid()?;

    match FastPath::new(multi, rect) {
        FastPath::Disjoint => {
            log::trace!("multi polygon {:?} is disjoint with the rectangle", multi.id);
            return Ok(None);
        }
        FastPath::Contained => return Ok(Some(multi.clone())),
        FastPath::Clip => {}
    }

    let mut polygons = Vec::with_capacity(multi.polygons.len());
    for (position, polygon) in multi.polygons.iter().enumerate() {
        match clip_polygon(polygon, rect, options)? {
            Some(clipped) => polygons.push(clipped),
            None => log::debug!("polygon {position} of multi polygon {:?} clipped away", multi.id),
        }
    }

    if polygons.is_empty() {
        return Ok(None);
    }

    let mut clipped = MultiPolygon::new(polygons);
    if options.clone_id {
        clipped.id = multi.id.clone();
    }

    Ok(Some(clipped))
}

#[cfg(test)]
mod tests {
    use crate::{
        Bounds, ClipOptions, Error,
        clip::clip_multi_polygon,
        geometry::{Kind, MultiPolygon, Polygon},
    };

    #[test]
    fn clip_polygons() {
        struct Test {
            name: &'static str,
            multi: MultiPolygon<f64>,
            want: Option<MultiPolygon<f64>>,
        }

        let rect = Bounds::new(0., 0., 10., 10.);

        vec![
            Test {
                name: "polygons inside the rectangle",
                multi: vec![
                    Polygon::from(vec![vec![[1., 1.], [4., 1.], [4., 4.]]]),
                    Polygon::from(vec![vec![[5., 5.], [9., 5.], [9., 9.]]]),
                ]
                .into(),
                want: Some(
                    vec![
                        Polygon::from(vec![vec![[1., 1.], [4., 1.], [4., 4.]]]),
                        Polygon::from(vec![vec![[5., 5.], [9., 5.], [9., 9.]]]),
                    ]
                    .into(),
                ),
            },
            Test {
                name: "polygons outside the rectangle",
                multi: vec![
                    Polygon::from(vec![vec![[20., 20.], [30., 20.], [30., 30.]]]),
                    Polygon::from(vec![vec![[-20., -20.], [-10., -20.], [-10., -10.]]]),
                ]
                .into(),
                want: None,
            },
            Test {
                name: "polygons around the rectangle but not over it",
                multi: vec![
                    Polygon::from(vec![vec![[-5., 5.], [5., 20.], [-5., 20.]]]),
                    Polygon::from(vec![vec![[15., 5.], [5., -10.], [15., -10.]]]),
                ]
                .into(),
                want: None,
            },
            Test {
                name: "some polygons crossing the rectangle",
                multi: vec![
                    Polygon::from(vec![vec![[5., 2.], [15., 2.], [15., 8.], [5., 8.]]]),
                    Polygon::from(vec![vec![[20., 20.], [30., 20.], [30., 30.]]]),
                    Polygon::from(vec![vec![[1., 1.], [3., 1.], [3., 3.]]]),
                ]
                .into(),
                want: Some(
                    vec![
                        Polygon::from(vec![vec![[5., 2.], [10., 2.], [10., 8.], [5., 8.]]]),
                        Polygon::from(vec![vec![[1., 1.], [3., 1.], [3., 3.]]]),
                    ]
                    .into(),
                ),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = clip_multi_polygon(&test.multi, &rect, &ClipOptions::default());
            assert_eq!(got, Ok(test.want), "{}", test.name);
        });
    }

    #[test]
    fn clip_polygons_with_ids() {
        let rect = Bounds::new(0., 0., 10., 10.);
        let multi = MultiPolygon::new(vec![
            Polygon::from(vec![vec![[5., 2.], [15., 2.], [15., 8.], [5., 8.]]]).with_id("a"),
            Polygon::from(vec![vec![[1., 1.], [3., 1.], [3., 3.]]]).with_id("b"),
        ])
        .with_id("parcels");

        let options = ClipOptions {
            clone_id: true,
            ..Default::default()
        };

        let Ok(Some(clipped)) = clip_multi_polygon(&multi, &rect, &options) else {
            panic!("expected the polygons to be clipped");
        };

        assert_eq!(clipped.id(), Some("parcels"));
        assert_eq!(
            clipped.polygons.iter().map(Polygon::id).collect::<Vec<_>>(),
            vec![Some("a"), Some("b")]
        );

        let Ok(Some(clipped)) = clip_multi_polygon(&multi, &rect, &ClipOptions::default()) else {
            panic!("expected the polygons to be clipped");
        };

        assert_eq!(clipped.id(), None);
        assert_eq!(
            clipped.polygons.iter().map(Polygon::id).collect::<Vec<_>>(),
            vec![None, Some("b")]
        );
    }

    #[test]
    fn clip_malformed_polygons() {
        struct Test {
            name: &'static str,
            multi: MultiPolygon<f64>,
        }

        let rect = Bounds::new(0., 0., 10., 10.);

        vec![
            Test {
                name: "two-point ring among polygons inside the rectangle",
                multi: vec![
                    Polygon::from(vec![vec![[1., 1.], [4., 1.], [4., 4.]]]),
                    Polygon::from(vec![vec![[6., 6.], [7., 7.]]]),
                ]
                .into(),
            },
            Test {
                name: "two-point ring among polygons crossing the rectangle",
                multi: vec![
                    Polygon::from(vec![vec![[5., 2.], [15., 2.], [15., 8.], [5., 8.]]]),
                    Polygon::from(vec![vec![[1., 1.], [3., 1.]]]),
                ]
                .into(),
            },
            Test {
                name: "two-point hole in a polygon inside the rectangle",
                multi: vec![Polygon::from(vec![
                    vec![[1., 1.], [9., 1.], [9., 9.]],
                    vec![[6., 3.], [7., 4.]],
                ])]
                .into(),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = clip_multi_polygon(&test.multi, &rect, &ClipOptions::default());
            assert!(
                matches!(
                    got,
                    Err(Error::InvalidGeometry {
                        kind: Kind::LinearRing,
                        ..
                    })
                ),
                "{}: got {got:?}",
                test.name
            );
        });
    }
}
