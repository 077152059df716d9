//! Survey outlines built from sampled navigation.
//!
//! The shapes need the `geometry` feature (on by default). Without it the
//! `SegY` methods below fail with `MissingOptionalDependency("geometry")`
//! and header decoding is unaffected.

use crate::Result;
use crate::segy::SegY;

/// A scaled X/Y coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    /// Points in trace order.
    LineString(Vec<Point>),
    MultiPoint(Vec<Point>),
    /// Closed counter-clockwise ring; the first point is repeated at the end.
    Polygon(Vec<Point>),
}

#[cfg(feature = "geometry")]
impl SegY {
    /// The line traced by sampled navigation, as for a 2D line.
    pub fn line_geometry(
        &self,
        count: u64,
        nav_prefix: &str,
        use_nav_scalar: bool,
    ) -> Result<Geometry> {
        let points = self.sampled_points(count, nav_prefix, use_nav_scalar)?;
        Ok(Geometry::LineString(points))
    }

    /// Sampled navigation as unconnected points, as for a 3D survey.
    pub fn point_geometry(
        &self,
        count: u64,
        nav_prefix: &str,
        use_nav_scalar: bool,
    ) -> Result<Geometry> {
        let points = self.sampled_points(count, nav_prefix, use_nav_scalar)?;
        Ok(Geometry::MultiPoint(points))
    }

    /// Convex hull of the sampled navigation.
    ///
    /// Degenerate input collapses like the hull itself: one distinct point
    /// gives `Point`, collinear points give a two-point `LineString`, and no
    /// points give an empty `MultiPoint`.
    pub fn hull_geometry(
        &self,
        count: u64,
        nav_prefix: &str,
        use_nav_scalar: bool,
    ) -> Result<Geometry> {
        let points = self.sampled_points(count, nav_prefix, use_nav_scalar)?;
        Ok(hull::convex_hull(points))
    }

    fn sampled_points(
        &self,
        count: u64,
        nav_prefix: &str,
        use_nav_scalar: bool,
    ) -> Result<Vec<Point>> {
        self.sampled_headers(count)?
            .iter()
            .map(|header| {
                crate::nav::scaled_xy(header, nav_prefix, use_nav_scalar).map(Point::from)
            })
            .collect()
    }
}

#[cfg(not(feature = "geometry"))]
impl SegY {
    pub fn line_geometry(
        &self,
        _count: u64,
        _nav_prefix: &str,
        _use_nav_scalar: bool,
    ) -> Result<Geometry> {
        Err(crate::SegyError::MissingOptionalDependency("geometry"))
    }

    pub fn point_geometry(
        &self,
        _count: u64,
        _nav_prefix: &str,
        _use_nav_scalar: bool,
    ) -> Result<Geometry> {
        Err(crate::SegyError::MissingOptionalDependency("geometry"))
    }

    pub fn hull_geometry(
        &self,
        _count: u64,
        _nav_prefix: &str,
        _use_nav_scalar: bool,
    ) -> Result<Geometry> {
        Err(crate::SegyError::MissingOptionalDependency("geometry"))
    }
}

#[cfg(feature = "geometry")]
mod hull {
    use super::{Geometry, Point};

    fn cross(o: Point, a: Point, b: Point) -> f64 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    }

    /// One half of the hull: keeps only left turns along `points`.
    fn chain(points: impl Iterator<Item = Point>, len: usize) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::with_capacity(len);
        for p in points {
            while let [.., a, b] = out[..] {
                if cross(a, b, p) <= 0.0 {
                    out.pop();
                } else {
                    break;
                }
            }
            out.push(p);
        }
        out
    }

    /// Monotone chain hull.
    pub(super) fn convex_hull(mut points: Vec<Point>) -> Geometry {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points.dedup();

        match points.len() {
            0 => return Geometry::MultiPoint(Vec::new()),
            1 => return Geometry::Point(points[0]),
            _ => {}
        }

        let mut lower = chain(points.iter().copied(), points.len());
        let mut upper = chain(points.iter().rev().copied(), points.len());

        // each chain ends where the other starts
        lower.pop();
        upper.pop();
        lower.extend(upper);

        if lower.len() < 3 {
            return Geometry::LineString(lower);
        }
        lower.push(lower[0]);
        Geometry::Polygon(lower)
    }

}
