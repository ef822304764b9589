use wayfind_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Offsets with Manhattan length in `1..=radius`, row-major.
pub fn diamond(radius: i32) -> impl Iterator<Item = Point> {
    (-radius..=radius).flat_map(move |dy| {
        let span = radius - dy.abs();
        (-span..=span)
            .map(move |dx| Point::new(dx, dy))
            .filter(|d| *d != Point::ZERO)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, -2);
        let b = Point::new(-3, 4);
        assert_eq!(manhattan(a, b), 10);
        assert_eq!(manhattan(b, a), 10);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn diamond_sizes() {
        // 2r(r+1) points at L1 distance 1..=r.
        for r in 0..6 {
            let pts: Vec<_> = diamond(r).collect();
            assert_eq!(pts.len() as i32, 2 * r * (r + 1));
            assert!(pts.iter().all(|&d| (1..=r).contains(&d.norm1())));
        }
    }
}
