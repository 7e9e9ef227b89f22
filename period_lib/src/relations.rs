//! How two periods relate to each other, and the periods derived from them.
//!
//! ```text
//!        [------ A ------)
//!               [----- B -------)
//!
//!        [----------------------)     merge
//!               [--------)            intersect
//!        [------)        [------)     diff
//!
//!      [---A---)   [----B----)
//!              [---)                  gap
//!
//!      [---A---)[----B----)           A and B abut, they do not overlap
//! ```

use crate::datepoints::{compare, earliest, latest, Datepoint};
use crate::errors::{Error, Result};
use crate::periods::Period;
use std::cmp::Ordering;

/// Where two abutting periods touch, seen from the first one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The other period ends where self starts
    Start,

    /// Self ends where the other period starts
    End,
}

impl Period {
    /// Whether the datepoint is in the period (start included, end
    /// excluded)
    #[must_use]
    pub fn contains(&self, index: &Datepoint) -> bool {
        compare(index, &self.start) != Ordering::Less
            && compare(index, &self.end) == Ordering::Less
    }

    /// Whether every instant of other is also in self.
    /// Only the datepoints are compared: an empty period is contained only
    /// if it lies within the bounds of self.
    #[must_use]
    pub fn contains_period(&self, other: &Period) -> bool {
        compare(&self.start, &other.start) != Ordering::Greater
            && compare(&other.end, &self.end) != Ordering::Greater
    }

    /// True if the period contains no instant
    #[must_use]
    pub fn is_empty(&self) -> bool {
        compare(&self.start, &self.end) != Ordering::Less
    }

    /// Whether both periods have the same datepoints
    #[must_use]
    pub fn same_value_as(&self, other: &Period) -> bool {
        compare(&self.start, &other.start) == Ordering::Equal
            && compare(&self.end, &other.end) == Ordering::Equal
    }

    /// Whether self starts at or after the start of other.
    /// This is not "entirely after": the two periods may overlap.
    #[must_use]
    pub fn is_after(&self, other: &Period) -> bool {
        compare(&self.start, &other.start) != Ordering::Less
    }

    /// Whether self ends at or before the end of other.
    /// This is not "entirely before": the two periods may overlap.
    #[must_use]
    pub fn is_before(&self, other: &Period) -> bool {
        compare(&self.end, &other.end) != Ordering::Greater
    }

    /// Which side of self touches other, if they abut.  When both sides
    /// touch (empty periods), [`Side::Start`] is reported.
    #[must_use]
    pub fn abutting_side(&self, other: &Period) -> Option<Side> {
        if compare(&self.start, &other.end) == Ordering::Equal {
            Some(Side::Start)
        } else if compare(&self.end, &other.start) == Ordering::Equal {
            Some(Side::End)
        } else {
            None
        }
    }

    /// Whether the two periods touch, with no gap between them
    #[must_use]
    pub fn abuts(&self, other: &Period) -> bool {
        self.abutting_side(other).is_some()
    }

    /// Whether the two periods share some instants.  Abutting periods never
    /// overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Period) -> bool {
        !self.abuts(other)
            && compare(&self.start, &other.end) == Ordering::Less
            && compare(&self.end, &other.start) == Ordering::Greater
    }

    /// Extend self so that it also covers all the other periods.  The
    /// periods do not have to overlap, the result is their convex hull.
    pub fn merge<'a>(&mut self, others: impl IntoIterator<Item = &'a Period>) {
        for p in others {
            self.start = earliest(self.start, p.start);
            self.end = latest(self.end, p.end);
        }
    }

    /// The smallest period that covers all the given ones, or None if
    /// there are none.
    #[must_use]
    pub fn merged<'a>(periods: impl IntoIterator<Item = &'a Period>) -> Option<Period> {
        let mut iter = periods.into_iter();
        let mut result = *iter.next()?;
        result.merge(iter);
        Some(result)
    }

    /// The instants that belong to both periods.
    /// Fails with [`Error::Abuts`] if the periods abut, and with
    /// [`Error::MustOverlap`] if they are disjoint.
    pub fn intersect(&self, other: &Period) -> Result<Period> {
        if self.abuts(other) {
            return Err(Error::Abuts);
        }
        if !self.overlaps(other) {
            return Err(Error::MustOverlap);
        }
        let result = Period::new(
            latest(self.start, other.start),
            earliest(self.end, other.end),
        );
        log::trace!("{self} & {other} = {result}");
        Ok(result)
    }

    /// The period between the end of one period and the start of the
    /// other, whichever order they are in.
    /// The periods must not overlap, or the result ends before it starts.
    #[must_use]
    pub fn gap(&self, other: &Period) -> Period {
        if compare(&other.start, &self.start) == Ordering::Greater {
            Period::new(self.end, other.start)
        } else {
            Period::new(other.end, self.start)
        }
    }

    /// The instants that belong to exactly one of the two periods, as up to
    /// two periods: the one at the start, then the one at the end.
    /// Fails with [`Error::MustOverlap`] unless the periods overlap.
    pub fn diff(&self, other: &Period) -> Result<Vec<Period>> {
        if !self.overlaps(other) {
            return Err(Error::MustOverlap);
        }
        let result: Vec<Period> = [
            Period::from_datepoints(self.start, other.start),
            Period::from_datepoints(self.end, other.end),
        ]
        .into_iter()
        .filter(|p| compare(&p.start, &p.end) != Ordering::Equal)
        .collect();
        log::trace!("{self} ^ {other} = {} periods", result.len());
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, TimeDelta};
    use proptest::prelude::*;

    /// A datepoint `hours` after some arbitrary origin
    fn h(hours: i64) -> Datepoint {
        DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap()
            + TimeDelta::hours(hours)
    }

    fn p(start: i64, end: i64) -> Period {
        Period::new(h(start), h(end))
    }

    #[test]
    fn test_contains() {
        let intv = p(1, 10);
        assert!(intv.contains(&h(1)));
        assert!(intv.contains(&h(2)));
        assert!(intv.contains(&h(9)));
        assert!(!intv.contains(&h(10)));
        assert!(!intv.contains(&h(0)));

        // Full precision
        assert!(intv.contains(&(h(10) - TimeDelta::nanoseconds(1))));
        assert!(!intv.contains(&(h(1) - TimeDelta::nanoseconds(1))));

        assert!(intv.contains_period(&p(2, 5)));
        assert!(intv.contains_period(&p(1, 10)));
        assert!(!p(2, 5).contains_period(&intv));

        // Empty periods are compared by their datepoints
        assert!(intv.contains_period(&p(10, 10)));
        assert!(intv.contains_period(&p(4, 4)));
        assert!(!intv.contains_period(&p(20, 20)));
        assert!(!intv.contains_period(&p(12, 11)));
    }

    #[test]
    fn test_empty() {
        assert!(!p(1, 10).is_empty());
        assert!(p(1, 1).is_empty());
        assert!(p(1, 0).is_empty());
        assert!(!p(1, 1).contains(&h(1)));
    }

    #[test]
    fn test_same_value() {
        let utc = p(0, 10);
        let shifted = Period::new(
            utc.start.with_timezone(&chrono::FixedOffset::east_opt(3600).unwrap()),
            utc.end,
        );
        assert!(utc.same_value_as(&shifted));
        assert!(!utc.same_value_as(&p(0, 11)));
        assert!(!utc.same_value_as(&p(1, 10)));
    }

    #[test]
    fn test_before_after() {
        // Not "entirely before/after": overlapping periods qualify
        let p1 = p(0, 10);
        let p2 = p(5, 15);
        assert!(p1.is_before(&p2));
        assert!(!p2.is_before(&p1));
        assert!(p2.is_after(&p1));
        assert!(!p1.is_after(&p2));

        // Same end, same start
        assert!(p(3, 10).is_before(&p1));
        assert!(p(0, 3).is_after(&p1));
    }

    #[test]
    fn test_abuts() {
        let p1 = p(0, 10);
        let p2 = p(10, 20);
        assert!(p1.abuts(&p2));
        assert!(p2.abuts(&p1));
        assert_eq!(p1.abutting_side(&p2), Some(Side::End));
        assert_eq!(p2.abutting_side(&p1), Some(Side::Start));
        assert!(!p1.overlaps(&p2));

        assert!(!p1.abuts(&p(11, 20)));
        assert_eq!(p1.abutting_side(&p(5, 20)), None);

        // Empty periods touch on both sides
        assert_eq!(p(5, 5).abutting_side(&p(5, 5)), Some(Side::Start));
    }

    #[test]
    fn test_overlaps() {
        assert!(p(0, 10).overlaps(&p(5, 15)));
        assert!(p(5, 15).overlaps(&p(0, 10)));
        assert!(p(0, 10).overlaps(&p(2, 3)));
        assert!(p(0, 10).overlaps(&p(0, 10)));
        assert!(!p(0, 10).overlaps(&p(11, 15)));
        assert!(!p(0, 10).overlaps(&p(10, 15)));
    }

    #[test]
    fn test_merge() {
        let mut p1 = p(5, 10);
        p1.merge(&[p(0, 3), p(8, 20)]);
        assert_eq!(p1, p(0, 20));

        let mut p1 = p(0, 30);
        p1.merge(&[p(5, 10)]);
        assert_eq!(p1, p(0, 30));

        let mut p1 = p(0, 30);
        p1.merge(std::iter::empty());
        assert_eq!(p1, p(0, 30));

        assert_eq!(Period::merged(&[p(4, 6), p(-2, 1)]), Some(p(-2, 6)));
        assert_eq!(Period::merged(std::iter::empty()), None);
    }

    #[test]
    fn test_intersect() {
        assert_eq!(p(0, 10).intersect(&p(5, 15)), Ok(p(5, 10)));
        assert_eq!(p(5, 15).intersect(&p(0, 10)), Ok(p(5, 10)));
        assert_eq!(p(0, 10).intersect(&p(2, 3)), Ok(p(2, 3)));
        assert_eq!(p(0, 10).intersect(&p(10, 15)), Err(Error::Abuts));
        assert_eq!(p(10, 15).intersect(&p(0, 10)), Err(Error::Abuts));
        assert_eq!(p(0, 10).intersect(&p(12, 15)), Err(Error::MustOverlap));
    }

    #[test]
    fn test_gap() {
        assert_eq!(p(0, 10).gap(&p(15, 20)), p(10, 15));
        assert_eq!(p(15, 20).gap(&p(0, 10)), p(10, 15));
        assert!(p(0, 10).gap(&p(10, 20)).is_empty());

        // Overlapping periods give a reversed period
        let g = p(0, 10).gap(&p(5, 15));
        assert_eq!(g, p(10, 5));
    }

    #[test]
    fn test_diff() {
        assert_eq!(
            p(0, 10).diff(&p(5, 15)),
            Ok(vec![p(0, 5), p(10, 15)])
        );
        assert_eq!(
            p(5, 15).diff(&p(0, 10)),
            Ok(vec![p(0, 5), p(10, 15)])
        );

        // Same start, only the trailing part remains
        assert_eq!(p(0, 10).diff(&p(0, 15)), Ok(vec![p(10, 15)]));
        // Same end, only the leading part remains
        assert_eq!(p(0, 10).diff(&p(4, 10)), Ok(vec![p(0, 4)]));
        assert_eq!(p(0, 10).diff(&p(0, 10)), Ok(vec![]));

        assert_eq!(p(0, 10).diff(&p(10, 15)), Err(Error::MustOverlap));
        assert_eq!(p(0, 10).diff(&p(11, 15)), Err(Error::MustOverlap));
    }

    fn arb_period() -> impl Strategy<Value = Period> {
        (-1000i64..1000, 0i64..500).prop_map(|(s, len)| p(s, s + len))
    }

    proptest! {
        #[test]
        fn prop_abuts_not_overlap(p1 in arb_period(), p2 in arb_period()) {
            if p1.abuts(&p2) {
                prop_assert!(!p1.overlaps(&p2));
            }
        }

        #[test]
        fn prop_overlap_symmetric(p1 in arb_period(), p2 in arb_period()) {
            prop_assert_eq!(p1.overlaps(&p2), p2.overlaps(&p1));
            prop_assert_eq!(p1.abuts(&p2), p2.abuts(&p1));
        }

        #[test]
        fn prop_diff_and_intersect_cover_span(
            p1 in arb_period(),
            p2 in arb_period(),
        ) {
            match p1.diff(&p2) {
                Err(e) => {
                    prop_assert_eq!(e, Error::MustOverlap);
                    prop_assert!(!p1.overlaps(&p2));
                }
                Ok(parts) => {
                    let inter = p1.intersect(&p2).unwrap();
                    let hull = Period::merged(&[p1, p2]).unwrap();
                    let mut all = parts.clone();
                    all.push(inter);
                    prop_assert_eq!(Period::merged(&all), Some(hull));

                    // Total duration covered, without double counting
                    let total = all
                        .iter()
                        .fold(TimeDelta::zero(), |acc, q| acc + q.duration());
                    prop_assert_eq!(total, hull.duration());

                    for q in &parts {
                        prop_assert!(!q.is_empty());
                        prop_assert!(!q.overlaps(&inter));
                    }
                }
            }
        }

        #[test]
        fn prop_merge_any_order(
            p1 in arb_period(),
            p2 in arb_period(),
            p3 in arb_period(),
        ) {
            let mut a = p1;
            a.merge(&[p2, p3]);
            let mut b = p3;
            b.merge(&[p1, p2]);
            let mut c = p2;
            c.merge(&[p3, p1]);
            prop_assert_eq!(a, b);
            prop_assert_eq!(a, c);
            prop_assert_eq!(a.start, p1.start.min(p2.start).min(p3.start));
            prop_assert_eq!(a.end, p1.end.max(p2.end).max(p3.end));
        }
    }
}
