//! Work partitioning along a single axis

use optdef_common::{ArgumentError, Axis, AxisRanges, AxisSizes};

/// One axis restricted to `[shift, shift + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSplit {
    pub axis: Axis,
    pub shift: usize,
    pub length: usize,
}

fn parse_index(field: &'static str, value: &str) -> Result<usize, ArgumentError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ArgumentError::Unparsable {
            field,
            value: value.to_string(),
        })
}

impl AxisSplit {
    /// Parse the optional positional triple. `None` when no axis was given.
    pub fn parse(
        axis: Option<&str>,
        shift: Option<&str>,
        length: Option<&str>,
        allowed: &[Axis],
    ) -> Result<Option<Self>, ArgumentError> {
        let Some(token) = axis else {
            return Ok(None);
        };
        let axis = Axis::from_token(token, allowed)?;

        let (Some(shift), Some(length)) = (shift, length) else {
            return Err(ArgumentError::MissingRange {
                axis: axis.symbol(),
            });
        };

        Ok(Some(Self {
            axis,
            shift: parse_index("shift", shift)?,
            length: parse_index("length", length)?,
        }))
    }

    /// Restrict `ranges` to this slice
    pub fn apply(&self, ranges: AxisRanges, sizes: &AxisSizes) -> Result<AxisRanges, ArgumentError> {
        ranges.restrict(self.axis, self.shift, self.length, sizes.get(self.axis))
    }
}

/// Ranges a run covers: everything, or one axis sliced
pub fn resolve_ranges(
    split: Option<&AxisSplit>,
    sizes: &AxisSizes,
) -> Result<AxisRanges, ArgumentError> {
    let full = AxisRanges::full(sizes);
    match split {
        Some(split) => split.apply(full, sizes),
        None => Ok(full),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes() -> AxisSizes {
        AxisSizes {
            h: 20,
            p: 10,
            a: 20,
            b: 20,
            c: 10,
            l: 20,
        }
    }

    #[test]
    fn test_no_split() {
        let split = AxisSplit::parse(None, None, None, &Axis::SIDE).unwrap();
        assert!(split.is_none());
        let ranges = resolve_ranges(None, &sizes()).unwrap();
        assert_eq!(ranges, AxisRanges::full(&sizes()));
    }

    #[test]
    fn test_parse_split() {
        let split = AxisSplit::parse(Some("b"), Some("5"), Some("5"), &Axis::SIDE)
            .unwrap()
            .unwrap();
        assert_eq!(
            split,
            AxisSplit {
                axis: Axis::B,
                shift: 5,
                length: 5
            }
        );
        let ranges = resolve_ranges(Some(&split), &sizes()).unwrap();
        assert_eq!(ranges.b, 5..10);
        assert_eq!(ranges.c, 0..10);
    }

    #[test]
    fn test_missing_range() {
        let err = AxisSplit::parse(Some("a"), Some("1"), None, &Axis::SIDE).unwrap_err();
        assert_eq!(err, ArgumentError::MissingRange { axis: 'a' });
    }

    #[test]
    fn test_unparsable_values() {
        let err = AxisSplit::parse(Some("c"), Some("x"), Some("2"), &Axis::SIDE).unwrap_err();
        assert!(matches!(err, ArgumentError::Unparsable { field: "shift", .. }));
        let err = AxisSplit::parse(Some("c"), Some("0"), Some("-2"), &Axis::SIDE).unwrap_err();
        assert!(matches!(err, ArgumentError::Unparsable { field: "length", .. }));
    }

    #[test]
    fn test_unknown_axis_for_binary() {
        assert!(AxisSplit::parse(Some("h"), Some("0"), Some("1"), &Axis::SIDE).is_err());
        assert!(AxisSplit::parse(Some("h"), Some("0"), Some("1"), &Axis::ALL)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_out_of_range() {
        let split = AxisSplit {
            axis: Axis::L,
            shift: 15,
            length: 6,
        };
        assert!(matches!(
            resolve_ranges(Some(&split), &sizes()),
            Err(ArgumentError::OutOfRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_in_bounds_slice_is_accepted(shift in 0usize..20, length in 1usize..21) {
            let split = AxisSplit { axis: Axis::A, shift, length };
            let result = resolve_ranges(Some(&split), &sizes());
            if shift + length <= 20 {
                let ranges = result.unwrap();
                prop_assert_eq!(ranges.a.len(), length);
                prop_assert_eq!(ranges.a.start, shift);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}
