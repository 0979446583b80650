use boardkit_core::units::*;
use proptest::prelude::*;

#[test]
fn test_known_conversions() {
    assert_eq!(inches_to_mm(1.0), 25.4);
    assert_eq!(inches_to_cm(1.0), 2.54);
    assert_eq!(format_dimension(6.5, LengthUnit::Millimeters), "165.1 mm");
}

proptest! {
    #[test]
    fn prop_mm_round_trip(x in 1e-6f64..1e6) {
        prop_assert!((mm_to_inches(inches_to_mm(x)) - x).abs() <= 1e-9 * x.max(1.0));
    }

    #[test]
    fn prop_cm_round_trip(x in 1e-6f64..1e6) {
        prop_assert!((cm_to_inches(inches_to_cm(x)) - x).abs() <= 1e-9 * x.max(1.0));
    }

    #[test]
    fn prop_display_unit_round_trip(x in 0.25f64..30.0) {
        for unit in LengthUnit::ALL {
            let shown = unit.from_inches(x);
            prop_assert!((unit.to_inches(shown) - x).abs() < 1e-9);
        }
    }
}
