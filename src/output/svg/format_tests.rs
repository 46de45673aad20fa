//! Tests for SVG text and tick formatting.

use super::*;

mod xml_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(xml_escape("Shipping & Surf"), "Shipping &amp; Surf");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(xml_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(xml_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(xml_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn keeps_unicode() {
        assert_eq!(xml_escape("SαS"), "SαS");
    }
}

mod format_coord_tests {
    use super::*;

    #[test]
    fn drops_trailing_zeros() {
        assert_eq!(format_coord(58.0), "58");
        assert_eq!(format_coord(12.5), "12.5");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_coord(1.23456), "1.23");
        assert_eq!(format_coord(99.999), "100");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_coord(-0.001), "0");
    }
}

mod format_thousands_tests {
    use super::*;

    #[test]
    fn thousands_are_abbreviated() {
        assert_eq!(format_thousands(2000.0), "2k");
        assert_eq!(format_thousands(1000.0), "1k");
        assert_eq!(format_thousands(-3000.0), "-3k");
    }

    #[test]
    fn below_one_thousand_is_integer() {
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(500.0), "500");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_thousands(2999.0), "2k");
        assert_eq!(format_thousands(999.9), "999");
        assert_eq!(format_thousands(-1500.0), "-1k");
    }
}

mod format_exponent_tests {
    use super::*;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_exponent(0.0), "0");
    }

    #[test]
    fn small_values_drop_exponent_padding() {
        assert_eq!(format_exponent(0.0001), "1e-4");
        assert_eq!(format_exponent(0.0002), "2e-4");
        assert_eq!(format_exponent(0.005), "5e-3");
    }

    #[test]
    fn two_digit_negative_exponents_unchanged() {
        assert_eq!(format_exponent(5e-10), "5e-10");
    }

    #[test]
    fn positive_exponents_keep_sign_and_padding() {
        assert_eq!(format_exponent(1000.0), "1e+03");
        assert_eq!(format_exponent(1.0), "1e+00");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_exponent(-0.0003), "-3e-4");
    }
}

mod format_power_of_ten_tests {
    use super::*;

    #[test]
    fn decades_use_superscripts() {
        assert_eq!(format_power_of_ten(1.0), "10⁰");
        assert_eq!(format_power_of_ten(1000.0), "10³");
        assert_eq!(format_power_of_ten(1e5), "10⁵");
    }

    #[test]
    fn negative_decades() {
        assert_eq!(format_power_of_ten(0.01), "10⁻²");
    }

    #[test]
    fn multi_digit_exponents() {
        assert_eq!(format_power_of_ten(1e12), "10¹²");
    }
}

mod format_plain_tests {
    use super::*;

    #[test]
    fn integral_axis_has_no_decimals() {
        assert_eq!(format_plain(&[0.0, 6.0, 12.0]), vec!["0", "6", "12"]);
    }

    #[test]
    fn shared_precision_across_axis() {
        assert_eq!(
            format_plain(&[0.0, 0.25, 0.5, 0.75]),
            vec!["0.00", "0.25", "0.50", "0.75"]
        );
    }

    #[test]
    fn negative_values_and_zero() {
        assert_eq!(
            format_plain(&[-1.0, -0.5, 0.0, 0.5, 1.0]),
            vec!["-1.0", "-0.5", "0.0", "0.5", "1.0"]
        );
    }

    #[test]
    fn float_noise_is_ignored() {
        assert_eq!(format_plain(&[0.1 * 3.0]), vec!["0.3"]);
    }

    #[test]
    fn empty_axis() {
        assert!(format_plain(&[]).is_empty());
    }
}
