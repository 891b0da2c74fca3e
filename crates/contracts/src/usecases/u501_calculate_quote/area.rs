use crate::domain::a101_shower_type::aggregate::is_corner_name;
use crate::shared::lenient::non_negative;

/// Площадь стекла, м²
///
/// Угловая кабина: `h×w + h×l`, иначе `h×w`. Нечисловые и отрицательные
/// размеры считаются нулём; верхние пределы здесь не проверяются.
pub fn compute_area(shower_type_name: &str, height: f64, width: f64, length: f64) -> f64 {
    let height = non_negative(height);
    let width = non_negative(width);

    if is_corner_name(shower_type_name) {
        height * width + height * non_negative(length)
    } else {
        height * width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_area_ignores_length() {
        assert_eq!(compute_area("Standard", 2.0, 1.0, 0.8), 2.0);
        assert_eq!(compute_area("Standard", 2.0, 1.0, 123.0), 2.0);
    }

    #[test]
    fn test_corner_area_adds_side_panel() {
        let area = compute_area("Corner Enclosure", 2.0, 1.0, 0.8);
        assert!((area - 3.6).abs() < 1e-9);
        let area = compute_area("corner", 2.0, 1.0, 0.0);
        assert_eq!(area, 2.0);
    }

    #[test]
    fn test_invalid_dimensions_are_zero() {
        assert_eq!(compute_area("Standard", f64::NAN, 1.0, 0.0), 0.0);
        assert_eq!(compute_area("Standard", -2.0, 1.0, 0.0), 0.0);
        assert_eq!(compute_area("", 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_no_upper_bound() {
        assert_eq!(compute_area("Standard", 3.0, 2.0, 0.0), 6.0);
    }
}
