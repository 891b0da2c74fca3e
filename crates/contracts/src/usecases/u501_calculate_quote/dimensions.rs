use super::response::DimensionWarning;

/// Максимальная высота, м
pub const MAX_HEIGHT_M: f64 = 2.4;
/// Максимальная ширина (и длина боковой стенки), м
pub const MAX_WIDTH_M: f64 = 1.5;
/// Стандартная высота, м
pub const STANDARD_HEIGHT_M: f64 = 2.1;
/// Стандартная ширина, м
pub const STANDARD_WIDTH_M: f64 = 1.5;

/// Подсказки по размерам для UI. Расчёт цены они не останавливают.
pub fn check_dimensions(height: f64, width: f64, length: f64, is_corner: bool) -> Vec<DimensionWarning> {
    let mut warnings = Vec::new();
    if height > MAX_HEIGHT_M {
        warnings.push(DimensionWarning::HeightAboveMaximum {
            value: height,
            max: MAX_HEIGHT_M,
        });
    }
    if width > MAX_WIDTH_M {
        warnings.push(DimensionWarning::WidthAboveMaximum {
            value: width,
            max: MAX_WIDTH_M,
        });
    }
    if is_corner && length > MAX_WIDTH_M {
        warnings.push(DimensionWarning::LengthAboveMaximum {
            value: length,
            max: MAX_WIDTH_M,
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limits() {
        assert!(check_dimensions(STANDARD_HEIGHT_M, STANDARD_WIDTH_M, 0.9, true).is_empty());
        assert!(check_dimensions(2.4, 1.5, 1.5, true).is_empty());
    }

    #[test]
    fn test_above_limits() {
        let warnings = check_dimensions(2.5, 1.6, 2.0, true);
        assert_eq!(warnings.len(), 3);
        assert_eq!(
            warnings[0],
            DimensionWarning::HeightAboveMaximum { value: 2.5, max: 2.4 }
        );
    }

    #[test]
    fn test_length_only_checked_for_corner() {
        assert!(check_dimensions(2.0, 1.0, 5.0, false).is_empty());
    }
}
