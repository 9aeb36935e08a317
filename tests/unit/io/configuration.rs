//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use tiltboard::board::tile::TileColor;
    use tiltboard::io::configuration::{
        CELL_PIXEL_SIZE, DEFAULT_MAX_AUTO_TILTS, EMPTY_SYMBOL, HOLE_SYMBOL,
        MAX_BOARD_DIMENSION, MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX, ROUGH_SYMBOL,
    };

    // Tests the reserved layout symbols never collide with each other
    #[test]
    fn test_layout_symbols_are_distinct() {
        assert_ne!(EMPTY_SYMBOL, ROUGH_SYMBOL);
        assert_ne!(EMPTY_SYMBOL, HOLE_SYMBOL);
        assert_ne!(ROUGH_SYMBOL, HOLE_SYMBOL);
    }

    // Tests the reserved symbols stay outside the color alphabet
    #[test]
    fn test_reserved_symbols_are_not_colors() {
        for symbol in [EMPTY_SYMBOL, ROUGH_SYMBOL, HOLE_SYMBOL] {
            assert!(
                TileColor::from_symbol(symbol).is_none(),
                "'{symbol}' must not double as a color symbol"
            );
        }
    }

    // Tests limits and defaults are workable values
    #[test]
    fn test_limits_and_defaults_are_positive() {
        assert!(MAX_BOARD_DIMENSION >= 100);
        assert!(DEFAULT_MAX_AUTO_TILTS > 0);
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
        assert!(CELL_PIXEL_SIZE >= 2, "fixed-tile borders need interior pixels");
        assert!(!OUTPUT_SUFFIX.is_empty());
    }
}
