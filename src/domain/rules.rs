/// Conway's Game of Life (B3/S23).
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn conway(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Short rule notation for display
pub const RULE_NAME: &str = "B3/S23";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!conway(true, 0));
        assert!(!conway(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(conway(true, 2));
        assert!(conway(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!conway(true, n), "alive cell with {n} neighbors should die");
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(conway(false, 3));
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!conway(false, n), "dead cell with {n} neighbors should stay dead");
        }
    }
}
