use crate::error::PuzzleError;

pub const MIN_DISKS: u32 = 2;
pub const MAX_DISKS: u32 = 5;
pub const DEFAULT_DISKS: u32 = 4;

/// Disk-count bounds the game offers to players. The puzzle state itself
/// accepts any positive count; front ends clamp through these rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    min_disks: u32,
    max_disks: u32,
    default_disks: u32,
}

impl GameRules {
    pub fn new(min_disks: u32, max_disks: u32, default_disks: u32) -> Result<Self, PuzzleError> {
        if min_disks == 0 {
            return Err(PuzzleError::InvalidConfiguration {
                disk_count: min_disks,
                reason: "minimum disk count must be positive",
            });
        }
        if max_disks < min_disks {
            return Err(PuzzleError::InvalidConfiguration {
                disk_count: max_disks,
                reason: "maximum disk count is below the minimum",
            });
        }
        if !(min_disks..=max_disks).contains(&default_disks) {
            return Err(PuzzleError::InvalidConfiguration {
                disk_count: default_disks,
                reason: "default disk count is outside the allowed range",
            });
        }
        Ok(Self {
            min_disks,
            max_disks,
            default_disks,
        })
    }

    pub fn min_disks(&self) -> u32 {
        self.min_disks
    }

    pub fn max_disks(&self) -> u32 {
        self.max_disks
    }

    pub fn default_disks(&self) -> u32 {
        self.default_disks
    }

    pub fn allows(&self, disk_count: u32) -> bool {
        (self.min_disks..=self.max_disks).contains(&disk_count)
    }

    pub fn clamp_disk_count(&self, disk_count: u32) -> u32 {
        disk_count.clamp(self.min_disks, self.max_disks)
    }

    pub fn validate_disk_count(&self, disk_count: u32) -> Result<u32, PuzzleError> {
        if self.allows(disk_count) {
            Ok(disk_count)
        } else {
            Err(PuzzleError::InvalidConfiguration {
                disk_count,
                reason: "disk count is outside the supported range",
            })
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_disks: MIN_DISKS,
            max_disks: MAX_DISKS,
            default_disks: DEFAULT_DISKS,
        }
    }
}

/// Fewest moves that solve `disk_count` disks (2^n - 1). Saturates.
pub fn min_moves(disk_count: u32) -> u64 {
    1u64.checked_shl(disk_count)
        .map_or(u64::MAX, |value| value - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_slider() {
        let rules = GameRules::default();
        assert_eq!(rules.min_disks(), 2);
        assert_eq!(rules.max_disks(), 5);
        assert_eq!(rules.default_disks(), 4);
    }

    #[test]
    fn clamp_to_bounds() {
        let rules = GameRules::default();
        assert_eq!(rules.clamp_disk_count(0), 2);
        assert_eq!(rules.clamp_disk_count(1), 2);
        assert_eq!(rules.clamp_disk_count(3), 3);
        assert_eq!(rules.clamp_disk_count(6), 5);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let rules = GameRules::default();
        assert_eq!(rules.validate_disk_count(5), Ok(5));
        assert!(rules.validate_disk_count(6).is_err());
        assert!(rules.validate_disk_count(1).is_err());
    }

    #[test]
    fn rules_constructor_checks_bounds() {
        assert!(GameRules::new(0, 5, 3).is_err());
        assert!(GameRules::new(4, 3, 3).is_err());
        assert!(GameRules::new(2, 5, 7).is_err());
        let rules = GameRules::new(1, 8, 1).unwrap();
        assert_eq!(rules.clamp_disk_count(0), 1);
    }

    #[test]
    fn min_moves_is_mersenne() {
        assert_eq!(min_moves(0), 0);
        assert_eq!(min_moves(3), 7);
        assert_eq!(min_moves(5), 31);
        assert_eq!(min_moves(64), u64::MAX);
    }
}
