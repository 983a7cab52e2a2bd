use crate::Level;

const MAX_SCORE: i32 = 23;

/// Self-assessment used to recommend an experience level.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Questionnaire {
    /// Years of consistent training.
    pub years: f32,
    pub sessions_per_week: u32,
    pub uses_compounds: bool,
    pub can_train_two_hours: bool,
    pub recovery: Recovery,
    /// Maximum number of consecutive pull-ups.
    pub pull_ups: u32,
    pub bench_ratio: BenchRatio,
    pub weekly_sets: WeeklySets,
    pub plans_periodization: bool,
    pub recent_progress: Progress,
    pub trains_in_gym: bool,
    pub updates_quarterly: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    Low,
    Medium,
    High,
}

/// One-repetition maximum in the bench press relative to body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchRatio {
    BelowHalf,
    HalfToThreeQuarters,
    ThreeQuartersToOne,
    OneOrMore,
}

/// Average number of weekly sets per major muscle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklySets {
    BelowSix,
    SixToTen,
    ElevenToFifteen,
    AboveFifteen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Improved,
    Same,
    Worse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub scores: Vec<(&'static str, i32)>,
    pub total: i32,
    pub level: Level,
}

impl Questionnaire {
    #[must_use]
    pub fn assess(&self) -> Assessment {
        let scores = vec![
            ("years", self.years_score()),
            ("sessions", self.sessions_score()),
            ("compounds", i32::from(self.uses_compounds)),
            ("two_hour_tolerance", i32::from(self.can_train_two_hours)),
            ("recovery", self.recovery_score()),
            ("pull_ups", self.pull_ups_score()),
            ("bench", self.bench_ratio as i32),
            ("weekly_sets", self.weekly_sets as i32),
            ("periodization", i32::from(self.plans_periodization)),
            (
                "recent_progress",
                i32::from(self.recent_progress == Progress::Improved),
            ),
            ("environment", i32::from(self.trains_in_gym)),
            ("quarterly_updates", i32::from(self.updates_quarterly)),
        ];
        let total = scores.iter().map(|(_, s)| s).sum::<i32>();
        Assessment {
            scores,
            total,
            level: recommend_level(total),
        }
    }

    fn years_score(&self) -> i32 {
        if self.years < 0.5 {
            0
        } else if self.years < 1.5 {
            1
        } else if self.years < 3.0 {
            2
        } else {
            3
        }
    }

    fn sessions_score(&self) -> i32 {
        match self.sessions_per_week {
            0..=2 => 0,
            3 => 1,
            4 => 2,
            5 => 3,
            _ => 4,
        }
    }

    fn recovery_score(&self) -> i32 {
        match self.recovery {
            Recovery::Low => -1,
            Recovery::Medium => 0,
            Recovery::High => 1,
        }
    }

    fn pull_ups_score(&self) -> i32 {
        match self.pull_ups {
            0 => 0,
            1..=2 => 1,
            3..=4 => 2,
            _ => 3,
        }
    }
}

/// Map a questionnaire total onto the levels 0 to 4.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn recommend_level(total: i32) -> Level {
    let normalized = f64::from(total.clamp(0, MAX_SCORE)) / f64::from(MAX_SCORE);
    Level::from(((normalized * 4.0).round_ties_even() as i32).clamp(0, 4))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn questionnaire() -> Questionnaire {
        Questionnaire {
            years: 1.0,
            sessions_per_week: 4,
            uses_compounds: true,
            can_train_two_hours: true,
            recovery: Recovery::Medium,
            pull_ups: 3,
            bench_ratio: BenchRatio::HalfToThreeQuarters,
            weekly_sets: WeeklySets::SixToTen,
            plans_periodization: false,
            recent_progress: Progress::Improved,
            trains_in_gym: false,
            updates_quarterly: true,
        }
    }

    #[rstest]
    #[case(-4, Level::BEGINNER)]
    #[case(0, Level::BEGINNER)]
    #[case(2, Level::BEGINNER)]
    #[case(3, Level::BASIC)]
    #[case(8, Level::BASIC)]
    #[case(9, Level::INTERMEDIATE)]
    #[case(14, Level::INTERMEDIATE)]
    #[case(16, Level::ADVANCED)]
    #[case(20, Level::ADVANCED)]
    #[case(21, Level::PROFESSIONAL)]
    #[case(23, Level::PROFESSIONAL)]
    #[case(30, Level::PROFESSIONAL)]
    fn test_recommend_level(#[case] total: i32, #[case] expected: Level) {
        assert_eq!(recommend_level(total), expected);
    }

    #[test]
    fn test_assess() {
        let assessment = questionnaire().assess();

        assert_eq!(
            assessment.scores,
            vec![
                ("years", 1),
                ("sessions", 2),
                ("compounds", 1),
                ("two_hour_tolerance", 1),
                ("recovery", 0),
                ("pull_ups", 2),
                ("bench", 1),
                ("weekly_sets", 1),
                ("periodization", 0),
                ("recent_progress", 1),
                ("environment", 0),
                ("quarterly_updates", 1),
            ]
        );
        assert_eq!(assessment.total, 11);
        assert_eq!(assessment.level, Level::INTERMEDIATE);
    }

    #[test]
    fn test_assess_minimum() {
        let assessment = Questionnaire {
            years: 0.0,
            sessions_per_week: 1,
            uses_compounds: false,
            can_train_two_hours: false,
            recovery: Recovery::Low,
            pull_ups: 0,
            bench_ratio: BenchRatio::BelowHalf,
            weekly_sets: WeeklySets::BelowSix,
            plans_periodization: false,
            recent_progress: Progress::Worse,
            trains_in_gym: false,
            updates_quarterly: false,
        }
        .assess();

        assert_eq!(assessment.total, -1);
        assert_eq!(assessment.level, Level::BEGINNER);
    }

    #[test]
    fn test_assess_maximum() {
        let assessment = Questionnaire {
            years: 10.0,
            sessions_per_week: 6,
            uses_compounds: true,
            can_train_two_hours: true,
            recovery: Recovery::High,
            pull_ups: 10,
            bench_ratio: BenchRatio::OneOrMore,
            weekly_sets: WeeklySets::AboveFifteen,
            plans_periodization: true,
            recent_progress: Progress::Improved,
            trains_in_gym: true,
            updates_quarterly: true,
        }
        .assess();

        assert_eq!(assessment.total, 23);
        assert_eq!(assessment.level, Level::PROFESSIONAL);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.5, 1)]
    #[case(1.5, 2)]
    #[case(2.9, 2)]
    #[case(3.0, 3)]
    fn test_years_score(#[case] years: f32, #[case] expected: i32) {
        assert_eq!(
            Questionnaire {
                years,
                ..questionnaire()
            }
            .years_score(),
            expected
        );
    }
}
