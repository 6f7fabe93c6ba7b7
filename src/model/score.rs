use serde::{Deserialize, Serialize};

use super::round::HoleScore;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    HoleInOne,
    DoubleCondor,
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
    QuintupleBogey,
    SextupleBogey,
    SeptupleBogey,
    OctupleBogey,
    NonupleBogey,
    DodecupleBogey,
}

impl ScoreDisplay {
    /// Classify a score relative to par (`strokes - par`).
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-5 => Self::DoubleCondor,
            -4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            4 => Self::QuadrupleBogey,
            5 => Self::QuintupleBogey,
            6 => Self::SextupleBogey,
            7 => Self::SeptupleBogey,
            8 => Self::OctupleBogey,
            9 => Self::NonupleBogey,
            10..=i32::MAX => Self::DodecupleBogey,
            _ => Self::Par,
        }
    }

    #[must_use]
    pub fn for_hole(score: &HoleScore) -> Option<Self> {
        let strokes = score.strokes?;
        if strokes == 1 {
            return Some(Self::HoleInOne);
        }
        Some(Self::from_i32(strokes - score.par))
    }

    /// Css class used by the scorecard view.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::HoleInOne => "hole-in-one",
            Self::DoubleCondor => "double-condor",
            Self::Condor => "condor",
            Self::Albatross => "albatross",
            Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogey => "double-bogey",
            Self::TripleBogey => "triple-bogey",
            Self::QuadrupleBogey => "quadruple-bogey",
            Self::QuintupleBogey => "quintuple-bogey",
            Self::SextupleBogey => "sextuple-bogey",
            Self::SeptupleBogey => "septuple-bogey",
            Self::OctupleBogey => "octuple-bogey",
            Self::NonupleBogey => "nonuple-bogey",
            Self::DodecupleBogey => "dodecuple-bogey",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScorecardTotals {
    /// Gross strokes on holes 1-9.
    pub out: i32,
    /// Gross strokes on holes 10-18.
    pub r#in: i32,
    pub total: i32,
    pub total_par: i32,
    /// Par of the holes that have a score posted.
    pub played_par: i32,
    pub holes_played: usize,
}

impl ScorecardTotals {
    #[must_use]
    pub fn from_sheet(sheet: &[HoleScore]) -> Self {
        let mut totals = Self::default();
        for (idx, score) in sheet.iter().enumerate() {
            totals.total_par += score.par;
            let Some(strokes) = score.strokes else {
                continue;
            };
            if idx < 9 {
                totals.out += strokes;
            } else {
                totals.r#in += strokes;
            }
            totals.total += strokes;
            totals.played_par += score.par;
            totals.holes_played += 1;
        }
        totals
    }

    /// Gross score relative to the par of the holes played.
    #[must_use]
    pub fn to_par(&self) -> i32 {
        self.total - self.played_par
    }
}

/// "E" for even, "+3" over, "-2" under.
#[must_use]
pub fn format_to_par(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}
