use crate::model::ScoreDisplay;
use maud::{Markup, html};

pub fn score_with_shape(par: i32, strokes: i32) -> Markup {
    let (shape, color) = match ScoreDisplay::for_hole(par, strokes) {
        ScoreDisplay::DoubleCondor => ("◆", "double-condor"),
        ScoreDisplay::Condor => ("◆", "condor"),
        ScoreDisplay::Albatross => ("◆", "albatross"),
        ScoreDisplay::Eagle => ("◆", "eagle"),
        ScoreDisplay::Birdie => ("●", "birdie"),
        ScoreDisplay::Par => ("●", "par"),
        ScoreDisplay::Bogey => ("▲", "bogey"),
        ScoreDisplay::DoubleBogey => ("▲", "double-bogey"),
        ScoreDisplay::TripleBogey => ("▲", "triple-bogey"),
        ScoreDisplay::QuadrupleBogey => ("▲", "quadruple-bogey"),
        ScoreDisplay::QuintupleBogey => ("▲", "quintuple-bogey"),
        ScoreDisplay::SextupleBogey => ("▲", "sextuple-bogey"),
        ScoreDisplay::SeptupleBogey => ("▲", "septuple-bogey"),
        ScoreDisplay::OctupleBogey => ("▲", "octuple-bogey"),
        ScoreDisplay::NonupleBogey => ("▲", "nonuple-bogey"),
        ScoreDisplay::DodecupleBogey => ("▲", "dodecuple-bogey"),
    };

    html! {
        span class=(color) { (shape) " " (strokes) }
    }
}
