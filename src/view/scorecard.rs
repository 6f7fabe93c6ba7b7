use maud::{Markup, html};

use crate::model::{Directory, HoleScore, Round, ScoreDisplay, ScorecardTotals, format_to_par};

pub fn score_with_shape(score: i32, disp: ScoreDisplay) -> Markup {
    let shape = match disp {
        ScoreDisplay::HoleInOne => "★",
        ScoreDisplay::DoubleCondor
        | ScoreDisplay::Condor
        | ScoreDisplay::Albatross
        | ScoreDisplay::Eagle => "◆",
        ScoreDisplay::Birdie | ScoreDisplay::Par => "●",
        _ => "▲",
    };

    html! {
        span class=(disp.css_class()) { (shape) " " (score) }
    }
}

fn hole_cell(score: &HoleScore) -> Markup {
    match (score.strokes, ScoreDisplay::for_hole(score)) {
        (Some(strokes), Some(disp)) => html! { td { (score_with_shape(strokes, disp)) } },
        _ => html! { td class="unplayed" { "-" } },
    }
}

fn net_cell(score: &HoleScore) -> Markup {
    html! {
        td class="net" {
            @match score.net_strokes {
                Some(net) => { (net) }
                None => { "-" }
            }
        }
    }
}

/// One row per sheet: holes 1-9, OUT, holes 10-18, IN, total and to-par.
#[must_use]
pub fn render_scorecard(round: &Round, directory: &Directory) -> Markup {
    html! {
        h3 { "Scorecard" }
        @for (entity_id, sheet) in &round.scores {
            @let totals = ScorecardTotals::from_sheet(sheet);
            table class="scorecard-table" data-entity=(entity_id) {
                thead {
                    tr {
                        th { (directory.entity_name(round, entity_id)) }
                        @for score in &sheet[..9] { th { (score.hole) } }
                        th { "OUT" }
                        @for score in &sheet[9..] { th { (score.hole) } }
                        th { "IN" }
                        th { "TOT" }
                        th { "+/-" }
                    }
                }
                tbody {
                    tr class="par-row" {
                        td { "Par" }
                        @for score in &sheet[..9] { td { (score.par) } }
                        td { (sheet[..9].iter().map(|s| s.par).sum::<i32>()) }
                        @for score in &sheet[9..] { td { (score.par) } }
                        td { (sheet[9..].iter().map(|s| s.par).sum::<i32>()) }
                        td { (totals.total_par) }
                        td {}
                    }
                    tr class="gross-row" {
                        td { "Gross" }
                        @for score in &sheet[..9] { (hole_cell(score)) }
                        td { (totals.out) }
                        @for score in &sheet[9..] { (hole_cell(score)) }
                        td { (totals.r#in) }
                        td { (totals.total) }
                        td {
                            @if totals.holes_played > 0 {
                                (format_to_par(totals.to_par()))
                            }
                        }
                    }
                    @if sheet.iter().any(|s| s.net_strokes.is_some()) {
                        tr class="net-row" {
                            td { "Net" }
                            @for score in &sheet[..9] { (net_cell(score)) }
                            td {}
                            @for score in &sheet[9..] { (net_cell(score)) }
                            td {}
                            td { (sheet.iter().filter_map(|s| s.net_strokes).sum::<i32>()) }
                            td {}
                        }
                    }
                }
            }
        }
    }
}
