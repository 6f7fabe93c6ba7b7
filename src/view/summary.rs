use maud::{DOCTYPE, Markup, html};

use super::scorecard::render_scorecard;
use crate::controller::leaderboard::{RoundSummary, summarize_round};
use crate::controller::score::match_status_text;
use crate::model::{Directory, GameFormat, Round, format_to_par};

#[must_use]
pub fn render_summary(summary: &RoundSummary) -> Markup {
    html! {
        h3 { "Standings" }
        @if summary.standings.is_empty() {
            p class="refresh" { "No complete scorecards yet." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Pos" }
                        th { "Name" }
                        th { "Gross" }
                        th { "Net" }
                        th { "To Par" }
                    }
                }
                tbody {
                    @for standing in &summary.standings {
                        @let row_class = if summary.winners.contains(&standing.entity_id) { "winner" } else { "" };
                        tr class=(row_class) {
                            td { (standing.position) }
                            td { (standing.name) }
                            td { (standing.gross) }
                            td { (standing.net) }
                            td { (format_to_par(standing.to_par)) }
                        }
                    }
                }
            }
        }

        @if let Some(text) = &summary.match_result {
            h3 { "Match" }
            p class="match-result" { (text) }
        }

        @if let Some(skins) = &summary.skins {
            h3 { "Skins" }
            table class="styled-table" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Skins" }
                        th { "Won" }
                    }
                }
                tbody {
                    @for total in &skins.totals {
                        tr {
                            td { (total.name) }
                            td { (total.skins_won) }
                            td { "$" (format!("{:.2}", total.total_value)) }
                        }
                    }
                }
            }
            @if skins.unclaimed_carryover > 0.0 {
                p class="carryover" {
                    "Unclaimed carryover: $" (format!("{:.2}", skins.unclaimed_carryover))
                }
            }
        }
    }
}

/// Full page for one round: scorecard, live match line and summary.
#[must_use]
pub fn render_round_page(round: &Round, directory: &Directory) -> Markup {
    let summary = summarize_round(round, directory);
    let title = directory
        .course(round.course_id)
        .map_or_else(|| round.id.clone(), |c| format!("{} - {}", c.name, round.game_format));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                h1 { (title) }
                p class="round-date" { (round.date.format("%Y-%m-%d").to_string()) }
                @if round.game_format == GameFormat::MatchPlay && !round.is_posted() {
                    p class="match-status" { (match_status_text(round)) }
                }
                (render_scorecard(round, directory))
                (render_summary(&summary))
                @if let Some(text) = &round.summary {
                    p class="posted" { "Posted: " (text) }
                }
            }
        }
    }
}
